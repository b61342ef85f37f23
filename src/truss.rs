//! Generated truss layouts and stable member identifiers.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use petgraph::graph::{Graph, NodeIndex};
use serde::{Deserialize, Serialize};

use crate::errors::ParseMemberIdError;
use crate::geometry::{Member, Point};

/// The role a member plays in the truss.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MemberKind {
    /// The single member along the base of the truss.
    BottomChord,
    /// A roof-line segment spanning one panel.
    TopChord,
    /// A post at a panel boundary.
    Vertical,
    /// A brace across a panel.
    Diagonal,
}

impl MemberKind {
    /// All kinds in the order their members are enumerated.
    pub const ALL: [Self; 4] = [
        Self::BottomChord,
        Self::TopChord,
        Self::Vertical,
        Self::Diagonal,
    ];

    /// Short name used when formatting a [`MemberId`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BottomChord => "bottom",
            Self::TopChord => "top",
            Self::Vertical => "vertical",
            Self::Diagonal => "diagonal",
        }
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MemberKind {
    type Err = ParseMemberIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseMemberIdError::UnknownKind(s.to_owned()))
    }
}

/// Stable identity of a member within one [`TrussGeometry`].
///
/// The identifier is assigned at generation time, so two members with equal
/// coordinates (for example the zero-length end posts) remain distinguishable.
///
/// # Examples
/// ```
/// use howetruss::{MemberId, MemberKind};
///
/// let id: MemberId = "top:3".parse().expect("valid id");
/// assert_eq!(id, MemberId::new(MemberKind::TopChord, 3));
/// assert_eq!(id.to_string(), "top:3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MemberId {
    /// Which sequence the member belongs to.
    pub kind: MemberKind,
    /// Position within that sequence.
    pub index: usize,
}

impl MemberId {
    /// Create an identifier from its parts.
    #[must_use]
    pub const fn new(kind: MemberKind, index: usize) -> Self {
        Self { kind, index }
    }

    /// Identifier of the bottom chord.
    #[must_use]
    pub const fn bottom_chord() -> Self {
        Self::new(MemberKind::BottomChord, 0)
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.index)
    }
}

impl FromStr for MemberId {
    type Err = ParseMemberIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, index) = s
            .split_once(':')
            .ok_or_else(|| ParseMemberIdError::MissingSeparator(s.to_owned()))?;
        let kind = kind.trim().parse()?;
        let index = index
            .trim()
            .parse()
            .map_err(|_| ParseMemberIdError::InvalidIndex(index.to_owned()))?;
        Ok(Self::new(kind, index))
    }
}

/// Complete member layout of a Double-Howe truss.
///
/// Produced by [`generate`](crate::generate). The geometry is plain owned data;
/// nothing is cached or shared between calls.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrussGeometry {
    /// Single member spanning the full width at `y = 0`.
    pub bottom_chord: Member,
    /// Roof-line segments from left to right, one per panel.
    pub top_chords: Vec<Member>,
    /// Posts from each bottom node up to the matching top node, left to right.
    pub vertical_members: Vec<Member>,
    /// Braces in left/right mirrored pairs, working inwards from both ends.
    pub diagonal_members: Vec<Member>,
}

impl TrussGeometry {
    /// Number of panels the span is divided into.
    #[must_use]
    pub fn panel_count(&self) -> usize {
        self.top_chords.len()
    }

    /// Total number of members of every kind.
    #[must_use]
    pub fn member_count(&self) -> usize {
        1 + self.top_chords.len() + self.vertical_members.len() + self.diagonal_members.len()
    }

    /// Highest point of the roof line in metres.
    #[must_use]
    pub fn apex_height(&self) -> f64 {
        self.top_chords
            .iter()
            .flat_map(|chord| [chord.start.y, chord.end.y])
            .fold(0.0, f64::max)
    }

    /// The members of one kind, in generation order.
    #[must_use]
    pub fn members_of(&self, kind: MemberKind) -> &[Member] {
        match kind {
            MemberKind::BottomChord => std::slice::from_ref(&self.bottom_chord),
            MemberKind::TopChord => &self.top_chords,
            MemberKind::Vertical => &self.vertical_members,
            MemberKind::Diagonal => &self.diagonal_members,
        }
    }

    /// Iterate over every member with its identifier.
    ///
    /// Members come out as bottom chord, top chords, verticals, then diagonals.
    pub fn members(&self) -> impl Iterator<Item = (MemberId, Member)> + '_ {
        MemberKind::ALL.into_iter().flat_map(move |kind| {
            self.members_of(kind)
                .iter()
                .enumerate()
                .map(move |(index, member)| (MemberId::new(kind, index), *member))
        })
    }

    /// Look up a member by identifier.
    ///
    /// # Examples
    /// ```
    /// use howetruss::{generate, MemberId, MemberKind};
    ///
    /// let truss = generate(20.0, 17.0, 1.5);
    /// assert!(truss.member(MemberId::new(MemberKind::Vertical, 14)).is_some());
    /// assert!(truss.member(MemberId::new(MemberKind::Vertical, 15)).is_none());
    /// ```
    #[must_use]
    pub fn member(&self, id: MemberId) -> Option<Member> {
        self.members_of(id.kind).get(id.index).copied()
    }

    /// Find the member whose endpoints are exactly `start` and `end`, in that order.
    ///
    /// When several members share the same endpoints the first one in
    /// [`members`](Self::members) order wins.
    #[must_use]
    pub fn find_member(&self, start: Point, end: Point) -> Option<MemberId> {
        self.members()
            .find(|(_, member)| member.start == start && member.end == end)
            .map(|(id, _)| id)
    }

    /// Build a graph with one node per distinct joint and one edge per member.
    ///
    /// Joints are merged when their coordinates are exactly equal. Each edge runs
    /// from the member's start joint to its end joint and carries its identifier.
    #[must_use]
    pub fn joint_graph(&self) -> Graph<Point, MemberId> {
        let mut graph = Graph::new();
        let mut joints: HashMap<(u64, u64), NodeIndex> = HashMap::new();
        let mut joint = |graph: &mut Graph<Point, MemberId>, position: Point| {
            // Adding zero folds -0.0 into 0.0 so both hash alike.
            let key = ((position.x + 0.0).to_bits(), (position.y + 0.0).to_bits());
            *joints
                .entry(key)
                .or_insert_with(|| graph.add_node(position))
        };
        for (id, member) in self.members() {
            let start = joint(&mut graph, member.start);
            let end = joint(&mut graph, member.end);
            graph.add_edge(start, end, id);
        }
        graph
    }
}
