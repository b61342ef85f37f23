use std::fmt::Write;

use howetruss::{Member, MemberKind, TrussGeometry, TrussParameters, ValidationErrors};

/// Render a textual summary of a generated truss.
///
/// The header restates the inputs and the derived panel layout, then every
/// member is listed with its identifier so it can be passed back through
/// `--member`.
#[must_use]
pub fn render_summary(params: &TrussParameters, truss: &TrussGeometry) -> String {
    let mut output = String::new();

    writeln!(
        &mut output,
        "Double-Howe truss (width = {:.2} m, pitch = {:.1} deg, max spacing = {:.2} m)",
        params.width, params.pitch_degrees, params.max_vertical_spacing
    )
    .expect("writing to string cannot fail");

    // The actual spacing is usually tighter than requested because the span is
    // divided into whole panels.
    let panel_width = truss.top_chords.first().map_or(0.0, |chord| {
        (chord.end.x - chord.start.x).abs()
    });
    writeln!(
        &mut output,
        "Panels: {} x {:.4} m, apex height = {:.4} m, member size = {:.0} mm",
        truss.panel_count(),
        panel_width,
        truss.apex_height(),
        params.member_size
    )
    .expect("writing to string cannot fail");

    writeln!(
        &mut output,
        "Members: 1 bottom chord, {} top chords, {} verticals, {} diagonals",
        truss.top_chords.len(),
        truss.vertical_members.len(),
        truss.diagonal_members.len()
    )
    .expect("writing to string cannot fail");

    let mut current = None;
    for (id, member) in truss.members() {
        if current != Some(id.kind) {
            current = Some(id.kind);
            writeln!(&mut output, "\n{}:", heading(id.kind)).expect("writing to string cannot fail");
        }
        writeln!(
            &mut output,
            "  {:<12} ({:+.2}, {:+.2}) -> ({:+.2}, {:+.2})  length {:.3} m",
            id.to_string(),
            member.start.x,
            member.start.y,
            member.end.x,
            member.end.y,
            member.length()
        )
        .expect("writing to string cannot fail");
    }

    output
}

/// Render the coordinates of a single member.
#[must_use]
pub fn render_member(member: &Member) -> String {
    format!(
        "Member Coordinates\nStart: ({:.2}, {:.2})\nEnd: ({:.2}, {:.2})\n",
        member.start.x, member.start.y, member.end.x, member.end.y
    )
}

/// Render one line per rejected input followed by a closing hint.
#[must_use]
pub fn render_errors(errors: &ValidationErrors) -> String {
    let mut output = String::new();
    for error in errors {
        writeln!(&mut output, "{}: {error}", error.field()).expect("writing to string cannot fail");
    }
    output.push_str("Please fix the errors above to see the truss preview.\n");
    output
}

/// Section title for a member kind.
fn heading(kind: MemberKind) -> &'static str {
    match kind {
        MemberKind::BottomChord => "Bottom chord",
        MemberKind::TopChord => "Top chords",
        MemberKind::Vertical => "Vertical members",
        MemberKind::Diagonal => "Diagonal members",
    }
}
