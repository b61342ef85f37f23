#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

mod errors;
mod generate;
mod geometry;
mod params;
mod truss;

pub use errors::{InputField, ParseMemberIdError, ValidationError, ValidationErrors};
pub use generate::{generate, EPSILON};
pub use geometry::{member, point, Member, Point};
pub use params::TrussParameters;
pub use truss::{MemberId, MemberKind, TrussGeometry};

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn it_works() {
        let truss = TrussParameters::default()
            .try_generate()
            .expect("default design is valid");
        assert_eq!(truss.member_count(), 1 + 14 + 15 + 14);
        assert_eq!(truss.bottom_chord, member(point(-10.0, 0.0), point(10.0, 0.0)));
    }
}
