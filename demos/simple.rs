use howetruss::{MemberId, MemberKind, TrussParameters};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Describe a 12 m span with a 25 degree roof and posts at most 2 m apart
    let params = TrussParameters::new()
        .with_width(12.0)
        .with_pitch_degrees(25.0)
        .with_max_vertical_spacing(2.0);

    // Validate the inputs and lay out the members
    let truss = params.try_generate()?;
    println!(
        "{} panels, apex {:.3} m, {} members",
        truss.panel_count(),
        truss.apex_height(),
        truss.member_count()
    );

    // Pick out the first left-hand diagonal by its identifier
    let id = MemberId::new(MemberKind::Diagonal, 0);
    if let Some(diagonal) = truss.member(id) {
        println!(
            "{id}: ({:.2}, {:.2}) -> ({:.2}, {:.2}), length {:.3} m",
            diagonal.start.x,
            diagonal.start.y,
            diagonal.end.x,
            diagonal.end.y,
            diagonal.length()
        );
    }

    // All done
    Ok(())
}
