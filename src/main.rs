mod report;

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use howetruss::{MemberId, TrussParameters};
use report::{render_errors, render_member, render_summary};
use tracing_subscriber::EnvFilter;

/// Generate the member layout of a Double-Howe truss.
#[derive(Debug, Parser)]
#[command(name = "howetruss", version, about, long_about = None)]
struct Cli {
    /// Overall truss width in metres.
    #[arg(long, default_value_t = TrussParameters::default().width, allow_negative_numbers = true)]
    width: f64,
    /// Roof pitch in degrees.
    #[arg(long, default_value_t = TrussParameters::default().pitch_degrees, allow_negative_numbers = true)]
    pitch: f64,
    /// Largest allowed spacing between vertical members in metres.
    #[arg(long, default_value_t = TrussParameters::default().max_vertical_spacing, allow_negative_numbers = true)]
    max_spacing: f64,
    /// Member cross-section size in millimetres.
    #[arg(long, default_value_t = TrussParameters::default().member_size, allow_negative_numbers = true)]
    member_size: f64,
    /// Print the geometry as JSON instead of a text report.
    #[arg(long)]
    json: bool,
    /// Show the coordinates of one member, e.g. `top:3` or `diagonal:0`.
    #[arg(long)]
    member: Option<MemberId>,
}

impl Cli {
    /// Collect the design inputs from the parsed arguments.
    fn parameters(&self) -> TrussParameters {
        TrussParameters::new()
            .with_width(self.width)
            .with_pitch_degrees(self.pitch)
            .with_max_vertical_spacing(self.max_spacing)
            .with_member_size(self.member_size)
    }
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let params = cli.parameters();

    // Invalid inputs are reported field by field and the generator is skipped.
    let truss = match params.try_generate() {
        Ok(truss) => truss,
        Err(errors) => {
            eprint!("{}", render_errors(&errors));
            return Ok(ExitCode::FAILURE);
        }
    };

    if let Some(id) = cli.member {
        let Some(member) = truss.member(id) else {
            return Err(format!(
                "member {id} does not exist in a truss with {} panels",
                truss.panel_count()
            )
            .into());
        };
        print!("{}", render_member(&member));
        return Ok(ExitCode::SUCCESS);
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&truss)?);
    } else {
        print!("{}", render_summary(&params, &truss));
    }

    Ok(ExitCode::SUCCESS)
}
