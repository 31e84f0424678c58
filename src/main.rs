//! Rosette CLI
//!
//! Usage:
//!   rosette lissajous <X_CYCLES> <Y_CYCLES> <DIAMETER> <PHASE>
//!   rosette wedge <START> <END> <DIAMETER>
//!   rosette segments <FILE> <DIAMETER>
//!   rosette polar

use std::fs;
use std::path::PathBuf;

use chrono::Local;
use clap::{Parser, Subcommand};

use rosette::{lissajous_svg, polar_plot, segments_svg, wedge_svg, Error};

#[derive(Parser)]
#[command(name = "rosette")]
#[command(about = "Generate Lissajous figures and Foucault-pendulum rosettes")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Draw a Lissajous figure
    Lissajous {
        /// Number of cycles on the x axis
        x_cycles: i32,
        /// Number of cycles on the y axis
        y_cycles: i32,
        /// Diameter of the circle enclosing the figure at its corners
        diameter: i32,
        /// Rotational phase of the figure, in degrees
        phase: i32,
    },
    /// Draw a single rosette wedge between two spoke angles
    Wedge {
        /// Start spoke angle in multiples of 30 degrees, range -6 to +6
        start: i32,
        /// End spoke angle in multiples of 30 degrees
        end: i32,
        /// Outer diameter of the circle surrounding the shape
        diameter: i32,
    },
    /// Draw a segmented rosette from a segment description file
    Segments {
        /// Path to the segment description file
        file: PathBuf,
        /// Outer diameter of the circle surrounding the shape
        diameter: i32,
    },
    /// Write the diagnostic polar plot to polar.jpg
    Polar,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), Error> {
    match command {
        Command::Lissajous {
            x_cycles,
            y_cycles,
            diameter,
            phase,
        } => write_svg(lissajous_svg(x_cycles, y_cycles, diameter, phase)),
        Command::Wedge {
            start,
            end,
            diameter,
        } => write_svg(wedge_svg(start, end, diameter)),
        Command::Segments { file, diameter } => {
            let source = fs::read_to_string(file)?;
            write_svg(segments_svg(&source, diameter))
        }
        Command::Polar => {
            polar_plot().save("polar.jpg")?;
            Ok(())
        }
    }
}

/// Write an SVG document to a file named after the current wall-clock time.
fn write_svg(svg: String) -> Result<(), Error> {
    let name = Local::now().format("%H%M%S").to_string();
    fs::write(format!("{name}.svg"), svg)?;
    Ok(())
}
