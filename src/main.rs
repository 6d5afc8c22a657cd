use anyhow::Result;
use clap::{Parser, Subcommand};
use shelfkit::commands::{self, Overrides};
use shelfkit::{init_logging, OutputFormat};
use std::path::PathBuf;

/// Slanted display shelf generator
///
/// Produces finger-jointed panels for laser cutting.
#[derive(Parser)]
#[command(name = "shelfkit")]
#[command(about = "Generate cut files for a slanted display shelf", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct ShelfArgs {
    /// Project file (.toml or .json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of shelves
    #[arg(long)]
    num: Option<u32>,

    /// Shelf incline in degrees (negative leans backwards)
    #[arg(long, allow_hyphen_values = true)]
    angle: Option<f64>,

    /// Material thickness, in the project's units (fractions like 1/8 in imperial)
    #[arg(long)]
    thickness: Option<String>,

    /// Height of the lip in front of each shelf, in the project's units (0 for none)
    #[arg(long)]
    front_wall_height: Option<String>,

    /// Add a back panel
    #[arg(long, overrides_with = "no_include_back")]
    include_back: bool,

    /// Leave the back panel out even if the project asks for one
    #[arg(long, overrides_with = "include_back")]
    no_include_back: bool,

    /// Cut the top-front corner of the sides along the shelf incline
    #[arg(long, overrides_with = "no_slope_top")]
    slope_top: bool,

    /// Keep the sides rectangular even if the project asks for a sloped top
    #[arg(long, overrides_with = "slope_top")]
    no_slope_top: bool,
}

/// `Some(true)` for `--flag`, `Some(false)` for `--no-flag`, else the project's value.
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl ShelfArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            num: self.num,
            angle: self.angle,
            thickness: self.thickness.clone(),
            front_wall_height: self.front_wall_height.clone(),
            include_back: switch(self.include_back, self.no_include_back),
            slope_top: switch(self.slope_top, self.no_slope_top),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a cut file
    Generate {
        #[command(flatten)]
        shelf: ShelfArgs,

        /// Output format (gcode, svg or dxf)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a default project file
    Init {
        /// Where to write it (defaults to the user config directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the derived geometry and panel list
    Summary {
        #[command(flatten)]
        shelf: ShelfArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        Commands::Generate {
            shelf,
            format,
            output,
        } => commands::generate(
            shelf.config.as_deref(),
            format,
            output.as_deref(),
            &shelf.overrides(),
        ),
        Commands::Init { output, force } => {
            let path = commands::init(output.as_deref(), force)?;
            println!("{}", path.display());
            Ok(())
        }
        Commands::Summary { shelf } => {
            let summary = commands::summary(shelf.config.as_deref(), &shelf.overrides())?;
            print!("{summary}");
            Ok(())
        }
    }
}
