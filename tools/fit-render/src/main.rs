// Render scale-to-fit scenes from the command line.
//
// Usage:
//   fit-render render <scene> [--density D] [--config FILE] [--format svg|list] [-o FILE]
//   fit-render list-scenes

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use fit_render::{render_scene, resolve_config, write_output, Format};

#[derive(Parser)]
#[command(name = "fit-render")]
#[command(about = "Render scale-to-fit demo scenes", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a scene
    Render {
        /// Scene name (see `list-scenes`)
        scene: String,

        /// Display density; scales the fit cells and label text
        #[arg(short, long)]
        density: Option<f64>,

        /// TOML file with layout overrides
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "svg")]
        format: OutputFormat,

        /// Output file (stdout when omitted)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// List available scenes
    ListScenes,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum OutputFormat {
    Svg,
    List,
}

impl From<OutputFormat> for Format {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Svg => Format::Svg,
            OutputFormat::List => Format::List,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logger with default level (overridden by RUST_LOG)
    let env = Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(env).init();

    match cli.command {
        Commands::Render {
            scene,
            density,
            config,
            format,
            output,
        } => {
            let config = resolve_config(config.as_deref(), density)?;
            let rendered = render_scene(&scene, &config, format.into())?;
            write_output(&rendered, output.as_deref(), &mut std::io::stdout().lock())?;
        }
        Commands::ListScenes => {
            for name in scale_to_fit::scene::available_scenes() {
                println!("{name}");
            }
        }
    }
    Ok(())
}
