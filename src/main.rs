use clap::{Parser, Subcommand};
use std::path::PathBuf;
use storeframe::{compose, config, manifest, output};

#[derive(Parser)]
#[command(name = "storeframe")]
#[command(about = "Compose storefront listing images from raw screenshots")]
#[command(long_about = "\
Compose storefront listing images from raw screenshots

Each manifest entry takes one raw screenshot and produces one opaque
1280x800 PNG: the screenshot gets rounded corners and a soft drop shadow,
is scaled onto a gradient background, and is annotated with an optional
title + word-wrapped subtitle beside it.

Manifest format (storeframe.json):

  {
    \"entries\": [
      {
        \"input\": \"popup-dark.png\",
        \"output\": \"1-popup-dark.png\",
        \"caption\": { \"title\": \"Dark Theme\",
                     \"subtitle\": \"Manage search engines with a sleek dark interface\" },
        \"side\": \"right\"
      }
    ]
  }

A caption may also be a bare string (title only); \"side\" defaults to
\"right\". Missing input files are warnings, not failures.

Run 'storeframe gen-manifest' for a stock manifest and
'storeframe gen-config' for a documented style config.toml.")]
#[command(version)]
struct Cli {
    /// Directory containing raw screenshots
    #[arg(long, default_value = "screenshots", global = true)]
    source: PathBuf,

    /// Directory for composed listing images
    #[arg(long, default_value = "screenshots/store-listing", global = true)]
    output: PathBuf,

    /// Batch manifest file
    #[arg(long, default_value = "storeframe.json", global = true)]
    manifest: PathBuf,

    /// Optional style config.toml (stock defaults when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compose every manifest entry into a listing image
    Compose {
        /// Process entries one at a time instead of in parallel
        #[arg(long)]
        sequential: bool,
    },
    /// Validate the manifest and input files without composing
    Check,
    /// Print a stock manifest to start from
    GenManifest,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Compose { sequential } => {
            let style = load_style(cli.config.as_deref())?;
            let batch = manifest::Manifest::load(&cli.manifest)?;

            let (tx, rx) = std::sync::mpsc::channel();
            let printer = std::thread::spawn(move || {
                for event in rx {
                    output::print_compose_event(&event);
                }
            });
            let summary = compose::run_batch(
                &batch,
                &style,
                &cli.source,
                &cli.output,
                !sequential,
                Some(tx),
            )?;
            printer.join().expect("printer thread panicked");
            output::print_summary(&summary, &style, &cli.output);
        }
        Command::Check => {
            // Validate the config file too, when one is given
            if let Some(path) = cli.config.as_deref() {
                config::StyleConfig::load(path)?;
            }
            let batch = manifest::Manifest::load(&cli.manifest)?;
            println!("==> Checking {}", cli.manifest.display());
            output::print_check_output(&batch, &cli.source);
        }
        Command::GenManifest => {
            println!("{}", manifest::stock_manifest_json());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load the style config from `--config`, or fall back to stock defaults.
fn load_style(path: Option<&std::path::Path>) -> Result<config::StyleConfig, config::ConfigError> {
    match path {
        Some(path) => config::StyleConfig::load(path),
        None => Ok(config::StyleConfig::default()),
    }
}
