use clap::{Parser, Subcommand};
use iconsmith::config::{self, CliConfig};
use iconsmith::{FitMode, Rectangle, SizeSet, batch, codec, imaging};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "iconsmith")]
#[command(about = "Crop, matte, resize, and icon-set export for raster images")]
#[command(long_about = "\
Crop, matte, resize, and icon-set export for raster images

Input can be PNG, JPEG, or WebP; output is always PNG, the one format that
keeps the alpha channel the pipeline produces. Typical flow:

  iconsmith crop   logo.png cropped.png --left 40 --top 40 --width 800 --height 800
  iconsmith matte  cropped.png clear.png
  iconsmith icons  clear.png out/

Defaults for threshold, icon sizes, and fit mode come from iconsmith.toml in
the working directory when present. Run 'iconsmith gen-config' to print a
documented stock config.")]
#[command(version)]
struct Cli {
    /// Config file (default: ./iconsmith.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract a pixel-exact sub-rectangle
    Crop {
        input: PathBuf,
        output: PathBuf,
        #[arg(long)]
        left: u32,
        #[arg(long)]
        top: u32,
        #[arg(long)]
        width: u32,
        #[arg(long)]
        height: u32,
    },
    /// Turn near-white pixels transparent
    Matte {
        input: PathBuf,
        output: PathBuf,
        /// Near-white threshold, 0-255 (default from config)
        #[arg(long)]
        threshold: Option<u8>,
    },
    /// Resample to a target size
    Resize {
        input: PathBuf,
        output: PathBuf,
        #[arg(long)]
        width: u32,
        #[arg(long)]
        height: u32,
        /// Fit policy (default from config)
        #[arg(long, value_enum)]
        mode: Option<FitMode>,
    },
    /// Export a full icon set into a directory
    Icons {
        input: PathBuf,
        /// Output directory; one <stem>-<edge>.png per size plus manifest.json
        output_dir: PathBuf,
        /// Comma-separated square edges (default from config)
        #[arg(long, value_delimiter = ',')]
        sizes: Option<Vec<u32>>,
        #[arg(long, value_enum)]
        mode: Option<FitMode>,
    },
    /// Print a stock iconsmith.toml with all options documented
    GenConfig,
}

/// One line of the machine-readable icon manifest.
#[derive(Serialize)]
struct ManifestEntry {
    file: String,
    width: u32,
    height: u32,
    bytes: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::load_or_default(Path::new("."))?,
    };

    match cli.command {
        Command::Crop {
            input,
            output,
            left,
            top,
            width,
            height,
        } => {
            let source = codec::decode_file(&input)?;
            let cropped = imaging::crop(&source, Rectangle::new(left, top, width, height))?;
            codec::write_png(&cropped, &output)?;
            println!(
                "{} → {} ({}x{})",
                input.display(),
                output.display(),
                width,
                height
            );
        }
        Command::Matte {
            input,
            output,
            threshold,
        } => {
            let threshold = threshold.unwrap_or(config.matte_threshold);
            let source = codec::decode_file(&input)?;
            let matted = imaging::remove_near_white(&source, threshold);
            codec::write_png(&matted, &output)?;
            println!(
                "{} → {} (threshold {})",
                input.display(),
                output.display(),
                threshold
            );
        }
        Command::Resize {
            input,
            output,
            width,
            height,
            mode,
        } => {
            let mode = mode.unwrap_or(config.fit_mode);
            let source = codec::decode_file(&input)?;
            let resized = imaging::resample(&source, width, height, mode)?;
            codec::write_png(&resized, &output)?;
            println!(
                "{} → {} ({}x{}, {:?})",
                input.display(),
                output.display(),
                width,
                height,
                mode
            );
        }
        Command::Icons {
            input,
            output_dir,
            sizes,
            mode,
        } => {
            init_thread_pool(&config);
            let mode = mode.unwrap_or(config.fit_mode);
            let edges = sizes.unwrap_or_else(|| config.icon_sizes.clone());
            let size_set = SizeSet::squares(&edges);

            let source = codec::decode_file(&input)?;
            let results = batch::generate_set(&source, &size_set, mode)?;

            std::fs::create_dir_all(&output_dir)?;
            let stem = input
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("icon")
                .to_string();

            let mut manifest = Vec::with_capacity(results.len());
            for result in &results {
                let name = format!("{}-{}.png", stem, result.width);
                std::fs::write(output_dir.join(&name), &result.png)?;
                println!("  {} ({}x{})", name, result.width, result.height);
                manifest.push(ManifestEntry {
                    file: name,
                    width: result.width,
                    height: result.height,
                    bytes: result.png.len(),
                });
            }
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(output_dir.join("manifest.json"), json)?;
            println!(
                "{} variants → {}",
                results.len(),
                output_dir.display()
            );
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Initialize the rayon thread pool from config.
///
/// User can constrain down, not up — absent means one worker per core.
fn init_thread_pool(config: &CliConfig) {
    if let Some(threads) = config.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .ok();
    }
}
