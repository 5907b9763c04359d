use clap::{Parser, Subcommand};
use nova_extract::{extract, locate, output};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "nova-extract")]
#[command(about = "Recover wallpapers from the N0vaDesktop media cache")]
#[command(long_about = "\
Recover wallpapers from the N0vaDesktop media cache

N0vaDesktop caches every downloaded asset as an extension-less blob under
<install dir>/N0vaDesktopCache/game/. Each blob is classified by its byte
content and written back out with its real extension:

  PNG           → <name>.png   (signature prefix \\x89PNG)
  JPEG          → <name>.jpg   (SOI at start, EOI at end)
  live wallpaper → <name>.mp4  (headerless; 2-byte cache prefix stripped)

Blobs measuring exactly 480*270 are the app's placeholder previews and are
skipped. Unrecognized or truncated blobs are reported and skipped — a bad
entry never aborts the run.

The cache directory is found from --source, the N0VA_DESKTOP_PATH environment
variable, or the conventional install locations, in that order.")]
#[command(version = version_string())]
struct Cli {
    /// Cache directory (default: auto-detected N0vaDesktop install)
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    /// Output directory, deleted and recreated on extract
    #[arg(long, default_value = "n0va_output", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract all cache assets into the output directory
    Extract {
        /// Also write report.json with per-asset outcomes
        #[arg(long)]
        report: bool,
    },
    /// Classify cache assets without writing anything
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let source = locate::locate_cache(cli.source.as_deref())?;

    match cli.command {
        Command::Extract { report } => {
            println!("==> Extracting {}", source.display());
            let result = extract::extract(&source, &cli.output)?;
            output::print_extract_output(&result);
            if report {
                let report_path = cli.output.join("report.json");
                let json = serde_json::to_string_pretty(&result)?;
                std::fs::write(&report_path, json)?;
                println!("Report: {}", report_path.display());
            }
            println!("==> Output: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", source.display());
            let result = extract::check(&source)?;
            output::print_check_output(&result);
        }
    }

    Ok(())
}
