//! soulzip — lossless archival container for scanned pages.
//!
//! Packs a page image and its extracted text into a compressed,
//! integrity-verifiable `.soulzip` seed, reconstructs the originals, and
//! verifies reconstructions against the manifest's digests.
//!
//! stdout carries command payloads (JSON); all log output goes to stderr.

mod exit_codes;

use clap::{Args, Parser, Subcommand};
use exit_codes::ExitStatus;
use serde_json::json;
use std::io::Read;
use std::path::PathBuf;
use sz_archive::SeedManifest;
use sz_meta::{ArchetypeProvider, LayoutStore};
use tracing_subscriber::EnvFilter;

/// Lossless page archive packer and verifier.
#[derive(Parser)]
#[command(name = "soulzip")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands.
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress log output (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack a page asset and its extracted text into a .soulzip seed
    Pack(PackArgs),

    /// Reconstruct the original files from a seed
    Unpack(UnpackArgs),

    /// Verify reconstructed files against a manifest's digests
    Validate(ValidateArgs),
}

#[derive(Args)]
struct PackArgs {
    /// Page asset (e.g. scanned image)
    asset: PathBuf,

    /// Extracted text for the page
    text: PathBuf,

    /// Seed output path
    #[arg(short, long)]
    output: PathBuf,

    /// Layout archetype dictionary file
    #[arg(long, default_value = "data/layout/archetypes.json")]
    layout_dict: PathBuf,
}

#[derive(Args)]
struct UnpackArgs {
    /// Seed file to unpack
    archive: PathBuf,

    /// Directory to reconstruct into (created if absent)
    #[arg(short, long)]
    output_dir: PathBuf,
}

#[derive(Args)]
struct ValidateArgs {
    /// Manifest JSON path, or `-` to read it from stdin
    #[arg(long)]
    manifest: String,

    /// Reconstructed asset file
    asset: PathBuf,

    /// Reconstructed text file
    text: PathBuf,
}

fn init_logging(opts: &GlobalOpts) {
    let default_level = if opts.quiet {
        "error"
    } else {
        match opts.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<ExitStatus, Box<dyn std::error::Error>> {
    match command {
        Commands::Pack(args) => {
            let mut store = LayoutStore::open(&args.layout_dict)?;
            store.seed_defaults();
            store.save()?;

            let provider = ArchetypeProvider::new(&store);
            let report = sz_archive::pack(&args.asset, &args.text, &provider, &args.output)?;

            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "archive_path": report.archive_path,
                    "bundle_bytes": report.bundle_bytes,
                    "compressed_bytes": report.compressed_bytes,
                    "ratio": report.ratio(),
                }))?
            );
            Ok(ExitStatus::Success)
        }

        Commands::Unpack(args) => {
            let outcome = sz_archive::unpack(&args.archive, &args.output_dir)?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
            Ok(ExitStatus::Success)
        }

        Commands::Validate(args) => {
            let manifest_json = if args.manifest == "-" {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            } else {
                std::fs::read_to_string(&args.manifest)?
            };
            let manifest = SeedManifest::from_json(&manifest_json)?;

            let report = sz_archive::validate(&manifest, &args.asset, &args.text)?;
            println!("{}", serde_json::to_string_pretty(&report)?);

            Ok(if report.is_lossless() {
                ExitStatus::Success
            } else {
                ExitStatus::IntegrityMismatch
            })
        }
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.global);

    match run(cli.command) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("error: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitStatus::Failure.into()
        }
    }
}
