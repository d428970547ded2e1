//! `load` subcommand: resolve values and print them as JSON

use crate::load::CliLoader;
use crate::manifest;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct LoadArgs {
    /// Path to the TOML manifest describing the registry
    #[arg(short, long)]
    manifest: PathBuf,

    /// Pre-register declared defaults so omission resolves silently
    #[arg(long)]
    generate_default: bool,

    /// Arguments to resolve, after a `--` separator
    #[arg(last = true)]
    args: Vec<String>,
}

pub fn run(args: LoadArgs) -> Result<()> {
    let db = manifest::load_manifest(&args.manifest)?;
    let loader = CliLoader::new(args.generate_default);

    // Usage errors terminate the process with their carried status (2 for
    // bad input, 0 for help) after emitting the diagnostic.
    let resolved = match loader.load(&db, args.args) {
        Ok(resolved) => resolved,
        Err(usage) => usage.exit(),
    };

    println!("{}", serde_json::to_string_pretty(&resolved)?);
    Ok(())
}
