//! `show` subcommand: print a manifest's registry

use crate::manifest;
use crate::registry::Parameter;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct ShowArgs {
    /// Path to the TOML manifest describing the registry
    #[arg(short, long)]
    manifest: PathBuf,
}

pub fn run(args: ShowArgs) -> Result<()> {
    let db = manifest::load_manifest(&args.manifest)?;

    println!("Program: {}", db.prog());
    if let Some(description) = db.description() {
        println!("Description: {description}");
    }
    println!("Parameters: {}", db.parameters().len());
    for param in db.parameters() {
        println!("  {}", describe(param));
    }
    Ok(())
}

fn describe(param: &Parameter) -> String {
    let mut parts = vec![param.name().to_string()];
    if let Some(default) = param.default_value() {
        parts.push(format!("default={default}"));
    }
    if let Some(choices) = param.choices() {
        let listed: Vec<String> = choices.iter().map(ToString::to_string).collect();
        parts.push(format!("choices=[{}]", listed.join(", ")));
    }
    if let Some(opts) = param.cli_opts() {
        if !opts.flags().is_empty() {
            let listed: Vec<String> = opts.flags().iter().map(ToString::to_string).collect();
            parts.push(format!("flags=[{}]", listed.join(", ")));
        }
        if let Some(action) = opts.action() {
            parts.push(format!("action={action:?}"));
        }
    }
    parts.join("  ")
}
