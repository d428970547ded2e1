//! paramdb: materialize configuration parameters from command-line arguments
//!
//! This binary reads a declarative TOML manifest describing a parameter
//! registry and resolves values from an argument list, printing them as JSON.

use anyhow::Result;

fn main() -> Result<()> {
    paramdb::cli::run()
}
