//! Declarative TOML manifests describing a parameter registry
//!
//! The binary's input format: program identity plus a `[[param]]` table per
//! parameter. Scalars (string, integer, boolean) map onto runtime values;
//! anything else is rejected with a contextual error.

use crate::registry::{CliAction, CliOpts, Database, Parameter};
use crate::value::{Convert, Value};
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestDoc {
    prog: String,
    description: Option<String>,
    #[serde(default, rename = "param")]
    params: Vec<ParamDoc>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ParamDoc {
    name: String,
    #[serde(default, rename = "type")]
    kind: KindDoc,
    default: Option<toml::Value>,
    choices: Option<Vec<toml::Value>>,
    cli: Option<CliDoc>,
}

#[derive(Debug, Default, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum KindDoc {
    #[default]
    Str,
    Int,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CliDoc {
    flags: Option<Vec<String>>,
    action: Option<ActionDoc>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ActionDoc {
    StoreTrue,
    StoreFalse,
    Count,
}

/// Read and parse a manifest file into a database.
pub fn load_manifest(path: &Path) -> Result<Database> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed reading manifest file: {}", path.display()))?;
    parse_manifest(&content)
        .with_context(|| format!("Invalid manifest: {}", path.display()))
}

/// Parse manifest text into a database.
pub fn parse_manifest(content: &str) -> Result<Database> {
    let doc: ManifestDoc = toml::from_str(content).context("Invalid TOML syntax")?;
    debug!(prog = %doc.prog, params = doc.params.len(), "parsed manifest");

    let mut db = Database::new(doc.prog);
    if let Some(description) = doc.description {
        db = db.with_description(description);
    }
    for param in doc.params {
        let name = param.name.clone();
        let built = build_param(param)
            .with_context(|| format!("Invalid parameter {name:?}"))?;
        db.add_param(built)?;
    }
    Ok(db)
}

fn build_param(doc: ParamDoc) -> Result<Parameter> {
    let mut param = Parameter::new(doc.name)?;
    param = match doc.kind {
        KindDoc::Str => param,
        KindDoc::Int => param.with_convert(Convert::Int),
    };
    if let Some(default) = doc.default {
        param = param.with_default(scalar(&default)?);
    }
    if let Some(choices) = doc.choices {
        let values = choices.iter().map(scalar).collect::<Result<Vec<_>>>()?;
        param = param.with_choices(values);
    }
    if let Some(cli) = doc.cli {
        let mut opts = CliOpts::new();
        if let Some(flags) = cli.flags {
            opts = opts.with_flags(flags)?;
        }
        if let Some(action) = cli.action {
            opts = opts.with_action(match action {
                ActionDoc::StoreTrue => CliAction::StoreTrue,
                ActionDoc::StoreFalse => CliAction::StoreFalse,
                ActionDoc::Count => CliAction::Count,
            });
        }
        param = param.with_cli(opts);
    }
    Ok(param)
}

fn scalar(value: &toml::Value) -> Result<Value> {
    match value {
        toml::Value::String(s) => Ok(Value::Str(s.clone())),
        toml::Value::Integer(n) => Ok(Value::Int(*n)),
        toml::Value::Boolean(b) => Ok(Value::Bool(*b)),
        other => bail!("unsupported value {other} (expected string, integer, or boolean)"),
    }
}
