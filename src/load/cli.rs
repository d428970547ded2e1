//! Command-line loader built on clap's builder API
//!
//! Each parameter becomes one clap `Arg`: explicit flag spellings register
//! literally, otherwise a flag is synthesized from the name (short for
//! single-character names so fused counting works, long otherwise). Type
//! conversion and choice checks run inside clap value parsers so every
//! user-input failure surfaces as a rendered diagnostic with exit status 2.

use crate::error::UsageError;
use crate::load::ResolvedValues;
use crate::registry::{CliAction, Database, Flag, Parameter};
use crate::value::Value;
use clap::error::ErrorKind;
use clap::parser::ArgMatches;
use clap::{Arg, ArgAction, Command};
use tracing::{debug, trace};

/// Loads parameter values from command-line arguments.
///
/// `generate_default` controls whether declared defaults are materialized on
/// omission: a parameter with both `choices` and a default resolves to the
/// default, and a counting parameter resolves to its default (or zero).
/// Loading mutates neither the loader nor the database, so both can be
/// reused across calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliLoader {
    generate_default: bool,
}

impl CliLoader {
    pub fn new(generate_default: bool) -> Self {
        Self { generate_default }
    }

    /// Run the database's parser over `argv` (without the program name).
    ///
    /// Usage errors (unknown flag, conversion failure, choice violation)
    /// come back as [`UsageError`] with status 2 and the rendered
    /// diagnostic; help output comes back with status 0.
    pub fn load<I, S>(&self, db: &Database, argv: I) -> Result<ResolvedValues, UsageError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let argv: Vec<String> = argv.into_iter().map(Into::into).collect();
        trace!(prog = %db.prog(), args = argv.len(), "loading from argv");

        let matches = build_command(db).try_get_matches_from(argv).map_err(usage_error)?;

        let mut resolved = ResolvedValues::default();
        for param in db.parameters() {
            if let Some(value) = self.resolve(param, &matches) {
                resolved.insert(param.name().to_string(), value);
            }
        }
        Ok(resolved)
    }

    fn resolve(&self, param: &Parameter, matches: &ArgMatches) -> Option<Value> {
        let name = param.name();
        match param.cli_opts().and_then(|o| o.action()) {
            Some(CliAction::StoreTrue) | Some(CliAction::StoreFalse) => {
                // Absence always yields the inverse boolean, independent of
                // generate_default.
                Some(Value::Bool(matches.get_flag(name)))
            }
            Some(CliAction::Count) => match matches.get_many::<String>(name) {
                Some(occurrences) => Some(Value::Int(occurrences.len() as i64)),
                None if self.generate_default => {
                    Some(param.default_value().cloned().unwrap_or(Value::Int(0)))
                }
                None => None,
            },
            None => {
                if let Some(value) = matches.get_one::<Value>(name) {
                    Some(value.clone())
                } else if self.generate_default && param.choices().is_some() {
                    // Declared defaults bypass the choices check on omission.
                    param.default_value().cloned()
                } else {
                    None
                }
            }
        }
    }
}

fn build_command(db: &Database) -> Command {
    let mut cmd = Command::new(db.prog().to_string()).no_binary_name(true);
    if let Some(description) = db.description() {
        cmd = cmd.about(description.to_string());
    }
    for param in db.parameters() {
        cmd = cmd.arg(build_arg(param));
    }
    cmd
}

fn build_arg(param: &Parameter) -> Arg {
    let mut arg = Arg::new(param.name().to_string());

    let explicit = param.cli_opts().map(|o| o.flags()).filter(|f| !f.is_empty());
    match explicit {
        Some(flags) => {
            // Only the declared spellings are recognized; the synthesized
            // long form is not registered.
            let mut short_taken = false;
            let mut long_taken = false;
            for flag in flags {
                match flag {
                    Flag::Short(c) => {
                        if short_taken {
                            arg = arg.short_alias(*c);
                        } else {
                            arg = arg.short(*c);
                            short_taken = true;
                        }
                    }
                    Flag::Long(name) => {
                        if long_taken {
                            arg = arg.alias(name.clone());
                        } else {
                            arg = arg.long(name.clone());
                            long_taken = true;
                        }
                    }
                }
            }
        }
        None => {
            let name = param.name();
            let mut chars = name.chars();
            arg = match (chars.next(), chars.next()) {
                // Single-character names become short flags so fused
                // repetition (-ddd) parses.
                (Some(c), None) => arg.short(c),
                _ => arg.long(name.to_string()),
            };
        }
    }
    debug!(name = %param.name(), "registered argument");

    match param.cli_opts().and_then(|o| o.action()) {
        Some(CliAction::StoreTrue) => arg.action(ArgAction::SetTrue),
        Some(CliAction::StoreFalse) => arg.action(ArgAction::SetFalse),
        // One placeholder value is appended per occurrence; counting the
        // appended values avoids the u8 ceiling of clap's counter.
        Some(CliAction::Count) => {
            arg.action(ArgAction::Append).num_args(0).default_missing_value("")
        }
        None => {
            let convert = param.convert().clone();
            let choices = param.choices().map(<[Value]>::to_vec);
            // Signed literals like -9571293 must parse as values, not flags.
            arg = arg.action(ArgAction::Set).allow_negative_numbers(true);
            arg.value_parser(move |raw: &str| -> Result<Value, String> {
                let value = convert.apply(raw)?;
                if let Some(choices) = &choices {
                    if !choices.contains(&value) {
                        let allowed = choices
                            .iter()
                            .map(ToString::to_string)
                            .collect::<Vec<_>>()
                            .join(", ");
                        return Err(format!("invalid choice {raw:?} (choose from {allowed})"));
                    }
                }
                Ok(value)
            })
        }
    }
}

fn usage_error(err: clap::Error) -> UsageError {
    let status = match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 2,
    };
    UsageError::new(status, err.render().to_string())
}
