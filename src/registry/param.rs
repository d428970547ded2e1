//! Parameter definitions and their CLI-specific options

use crate::error::DefinitionError;
use crate::value::{Convert, Value};
use std::fmt;

/// A flag spelling parsed from its textual form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flag {
    Short(char),
    Long(String),
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flag::Short(c) => write!(f, "-{c}"),
            Flag::Long(name) => write!(f, "--{name}"),
        }
    }
}

impl Flag {
    fn parse(spelling: &str) -> Result<Self, DefinitionError> {
        let invalid = || DefinitionError::InvalidFlag { flag: spelling.to_string() };
        if let Some(name) = spelling.strip_prefix("--") {
            if name.is_empty() || name.chars().any(char::is_whitespace) {
                return Err(invalid());
            }
            return Ok(Flag::Long(name.to_string()));
        }
        if let Some(rest) = spelling.strip_prefix('-') {
            let mut chars = rest.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if !c.is_whitespace() && c != '-' => return Ok(Flag::Short(c)),
                _ => return Err(invalid()),
            }
        }
        Err(invalid())
    }
}

/// Action override for a CLI-loaded parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliAction {
    /// Presence stores `true`; absence yields `false`.
    StoreTrue,
    /// Presence stores `false`; absence yields `true`.
    StoreFalse,
    /// Each occurrence increments an integer.
    Count,
}

/// CLI-loader options for a single parameter: explicit flag spellings and an
/// optional action override.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CliOpts {
    flags: Vec<Flag>,
    action: Option<CliAction>,
}

impl CliOpts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the flag spellings. Each must read `-c` or `--long`.
    pub fn with_flags<I, S>(mut self, flags: I) -> Result<Self, DefinitionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.flags = flags
            .into_iter()
            .map(|s| Flag::parse(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self)
    }

    pub fn with_action(mut self, action: CliAction) -> Self {
        self.action = Some(action);
        self
    }

    pub fn flags(&self) -> &[Flag] {
        &self.flags
    }

    pub fn action(&self) -> Option<CliAction> {
        self.action
    }
}

/// A single named configuration slot.
///
/// Stores its constructor arguments verbatim; no coercion happens until a
/// loader materializes values. Equality is structural over all fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Parameter {
    name: String,
    convert: Convert,
    default: Option<Value>,
    choices: Option<Vec<Value>>,
    cli_opts: Option<CliOpts>,
}

impl Parameter {
    /// Create a parameter. Names must contain no whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, DefinitionError> {
        let name = name.into();
        if name.chars().any(char::is_whitespace) {
            return Err(DefinitionError::InvalidName { name });
        }
        Ok(Self { name, ..Self::default() })
    }

    pub fn with_convert(mut self, convert: Convert) -> Self {
        self.convert = convert;
        self
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_choices<I, V>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.choices = Some(choices.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_cli(mut self, opts: CliOpts) -> Self {
        self.cli_opts = Some(opts);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn convert(&self) -> &Convert {
        &self.convert
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn choices(&self) -> Option<&[Value]> {
        self.choices.as_deref()
    }

    pub fn cli_opts(&self) -> Option<&CliOpts> {
        self.cli_opts.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_read_back() {
        for name in ["klb", "1ab", "s#a"] {
            let p = Parameter::new(name).expect("valid name");
            assert_eq!(p.name(), name);
        }
    }

    #[test]
    fn test_new_parameter_is_bare() {
        let p = Parameter::new("param1").expect("valid name");
        assert_eq!(p.convert(), &Convert::Str);
        assert_eq!(p.default_value(), None);
        assert_eq!(p.choices(), None);
        assert_eq!(p.cli_opts(), None);
    }

    #[test]
    fn test_whitespace_names_rejected() {
        for name in ["k b", "\tab", "s\na"] {
            let err = Parameter::new(name).expect_err("whitespace name");
            assert_eq!(err, DefinitionError::InvalidName { name: name.to_string() });
        }
    }

    #[test]
    fn test_structural_equality() {
        let build = || {
            Parameter::new("param1")
                .expect("name")
                .with_convert(Convert::Int)
                .with_default(Value::Int(3))
                .with_choices([1i64, 2, 3])
        };
        assert_eq!(build(), build());
        assert_ne!(build(), build().with_default(Value::Int(4)));
    }

    #[test]
    fn test_flag_spellings() {
        let opts = CliOpts::new().with_flags(["-p", "--param"]).expect("flags");
        assert_eq!(opts.flags(), &[Flag::Short('p'), Flag::Long("param".into())]);
        assert_eq!(opts.flags()[0].to_string(), "-p");
        assert_eq!(opts.flags()[1].to_string(), "--param");
    }

    #[test]
    fn test_invalid_flag_spellings_rejected() {
        for flag in ["p", "-", "--", "-pq", "--a b", ""] {
            let err = CliOpts::new().with_flags([flag]).expect_err("bad flag");
            assert_eq!(err, DefinitionError::InvalidFlag { flag: flag.to_string() });
        }
    }
}
