//! Ordered, name-unique parameter collections

use crate::error::DefinitionError;
use crate::registry::Parameter;
use tracing::debug;

/// An ordered collection of parameters under a program identity.
///
/// Insertion order is preserved and names are unique. Parameters are only
/// ever appended; loaders read the collection without mutating it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Database {
    prog: String,
    description: Option<String>,
    parameters: Vec<Parameter>,
}

impl Database {
    pub fn new(prog: impl Into<String>) -> Self {
        Self { prog: prog.into(), ..Self::default() }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Seed the database with an initial parameter list. Duplicate names in
    /// the list fail the same way [`Database::add_param`] does.
    pub fn with_params<I>(mut self, params: I) -> Result<Self, DefinitionError>
    where
        I: IntoIterator<Item = Parameter>,
    {
        for p in params {
            self.add_param(p)?;
        }
        Ok(self)
    }

    /// Append a parameter, rejecting duplicate names.
    ///
    /// On failure the existing sequence is left untouched.
    pub fn add_param(&mut self, param: Parameter) -> Result<(), DefinitionError> {
        if self.parameters.iter().any(|p| p.name() == param.name()) {
            return Err(DefinitionError::DuplicateName { name: param.name().to_string() });
        }
        debug!(prog = %self.prog, name = %param.name(), "registered parameter");
        self.parameters.push(param);
        Ok(())
    }

    pub fn prog(&self) -> &str {
        &self.prog
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The current ordered parameter sequence.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }
}
