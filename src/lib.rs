//! paramdb: declarative configuration-parameter registry with a CLI loader
//!
//! Program authors describe named, typed configuration parameters once
//! (name, conversion, default, allowed choices, flag spellings) and obtain
//! validated values from a raw argument list. The loader is a thin shaping
//! layer over clap's builder API; it never parses arguments itself.

pub mod cli;
pub mod error;
pub mod load;
pub mod manifest;
pub mod registry;
pub mod value;

pub use error::{DefinitionError, UsageError};
pub use load::{CliLoader, ResolvedValues};
pub use registry::{CliAction, CliOpts, Database, Flag, Parameter};
pub use value::{Convert, Value};
