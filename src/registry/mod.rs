//! Parameter and database model
//!
//! A `Database` is an ordered, name-unique collection of `Parameter`s under a
//! program identity. Construction validates names eagerly; loaders only ever
//! read the model.

pub mod database;
pub mod param;

pub use database::Database;
pub use param::{CliAction, CliOpts, Flag, Parameter};
