//! `roster` - An in-memory manager for student records
//!
//! This library provides the [`Roster`] collection and the types around it:
//! the [`Student`] record, the [`Outcome`] envelope every fallible operation
//! returns, and the configuration, logging, and CLI plumbing of the `roster`
//! binary.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod demo;
pub mod error;
pub mod logging;
pub mod outcome;
pub mod roster;
pub mod student;

pub use config::{Config, OutputFormat};
pub use error::{Error, Result, RosterError};
pub use logging::init_logging;
pub use outcome::Outcome;
pub use roster::{Limits, Roster, RosterStats};
pub use student::Student;
