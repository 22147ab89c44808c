//! Core library for the duty-letters command line application.
//!
//! Rosters come in through [`io::excel_read`], the operator is consulted via
//! the [`prompt::Prompter`] trait, the memorandum text is assembled in
//! [`letter`], and [`io::docx_write`] / [`io::excel_write`] persist the
//! results. [`session`] strings these steps together for the binary.

pub mod error;
pub mod io;
pub mod letter;
pub mod model;
pub mod prompt;
pub mod session;

pub use error::{Result, ToolError};
