//! CLI module
//!
//! Command-line interface over the filter stage and paginator.
//!
//! # Commands
//!
//! - `fetch` - Print every folder of an organization
//! - `page` - Print an organization's folders page by page
//! - `validate` - Check folder ids are unique across the source

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
