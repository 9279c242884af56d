//! cmdgen: scaffolds clap subcommand modules from templates.
//!
//! Given one or more subcommand names, cmdgen writes a starter source file
//! for each under `<module-path>/internal/[<parent>/]<name>/<name>.rs` and
//! prints the snippets needed to register them with the parent command.
#![deny(unsafe_code)]

pub mod core;
pub mod generation;
pub mod infrastructure;
