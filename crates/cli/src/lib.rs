//! Terminal front-end for the playground: command-line surface and rendering.

pub mod cli;
pub mod render;

pub use cli::{Cli, Command, run};
