//! Small helpers shared across the workspace crates.

pub mod env;

pub use env::{EnvError, get_env_path, get_env_var};
