//! Registry descriptions loaded from TOML.
//!
//! ```toml
//! [program]
//! usage = "USAGE: app [-OPTIONS] arg1 arg2"
//! description = "App for testing"
//!
//! [help]
//! long = "--help"
//! short = "-h"
//!
//! [[positional]]
//! key = "arg1"
//! help = "Necessary argument 1"
//!
//! [[optional]]
//! long = "--option1"
//! short = "-op1"
//! value = "VALUE"
//!
//! [layout.optional]
//! continuation = 26
//! ```

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{HelpSpec, OptionalSpec, PositionalSpec, ProgramSpec, RegistrySpec};
