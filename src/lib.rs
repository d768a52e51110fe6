//! Declarative command-line argument registry and parser.
//!
//! Register positional and optional arguments against a usage line and a
//! description, then parse the argument vector once:
//!
//! ```
//! use scmdp::args::Registry;
//!
//! let mut registry = Registry::new("USAGE: app [-OPTIONS] FILE", "Demo app");
//! registry.set_help_trigger("--help", "-h").unwrap();
//! let file = registry.add_positional("FILE", "Input file").unwrap();
//! let out = registry.add_optional("--out", "-o", "Output file", "PATH").unwrap();
//! let quiet = registry.add_optional("--quiet", "-q", "No output", "").unwrap();
//!
//! let mut sink = Vec::new();
//! let bindings = registry
//!     .parse_to(&["-o", "result.txt", "input.txt"], &mut sink)
//!     .unwrap();
//!
//! assert_eq!(bindings.get(file), Some("input.txt"));
//! assert_eq!(bindings.get(out), Some("result.txt"));
//! assert!(!bindings.is_set(quiet));
//! ```

pub mod args;
pub mod config;
pub mod error;
pub mod help;
pub mod logging;

pub use args::{Bindings, Registry, Slot};
pub use error::{ParseError, ParseFailure};
