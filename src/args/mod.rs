//! Declarative argument registry and its single-pass parser.
//!
//! ```text
//! Register → Parse (help check → arity gate → classify → bind) → Bindings
//! ```
//!
//! A [`Registry`] is populated once, then consumed by one call to
//! [`Registry::parse`]. Every exit path writes something first: full help,
//! the usage line, or a diagnostic.
//!
//! ```compile_fail
//! let registry = scmdp::args::Registry::new("usage", "");
//! let _ = registry.parse(&["a"]);
//! let _ = registry.parse(&["b"]); // moved: a registry is parsed once
//! ```

mod bindings;
mod classifier;
mod parser;
mod registry;

pub use bindings::{Bindings, FLAG_PRESENT};
pub use classifier::{is_flag_shaped, ScanMode, FLAG_INTRODUCERS};
pub use registry::{HelpTrigger, OptionalArg, PositionalArg, Registry, RegistryError, Slot};
