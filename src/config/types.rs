use serde::{Deserialize, Serialize};

use crate::help::HelpLayout;

/// Root of a registry description file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistrySpec {
    pub program: ProgramSpec,
    /// Help trigger keys. Absent means help can't be requested.
    #[serde(default)]
    pub help: Option<HelpSpec>,
    #[serde(default)]
    pub positional: Vec<PositionalSpec>,
    #[serde(default)]
    pub optional: Vec<OptionalSpec>,
    #[serde(default)]
    pub layout: HelpLayout,
}

/// Usage line and description shown in help output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProgramSpec {
    /// Usage line (e.g., "USAGE: app [-OPTIONS] arg1 arg2").
    pub usage: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HelpSpec {
    /// Long form (e.g., "--help").
    #[serde(default = "default_help_long")]
    pub long: String,
    /// Short form (e.g., "-h").
    #[serde(default = "default_help_short")]
    pub short: String,
}

/// One positional argument, bound in file order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PositionalSpec {
    pub key: String,
    #[serde(default)]
    pub help: String,
}

/// One optional argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionalSpec {
    #[serde(default)]
    pub long: String,
    #[serde(default)]
    pub short: String,
    #[serde(default)]
    pub help: String,
    /// Value name; empty or missing makes the option flag-only.
    #[serde(default)]
    pub value: String,
}

fn default_help_long() -> String {
    "--help".to_string()
}

fn default_help_short() -> String {
    "-h".to_string()
}

impl Default for HelpSpec {
    fn default() -> Self {
        Self {
            long: default_help_long(),
            short: default_help_short(),
        }
    }
}
