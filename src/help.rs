//! Help rendering: the usage line alone, or the full argument listing.
//!
//! The full view is laid out in fixed-width columns. Line breaks inside an
//! argument's help text continue at a fixed indent so the description stays
//! aligned under its first line.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::args::Registry;

const POSITIONAL_HEADING: &str = ">> Non-optional arguments:";
const OPTIONAL_HEADING: &str = ">> Optional arguments:";

/// Column layout of the positional section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PositionalColumns {
    pub margin: usize,
    pub name_width: usize,
    /// Indent of continuation lines in the help text.
    pub continuation: usize,
}

/// Column layout of the optional section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptionalColumns {
    pub margin: usize,
    pub long_width: usize,
    pub short_width: usize,
    pub value_width: usize,
    /// Indent of continuation lines in the help text.
    pub continuation: usize,
}

/// Layout constants for [`render_full`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HelpLayout {
    pub positional: PositionalColumns,
    pub optional: OptionalColumns,
}

impl Default for PositionalColumns {
    fn default() -> Self {
        Self {
            margin: 3,
            name_width: 10,
            continuation: 13,
        }
    }
}

impl Default for OptionalColumns {
    fn default() -> Self {
        Self {
            margin: 3,
            long_width: 10,
            short_width: 5,
            value_width: 7,
            continuation: 26,
        }
    }
}

/// The usage line alone, shown when the token count is out of range.
pub fn render_usage(registry: &Registry) -> String {
    format!("{}\n", registry.usage())
}

/// Usage, description, then every positional and optional argument.
pub fn render_full(registry: &Registry) -> String {
    let layout = registry.layout();
    let pos = layout.positional;
    let opt = layout.optional;
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "{}\n\n{}\n\n{}\n",
        registry.usage(),
        registry.description(),
        POSITIONAL_HEADING
    );
    for arg in registry.positionals() {
        let _ = write!(
            out,
            "\n{:>margin$}{:<name$}",
            " ",
            arg.key,
            margin = pos.margin,
            name = pos.name_width
        );
        push_reflowed(&mut out, &arg.help, pos.continuation);
    }

    let _ = write!(out, "\n\n{}\n", OPTIONAL_HEADING);
    for arg in registry.optionals() {
        let _ = write!(
            out,
            "\n{:>margin$}{:<long$},{:<short$}{:<value$}",
            " ",
            arg.long,
            arg.short,
            arg.value_name,
            margin = opt.margin,
            long = opt.long_width,
            short = opt.short_width,
            value = opt.value_width
        );
        push_reflowed(&mut out, &arg.help, opt.continuation);
    }
    out.push('\n');
    out
}

fn push_reflowed(out: &mut String, help: &str, indent: usize) {
    for (i, line) in help.split('\n').enumerate() {
        if i > 0 {
            let _ = write!(out, "\n{:<indent$}", " ", indent = indent);
        }
        out.push_str(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflow_indents_continuation_lines() {
        let mut out = String::new();
        push_reflowed(&mut out, "first\nsecond", 4);
        assert_eq!(out, "first\n    second");
    }

    #[test]
    fn test_reflow_single_line_untouched() {
        let mut out = String::new();
        push_reflowed(&mut out, "only line", 13);
        assert_eq!(out, "only line");
    }

    #[test]
    fn test_usage_only() {
        let registry = Registry::new("USAGE: app ARG", "ignored");
        assert_eq!(render_usage(&registry), "USAGE: app ARG\n");
    }

    #[test]
    fn test_default_layout_constants() {
        let layout = HelpLayout::default();
        assert_eq!(layout.positional.margin + layout.positional.name_width, 13);
        assert_eq!(layout.positional.continuation, 13);
        assert_eq!(layout.optional.continuation, 26);
    }

    #[test]
    fn test_custom_layout() {
        let layout = HelpLayout {
            positional: PositionalColumns {
                margin: 1,
                name_width: 4,
                continuation: 5,
            },
            ..HelpLayout::default()
        };
        let mut registry = Registry::new("u", "d").with_layout(layout);
        registry.add_positional("AB", "one\ntwo").unwrap();
        let help = render_full(&registry);
        assert!(help.contains("\n AB  one\n     two"), "{help:?}");
    }

    #[test]
    fn test_long_keys_overflow_columns() {
        let mut registry = Registry::new("u", "d");
        registry
            .add_optional("--very-long-key", "-vlk", "text", "")
            .unwrap();
        let help = render_full(&registry);
        assert!(help.contains("\n   --very-long-key,-vlk        text"), "{help:?}");
    }
}
