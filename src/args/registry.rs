//! Registry: single source of truth for every argument a program accepts.

use thiserror::Error;

use crate::args::bindings::Bindings;
use crate::help::HelpLayout;

/// Handle to the output cell of one registered argument.
///
/// Returned by the registration calls and used to read the parsed value
/// back out of [`Bindings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot(pub(crate) usize);

/// Errors raised while populating a registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("key '{key}' is already registered")]
    DuplicateKey { key: String },

    #[error("positional argument '{key}' is already registered")]
    DuplicatePositional { key: String },
}

/// Key pair that short-circuits parsing into the full help view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpTrigger {
    /// Long form (e.g., "--help").
    pub long: String,
    /// Short form (e.g., "-h").
    pub short: String,
}

impl HelpTrigger {
    pub fn new(long: impl Into<String>, short: impl Into<String>) -> Self {
        Self {
            long: long.into(),
            short: short.into(),
        }
    }

    /// Check if this trigger matches the given token. Empty keys never match.
    pub fn matches(&self, token: &str) -> bool {
        key_matches(&self.long, token) || key_matches(&self.short, token)
    }

    /// Hint line appended to diagnostics, `None` when both keys are empty.
    pub fn hint(&self) -> Option<String> {
        match (self.short.is_empty(), self.long.is_empty()) {
            (false, false) => Some(format!("print {} or {} to see help", self.short, self.long)),
            (false, true) => Some(format!("print {} to see help", self.short)),
            (true, false) => Some(format!("print {} to see help", self.long)),
            (true, true) => None,
        }
    }
}

/// An argument bound by matching its long or short key.
#[derive(Debug, Clone)]
pub struct OptionalArg {
    /// Long form (e.g., "--option1").
    pub long: String,
    /// Short form (e.g., "-op1").
    pub short: String,
    /// Description; embedded line breaks are re-indented in help output.
    pub help: String,
    /// Name of the trailing value (e.g., "VALUE"). Empty for flag-only options.
    pub value_name: String,
    pub slot: Slot,
}

impl OptionalArg {
    /// Does presence of this option require a following value token?
    pub fn is_valuable(&self) -> bool {
        !self.value_name.is_empty()
    }

    /// Check if this definition matches the given token.
    pub fn matches(&self, token: &str) -> bool {
        key_matches(&self.long, token) || key_matches(&self.short, token)
    }

    fn display_key(&self) -> &str {
        if self.long.is_empty() {
            &self.short
        } else {
            &self.long
        }
    }
}

/// An argument bound by its position in the token stream.
#[derive(Debug, Clone)]
pub struct PositionalArg {
    /// Display name (e.g., "NUM1").
    pub key: String,
    pub help: String,
    pub slot: Slot,
}

/// Declarative model of a program's command line.
///
/// Built once, consumed by exactly one call to [`Registry::parse`]. Parsing
/// takes the registry by value, so it cannot be parsed a second time.
#[derive(Debug, Clone)]
pub struct Registry {
    usage: String,
    description: String,
    positional: Vec<PositionalArg>,
    optional: Vec<OptionalArg>,
    help: Option<HelpTrigger>,
    layout: HelpLayout,
    valuable: usize,
    slot_keys: Vec<String>,
}

impl Registry {
    /// Create an empty registry with its usage line and description.
    pub fn new(usage: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            usage: usage.into(),
            description: description.into(),
            positional: Vec::new(),
            optional: Vec::new(),
            help: None,
            layout: HelpLayout::default(),
            valuable: 0,
            slot_keys: Vec::new(),
        }
    }

    /// Replace the help layout constants.
    pub fn with_layout(mut self, layout: HelpLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Register the help trigger, overwriting any previous one.
    ///
    /// # Errors
    /// Returns [`RegistryError::DuplicateKey`] if either key is already used
    /// by an optional argument.
    pub fn set_help_trigger(
        &mut self,
        long: impl Into<String>,
        short: impl Into<String>,
    ) -> Result<(), RegistryError> {
        let trigger = HelpTrigger::new(long, short);
        for key in [&trigger.long, &trigger.short] {
            if self.optional.iter().any(|o| o.matches(key)) {
                return Err(RegistryError::DuplicateKey { key: key.clone() });
            }
        }
        if let Some(previous) = &self.help {
            tracing::debug!(long = %previous.long, short = %previous.short, "help trigger replaced");
        }
        self.help = Some(trigger);
        Ok(())
    }

    /// Append an optional argument. An empty `value_name` makes it flag-only.
    ///
    /// # Errors
    /// Returns [`RegistryError::DuplicateKey`] if a non-empty key is already
    /// used by another optional argument or by the help trigger.
    pub fn add_optional(
        &mut self,
        long: impl Into<String>,
        short: impl Into<String>,
        help: impl Into<String>,
        value_name: impl Into<String>,
    ) -> Result<Slot, RegistryError> {
        let long = long.into();
        let short = short.into();
        if !long.is_empty() && long == short {
            return Err(RegistryError::DuplicateKey { key: long });
        }
        for key in [&long, &short] {
            if self.is_key_taken(key) {
                return Err(RegistryError::DuplicateKey { key: key.clone() });
            }
        }

        let slot = Slot(self.slot_keys.len());
        let arg = OptionalArg {
            long,
            short,
            help: help.into(),
            value_name: value_name.into(),
            slot,
        };
        if arg.is_valuable() {
            self.valuable += 1;
        }
        self.slot_keys.push(arg.display_key().to_string());
        self.optional.push(arg);
        Ok(slot)
    }

    /// Append a positional argument. Binding follows registration order.
    ///
    /// # Errors
    /// Returns [`RegistryError::DuplicatePositional`] if `key` is already
    /// registered as a positional argument.
    pub fn add_positional(
        &mut self,
        key: impl Into<String>,
        help: impl Into<String>,
    ) -> Result<Slot, RegistryError> {
        let key = key.into();
        if self.positional.iter().any(|p| p.key == key) {
            return Err(RegistryError::DuplicatePositional { key });
        }

        let slot = Slot(self.slot_keys.len());
        self.slot_keys.push(key.clone());
        self.positional.push(PositionalArg {
            key,
            help: help.into(),
            slot,
        });
        Ok(slot)
    }

    pub fn usage(&self) -> &str {
        &self.usage
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn positionals(&self) -> &[PositionalArg] {
        &self.positional
    }

    pub fn optionals(&self) -> &[OptionalArg] {
        &self.optional
    }

    pub fn help_trigger(&self) -> Option<&HelpTrigger> {
        self.help.as_ref()
    }

    pub fn layout(&self) -> &HelpLayout {
        &self.layout
    }

    /// `P`: number of positional arguments.
    pub fn positional_count(&self) -> usize {
        self.positional.len()
    }

    /// `O`: number of optional arguments.
    pub fn optional_count(&self) -> usize {
        self.optional.len()
    }

    /// `V`: number of optional arguments that take a value.
    pub fn valuable_count(&self) -> usize {
        self.valuable
    }

    /// `P + O + V`: the most tokens a valid invocation can carry.
    pub fn max_tokens(&self) -> usize {
        self.positional_count() + self.optional_count() + self.valuable_count()
    }

    /// Fresh output cells, one per registered argument, all unbound.
    pub(crate) fn empty_bindings(&self) -> Bindings {
        Bindings::with_keys(self.slot_keys.clone())
    }

    fn is_key_taken(&self, key: &str) -> bool {
        self.optional.iter().any(|o| o.matches(key))
            || self.help.as_ref().is_some_and(|h| h.matches(key))
    }
}

fn key_matches(key: &str, token: &str) -> bool {
    !key.is_empty() && key == token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_track_registration() {
        let mut registry = Registry::new("usage", "description");
        registry.add_positional("arg1", "first").unwrap();
        registry.add_positional("arg2", "second").unwrap();
        registry
            .add_optional("--option1", "-op1", "with value", "VALUE")
            .unwrap();
        registry
            .add_optional("--option2", "-op2", "without value", "")
            .unwrap();

        assert_eq!(registry.positional_count(), 2);
        assert_eq!(registry.optional_count(), 2);
        assert_eq!(registry.valuable_count(), 1);
        assert_eq!(registry.max_tokens(), 5);
    }

    #[test]
    fn test_slots_are_distinct() {
        let mut registry = Registry::new("", "");
        let a = registry.add_positional("A", "").unwrap();
        let x = registry.add_optional("--x", "-x", "", "X").unwrap();
        let b = registry.add_positional("B", "").unwrap();
        assert_ne!(a, x);
        assert_ne!(x, b);
        assert_eq!(registry.positionals()[1].slot, b);
    }

    #[test]
    fn test_duplicate_optional_key_rejected() {
        let mut registry = Registry::new("", "");
        registry.add_optional("--verbose", "-v", "", "").unwrap();
        let err = registry.add_optional("--version", "-v", "", "").unwrap_err();
        assert_eq!(err, RegistryError::DuplicateKey { key: "-v".into() });
        assert_eq!(registry.optional_count(), 1);
    }

    #[test]
    fn test_option_key_colliding_with_trigger_rejected() {
        let mut registry = Registry::new("", "");
        registry.set_help_trigger("--help", "-h").unwrap();
        let err = registry.add_optional("--host", "-h", "", "HOST").unwrap_err();
        assert_eq!(err, RegistryError::DuplicateKey { key: "-h".into() });
    }

    #[test]
    fn test_trigger_colliding_with_option_rejected() {
        let mut registry = Registry::new("", "");
        registry.add_optional("--help", "", "", "").unwrap();
        assert!(registry.set_help_trigger("--help", "-h").is_err());
        assert!(registry.help_trigger().is_none());
    }

    #[test]
    fn test_same_long_and_short_rejected() {
        let mut registry = Registry::new("", "");
        assert!(registry.add_optional("-x", "-x", "", "").is_err());
    }

    #[test]
    fn test_empty_short_keys_do_not_collide() {
        let mut registry = Registry::new("", "");
        registry.add_optional("--alpha", "", "", "").unwrap();
        registry.add_optional("--beta", "", "", "").unwrap();
        assert_eq!(registry.optional_count(), 2);
    }

    #[test]
    fn test_duplicate_positional_rejected() {
        let mut registry = Registry::new("", "");
        registry.add_positional("FILE", "").unwrap();
        let err = registry.add_positional("FILE", "").unwrap_err();
        assert_eq!(err, RegistryError::DuplicatePositional { key: "FILE".into() });
    }

    #[test]
    fn test_help_trigger_overwrites() {
        let mut registry = Registry::new("", "");
        registry.set_help_trigger("--help", "-h").unwrap();
        registry.set_help_trigger("--usage", "-?").unwrap();
        let trigger = registry.help_trigger().unwrap();
        assert!(trigger.matches("-?"));
        assert!(!trigger.matches("-h"));
    }

    #[test]
    fn test_empty_trigger_key_never_matches() {
        let trigger = HelpTrigger::new("--help", "");
        assert!(!trigger.matches(""));
        assert_eq!(trigger.hint().as_deref(), Some("print --help to see help"));
        assert_eq!(HelpTrigger::new("", "").hint(), None);
    }
}
