//! Parser: binds a token vector against a registry in one pass.
//!
//! ```text
//! tokens → help check → arity gate → mode selection → bind → Bindings
//!                 │            │                         │
//!            full help    usage line               diagnostic
//! ```
//!
//! Options go either entirely before or entirely after the positionals; the
//! first token decides which. Bindings are not transactional: cells written
//! before a failing token stay written and are handed back in the failure.

use std::io::{self, Write};

use crate::args::bindings::{Bindings, FLAG_PRESENT};
use crate::args::classifier::{self, is_flag_shaped, OptionRegion, ScanMode};
use crate::args::registry::{OptionalArg, Registry};
use crate::error::{self, ParseError, ParseFailure};
use crate::help;

impl Registry {
    /// Parse `tokens` (program name excluded), writing help and diagnostics
    /// to standard output.
    pub fn parse<S: AsRef<str>>(self, tokens: &[S]) -> Result<Bindings, ParseFailure> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.parse_to(tokens, &mut out)
    }

    /// Parse the process's own arguments, skipping the program name.
    pub fn parse_env(self) -> Result<Bindings, ParseFailure> {
        let tokens: Vec<String> = std::env::args().skip(1).collect();
        self.parse(&tokens)
    }

    /// Parse `tokens`, writing help and diagnostics to `out`.
    ///
    /// The registry is consumed and released on every return path.
    pub fn parse_to<S, W>(self, tokens: &[S], out: &mut W) -> Result<Bindings, ParseFailure>
    where
        S: AsRef<str>,
        W: Write + ?Sized,
    {
        let registry = scopeguard::guard(self, |registry| {
            tracing::trace!(
                positional = registry.positional_count(),
                optional = registry.optional_count(),
                "registry released"
            );
        });
        let tokens: Vec<&str> = tokens.iter().map(|t| t.as_ref()).collect();

        if let Some(trigger) = registry.help_trigger() {
            if tokens.iter().any(|t| trigger.matches(t)) {
                tracing::debug!("help trigger found");
                emit(out, &help::render_full(&registry));
                return Err(ParseFailure::HelpRequested);
            }
        }

        let count = tokens.len();
        if count > registry.max_tokens() || count < registry.positional_count() {
            tracing::debug!(
                count,
                min = registry.positional_count(),
                max = registry.max_tokens(),
                "token count out of range"
            );
            emit(out, &help::render_usage(&registry));
            return Err(ParseFailure::Rejected {
                error: ParseError::WrongParameterCount,
                partial: registry.empty_bindings(),
            });
        }

        let mode = ScanMode::select(tokens.first().copied());
        tracing::debug!(?mode, count, "scanning tokens");

        let mut bindings = registry.empty_bindings();
        let outcome = match mode {
            ScanMode::Forward => bind_forward(&registry, &tokens, &mut bindings),
            ScanMode::Reversed => bind_reversed(&registry, &tokens, &mut bindings),
        };

        match outcome {
            Ok(()) => Ok(bindings),
            Err(error) => {
                if let Err(e) = error::report(error, registry.help_trigger(), out) {
                    tracing::warn!("failed to write diagnostic: {}", e);
                }
                Err(ParseFailure::Rejected {
                    error,
                    partial: bindings,
                })
            }
        }
    }
}

/// Positionals lead, options trail.
fn bind_forward(
    registry: &Registry,
    tokens: &[&str],
    bindings: &mut Bindings,
) -> Result<(), ParseError> {
    let (positional, options) = tokens.split_at(registry.positional_count());

    for (arg, token) in registry.positionals().iter().zip(positional) {
        if is_flag_shaped(token) {
            return Err(ParseError::NoValueForPositionalParameter);
        }
        bindings.bind(arg.slot, token);
    }

    bind_options(options, registry.optionals(), OptionRegion::Trailing, bindings)
}

/// Options lead; positionals are taken from the end, last one first.
fn bind_reversed(
    registry: &Registry,
    tokens: &[&str],
    bindings: &mut Bindings,
) -> Result<(), ParseError> {
    let split = tokens.len() - registry.positional_count();
    let (options, positional) = tokens.split_at(split);

    for (arg, token) in registry.positionals().iter().zip(positional).rev() {
        if is_flag_shaped(token) {
            return Err(ParseError::NoValueForPositionalParameter);
        }
        bindings.bind(arg.slot, token);
    }

    bind_options(options, registry.optionals(), OptionRegion::Leading, bindings)
}

fn bind_options(
    region: &[&str],
    optionals: &[OptionalArg],
    kind: OptionRegion,
    bindings: &mut Bindings,
) -> Result<(), ParseError> {
    let mut index = 0;
    while index < region.len() {
        let arg = classifier::lookup(region[index], optionals, kind)?;
        if arg.is_valuable() {
            let value = classifier::value_after(region, index)?;
            bindings.bind(arg.slot, value);
            index += 2;
        } else {
            bindings.bind(arg.slot, FLAG_PRESENT);
            index += 1;
        }
    }
    Ok(())
}

fn emit<W: Write + ?Sized>(out: &mut W, text: &str) {
    if let Err(e) = out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
        tracing::warn!("failed to write help output: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(registry: Registry, tokens: &[&str]) -> (Result<Bindings, ParseFailure>, String) {
        let mut out = Vec::new();
        let result = registry.parse_to(tokens, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_no_tokens_no_arguments_succeeds() {
        let (result, out) = parse(Registry::new("usage", ""), &[]);
        assert!(result.unwrap().is_empty());
        assert!(out.is_empty());
    }

    #[test]
    fn test_no_tokens_with_options_only_succeeds() {
        let mut registry = Registry::new("usage", "");
        let flag = registry.add_optional("--flag", "-f", "", "").unwrap();
        let (result, _) = parse(registry, &[]);
        assert_eq!(result.unwrap().get(flag), None);
    }

    #[test]
    fn test_unset_trigger_ignores_empty_token() {
        let mut registry = Registry::new("usage", "");
        let arg = registry.add_positional("ARG", "").unwrap();
        let (result, out) = parse(registry, &[""]);
        assert_eq!(result.unwrap().get(arg), Some(""));
        assert!(out.is_empty());
    }

    #[test]
    fn test_leading_key_without_value() {
        let mut registry = Registry::new("usage", "");
        registry.add_optional("--out", "-o", "", "FILE").unwrap();
        let (result, _) = parse(registry, &["-o"]);
        assert_eq!(
            result.unwrap_err().error(),
            Some(ParseError::NoValueForOptionalParameter)
        );
    }

    #[test]
    fn test_reversed_value_must_stay_in_option_region() {
        let mut registry = Registry::new("usage", "");
        let file = registry.add_positional("FILE", "").unwrap();
        registry.add_optional("--out", "-o", "", "DIR").unwrap();
        let (result, _) = parse(registry, &["-o", "input.txt"]);
        let failure = result.unwrap_err();
        assert_eq!(failure.error(), Some(ParseError::NoValueForOptionalParameter));
        assert_eq!(failure.partial().unwrap().get(file), Some("input.txt"));
    }
}
