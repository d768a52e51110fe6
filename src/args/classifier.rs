//! Token classifier: decides what a raw token is allowed to be.

use crate::args::registry::OptionalArg;
use crate::error::ParseError;

/// Leading characters that mark a token as a key rather than a value.
pub const FLAG_INTRODUCERS: [char; 2] = ['-', '/'];

/// Check only the first character; an empty token is never flag-shaped.
pub fn is_flag_shaped(token: &str) -> bool {
    token
        .chars()
        .next()
        .is_some_and(|c| FLAG_INTRODUCERS.contains(&c))
}

/// Order in which the token vector is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Positionals first, options after them.
    Forward,
    /// Options first, positionals taken from the end.
    Reversed,
}

impl ScanMode {
    /// Pick the mode from the first token. No tokens scans forward.
    pub fn select(first: Option<&str>) -> Self {
        match first {
            Some(token) if is_flag_shaped(token) => ScanMode::Reversed,
            _ => ScanMode::Forward,
        }
    }
}

/// Where the option tokens sit relative to the positionals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionRegion {
    /// After the positionals (forward mode).
    Trailing,
    /// Before the positionals (reversed mode). Every token that is not a
    /// value must be flag-shaped.
    Leading,
}

/// Resolve `token` to the optional argument it names.
pub fn lookup<'a>(
    token: &str,
    optionals: &'a [OptionalArg],
    region: OptionRegion,
) -> Result<&'a OptionalArg, ParseError> {
    if region == OptionRegion::Leading && !is_flag_shaped(token) {
        return Err(ParseError::WrongSyntax);
    }
    optionals
        .iter()
        .find(|o| o.matches(token))
        .ok_or(ParseError::UnknownParameter)
}

/// Value token following the key at `index`, which must stay inside `region`.
pub fn value_after<'t>(region: &[&'t str], index: usize) -> Result<&'t str, ParseError> {
    match region.get(index + 1) {
        Some(value) if !is_flag_shaped(value) => Ok(*value),
        Some(_) | None => Err(ParseError::NoValueForOptionalParameter),
    }
}
