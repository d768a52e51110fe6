//! Error taxonomy and diagnostic reporting for the parser.
//!
//! Every rejected parse maps to exactly one [`ParseError`]. The reporter turns
//! it into a one-line sentence plus a hint pointing at the help trigger.

use std::io::{self, Write};

use thiserror::Error;

use crate::args::{Bindings, HelpTrigger};

/// Reasons a token vector is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token in the option region matches no registered key.
    #[error("Unknown argument or option!")]
    UnknownParameter,

    /// A valuable option is last in its region or followed by a key.
    #[error("Need a value for optional parameter!")]
    NoValueForOptionalParameter,

    /// A token in the positional region starts with a flag-introducer.
    #[error("Need a value for non-optional parameter!")]
    NoValueForPositionalParameter,

    /// Token count outside `P ..= P + O + V`.
    #[error("Wrong number of parameters!")]
    WrongParameterCount,

    /// A value landed where an option key was expected.
    #[error("Wrong command line syntax!")]
    WrongSyntax,
}

impl ParseError {
    /// Stable identifier, used by the binary's JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::UnknownParameter => "unknown_parameter",
            ParseError::NoValueForOptionalParameter => "no_value_for_optional_parameter",
            ParseError::NoValueForPositionalParameter => "no_value_for_positional_parameter",
            ParseError::WrongParameterCount => "wrong_parameter_count",
            ParseError::WrongSyntax => "wrong_syntax",
        }
    }
}

/// Why a parse call returned without a full set of bindings.
///
/// Output has always been written to the sink by the time this is returned.
#[derive(Debug, Error)]
pub enum ParseFailure {
    /// The help trigger was present; full help was rendered.
    #[error("help requested")]
    HelpRequested,

    /// Tokens were rejected. `partial` holds whatever was bound before the
    /// failing token; nothing is rolled back.
    #[error("{error}")]
    Rejected { error: ParseError, partial: Bindings },
}

impl ParseFailure {
    /// The taxonomy entry behind a rejection, `None` for a help request.
    pub fn error(&self) -> Option<ParseError> {
        match self {
            ParseFailure::HelpRequested => None,
            ParseFailure::Rejected { error, .. } => Some(*error),
        }
    }

    /// Slots bound before the failure, if any.
    pub fn partial(&self) -> Option<&Bindings> {
        match self {
            ParseFailure::HelpRequested => None,
            ParseFailure::Rejected { partial, .. } => Some(partial),
        }
    }
}

/// Write the diagnostic for `error` to `out`.
///
/// The hint line names the registered trigger keys and is omitted when no
/// trigger is registered.
pub fn report<W: Write + ?Sized>(
    error: ParseError,
    trigger: Option<&HelpTrigger>,
    out: &mut W,
) -> io::Result<()> {
    tracing::debug!(code = error.code(), "reporting parse error");

    writeln!(out, "Error: {}", error)?;
    if let Some(hint) = trigger.and_then(HelpTrigger::hint) {
        writeln!(out, "{}", hint)?;
    }
    Ok(())
}
