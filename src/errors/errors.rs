use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone)]
#[error("{internal_error} at offset {}", .position.0)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::ExpectedPrimary { .. } => "ExpectedPrimary",
            ErrorImpl::ExpectedCloseParen { .. } => "ExpectedCloseParen",
            ErrorImpl::ExpectedArgsDelimiter { .. } => "ExpectedArgsDelimiter",
            ErrorImpl::ExpectedFunctionName { .. } => "ExpectedFunctionName",
            ErrorImpl::ExpectedOpenParen { .. } => "ExpectedOpenParen",
            ErrorImpl::ExpectedParameter { .. } => "ExpectedParameter",
            ErrorImpl::DuplicateParameter { .. } => "DuplicateParameter",
            ErrorImpl::ExpectedKeyword { .. } => "ExpectedKeyword",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, does it contain more than one '.'?",
                token
            )),
            ErrorImpl::ExpectedPrimary { found } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected a number, identifier or '('",
                found
            )),
            ErrorImpl::ExpectedCloseParen { found } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a ')'?",
                found
            )),
            ErrorImpl::ExpectedArgsDelimiter { found } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, arguments are separated by ',' and closed by ')'",
                found
            )),
            ErrorImpl::ExpectedFunctionName { .. } => ErrorTip::None,
            ErrorImpl::ExpectedOpenParen { name, .. } => ErrorTip::Suggestion(format!(
                "Parameter list of `{}` must start with '('",
                name
            )),
            ErrorImpl::ExpectedParameter { found } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, parameters must be identifiers",
                found
            )),
            ErrorImpl::DuplicateParameter { function, parameter } => ErrorTip::Suggestion(format!(
                "Parameter `{}` of `{}` is declared more than once",
                parameter, function
            )),
            ErrorImpl::ExpectedKeyword { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("expected a primary expression, found {found}")]
    ExpectedPrimary { found: String },
    #[error("expected ')' after parenthesized expression, found {found}")]
    ExpectedCloseParen { found: String },
    #[error("expected ')' or ',' in args list, found {found}")]
    ExpectedArgsDelimiter { found: String },
    #[error("expected function name in prototype, found {found}")]
    ExpectedFunctionName { found: String },
    #[error("expected '(' after function name {name:?} in prototype, found {found}")]
    ExpectedOpenParen { name: String, found: String },
    #[error("expected an identifier, ',' or ')' in prototype parameter list, found {found}")]
    ExpectedParameter { found: String },
    #[error("parameter {parameter:?} of {function:?} declared more than once")]
    DuplicateParameter { function: String, parameter: String },
    #[error("expected {keyword}, found {found}")]
    ExpectedKeyword { keyword: String, found: String },
}
