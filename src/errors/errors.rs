use thiserror::Error;

/// A grammar violation, raised by the first rule that cannot proceed.
///
/// Every variant carries the display form of the token the parser was
/// looking at when it failed. That token is still the parser's current
/// lookahead afterwards, so the caller can inspect it to decide how to
/// resynchronize.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("unknown token {found}, expecting expression")]
    ExpectedExpression { found: String },
    #[error("expected ')' after expression, found {found}")]
    ExpectedClosingParen { found: String },
    #[error("expected ',' or ')' in argument list, found {found}")]
    ExpectedArgumentSeparator { found: String },
    #[error("expected function name in prototype, found {found}")]
    ExpectedFunctionName { found: String },
    #[error("expected '(' in prototype, found {found}")]
    ExpectedPrototypeOpen { found: String },
    #[error("expected ')' in prototype, found {found}")]
    ExpectedPrototypeClose { found: String },
    #[error("expected 'then' in conditional, found {found}")]
    ExpectedThen { found: String },
    #[error("expected 'else' in conditional, found {found}")]
    ExpectedElse { found: String },
}

impl ParseError {
    pub fn name(&self) -> &'static str {
        match self {
            ParseError::ExpectedExpression { .. } => "ExpectedExpression",
            ParseError::ExpectedClosingParen { .. } => "ExpectedClosingParen",
            ParseError::ExpectedArgumentSeparator { .. } => "ExpectedArgumentSeparator",
            ParseError::ExpectedFunctionName { .. } => "ExpectedFunctionName",
            ParseError::ExpectedPrototypeOpen { .. } => "ExpectedPrototypeOpen",
            ParseError::ExpectedPrototypeClose { .. } => "ExpectedPrototypeClose",
            ParseError::ExpectedThen { .. } => "ExpectedThen",
            ParseError::ExpectedElse { .. } => "ExpectedElse",
        }
    }
}
