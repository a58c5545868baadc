//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! Keeps token construction in the lexer down to one line per token kind.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$text` - The raw lexeme (empty when not applicable)
/// * `$number` - The numeric value (`f64::NAN` unless `$kind` is `Number`)
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), 42.0, span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $number:expr, $span:expr) => {
        Token {
            kind: $kind,
            text: $text,
            number: $number,
            span: $span,
        }
    };
    ($kind:expr, $span:expr) => {
        Token {
            kind: $kind,
            text: String::new(),
            number: f64::NAN,
            span: $span,
        }
    };
}
