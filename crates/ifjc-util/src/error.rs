//! Core error types for the compiler pipeline.
//!
//! Every stage reports failure through [`CompileError`]. The [`ErrorKind`]
//! carried inside selects the process exit code; the message and position
//! feed the single-line diagnostic the driver prints to stderr.

use thiserror::Error;

use crate::Span;

/// Category of a compilation failure.
///
/// The numeric mapping follows the IFJ25 assignment's exit code table.
/// The two runtime kinds (25 and 26) are produced by the target VM, not
/// by the compiler itself; they are listed so the whole table lives in
/// one place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// Malformed lexeme in the source text.
    #[error("lexical error")]
    Lexical,

    /// Token stream does not match the grammar.
    #[error("syntax error")]
    Syntax,

    /// Use of a function or variable that was never declared.
    #[error("undefined function or variable")]
    Undefined,

    /// A name declared twice in the same scope.
    #[error("redefinition of function or variable")]
    Redefinition,

    /// Call with the wrong number of arguments.
    #[error("wrong number of arguments in call")]
    ArgumentCount,

    /// Incompatible operand types in an expression.
    #[error("type mismatch in expression")]
    TypeMismatch,

    /// Any other semantic violation.
    #[error("semantic error")]
    Semantic,

    /// Runtime: wrong parameter type (reported by the VM).
    #[error("wrong parameter type")]
    RuntimeParamType,

    /// Runtime: wrong operand type in an expression (reported by the VM).
    #[error("wrong type in expression")]
    RuntimeExprType,

    /// Allocation failure or violated compiler invariant.
    #[error("internal compiler error")]
    Internal,
}

impl ErrorKind {
    /// Returns the process exit code for this error kind.
    pub const fn exit_code(self) -> i32 {
        match self {
            ErrorKind::Lexical => 1,
            ErrorKind::Syntax => 2,
            ErrorKind::Undefined => 3,
            ErrorKind::Redefinition => 4,
            ErrorKind::ArgumentCount => 5,
            ErrorKind::TypeMismatch => 6,
            ErrorKind::Semantic => 10,
            ErrorKind::RuntimeParamType => 25,
            ErrorKind::RuntimeExprType => 26,
            ErrorKind::Internal => 99,
        }
    }
}

/// A positioned compilation error.
///
/// Displays as `line:col: message`, the exact single-line form the driver
/// writes to stderr.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{line}:{column}: {message}")]
pub struct CompileError {
    /// Failure category, selects the exit code.
    pub kind: ErrorKind,
    /// Human-readable description of what went wrong.
    pub message: String,
    /// Line of the offending source position (1-based).
    pub line: u32,
    /// Column of the offending source position (1-based).
    pub column: u32,
}

impl CompileError {
    /// Creates an error of the given kind at the given span.
    pub fn new(kind: ErrorKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            message: message.into(),
            line: span.line,
            column: span.column,
        }
    }

    /// Lexical error (exit code 1).
    pub fn lexical(message: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorKind::Lexical, message, span)
    }

    /// Syntax error (exit code 2).
    pub fn syntax(message: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorKind::Syntax, message, span)
    }

    /// Undefined function or variable (exit code 3).
    pub fn undefined(message: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorKind::Undefined, message, span)
    }

    /// Redefinition of function or variable (exit code 4).
    pub fn redefinition(message: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorKind::Redefinition, message, span)
    }

    /// Wrong number of call arguments (exit code 5).
    pub fn argument_count(message: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorKind::ArgumentCount, message, span)
    }

    /// Other semantic error (exit code 10).
    pub fn semantic(message: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorKind::Semantic, message, span)
    }

    /// Internal compiler error (exit code 99).
    pub fn internal(message: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorKind::Internal, message, span)
    }

    /// Returns the process exit code for this error.
    pub const fn exit_code(&self) -> i32 {
        self.kind.exit_code()
    }
}

/// Result type alias used across all compiler phases.
pub type Result<T> = std::result::Result<T, CompileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ErrorKind::Lexical.exit_code(), 1);
        assert_eq!(ErrorKind::Syntax.exit_code(), 2);
        assert_eq!(ErrorKind::Undefined.exit_code(), 3);
        assert_eq!(ErrorKind::Redefinition.exit_code(), 4);
        assert_eq!(ErrorKind::ArgumentCount.exit_code(), 5);
        assert_eq!(ErrorKind::TypeMismatch.exit_code(), 6);
        assert_eq!(ErrorKind::Semantic.exit_code(), 10);
        assert_eq!(ErrorKind::RuntimeParamType.exit_code(), 25);
        assert_eq!(ErrorKind::RuntimeExprType.exit_code(), 26);
        assert_eq!(ErrorKind::Internal.exit_code(), 99);
    }

    #[test]
    fn test_display_format() {
        let err = CompileError::lexical("unterminated string literal", Span::new(5, 6, 3, 14));
        assert_eq!(err.to_string(), "3:14: unterminated string literal");
    }

    #[test]
    fn test_error_carries_position() {
        let err = CompileError::syntax("unexpected token", Span::point(7, 2));
        assert_eq!(err.line, 7);
        assert_eq!(err.column, 2);
        assert_eq!(err.exit_code(), 2);
    }
}
