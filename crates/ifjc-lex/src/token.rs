//! Token definitions for the IFJ25 language.
//!
//! A [`Token`] pairs a [`TokenKind`] with the source span of its first
//! character. Kinds that carry data own it directly (string lexemes with
//! escapes already resolved, numeric payloads already converted), so no
//! variant can ever expose stale state from a previous token.

use std::fmt;
use std::sync::LazyLock;

use ifjc_util::Span;
use rustc_hash::FxHashMap;

/// The kind of a lexical token, including any payload.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// End of input.
    Eof,

    /// One or more collapsed line terminators.
    Eol,

    /// Regular identifier.
    Ident(String),

    /// Global identifier, spelled with a leading `__`.
    ///
    /// The payload keeps the `__` prefix; the emitter keys its frame
    /// selection on it.
    GlobalIdent(String),

    // Keywords.
    /// `class`
    Class,
    /// `else`
    Else,
    /// `if`
    If,
    /// `import`
    Import,
    /// `is`
    Is,
    /// `null`
    Null,
    /// `return`
    Return,
    /// `static`
    Static,
    /// `var`
    Var,
    /// `while`
    While,
    /// `for`
    For,
    /// `in`
    In,
    /// `break`
    Break,
    /// `continue`
    Continue,
    /// `Num` type name
    TyNum,
    /// `string` type name
    TyString,
    /// `nulltype` type name
    TyNullType,
    /// `ifj` type name
    TyIfj,

    /// `true` or `false`.
    Bool(bool),

    /// Integer literal, 64-bit signed.
    Int(i64),

    /// Floating literal, always finite.
    Float(f64),

    /// Single-line string literal, escapes resolved.
    Str(String),

    /// Multi-line string literal, indentation rules applied.
    MultiStr(String),

    // Punctuation and operators.
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `..`
    DotDot,
    /// `...`
    DotDotDot,
    /// `:`
    Colon,
    /// `?`
    Question,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `=`
    Assign,
    /// `==`
    EqEq,
    /// `!=`
    NotEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
    /// `!`
    Not,
    /// `&&`
    AndAnd,
    /// `||`
    OrOr,
}

impl TokenKind {
    /// Returns true for the end-of-line token.
    #[inline]
    pub fn is_eol(&self) -> bool {
        matches!(self, TokenKind::Eol)
    }

    /// Returns true for the end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::Eof)
    }

    /// Returns true for tokens that can stand as a call argument or as
    /// the `i` terminal of the expression grammar.
    pub fn is_operand(&self) -> bool {
        matches!(
            self,
            TokenKind::Ident(_)
                | TokenKind::GlobalIdent(_)
                | TokenKind::Int(_)
                | TokenKind::Float(_)
                | TokenKind::Str(_)
                | TokenKind::MultiStr(_)
                | TokenKind::Bool(_)
                | TokenKind::Null
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Eof => write!(f, "end of input"),
            TokenKind::Eol => write!(f, "end of line"),
            TokenKind::Ident(name) | TokenKind::GlobalIdent(name) => {
                write!(f, "identifier '{}'", name)
            }
            TokenKind::Class => write!(f, "'class'"),
            TokenKind::Else => write!(f, "'else'"),
            TokenKind::If => write!(f, "'if'"),
            TokenKind::Import => write!(f, "'import'"),
            TokenKind::Is => write!(f, "'is'"),
            TokenKind::Null => write!(f, "'null'"),
            TokenKind::Return => write!(f, "'return'"),
            TokenKind::Static => write!(f, "'static'"),
            TokenKind::Var => write!(f, "'var'"),
            TokenKind::While => write!(f, "'while'"),
            TokenKind::For => write!(f, "'for'"),
            TokenKind::In => write!(f, "'in'"),
            TokenKind::Break => write!(f, "'break'"),
            TokenKind::Continue => write!(f, "'continue'"),
            TokenKind::TyNum => write!(f, "'Num'"),
            TokenKind::TyString => write!(f, "'string'"),
            TokenKind::TyNullType => write!(f, "'nulltype'"),
            TokenKind::TyIfj => write!(f, "'ifj'"),
            TokenKind::Bool(value) => write!(f, "'{}'", value),
            TokenKind::Int(value) => write!(f, "integer literal {}", value),
            TokenKind::Float(value) => write!(f, "float literal {}", value),
            TokenKind::Str(_) => write!(f, "string literal"),
            TokenKind::MultiStr(_) => write!(f, "multi-line string literal"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::LBrace => write!(f, "'{{'"),
            TokenKind::RBrace => write!(f, "'}}'"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::Dot => write!(f, "'.'"),
            TokenKind::DotDot => write!(f, "'..'"),
            TokenKind::DotDotDot => write!(f, "'...'"),
            TokenKind::Colon => write!(f, "':'"),
            TokenKind::Question => write!(f, "'?'"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Star => write!(f, "'*'"),
            TokenKind::Slash => write!(f, "'/'"),
            TokenKind::Assign => write!(f, "'='"),
            TokenKind::EqEq => write!(f, "'=='"),
            TokenKind::NotEq => write!(f, "'!='"),
            TokenKind::Lt => write!(f, "'<'"),
            TokenKind::LtEq => write!(f, "'<='"),
            TokenKind::Gt => write!(f, "'>'"),
            TokenKind::GtEq => write!(f, "'>='"),
            TokenKind::Not => write!(f, "'!'"),
            TokenKind::AndAnd => write!(f, "'&&'"),
            TokenKind::OrOr => write!(f, "'||'"),
        }
    }
}

/// A lexical token with its source position.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// What was recognized, including any payload.
    pub kind: TokenKind,
    /// Position of the token's first character.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    FxHashMap::from_iter([
        ("class", TokenKind::Class),
        ("else", TokenKind::Else),
        ("if", TokenKind::If),
        ("import", TokenKind::Import),
        ("is", TokenKind::Is),
        ("null", TokenKind::Null),
        ("return", TokenKind::Return),
        ("static", TokenKind::Static),
        ("var", TokenKind::Var),
        ("while", TokenKind::While),
        ("for", TokenKind::For),
        ("in", TokenKind::In),
        ("break", TokenKind::Break),
        ("continue", TokenKind::Continue),
        ("Num", TokenKind::TyNum),
        ("string", TokenKind::TyString),
        ("nulltype", TokenKind::TyNullType),
        ("ifj", TokenKind::TyIfj),
        ("true", TokenKind::Bool(true)),
        ("false", TokenKind::Bool(false)),
    ])
});

/// Looks up a lexed identifier in the keyword/boolean table.
///
/// Returns the keyword kind if `text` is reserved, `None` otherwise.
pub fn keyword_from_ident(text: &str) -> Option<TokenKind> {
    KEYWORDS.get(text).cloned()
}
