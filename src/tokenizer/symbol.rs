//! # Symbol Token Handling
//!
//! Operators and punctuation of the pseudocode language.
//!
//! ## Parsing Strategy
//!
//! Two-character symbols are matched by their own rules, which run before the
//! single-character operator rule: `<-` is an assignment rather than `<` then `-`,
//! and `<=` is a comparison rather than `<` then `=`.

use std::str::FromStr;

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, one_of},
    combinator::{map, map_opt, map_res, recognize, value},
    error::context,
    sequence::pair,
};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use super::token::{ParserResult, TokenKind};

/// Two-character comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum Comparison {
    /// `<=`
    #[strum(serialize = "<=")]
    LessEqual,
    /// `>=`
    #[strum(serialize = ">=")]
    GreaterEqual,
    /// `==`
    #[strum(serialize = "==")]
    EqualEqual,
    /// `!=`
    #[strum(serialize = "!=")]
    NotEqual,
}

/// Single-character operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum Operator {
    #[strum(serialize = "<")]
    Less,
    #[strum(serialize = ">")]
    Greater,
    /// `=`, equality test in conditions
    #[strum(serialize = "=")]
    Equal,
    #[strum(serialize = "!")]
    Not,
    #[strum(serialize = "+")]
    Plus,
    #[strum(serialize = "-")]
    Minus,
    #[strum(serialize = "*")]
    Multiply,
    #[strum(serialize = "/")]
    Divide,
    #[strum(serialize = "%")]
    Modulo,
}

/// Brackets and separators. Mapped by hand since braces do not survive strum's
/// generated formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Punctuation {
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    OpenParen,
    CloseParen,
    Semicolon,
    Comma,
    Colon,
}

impl Punctuation {
    pub fn as_char(&self) -> char {
        match self {
            Punctuation::OpenBrace => '{',
            Punctuation::CloseBrace => '}',
            Punctuation::OpenBracket => '[',
            Punctuation::CloseBracket => ']',
            Punctuation::OpenParen => '(',
            Punctuation::CloseParen => ')',
            Punctuation::Semicolon => ';',
            Punctuation::Comma => ',',
            Punctuation::Colon => ':',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '{' => Some(Punctuation::OpenBrace),
            '}' => Some(Punctuation::CloseBrace),
            '[' => Some(Punctuation::OpenBracket),
            ']' => Some(Punctuation::CloseBracket),
            '(' => Some(Punctuation::OpenParen),
            ')' => Some(Punctuation::CloseParen),
            ';' => Some(Punctuation::Semicolon),
            ',' => Some(Punctuation::Comma),
            ':' => Some(Punctuation::Colon),
            _ => None,
        }
    }
}

/// Parses the assignment arrow `<-`.
///
/// ```
/// # use pseudolex::tokenizer::symbol::parse_assignment;
/// # use pseudolex::tokenizer::token::TokenKind;
/// let (rest, kind) = parse_assignment("<- 5").unwrap();
/// assert_eq!(kind, TokenKind::Assignment);
/// assert_eq!(rest, " 5");
/// ```
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_assignment(input: &str) -> ParserResult<TokenKind> {
    context("assignment", value(TokenKind::Assignment, tag("<-")))(input)
}

/// Parses one of `<`, `>`, `=`, `!` directly followed by `=`.
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_comparison(input: &str) -> ParserResult<TokenKind> {
    context(
        "comparison",
        map(
            map_res(
                recognize(pair(one_of("<>=!"), char('='))),
                Comparison::from_str,
            ),
            TokenKind::Comparison,
        ),
    )(input)
}

#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_operator(input: &str) -> ParserResult<TokenKind> {
    context(
        "operator",
        map(
            alt((
                value(Operator::Less, char('<')),
                value(Operator::Greater, char('>')),
                value(Operator::Equal, char('=')),
                value(Operator::Not, char('!')),
                value(Operator::Plus, char('+')),
                value(Operator::Minus, char('-')),
                value(Operator::Multiply, char('*')),
                value(Operator::Divide, char('/')),
                value(Operator::Modulo, char('%')),
            )),
            TokenKind::Operator,
        ),
    )(input)
}

#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_punctuation(input: &str) -> ParserResult<TokenKind> {
    context(
        "punctuation",
        map(
            map_opt(one_of("{}[]();,:"), Punctuation::from_char),
            TokenKind::Punctuation,
        ),
    )(input)
}
