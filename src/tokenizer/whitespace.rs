//! # Whitespace Token Handling
//!
//! Whitespace is kept as tokens so that a scanned line can be rebuilt exactly.
//! A run of whitespace characters of any kind becomes one token.

use nom::{bytes::complete::take_while1, combinator::value, error::context};

use super::token::{ParserResult, TokenKind};

/// Parses a run of whitespace.
///
/// ```
/// # use pseudolex::tokenizer::whitespace::parse_whitespace;
/// # use pseudolex::tokenizer::token::TokenKind;
/// let (rest, kind) = parse_whitespace(" \t x").unwrap();
/// assert_eq!(kind, TokenKind::Whitespace);
/// assert_eq!(rest, "x");
/// ```
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_whitespace(input: &str) -> ParserResult<TokenKind> {
    context(
        "whitespace expected",
        value(TokenKind::Whitespace, take_while1(char::is_whitespace)),
    )(input)
}
