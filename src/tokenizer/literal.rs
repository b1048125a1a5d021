use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{anychar, char, digit1, satisfy},
    combinator::{not, recognize, value},
    error::context,
    multi::many0,
    sequence::{delimited, pair, terminated, tuple},
};

use super::token::{is_word_char, ParserResult, TokenKind};

#[tracing::instrument(level = "debug", skip(input))]
fn parse_escape(input: &str) -> ParserResult<&str> {
    context("escape", recognize(pair(char('\\'), anychar)))(input)
}

#[tracing::instrument(level = "debug", skip(input))]
fn parse_string_part(input: &str) -> ParserResult<&str> {
    context(
        "string literal part",
        take_while1(|c| c != '"' && c != '\\'),
    )(input)
}

/// Double-quoted string; `\` escapes the next character. A string left open at
/// the end of the line does not match.
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_string_literal(input: &str) -> ParserResult<TokenKind> {
    context(
        "string literal",
        value(
            TokenKind::StringLiteral,
            recognize(delimited(
                char('"'),
                many0(alt((parse_string_part, parse_escape))),
                char('"'),
            )),
        ),
    )(input)
}

/// Digits with an optional fraction, ending on a word boundary. When the fraction
/// is followed by a word character the integer part alone is tried.
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_number_literal(input: &str) -> ParserResult<TokenKind> {
    context(
        "number literal",
        value(
            TokenKind::NumericLiteral,
            alt((
                terminated(
                    recognize(tuple((digit1, char('.'), digit1))),
                    not(satisfy(is_word_char)),
                ),
                terminated(digit1, not(satisfy(is_word_char))),
            )),
        ),
    )(input)
}

/// Resolves escape pairs inside a quoted string lexeme and drops the quotes.
pub fn unescape(lexeme: &str) -> String {
    let inner = lexeme
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(lexeme);

    let mut result = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some(other) => result.push(other),
            None => result.push('\\'),
        }
    }
    result
}

pub fn number_value(lexeme: &str) -> Option<f64> {
    lexeme.parse::<f64>().ok()
}
