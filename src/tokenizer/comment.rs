use nom::{
    branch::alt,
    bytes::complete::{tag, take_until},
    combinator::{recognize, rest, value},
    error::context,
    sequence::{pair, tuple},
};
use serde::{Deserialize, Serialize};

use super::token::{ParserResult, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentType {
    Line,  // //
    Block, // /* */
}

#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_line_comment(input: &str) -> ParserResult<TokenKind> {
    context(
        "line comment",
        value(
            TokenKind::Comment(CommentType::Line),
            recognize(pair(tag("//"), rest)),
        ),
    )(input)
}

/// Block comment opened and closed on the same line.
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_block_comment(input: &str) -> ParserResult<TokenKind> {
    context(
        "block comment",
        value(
            TokenKind::Comment(CommentType::Block),
            recognize(tuple((tag("/*"), take_until("*/"), tag("*/")))),
        ),
    )(input)
}

#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_comment(input: &str) -> ParserResult<TokenKind> {
    context("comment", alt((parse_block_comment, parse_line_comment)))(input)
}
