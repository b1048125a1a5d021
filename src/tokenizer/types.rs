use std::str::FromStr;

use nom::{
    combinator::{map, map_res},
    error::context,
};

use super::{
    keyword::whole_word,
    token::{ParserResult, TokenKind},
};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display, strum::EnumIter,
)]
pub enum TypeKeyword {
    #[strum(to_string = "entier", serialize = "integer")]
    Integer,
    #[strum(to_string = "chaine", serialize = "string")]
    String,
    #[strum(to_string = "booleen", serialize = "boolean")]
    Boolean,
    #[strum(to_string = "tableau d'entier", serialize = "arrayint")]
    IntegerArray,
    #[strum(to_string = "tableau")]
    Array,
}

// "tableau d'entier" has to be tried before its prefix "tableau".
const TYPE_WORDS: &[&str] = &[
    "entier",
    "integer",
    "chaine",
    "string",
    "booleen",
    "boolean",
    "tableau d'entier",
    "arrayint",
    "tableau",
];

#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_type_keyword(input: &str) -> ParserResult<TokenKind> {
    context(
        "type keyword",
        map(
            map_res(whole_word(TYPE_WORDS), TypeKeyword::from_str),
            TokenKind::TypeKeyword,
        ),
    )(input)
}
