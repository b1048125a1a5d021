//! # Keyword Token Handling
//!
//! Keywords come in two spellings, French and English, and both spellings of a
//! keyword map to the same concept: `Si` and `If` are both [`ControlKeyword::If`].
//!
//! Matching is case-sensitive and whole-word: a spelling only matches when it is
//! not followed by another word character, so `Algorithme2` stays an identifier.
//! The caller is responsible for the leading boundary.

use std::str::FromStr;

use nom::{
    bytes::complete::tag,
    character::complete::satisfy,
    combinator::{map, map_res, not},
    error::{context, ErrorKind, ParseError, VerboseError},
    sequence::terminated,
};

use super::token::{is_word_char, ParserResult, TokenKind};

/// Flow-control and logical keywords.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display, strum::EnumIter,
)]
pub enum ControlKeyword {
    #[strum(to_string = "Algorithme", serialize = "Algorithm")]
    Algorithm,
    #[strum(to_string = "Variables")]
    Variables,
    #[strum(to_string = "Début", serialize = "Debut", serialize = "Begin")]
    Begin,
    #[strum(to_string = "Fin", serialize = "End")]
    End,
    #[strum(to_string = "Si", serialize = "If")]
    If,
    #[strum(to_string = "Alors", serialize = "Then")]
    Then,
    #[strum(to_string = "Sinon", serialize = "Else")]
    Else,
    #[strum(to_string = "Tant que", serialize = "While")]
    While,
    #[strum(to_string = "Faire", serialize = "Do")]
    Do,
    #[strum(to_string = "Pour", serialize = "For")]
    For,
    #[strum(to_string = "ET", serialize = "AND")]
    And,
    #[strum(to_string = "OU", serialize = "OR")]
    Or,
    #[strum(to_string = "NON", serialize = "NOT")]
    Not,
}

/// Spellings in match order.
const CONTROL_WORDS: &[&str] = &[
    "Algorithme",
    "Algorithm",
    "Variables",
    "Debut",
    "Début",
    "Begin",
    "Fin",
    "End",
    "Si",
    "If",
    "Alors",
    "Then",
    "Sinon",
    "Else",
    "Tant que",
    "While",
    "Faire",
    "Do",
    "Pour",
    "For",
    "ET",
    "AND",
    "OU",
    "OR",
    "NON",
    "NOT",
];

impl ControlKeyword {
    pub fn spellings(&self) -> &'static [&'static str] {
        match self {
            ControlKeyword::Algorithm => &["Algorithme", "Algorithm"],
            ControlKeyword::Variables => &["Variables"],
            ControlKeyword::Begin => &["Début", "Debut", "Begin"],
            ControlKeyword::End => &["Fin", "End"],
            ControlKeyword::If => &["Si", "If"],
            ControlKeyword::Then => &["Alors", "Then"],
            ControlKeyword::Else => &["Sinon", "Else"],
            ControlKeyword::While => &["Tant que", "While"],
            ControlKeyword::Do => &["Faire", "Do"],
            ControlKeyword::For => &["Pour", "For"],
            ControlKeyword::And => &["ET", "AND"],
            ControlKeyword::Or => &["OU", "OR"],
            ControlKeyword::Not => &["NON", "NOT"],
        }
    }

    pub fn french(&self) -> &'static str {
        self.spellings()[0]
    }

    pub fn english(&self) -> &'static str {
        let spellings = self.spellings();
        spellings[spellings.len() - 1]
    }
}

/// Input/output built-ins.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display, strum::EnumIter,
)]
pub enum IoKeyword {
    #[strum(to_string = "Lire", serialize = "Read")]
    Read,
    #[strum(to_string = "Ecrire", serialize = "Write")]
    Write,
}

const IO_WORDS: &[&str] = &["Lire", "Read", "Ecrire", "Write"];

impl IoKeyword {
    pub fn french(&self) -> &'static str {
        match self {
            IoKeyword::Read => "Lire",
            IoKeyword::Write => "Ecrire",
        }
    }

    pub fn english(&self) -> &'static str {
        match self {
            IoKeyword::Read => "Read",
            IoKeyword::Write => "Write",
        }
    }
}

/// Matches the first of `words` (in order) that ends on a word boundary.
pub fn whole_word<'a>(
    words: &'static [&'static str],
) -> impl FnMut(&'a str) -> ParserResult<'a, &'a str> {
    move |input: &'a str| {
        for word in words {
            let result: ParserResult<&str> =
                terminated(tag(*word), not(satisfy(is_word_char)))(input);
            if result.is_ok() {
                return result;
            }
        }
        Err(nom::Err::Error(VerboseError::from_error_kind(
            input,
            ErrorKind::Tag,
        )))
    }
}

#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_control_keyword(input: &str) -> ParserResult<TokenKind> {
    context(
        "control keyword",
        map(
            map_res(whole_word(CONTROL_WORDS), ControlKeyword::from_str),
            TokenKind::ControlKeyword,
        ),
    )(input)
}

#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_io_keyword(input: &str) -> ParserResult<TokenKind> {
    context(
        "io keyword",
        map(
            map_res(whole_word(IO_WORDS), IoKeyword::from_str),
            TokenKind::IoKeyword,
        ),
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_control_keywords() {
        let test_cases = [
            ("Algorithme", ControlKeyword::Algorithm),
            ("Debut", ControlKeyword::Begin),
            ("Début", ControlKeyword::Begin),
            ("Begin", ControlKeyword::Begin),
            ("Sinon", ControlKeyword::Else),
            ("Tant que", ControlKeyword::While),
            ("NOT", ControlKeyword::Not),
        ];

        for (input, expected) in test_cases.iter() {
            let (rest, kind) = parse_control_keyword(input).unwrap();
            assert_eq!(kind, TokenKind::ControlKeyword(*expected));
            assert_eq!(rest, "");
        }
    }

    #[test]
    fn test_whole_word_backtracks_to_longer_spelling() {
        // "Si" is listed before "Sinon" but fails its boundary check.
        let (rest, kind) = parse_control_keyword("Sinon x").unwrap();
        assert_eq!(kind, TokenKind::ControlKeyword(ControlKeyword::Else));
        assert_eq!(rest, " x");
    }

    #[test]
    fn test_partial_words_rejected() {
        assert!(parse_control_keyword("Algorithme2").is_err());
        assert!(parse_control_keyword("Fini").is_err());
        assert!(parse_control_keyword("Tant").is_err());
        assert!(parse_control_keyword("et").is_err());
        assert!(parse_io_keyword("Lire_tout").is_err());
    }

    #[test]
    fn test_keyword_followed_by_punctuation() {
        let (rest, kind) = parse_io_keyword("Ecrire(x)").unwrap();
        assert_eq!(kind, TokenKind::IoKeyword(IoKeyword::Write));
        assert_eq!(rest, "(x)");
    }

    #[test]
    fn test_every_spelling_parses_to_its_concept() {
        for keyword in ControlKeyword::iter() {
            for spelling in keyword.spellings() {
                assert!(CONTROL_WORDS.contains(spelling));
                assert_eq!(ControlKeyword::from_str(spelling).unwrap(), keyword);
            }
        }
        for keyword in IoKeyword::iter() {
            assert_eq!(IoKeyword::from_str(keyword.french()).unwrap(), keyword);
            assert_eq!(IoKeyword::from_str(keyword.english()).unwrap(), keyword);
        }
    }

    #[test]
    fn test_display_is_french() {
        assert_eq!(ControlKeyword::While.to_string(), "Tant que");
        assert_eq!(ControlKeyword::While.english(), "While");
        assert_eq!(IoKeyword::Write.to_string(), "Ecrire");
    }
}
