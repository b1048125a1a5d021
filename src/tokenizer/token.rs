use lazy_static::lazy_static;
use nom::{
    bytes::complete::take_while,
    character::complete::satisfy,
    combinator::recognize,
    error::{context, VerboseError},
    sequence::pair,
    IResult,
};
use serde::{Deserialize, Serialize};

use super::{
    comment::{parse_comment, CommentType},
    keyword::{parse_control_keyword, parse_io_keyword, ControlKeyword, IoKeyword},
    literal::{number_value, parse_number_literal, parse_string_literal, unescape},
    symbol::{
        parse_assignment, parse_comparison, parse_operator, parse_punctuation, Comparison,
        Operator, Punctuation,
    },
    types::{parse_type_keyword, TypeKeyword},
    whitespace::parse_whitespace,
};

/// What a token is, refined down to the keyword concept or operator it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Keywords
    ControlKeyword(ControlKeyword),
    IoKeyword(IoKeyword),
    TypeKeyword(TypeKeyword),
    // Literals
    StringLiteral,
    NumericLiteral,
    // Symbols
    Assignment,
    Comparison(Comparison),
    Operator(Operator),
    Punctuation(Punctuation),
    // Names
    Identifier,
    // Formatting
    Whitespace,
    Comment(CommentType),
    // Anything no rule recognized
    Text,
}

impl TokenKind {
    /// Collapses the kind to its semantic class, dropping which keyword or
    /// operator it was.
    ///
    /// ```
    /// # use pseudolex::tokenizer::keyword::ControlKeyword;
    /// # use pseudolex::tokenizer::token::{TokenClass, TokenKind};
    /// let kind = TokenKind::ControlKeyword(ControlKeyword::If);
    /// assert_eq!(kind.class(), TokenClass::ControlKeyword);
    /// ```
    pub fn class(&self) -> TokenClass {
        match self {
            TokenKind::ControlKeyword(_) => TokenClass::ControlKeyword,
            TokenKind::IoKeyword(_) => TokenClass::IoKeyword,
            TokenKind::TypeKeyword(_) => TokenClass::TypeKeyword,
            TokenKind::StringLiteral => TokenClass::StringLiteral,
            TokenKind::NumericLiteral => TokenClass::NumericLiteral,
            TokenKind::Assignment => TokenClass::AssignmentOperator,
            TokenKind::Comparison(_) => TokenClass::ComparisonOperator,
            TokenKind::Operator(_) => TokenClass::Operator,
            TokenKind::Punctuation(_) => TokenClass::Punctuation,
            TokenKind::Identifier => TokenClass::Identifier,
            TokenKind::Whitespace => TokenClass::Whitespace,
            TokenKind::Comment(_) => TokenClass::Comment,
            TokenKind::Text => TokenClass::Text,
        }
    }
}

/// The closed set of semantic classes a host maps to styles.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum TokenClass {
    ControlKeyword,
    IoKeyword,
    TypeKeyword,
    StringLiteral,
    NumericLiteral,
    AssignmentOperator,
    ComparisonOperator,
    Operator,
    Punctuation,
    Identifier,
    Whitespace,
    Comment,
    Text,
}

impl TokenClass {
    /// Dotted scope prefix used by editor themes, `None` for plain text.
    pub fn scope_prefix(&self) -> Option<&'static str> {
        match self {
            TokenClass::ControlKeyword => Some("keyword.control"),
            TokenClass::IoKeyword => Some("support.function"),
            TokenClass::TypeKeyword => Some("storage.type"),
            TokenClass::StringLiteral => Some("string.quoted.double"),
            TokenClass::NumericLiteral => Some("constant.numeric"),
            TokenClass::AssignmentOperator => Some("keyword.operator.assignment"),
            TokenClass::ComparisonOperator => Some("keyword.operator.comparison"),
            TokenClass::Operator => Some("keyword.operator"),
            TokenClass::Punctuation => Some("punctuation.definition"),
            TokenClass::Identifier => Some("variable.other"),
            TokenClass::Comment => Some("comment"),
            TokenClass::Whitespace | TokenClass::Text => None,
        }
    }
}

/// One classified piece of a scanned line.
///
/// Tokens own their lexeme. The lexemes of the tokens returned for a line,
/// concatenated in order, are exactly that line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Token {
    /// Creates a token from its kind and the text it covers.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }

    /// Semantic class of the token, see [`TokenKind::class`].
    pub fn class(&self) -> TokenClass {
        self.kind.class()
    }

    /// Editor scope name, e.g. `keyword.control.pseudocode` for suffix `pseudocode`.
    /// Whitespace and unclassified text are plain `text`.
    pub fn scope(&self, suffix: &str) -> String {
        let prefix = match self.kind {
            TokenKind::Comment(CommentType::Line) => "comment.line.double-slash",
            TokenKind::Comment(CommentType::Block) => "comment.block",
            _ => match self.class().scope_prefix() {
                Some(prefix) => prefix,
                None => return "text".to_string(),
            },
        };
        if suffix.is_empty() {
            prefix.to_string()
        } else {
            format!("{}.{}", prefix, suffix)
        }
    }

    /// Contents of a string literal with escape pairs resolved.
    pub fn string_value(&self) -> Option<String> {
        match self.kind {
            TokenKind::StringLiteral => Some(unescape(&self.lexeme)),
            _ => None,
        }
    }

    pub fn number_value(&self) -> Option<f64> {
        match self.kind {
            TokenKind::NumericLiteral => number_value(&self.lexeme),
            _ => None,
        }
    }
}

/// A token positioned inside multi-line source text.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenSpan {
    pub token: Token,
    /// Byte offset of the first byte of the lexeme.
    pub start: usize,
    /// Byte offset one past the lexeme.
    pub end: usize,
    pub line: usize,   // 1-based
    pub column: usize, // 1-based, in characters
}

impl std::fmt::Display for TokenSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}\t{}\t{:?}",
            self.line,
            self.column,
            self.token.class(),
            self.token.lexeme
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Recognize `//` and single-line `/* */` comments.
    pub recognize_comments: bool,
}

pub type ParserResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

type Matcher = for<'a> fn(&'a str) -> ParserResult<'a, TokenKind>;

/// One entry of the ordered rule table.
#[derive(Clone, Copy)]
struct Rule {
    name: &'static str,
    /// Only tried at a word boundary, i.e. not right after a word character.
    word_anchored: bool,
    matcher: Matcher,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("word_anchored", &self.word_anchored)
            .finish()
    }
}

impl Rule {
    const fn new(name: &'static str, word_anchored: bool, matcher: Matcher) -> Self {
        Self {
            name,
            word_anchored,
            matcher,
        }
    }
}

const STRING_RULE: Rule = Rule::new("string", false, parse_string_literal);
const COMMENT_RULE: Rule = Rule::new("comment", false, parse_comment);

const BASE_RULES: [Rule; 11] = [
    Rule::new("control keyword", true, parse_control_keyword),
    Rule::new("io keyword", true, parse_io_keyword),
    Rule::new("type keyword", true, parse_type_keyword),
    STRING_RULE,
    Rule::new("number", true, parse_number_literal),
    Rule::new("assignment", false, parse_assignment),
    Rule::new("comparison", false, parse_comparison),
    Rule::new("operator", false, parse_operator),
    Rule::new("punctuation", false, parse_punctuation),
    Rule::new("identifier", true, parse_identifier),
    Rule::new("whitespace", false, parse_whitespace),
];

/// Scans pseudocode with an ordered rule table.
///
/// The table is fixed when the tokenizer is built and never changes, so one
/// tokenizer can be shared across threads and scan lines concurrently.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    rules: Vec<Rule>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Creates a tokenizer with the default rules: no comment recognition.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pseudolex::tokenizer::token::Tokenizer;
    /// let tokenizer = Tokenizer::new();
    /// assert_eq!(tokenizer.rule_names()[0], "control keyword");
    /// ```
    pub fn new() -> Self {
        Self::with_options(ScanOptions::default())
    }

    /// Creates a tokenizer whose rule table follows `options`.
    ///
    /// # Arguments
    ///
    /// * `options` - With `recognize_comments` set, a comment rule is tried right
    ///   after the string rule and before every operator rule
    ///
    /// # Returns
    ///
    /// * `Tokenizer` - A tokenizer with its rule table built
    ///
    /// # Examples
    ///
    /// ```
    /// # use pseudolex::tokenizer::token::{ScanOptions, TokenClass, Tokenizer};
    /// let tokenizer = Tokenizer::with_options(ScanOptions { recognize_comments: true });
    /// let tokens = tokenizer.scan("x // note");
    /// assert_eq!(tokens[2].class(), TokenClass::Comment);
    /// ```
    pub fn with_options(options: ScanOptions) -> Self {
        let mut rules = Vec::with_capacity(BASE_RULES.len() + 1);
        for rule in BASE_RULES {
            rules.push(rule);
            if options.recognize_comments && rule.name == STRING_RULE.name {
                rules.push(COMMENT_RULE);
            }
        }
        Self { rules }
    }

    /// Names of the rules in priority order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name).collect()
    }

    /// Scans a single line (without its terminator).
    ///
    /// At each position the rules are tried in priority order and the first
    /// match wins. Text no rule recognizes comes back one character at a time
    /// as [`TokenKind::Text`], so scanning never fails.
    ///
    /// # Arguments
    ///
    /// * `line` - One line of source, without `\n`
    ///
    /// # Returns
    ///
    /// * `Vec<Token>` - Non-empty tokens whose lexemes concatenate to `line`
    ///
    /// # Examples
    ///
    /// ```
    /// # use pseudolex::tokenizer::token::{TokenClass, Tokenizer};
    /// let tokens = Tokenizer::new().scan("x @ y");
    /// assert_eq!(tokens[2].lexeme, "@");
    /// assert_eq!(tokens[2].class(), TokenClass::Text);
    /// ```
    #[tracing::instrument(level = "debug", skip(self, line), fields(len = line.len()))]
    pub fn scan(&self, line: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut remaining = line;
        let mut previous: Option<char> = None;

        while !remaining.is_empty() {
            let (kind, consumed) = self.next_token(remaining, previous);
            let (lexeme, rest) = remaining.split_at(consumed);
            previous = lexeme.chars().next_back();
            tokens.push(Token::new(kind, lexeme));
            remaining = rest;
        }

        tokens
    }

    /// Scans multi-line text. Each line is scanned on its own; line terminators
    /// (`\n` or `\r\n`) separate lines and produce no tokens.
    ///
    /// # Arguments
    ///
    /// * `source` - Text of any number of lines
    ///
    /// # Returns
    ///
    /// * `Vec<TokenSpan>` - Tokens of every line in order, with byte offsets into
    ///   `source` and 1-based line and column
    ///
    /// # Examples
    ///
    /// ```
    /// # use pseudolex::tokenizer::token::Tokenizer;
    /// let spans = Tokenizer::new().tokenize("Début\nFin");
    /// assert_eq!(spans[1].token.lexeme, "Fin");
    /// assert_eq!((spans[1].line, spans[1].column), (2, 1));
    /// ```
    #[tracing::instrument(level = "debug", skip(self, source))]
    pub fn tokenize(&self, source: &str) -> Vec<TokenSpan> {
        let mut spans = Vec::new();
        let mut line_offset = 0;

        for (index, raw_line) in source.split('\n').enumerate() {
            let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
            let mut start = line_offset;
            let mut column = 1;

            for token in self.scan(line) {
                let end = start + token.lexeme.len();
                let width = token.lexeme.chars().count();
                spans.push(TokenSpan {
                    token,
                    start,
                    end,
                    line: index + 1,
                    column,
                });
                start = end;
                column += width;
            }

            line_offset += raw_line.len() + 1;
        }

        tracing::debug!("tokenized {} spans", spans.len());
        spans
    }

    /// Returns the kind of the next token and its length in bytes (always > 0).
    fn next_token(&self, input: &str, previous: Option<char>) -> (TokenKind, usize) {
        let after_word = previous.is_some_and(is_word_char);

        for rule in &self.rules {
            if rule.word_anchored && after_word {
                continue;
            }
            if let Ok((rest, kind)) = (rule.matcher)(input) {
                let consumed = input.len() - rest.len();
                if consumed > 0 {
                    return (kind, consumed);
                }
            }
        }

        let consumed = input.chars().next().map_or(input.len(), char::len_utf8);
        tracing::trace!("unclassified {:?}", &input[..consumed]);
        (TokenKind::Text, consumed)
    }
}

lazy_static! {
    static ref DEFAULT_TOKENIZER: Tokenizer = Tokenizer::new();
}

/// Scans one line with the default rule table (no comment recognition).
///
/// The default tokenizer is built once per process and shared, so this can be
/// called from many threads at once.
pub fn scan(line: &str) -> Vec<Token> {
    DEFAULT_TOKENIZER.scan(line)
}

/// Letters (accented ones included), digits and underscore.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_identifier_continue(c: char) -> bool {
    is_word_char(c) || c == '\''
}

#[tracing::instrument(level = "debug", skip(input))]
fn parse_identifier(input: &str) -> ParserResult<TokenKind> {
    let (_, candidate) = context(
        "identifier",
        recognize(pair(
            satisfy(is_identifier_start),
            take_while(is_identifier_continue),
        )),
    )(input)?;

    // An identifier must end on a word boundary, so it gives back trailing apostrophes.
    let id = candidate.trim_end_matches('\'');
    Ok((&input[id.len()..], TokenKind::Identifier))
}
