//! # Tokenizer Component
//!
//! The Tokenizer component classifies pseudocode text line by line, turning each line
//! into a sequence of tokens that a host (an editor, a formatter, a documentation
//! generator) can colour or inspect.
//!
//! ## Design Principles
//!
//! * **Total**: scanning never fails. Text that no rule recognizes becomes a
//!   single-character [`TokenClass::Text`](token::TokenClass::Text) token.
//! * **Lossless**: the lexemes of a scanned line concatenate back to the line,
//!   whitespace included.
//! * **Line-local**: every line starts in the same state. Strings and comments
//!   never continue onto the next line.
//! * **Ordered rules**: at each position the rules are tried in a fixed priority
//!   order and the first match wins.
//!
//! ## Component Structure
//!
//! * [`token`]: Token types, the rule table and the [`Tokenizer`](token::Tokenizer)
//! * [`keyword`]: Control and I/O keywords, with their French and English spellings
//! * [`types`]: Type keywords
//! * [`literal`]: String and number literals
//! * [`symbol`]: Assignment, comparison and arithmetic operators, punctuation
//! * [`whitespace`]: Whitespace runs
//! * [`comment`]: Optional `//` and `/* */` comments
//!
//! ## Rule Priority
//!
//! 1. control keywords, 2. I/O keywords, 3. type keywords, 4. strings,
//! 5. numbers, 6. `<-`, 7. comparisons, 8. single-character operators,
//! 9. punctuation, 10. identifiers, 11. whitespace, then the catch-all.
//! Comments, when enabled, are tried right after strings.
//!
//! ## Usage Example
//!
//! ```rust
//! use pseudolex::tokenizer::token::{Tokenizer, TokenClass};
//!
//! let tokenizer = Tokenizer::new();
//! let tokens = tokenizer.scan("Tant que i < 10 Faire");
//! assert_eq!(tokens[0].lexeme, "Tant que");
//! assert_eq!(tokens[0].class(), TokenClass::ControlKeyword);
//! ```

pub mod comment;
pub mod keyword;
pub mod literal;
pub mod symbol;
pub mod token;
pub mod types;
pub mod whitespace;
