//! # pseudolex
//!
//! Line tokenizer for a small bilingual (French/English) pseudocode teaching
//! language. The core is [`scan`], a pure and total function that turns one
//! line of source into classified tokens whose lexemes concatenate back to
//! the input.
//!
//! ```rust
//! use pseudolex::{scan, TokenClass};
//!
//! let tokens = scan("x <- 5");
//! let classes: Vec<_> = tokens.iter().map(|t| t.class()).collect();
//! assert_eq!(
//!     classes,
//!     vec![
//!         TokenClass::Identifier,
//!         TokenClass::Whitespace,
//!         TokenClass::AssignmentOperator,
//!         TokenClass::Whitespace,
//!         TokenClass::NumericLiteral,
//!     ]
//! );
//! ```

pub mod config;
pub mod error;
pub mod metadata;
pub mod tokenizer;

// Re-exports
pub use config::{OutputFormat, ScanConfig};
pub use error::{PseudolexError, PseudolexResult};
pub use metadata::LanguageMetadata;
pub use tokenizer::token::{scan, ScanOptions, Token, TokenClass, TokenKind, TokenSpan, Tokenizer};
