use proptest::prelude::*;
use pseudolex::{scan, ScanOptions, TokenClass, Tokenizer};

// Characters the rules care about, plus a few no rule accepts.
const PSEUDOCODE_LINE: &str = r#"[a-zA-Zéè0-9_' "\\<>=!+*/%{}()\[\];,:.@#\t-]{0,48}"#;

proptest! {
    #[test]
    fn lexemes_rebuild_the_line(line in "\\PC{0,64}") {
        let rebuilt: String = scan(&line).into_iter().map(|t| t.lexeme).collect();
        prop_assert_eq!(rebuilt, line);
    }

    #[test]
    fn lexemes_rebuild_pseudocode_like_lines(line in PSEUDOCODE_LINE) {
        let tokenizer = Tokenizer::with_options(ScanOptions { recognize_comments: true });
        for tokens in [scan(&line), tokenizer.scan(&line)] {
            let rebuilt: String = tokens.iter().map(|t| t.lexeme.as_str()).collect();
            prop_assert_eq!(rebuilt, line.clone());
        }
    }

    #[test]
    fn every_token_makes_progress(line in PSEUDOCODE_LINE) {
        let tokens = scan(&line);
        prop_assert!(tokens.len() <= line.chars().count());
        for token in &tokens {
            prop_assert!(!token.lexeme.is_empty());
            if token.class() == TokenClass::Text {
                prop_assert_eq!(token.lexeme.chars().count(), 1);
            }
        }
    }

    #[test]
    fn scanning_is_deterministic(line in PSEUDOCODE_LINE) {
        prop_assert_eq!(scan(&line), Tokenizer::new().scan(&line));
    }

    #[test]
    fn whitespace_runs_are_maximal(line in PSEUDOCODE_LINE) {
        let tokens = scan(&line);
        for pair in tokens.windows(2) {
            prop_assert!(
                !(pair[0].class() == TokenClass::Whitespace
                    && pair[1].class() == TokenClass::Whitespace)
            );
        }
    }
}
