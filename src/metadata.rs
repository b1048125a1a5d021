//! Editor-facing facts about the pseudocode language that are not token rules.
//!
//! Hosts use the comment delimiters for toggle-comment and folding commands.
//! The tokenizer never reads them; comments are only tokenized when
//! [`ScanOptions::recognize_comments`](crate::ScanOptions::recognize_comments) is set.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockComment {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageMetadata {
    /// Mode identifier the host registers the language under.
    pub id: String,
    pub name: String,
    pub line_comment: String,
    pub block_comment: BlockComment,
}

impl LanguageMetadata {
    pub fn pseudocode() -> Self {
        Self {
            id: "ace/mode/pseudocode".to_string(),
            name: "pseudocode".to_string(),
            line_comment: "//".to_string(),
            block_comment: BlockComment {
                start: "/*".to_string(),
                end: "*/".to_string(),
            },
        }
    }

    /// Prefixes `line` with the line comment marker, keeping its indentation.
    pub fn comment_line(&self, line: &str) -> String {
        let body = line.trim_start();
        let indent = &line[..line.len() - body.len()];
        format!("{}{} {}", indent, self.line_comment, body)
    }
}

impl Default for LanguageMetadata {
    fn default() -> Self {
        Self::pseudocode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pseudocode_metadata() {
        let metadata = LanguageMetadata::default();
        assert_eq!(metadata.line_comment, "//");
        assert_eq!(metadata.block_comment.start, "/*");
        assert_eq!(metadata.block_comment.end, "*/");

        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(json["id"], "ace/mode/pseudocode");
        assert_eq!(json["block_comment"]["end"], "*/");
    }

    #[test]
    fn test_comment_line() {
        let metadata = LanguageMetadata::pseudocode();
        assert_eq!(metadata.comment_line("    x <- 1"), "    // x <- 1");
    }
}
