use pretty_assertions::assert_eq;
use pseudolex::tokenizer::keyword::ControlKeyword;
use pseudolex::{scan, ScanOptions, TokenClass, TokenKind, Tokenizer};

const FRENCH: &str = include_str!("../../demos/moyenne.algo");

const ENGLISH: &str = r#"Algorithm Average
Variables
    marks : arrayint
    n, i, total : integer
Begin
    Read(n)
    For i <- 0 Do
        total <- total + marks[i]
    End
    If n >= 1 AND NOT done Then
        Write("Average: ", total / n)
    Else
        Write("No marks")
    End
End"#;

fn count(source: &str, class: TokenClass) -> usize {
    Tokenizer::new()
        .tokenize(source)
        .iter()
        .filter(|span| span.token.class() == class)
        .count()
}

#[test]
fn test_french_program() {
    assert_eq!(count(FRENCH, TokenClass::ControlKeyword), 11);
    assert_eq!(count(FRENCH, TokenClass::TypeKeyword), 4);
    assert_eq!(count(FRENCH, TokenClass::IoKeyword), 4);
    assert_eq!(count(FRENCH, TokenClass::StringLiteral), 2);
    assert_eq!(count(FRENCH, TokenClass::ComparisonOperator), 1);
    assert_eq!(count(FRENCH, TokenClass::Text), 0);
}

#[test]
fn test_english_program() {
    assert_eq!(count(ENGLISH, TokenClass::ControlKeyword), 13);
    assert_eq!(count(ENGLISH, TokenClass::TypeKeyword), 2);
    assert_eq!(count(ENGLISH, TokenClass::IoKeyword), 3);
    assert_eq!(count(ENGLISH, TokenClass::Text), 0);
}

#[test]
fn test_both_languages_share_concepts() {
    let french = scan("Tant que i < n Faire");
    let english = scan("While i < n Do");
    assert_eq!(
        french[0].kind,
        TokenKind::ControlKeyword(ControlKeyword::While)
    );
    assert_eq!(french[0].kind, english[0].kind);
    assert_eq!(french.last().unwrap().kind, english.last().unwrap().kind);
}

#[test]
fn test_lines_are_independent() {
    // An unterminated string does not swallow the next line.
    let spans = Tokenizer::new().tokenize("Ecrire(\"oops\nFin");
    let last = spans.last().unwrap();
    assert_eq!(last.line, 2);
    assert_eq!(last.token.class(), TokenClass::ControlKeyword);
    assert!(spans.iter().all(|s| s.token.class() != TokenClass::StringLiteral));
}

#[test]
fn test_spans_rebuild_each_line() {
    let spans = Tokenizer::new().tokenize(FRENCH);
    for (index, line) in FRENCH.lines().enumerate() {
        let rebuilt: String = spans
            .iter()
            .filter(|s| s.line == index + 1)
            .map(|s| s.token.lexeme.as_str())
            .collect();
        assert_eq!(rebuilt, line);
    }
    for span in &spans {
        assert_eq!(&FRENCH[span.start..span.end], span.token.lexeme);
    }
}

#[test]
fn test_comment_rule_is_opt_in() {
    let line = "i <- i + 1 /* suivant */ // fin";
    let plain = scan(line);
    assert!(plain.iter().all(|t| t.class() != TokenClass::Comment));

    let with_comments = Tokenizer::with_options(ScanOptions {
        recognize_comments: true,
    })
    .scan(line);
    let comments: Vec<_> = with_comments
        .iter()
        .filter(|t| t.class() == TokenClass::Comment)
        .map(|t| t.lexeme.as_str())
        .collect();
    assert_eq!(comments, vec!["/* suivant */", "// fin"]);
}

#[test]
fn test_comment_markers_inside_strings() {
    let tokenizer = Tokenizer::with_options(ScanOptions {
        recognize_comments: true,
    });
    let tokens = tokenizer.scan(r#"Ecrire("http://x")"#);
    assert_eq!(tokens[2].lexeme, r#""http://x""#);
    assert_eq!(tokens[2].class(), TokenClass::StringLiteral);
}
