//! Scanner integration tests
//!
//! Exercises the public API end to end: losslessness, literal decoding,
//! error recovery and tree navigation.

use pretty_assertions::assert_eq;
use spindrift_macros::{assert_kinds, assert_matches, assert_round_trip, utf16};
use spindrift_syntax::{
    Keyword, Quote, ScanOptions, Scanner, Span, SyntaxError, SyntaxKind, TokenValue, scan_str,
    scan_utf16,
};

const SAMPLE: &str = "\u{feff}// header\r\n\
    var π = 3.5e-2, s = 'it\\'s', $ = \"\\u{1F600}\\x41\";\n\
    /* block\n   comment */\tif (a >>>= 0x1F) { b = !c && d !== null; }\u{2028}\
    function f(...args) { return args.length <= 2 ? true : false; }\n\
    # @ enum\r";

fn numeric(source: &str) -> f64 {
    let tree = scan_str(source);
    let mut tokens = tree.tokens();
    let value = tokens.next().and_then(|item| item.value().and_then(TokenValue::as_number));
    assert!(tokens.next().is_none(), "{source:?} scanned as more than one token");
    value.expect("numeric literal")
}

#[test]
fn test_round_trip_sample() {
    let tree = scan_str(SAMPLE);
    assert_round_trip!(tree, SAMPLE);
    assert_eq!(tree.root().text_string().unwrap(), SAMPLE);
}

#[test]
fn test_items_are_contiguous() {
    let tree = scan_str(SAMPLE);
    let mut expected_start = 0;
    for item in tree.children() {
        assert!(item.width() > 0, "empty item {item:?}");
        assert_eq!(item.position(), expected_start);
        assert_eq!(item.span(), Span::new(expected_start, expected_start + item.width()));
        assert_eq!(item.parent().map(|parent| parent.id()), Some(tree.root().id()));
        expected_start += item.width();
    }
    assert_eq!(expected_start, utf16!(SAMPLE).len());
    assert_eq!(tree.width(), expected_start);
}

#[test]
fn test_sample_kinds() {
    let tree = scan_str("a = 'b';\r\n// c");
    assert_kinds!(
        tree,
        [
            SyntaxKind::IdentifierToken,
            SyntaxKind::WhitespaceTrivia,
            SyntaxKind::EqualsToken,
            SyntaxKind::WhitespaceTrivia,
            SyntaxKind::StringLiteralToken,
            SyntaxKind::SemicolonToken,
            SyntaxKind::EndOfLineTrivia,
            SyntaxKind::SingleLineCommentTrivia,
        ]
    );
}

#[test]
fn test_numeric_precision() {
    let expected: f64 = "12345678901234567890e3".parse().unwrap();
    assert_eq!(numeric("12345678901234567890123"), expected);
}

#[test]
fn test_numeric_carry() {
    assert_eq!(numeric("999999999999999999995"), 1e21);
}

#[test]
fn test_radix_literals() {
    assert_eq!(numeric("0xFF"), 255.0);
    assert_eq!(numeric("0b101"), 5.0);
    assert_eq!(numeric("0o777"), 511.0);
}

#[test]
fn test_string_escapes() {
    let source = r#""ab\ncd""#;
    let tree = scan_str(source);
    let item = tree.children().next().unwrap();
    assert_eq!(item.kind(), SyntaxKind::StringLiteralToken);
    assert_eq!(item.text_string().unwrap(), source);
    assert_matches!(
        item.value(),
        Some(TokenValue::String { value, quote: Quote::Double }) if value.as_units() == utf16!("ab\ncd").as_slice()
    );
}

#[test]
fn test_escaped_null_is_invalid() {
    let source: String = "null"
        .chars()
        .map(|ch| format!("\\u{:04X}", u32::from(ch)))
        .collect();
    let tree = scan_str(&source);
    assert_kinds!(tree, [SyntaxKind::Invalid]);
    assert_eq!(tree.children().next().unwrap().width(), 24);
}

#[test]
fn test_unterminated_comment_decays() {
    let tree = scan_str("/* abc");
    assert_kinds!(
        tree,
        [
            SyntaxKind::SlashToken,
            SyntaxKind::AsteriskToken,
            SyntaxKind::WhitespaceTrivia,
            SyntaxKind::IdentifierToken,
        ]
    );
    assert_round_trip!(tree, "/* abc");
}

#[test]
fn test_maximal_munch() {
    let tree = scan_str(">>>=");
    assert_kinds!(tree, [SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken]);
    assert_eq!(
        tree.tokens().next().and_then(|item| item.value().cloned()),
        Some(TokenValue::Punctuator(
            SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken
        ))
    );
}

#[test]
fn test_keyword_values() {
    let tree = scan_str("typeof x instanceof y");
    let keywords: Vec<_> = tree
        .tokens()
        .filter_map(|item| match item.value() {
            Some(TokenValue::Keyword(keyword)) => Some(*keyword),
            _ => None,
        })
        .collect();
    assert_eq!(keywords, vec![Keyword::Typeof, Keyword::Instanceof]);
}

#[test]
fn test_unterminated_string_recovers() {
    let tree = scan_str("\"abc\nx");
    assert_kinds!(
        tree,
        [
            SyntaxKind::Invalid,
            SyntaxKind::IdentifierToken,
            SyntaxKind::EndOfLineTrivia,
            SyntaxKind::IdentifierToken,
        ]
    );
}

#[test]
fn test_lone_surrogates_survive() {
    let source = [0xD800, 0x61, 0xDC00];
    let tree = scan_utf16(&source);
    assert_kinds!(
        tree,
        [SyntaxKind::Invalid, SyntaxKind::IdentifierToken, SyntaxKind::Invalid]
    );
    assert_eq!(tree.text().as_units(), &source);
    assert_eq!(
        tree.root().text_string(),
        Err(SyntaxError::InvalidUtf16 { offset: 0 })
    );
}

#[test]
fn test_supplementary_identifier() {
    let tree = scan_str("\u{1D49C}bc = 1");
    let first = tree.children().next().unwrap();
    assert_eq!(first.kind(), SyntaxKind::IdentifierToken);
    assert_eq!(first.width(), 4);
}

#[test]
fn test_item_lookup() {
    let tree = scan_str("let answer = 42;");
    let item = tree.item_at(6).unwrap();
    assert_eq!(item.text_string().unwrap(), "answer");
    assert_eq!(tree.get(item.id()).unwrap().kind(), SyntaxKind::IdentifierToken);

    let other = scan_str("a b c d e");
    let foreign = other.children().last().unwrap().id();
    assert!(foreign.index() >= tree.item_count());
    assert_matches!(tree.get(foreign), Err(SyntaxError::UnknownItem(id)) if id == foreign);
    assert!(tree.item_at(tree.width()).is_none());
}

#[test]
fn test_scanner_with_options() {
    let source = utf16!("0.123456789");
    let options = ScanOptions::new()
        .with_source_name("digits.js")
        .with_significant_digits(4);
    let scanner = Scanner::with_options(&source, options).unwrap();
    assert_eq!(scanner.options().source_name.as_deref(), Some("digits.js"));

    let tree = scanner.scan();
    let value = tree.tokens().next().and_then(|item| item.value().cloned());
    assert_eq!(value, Some(TokenValue::Numeric(0.1235)));
}
