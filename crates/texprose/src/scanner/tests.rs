use std::time::Duration;

use rstest::rstest;

use super::*;

fn run(source: &str) -> (AnnotatedText, ModeStack) {
    Scanner::default()
        .run(source.into())
        .unwrap_or_else(|e| panic!("scan failed on {source:?}: {e}"))
}

#[test]
fn stall_snapshot_describes_the_state() {
    let Err(ScanError::Stalled(snapshot)) = Scanner::default().scan("$x\\") else {
        panic!("expected a stall");
    };
    assert_eq!(snapshot.position, 2);
    assert_eq!(snapshot.modes, vec![Mode::ParagraphText, Mode::InlineMath]);
    assert_eq!(snapshot.math_vowel, MathVowel::Vowel);
    assert!(!snapshot.math_empty);
    assert_eq!(snapshot.placeholders, 0);
    assert!(snapshot.to_string().starts_with("at byte 2 in [ParagraphText, InlineMath]"));
}

#[test]
fn lenient_scan_skips_the_stalled_char() {
    let scanner = Scanner::with_registry(
        Arc::new(SignatureRegistry::with_defaults()),
        ScanOptions {
            strict: false,
            ..ScanOptions::default()
        },
    );
    let (text, modes) = scanner.run("$x\\".into()).unwrap();
    assert_eq!(text.plain_text(), "");
    assert_eq!(text.source_len(), 3);
    assert_eq!(modes.as_slice(), &[Mode::ParagraphText, Mode::InlineMath]);
}

#[rstest]
#[case::text_without_brace("\\text x", " x")]
#[case::heading_without_brace("\\section x", " x")]
#[case::verb_without_delimiter("\\verb|abc", "|abc")]
#[case::hspace("a\\hspace{1em}b", "a b")]
#[case::stray_closing_brace("a}b", "ab")]
#[case::display_brackets("\\[x\\]", " Dummy0 ")]
#[case::punctuation_before_math_end("$x,$", "Ina0,")]
#[case::punctuation_survives_comment("$x,% c\n$", "Ina0,")]
#[case::punctuation_dropped_by_command("$x, \\beta$", "Ina0")]
#[case::bare_unit_length("a {in} b", "a b")]
#[case::spaced_lines_are_one_break("a\n \nb", "a b")]
#[case::crlf_blank_line("a\r\n\r\nb", "a\n\nb")]
#[case::cr_blank_line("a\r\rb", "a\n\nb")]
#[case::numbering_spans_kinds("\\cite{a} $b$ \\cites{c}", "Dummy0 Dummy1 Dummies2")]
#[timeout(Duration::from_millis(1_000))]
fn branches(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(run(source).0.plain_text(), expected);
}

#[rstest]
#[case::balanced("a {b} $c$ \\section{d}", &[Mode::ParagraphText])]
#[case::open_inline_math("$x", &[Mode::ParagraphText, Mode::InlineMath])]
#[case::open_environment("\\begin{itemize} a", &[Mode::ParagraphText, Mode::ParagraphText])]
#[case::open_heading("\\section{a", &[Mode::ParagraphText, Mode::Heading])]
#[case::open_text_in_math("$\\text{a", &[Mode::ParagraphText, Mode::InlineMath, Mode::InlineText])]
#[case::extra_closing_brace("}}", &[Mode::ParagraphText])]
#[case::open_ignored_environment("\\begin{verbatim} a", &[Mode::ParagraphText, Mode::IgnoredEnvironment])]
#[timeout(Duration::from_millis(1_000))]
fn mode_stack_after_scan(#[case] source: &str, #[case] expected: &[Mode]) {
    assert_eq!(run(source).1.as_slice(), expected);
}

#[test]
fn fragment_origin_is_kept() {
    let (text, _) = run("x");
    assert_eq!(text.origin(), 0);
    let text = Scanner::default().scan(SourceFragment::new("x", 17)).unwrap();
    assert_eq!(text.origin(), 17);
    assert_eq!(text.document_offset(1), 18);
}

#[test]
fn scanner_is_shareable_across_threads() {
    let scanner = Arc::new(Scanner::default());
    let handles: Vec<_> = ["$a$ one.", "\\cite{b} two."]
        .into_iter()
        .map(|source| {
            let scanner = Arc::clone(&scanner);
            std::thread::spawn(move || scanner.scan(source).map(|t| t.plain_text().to_owned()))
        })
        .collect();
    let plain: Vec<_> = handles.into_iter().map(|h| h.join().unwrap().unwrap()).collect();
    assert_eq!(plain, ["Ina0 one.", "Dummy0 two."]);
}
