use core::time::Duration;

use rstest::rstest;

use super::{plain, scan_with};
use crate::{Dialect, ScanConfig};

// ─────────────────────────────────────────────────────────────────────
// Prose, typography and text-mode substitutions
// ─────────────────────────────────────────────────────────────────────

#[rstest]
#[timeout(Duration::from_millis(1_000))]
#[case::environment_arguments(
    "We can do\n\\begin{itemize}[first-{test}]{[second]-test}\n  \\item this or\n  \\item that.\n\\end{itemize}\n",
    "We can do this or that. "
)]
#[case::unknown_environment_arguments_are_markup(
    "This is a test.\n\\begin{frame}{Test}{Another Test}\n  Inside the frame!\n\\end{frame}\nFinal sentence.\n",
    "This is a test. Inside the frame! Final sentence. "
)]
#[case::mixed_argument_kinds(
    "This is a test.\n\\begin{textblock*}{1mm}[2mm,3mm](4mm,5mm)\n  abc\\end{textblock*}\nThis is another test.\n",
    "This is a test. abc This is another test. "
)]
#[case::dots("This is good\\dots No, it isn't.\n", "This is good\u{2026} No, it isn't. ")]
#[case::line_break("This is a test of\\\\line breaks.\n", "This is a test of line breaks. ")]
#[case::comment_paragraph_break(
    "This is a sentence.%\n\nThis is another sentence.\n",
    "This is a sentence.\n\nThis is another sentence. "
)]
#[case::crlf_paragraph_break("One.\r\n\r\nTwo.\r\n", "One.\n\nTwo. ")]
#[case::ignored_command_keeps_body("This is a \\textcolor{mittelblau}{test}.\n", "This is a test. ")]
#[case::ampersand("This is a &test.\n", "This is a test. ")]
#[case::nested_reference(
    "You can see this in \\hyperref[alg:abc]{Sec.\\ \\ref*{alg:abc}}.\n",
    "You can see this in Sec. Dummy0. "
)]
#[case::hyphenation(
    "This is a te\\-st. Another te\"-st. Donau\"=Dampf\"\"schiff\"~Fahrt.\n",
    "This is a test. Another test. Donau-Dampfschiff-Fahrt. "
)]
#[case::sharp_s(
    "Ich hei\\ss{}e anders. Das Wasser ist hei\\ss.\n",
    "Ich hei\u{00DF}e anders. Das Wasser ist hei\u{00DF}. "
)]
#[case::euro_and_thin_space(
    "Das macht dann 10 \\euro. Oder z.\\,B. vielleicht doch 12~\\euro{}?\n",
    "Das macht dann 10 \u{20AC}. Oder z.\u{202F}B. vielleicht doch 12\u{00A0}\u{20AC}? "
)]
#[case::umlauts(
    "\\\"E\\\"in T\\\"ext m\\\"{i}t v\\\"i\\\"{e}l\\\"en \\\"{U}ml\\\"a\\\"{u}t\\\"en.\n",
    "\u{00CB}\u{00EF}n T\u{00EB}xt m\u{00EF}t v\u{00EF}\u{00EB}l\u{00EB}n \u{00DC}ml\u{00E4}\u{00FC}t\u{00EB}n. "
)]
#[case::capital_letters("\\AA\\L\\O\\SS", "\u{00C5}\u{0141}\u{00D8}\u{1E9E}")]
#[case::small_letters("\\aa\\i\\j\\l\\o\\ss", "\u{00E5}\u{0131}\u{0237}\u{0142}\u{00F8}\u{00DF}")]
#[case::capital_accents(
    "\\`A\\'A\\^A\\~A\\\"A\\=A\\.A\\H{O}\\b{B}\\c{C}\\d{A}\\k{A}\\r{A}\\u{A}\\v{C}",
    "\u{00C0}\u{00C1}\u{00C2}\u{00C3}\u{00C4}\u{0100}\u{0226}\u{0150}\u{1E06}\u{00C7}\u{1EA0}\u{0104}\u{00C5}\u{0102}\u{010C}"
)]
#[case::small_accents(
    "\\`a\\'a\\^a\\~a\\\"a\\=a\\.a\\H{o}\\b{b}\\c{c}\\d{a}\\k{a}\\r{a}\\u{a}\\v{c}",
    "\u{00E0}\u{00E1}\u{00E2}\u{00E3}\u{00E4}\u{0101}\u{0227}\u{0151}\u{1E07}\u{00E7}\u{1EA1}\u{0105}\u{00E5}\u{0103}\u{010D}"
)]
#[case::accents_without_precomposed_form("Nih\\'o\u{014B}\\=go \\u{y}", "Nih\u{00F3}\u{014B}\u{1E21}o y\u{0306}")]
#[case::braced_accent("na{\\\"i}ve", "na\u{00EF}ve")]
#[case::dots_in_list("This is a test: a, b, \\dots, c.\n", "This is a test: a, b, \u{2026}, c. ")]
#[case::dashes(
    "This is a test -- this is another test --- this is the final test.\n",
    "This is a test \u{2013} this is another test \u{2014} this is the final test. "
)]
#[case::smart_quotes("This ``is'' a \"`test.\"'\n", "This \u{201C}is\u{201D} a \u{201E}test.\u{201C} ")]
#[case::headings(
    "\\section{Heading}\nThis is a test.\n\\subsection[abc]{This is another heading.}\nThis is another test.\n",
    "Heading. This is a test. This is another heading. This is another test. "
)]
#[case::citations(
    "This is a test: \\cite{test1}, \\cite[a]{test2}, \\cite[a][b]{test3}.\n\
     \\textcites{test1}{test2}{test3} shows that this should be plural.\n\
     \\textcites(a)(b)[c][]{test1}[][d]{test2}[e][f]{test3} proves another error.\n",
    "This is a test: Dummy0, Dummy1, Dummy2. Dummies3 shows that this should be plural. Dummies4 proves another error. "
)]
#[case::plural_citation("\\cites{test}", "Dummies0")]
#[case::abbreviations(
    "This is a test, \\egc an actual test \\eg{} test.\nThis is a test, \\iec an actual test \\ie{} test.\n",
    "This is a test, e.g., an actual test e.g. test. This is a test, i.e., an actual test i.e. test. "
)]
#[case::partial_signature_match("\\setcounter{a}[b]{c} This is an test.\n", "a[b]c This is an test. ")]
#[case::ignored_command_with_body("This is a test: \\colorbox{abc}{def}.\n", "This is a test: def. ")]
#[case::unknown_command_keeps_arguments("This is a test: \\foobar{abc}{def}.\n", "This is a test: abc def. ")]
#[case::unknown_environment("This is a test: \\begin{foobar}{abc}def\\end{foobar}.\n", "This is a test: def. ")]
#[case::verb("Use \\verb|a_b| here.", "Use Dummy0 here.")]
#[case::escapes("50\\% of \\$5 \\& more", "50% of $5 & more")]
fn plain_text(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(plain(source), expected);
}

// ─────────────────────────────────────────────────────────────────────
// Ignored environments
// ─────────────────────────────────────────────────────────────────────

#[rstest]
#[timeout(Duration::from_millis(1_000))]
#[case::ignored_command("This is a \\tikzset{bla}test.\n", "This is a test. ")]
#[case::tikzpicture(
    "This is a test.\n\\begin{tikzpicture}\n  \\node[color=mittelblau] at (42mm,0mm) {qwerty};\n\\end{tikzpicture}\nThis is another sentence.\n",
    "This is a test. This is another sentence. "
)]
#[case::math_inside_ignored_environment(
    "This is a test:\n\\begin{tikzpicture}\n  \\node {$\\dots$};\n  \\node {$a$};\n\\end{tikzpicture}\n",
    "This is a test: "
)]
#[case::verbatim("A\n\\begin{verbatim}\n$x$ } { \\end{itemize}\n\\end{verbatim}\nB", "A B")]
fn ignored_environments(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(plain(source), expected);
}

// ─────────────────────────────────────────────────────────────────────
// Math
// ─────────────────────────────────────────────────────────────────────

#[rstest]
#[timeout(Duration::from_millis(1_000))]
#[case::text_inside_display_math(
    "Recall that\n\\begin{equation*}\n  \\begin{cases}\n    a&\\text{if $b$,}\\\\\n    c&\\text{otherwise.}\n  \\end{cases}\n\\end{equation*}\nNow we argue.\n",
    "Recall that Dummy0 if Dummy1, Dummy2 otherwise. Now we argue. "
)]
#[case::vowel_leading_inline_math("This equals $a^{b}$.\n", "This equals Ina0. ")]
#[case::punctuation_moves_after_placeholder(
    "This is the proof:\n\\begin{equation}\n    a^2 + b^2 = c^2\\hspace*{10mm}.\\quad\\qed\n\\end{equation}\n",
    "This is the proof: Dummy0. "
)]
#[case::length_after_line_break(
    "This is another proof:\n\\begin{equation}\n    a^2 + b^2 = c^2.\\\\[-6.4em]\\qquad\\notag\n\\end{equation}\n",
    "This is another proof: Dummy0. "
)]
#[case::nested_environment_in_math(
    "This equals\n\\begin{equation}\n  \\begin{split}\n    abcdef.\n  \\end{split}\n\\end{equation}\nThis is the next sentence.\n",
    "This equals Dummy0. This is the next sentence. "
)]
#[case::text_ends_display_math(
    "This is an equation:\n\\begin{equation}\n    a^2 + b^2 = c^2,\\qquad\\text{which proves the theorem.}\\end{equation}%\nThis is a sentence.\n",
    "This is an equation: Dummy0, which proves the theorem. This is a sentence. "
)]
#[case::tilde_inside_text(
    "This is a test:\n\\begin{equation*}\n  a \\text{,~and} b.\n\\end{equation*}\n",
    "This is a test: Dummy0,\u{00A0}and Dummy1. "
)]
#[case::special_letters_in_math(
    "This is a test:\n\\begin{equation}\n    Gau\\ss{}: \\O(n^2).\n\\end{equation}\nThis is another test: $Gau\\ss{}: \\O(n^2)$.\n",
    "This is a test: Dummy0. This is another test: Dummy1. "
)]
#[case::bracket_and_parenthesis_math(
    "This is a test:\n\\[\n  E = mc^2.\n\\]\nAnd this is another one: \\(c^2\\).\n",
    "This is a test: Dummy0. And this is another one: Dummy1. "
)]
#[case::footnote_inside_math(
    "This is a test: $a = b \\footnote{This is another test: $c$.}$.\nThis is the next sentence: $E = mc^2$.\n",
    "This is a test: Ina0. This is the next sentence: Ina1. "
)]
#[case::dots_in_math(
    "This is a test: $a, b, \\dots, c$.\nSecond sentence: a, b, $\\dots$, c.\n",
    "This is a test: Ina0. Second sentence: a, b, Dummy1, c. "
)]
#[case::vowel_sounds(
    "This is an $A$, $e$, $F$, $h$, $I$, $l$, $M$,\n$n$, $O$, $r$, $S$, $X$, $\\ell$, $\\mathcal{r}$.\n\
     This is not a $b$, $C$, $\\ella$, $\\test a$, $\\mathcal{b}$.\n",
    "This is an Ina0, Ina1, Ina2, Ina3, Ina4, Ina5, Ina6, Ina7, Ina8, Ina9, Ina10, Ina11, Ina12, Ina13. \
     This is not a Dummy14, Dummy15, Dummy16, Dummy17, Dummy18. "
)]
#[case::empty_inline_math("Nothing $ $here.", "Nothing here.")]
#[case::context_formula("\\startformula x \\stopformula", " Dummy0 ")]
#[case::display_dollars("See $$x$$ now", "See Dummy0 now")]
fn math(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(plain(source), expected);
}

// ─────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────

fn with_command(prototype: &str, action: &str) -> ScanConfig {
    let mut config = ScanConfig::default();
    config.commands.insert(prototype.into(), action.into());
    config
}

fn with_environment(prototype: &str, action: &str) -> ScanConfig {
    let mut config = ScanConfig::default();
    config.environments.insert(prototype.into(), action.into());
    config
}

#[rstest]
#[case::override_default("\\colorbox{}", "dummy", "This is a test: \\colorbox{abc}{def}.\n", "This is a test: Dummy0def. ")]
#[case::default("\\foobar{}{}", "default", "This is a test: \\foobar{abc}{def}.\n", "This is a test: abc def. ")]
#[case::ignore("\\foobar{}{}", "ignore", "This is a test: \\foobar{abc}{def}.\n", "This is a test: . ")]
#[case::dummy("\\foobar{}{}", "dummy", "This is a test: \\foobar{abc}{def}.\n", "This is a test: Dummy0. ")]
#[case::plural("\\foobar{}{}", "pluralDummy", "This is a test: \\foobar{abc}{def}.\n", "This is a test: Dummies0. ")]
#[case::vowel("\\foobar{}{}", "vowelDummy", "This is a test: \\foobar{abc}{def}.\n", "This is a test: Ina0. ")]
#[case::unknown_action("\\foobar{}{}", "shout", "This is a test: \\foobar{abc}{def}.\n", "This is a test: abc def. ")]
fn configured_commands(#[case] prototype: &str, #[case] action: &str, #[case] source: &str, #[case] expected: &str) {
    let text = scan_with(&with_command(prototype, action), source);
    assert_eq!(text.plain_text(), expected);
}

#[rstest]
#[case::bare_name_default("foobar", "default", "This is a test: def. ")]
#[case::prototype_without_arguments("\\begin{foobar}", "default", "This is a test: abcdef. ")]
#[case::prototype_with_argument("\\begin{foobar}{}", "default", "This is a test: def. ")]
#[case::ignored("foobar", "ignore", "This is a test: . ")]
fn configured_environments(#[case] prototype: &str, #[case] action: &str, #[case] expected: &str) {
    let source = "This is a test: \\begin{foobar}{abc}def\\end{foobar}.\n";
    let text = scan_with(&with_environment(prototype, action), source);
    assert_eq!(text.plain_text(), expected);
}

#[test]
fn configured_context_environment() {
    let config = with_environment("\\starttyping", "ignore");
    let text = scan_with(&config, "A \\starttyping x \\stoptypingx \\stoptyping B");
    assert_eq!(text.plain_text(), "A B");
}

#[test]
fn french_placeholders() {
    let config = ScanConfig {
        language: "fr".into(),
        ..ScanConfig::default()
    };
    let text = scan_with(&config, "C'est un test: $E = mc^2$.\n");
    assert_eq!(text.plain_text(), "C'est un test: Jimmy-0. ");
}

#[rstest]
#[case::two_chunks(
    "\\SweaveOpts{prefix.string=figures}\nThis is a first sentence.\n\n<<import-packages, echo=false>>=\n\
     library(tidyverse, quietly = T)\n@\n\nThis is a second sentence.\n<<mca-graph, fig=true, echo=false>>=\n\
     plot(1:1000, rnorm(1000))\n@\n",
    Dialect::Rsweave,
    " This is a first sentence.\n\n\n\nThis is a second sentence. "
)]
#[case::only_a_chunk("<<import-packages>>=\nlibrary(tidyverse)\n@\n", Dialect::Rsweave, " ")]
#[case::chunk_markers_are_prose_in_latex(
    "<<import-packages>>=\nlibrary(tidyverse)\n@\n",
    Dialect::Latex,
    "<<import-packages>>= library(tidyverse) @ "
)]
fn embedded_code_chunks(#[case] source: &str, #[case] dialect: Dialect, #[case] expected: &str) {
    let config = ScanConfig {
        dialect,
        ..ScanConfig::default()
    };
    assert_eq!(scan_with(&config, source).plain_text(), expected);
}
