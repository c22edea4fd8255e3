//! Placeholder words that stand in for suppressed constructs.
//!
//! A citation or a formula removed from a sentence would leave the checker
//! with a broken clause. The scanner substitutes a capitalized nonsense word
//! instead, numbered so that every placeholder in a document is distinct and
//! so that [`sentence_pattern`] can later recognize the same sentence shape
//! with different numbers.

use std::sync::LazyLock;

use regex::Regex;

/// Matches any token produced by [`PlaceholderGenerator::generate`].
pub const PLACEHOLDER_PATTERN: &str = "(?:Dummies|Dummy|Ina|Jimmy-)[0-9]+";

/// Chooses the shape of a placeholder word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PlaceholderGenerator {
    /// Stand in for a plural noun phrase.
    pub plural: bool,
    /// Always lead with a vowel, whatever the scanner observed.
    pub vowel: bool,
}

impl PlaceholderGenerator {
    /// Singular, consonant-leading unless the scanner says otherwise.
    pub const DEFAULT: Self = Self {
        plural: false,
        vowel: false,
    };
    /// Plural placeholder, for commands citing several sources at once.
    pub const PLURAL: Self = Self {
        plural: true,
        vowel: false,
    };
    /// Vowel-leading placeholder, so "an" reads correctly before it.
    pub const VOWEL: Self = Self {
        plural: false,
        vowel: true,
    };

    /// Produces the placeholder numbered `number`.
    ///
    /// French gets a hyphenated given name because it takes no article and a
    /// bare capitalized noun triggers agreement complaints.
    #[must_use]
    pub fn generate(self, language: &str, number: usize, leads_with_vowel: bool) -> String {
        if primary_subtag(language).eq_ignore_ascii_case("fr") {
            format!("Jimmy-{number}")
        } else if self.plural {
            format!("Dummies{number}")
        } else if self.vowel || leads_with_vowel {
            format!("Ina{number}")
        } else {
            format!("Dummy{number}")
        }
    }
}

fn primary_subtag(language: &str) -> &str {
    language.split(['-', '_']).next().unwrap_or(language)
}

/// Builds an anchored regex source that matches `sentence` with every
/// placeholder replaced by any placeholder.
#[must_use]
pub fn sentence_pattern(sentence: &str) -> String {
    let mut out = String::from("^");
    let mut rest = sentence;
    while let Some(m) = PLACEHOLDER.find(rest) {
        out.push_str(&regex::escape(&rest[..m.start()]));
        out.push_str(PLACEHOLDER_PATTERN);
        rest = &rest[m.end()..];
    }
    out.push_str(&regex::escape(rest));
    out.push('$');
    out
}

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PLACEHOLDER_PATTERN).expect("placeholder pattern compiles"));

/// A compiled sentence shape, for hiding future matches in sentences that
/// only differ by their placeholders.
#[derive(Debug, Clone)]
pub struct SentenceShape {
    regex: Regex,
}

impl SentenceShape {
    /// Compiles the shape of `sentence`.
    ///
    /// # Errors
    ///
    /// Returns the regex error if the compiled pattern exceeds the size limit.
    pub fn new(sentence: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(&sentence_pattern(sentence))?,
        })
    }

    /// Whether `sentence` has this shape.
    #[must_use]
    pub fn matches(&self, sentence: &str) -> bool {
        self.regex.is_match(sentence)
    }

    /// The underlying pattern.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(PlaceholderGenerator::DEFAULT, "en-US", 0, false, "Dummy0")]
    #[case(PlaceholderGenerator::DEFAULT, "en-US", 3, true, "Ina3")]
    #[case(PlaceholderGenerator::VOWEL, "de-DE", 1, false, "Ina1")]
    #[case(PlaceholderGenerator::PLURAL, "en", 2, true, "Dummies2")]
    #[case(PlaceholderGenerator::DEFAULT, "fr", 4, false, "Jimmy-4")]
    #[case(PlaceholderGenerator::PLURAL, "FR-ca", 5, true, "Jimmy-5")]
    #[case(PlaceholderGenerator::VOWEL, "fr_BE", 6, false, "Jimmy-6")]
    #[case(PlaceholderGenerator::DEFAULT, "fra", 7, false, "Dummy7")]
    fn generates(
        #[case] generator: PlaceholderGenerator,
        #[case] language: &str,
        #[case] number: usize,
        #[case] vowel: bool,
        #[case] expected: &str,
    ) {
        assert_eq!(generator.generate(language, number, vowel), expected);
    }

    /// Property: every generated word is a whole placeholder match carrying
    /// its number, whatever the language tag.
    #[quickcheck]
    #[allow(clippy::needless_pass_by_value)]
    fn generated_words_match_the_pattern(
        language: String,
        number: usize,
        plural: bool,
        vowel: bool,
    ) -> bool {
        let generator = PlaceholderGenerator { plural, vowel };
        let word = generator.generate(&language, number, false);
        let whole = Regex::new(&format!("^{PLACEHOLDER_PATTERN}$")).unwrap();
        whole.is_match(&word) && word.ends_with(&number.to_string())
    }

    #[test]
    fn sentence_pattern_escapes_and_generalizes() {
        let pattern = sentence_pattern("See Dummy0 (and Ina12).");
        assert_eq!(
            pattern,
            r"^See (?:Dummies|Dummy|Ina|Jimmy-)[0-9]+ \(and (?:Dummies|Dummy|Ina|Jimmy-)[0-9]+\)\.$"
        );
        let shape = SentenceShape::new("See Dummy0 (and Ina12).").unwrap();
        assert!(shape.matches("See Dummies7 (and Dummy3)."));
        assert!(!shape.matches("See Dummy0 (and Ina12)!"));
        assert!(!shape.matches("See x (and Ina12)."));
    }

    #[test]
    fn sentence_without_placeholders_matches_only_itself() {
        let shape = SentenceShape::new("a+b").unwrap();
        assert!(shape.matches("a+b"));
        assert!(!shape.matches("aab"));
    }
}
