//! Declarative descriptions of LaTeX commands and environments.
//!
//! A signature is written as a prototype: the command followed by one
//! delimiter pair per expected argument, e.g. `\cite[]{}` or
//! `\begin{minipage}[]{}`. The scanner looks signatures up by command name
//! in a [`SignatureRegistry`] and asks the [`matcher`] which of the
//! candidates consumes the most input.

pub(crate) mod defaults;
pub mod matcher;
mod registry;

pub use registry::SignatureRegistry;

use crate::placeholder::PlaceholderGenerator;

/// The delimiter pair around one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentKind {
    /// `{...}`
    Brace,
    /// `[...]`
    Bracket,
    /// `(...)`
    Parenthesis,
}

impl ArgumentKind {
    /// The opening delimiter.
    #[must_use]
    pub fn open(self) -> u8 {
        match self {
            ArgumentKind::Brace => b'{',
            ArgumentKind::Bracket => b'[',
            ArgumentKind::Parenthesis => b'(',
        }
    }

    fn from_pair(pair: &str) -> Option<Self> {
        match pair {
            "{}" => Some(ArgumentKind::Brace),
            "[]" => Some(ArgumentKind::Bracket),
            "()" => Some(ArgumentKind::Parenthesis),
            _ => None,
        }
    }
}

/// What the scanner does with a matched command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Emit the command name as markup and scan its arguments as usual.
    Default,
    /// Swallow the command and its arguments without trace.
    Ignore,
    /// Swallow the command and its arguments, emitting a placeholder.
    Placeholder(PlaceholderGenerator),
}

impl Action {
    /// Parses an action name as it appears in user settings: `default`,
    /// `ignore`, `dummy`, `pluralDummy` or `vowelDummy`.
    #[must_use]
    pub fn from_setting(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Action::Default),
            "ignore" => Some(Action::Ignore),
            "dummy" => Some(Action::Placeholder(PlaceholderGenerator::DEFAULT)),
            "pluralDummy" => Some(Action::Placeholder(PlaceholderGenerator::PLURAL)),
            "vowelDummy" => Some(Action::Placeholder(PlaceholderGenerator::VOWEL)),
            _ => None,
        }
    }
}

/// A command name, its expected arguments, and what to do on a match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandSignature {
    name: String,
    arguments: Vec<ArgumentKind>,
    action: Action,
}

impl CommandSignature {
    /// Parses a prototype such as `\cite[]{}`.
    ///
    /// Trailing `{}`, `[]` and `()` pairs become arguments; the rest is the
    /// name, matched literally. Returns `None` for an empty prototype.
    #[must_use]
    pub fn parse(prototype: &str, action: Action) -> Option<Self> {
        if prototype.is_empty() {
            return None;
        }
        let mut name = prototype;
        let mut arguments = Vec::new();
        while name.len() > 2 {
            let split = name.len() - 2;
            let Some(kind) = name.get(split..).and_then(ArgumentKind::from_pair) else {
                break;
            };
            arguments.push(kind);
            name = &name[..split];
        }
        arguments.reverse();
        Some(Self {
            name: name.to_owned(),
            arguments,
            action,
        })
    }

    /// The literal prefix, e.g. `\cite` or `\begin{figure}`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The expected arguments, in order.
    #[must_use]
    pub fn arguments(&self) -> &[ArgumentKind] {
        &self.arguments
    }

    /// What to do on a match.
    #[must_use]
    pub fn action(&self) -> Action {
        self.action
    }
}

/// An environment and how to treat its body.
///
/// Written either as a bare name (`verbatim`), which also swallows whatever
/// arguments follow `\begin{verbatim}`, or as a `\begin{name}` or ConTeXt
/// `\startname` prototype with explicit arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnvironmentSignature {
    name: String,
    opening: CommandSignature,
    ignore_all_arguments: bool,
}

impl EnvironmentSignature {
    /// Parses `name` or `\begin{name}[]{}`. Only [`Action::Default`] and
    /// [`Action::Ignore`] are meaningful for environments.
    #[must_use]
    pub fn parse(prototype: &str, action: Action) -> Option<Self> {
        if let Some(rest) = prototype.strip_prefix("\\begin{") {
            let name = &rest[..rest.find('}')?];
            return Some(Self {
                name: name.to_owned(),
                opening: CommandSignature::parse(prototype, action)?,
                ignore_all_arguments: false,
            });
        }
        if prototype.starts_with("\\start") {
            let opening = CommandSignature::parse(prototype, action)?;
            let name = opening.name().strip_prefix("\\start")?.to_owned();
            if name.is_empty() {
                return None;
            }
            return Some(Self {
                name,
                opening,
                ignore_all_arguments: false,
            });
        }
        if prototype.is_empty() {
            return None;
        }
        Some(Self {
            name: prototype.to_owned(),
            opening: CommandSignature {
                name: format!("\\begin{{{prototype}}}"),
                arguments: Vec::new(),
                action,
            },
            ignore_all_arguments: true,
        })
    }

    /// The environment name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The `\begin{name}` command with its declared arguments.
    #[must_use]
    pub fn opening(&self) -> &CommandSignature {
        &self.opening
    }

    /// Whether the body is hidden from the checker.
    #[must_use]
    pub fn action(&self) -> Action {
        self.opening.action
    }

    /// Whether every argument after `\begin{name}` is swallowed, however
    /// many there are.
    #[must_use]
    pub fn ignores_all_arguments(&self) -> bool {
        self.ignore_all_arguments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prototypes_split_into_name_and_arguments() {
        let sig = CommandSignature::parse("\\cite[]{}", Action::Ignore).unwrap();
        assert_eq!(sig.name(), "\\cite");
        assert_eq!(sig.arguments(), &[ArgumentKind::Bracket, ArgumentKind::Brace]);

        let sig = CommandSignature::parse("\\cites()()[][]{}", Action::Ignore).unwrap();
        assert_eq!(sig.name(), "\\cites");
        assert_eq!(sig.arguments().len(), 5);

        let sig = CommandSignature::parse("\\LaTeX", Action::Ignore).unwrap();
        assert_eq!(sig.name(), "\\LaTeX");
        assert!(sig.arguments().is_empty());

        assert_eq!(CommandSignature::parse("{}", Action::Ignore).unwrap().name(), "{}");
        assert!(CommandSignature::parse("", Action::Ignore).is_none());
    }

    #[test]
    fn environments_from_names_and_prototypes() {
        let bare = EnvironmentSignature::parse("verbatim", Action::Ignore).unwrap();
        assert_eq!(bare.name(), "verbatim");
        assert_eq!(bare.opening().name(), "\\begin{verbatim}");
        assert!(bare.ignores_all_arguments());

        let explicit = EnvironmentSignature::parse("\\begin{minipage}[]{}", Action::Default).unwrap();
        assert_eq!(explicit.name(), "minipage");
        assert_eq!(explicit.opening().name(), "\\begin{minipage}");
        assert_eq!(explicit.opening().arguments(), &[ArgumentKind::Bracket, ArgumentKind::Brace]);
        assert!(!explicit.ignores_all_arguments());

        assert!(EnvironmentSignature::parse("\\begin{broken", Action::Ignore).is_none());

        let context = EnvironmentSignature::parse("\\starttyping", Action::Ignore).unwrap();
        assert_eq!(context.name(), "typing");
        assert_eq!(context.opening().name(), "\\starttyping");
        assert!(EnvironmentSignature::parse("\\start", Action::Ignore).is_none());
    }

    #[test]
    fn action_names() {
        assert_eq!(Action::from_setting("ignore"), Some(Action::Ignore));
        assert_eq!(
            Action::from_setting("pluralDummy"),
            Some(Action::Placeholder(PlaceholderGenerator::PLURAL))
        );
        assert_eq!(Action::from_setting("Dummy"), None);
    }
}
