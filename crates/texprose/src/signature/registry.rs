use std::collections::HashMap;

use super::{
    Action, CommandSignature, EnvironmentSignature, defaults,
    matcher::{SignatureMatch, match_longest},
};

/// Command and environment signatures grouped by name.
///
/// Built once per configuration and read-only afterwards; share it behind an
/// `Arc` between scanners working on different documents.
#[derive(Debug, Clone, Default)]
pub struct SignatureRegistry {
    commands: HashMap<String, Vec<CommandSignature>>,
    environments: HashMap<String, Vec<EnvironmentSignature>>,
}

impl SignatureRegistry {
    /// A registry with no signatures at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in table of common LaTeX commands and environments.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::default();
        for (prototype, action) in defaults::COMMANDS {
            if let Some(signature) = CommandSignature::parse(prototype, *action) {
                registry.add_command(signature);
            }
        }
        for name in defaults::IGNORED_ENVIRONMENTS {
            if let Some(signature) = EnvironmentSignature::parse(name, Action::Ignore) {
                registry.add_environment(signature);
            }
        }
        registry
    }

    /// Registers a command signature. Later registrations win ties against
    /// earlier ones with the same name and arity.
    pub fn add_command(&mut self, signature: CommandSignature) -> &mut Self {
        self.commands
            .entry(signature.name().to_owned())
            .or_default()
            .push(signature);
        self
    }

    /// Registers an environment signature.
    pub fn add_environment(&mut self, signature: EnvironmentSignature) -> &mut Self {
        self.environments
            .entry(signature.opening().name().to_owned())
            .or_default()
            .push(signature);
        self
    }

    /// Merges user extensions after the current entries.
    pub fn extend(
        &mut self,
        commands: impl IntoIterator<Item = CommandSignature>,
        environments: impl IntoIterator<Item = EnvironmentSignature>,
    ) -> &mut Self {
        for signature in commands {
            self.add_command(signature);
        }
        for signature in environments {
            self.add_environment(signature);
        }
        self
    }

    /// All signatures for the command `name` (including the backslash).
    #[must_use]
    pub fn commands(&self, name: &str) -> &[CommandSignature] {
        self.commands.get(name).map_or(&[], Vec::as_slice)
    }

    /// All signatures whose opening is `opening`, e.g. `\begin{figure}`.
    #[must_use]
    pub fn environments(&self, opening: &str) -> &[EnvironmentSignature] {
        self.environments.get(opening).map_or(&[], Vec::as_slice)
    }

    /// Longest match among the signatures for command `name` at `from`.
    #[must_use]
    pub fn match_command(
        &self,
        name: &str,
        source: &str,
        from: usize,
    ) -> Option<SignatureMatch<'_, CommandSignature>> {
        match_longest(self.commands(name), source, from)
    }

    /// Longest match among the signatures for `opening` at `from`.
    #[must_use]
    pub fn match_environment(
        &self,
        opening: &str,
        source: &str,
        from: usize,
    ) -> Option<SignatureMatch<'_, EnvironmentSignature>> {
        match_longest(self.environments(opening), source, from)
    }

    /// Number of command signatures.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.values().map(Vec::len).sum()
    }

    /// Number of environment signatures.
    #[must_use]
    pub fn environment_count(&self) -> usize {
        self.environments.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placeholder::PlaceholderGenerator;

    #[test]
    fn defaults_cover_citations_and_preamble() {
        let registry = SignatureRegistry::with_defaults();
        assert!(registry.command_count() > 500);
        assert_eq!(registry.environment_count(), 5);

        let m = registry.match_command("\\cite", "\\cite[p.~3]{knuth}", 0).unwrap();
        assert_eq!(m.range.end, 18);
        assert_eq!(m.signature.action(), Action::Placeholder(PlaceholderGenerator::DEFAULT));

        let m = registry.match_command("\\cites", "\\cites{a}{b}", 0).unwrap();
        assert_eq!(m.signature.action(), Action::Placeholder(PlaceholderGenerator::PLURAL));

        let m = registry.match_command("\\usepackage", "\\usepackage[utf8]{inputenc}", 0).unwrap();
        assert_eq!(m.signature.action(), Action::Ignore);

        assert!(registry.match_command("\\foobar", "\\foobar{x}", 0).is_none());
    }

    #[test]
    fn extensions_override_defaults() {
        let mut registry = SignatureRegistry::with_defaults();
        registry.extend(
            CommandSignature::parse("\\colorbox{}", Action::Placeholder(PlaceholderGenerator::DEFAULT)),
            None,
        );
        let m = registry.match_command("\\colorbox", "\\colorbox{red}", 0).unwrap();
        assert!(matches!(m.signature.action(), Action::Placeholder(_)));
    }

    #[test]
    fn environment_lookup_by_opening() {
        let registry = SignatureRegistry::with_defaults();
        let m = registry
            .match_environment("\\begin{verbatim}", "\\begin{verbatim}x", 0)
            .unwrap();
        assert_eq!(m.signature.name(), "verbatim");
        assert_eq!(m.signature.action(), Action::Ignore);
        assert!(registry.environments("\\begin{itemize}").is_empty());
    }
}
