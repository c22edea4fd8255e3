use std::collections::BTreeMap;

use crate::signature::{Action, CommandSignature, EnvironmentSignature, SignatureRegistry};

/// Source dialect of a fragment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(rename_all = "lowercase"))]
pub enum Dialect {
    /// Plain LaTeX.
    #[default]
    Latex,
    /// LaTeX with embedded R chunks (`<<label>>=` ... `@`).
    Rsweave,
}

/// Per-scan options, independent of the signature table.
///
/// # Default
///
/// Language `en-US`, [`Dialect::Latex`], and strict mode only in test and
/// fuzzing builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// BCP 47 language code. Only the primary subtag affects placeholders.
    pub language: String,

    /// Which chunk markers are recognized.
    pub dialect: Dialect,

    /// Fail with [`ScanError::Stalled`](crate::ScanError::Stalled) when an
    /// iteration consumes nothing.
    ///
    /// When `false`, the scanner logs a warning, emits the offending
    /// character as markup and moves on, so every scan terminates.
    ///
    /// # Default
    ///
    /// `true` under `cfg(test)` or the `fuzzing` feature, `false` otherwise.
    pub strict: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_owned(),
            dialect: Dialect::Latex,
            strict: cfg!(any(test, feature = "fuzzing")),
        }
    }
}

const DEFAULT_LANGUAGE: &str = "en-US";

/// The effective configuration a host hands to [`Scanner::new`](crate::Scanner::new),
/// merged from defaults and user settings.
///
/// Command and environment entries use the names found in user settings:
/// commands map a prototype such as `\foo[]{}` to `default`, `ignore`,
/// `dummy`, `pluralDummy` or `vowelDummy`; environments map a name or a
/// `\begin{name}{}` prototype to `default` or `ignore`. Unknown action names
/// are skipped with a warning.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct ScanConfig {
    /// See [`ScanOptions::language`].
    pub language: String,
    /// See [`ScanOptions::dialect`].
    pub dialect: Dialect,
    /// Extra command signatures, by prototype.
    pub commands: BTreeMap<String, String>,
    /// Extra environment signatures, by name or prototype.
    pub environments: BTreeMap<String, String>,
    /// Environments whose bodies are hidden, in addition to the built-ins.
    pub ignored_environments: Vec<String>,
    /// See [`ScanOptions::strict`].
    pub strict: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        let options = ScanOptions::default();
        Self {
            language: options.language,
            dialect: options.dialect,
            commands: BTreeMap::new(),
            environments: BTreeMap::new(),
            ignored_environments: Vec::new(),
            strict: options.strict,
        }
    }
}

impl ScanConfig {
    /// The per-scan options.
    #[must_use]
    pub fn options(&self) -> ScanOptions {
        ScanOptions {
            language: self.language.clone(),
            dialect: self.dialect,
            strict: self.strict,
        }
    }

    /// The built-in signatures followed by the configured ones.
    #[must_use]
    pub fn registry(&self) -> SignatureRegistry {
        let mut registry = SignatureRegistry::with_defaults();
        let commands = self.commands.iter().filter_map(|(prototype, action)| {
            let signature = Action::from_setting(action)
                .and_then(|action| CommandSignature::parse(prototype, action));
            if signature.is_none() {
                tracing::warn!(%prototype, %action, "skipping unusable command signature");
            }
            signature
        });
        let environments = self.environments.iter().filter_map(|(prototype, action)| {
            let signature = Action::from_setting(action)
                .filter(|action| matches!(action, Action::Default | Action::Ignore))
                .and_then(|action| EnvironmentSignature::parse(prototype, action));
            if signature.is_none() {
                tracing::warn!(%prototype, %action, "skipping unusable environment signature");
            }
            signature
        });
        let ignored = self
            .ignored_environments
            .iter()
            .filter_map(|name| EnvironmentSignature::parse(name, Action::Ignore));
        registry.extend(commands, environments.chain(ignored));
        tracing::debug!(
            commands = registry.command_count(),
            environments = registry.environment_count(),
            "built signature registry"
        );
        registry
    }
}
