//! Configuration for the language frontend.

use std::sync::Arc;

use prosaic_foundation::position::ANONYMOUS_SOURCE;

use crate::symbols::SymbolClassifier;

/// Configuration for a [`Parser`](crate::Parser).
///
/// Controls character classification, the filename attached to positions,
/// and whether each grammar rule attempt is traced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Character classes used by the scanner.
    pub classifier: SymbolClassifier,

    /// Filename recorded in every token position.
    pub filename: Arc<str>,

    /// Emit a `trace` event for every rule attempt.
    pub trace_rules: bool,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            classifier: SymbolClassifier::default(),
            filename: Arc::from(ANONYMOUS_SOURCE),
            trace_rules: false,
        }
    }
}

impl FrontendConfig {
    /// Creates a configuration for parsing the named file.
    #[must_use]
    pub fn for_file(filename: impl Into<Arc<str>>) -> Self {
        Self {
            filename: filename.into(),
            ..Self::default()
        }
    }

    /// Creates a configuration that traces every rule attempt.
    #[must_use]
    pub fn debug() -> Self {
        Self {
            trace_rules: true,
            ..Self::default()
        }
    }

    /// Builder method to set the character classifier.
    #[must_use]
    pub fn with_classifier(mut self, classifier: SymbolClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Builder method to set the filename.
    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<Arc<str>>) -> Self {
        self.filename = filename.into();
        self
    }

    /// Builder method to enable/disable rule tracing.
    #[must_use]
    pub fn with_rule_tracing(mut self, trace: bool) -> Self {
        self.trace_rules = trace;
        self
    }
}
