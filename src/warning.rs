//! Warnings for degraded-but-successful results.
//!
//! Logo problems never abort a run. Stages that can degrade return an
//! [`Outcome`] that carries the produced value together with any warnings.

use std::fmt;

/// A single non-fatal diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// Machine-readable code (e.g. "qrtool::logo::missing").
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Optional help text suggesting how to fix the issue.
    pub help: Option<String>,
}

impl Warning {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            help: None,
        }
    }

    /// Add help text to this warning.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Collected warnings, in the order they were raised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Warnings {
    items: Vec<Warning>,
}

impl Warnings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, warning: Warning) {
        self.items.push(warning);
    }

    /// Merge another set of warnings into this one.
    pub fn merge(&mut self, other: Warnings) {
        self.items.extend(other.items);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Warning> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check whether a warning with the given code was raised.
    pub fn contains_code(&self, code: &str) -> bool {
        self.items.iter().any(|w| w.code == code)
    }
}

/// A value produced despite recoverable problems.
#[derive(Debug, Clone)]
pub struct Outcome<T> {
    pub value: T,
    pub warnings: Warnings,
}

impl<T> Outcome<T> {
    /// A clean result with no warnings.
    pub fn clean(value: T) -> Self {
        Self {
            value,
            warnings: Warnings::new(),
        }
    }

    /// A degraded result carrying one warning.
    pub fn degraded(value: T, warning: Warning) -> Self {
        let mut warnings = Warnings::new();
        warnings.push(warning);
        Self { value, warnings }
    }

    pub fn is_degraded(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Move the warnings into `sink` and return the value.
    pub fn into_value(self, sink: &mut Warnings) -> T {
        sink.merge(self.warnings);
        self.value
    }
}
