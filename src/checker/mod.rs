//! Checker module for validating a locale table against a reference locale

mod keys;
mod placeholder;

pub use keys::KeyCoverageChecker;
pub use placeholder::PlaceholderChecker;

use crate::model::ResourceTree;

/// Check result
#[derive(Debug)]
pub struct CheckResult {
    pub issues: Vec<CheckIssue>,
}

impl CheckResult {
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    pub fn add_issue(&mut self, issue: CheckIssue) {
        self.issues.push(issue);
    }

    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|i| matches!(i.severity, Severity::Error))
    }

    pub fn has_warnings(&self) -> bool {
        self.issues
            .iter()
            .any(|i| matches!(i.severity, Severity::Warning))
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }
}

impl Default for CheckResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Issue severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A single check issue
#[derive(Debug)]
pub struct CheckIssue {
    pub severity: Severity,
    pub message: String,
    pub key_path: Option<String>,
}

impl CheckIssue {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            key_path: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            key_path: None,
        }
    }

    pub fn with_key(mut self, key_path: impl Into<String>) -> Self {
        self.key_path = Some(key_path.into());
        self
    }
}

/// Trait for checkers. `reference` is the locale callers are written against.
pub trait Checker {
    fn check(&self, target: &ResourceTree, reference: &ResourceTree) -> CheckResult;
}

/// How much of the reference key set a locale covers on its own
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coverage {
    pub present: usize,
    pub total: usize,
}

impl Coverage {
    pub fn of(target: &ResourceTree, reference: &ResourceTree) -> Self {
        let reference_keys = reference.keys();
        let present = reference_keys
            .iter()
            .filter(|key| crate::resolver::KeyResolver::resolve(target, key).is_ok())
            .count();
        Self {
            present,
            total: reference_keys.len(),
        }
    }

    pub fn percent(&self) -> f32 {
        if self.total == 0 {
            100.0
        } else {
            self.present as f32 / self.total as f32 * 100.0
        }
    }
}

/// Run all checks on a locale table
pub fn check_all(target: &ResourceTree, reference: &ResourceTree) -> CheckResult {
    let mut result = CheckResult::new();

    let checkers: [&dyn Checker; 2] = [&KeyCoverageChecker, &PlaceholderChecker];
    for checker in checkers {
        result.issues.extend(checker.check(target, reference).issues);
    }

    result
}
