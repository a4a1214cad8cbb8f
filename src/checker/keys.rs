//! Missing, unused and malformed key checker

use super::{CheckIssue, CheckResult, Checker};
use crate::model::{Entry, ResourceTree};
use crate::resolver::{KeyResolver, MissReason};

/// Compares the key sets of two locales
pub struct KeyCoverageChecker;

impl Checker for KeyCoverageChecker {
    fn check(&self, target: &ResourceTree, reference: &ResourceTree) -> CheckResult {
        let mut result = CheckResult::new();

        for key in reference.keys() {
            if let Err(miss) = KeyResolver::resolve(target, &key) {
                // Malformed values are reported below, once
                if miss.reason != MissReason::NotLeaf {
                    result.add_issue(
                        CheckIssue::warning(format!("Missing key '{}'", key)).with_key(key),
                    );
                }
            }
        }

        let mut malformed: Vec<(String, &'static str)> = target
            .entries()
            .filter_map(|(ns, key, entry)| match entry {
                Entry::Unsupported(kind) => Some((format!("{}.{}", ns, key), *kind)),
                Entry::Text(_) => None,
            })
            .collect();
        malformed.sort_unstable();
        for (key, kind) in malformed {
            result.add_issue(
                CheckIssue::error(format!("'{}' is a {}, not a string", key, kind)).with_key(key),
            );
        }

        for key in target.keys() {
            if KeyResolver::resolve(reference, &key).is_err() {
                result.add_issue(
                    CheckIssue::warning(format!("Unused key '{}' (not in reference)", key))
                        .with_key(key),
                );
            }
        }

        result
    }
}
