//! Placeholder drift checker

use super::{CheckIssue, CheckResult, Checker};
use crate::interpolate::placeholders;
use crate::model::ResourceTree;
use crate::resolver::KeyResolver;

/// Flags translations whose placeholders differ from the reference template.
///
/// A placeholder the reference lacks is an error: callers never pass it, so it
/// always renders as literal `{name}`. A dropped placeholder is only a warning.
pub struct PlaceholderChecker;

impl Checker for PlaceholderChecker {
    fn check(&self, target: &ResourceTree, reference: &ResourceTree) -> CheckResult {
        let mut result = CheckResult::new();

        for key in target.keys() {
            let (Ok(translated), Ok(original)) = (
                KeyResolver::resolve(target, &key),
                KeyResolver::resolve(reference, &key),
            ) else {
                continue;
            };

            let expected = placeholders(original);
            let found = placeholders(translated);

            for name in &found {
                if !expected.contains(name) {
                    result.add_issue(
                        CheckIssue::error(format!("'{}' uses unknown placeholder {{{}}}", key, name))
                            .with_key(key.as_str()),
                    );
                }
            }
            for name in &expected {
                if !found.contains(name) {
                    result.add_issue(
                        CheckIssue::warning(format!("'{}' drops placeholder {{{}}}", key, name))
                            .with_key(key.as_str()),
                    );
                }
            }
        }

        result
    }
}
