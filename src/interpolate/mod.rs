//! Placeholder substitution for template strings
//!
//! Substitution is a single left-to-right pass: a substituted value is never
//! scanned again, so a parameter containing `{other}` comes out literally.
//! Placeholders without a matching parameter stay in the output untouched.

mod patterns;

use std::borrow::Cow;

use regex::Captures;

pub use patterns::PLACEHOLDER_RE;

/// Runtime values for placeholders, keyed by identifier.
///
/// Insertion order is kept; setting a name twice overwrites the earlier value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: Vec<(String, String)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl ToString) {
        let name = name.into();
        let value = value.to_string();
        match self.values.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.values.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (name, value) in iter {
            params.set(name, value);
        }
        params
    }
}

impl<K: Into<String>, V: ToString, const N: usize> From<[(K, V); N]> for Params {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Substitute `{identifier}` placeholders in `template` with values from `params`.
///
/// Returns the template borrowed when nothing was substituted.
pub fn interpolate<'a>(template: &'a str, params: &Params) -> Cow<'a, str> {
    if params.is_empty() {
        return Cow::Borrowed(template);
    }
    PLACEHOLDER_RE.replace_all(template, |caps: &Captures| match params.get(&caps[1]) {
        Some(value) => value.to_string(),
        None => caps[0].to_string(),
    })
}

/// Placeholder identifiers in document order, without repeats
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for caps in PLACEHOLDER_RE.captures_iter(template) {
        if let Some(name) = caps.get(1).map(|m| m.as_str()) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPEAT_TIPS: &str = "內容重複：{msg}，請重新輸入";

    #[test]
    fn test_substitutes_parameter() {
        let params = Params::from([("msg", "A")]);
        assert_eq!(interpolate(REPEAT_TIPS, &params), "內容重複：A，請重新輸入");
    }

    #[test]
    fn test_empty_params_borrows_template() {
        let result = interpolate(REPEAT_TIPS, &Params::new());
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, REPEAT_TIPS);
    }

    #[test]
    fn test_missing_parameter_left_verbatim() {
        let params = Params::new().with("other", "x");
        assert_eq!(interpolate("Hello {name}, {other}", &params), "Hello {name}, x");
    }

    #[test]
    fn test_repeated_placeholder() {
        let params = Params::new().with("x", "A");
        assert_eq!(interpolate("{x} and {x}", &params), "A and A");
    }

    #[test]
    fn test_literal_braces_pass_through() {
        let params = Params::new().with("msg", "A");
        assert_eq!(
            interpolate("{} { msg } {msg {a-b} }{msg}{", &params),
            "{} { msg } {msg {a-b} }A{"
        );
    }

    #[test]
    fn test_single_pass_substitution() {
        let params = Params::new().with("a", "{b}").with("b", "B");
        let once = interpolate("{a}", &params);
        assert_eq!(once, "{b}");
    }

    #[test]
    fn test_idempotent_when_values_have_no_placeholders() {
        let params = Params::new().with("name", "Ann").with("when", "today");
        let once = interpolate("Hello {name}, see you {when}. {missing}", &params).into_owned();
        let twice = interpolate(&once, &params);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_params_overwrite_and_collect() {
        let mut params: Params = vec![("n", 1), ("m", 2)].into_iter().collect();
        params.set("n", 3);
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("n"), Some("3"));
        assert_eq!(params.get("m"), Some("2"));
        assert_eq!(params.get("x"), None);
    }

    #[test]
    fn test_placeholders_in_order() {
        assert_eq!(placeholders("{b} {a} {b} {}"), vec!["b", "a"]);
        assert!(placeholders("no placeholders").is_empty());
    }
}
