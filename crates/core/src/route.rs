//! Canonical absolute route paths.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::ShellError;

/// Canonical absolute route prefix (e.g. `/vacancies`).
///
/// # Invariants
/// - Starts with `/`.
/// - No whitespace and no empty segments (`//`).
/// - No trailing `/`, except for the root path `/` itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoutePath(String);

impl RoutePath {
    pub fn new(path: impl Into<String>) -> Result<Self, ShellError> {
        let path = path.into();
        validate(&path)?;
        Ok(Self(path))
    }

    /// For paths fixed at compile time.
    pub(crate) fn from_static(path: &'static str) -> Self {
        debug_assert!(validate(path).is_ok(), "{path:?} is not a canonical route");
        Self(path.to_string())
    }

    /// The root path `/`.
    pub fn root() -> Self {
        Self("/".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Whether `path` is this route or lies in the subtree below it.
    pub fn covers(&self, path: &str) -> bool {
        match path.strip_prefix(self.0.as_str()) {
            Some("") => true,
            Some(rest) => rest.starts_with('/'),
            None => false,
        }
    }
}

fn validate(path: &str) -> Result<(), ShellError> {
    if !path.starts_with('/') {
        return Err(ShellError::invalid_route(format!("{path:?} is not absolute")));
    }
    if path.chars().any(char::is_whitespace) {
        return Err(ShellError::invalid_route(format!("{path:?} contains whitespace")));
    }
    if path == "/" {
        return Ok(());
    }
    if path.ends_with('/') {
        return Err(ShellError::invalid_route(format!("{path:?} has a trailing slash")));
    }
    if path.contains("//") {
        return Err(ShellError::invalid_route(format!("{path:?} has an empty segment")));
    }
    Ok(())
}

impl core::fmt::Display for RoutePath {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RoutePath {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for RoutePath {
    type Error = ShellError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RoutePath> for String {
    fn from(value: RoutePath) -> Self {
        value.0
    }
}

impl AsRef<str> for RoutePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_canonical_paths() {
        for p in ["/", "/dashboard", "/candidates/archive"] {
            assert_eq!(RoutePath::new(p).unwrap().as_str(), p);
        }
    }

    #[test]
    fn rejects_non_canonical_paths() {
        for p in ["", "dashboard", "/dashboard/", "/a//b", "/with space"] {
            match RoutePath::new(p) {
                Err(ShellError::InvalidRoute(_)) => {}
                other => panic!("expected InvalidRoute for {p:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn covers_exact_and_subtree_only() {
        let route: RoutePath = "/vacancies".parse().unwrap();
        assert!(route.covers("/vacancies"));
        assert!(route.covers("/vacancies/"));
        assert!(route.covers("/vacancies/42/edit"));
        assert!(!route.covers("/vacancies-archive"));
        assert!(!route.covers("/vacancie"));
        assert!(!route.covers("/"));
    }

    #[test]
    fn root_covers_only_itself() {
        let root = RoutePath::root();
        assert!(root.is_root());
        assert!(root.covers("/"));
        assert!(!root.covers("/dashboard"));
    }

    #[test]
    fn deserialization_validates() {
        let ok: RoutePath = serde_json::from_str("\"/pipeline\"").unwrap();
        assert_eq!(ok.as_str(), "/pipeline");
        assert!(serde_json::from_str::<RoutePath>("\"pipeline\"").is_err());
    }
}
