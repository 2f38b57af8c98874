// src/envvar.rs

//! Environment-variable sets for cross-compilation targets
//!
//! Targets carry the environment variables used when compiling and invoking
//! a profile's software (CC, CFLAGS, sysroots and the like). `EnvSet` keeps
//! them as an ordered map so that two targets with the same variables compare
//! equal regardless of insertion order, and so the serialized form is stable.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An ordered set of environment variables
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvSet {
    vars: BTreeMap<String, String>,
}

impl EnvSet {
    /// Create an empty environment set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an environment set from `KEY=VALUE` entries
    ///
    /// Entries without an `=` are treated as a variable set to the empty
    /// string. A later entry for the same key overrides an earlier one.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for entry in entries {
            let entry = entry.as_ref();
            match entry.split_once('=') {
                Some((key, value)) => set.set(key, value),
                None => set.set(entry, ""),
            }
        }
        set
    }

    /// Capture the current process environment
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn from_os_env() -> Self {
        let mut set = Self::new();
        for (key, value) in std::env::vars_os() {
            if let (Some(key), Some(value)) = (key.to_str(), value.to_str()) {
                set.set(key, value);
            }
        }
        set
    }

    /// Get the value of a variable
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Set a variable, replacing any existing value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Remove a variable, returning its previous value if present
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.vars.remove(name)
    }

    /// Check whether a variable is present
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Iterate over `(name, value)` pairs in lexicographic name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render back to `KEY=VALUE` entries, in lexicographic name order
    pub fn to_entries(&self) -> Vec<String> {
        self.vars
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect()
    }

    /// Number of variables in the set
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_entries() {
        let env = EnvSet::from_entries(["CC=gcc", "GOARCH=arm", "EMPTY"]);
        assert_eq!(env.get("CC"), Some("gcc"));
        assert_eq!(env.get("GOARCH"), Some("arm"));
        assert_eq!(env.get("EMPTY"), Some(""));
        assert_eq!(env.get("MISSING"), None);
        assert_eq!(env.len(), 3);
    }

    #[test]
    fn test_later_entry_overrides() {
        let env = EnvSet::from_entries(["CC=gcc", "CC=clang"]);
        assert_eq!(env.get("CC"), Some("clang"));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn test_round_trip_is_sorted() {
        let env = EnvSet::from_entries(["ZED=1", "ALPHA=2", "MID=3"]);
        assert_eq!(env.to_entries(), vec!["ALPHA=2", "MID=3", "ZED=1"]);
    }

    #[test]
    fn test_order_independent_equality() {
        let a = EnvSet::from_entries(["A=1", "B=2"]);
        let b = EnvSet::from_entries(["B=2", "A=1"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_set_and_remove() {
        let mut env = EnvSet::new();
        assert!(env.is_empty());
        env.set("PATH", "/usr/bin");
        assert!(env.contains("PATH"));
        assert_eq!(env.remove("PATH"), Some("/usr/bin".to_string()));
        assert!(!env.contains("PATH"));
    }
}
