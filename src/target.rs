// src/target.rs

//! Cross-compilation targets
//!
//! A target names the shape of the compiled artifacts a profile installs:
//! the CPU architecture to generate code for, the operating system to
//! generate code for, and the environment variables to use when compiling
//! and using the profile. Two targets with the same architecture and
//! operating system but different environments are distinct installations.
//!
//! Textual form: `<arch>-<os>`, e.g. `amd64-linux` or `arm-android`. The
//! literal `native` names the target of the running system.

use crate::envvar::EnvSet;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One cross-compilation target: architecture, operating system, and the
/// environment variables used to build for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    arch: String,
    os: String,
    env: EnvSet,
}

impl Target {
    /// Create a target with an empty environment
    pub fn new(arch: impl Into<String>, os: impl Into<String>) -> Self {
        Self {
            arch: arch.into(),
            os: os.into(),
            env: EnvSet::new(),
        }
    }

    /// The target of the system the process is running on
    pub fn native() -> Self {
        Self::new(std::env::consts::ARCH, std::env::consts::OS)
    }

    /// Replace the target's environment set
    pub fn with_env(mut self, env: EnvSet) -> Self {
        self.env = env;
        self
    }

    /// The architecture to generate code for
    pub fn arch(&self) -> &str {
        &self.arch
    }

    /// The operating system to generate code for
    pub fn os(&self) -> &str {
        &self.os
    }

    /// The environment variables used when compiling for this target
    pub fn env(&self) -> &EnvSet {
        &self.env
    }

    /// Mutable access to the target's environment variables
    pub fn env_mut(&mut self) -> &mut EnvSet {
        &mut self.env
    }

    /// Check whether two targets name the same platform
    ///
    /// Compares architecture and operating system only; the environment sets
    /// may differ. Full equality (including environment) is `==`.
    pub fn matches(&self, other: &Target) -> bool {
        self.arch == other.arch && self.os == other.os
    }
}

impl FromStr for Target {
    type Err = Error;

    /// Parse a target from `<arch>-<os>` form
    ///
    /// `native` parses to [`Target::native`]. The environment set of a
    /// parsed target is empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "native" {
            return Ok(Self::native());
        }
        let (arch, os) = s
            .split_once('-')
            .ok_or_else(|| Error::InvalidTarget(s.to_string()))?;
        if arch.is_empty() || os.is_empty() {
            return Err(Error::InvalidTarget(s.to_string()));
        }
        Ok(Self::new(arch, os))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.arch, self.os)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_arch_os() {
        let target: Target = "amd64-linux".parse().unwrap();
        assert_eq!(target.arch(), "amd64");
        assert_eq!(target.os(), "linux");
        assert!(target.env().is_empty());
    }

    #[test]
    fn test_parse_native() {
        let target: Target = "native".parse().unwrap();
        assert_eq!(target.arch(), std::env::consts::ARCH);
        assert_eq!(target.os(), std::env::consts::OS);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "amd64", "-linux", "amd64-"] {
            assert!(bad.parse::<Target>().is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_display_round_trip() {
        let target: Target = "arm-android".parse().unwrap();
        assert_eq!(target.to_string(), "arm-android");
        assert_eq!(target.to_string().parse::<Target>().unwrap(), target);
    }

    #[test]
    fn test_matches_ignores_env() {
        let plain = Target::new("arm", "linux");
        let with_env = Target::new("arm", "linux")
            .with_env(EnvSet::from_entries(["CC=arm-linux-gnueabi-gcc"]));
        assert!(plain.matches(&with_env));
        assert_ne!(plain, with_env);
        assert!(!plain.matches(&Target::new("arm64", "linux")));
    }
}
