// src/manager.rs

//! The profile manager contract
//!
//! A profile is a named collection of external software required for a given
//! system component or application: a single library, or a collection of
//! libraries and SDKs, as uncompiled source that needs to be built for one
//! or more [`Target`](crate::Target)s. Each profile is managed by one
//! [`Manager`] implementation, which knows how to install and uninstall the
//! profile's software for a target and where to place the results under a
//! movable [`RelativePath`](crate::RelativePath) root.
//!
//! The registry stores managers behind the trait only; concrete profile
//! implementations live in the build tool that embeds this crate.

use crate::envvar::EnvSet;
use crate::error::{Error, Result};
use crate::relpath::RelativePath;
use crate::target::Target;
use clap::Command;
use semver::Version;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which lifecycle phase a manager is being driven through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Install the profile for a target
    Install,
    /// Remove the profile for a target
    Uninstall,
}

impl Action {
    /// Get a human-readable name for the action
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Install => "install",
            Self::Uninstall => "uninstall",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Version metadata for a profile: the set of versions its manager can
/// install and which of those is installed by default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    profile: String,
    supported: Vec<Version>,
    default: Version,
}

impl VersionInfo {
    /// Create version metadata for `profile`
    ///
    /// `supported` lists the installable versions; `default` must be one of
    /// them. Returns [`Error::UnsupportedVersion`] for a default outside the
    /// supported set, or [`Error::Version`] for an unparseable entry.
    pub fn new<I, S>(profile: impl Into<String>, supported: I, default: &str) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let profile = profile.into();
        let mut versions = supported
            .into_iter()
            .map(|v| Version::parse(v.as_ref()).map_err(Error::from))
            .collect::<Result<Vec<_>>>()?;
        versions.sort_unstable_by(|a, b| b.cmp(a));
        versions.dedup();

        let default = Version::parse(default)?;
        if !versions.contains(&default) {
            return Err(Error::UnsupportedVersion {
                profile,
                version: default,
            });
        }
        Ok(Self {
            profile,
            supported: versions,
            default,
        })
    }

    /// The version installed when no version is requested
    pub fn default_version(&self) -> &Version {
        &self.default
    }

    /// All installable versions, newest first
    pub fn supported(&self) -> &[Version] {
        &self.supported
    }

    /// Check whether `version` can be installed
    pub fn is_supported(&self, version: &Version) -> bool {
        self.supported.contains(version)
    }

    /// Check whether `version` is newer than the default
    pub fn is_newer_than_default(&self, version: &Version) -> bool {
        *version > self.default
    }

    /// Resolve a requested version string to an installable version
    ///
    /// `None` resolves to the default; `Some` must parse and be supported.
    pub fn select(&self, requested: Option<&str>) -> Result<Version> {
        let Some(requested) = requested else {
            return Ok(self.default.clone());
        };
        let version = Version::parse(requested)?;
        if !self.is_supported(&version) {
            return Err(Error::UnsupportedVersion {
                profile: self.profile.clone(),
                version,
            });
        }
        Ok(version)
    }
}

/// Execution context handed to managers by the install/uninstall driver
///
/// Carries the environment of the invoking tool plus the driver's verbosity
/// and dry-run settings. Managers must honor `dry_run` by reporting what
/// they would do without touching the filesystem.
#[derive(Debug, Clone, Default)]
pub struct Context {
    env: EnvSet,
    verbose: bool,
    dry_run: bool,
}

impl Context {
    /// Create a context with an empty environment and default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the context's environment
    pub fn with_env(mut self, env: EnvSet) -> Self {
        self.env = env;
        self
    }

    /// Set verbose reporting
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set dry-run mode
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// The environment of the invoking tool
    pub fn env(&self) -> &EnvSet {
        &self.env
    }

    /// Whether managers should report verbosely
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Whether managers must avoid touching the filesystem
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}

/// Build the namespaced flag name for a profile-specific flag
///
/// Managers sharing one flag set must register their flags as
/// `<profile-name>.<flag>` to avoid collisions across profiles.
pub fn flag_name(profile: &str, flag: &str) -> String {
    format!("{}.{}", profile, flag)
}

/// The interface a profile implementation must provide in order to be
/// managed (installed/uninstalled) through the registry
///
/// Install and uninstall failures are reported as error values to the
/// caller, never panics; the registry does not interpret, retry, or recover
/// from them.
pub trait Manager: Send + Sync {
    /// The name of this profile
    fn name(&self) -> &str;

    /// An informative description of the profile
    fn info(&self) -> &str;

    /// Version metadata for this profile
    fn version_info(&self) -> &VersionInfo;

    /// Add profile-specific flags for `action` to the supplied command
    ///
    /// Flag names must be namespaced via [`flag_name`]. The default adds
    /// nothing.
    fn add_flags(&self, cmd: Command, action: Action) -> Command {
        let _ = action;
        cmd
    }

    /// A one-line rendering of the profile, conventionally name and
    /// default version
    fn describe(&self) -> String {
        format!("{} {}", self.name(), self.version_info().default_version())
    }

    /// Install the profile for `target`, placing artifacts under `root`
    fn install(&self, ctx: &Context, root: &RelativePath, target: &Target) -> Result<()>;

    /// Uninstall the profile for `target`
    ///
    /// When the last installed target for the profile is removed, the
    /// manager is expected to remove the profile's source as well.
    fn uninstall(&self, ctx: &Context, root: &RelativePath, target: &Target) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_display() {
        assert_eq!(Action::Install.to_string(), "install");
        assert_eq!(Action::Uninstall.to_string(), "uninstall");
    }

    #[test]
    fn test_flag_name_is_namespaced() {
        assert_eq!(flag_name("go", "sysroot"), "go.sysroot");
    }

    #[test]
    fn test_version_info_sorts_newest_first() {
        let vi = VersionInfo::new("go", ["1.4.0", "1.5.1", "1.5.0"], "1.5.1").unwrap();
        let rendered: Vec<String> = vi.supported().iter().map(|v| v.to_string()).collect();
        assert_eq!(rendered, vec!["1.5.1", "1.5.0", "1.4.0"]);
    }

    #[test]
    fn test_version_info_rejects_unsupported_default() {
        let err = VersionInfo::new("go", ["1.4.0"], "9.9.9").unwrap_err();
        assert!(matches!(err, Error::UnsupportedVersion { .. }));
    }

    #[test]
    fn test_version_info_select() {
        let vi = VersionInfo::new("go", ["1.4.0", "1.5.1"], "1.5.1").unwrap();
        assert_eq!(vi.select(None).unwrap().to_string(), "1.5.1");
        assert_eq!(vi.select(Some("1.4.0")).unwrap().to_string(), "1.4.0");
        assert!(vi.select(Some("2.0.0")).is_err());
        assert!(vi.select(Some("not-a-version")).is_err());
    }

    #[test]
    fn test_version_info_newer_than_default() {
        let vi = VersionInfo::new("go", ["1.4.0", "1.5.1"], "1.4.0").unwrap();
        assert!(vi.is_newer_than_default(&Version::parse("1.5.1").unwrap()));
        assert!(!vi.is_newer_than_default(&Version::parse("1.4.0").unwrap()));
    }
}
