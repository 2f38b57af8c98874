// src/relpath.rs

//! Portable install paths anchored at a movable root
//!
//! Installed-profile locations are recorded relative to a named root
//! variable, e.g. `${ANVIL_ROOT}/profiles/go`, so a recorded path stays
//! valid when the checkout is mounted at a different absolute location on
//! another machine. `RelativePath` separates what varies (the root
//! variable's current value) from what is fixed (the relative structure),
//! and defers resolution to the point of use:
//!
//! - the symbolic form (`Display`) is what gets persisted,
//! - [`RelativePath::expand`] produces the concrete path for actual I/O.

use crate::envvar::EnvSet;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A filesystem path expressed as a root variable plus a relative suffix
///
/// Immutable: `join` and `root_join` return new values sharing the same
/// root, never mutate the receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativePath {
    name: String,
    value: PathBuf,
    suffix: PathBuf,
}

impl RelativePath {
    /// Create a path anchored at the root variable `name`, whose current
    /// resolved value is `value`, with an empty suffix
    pub fn new(name: impl Into<String>, value: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            suffix: PathBuf::new(),
        }
    }

    /// The root variable's name
    pub fn root_name(&self) -> &str {
        &self.name
    }

    /// The root variable's current resolved value
    pub fn root_value(&self) -> &Path {
        &self.value
    }

    /// Return a copy with `components` appended to the suffix
    ///
    /// Components are joined with lexical cleaning: `.` components are
    /// dropped and `name/..` pairs collapse, as with Go's `filepath.Join`.
    /// A leading separator on a component is ignored, so the suffix stays
    /// relative and the expanded path stays anchored under the root.
    /// Joining zero components returns a value equal to the receiver.
    pub fn join<I, C>(&self, components: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: AsRef<Path>,
    {
        let mut suffix = self.suffix.clone();
        for component in components {
            suffix.push(strip_root(component.as_ref()));
        }
        Self {
            name: self.name.clone(),
            value: self.value.clone(),
            suffix: clean(&suffix),
        }
    }

    /// Return a fresh path anchored at the same root with a suffix built
    /// from `components` alone
    ///
    /// Discards the receiver's suffix; used to derive a path next to the
    /// receiver rather than inside it.
    pub fn root_join<I, C>(&self, components: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: AsRef<Path>,
    {
        Self::new(self.name.clone(), self.value.clone()).join(components)
    }

    /// The concrete filesystem path, with the root variable resolved
    pub fn expand(&self) -> PathBuf {
        clean(&self.value.join(&self.suffix))
    }

    /// The relative suffix only, with no root component
    pub fn relative_path(&self) -> &Path {
        &self.suffix
    }

    /// Replace every occurrence of the symbolic root token in `env`
    ///
    /// Rewrites each variable whose value contains the literal `${name}`
    /// token, substituting the resolved root value. Variables whose value
    /// would not change are left untouched.
    pub fn expand_env(&self, env: &mut EnvSet) {
        let root = self.symbolic_root();
        let value = self.value.to_string_lossy();
        let rewritten: Vec<(String, String)> = env
            .iter()
            .filter_map(|(k, v)| {
                let expanded = v.replace(&root, &value);
                (expanded != v).then(|| (k.to_string(), expanded))
            })
            .collect();
        for (name, value) in rewritten {
            env.set(name, value);
        }
    }

    fn symbolic_root(&self) -> String {
        format!("${{{}}}", self.name)
    }
}

/// Symbolic rendering: `${name}` for an empty suffix, otherwise
/// `${name}` followed by the platform separator and the suffix
impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbolic_root())?;
        if !self.suffix.as_os_str().is_empty() {
            write!(f, "{}{}", std::path::MAIN_SEPARATOR, self.suffix.display())?;
        }
        Ok(())
    }
}

/// Drop any root or prefix component, leaving the relative remainder
///
/// `PathBuf::push` replaces the whole path when handed an absolute
/// component; suffixes must stay relative so they always append.
fn strip_root(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
        .map(|c| c.as_os_str())
        .collect()
}

/// Lexically clean a path: drop `.` components, collapse `name/..` pairs,
/// keep leading `..` components of a relative path
fn clean(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `..` at an absolute root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out.iter().map(|c| c.as_os_str()).collect()
}
