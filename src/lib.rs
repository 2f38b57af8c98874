// src/lib.rs

//! Anvil profile management core
//!
//! Support for managing external software dependencies of a build tool:
//! a balance between no support at all and a full-blown package manager.
//! A profile is a named collection of software (a single library, or a set
//! of libraries and SDKs) that needs to be compiled for specific targets;
//! targets pair an architecture and operating system with the environment
//! variables used to build for them, providing the essential support for
//! cross compilation.
//!
//! # Architecture
//!
//! - Registry: process-wide name→manager map; write-once registration,
//!   fatal on duplicate names, thread-safe lookup and sorted enumeration
//! - Manager: the capability trait each profile implementation provides
//!   (describe, flag registration, install/uninstall per target)
//! - RelativePath: install locations recorded as `${ROOT}/relative/path`
//!   so manifests stay portable across differently-mounted checkouts
//! - Targets and environment sets are plain values; manifest I/O, flag
//!   parsing, and the install driver live in the embedding tool

pub mod envvar;
mod error;
pub mod manager;
pub mod registry;
pub mod relpath;
pub mod target;

pub use envvar::EnvSet;
pub use error::{Error, Result};
pub use manager::{flag_name, Action, Context, Manager, VersionInfo};
pub use registry::{lookup_manager, managers, register, Registry, SharedManager};
pub use relpath::RelativePath;
pub use target::Target;
