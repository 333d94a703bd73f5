//! Operating system abstraction layer
//!
//! This module provides a unified, platform-independent interface to the
//! operating system services the crate needs. Platform-specific
//! implementations are selected at compile time; each submodule exposes
//! the same surface.
//!
//! At present the layer only provides access to operating system
//! entropy, used to seed the witness generator at process start.

#[cfg(target_os = "macos")]
pub(crate) mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(all(unix, not(target_os = "macos")))]
pub(crate) mod linux;

#[cfg(all(unix, not(target_os = "macos")))]
pub(crate) use linux::*;

#[cfg(target_os = "windows")]
pub(crate) mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;
