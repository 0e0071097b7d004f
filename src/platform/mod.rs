//! Platform hosts.
//!
//! Only Windows is supported: games are `.exe` files and icons come from
//! the shell.

#[cfg(target_os = "windows")]
pub mod windows;
