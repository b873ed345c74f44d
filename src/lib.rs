//! Stateless Win32 window-control shim for a managed host process.
//!
//! Built as a `cdylib`, this crate exports four `extern "system"` entry
//! points (see [`ffi`]) that a host binds over its foreign-function
//! boundary: screen-resolution query, window-rectangle retrieval,
//! borderless styling, and window position/size mutation. Each export is an
//! independent wrapper around one or two Win32 calls; the shim owns no
//! state of its own.
//!
//! Built as an `rlib`, the safe API in [`platform::win32`] is available
//! directly to Rust callers.

// ── Safety policy ────────────────────────────────────────────────────────────
// Unsafe code is forbidden everywhere except:
//   • `platform::win32` – Win32 / WinAPI FFI
//   • `ffi`             – exported entry points (no_mangle, raw out-pointers)
// Each unsafe block in those modules MUST carry a `// SAFETY:` comment.
#![deny(unsafe_code)]

pub mod error;
pub mod rect;

#[cfg(windows)]
pub mod ffi; // exported extern "system" surface
#[cfg(windows)]
pub mod platform; // Win32 implementation layer
