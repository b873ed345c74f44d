// ── Platform abstraction layer ────────────────────────────────────────────────
//
// This module defines the interface that the exported surface uses to talk
// to the OS.  No `unsafe` lives here; all Win32 FFI is confined to the
// `win32` sub-module and never leaks outward.

pub mod win32;
