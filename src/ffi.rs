// ── Exported surface ──────────────────────────────────────────────────────────
//
// The four entry points a managed host binds with DllImport.  Calling
// convention is `extern "system"`; the success flag crosses the boundary as
// a 4-byte Win32 BOOL (what the default marshaller expects); window handles
// cross as pointer-sized integers and pass through uninterpreted.
//
// This is one of exactly two modules where `unsafe` is permitted (the other
// is `platform::win32`): the exports are `no_mangle` items and dereference
// raw out-pointers supplied by the foreign caller.
//
// Contract note: only the rectangle query reports failure.  The remaining
// exports are fire-and-forget — a failed platform call is absorbed here and
// the caller observes no effect.  Absence of an error never guarantees the
// requested effect took place.

#![allow(unsafe_code)]
#![allow(non_snake_case)] // exported names are part of the foreign ABI

use windows::Win32::Foundation::{BOOL, FALSE, HWND, TRUE};

use crate::platform::win32::{screen, window};
use crate::rect::Rect;

/// Reinterpret a caller-supplied pointer-sized integer as a window handle.
///
/// Never dereferenced locally; all semantics belong to the platform call
/// that receives it.
fn hwnd(handle: isize) -> HWND {
    HWND(handle as *mut core::ffi::c_void)
}

// ── Entry points ──────────────────────────────────────────────────────────────

/// Report the virtual-screen extent (spanning all monitors) in physical
/// pixels.
///
/// Forces system-DPI awareness before querying so the values reflect true
/// pixels, not DPI-scaled ones.
///
/// # Safety
///
/// `width` and `height` must each be null or valid for a 4-byte write.
/// Null pointers are tolerated: nothing is written.
#[no_mangle]
pub unsafe extern "system" fn GetScreenResolution(width: *mut i32, height: *mut i32) {
    if width.is_null() || height.is_null() {
        return;
    }
    let (w, h) = screen::resolution();
    // SAFETY: both pointers were null-checked and the caller guarantees each
    // is valid for a 4-byte write.
    unsafe {
        width.write(w);
        height.write(h);
    }
}

/// Query a window's screen-space rectangle.
///
/// On success writes all four outputs (width/height computed from the edge
/// form) and returns `TRUE`.  Returns `FALSE` — leaving every output
/// untouched — when the handle cannot be resolved or any output pointer is
/// null.
///
/// # Safety
///
/// Each output pointer must be null or valid for a 4-byte write.
#[no_mangle]
pub unsafe extern "system" fn GetWindowCoords(
    handle: isize,
    x: *mut i32,
    y: *mut i32,
    width: *mut i32,
    height: *mut i32,
) -> BOOL {
    if x.is_null() || y.is_null() || width.is_null() || height.is_null() {
        return FALSE;
    }
    match window::window_rect(hwnd(handle)) {
        Ok(r) => {
            // SAFETY: all four pointers were null-checked and the caller
            // guarantees each is valid for a 4-byte write.
            unsafe {
                x.write(r.x);
                y.write(r.y);
                width.write(r.width);
                height.write(r.height);
            }
            TRUE
        }
        Err(_) => FALSE,
    }
}

/// Strip a window to a borderless, always-on-top surface covering the full
/// virtual screen.
///
/// Fire-and-forget: a stale or closed handle silently does nothing.
///
/// # Safety
///
/// No pointer parameters; any handle value is accepted and passed through.
#[no_mangle]
pub unsafe extern "system" fn StyleWindow(handle: isize) {
    absorb("StyleWindow", window::style_borderless(hwnd(handle)));
}

/// Reposition and resize a window in one call.
///
/// Fire-and-forget; z-order and activation are left alone.  No validation
/// that the handle is visible or owned by the caller.
///
/// # Safety
///
/// No pointer parameters; any handle value is accepted and passed through.
#[no_mangle]
pub unsafe extern "system" fn SetWindowCoords(handle: isize, x: i32, y: i32, cx: i32, cy: i32) {
    absorb(
        "SetWindowCoords",
        window::set_rect(hwnd(handle), Rect::new(x, y, cx, cy)),
    );
}

// ── Absorbed failures ─────────────────────────────────────────────────────────

// The fire-and-forget exports have no status channel.  Debug builds echo the
// dropped error to stderr; release builds stay silent.

#[cfg(debug_assertions)]
fn absorb(export: &str, result: crate::error::Result<()>) {
    if let Err(e) = result {
        eprintln!("[winshim] {export}: {e}");
    }
}

#[cfg(not(debug_assertions))]
fn absorb(_export: &str, _result: crate::error::Result<()>) {}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::ptr;

    use windows::Win32::UI::WindowsAndMessaging::GetDesktopWindow;

    use super::*;

    /// The desktop window always exists, even in a non-interactive session.
    #[test]
    fn desktop_window_rectangle_succeeds() {
        // SAFETY: GetDesktopWindow has no parameters and always returns a
        // valid handle.
        let desktop = unsafe { GetDesktopWindow() };

        let (mut x, mut y, mut w, mut h) = (0, 0, 0, 0);
        // SAFETY: out-pointers reference live stack variables.
        let ok = unsafe { GetWindowCoords(desktop.0 as isize, &mut x, &mut y, &mut w, &mut h) };
        assert!(ok.as_bool());
        assert!(w >= 0, "width = {w}");
        assert!(h >= 0, "height = {h}");
    }

    /// A garbage handle must fail and leave the outputs untouched.
    #[test]
    fn invalid_handle_fails_without_writing() {
        let sentinel = -7;
        let (mut x, mut y, mut w, mut h) = (sentinel, sentinel, sentinel, sentinel);
        // SAFETY: out-pointers reference live stack variables; 0xDEAD is not
        // a live window handle.
        let ok = unsafe { GetWindowCoords(0xDEAD, &mut x, &mut y, &mut w, &mut h) };
        assert!(!ok.as_bool());
        assert_eq!((x, y, w, h), (sentinel, sentinel, sentinel, sentinel));
    }

    /// Null out-pointers are tolerated: no write, no crash.
    #[test]
    fn null_outputs_fail_cleanly() {
        // SAFETY: null out-pointers are exactly the case under test.
        let ok = unsafe {
            GetWindowCoords(
                0,
                ptr::null_mut(),
                ptr::null_mut(),
                ptr::null_mut(),
                ptr::null_mut(),
            )
        };
        assert!(!ok.as_bool());

        // SAFETY: as above.
        unsafe { GetScreenResolution(ptr::null_mut(), ptr::null_mut()) };
    }

    /// The virtual screen — or its primary-display fallback — is never
    /// zero-sized on a real session.
    #[test]
    fn resolution_is_positive_and_stable() {
        let (mut w1, mut h1) = (0, 0);
        let (mut w2, mut h2) = (0, 0);
        // SAFETY: out-pointers reference live stack variables.
        unsafe {
            GetScreenResolution(&mut w1, &mut h1);
            GetScreenResolution(&mut w2, &mut h2);
        }
        assert!(w1 > 0, "width = {w1}");
        assert!(h1 > 0, "height = {h1}");
        assert_eq!((w1, h1), (w2, h2));
    }
}
