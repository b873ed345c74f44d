// ── Window operations ─────────────────────────────────────────────────────────
//
// Responsibilities in this file (unsafe confined here):
//   • Query a window's screen-space rectangle.
//   • Strip a window to a borderless, always-on-top, full-screen surface.
//   • Reposition and resize a window in one call.
//
// Handles are opaque tokens owned by the caller: never created, destroyed,
// cached, or interpreted here.  Validity is whatever the platform call
// decides at the moment it runs.

#![allow(unsafe_code)]

use windows::Win32::{
    Foundation::{GetLastError, SetLastError, HWND, RECT, WIN32_ERROR},
    UI::WindowsAndMessaging::{
        GetWindowRect, SetWindowPos, GWL_STYLE, HWND_TOPMOST, SWP_FRAMECHANGED, SWP_NOACTIVATE,
        SWP_NOZORDER, SWP_SHOWWINDOW, WINDOW_STYLE, WS_POPUP, WS_VISIBLE,
    },
};

#[cfg(target_pointer_width = "64")]
use windows::Win32::UI::WindowsAndMessaging::SetWindowLongPtrW;
#[cfg(not(target_pointer_width = "64"))]
use windows::Win32::UI::WindowsAndMessaging::SetWindowLongW;

use super::screen;
use crate::error::{Result, ShimError};
use crate::rect::Rect;

// ── Queries ───────────────────────────────────────────────────────────────────

/// Query `hwnd`'s screen-space rectangle.
///
/// Fails when the platform cannot resolve the handle — destroyed, invalid,
/// or never a window in the first place.
pub fn window_rect(hwnd: HWND) -> Result<Rect> {
    let mut rect = RECT::default();
    // SAFETY: &mut rect is a valid RECT pointer for the duration of the call;
    // an unresolvable hwnd makes the call fail, it never faults.
    unsafe { GetWindowRect(hwnd, &mut rect) }.map_err(|e| win32_call("GetWindowRect", e))?;
    Ok(rect.into())
}

// ── Mutations ─────────────────────────────────────────────────────────────────

/// Strip `hwnd` to a borderless surface covering the full virtual screen,
/// kept above every non-topmost window.
pub fn style_borderless(hwnd: HWND) -> Result<()> {
    set_style(hwnd, WS_POPUP | WS_VISIBLE)?;

    let b = screen::bounds();
    // HWND_TOPMOST also stamps the always-on-top extended style onto the
    // window; SWP_FRAMECHANGED makes the stripped non-client area take
    // effect before the window is shown at its new size.
    // SAFETY: no pointer parameters; an unresolvable hwnd fails cleanly.
    unsafe {
        SetWindowPos(
            hwnd,
            HWND_TOPMOST,
            b.x,
            b.y,
            b.width,
            b.height,
            SWP_FRAMECHANGED | SWP_SHOWWINDOW,
        )
    }
    .map_err(|e| win32_call("SetWindowPos", e))
}

/// Move and size `hwnd` in a single call.
///
/// Z-order is left alone and activation is not stolen: placing a hosted
/// window must not yank focus away from the host.
pub fn set_rect(hwnd: HWND, rect: Rect) -> Result<()> {
    // SAFETY: no pointer parameters; an unresolvable hwnd fails cleanly.
    // The insert-after handle is ignored under SWP_NOZORDER.
    unsafe {
        SetWindowPos(
            hwnd,
            HWND::default(),
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            SWP_NOZORDER | SWP_NOACTIVATE | SWP_SHOWWINDOW,
        )
    }
    .map_err(|e| win32_call("SetWindowPos", e))
}

// ── Style plumbing ────────────────────────────────────────────────────────────

/// Replace `hwnd`'s window style wholesale.
fn set_style(hwnd: HWND, style: WINDOW_STYLE) -> Result<()> {
    // The setter returns the previous style, and 0 is a legal previous
    // value; failure is only distinguishable through GetLastError, so the
    // error slot must be cleared first.
    // SAFETY: SetLastError writes thread-local state only.
    unsafe { SetLastError(WIN32_ERROR(0)) };

    #[cfg(target_pointer_width = "64")]
    // SAFETY: GWL_STYLE is a valid index; an unresolvable hwnd fails cleanly.
    let prev = unsafe { SetWindowLongPtrW(hwnd, GWL_STYLE, style.0 as isize) };
    #[cfg(not(target_pointer_width = "64"))]
    // SAFETY: as above; the 32-bit entry point takes the style as i32.
    let prev = unsafe { SetWindowLongW(hwnd, GWL_STYLE, style.0 as i32) } as isize;

    if prev == 0 {
        // SAFETY: GetLastError reads thread-local state set by the last call.
        let code = unsafe { GetLastError() };
        if code.0 != 0 {
            return Err(ShimError::Win32 {
                function: if cfg!(target_pointer_width = "64") {
                    "SetWindowLongPtrW"
                } else {
                    "SetWindowLongW"
                },
                code: code.0,
            });
        }
    }
    Ok(())
}

// ── Error helpers ─────────────────────────────────────────────────────────────

/// Wrap a windows-crate error with the name of the failing function.
fn win32_call(function: &'static str, e: windows::core::Error) -> ShimError {
    ShimError::Win32 {
        function,
        code: e.code().0 as u32,
    }
}
