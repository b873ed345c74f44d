// ── Virtual-screen metrics ────────────────────────────────────────────────────
//
// The virtual screen is the bounding rectangle spanning all attached
// monitors, as opposed to a single display's bounds.  Its origin is (0, 0)
// only on single-monitor desktops; a monitor left of or above the primary
// pushes it negative.
//
// Every query funnels through the DPI opt-in first so the metrics come back
// in physical pixels.

#![allow(unsafe_code)]

use windows::Win32::UI::WindowsAndMessaging::{
    GetSystemMetrics, SM_CXSCREEN, SM_CXVIRTUALSCREEN, SM_CYSCREEN, SM_CYVIRTUALSCREEN,
    SM_XVIRTUALSCREEN, SM_YVIRTUALSCREEN, SYSTEM_METRICS_INDEX,
};

use super::dpi;
use crate::rect::Rect;

fn metric(index: SYSTEM_METRICS_INDEX) -> i32 {
    // SAFETY: GetSystemMetrics has no pointer parameters; an unrecognised
    // index yields 0, never a fault.
    unsafe { GetSystemMetrics(index) }
}

/// Width and height of the virtual screen, in physical pixels.
///
/// Stable across repeated calls absent a display-configuration change.
pub fn resolution() -> (i32, i32) {
    dpi::ensure_system_aware();

    let (w, h) = (metric(SM_CXVIRTUALSCREEN), metric(SM_CYVIRTUALSCREEN));
    if w == 0 || h == 0 {
        // Some headless sessions report an empty virtual screen; the primary
        // display metrics still answer there.
        (metric(SM_CXSCREEN), metric(SM_CYSCREEN))
    } else {
        (w, h)
    }
}

/// Full bounds of the virtual screen, origin included.
pub fn bounds() -> Rect {
    let (width, height) = resolution();
    Rect {
        x: metric(SM_XVIRTUALSCREEN),
        y: metric(SM_YVIRTUALSCREEN),
        width,
        height,
    }
}
