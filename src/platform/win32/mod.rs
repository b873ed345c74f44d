// ── Win32 platform implementation ─────────────────────────────────────────────
//
// This is one of exactly two modules in the codebase where `unsafe` code is
// permitted (the other is `ffi`).  Every `unsafe` block MUST carry a
// `// SAFETY:` comment that states:
//   • which invariant makes the operation sound, and
//   • what the caller is responsible for maintaining.
//
// Nothing in this module is `pub` beyond what callers genuinely need; keep the
// unsafe surface as small as possible.

#![allow(unsafe_code)]

// ── Sub-modules ───────────────────────────────────────────────────────────────

pub mod screen; // virtual-screen metrics
pub mod window; // per-window rectangle query / styling / placement

pub(crate) mod dpi; // system-DPI awareness opt-in

// ── Geometry conversion ───────────────────────────────────────────────────────

use windows::Win32::Foundation::RECT;

use crate::rect::Rect;

// Win32 reports rectangles in edge form; everything above this module works
// in origin + extent form.
impl From<RECT> for Rect {
    fn from(r: RECT) -> Self {
        Rect::from_edges(r.left, r.top, r.right, r.bottom)
    }
}
