#![allow(unsafe_code)]

use std::sync::Once;

use windows::Win32::UI::HiDpi::{
    SetProcessDpiAwarenessContext, DPI_AWARENESS_CONTEXT_SYSTEM_AWARE,
};

static AWARENESS: Once = Once::new();

/// Opt the process into system-DPI awareness, at most once.
///
/// Screen metrics must be read under a real awareness level or the platform
/// reports scaled values instead of physical pixels.  A shim cannot rely on
/// its host calling anything first, so every metrics path funnels through
/// here before touching `GetSystemMetrics`.
///
/// The awareness context of a process can only be set once; if the host
/// already committed to a level the call fails and the host's choice stands.
pub(crate) fn ensure_system_aware() {
    AWARENESS.call_once(|| {
        // SAFETY: SetProcessDpiAwarenessContext has no pointer parameters and
        // no preconditions; it fails (ignored) when awareness is already set.
        unsafe {
            let _ = SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_SYSTEM_AWARE);
        }
    });
}
