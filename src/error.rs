// ── Central error type ────────────────────────────────────────────────────────
//
// All fallible operations in the platform layer return `error::Result<T>`.
// No panics in production paths; the crate is loaded into a foreign process
// and must never unwind across the exported boundary.  Failures that reach
// the fire-and-forget exports are absorbed in `ffi` (the foreign contract
// has no error channel beyond the rectangle query's success flag).

/// Every error that winshim can produce.
#[derive(Debug)]
pub enum ShimError {
    /// A Win32 API call returned a failure code.
    Win32 {
        /// The name of the failing function, for display purposes.
        function: &'static str,
        /// The raw Win32 error code (`GetLastError()` value) or HRESULT.
        code: u32,
    },
}

impl std::fmt::Display for ShimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win32 { function, code } => {
                write!(f, "{function} failed (error {code:#010x})")
            }
        }
    }
}

impl std::error::Error for ShimError {}

// Convert a windows-crate error (HRESULT) directly into a ShimError so that
// `?` can be used on `windows::core::Result<T>` throughout the platform module.
#[cfg(windows)]
impl From<windows::core::Error> for ShimError {
    fn from(e: windows::core::Error) -> Self {
        // HRESULT.0 is i32; reinterpret bits as u32 for display purposes.
        // Win32 errors appear as 0x8007xxxx HRESULTs.
        Self::Win32 {
            function: "windows",
            code: e.code().0 as u32,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ShimError>;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_function() {
        let e = ShimError::Win32 {
            function: "SetWindowPos",
            code: 0x5, // ERROR_ACCESS_DENIED
        };
        assert_eq!(e.to_string(), "SetWindowPos failed (error 0x00000005)");
    }
}
