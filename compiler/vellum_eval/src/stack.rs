//! Stack safety for deeply nested stylesheets.
//!
//! Expression and statement evaluation recurse on the native stack, and
//! user functions can recurse up to the configured call depth. The
//! `stacker` crate grows the stack on demand; WASM targets call straight
//! through and rely on the call depth limit alone.

/// Headroom that must remain before a nested node is evaluated.
#[cfg(not(target_arch = "wasm32"))]
const HEADROOM: usize = 128 * 1024;

/// Size of each additional stack segment.
#[cfg(not(target_arch = "wasm32"))]
const SEGMENT: usize = 2 * 1024 * 1024;

/// Run `f`, switching to a fresh stack segment when less than `HEADROOM`
/// bytes are left.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(HEADROOM, SEGMENT, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
