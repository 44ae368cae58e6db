//! Stack safety for recursive walks over expression trees.
//!
//! Comparison nodes may nest arbitrarily (`(a == b) == (c == d)` and so on),
//! and both the interpreter and the closure compiler recurse once per level.
//! Wrapping each recursive step in [`ensure_sufficient_stack`] grows the stack
//! on demand instead of overflowing on deep trees.
//!
//! On native targets growth is delegated to `stacker`; on WASM the closure is
//! called directly.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (1MB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn eval(&self, expr: &Expr) -> EvalResult {
///     ensure_sufficient_stack(|| match expr {
///         Expr::Comparison(node) => self.eval_comparison(node),
///         ...
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
