//! Stack safety utilities for deep recursion.
//!
//! Recursion depth in the parser equals expression nesting depth, so
//! pathological inputs like ten thousand opening parens would otherwise
//! overflow the host stack. Uses the `stacker` crate to grow the stack on
//! demand; on WASM targets the closure runs directly (WASM has its own
//! stack management).

/// Ensure sufficient stack space is available before executing `f`.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Minimum stack space to keep available (100KB red zone).
    const RED_ZONE: usize = 100 * 1024;

    /// Stack space to allocate when growing (1MB).
    const STACK_PER_RECURSION: usize = 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_closure_result() {
        let result = ensure_sufficient_stack(|| 42);
        assert_eq!(result, 42);
    }

    #[test]
    fn deep_recursion_does_not_overflow() {
        fn deep_recurse(n: u64) -> u64 {
            ensure_sufficient_stack(|| if n == 0 { 0 } else { deep_recurse(n - 1) + 1 })
        }

        assert_eq!(deep_recurse(100_000), 100_000);
    }
}
