/// Stack space that must remain before a recursive step runs.
const RED_ZONE: usize = 128 * 1024;

/// Size of each segment allocated when the stack runs low.
const STACK_GROWTH: usize = 1024 * 1024;

/// Runs `f`, first growing the stack if less than the red zone is left.
///
/// Wraps the recursive steps of the parser and the evaluator so deeply
/// nested programs fail with a depth error instead of a host stack overflow.
///
/// ## Example
/// ```
/// use brt::util::stack::ensure_sufficient_stack;
///
/// fn depth(n: u64) -> u64 {
///     ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
/// }
///
/// assert_eq!(depth(50_000), 50_000);
/// ```
#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_GROWTH, f)
}
