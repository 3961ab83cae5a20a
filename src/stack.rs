// Stack growth for the recursive reader and evaluator
//
// The depth bound alone does not keep deep input from overflowing small
// thread stacks, so every recursion step runs on a stack with at least
// `RED_ZONE` bytes left, growing it on the heap when necessary.

const RED_ZONE: usize = 128 * 1024;

const STACK_PER_RECURSION: usize = 1024 * 1024;

#[inline]
pub fn ensure_sufficient_stack<R, F: FnOnce() -> R>(f: F) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}
