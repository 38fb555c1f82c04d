use rustc_hash::FxHashMap;
use thiserror::Error;

/// fib(94) is the first Fibonacci number that does not fit in a u64.
const MAX_ARGUMENT: u32 = 93;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum FibonacciError {
    #[error("fib({n}) does not fit in a u64")]
    Overflow { n: u32 },
}

/// Computes the n-th Fibonacci number.
///
/// fib(0) = 0, fib(1) = 1, fib(k) = fib(k-1) + fib(k-2). Memoized
/// recursion: a table of solved subproblems, local to each call, keeps the
/// evaluation O(n) in time and space instead of exponential.
///
/// Arguments above 93 are rejected, their value overflows a u64. Negative
/// indices are unrepresentable; the recurrence is undefined for them.
///
/// ```
/// use textbook::algorithms::fibonacci::fibonacci;
///
/// assert_eq!(fibonacci(10), Ok(55));
/// ```
pub fn fibonacci(n: u32) -> Result<u64, FibonacciError> {
    if n > MAX_ARGUMENT {
        return Err(FibonacciError::Overflow { n });
    }

    let mut memo = FxHashMap::default();
    Ok(fib(n, &mut memo))
}

/// Recursive helper threading the memo table.
fn fib(n: u32, memo: &mut FxHashMap<u32, u64>) -> u64 {
    if let Some(&cached) = memo.get(&n) {
        return cached;
    }

    if n <= 1 {
        return u64::from(n);
    }

    let result = fib(n - 1, memo) + fib(n - 2, memo);
    memo.insert(n, result);
    result
}
