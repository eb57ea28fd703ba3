use iterators::fib::fibonacci_up_to;
use num_integer::Integer;
use tracing::debug;

use crate::error::EulerError;

/// Sum of the even-valued Fibonacci terms that do not exceed `bound`.
///
/// A negative bound is rejected; a bound of zero admits no terms.
pub fn sum_even_fibonacci_terms(bound: i64) -> Result<u64, EulerError> {
    if bound < 0 {
        return Err(EulerError::InvalidArgument(format!(
            "bound must be non-negative, got {}",
            bound
        )));
    }

    let sum: u64 = fibonacci_up_to(bound as u64)
        .filter(|term| term.is_even())
        .inspect(|term| debug!(term, "even term"))
        .sum();
    debug!(bound, sum, "summed even fibonacci terms");

    Ok(sum)
}
