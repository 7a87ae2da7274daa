//! Parcel sizing: monetary magnitude to square side length.

/// Returns the square side length for a transaction of the given value.
///
/// The value is in smallest-denomination integer units (satoshis). Values
/// spanning many orders of magnitude collapse into a small set of size
/// classes: zero maps to 1, everything else to
/// `max(1, ceil(log10(value)) - 5)`.
///
/// The ceiling log is computed with exact integer arithmetic (the smallest
/// `k` with `10^k >= value`), so boundary values like exact powers of ten
/// never depend on float rounding.
pub fn size_class(value: u64) -> usize {
    if value == 0 {
        return 1;
    }

    let mut k: usize = 0;
    let mut pow: u128 = 1;
    while pow < u128::from(value) {
        pow *= 10;
        k += 1;
    }

    k.saturating_sub(5).max(1)
}
