//! Binomial coefficients over the 90-ball population.
//!
//! Two flavours are provided. [`combinations`] uses the running-product
//! form and is cheap for the moderate `(n, k)` pairs the chart needs.
//! [`log_combinations`] works in log space off a precomputed log-factorial
//! table, so ratios of huge coefficients (e.g. `C(90, 45)`) stay finite
//! until the caller exponentiates.

use once_cell::sync::Lazy;

use crate::odds_engine::models::TOTAL_BALLS;

/// `ln(i!)` for `i` in `0..=90`. Built once, read-only afterwards.
static LOG_FACTORIALS: Lazy<[f64; TOTAL_BALLS as usize + 1]> = Lazy::new(|| {
    let mut table = [0.0f64; TOTAL_BALLS as usize + 1];
    for i in 1..table.len() {
        table[i] = table[i - 1] + (i as f64).ln();
    }
    table
});

/// `C(n, k)` as a float via the multiplicative formula.
///
/// Returns 0 when `k < 0` or `k > n`, and exactly 1 when `k` is `0` or `n`.
pub fn combinations(n: i64, k: i64) -> f64 {
    if k < 0 || k > n {
        return 0.0;
    }
    if k == 0 || k == n {
        return 1.0;
    }
    let k = k.min(n - k);
    let mut result = 1.0f64;
    for i in 1..=k {
        result = result * (n - k + i) as f64 / i as f64;
    }
    result
}

/// `ln(n!)`. Served from the table inside the ball population, summed
/// directly outside it.
pub fn log_factorial(n: usize) -> f64 {
    let table = &*LOG_FACTORIALS;
    match table.get(n) {
        Some(&v) => v,
        None => table[table.len() - 1] + ((table.len())..=n).map(|i| (i as f64).ln()).sum::<f64>(),
    }
}

/// `ln C(n, k)`; `-inf` stands for `ln 0` when `k` is out of range.
pub fn log_combinations(n: i64, k: i64) -> f64 {
    if k < 0 || k > n {
        return f64::NEG_INFINITY;
    }
    log_factorial(n as usize) - log_factorial(k as usize) - log_factorial((n - k) as usize)
}
