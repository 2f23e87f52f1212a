//! Log-space combinatorics and binomial distribution helpers.
//!
//! Draw budgets run to several thousand, so coefficients are never formed
//! directly: factorials go through a Stirling series and the CDF walks the
//! PMF recurrence in log space.

use super::constants::{LOG_Q_FLOOR, NEGLIGIBLE_MASS};
use std::f64::consts::PI;

/// `ln(n!)` via Stirling's series on `Γ(n + 1)` with two correction terms.
pub fn log_factorial(n: u32) -> f64 {
    if n < 2 {
        return 0.0;
    }
    let x = n as f64 + 1.0;
    (x - 0.5) * x.ln() - x + 0.5 * (2.0 * PI).ln() + 1.0 / (12.0 * x) - 1.0 / (360.0 * x.powi(3))
}

/// `ln C(n, k)`, `-inf` when `k` is outside `[0, n]`.
pub fn log_choose(n: u32, k: i64) -> f64 {
    if k < 0 || k > n as i64 {
        return f64::NEG_INFINITY;
    }
    let k = k as u32;
    log_factorial(n) - log_factorial(k) - log_factorial(n - k)
}

/// `Pr[X = k]` for `X ~ Binomial(n, p)`.
pub fn binom_pmf(k: i64, n: u32, p: f64) -> f64 {
    if p <= 0.0 {
        return if k == 0 { 1.0 } else { 0.0 };
    }
    if p >= 1.0 {
        return if k == n as i64 { 1.0 } else { 0.0 };
    }
    if k < 0 || k > n as i64 {
        return 0.0;
    }
    let kf = k as f64;
    let logp = log_choose(n, k) + kf * p.ln() + (n as f64 - kf) * (1.0 - p).ln();
    logp.exp()
}

/// `Pr[X <= k]` for `X ~ Binomial(n, p)`.
///
/// Sums `P(X=i) = P(X=i-1) * (n-i+1)/i * p/(1-p)` from `i = 0`. The walk stops
/// early once it is past the mode and the next term is below
/// [`NEGLIGIBLE_MASS`]; the remaining terms only shrink from there.
pub fn binom_cdf(k: i64, n: u32, p: f64) -> f64 {
    if p <= 0.0 {
        return if k >= 0 { 1.0 } else { 0.0 };
    }
    if p >= 1.0 {
        return if k >= n as i64 { 1.0 } else { 0.0 };
    }
    if k < 0 {
        return 0.0;
    }
    if k >= n as i64 {
        return 1.0;
    }

    let q = 1.0 - p;
    let nf = n as f64;
    let mode = nf * p;
    let log_odds = (p / q).ln();

    // Log space keeps (1-p)^n from underflowing for large n.
    let mut log_pmf = nf * q.max(LOG_Q_FLOOR).ln();
    let mut sum = log_pmf.exp();
    for i in 1..=k {
        let fi = i as f64;
        log_pmf += ((nf - fi + 1.0) / fi).ln() + log_odds;
        let pmf = log_pmf.exp();
        sum += pmf;
        if fi > mode && pmf < NEGLIGIBLE_MASS {
            break;
        }
    }
    sum.clamp(0.0, 1.0)
}

/// `Pr[X >= m]`, the chance of collecting at least `m` successes in `n` draws.
pub fn binom_tail(m: u32, n: u32, p: f64) -> f64 {
    if m == 0 {
        return 1.0;
    }
    (1.0 - binom_cdf(m as i64 - 1, n, p)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exact_log_factorial(n: u32) -> f64 {
        (2..=n).map(|i| (i as f64).ln()).sum()
    }

    #[test]
    fn test_log_factorial_matches_exact() {
        for n in [0, 1, 2, 3, 5, 10, 50, 200, 3000] {
            let diff = (log_factorial(n) - exact_log_factorial(n)).abs();
            assert!(diff < 1e-5, "n={n}: diff {diff}");
        }
    }

    #[test]
    fn test_log_choose_out_of_range() {
        assert_eq!(log_choose(5, -1), f64::NEG_INFINITY);
        assert_eq!(log_choose(5, 6), f64::NEG_INFINITY);
        assert!((log_choose(5, 2).exp() - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_pmf_edge_probabilities() {
        assert_eq!(binom_pmf(0, 10, 0.0), 1.0);
        assert_eq!(binom_pmf(1, 10, 0.0), 0.0);
        assert_eq!(binom_pmf(10, 10, 1.0), 1.0);
        assert_eq!(binom_pmf(9, 10, 1.0), 0.0);
        assert_eq!(binom_pmf(11, 10, 0.5), 0.0);
    }

    #[test]
    fn test_pmf_sums_to_one() {
        let total: f64 = (0..=40).map(|k| binom_pmf(k, 40, 0.3)).sum();
        assert!((total - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_cdf_edge_cases() {
        assert_eq!(binom_cdf(0, 100, 0.0), 1.0);
        assert_eq!(binom_cdf(-1, 100, 0.0), 0.0);
        assert_eq!(binom_cdf(99, 100, 1.0), 0.0);
        assert_eq!(binom_cdf(100, 100, 1.0), 1.0);
        assert_eq!(binom_cdf(-1, 100, 0.5), 0.0);
        assert_eq!(binom_cdf(100, 100, 0.5), 1.0);
    }

    #[test]
    fn test_cdf_matches_pmf_sum() {
        let (n, p) = (60, 0.07);
        for k in 0..10 {
            let direct: f64 = (0..=k).map(|i| binom_pmf(i, n, p)).sum();
            let cdf = binom_cdf(k, n, p);
            assert!((cdf - direct).abs() < 1e-5, "k={k}: {cdf} vs {direct}");
        }
    }

    #[test]
    fn test_cdf_survives_large_n() {
        // Mean ~72.5: (1-p)^n alone is ~1e-32, the walk must still find the bulk.
        let n = 5000;
        let p = 0.0145;
        let below_mean = binom_cdf(60, n, p);
        let above_mean = binom_cdf(85, n, p);
        assert!(below_mean > 0.05 && below_mean < 0.5, "got {below_mean}");
        assert!(above_mean > 0.5 && above_mean < 0.98, "got {above_mean}");
    }

    #[test]
    fn test_tail_zero_needed_is_certain() {
        assert_eq!(binom_tail(0, 0, 0.0), 1.0);
        assert_eq!(binom_tail(0, 500, 0.01), 1.0);
        assert_eq!(binom_tail(1, 500, 0.0), 0.0);
    }

    #[test]
    fn test_tail_single_success() {
        let tail = binom_tail(1, 100, 0.01);
        let expected = 1.0 - 0.99f64.powi(100);
        assert!((tail - expected).abs() < 1e-12);
    }
}
