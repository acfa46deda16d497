//! Exact binomial null distribution, used to put the simulated tail fraction
//! next to the theoretical p-value.

use crate::config::validate_probability;
use crate::error::{PValueError, PvResult};

fn ln_choose(n: u32, k: u32) -> f64 {
    let k = k.min(n - k);
    (1..=k)
        .map(|i| ((n - k + i) as f64).ln() - (i as f64).ln())
        .sum()
}

/// P(X = k) for X ~ binomial(n, p).
pub fn binomial_pmf(n: u32, k: u32, p: f64) -> PvResult<f64> {
    validate_probability(p)?;
    if k > n {
        return Ok(0.0);
    }
    if p == 0.0 {
        return Ok(if k == 0 { 1.0 } else { 0.0 });
    }
    if p == 1.0 {
        return Ok(if k == n { 1.0 } else { 0.0 });
    }
    let ln = ln_choose(n, k) + k as f64 * p.ln() + (n - k) as f64 * (1.0 - p).ln();
    Ok(ln.exp())
}

/// P(X >= k): the chance that pure luck scores at least `k`.
pub fn upper_tail(n: u32, k: u32, p: f64) -> PvResult<f64> {
    if k > n {
        validate_probability(p)?;
        return Ok(0.0);
    }
    let mut total = 0.0;
    for i in k..=n {
        total += binomial_pmf(n, i, p)?;
    }
    Ok(total.min(1.0))
}

/// Simulated counterpart of [`upper_tail`]: share of `count` outcomes in the tail.
pub fn tail_fraction(tail: usize, count: usize) -> PvResult<f64> {
    if tail > count {
        return Err(PValueError::InvalidArgument(format!(
            "tail size {} exceeds sample size {}",
            tail, count
        )));
    }
    if count == 0 {
        return Ok(0.0);
    }
    Ok(tail as f64 / count as f64)
}
