use crate::stats::{autocorrelation, Moments};
use crate::Error;

/// The autocorrelation sum is cut off once the lag reaches `STOP_FACTOR`
/// times the running estimate of τ_int.
pub const STOP_FACTOR: f64 = 6.;

/// The mean of a series together with its standard error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Estimate {
    pub count: usize,
    pub mean: f64,
    pub error: f64,
    /// Only present if the error was corrected for autocorrelations.
    pub tau_int: Option<TauInt>,
}

/// An integrated autocorrelation time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TauInt {
    pub value: f64,
    /// The lag at which the summation stopped.
    pub window: usize,
    /// False if the window ran into N/2 before it became self-consistent.
    /// The estimate is still returned in that case, but the series is too
    /// short to pin τ_int down and neither it nor the error can be trusted.
    pub resolved: bool,
}

/// Estimate the mean of `xs` and its standard error, optionally corrected
/// for autocorrelations.
///
/// See [`naive`] and [`autocorrelated`].
pub fn estimate(xs: &[f64], use_autocorrelation: bool) -> Result<Estimate, Error> {
    if use_autocorrelation {
        autocorrelated(xs)
    } else {
        naive(xs)
    }
}

/// The standard error assuming that the samples are independent:
///
///   σ = √( var / (N-1) )
///
/// where `var` is the biased variance.  Needs at least 2 samples.
pub fn naive(xs: &[f64]) -> Result<Estimate, Error> {
    if xs.len() < 2 {
        return Err(Error::NotEnoughData {
            needed: 2,
            got: xs.len(),
        });
    }
    let m = Moments::of(xs);
    Ok(Estimate {
        count: m.count,
        mean: m.mean,
        error: (m.var / (m.count - 1) as f64).sqrt(),
        tau_int: None,
    })
}

/// The standard error corrected by the integrated autocorrelation time:
///
///   τ_int = 1/2 + Σ_{t=1}^{W-1} ρ(t) (N-t)/N
///   σ     = √( 2 |τ_int| var / (N-1) )
///
/// The window `W` is chosen self-consistently: the sum keeps going while
/// `t < STOP_FACTOR * τ_int` (with τ_int as accumulated so far) and
/// `t < N/2`.  If it's the second condition which stops the sum, the
/// result is flagged as unresolved.
///
/// τ_int can go negative for strongly anti-correlated data, hence the
/// absolute value under the square root.  Needs at least 3 samples.
pub fn autocorrelated(xs: &[f64]) -> Result<Estimate, Error> {
    if xs.len() < 3 {
        return Err(Error::NotEnoughData {
            needed: 3,
            got: xs.len(),
        });
    }
    let m = Moments::of(xs);
    let n = m.count;
    let half = n / 2;

    let mut tau = 0.5;
    let mut lag = 1;
    while (lag as f64) < STOP_FACTOR * tau && lag < half {
        tau += autocorrelation(xs, lag, m.var) * (n - lag) as f64 / n as f64;
        lag += 1;
    }

    Ok(Estimate {
        count: n,
        mean: m.mean,
        error: (2. * tau.abs() * m.var / (n - 1) as f64).sqrt(),
        tau_int: Some(TauInt {
            value: tau,
            window: lag,
            resolved: lag < half,
        }),
    })
}
