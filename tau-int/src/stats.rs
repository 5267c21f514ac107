/// The first two moments of a series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Moments {
    /// The number of samples
    pub count: usize,
    /// The arithmetic mean
    pub mean: f64,
    /// The biased variance, ie. the mean squared distance from `mean`
    /// (divided by N, not N-1).
    pub var: f64,
}

impl Moments {
    /// Two passes over `xs`: one for the mean, one for the variance.
    ///
    /// The variance of an empty slice is NaN.
    pub fn of(xs: &[f64]) -> Moments {
        let n = xs.len() as f64;
        let mean = xs.iter().sum::<f64>() / n;
        let var = xs.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n;
        Moments {
            count: xs.len(),
            mean,
            var,
        }
    }
}

/// The autocovariance at `lag`, normalised by `var`.
///
///   ρ(t) = ( <x_i x_{i+t}> - <x_i> <x_{i+t}> ) / var
///
/// where the averages run over the N-t overlapping pairs, so each half of
/// the pair gets its own local mean.  A constant series has no
/// correlations to speak of: if `var` is zero this returns 0 instead of
/// 0/0.
///
/// Panics if `lag >= xs.len()`.
pub(crate) fn autocorrelation(xs: &[f64], lag: usize, var: f64) -> f64 {
    if var == 0. {
        return 0.;
    }
    let nc = xs.len() - lag;
    let (mut prod, mut head, mut tail) = (0., 0., 0.);
    for (x, y) in xs[..nc].iter().zip(&xs[lag..]) {
        prod += x * y;
        head += x;
        tail += y;
    }
    let nc = nc as f64;
    (prod / nc - (head / nc) * (tail / nc)) / var
}
