use crate::stats::{autocorrelation, Moments};

/// The normalised autocorrelation function ρ(t) of `xs`, for lags
/// `0..=max_lag`, but never reaching N/2.
///
/// The mean and variance are computed up-front over the whole series;
/// each ρ(t) is computed when the iterator gets to it.  ρ(0) is 1 (up to
/// rounding) unless the series is constant, in which case every ρ(t) is
/// 0.
pub fn autocorrelation_function(xs: &[f64], max_lag: usize) -> Autocorrelation<'_> {
    Autocorrelation {
        xs,
        var: Moments::of(xs).var,
        lag: 0,
        end: max_lag.saturating_add(1).min(xs.len() / 2),
    }
}

/// An iterator over `(lag, ρ(lag))`, created by
/// [`autocorrelation_function`].
pub struct Autocorrelation<'a> {
    xs: &'a [f64],
    var: f64,
    lag: usize,
    end: usize,
}

impl<'a> Iterator for Autocorrelation<'a> {
    type Item = (usize, f64);
    fn next(&mut self) -> Option<(usize, f64)> {
        if self.lag >= self.end {
            return None;
        }
        let lag = self.lag;
        self.lag += 1;
        Some((lag, autocorrelation(self.xs, lag, self.var)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end.saturating_sub(self.lag);
        (n, Some(n))
    }
}

impl<'a> ExactSizeIterator for Autocorrelation<'a> {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::*;

    #[test]
    fn starts_at_one() {
        let xs = [0.1, 2.3, -0.7, 1.1, 1.9, 0.4, -2.2, 0.8, 3.1, -0.5];
        let mut acf = autocorrelation_function(&xs, 3);
        let (lag, rho) = acf.next().unwrap();
        assert_eq!(lag, 0);
        assert_relative_eq!(rho, 1., epsilon = 1e-9);
        assert_eq!(acf.map(|(lag, _)| lag).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn stops_below_half() {
        let xs = (0..10).map(f64::from).collect::<Vec<f64>>();
        let acf = autocorrelation_function(&xs, 100);
        assert_eq!(acf.len(), 5);
        assert_eq!(acf.last().map(|(lag, _)| lag), Some(4));

        assert_eq!(autocorrelation_function(&xs, 0).count(), 1);
        assert_eq!(autocorrelation_function(&[1.], 5).count(), 0);
        assert_eq!(autocorrelation_function(&[], 5).count(), 0);
    }

    #[test]
    fn matches_direct_computation() {
        let xs = [1., -1., 1., -1., 1., -1., 1., -1.];
        let acf = autocorrelation_function(&xs, 2).collect::<Vec<_>>();
        assert_eq!(acf.len(), 3);
        assert_relative_eq!(acf[1].1, -1. + 1. / 49., epsilon = 1e-12);
        assert_relative_eq!(acf[2].1, 1., epsilon = 1e-12);
    }

    #[test]
    fn constant_series() {
        let xs = [3.; 20];
        assert!(autocorrelation_function(&xs, 5).all(|(_, rho)| rho == 0.));
    }
}
