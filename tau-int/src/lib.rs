/*! Error estimates for the mean of a correlated time series.

Consecutive samples from a Markov chain Monte Carlo run are not
independent, so the naive standard error `σ/√(N-1)` underestimates the
true uncertainty of the mean.  This crate offers three ways of dealing
with that:

* [`estimate`] measures the integrated autocorrelation time τ_int and
  inflates the naive error by `√(2τ_int)`;
* [`blocking`] averages over consecutive blocks and treats the block
  means as independent measurements;
* [`autocorrelation_function`] reports the normalised autocorrelation
  ρ(t) lag by lag, for when you want to look at it yourself.

## Example

```
# use tau_int::*;
let xs = [1., 2., 3., 4., 5.];
let naive = estimate(&xs, false).unwrap();
assert_eq!(naive.mean, 3.);
assert_eq!(format!("{:.4}", naive.error), "0.7071");
assert!(naive.tau_int.is_none());

let xs = [1., 2., 3., 4., 5., 6., 7., 8.];
let blocked = blocking(&xs, 2).unwrap();
assert_eq!(blocked.blocks, 4);
assert_eq!(blocked.mean, 4.5);
assert_eq!(format!("{:.4}", blocked.error), "1.2910");
```

*/

mod acf;
mod blocking;
mod estimate;
mod stats;

pub use acf::*;
pub use blocking::*;
pub use estimate::*;
pub use stats::Moments;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The series is too short for the requested analysis
    NotEnoughData { needed: usize, got: usize },
    /// Blocking produced fewer than two blocks
    NotEnoughBlocks { blocks: usize },
    ZeroBlockSize,
}

use std::fmt;
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NotEnoughData { needed, got } => write!(
                f,
                "Need at least {} measurements, but only {} are available",
                needed, got
            ),
            Error::NotEnoughBlocks { blocks } => write!(
                f,
                "Blocking needs at least 2 blocks, but the data only fills {}",
                blocks
            ),
            Error::ZeroBlockSize => f.write_str("Block length must be positive"),
        }
    }
}
impl std::error::Error for Error {}
