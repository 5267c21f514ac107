use crate::Error;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockEstimate {
    /// The number of samples which went into the blocks.  Any remainder
    /// at the end of the series is not counted.
    pub count: usize,
    pub block_size: usize,
    pub blocks: usize,
    pub mean: f64,
    pub error: f64,
}

/// Estimate the mean and its error by blocking.
///
/// The series is cut into `N / block_size` consecutive blocks of exactly
/// `block_size` samples (if the division is not even, the rest is dropped).
/// The block means are then treated as independent measurements:
///
///   σ = √( Σ (b_i - <b>)² / (M(M-1)) )
///
/// This only gives a sensible error if `block_size` is well beyond the
/// correlation length of the series.
pub fn blocking(xs: &[f64], block_size: usize) -> Result<BlockEstimate, Error> {
    if block_size == 0 {
        return Err(Error::ZeroBlockSize);
    }
    let blocks = xs.len() / block_size;
    if blocks < 2 {
        return Err(Error::NotEnoughBlocks { blocks });
    }

    let means = xs
        .chunks_exact(block_size)
        .map(|block| block.iter().sum::<f64>() / block_size as f64)
        .collect::<Vec<f64>>();
    let m = blocks as f64;
    let mean = means.iter().sum::<f64>() / m;
    let ss = means.iter().map(|b| (b - mean) * (b - mean)).sum::<f64>();

    Ok(BlockEstimate {
        count: blocks * block_size,
        block_size,
        blocks,
        mean,
        error: (ss / (m * (m - 1.))).sqrt(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naive;
    use approx::*;

    #[test]
    fn even_blocks() {
        let est = blocking(&[1., 2., 3., 4., 5., 6., 7., 8.], 2).unwrap();
        assert_eq!(est.blocks, 4);
        assert_eq!(est.count, 8);
        assert_eq!(est.mean, 4.5);
        // blocks are [1.5, 3.5, 5.5, 7.5]
        assert_relative_eq!(est.error, (20_f64 / 12.).sqrt());
        assert_relative_eq!(est.error, 1.2910, epsilon = 1e-4);
    }

    #[test]
    fn remainder_is_dropped() {
        let xs = [1., 2., 3., 4., 5., 6., 7., 8., 1000.];
        assert_eq!(blocking(&xs, 2), blocking(&xs[..8], 2));
        let est = blocking(&xs, 4).unwrap();
        assert_eq!(est.blocks, 2);
        assert_eq!(est.count, 8);
        assert_eq!(est.mean, 4.5);
        assert_eq!(est.error, 2.);
    }

    #[test]
    fn unit_blocks_are_naive() {
        let xs = [0.5, 2.25, -1., 3., 4.5, 0.];
        let blocked = blocking(&xs, 1).unwrap();
        let naive = naive(&xs).unwrap();
        assert_relative_eq!(blocked.mean, naive.mean);
        assert_relative_eq!(blocked.error, naive.error, max_relative = 1e-12);
    }

    #[test]
    fn single_block() {
        let xs = [1., 2., 3., 4., 5.];
        assert_eq!(
            blocking(&xs, 5),
            Err(Error::NotEnoughBlocks { blocks: 1 })
        );
        assert_eq!(
            blocking(&xs, 6),
            Err(Error::NotEnoughBlocks { blocks: 0 })
        );
        assert_eq!(blocking(&xs, 0), Err(Error::ZeroBlockSize));
    }
}
