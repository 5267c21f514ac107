use crate::column::Column;
use crate::load::Series;
use anyhow::{Context, Result};
use log::*;
use tau_int::{BlockEstimate, Estimate};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    /// Mean, error and τ_int
    Autocorrelated,
    /// Mean and the uncorrected error
    Naive,
    /// Mean and error from blocks of the given length
    Blocking(usize),
    /// The autocorrelation function up to the given lag
    Acf(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub column: Column,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Estimate(Estimate),
    Blocks(BlockEstimate),
    /// ρ(t), indexed by t
    Acf(Vec<f64>),
}

/// Run the same analysis on every series.
///
/// Either every column succeeds or nothing is returned: if any column
/// fails the whole run does.  Unresolved autocorrelation times are only
/// worth a warning.
pub fn analyze(series: &[Series], mode: Mode) -> Result<Vec<Analysis>> {
    series
        .iter()
        .map(|s| -> Result<Analysis> {
            let outcome = analyze_one(&s.values, mode)
                .with_context(|| format!("Column {}", s.column))?;
            if let Outcome::Estimate(Estimate {
                count,
                tau_int: Some(tau),
                ..
            }) = outcome
            {
                debug!(
                    "Column {}: summed autocorrelations up to lag {}",
                    s.column, tau.window
                );
                if !tau.resolved {
                    warn!(
                        "Column {}: correlation time not resolved within N/2 = {} measurements; \
                         tau_int = {} and the error are unreliable",
                        s.column,
                        count / 2,
                        tau.value
                    );
                }
            }
            Ok(Analysis {
                column: s.column,
                outcome,
            })
        })
        .collect()
}

fn analyze_one(xs: &[f64], mode: Mode) -> Result<Outcome, tau_int::Error> {
    Ok(match mode {
        Mode::Autocorrelated => Outcome::Estimate(tau_int::estimate(xs, true)?),
        Mode::Naive => Outcome::Estimate(tau_int::estimate(xs, false)?),
        Mode::Blocking(size) => Outcome::Blocks(tau_int::blocking(xs, size)?),
        Mode::Acf(max_lag) => Outcome::Acf(
            tau_int::autocorrelation_function(xs, max_lag)
                .map(|(_, rho)| rho)
                .collect(),
        ),
    })
}
