use crate::analyze::{Analysis, Mode, Outcome};
use crate::column::Column;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Format {
    /// Whitespace-separated, one line per column (or per lag)
    Pretty,
    Csv,
    /// A single JSON document on one line
    Json,
}
impl FromStr for Format {
    type Err = String;
    fn from_str(x: &str) -> Result<Format, String> {
        match x {
            "pretty" => Ok(Format::Pretty),
            "csv" => Ok(Format::Csv),
            "json" => Ok(Format::Json),
            _ => Err(format!(
                "Unknown format \"{}\" (expected pretty, csv or json)",
                x
            )),
        }
    }
}

#[derive(Serialize)]
struct EstimateRow {
    column: Column,
    count: usize,
    mean: f64,
    error: f64,
    tau_int: Option<f64>,
    window: Option<usize>,
    resolved: Option<bool>,
}

#[derive(Serialize)]
struct BlocksRow {
    column: Column,
    count: usize,
    blocks: usize,
    block_size: usize,
    mean: f64,
    error: f64,
}

#[derive(Serialize)]
struct AcfRow {
    column: Column,
    lag: usize,
    autocorrelation: f64,
}

#[derive(Serialize)]
struct AcfColumn<'a> {
    column: Column,
    /// ρ(t), indexed by t
    autocorrelation: &'a [f64],
}

#[derive(Serialize)]
#[serde(untagged)]
enum Row<'a> {
    Estimate(EstimateRow),
    Blocks(BlocksRow),
    Acf(AcfColumn<'a>),
}

impl<'a> From<&'a Analysis> for Row<'a> {
    fn from(x: &'a Analysis) -> Row<'a> {
        let column = x.column;
        match &x.outcome {
            Outcome::Estimate(e) => Row::Estimate(EstimateRow {
                column,
                count: e.count,
                mean: e.mean,
                error: e.error,
                tau_int: e.tau_int.map(|t| t.value),
                window: e.tau_int.map(|t| t.window),
                resolved: e.tau_int.map(|t| t.resolved),
            }),
            Outcome::Blocks(b) => Row::Blocks(BlocksRow {
                column,
                count: b.count,
                blocks: b.blocks,
                block_size: b.block_size,
                mean: b.mean,
                error: b.error,
            }),
            Outcome::Acf(rhos) => Row::Acf(AcfColumn {
                column,
                autocorrelation: rhos,
            }),
        }
    }
}

/// Write the results to `out`.  Informational headers which aren't part of
/// the data go to `diag`.
pub fn write(
    out: impl Write,
    diag: impl Write,
    mode: Mode,
    results: &[Analysis],
    format: Format,
) -> Result<()> {
    match format {
        Format::Pretty => write_pretty(out, diag, mode, results),
        Format::Csv => write_csv(out, results),
        Format::Json => write_json(out, results),
    }
}

fn write_pretty(
    mut out: impl Write,
    mut diag: impl Write,
    mode: Mode,
    results: &[Analysis],
) -> Result<()> {
    match mode {
        Mode::Autocorrelated => writeln!(out, " col - average - sigma - tau_int")?,
        Mode::Naive | Mode::Blocking(_) => writeln!(out, " col - average - sigma")?,
        Mode::Acf(_) => writeln!(diag, "lag -- autocorrelation")?,
    }
    for (i, x) in results.iter().enumerate() {
        match &x.outcome {
            Outcome::Estimate(e) => {
                write!(out, " {}  {}  {}", x.column, e.mean, e.error)?;
                if let Some(tau) = e.tau_int {
                    write!(out, "  {}", tau.value)?;
                }
                writeln!(out)?;
            }
            Outcome::Blocks(b) => writeln!(out, " {}  {}  {}", x.column, b.mean, b.error)?,
            Outcome::Acf(rhos) => {
                // A blank line between columns, so each one is its own
                // data block
                if i > 0 {
                    writeln!(out)?;
                }
                for (lag, rho) in rhos.iter().enumerate() {
                    writeln!(out, "{} {}", lag, rho)?;
                }
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn write_csv(out: impl Write, results: &[Analysis]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for x in results {
        match Row::from(x) {
            Row::Estimate(row) => wtr.serialize(row)?,
            Row::Blocks(row) => wtr.serialize(row)?,
            Row::Acf(col) => {
                for (lag, &rho) in col.autocorrelation.iter().enumerate() {
                    wtr.serialize(AcfRow {
                        column: col.column,
                        lag,
                        autocorrelation: rho,
                    })?;
                }
            }
        }
    }
    wtr.flush()?;
    Ok(())
}

fn write_json(mut out: impl Write, results: &[Analysis]) -> Result<()> {
    let rows = results.iter().map(Row::from).collect::<Vec<_>>();
    serde_json::to_writer(&mut out, &rows)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
