mod analyze;
mod column;
mod load;
mod report;

use crate::analyze::Mode;
use crate::column::Columns;
use crate::load::Window;
use crate::report::Format;
use anyhow::Result;
use bpaf::Bpaf;
use std::path::PathBuf;

/// Prints the average, error and autocorrelation time of each selected
/// column of FILE.
///
/// Every line of FILE is one measurement; different quantities are in
/// different columns, separated by spaces or tabs.
#[derive(Bpaf, Debug, Clone)]
#[bpaf(options, version)]
struct Options {
    /// Comma-separated list of columns; the first column is 1
    #[bpaf(short('c'), long("columns"), argument("C1,C2,..."))]
    columns: Columns,
    /// Use at most N measurements (0 means all of them)
    #[bpaf(short('n'), long("limit"), argument("N"), fallback(0))]
    limit: usize,
    /// Skip S measurements from the beginning
    #[bpaf(short('s'), long("skip"), argument("S"), fallback(0))]
    skip: usize,
    #[bpaf(external(analysis), optional)]
    analysis: Option<Analysis>,
    /// Output format: pretty, csv or json
    #[bpaf(short('f'), long("format"), argument("FORMAT"), fallback(Format::Pretty))]
    format: Format,
    /// The data file, or "-" for stdin
    #[bpaf(positional("FILE"))]
    file: PathBuf,
}

// Without any of these, errors are corrected by the integrated
// autocorrelation time.
#[derive(Bpaf, Debug, Clone, Copy)]
enum Analysis {
    Blocking {
        /// Block the measurements to block length LEN instead of
        /// measuring autocorrelations
        #[bpaf(short('b'), long("block"), argument("LEN"))]
        block: usize,
    },
    /// Don't calculate autocorrelations, ie. use naive errors
    #[bpaf(short('t'), long("naive"))]
    Naive,
    Acf {
        /// Instead of error analysis, print the autocorrelation function
        /// up to lag LAG
        #[bpaf(short('T'), long("acf"), argument("LAG"))]
        max_lag: usize,
    },
}

impl From<Option<Analysis>> for Mode {
    fn from(x: Option<Analysis>) -> Mode {
        match x {
            None => Mode::Autocorrelated,
            Some(Analysis::Naive) => Mode::Naive,
            Some(Analysis::Blocking { block }) => Mode::Blocking(block),
            Some(Analysis::Acf { max_lag }) => Mode::Acf(max_lag),
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .init();
    let opts = options().run();
    match run(opts) {
        Ok(()) => (),
        Err(e) => {
            // Ignore EPIPE
            if let Some(e) = e.downcast_ref::<std::io::Error>() {
                if e.kind() == std::io::ErrorKind::BrokenPipe {
                    return;
                }
            }
            eprintln!("Error: {:#}", e);
            std::process::exit(1)
        }
    }
}

// load -> analyze every column -> print
//
// Nothing is printed unless every column was analysed successfully.
fn run(opts: Options) -> Result<()> {
    let window = Window {
        skip: opts.skip,
        limit: opts.limit,
    };
    let series = load::load_path(&opts.file, &opts.columns.0, window)?;
    let mode = Mode::from(opts.analysis);
    let results = analyze::analyze(&series, mode)?;

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    report::write(
        std::io::BufWriter::new(stdout.lock()),
        stderr.lock(),
        mode,
        &results,
        opts.format,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Options, String> {
        options()
            .run_inner(args)
            .map_err(|e| e.unwrap_stderr())
    }

    #[test]
    fn defaults() {
        let opts = parse(&["-c", "3,4", "meas"]).unwrap();
        assert_eq!(
            opts.columns.0.iter().map(|c| c.get()).collect::<Vec<_>>(),
            vec![3, 4]
        );
        assert_eq!(opts.limit, 0);
        assert_eq!(opts.skip, 0);
        assert_eq!(opts.format, Format::Pretty);
        assert_eq!(Mode::from(opts.analysis), Mode::Autocorrelated);
        assert_eq!(opts.file, PathBuf::from("meas"));
    }

    #[test]
    fn modes() {
        let mode = |args: &[&str]| Mode::from(parse(args).unwrap().analysis);
        assert_eq!(mode(&["-c", "1", "-b", "500", "f"]), Mode::Blocking(500));
        assert_eq!(mode(&["-c", "1", "-t", "f"]), Mode::Naive);
        assert_eq!(mode(&["-c", "1", "-T", "50", "f"]), Mode::Acf(50));
        assert_eq!(mode(&["-c", "1", "--naive", "f"]), Mode::Naive);
    }

    #[test]
    fn window_and_format() {
        let opts = parse(&["-c", "2", "-s", "2000", "-n", "20000", "-f", "csv", "-"]).unwrap();
        assert_eq!(opts.skip, 2000);
        assert_eq!(opts.limit, 20000);
        assert_eq!(opts.format, Format::Csv);
        assert_eq!(opts.file, PathBuf::from("-"));
    }

    #[test]
    fn usage_errors() {
        // No columns
        assert!(parse(&["meas"]).is_err());
        // Column 0
        assert!(parse(&["-c", "0", "meas"]).is_err());
        // No file
        assert!(parse(&["-c", "1"]).is_err());
        // Blocking and the autocorrelation function are exclusive
        assert!(parse(&["-c", "1", "-b", "10", "-T", "5", "meas"]).is_err());
        assert!(parse(&["-c", "1", "-n", "lots", "meas"]).is_err());
        assert!(parse(&["-c", "1", "-f", "xml", "meas"]).is_err());
    }
}
