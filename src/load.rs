use crate::column::Column;
use log::*;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// Which rows of the file to use.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Window {
    /// Rows to throw away from the start of the file
    pub skip: usize,
    /// The maximum number of rows to keep after skipping; 0 means all of
    /// them
    pub limit: usize,
}

/// The measurements of one column, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub column: Column,
    pub values: Box<[f64]>,
}

#[derive(Debug)]
pub enum LoadError {
    NoColumns,
    Unavailable { path: PathBuf, source: io::Error },
    /// Nothing left after skipping
    NoData { rows: usize, skip: usize },
    /// A row is missing one of the fields up to the highest selected
    /// column, or one of them isn't a number.  `line` counts from 1.
    MalformedRow { line: usize, expected: usize },
    Io(io::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadError::NoColumns => f.write_str("At least one column must be selected"),
            LoadError::Unavailable { path, source } => {
                write!(f, "Could not open file {}: {}", path.display(), source)
            }
            LoadError::NoData { rows, skip } => write!(
                f,
                "No data to be read: the file has {} rows and {} are skipped",
                rows, skip
            ),
            LoadError::MalformedRow { line, expected } => {
                write!(f, "Line {}: not {} columns", line, expected)
            }
            LoadError::Io(e) => write!(f, "{}", e),
        }
    }
}
impl std::error::Error for LoadError {}
impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> LoadError {
        LoadError::Io(e)
    }
}

/// Load from a file, or from stdin if `path` is "-".
///
/// Stdin is read into memory up-front, since we need to go over the data
/// twice.
pub fn load_path(
    path: &Path,
    columns: &[Column],
    window: Window,
) -> Result<Vec<Series>, LoadError> {
    if columns.is_empty() {
        return Err(LoadError::NoColumns);
    }
    if path == Path::new("-") {
        let mut buf = vec![];
        io::stdin().lock().read_to_end(&mut buf)?;
        load(Cursor::new(buf), columns, window)
    } else {
        let file = File::open(path).map_err(|source| LoadError::Unavailable {
            path: path.to_owned(),
            source,
        })?;
        load(BufReader::new(file), columns, window)
    }
}

/// Read the given columns out of a whitespace-separated table.
///
/// The first pass counts the rows inside `window`, the second pass parses
/// them.  Every series in the output has the same length.  Rows outside
/// the window are never parsed, but each row inside it must have at
/// least as many numeric fields as the highest selected column.
pub fn load<R: BufRead + Seek>(
    mut src: R,
    columns: &[Column],
    window: Window,
) -> Result<Vec<Series>, LoadError> {
    let max_col = columns.iter().copied().max().ok_or(LoadError::NoColumns)?;
    let mut buf = Vec::<u8>::with_capacity(256);

    let end = if window.limit == 0 {
        usize::MAX
    } else {
        window.skip.saturating_add(window.limit)
    };
    let mut rows = 0;
    while rows < end {
        buf.clear();
        if src.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        rows += 1;
    }
    let count = rows.saturating_sub(window.skip);
    if count == 0 {
        return Err(LoadError::NoData {
            rows,
            skip: window.skip,
        });
    }
    info!("Reading in {} columns, {} measurements", columns.len(), count);

    src.seek(SeekFrom::Start(0))?;
    for _ in 0..window.skip {
        buf.clear();
        src.read_until(b'\n', &mut buf)?;
    }

    let mut fields = vec![0.; max_col.get()];
    let mut data = columns
        .iter()
        .map(|_| Vec::with_capacity(count))
        .collect::<Vec<Vec<f64>>>();
    for line in window.skip + 1..=window.skip + count {
        buf.clear();
        src.read_until(b'\n', &mut buf)?;
        parse_row(&buf, &mut fields).ok_or(LoadError::MalformedRow {
            line,
            expected: max_col.get(),
        })?;
        for (col, out) in columns.iter().zip(&mut data) {
            out.push(fields[col.index()]);
        }
    }

    Ok(columns
        .iter()
        .zip(data)
        .map(|(&column, values)| Series {
            column,
            values: values.into_boxed_slice(),
        })
        .collect())
}

/// Fill `fields` with the leading fields of `line`.  Anything past
/// `fields.len()` is ignored.
fn parse_row(line: &[u8], fields: &mut [f64]) -> Option<()> {
    let mut tokens = line
        .split(|b| b.is_ascii_whitespace())
        .filter(|x| !x.is_empty());
    for field in fields.iter_mut() {
        *field = std::str::from_utf8(tokens.next()?).ok()?.parse().ok()?;
    }
    Some(())
}
