use serde::Serialize;
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

/// A 1-based index into the whitespace-separated fields of a row.
#[derive(Debug, PartialEq, Clone, Copy, PartialOrd, Ord, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Column(NonZeroUsize);

impl Column {
    pub fn new(x: usize) -> Option<Column> {
        NonZeroUsize::new(x).map(Column)
    }
    /// The position of this column in a row, counting from zero
    pub fn index(self) -> usize {
        self.0.get() - 1
    }
    pub fn get(self) -> usize {
        self.0.get()
    }
}
impl FromStr for Column {
    type Err = String;
    fn from_str(x: &str) -> Result<Column, String> {
        let n = x
            .trim()
            .parse::<usize>()
            .map_err(|e| format!("Not a valid column \"{}\": {}", x, e))?;
        Column::new(n).ok_or_else(|| format!("Not a valid column {} (the first column is 1)", n))
    }
}
impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A comma-separated list of columns, eg. "3,4"
#[derive(Debug, PartialEq, Clone)]
pub struct Columns(pub Vec<Column>);

impl FromStr for Columns {
    type Err = String;
    fn from_str(x: &str) -> Result<Columns, String> {
        x.split(',')
            .map(Column::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map(Columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_columns() {
        let cols: Columns = "3,4, 1".parse().unwrap();
        assert_eq!(
            cols.0.iter().map(|c| c.get()).collect::<Vec<_>>(),
            vec![3, 4, 1]
        );
        assert_eq!(cols.0[0].index(), 2);
        assert_eq!(cols.0[0].to_string(), "3");
    }

    #[test]
    fn reject_bad_columns() {
        assert!("0".parse::<Columns>().is_err());
        assert!("2,0".parse::<Columns>().is_err());
        assert!("-1".parse::<Columns>().is_err());
        assert!("x".parse::<Columns>().is_err());
        assert!("".parse::<Columns>().is_err());
        assert!("1,,2".parse::<Columns>().is_err());
    }
}
