//! CSV loading for dense feature matrices
//!
//! Two variants:
//! - labeled: the last column is the {0,1} label
//! - unlabeled: every column is a feature (prediction inputs)
//!
//! Blank lines and lines starting with `#` are skipped.

use crate::core::{DenseMatrix, Result, SvmError};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load a labeled dataset: features in all but the last column
pub fn load_labeled<P: AsRef<Path>>(path: P) -> Result<(DenseMatrix, Vec<f64>)> {
    let file = File::open(path).map_err(SvmError::IoError)?;
    labeled_from_reader(BufReader::new(file))
}

/// Load an unlabeled feature matrix: every column is a feature
pub fn load_unlabeled<P: AsRef<Path>>(path: P) -> Result<DenseMatrix> {
    let file = File::open(path).map_err(SvmError::IoError)?;
    unlabeled_from_reader(BufReader::new(file))
}

/// Parse a labeled dataset from any buffered reader
pub fn labeled_from_reader<R: BufRead>(reader: R) -> Result<(DenseMatrix, Vec<f64>)> {
    let rows = parse_rows(reader)?;
    let mut features = Vec::with_capacity(rows.len());
    let mut labels = Vec::with_capacity(rows.len());

    for mut row in rows {
        if row.len() < 2 {
            return Err(SvmError::ParseError(
                "labeled rows need at least one feature and a label".to_string(),
            ));
        }
        let label = row[row.len() - 1];
        if label != 0.0 && label != 1.0 {
            return Err(SvmError::InvalidLabel(label));
        }
        row.truncate(row.len() - 1);
        features.push(row);
        labels.push(label);
    }

    Ok((DenseMatrix::from_rows(&features)?, labels))
}

/// Parse an unlabeled feature matrix from any buffered reader
pub fn unlabeled_from_reader<R: BufRead>(reader: R) -> Result<DenseMatrix> {
    let rows = parse_rows(reader)?;
    DenseMatrix::from_rows(&rows)
}

fn parse_rows<R: BufRead>(reader: R) -> Result<Vec<Vec<f64>>> {
    let mut rows = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(SvmError::IoError)?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let row = line
            .split(',')
            .map(|field| {
                let field = field.trim();
                field
                    .parse::<f64>()
                    .map_err(|_| SvmError::ParseError(format!("invalid number '{}'", field)))
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }
    if rows.is_empty() {
        return Err(SvmError::InvalidInput("empty dataset".to_string()));
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_labeled_parsing() {
        let input = "# training data\n1.0, 2.0, 1\n-1.0, -2.0, 0\n\n0.5, 0.5, 1\n";
        let (x, y) = labeled_from_reader(Cursor::new(input)).unwrap();

        assert_eq!(x.rows(), 3);
        assert_eq!(x.cols(), 2);
        assert_eq!(x.row(0), &[1.0, 2.0]);
        assert_eq!(y, vec![1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_unlabeled_parsing() {
        let input = "1.0, 2.0, 3.0\n4.0, 5.0, 6.0\n";
        let x = unlabeled_from_reader(Cursor::new(input)).unwrap();

        assert_eq!(x.rows(), 2);
        assert_eq!(x.cols(), 3);
        assert_eq!(x.row(1), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_labeled_rejects_non_binary_label() {
        let input = "1.0, 2.0, 5\n";
        let result = labeled_from_reader(Cursor::new(input));
        assert!(matches!(result, Err(SvmError::InvalidLabel(v)) if v == 5.0));
    }

    #[test]
    fn test_bad_number_is_parse_error() {
        let input = "1.0, abc, 1\n";
        let result = labeled_from_reader(Cursor::new(input));
        assert!(matches!(result, Err(SvmError::ParseError(_))));
    }

    #[test]
    fn test_empty_input() {
        let result = labeled_from_reader(Cursor::new("# only comments\n"));
        assert!(matches!(result, Err(SvmError::InvalidInput(_))));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let input = "1.0, 2.0, 1\n1.0, 0\n";
        let result = labeled_from_reader(Cursor::new(input));
        assert!(matches!(result, Err(SvmError::InvalidInput(_))));
    }

    #[test]
    fn test_labeled_needs_feature_column() {
        let input = "1\n0\n";
        let result = labeled_from_reader(Cursor::new(input));
        assert!(matches!(result, Err(SvmError::ParseError(_))));
    }
}
