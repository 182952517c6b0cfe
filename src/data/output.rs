//! Prediction output writing

use crate::core::{Prediction, Result, SvmError};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write predicted labels to a file, one integer per line
pub fn write_labels<P: AsRef<Path>>(path: P, predictions: &[Prediction]) -> Result<()> {
    let file = File::create(path).map_err(SvmError::IoError)?;
    let mut writer = BufWriter::new(file);
    write_labels_to(&mut writer, predictions)
}

/// Write predicted labels to any sink, one integer per line
pub fn write_labels_to<W: Write>(writer: &mut W, predictions: &[Prediction]) -> Result<()> {
    for prediction in predictions {
        writeln!(writer, "{}", prediction.label as i64).map_err(SvmError::IoError)?;
    }
    Ok(())
}
