//! CSV file reading into text-typed Polars DataFrames.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};

/// Maximum file size for CSV loading (500 MB default).
///
/// The full athlete events file is roughly 40 MB.
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

fn io_error(path: &Path, err: std::io::Error) -> IngestError {
    if err.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| io_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| io_error(path, e))?;

    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read >= 2 {
        // UTF-16 LE BOM
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        // UTF-16 BE BOM
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

/// Validate DataFrame shape after loading.
///
/// Rejects frames with no rows or with a blank column name.
pub fn validate_dataframe_shape(df: &DataFrame, path: &Path) -> Result<()> {
    if df.height() == 0 {
        return Err(IngestError::EmptyDataFrame {
            path: path.to_path_buf(),
        });
    }

    for name in df.get_column_names() {
        if name.trim().is_empty() {
            return Err(IngestError::EmptyColumnName {
                path: path.to_path_buf(),
            });
        }
    }

    Ok(())
}

/// Reads a CSV file with a single header row into a Polars DataFrame.
///
/// Schema inference is disabled, so every column is read as text and typing is
/// left to the caller.
pub fn read_csv_table(path: &Path) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_table_reads_text_columns() {
        let file = create_temp_csv("NOC,region,notes\nUSA,USA,\nGER,Germany,\n");
        let df = read_csv_table(file.path()).unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 3);
        let noc = df.column("NOC").unwrap();
        assert_eq!(noc.dtype(), &DataType::String);
    }

    #[test]
    fn test_numeric_columns_stay_text() {
        let file = create_temp_csv("Year,Age\n1992,24\n1996,NA\n");
        let df = read_csv_table(file.path()).unwrap();

        assert_eq!(df.column("Year").unwrap().dtype(), &DataType::String);
        assert_eq!(df.column("Age").unwrap().dtype(), &DataType::String);
    }

    #[test]
    fn test_missing_file_is_reported() {
        let result = check_file_size(Path::new("/definitely/not/here.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_size_limit() {
        let file = create_temp_csv("A\n1\n");
        assert!(check_file_size_with_limit(file.path(), 1024).is_ok());
        assert!(matches!(
            check_file_size_with_limit(file.path(), 2),
            Err(IngestError::FileTooLarge { .. })
        ));
    }

    #[test]
    fn test_utf16_bom_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xFF, 0xFE, b'A', 0x00]).unwrap();
        assert!(matches!(
            validate_encoding(file.path()),
            Err(IngestError::UnsupportedEncoding { .. })
        ));
    }

    #[test]
    fn test_utf8_bom_accepted() {
        let file = create_temp_csv("\u{feff}A,B\n1,2\n");
        assert!(validate_encoding(file.path()).is_ok());
    }

    #[test]
    fn test_header_only_frame_rejected() {
        let file = create_temp_csv("A,B\n");
        let df = read_csv_table(file.path()).unwrap();
        assert!(matches!(
            validate_dataframe_shape(&df, file.path()),
            Err(IngestError::EmptyDataFrame { .. })
        ));
    }
}
