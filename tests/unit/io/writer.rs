//! Tests for matrix formatting and collision-free output files

#[cfg(test)]
mod tests {
    use fdentropy::FdError;
    use fdentropy::io::writer::{available_path, format_matrix, format_value, write_matrix};
    use ndarray::array;
    use std::fs;
    use tempfile::TempDir;

    // Tests exact ones print without a fraction
    // Verified by printing every value in debug form
    #[test]
    fn test_format_value() {
        assert_eq!(format_value(1.0), "1");
        assert_eq!(format_value(0.875), "0.875");
        assert_eq!(format_value(0.0), "0.0");
    }

    // Tests rows and delimiters
    // Verified by transposing the matrix
    #[test]
    fn test_format_matrix() {
        let matrix = array![[1.0, 0.5], [0.25, 1.0]];

        assert_eq!(format_matrix(&matrix, "\t"), "1\t0.5\n0.25\t1");
    }

    // Tests existing outputs get numbered siblings
    // Verified by numbering after the last dot
    #[test]
    fn test_available_path() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("out.csv");
        assert_eq!(available_path(&path), path);

        fs::write(&path, "").expect("write file");
        assert_eq!(available_path(&path), dir.path().join("out(2).csv"));

        fs::write(dir.path().join("out(2).csv"), "").expect("write file");
        assert_eq!(available_path(&path), dir.path().join("out(3).csv"));
    }

    // Tests numbering goes before the first dot
    // Verified by splitting at the last dot
    #[test]
    fn test_available_path_multiple_dots() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("matrix.result.csv");
        fs::write(&path, "").expect("write file");

        assert_eq!(
            available_path(&path),
            dir.path().join("matrix(2).result.csv")
        );
    }

    // Tests writing creates missing directories
    // Verified by skipping directory creation
    #[test]
    fn test_write_matrix_creates_directories() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("nested").join("deeper").join("out.csv");
        let matrix = array![[1.0, 0.875], [1.0, 1.0]];

        let written = write_matrix(&path, &matrix, ",").expect("writable location");

        assert_eq!(written, path);
        assert_eq!(
            fs::read_to_string(&written).expect("readable output"),
            "1,0.875\n1,1\n"
        );
    }

    // Tests a second write does not overwrite the first
    // Verified by truncating the existing file
    #[test]
    fn test_write_matrix_keeps_existing() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("out.csv");
        let matrix = array![[0.5]];

        let first = write_matrix(&path, &matrix, ",").expect("writable location");
        let second = write_matrix(&path, &matrix, ",").expect("writable location");

        assert_eq!(first, path);
        assert_eq!(second, dir.path().join("out(2).csv"));
    }

    // Tests a file blocking a parent directory is reported
    // Verified by overwriting the blocking file
    #[test]
    fn test_write_matrix_blocked_by_file() {
        let dir = TempDir::new().expect("temp dir");
        let blocking = dir.path().join("results");
        fs::write(&blocking, "").expect("write file");

        let result = write_matrix(&blocking.join("out.csv"), &array![[1.0]], ",");

        match result {
            Err(FdError::OutputExists { path }) => assert_eq!(path, blocking),
            _ => unreachable!("Expected OutputExists error"),
        }
    }
}
