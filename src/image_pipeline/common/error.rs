use thiserror::Error;

/// Exit code for usage and input problems.
pub const EXIT_INPUT_FAILURE: u8 = 1;

/// Exit code for output creation and memory allocation problems.
pub const EXIT_OUTPUT_FAILURE: u8 = 42;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("{0}")]
    Usage(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid image dimensions: rows={0}, cols={1}")]
    InvalidDimensions(usize, usize),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("The file size spec is not consistent with file size: {band} band expected {expected} samples, found {actual}")]
    SizeMismatch {
        band: String,
        expected: usize,
        actual: usize,
    },

    #[error("Could not create output image: {0}")]
    OutputWriteError(String),

    #[error("Failed to encode TIFF image: {0}")]
    EncodeError(String),

    #[error("Cannot allocate memory: {0}")]
    AllocationError(String),

    /// Only produced while writing the output.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConversionError {
    pub fn exit_code(&self) -> u8 {
        match self {
            ConversionError::Usage(_)
            | ConversionError::InvalidConfig(_)
            | ConversionError::InvalidDimensions(_, _)
            | ConversionError::InputReadError(_)
            | ConversionError::SizeMismatch { .. } => EXIT_INPUT_FAILURE,
            ConversionError::OutputWriteError(_)
            | ConversionError::EncodeError(_)
            | ConversionError::AllocationError(_)
            | ConversionError::IoError(_) => EXIT_OUTPUT_FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConversionError>;

/// Allocates an empty vector able to hold `len` elements, reporting failure instead of aborting.
pub(crate) fn try_alloc<T>(len: usize, what: &str) -> Result<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|e| ConversionError::AllocationError(format!("{} ({} elements): {}", what, len, e)))?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ConversionError::Usage("x".into()).exit_code(), 1);
        assert_eq!(ConversionError::InvalidConfig("x".into()).exit_code(), 1);
        assert_eq!(ConversionError::InvalidDimensions(0, 1).exit_code(), 1);
        assert_eq!(ConversionError::InputReadError("x".into()).exit_code(), 1);
        assert_eq!(
            ConversionError::SizeMismatch { band: "blue".into(), expected: 4, actual: 3 }.exit_code(),
            1
        );
        assert_eq!(ConversionError::OutputWriteError("x".into()).exit_code(), 42);
        assert_eq!(ConversionError::EncodeError("x".into()).exit_code(), 42);
        assert_eq!(ConversionError::AllocationError("x".into()).exit_code(), 42);
    }

    #[test]
    fn test_try_alloc_reports_capacity_overflow() {
        let result = try_alloc::<u64>(usize::MAX, "huge");
        assert!(matches!(result, Err(ConversionError::AllocationError(_))));

        let ok = try_alloc::<u8>(16, "small").unwrap();
        assert!(ok.capacity() >= 16);
        assert!(ok.is_empty());
    }
}
