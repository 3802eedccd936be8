//! Scanner errors.

use thiserror::Error;

/// Error from scanning a source file.
///
/// Malformed source is never an error (the scanner skips what it cannot
/// shape); the only failure is input the span representation cannot
/// address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// Source text exceeds the `u32` byte-offset space of spans.
    #[error("source is {len} bytes, exceeding the {max}-byte span limit", max = u32::MAX)]
    SourceTooLarge {
        /// Byte length of the offending source.
        len: usize,
    },
}
