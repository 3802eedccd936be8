//! Lenient form-level scanner for Erlang source.
//!
//! Not a parser. One pass over the token stream recovers exactly the
//! structure test discovery needs: module/include/import/export attributes,
//! function definitions with their arity, and the shape of call
//! expressions inside bodies. Everything else is skipped to the next form
//! boundary, and malformed input never fails the scan.
//!
//! A form ends at a `.` token followed by whitespace, a comment, or end of
//! input; a `.` glued to the next token (as in `X#rec.field`) stays inside
//! its form.

mod error;
mod scanner;
mod token;

#[cfg(test)]
mod tests;

pub use error::ScanError;
pub use scanner::{scan_file, scan_source};
