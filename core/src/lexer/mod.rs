pub mod cursor;
pub mod scanner;
pub mod token;

use crate::report::{Reporter, StderrReporter};
use scanner::{ScanResult, Scanner};

/// Tokenize source code, writing every unexpected character to stderr as it
/// is found.
pub fn scan(source: &str) -> ScanResult {
    scan_with(source, &mut StderrReporter)
}

/// Tokenize source code, sending every scan error to `reporter` as it is
/// found.
pub fn scan_with<R: Reporter + ?Sized>(source: &str, reporter: &mut R) -> ScanResult {
    Scanner::new(source).scan_tokens(reporter)
}
