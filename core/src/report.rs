use crate::errors::ScanError;

/// Process exit codes for the `tokenize` command.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    /// Bad arguments or an unreadable input file.
    pub const USAGE_OR_IO: i32 = 1;
    /// The input contained characters the scanner could not classify.
    pub const DATA_ERROR: i32 = 65;
}

/// Sink for scan errors, called once per error in the order they occur.
pub trait Reporter {
    fn report(&mut self, error: &ScanError);
}

/// Writes each error as one line on stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrReporter;

impl Reporter for StderrReporter {
    fn report(&mut self, error: &ScanError) {
        eprintln!("{error}");
    }
}

impl Reporter for Vec<ScanError> {
    fn report(&mut self, error: &ScanError) {
        self.push(error.clone());
    }
}
