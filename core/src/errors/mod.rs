mod load_error;
mod scan_error;

pub use load_error::LoadError;
pub use scan_error::ScanError;
