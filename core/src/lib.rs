pub mod errors;
pub mod lexer;
pub mod loader;
pub mod report;

pub use errors::{LoadError, ScanError};
pub use lexer::scanner::ScanResult;
pub use lexer::token::{Literal, Token, TokenKind};
pub use lexer::{scan, scan_with};
pub use report::{Reporter, StderrReporter};
