use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
#[error("could not read '{}': {source}", .path.display())]
#[diagnostic(help("check that the file exists and is readable"))]
pub struct LoadError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}
