// vim: set ai et ts=4 sts=4 sw=4:
use std::error;
use std::fmt;
use std::io;
use yaml_rust::ScanError;

#[derive(Debug)]
pub enum Error {
    Unsatisfiable,              // no grid satisfies every row and column clue
    TooWide { width: usize },   // more columns than fit in a Line
    Parse(String),              // puzzle document is well-formed YAML but not a puzzle
    Yaml(ScanError),
    Io(io::Error),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Unsatisfiable     => write!(f, "puzzle has no solution"),
            Error::TooWide { width } => write!(f, "puzzle is {} columns wide, at most {} are supported",
                                               width, super::grid::MAX_WIDTH),
            Error::Parse(msg)        => write!(f, "invalid puzzle: {}", msg),
            Error::Yaml(e)           => write!(f, "invalid YAML: {}", e),
            Error::Io(e)             => write!(f, "{}", e),
        }
    }
}
impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Yaml(e) => Some(e),
            Error::Io(e)   => Some(e),
            _              => None,
        }
    }
}
impl From<ScanError> for Error {
    fn from(other: ScanError) -> Self {
        Error::Yaml(other)
    }
}
impl From<io::Error> for Error {
    fn from(other: io::Error) -> Self {
        Error::Io(other)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
