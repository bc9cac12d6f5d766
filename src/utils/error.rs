use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Common result type for mdtoc operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for mdtoc operations
#[derive(Debug)]
pub enum MdtocError {
    /// The input Markdown file does not exist
    InputNotFound(PathBuf),
    /// The input file exists but could not be opened or read
    InputOpen(PathBuf, io::Error),
    /// The output file could not be created or written
    OutputCreate(PathBuf, io::Error),
    /// Configuration error
    Config(String),
    /// IO error wrapper
    Io(io::Error),
}

impl MdtocError {
    /// Whether the error means "nothing to work on" rather than a failure.
    /// The command treats it by showing usage and exiting successfully.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, MdtocError::InputNotFound(_))
    }
}

impl fmt::Display for MdtocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MdtocError::InputNotFound(path) => {
                write!(f, "Input file does not exist: {}", path.display())
            }
            MdtocError::InputOpen(path, err) => {
                write!(f, "Cannot open input file {}: {}", path.display(), err)
            }
            MdtocError::OutputCreate(path, err) => {
                write!(f, "Cannot create output file {}: {}", path.display(), err)
            }
            MdtocError::Config(msg) => write!(f, "Configuration error: {}", msg),
            MdtocError::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl Error for MdtocError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MdtocError::InputOpen(_, err) | MdtocError::OutputCreate(_, err) => Some(err),
            MdtocError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for MdtocError {
    fn from(err: io::Error) -> Self {
        MdtocError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = MdtocError::InputNotFound(PathBuf::from("missing.md"));
        assert_eq!(err.to_string(), "Input file does not exist: missing.md");
        assert!(err.is_missing_input());

        let err = MdtocError::OutputCreate(
            PathBuf::from("out.md"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().starts_with("Cannot create output file out.md"));
        assert!(err.source().is_some());
        assert!(!err.is_missing_input());
    }

    #[test]
    fn test_boxed_downcast() {
        let boxed: Box<dyn Error> = MdtocError::Config("bad".to_string()).into();
        let err = boxed.downcast_ref::<MdtocError>().unwrap();
        assert!(matches!(err, MdtocError::Config(msg) if msg == "bad"));
    }
}
