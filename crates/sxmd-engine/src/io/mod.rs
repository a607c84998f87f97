use std::fmt;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Where the document to convert comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `-` means standard input; anything else is a file path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Read the whole input before any conversion starts
pub fn read_input(source: &InputSource) -> Result<Vec<u8>, IoError> {
    match source {
        InputSource::Stdin => read_from(std::io::stdin().lock()),
        InputSource::File(path) => read_file(path),
    }
}

/// Read a document file and return its raw bytes
pub fn read_file(path: &Path) -> Result<Vec<u8>, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read(path).map_err(IoError::Io)
}

fn read_from(mut reader: impl Read) -> Result<Vec<u8>, IoError> {
    let mut content = Vec::new();
    reader.read_to_end(&mut content)?;
    Ok(content)
}
