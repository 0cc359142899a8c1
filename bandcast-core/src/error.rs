use std::{error, fmt, io};

#[derive(Debug)]
pub enum Error {
    /// A required identifier or page fragment could not be located.
    NotFound(&'static str),
    /// Two independently scraped lists were expected to line up by position.
    Misaligned {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    HttpStatus {
        url: String,
        status: u16,
    },
    MalformedUpstream(String),
    ConfigError(String),
    Transport(Box<dyn error::Error + Send>),
    IoError(io::Error),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(what) => write!(f, "Failed to find {what}"),
            Self::Misaligned {
                what,
                expected,
                found,
            } => write!(
                f,
                "Misaligned {what}: expected {expected} entries, found {found}"
            ),
            Self::HttpStatus { url, status } => write!(f, "HTTP {status} from {url}"),
            Self::MalformedUpstream(msg) => write!(f, "Unexpected upstream response: {msg}"),
            Self::ConfigError(msg) => write!(f, "Invalid configuration: {msg}"),
            Self::Transport(err) => err.fmt(f),
            Self::IoError(err) => err.fmt(f),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<ureq::Error> for Error {
    fn from(err: ureq::Error) -> Self {
        Error::Transport(Box::new(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedUpstream(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
