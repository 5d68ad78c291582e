use std::{fmt, io, path::PathBuf};

/// Errors raised on the host side of the vertex stage.
#[derive(Debug)]
pub enum Error {
    /// Reading a file from disk failed.
    Io { path: PathBuf, source: io::Error },
    /// Raw vertex data does not split into whole vertex records.
    VertexBuffer { len: usize, stride: usize },
    /// The bytes are not a well-formed SPIR-V word stream.
    Spirv(String),
    /// The module has no `OpEntryPoint` with this name.
    EntryPointMissing(String),
    /// The entry point exists but is not a vertex entry point.
    WrongExecutionModel { name: String, model: u32 },
    /// An environment variable held a value that could not be parsed.
    Config { key: &'static str, value: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io { path, source } => write!(f, "failed to read {}: {}", path.display(), source),
            Error::VertexBuffer { len, stride } => write!(
                f,
                "vertex buffer of {} bytes is not a multiple of the {}-byte stride",
                len, stride
            ),
            Error::Spirv(message) => write!(f, "invalid SPIR-V: {}", message),
            Error::EntryPointMissing(name) => write!(f, "entry point `{}` not found", name),
            Error::WrongExecutionModel { name, model } => write!(
                f,
                "entry point `{}` has execution model {}, expected vertex",
                name, model
            ),
            Error::Config { key, value } => write!(f, "invalid value {:?} for {}", value, key),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
