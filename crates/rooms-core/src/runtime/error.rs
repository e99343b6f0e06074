use std::{error::Error, fmt};

/// Failure reported by the container runtime backend.
///
/// Opaque on purpose: the room layer never reinterprets it.
#[derive(Debug)]
pub struct RuntimeError(Box<dyn Error + Send + Sync + 'static>);

impl RuntimeError {
    /// Wrap a backend error (or a plain message).
    pub fn new<E>(err: E) -> Self
    where
        E: Into<Box<dyn Error + Send + Sync + 'static>>,
    {
        Self(err.into())
    }

    /// Take back the backend error.
    pub fn into_inner(self) -> Box<dyn Error + Send + Sync + 'static> {
        self.0
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Error for RuntimeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}
