//! Propagation helpers for `Result<T, Error>`

use crate::error::Error;

/// Extension trait for adding context while an error travels up the stack
///
/// ```
/// use ewf_error::{Error, IoCode, ResultExt};
///
/// fn read_sector() -> Result<Vec<u8>, Error> {
///     Err(Error::new(IoCode::ReadFailed, "unable to read sector 42"))
/// }
///
/// let err = read_sector().context("during segment file recovery").unwrap_err();
/// assert_eq!(err.render(), "unable to read sector 42: during segment file recovery");
/// ```
pub trait ResultExt<T> {
    /// Appends `message` to the error's chain, if this is an `Err`
    ///
    /// If the message cannot be allocated it is dropped with a `warn!` event
    /// and the error is returned unchanged. Use [`Error::append_message`]
    /// directly when the caller needs to see that failure.
    fn context(self, message: &str) -> Self;

    /// Like [`ResultExt::context`], building the message only on failure
    ///
    /// Shares the same drop-on-exhaustion behavior.
    fn with_context<F, S>(self, f: F) -> Self
    where
        F: FnOnce() -> S,
        S: AsRef<str>;

    /// Reports the error through `tracing` and returns the result unchanged
    fn log_err(self) -> Self;
}

impl<T> ResultExt<T> for Result<T, Error> {
    fn context(self, message: &str) -> Self {
        self.map_err(|e| e.with_context(message))
    }

    fn with_context<F, S>(self, f: F) -> Self
    where
        F: FnOnce() -> S,
        S: AsRef<str>,
    {
        self.map_err(|e| e.with_context(f().as_ref()))
    }

    fn log_err(self) -> Self {
        if let Err(ref e) = self {
            e.report();
        }
        self
    }
}

/// Converts foreign errors into [`Error`] while attaching context
pub trait IntoErrorExt<T> {
    fn or_error(self, message: &str) -> Result<T, Error>;
}

impl<T, E> IntoErrorExt<T> for Result<T, E>
where
    E: Into<Error>,
{
    fn or_error(self, message: &str) -> Result<T, Error> {
        self.map_err(|e| e.into().with_context(message))
    }
}
