//! The error object
//!
//! An [`Error`] carries exactly one [`ErrorCode`] fixed at creation and a
//! [`MessageChain`] that only ever grows at the end. It is a plain owned
//! value: moving it hands ownership to the caller, dropping it releases the
//! chain. Nothing can observe it after release.

mod message;

pub use message::MessageChain;

use crate::render::{MessageOrder, RenderOptions};
use crate::taxonomy::{
    ArgumentCode, Domain, ErrorCode, InputCode, IoCode, MemoryCode, TaxonomyError,
};
use std::collections::TryReserveError;
use std::fmt::{self, Write as _};
use std::io;
use thiserror::Error;

/// Failure to construct an error object. No object exists afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    #[error("invalid error identity: {0}")]
    InvalidIdentity(#[from] TaxonomyError),

    #[error("unable to allocate {requested} bytes for the initial error message")]
    Allocation {
        requested: usize,
        #[source]
        source: TryReserveError,
    },
}

/// Failure to append to a message chain. The chain is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unable to allocate {requested} bytes to append to the error message chain")]
pub struct AppendError {
    pub requested: usize,
    #[source]
    pub source: TryReserveError,
}

/// One raised failure
///
/// `Clone` produces a second, independent error with its own chain; appending
/// to one never shows up in the other. Propagation should move the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    messages: MessageChain,
}

impl Error {
    /// Creates an error for `code` with an initial message
    pub fn new(code: impl Into<ErrorCode>, message: impl Into<String>) -> Self {
        let code = code.into();
        let message = message.into();
        tracing::trace!(domain = %code.domain(), code = code.name(), "error raised");
        Self {
            code,
            messages: MessageChain::from_fragments(vec![message]),
        }
    }

    /// Creates an error, reporting allocation failure instead of aborting
    pub fn try_new(code: impl Into<ErrorCode>, message: &str) -> Result<Self, ConstructionError> {
        let code = code.into();
        let messages =
            MessageChain::try_with_initial(message).map_err(|source| ConstructionError::Allocation {
                requested: message.len(),
                source,
            })?;
        tracing::trace!(domain = %code.domain(), code = code.name(), "error raised");
        Ok(Self { code, messages })
    }

    /// Creates an error from raw numbers as exchanged with sibling libraries
    pub fn from_raw(domain: i32, code: i32, message: &str) -> Result<Self, ConstructionError> {
        let code = ErrorCode::from_raw(domain, code)?;
        Self::try_new(code, message)
    }

    /// Like [`Error::from_raw`], for call sites where a bad pair is a bug
    ///
    /// # Panics
    ///
    /// Panics if `(domain, code)` is not part of the taxonomy or the initial
    /// message cannot be allocated.
    pub fn from_raw_or_panic(domain: i32, code: i32, message: &str) -> Self {
        match Self::from_raw(domain, code, message) {
            Ok(error) => error,
            Err(e) => panic!("internal consistency failure: {e}"),
        }
    }

    /// Builds an error from an identity and an already owned chain
    pub(crate) fn from_chain(code: ErrorCode, messages: MessageChain) -> Self {
        Self { code, messages }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn domain(&self) -> Domain {
        self.code.domain()
    }

    pub fn messages(&self) -> &MessageChain {
        &self.messages
    }

    /// Appends a context message to the end of the chain
    ///
    /// On allocation failure the chain is unchanged and the failure is
    /// returned; the identity is never touched.
    pub fn append_message(&mut self, text: &str) -> Result<(), AppendError> {
        self.messages.try_push(text).map_err(|source| {
            tracing::warn!(code = %self.code, bytes = text.len(), "dropping error context message");
            AppendError {
                requested: text.len(),
                source,
            }
        })
    }

    /// Appends several messages in order as a single all-or-nothing step
    pub fn append_messages<I, S>(&mut self, texts: I) -> Result<(), AppendError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match self.messages.try_extend(texts) {
            Ok(_) => Ok(()),
            Err(e) => {
                tracing::warn!(
                    code = %self.code,
                    bytes = e.requested,
                    "dropping error context messages"
                );
                Err(e)
            }
        }
    }

    /// Consuming form of [`Error::append_message`] for propagation chains
    ///
    /// A failed append is logged and the error is returned unchanged.
    pub fn with_context(mut self, text: &str) -> Self {
        let _ = self.append_message(text);
        self
    }

    pub fn is(&self, code: impl Into<ErrorCode>) -> bool {
        self.code == code.into()
    }

    pub fn is_domain(&self, domain: Domain) -> bool {
        self.domain() == domain
    }

    /// IO failures other than open/close are worth retrying
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::Io(
                IoCode::Generic | IoCode::SeekFailed | IoCode::ReadFailed | IoCode::WriteFailed
            )
        )
    }

    /// Memory exhaustion aborts the current operation
    pub fn is_fatal(&self) -> bool {
        self.code == ErrorCode::Memory(MemoryCode::Insufficient)
    }

    /// Renders the chain oldest first, joined by `": "`
    pub fn render(&self) -> String {
        self.render_with(&RenderOptions::default())
    }

    pub fn render_with(&self, options: &RenderOptions) -> String {
        let mut out = String::with_capacity(self.messages.text_len() + 32);
        if options.include_identity {
            let _ = write!(out, "[{}]", self.code);
            if !self.messages.is_empty() {
                out.push(' ');
            }
        }
        let fragments: Vec<&str> = match options.order {
            MessageOrder::OldestFirst => self.messages.iter().collect(),
            MessageOrder::NewestFirst => self.messages.iter().rev().collect(),
        };
        out.push_str(&fragments.join(options.separator.as_str()));
        out
    }

    /// One fragment per line, oldest first, each newline terminated
    pub fn backtrace(&self) -> String {
        let mut out = String::with_capacity(self.messages.text_len() + self.messages.len());
        for fragment in self.messages.iter() {
            out.push_str(fragment);
            out.push('\n');
        }
        out
    }

    /// Emits the error as a single structured `tracing` event
    pub fn report(&self) {
        let (raw_domain, raw_code) = self.code.to_raw();
        tracing::error!(
            domain = %self.domain(),
            code = self.code.name(),
            raw_domain,
            raw_code,
            chain = %self.render(),
            "error reported"
        );
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.messages.is_empty() {
            write!(f, "{}", self.code)
        } else {
            f.write_str(&self.render())
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        let code: ErrorCode = match err.kind() {
            io::ErrorKind::NotFound
            | io::ErrorKind::PermissionDenied
            | io::ErrorKind::AlreadyExists => IoCode::OpenFailed.into(),
            io::ErrorKind::UnexpectedEof => IoCode::ReadFailed.into(),
            io::ErrorKind::WriteZero => IoCode::WriteFailed.into(),
            io::ErrorKind::InvalidInput => ArgumentCode::InvalidValue.into(),
            io::ErrorKind::Unsupported => ArgumentCode::UnsupportedValue.into(),
            io::ErrorKind::InvalidData => InputCode::InvalidData.into(),
            io::ErrorKind::OutOfMemory => MemoryCode::Insufficient.into(),
            _ => IoCode::Generic.into(),
        };
        Error::new(code, err.to_string())
    }
}

impl From<TryReserveError> for Error {
    fn from(err: TryReserveError) -> Self {
        Error::new(MemoryCode::Insufficient, err.to_string())
    }
}
