//! Error taxonomy
//!
//! The closed vocabulary of (domain, code) pairs shared by every component of
//! the library and by sibling libraries of the same family. This module is the
//! single definition point; nothing else in the crate duplicates the numbers.
//!
//! # Compatibility
//!
//! The numeric value of every [`Domain`] and of every code is a frozen public
//! contract. Values are never repurposed or deleted; new domains and codes
//! are only appended at the end of their sets.

mod codes;
mod domain;

pub use codes::{
    ArgumentCode, CompressionCode, ConversionCode, InputCode, IoCode, MemoryCode, OutputCode,
    RuntimeCode,
};
pub use domain::Domain;

use std::fmt;
use thiserror::Error;

/// Failure to map raw numbers onto the taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TaxonomyError {
    #[error("unknown error domain {0}")]
    UnknownDomain(i32),

    #[error("unknown code {code} in error domain {domain}")]
    UnknownCode { domain: Domain, code: i32 },
}

/// A (domain, code) pair
///
/// One variant per domain, each wrapping that domain's code set, so an
/// invalid combination cannot be expressed in typed code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Arguments(ArgumentCode),
    Conversion(ConversionCode),
    Compression(CompressionCode),
    Io(IoCode),
    Input(InputCode),
    Memory(MemoryCode),
    Output(OutputCode),
    Runtime(RuntimeCode),
}

impl ErrorCode {
    /// Returns the domain owning this code
    pub const fn domain(self) -> Domain {
        match self {
            ErrorCode::Arguments(_) => Domain::Arguments,
            ErrorCode::Conversion(_) => Domain::Conversion,
            ErrorCode::Compression(_) => Domain::Compression,
            ErrorCode::Io(_) => Domain::Io,
            ErrorCode::Input(_) => Domain::Input,
            ErrorCode::Memory(_) => Domain::Memory,
            ErrorCode::Output(_) => Domain::Output,
            ErrorCode::Runtime(_) => Domain::Runtime,
        }
    }

    /// Returns the numeric code value within its domain
    pub const fn raw(self) -> i32 {
        match self {
            ErrorCode::Arguments(c) => c.as_raw(),
            ErrorCode::Conversion(c) => c.as_raw(),
            ErrorCode::Compression(c) => c.as_raw(),
            ErrorCode::Io(c) => c.as_raw(),
            ErrorCode::Input(c) => c.as_raw(),
            ErrorCode::Memory(c) => c.as_raw(),
            ErrorCode::Output(c) => c.as_raw(),
            ErrorCode::Runtime(c) => c.as_raw(),
        }
    }

    /// Returns the kebab-case name of the code, without its domain
    pub const fn name(self) -> &'static str {
        match self {
            ErrorCode::Arguments(c) => c.name(),
            ErrorCode::Conversion(c) => c.name(),
            ErrorCode::Compression(c) => c.name(),
            ErrorCode::Io(c) => c.name(),
            ErrorCode::Input(c) => c.name(),
            ErrorCode::Memory(c) => c.name(),
            ErrorCode::Output(c) => c.name(),
            ErrorCode::Runtime(c) => c.name(),
        }
    }

    /// Resolves a code value within an already known domain
    pub const fn from_parts(domain: Domain, code: i32) -> Option<Self> {
        // `Option::map` is not const, hence the nested matches.
        match domain {
            Domain::Arguments => match ArgumentCode::from_raw(code) {
                Some(c) => Some(ErrorCode::Arguments(c)),
                None => None,
            },
            Domain::Conversion => match ConversionCode::from_raw(code) {
                Some(c) => Some(ErrorCode::Conversion(c)),
                None => None,
            },
            Domain::Compression => match CompressionCode::from_raw(code) {
                Some(c) => Some(ErrorCode::Compression(c)),
                None => None,
            },
            Domain::Io => match IoCode::from_raw(code) {
                Some(c) => Some(ErrorCode::Io(c)),
                None => None,
            },
            Domain::Input => match InputCode::from_raw(code) {
                Some(c) => Some(ErrorCode::Input(c)),
                None => None,
            },
            Domain::Memory => match MemoryCode::from_raw(code) {
                Some(c) => Some(ErrorCode::Memory(c)),
                None => None,
            },
            Domain::Output => match OutputCode::from_raw(code) {
                Some(c) => Some(ErrorCode::Output(c)),
                None => None,
            },
            Domain::Runtime => match RuntimeCode::from_raw(code) {
                Some(c) => Some(ErrorCode::Runtime(c)),
                None => None,
            },
        }
    }

    /// Resolves a raw (domain, code) pair as received from a sibling library
    pub fn from_raw(domain: i32, code: i32) -> Result<Self, TaxonomyError> {
        let domain = Domain::from_raw(domain)?;
        ErrorCode::from_parts(domain, code).ok_or(TaxonomyError::UnknownCode { domain, code })
    }

    /// Returns the raw (domain, code) pair
    pub const fn to_raw(self) -> (i32, i32) {
        (self.domain().as_raw(), self.raw())
    }

    /// Returns the catch-all code of `domain`
    pub const fn generic(domain: Domain) -> Self {
        domain.generic()
    }

    pub const fn is_generic(self) -> bool {
        self.raw() == 0
    }

    /// Iterates over every defined pair, domain by domain
    pub fn all() -> impl Iterator<Item = ErrorCode> {
        Domain::ALL.into_iter().flat_map(Domain::codes)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.domain(), self.name())
    }
}

macro_rules! impl_from_code {
    ($($code:ident => $variant:ident),+ $(,)?) => {
        $(
            impl From<$code> for ErrorCode {
                fn from(code: $code) -> Self {
                    ErrorCode::$variant(code)
                }
            }
        )+
    };
}

impl_from_code! {
    ArgumentCode => Arguments,
    ConversionCode => Conversion,
    CompressionCode => Compression,
    IoCode => Io,
    InputCode => Input,
    MemoryCode => Memory,
    OutputCode => Output,
    RuntimeCode => Runtime,
}

/// Projects a pair onto its domain
pub const fn domain_of(code: ErrorCode) -> Domain {
    code.domain()
}

/// Returns true if `code` is a defined member of `domain`'s code set
pub const fn is_valid(domain: Domain, code: i32) -> bool {
    ErrorCode::from_parts(domain, code).is_some()
}
