//! Error domains
//!
//! A domain names the subsystem category that detected a failure. The
//! numeric values are the ASCII characters published by the library family's
//! headers and are shared verbatim with sibling libraries.

use super::codes::{
    ArgumentCode, CompressionCode, ConversionCode, InputCode, IoCode, MemoryCode, OutputCode,
    RuntimeCode,
};
use super::{ErrorCode, TaxonomyError};
use std::fmt;

/// Top-level failure category
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Domain {
    /// Invalid arguments passed to a function
    Arguments = b'a' as i32,
    /// Character set or value conversion
    Conversion = b'c' as i32,
    /// Compression and decompression
    Compression = b'C' as i32,
    /// Input/output on files and devices
    Io = b'I' as i32,
    /// Handling of input data
    Input = b'i' as i32,
    /// Memory allocation and manipulation
    Memory = b'm' as i32,
    /// Handling of output data
    Output = b'o' as i32,
    /// Runtime processing of internal structures
    Runtime = b'r' as i32,
}

impl Domain {
    /// Every domain, in publication order
    pub const ALL: [Domain; 8] = [
        Domain::Arguments,
        Domain::Conversion,
        Domain::Compression,
        Domain::Io,
        Domain::Input,
        Domain::Memory,
        Domain::Output,
        Domain::Runtime,
    ];

    /// Returns the frozen numeric value shared with sibling libraries
    pub const fn as_raw(self) -> i32 {
        self as i32
    }

    /// Returns the character the numeric value was derived from
    pub const fn as_char(self) -> char {
        self as u8 as char
    }

    /// Looks up a domain by its numeric value
    pub const fn from_raw(raw: i32) -> Result<Self, TaxonomyError> {
        match raw {
            0x61 => Ok(Domain::Arguments),
            0x63 => Ok(Domain::Conversion),
            0x43 => Ok(Domain::Compression),
            0x49 => Ok(Domain::Io),
            0x69 => Ok(Domain::Input),
            0x6d => Ok(Domain::Memory),
            0x6f => Ok(Domain::Output),
            0x72 => Ok(Domain::Runtime),
            _ => Err(TaxonomyError::UnknownDomain(raw)),
        }
    }

    /// Returns a short lowercase name suitable for logs
    pub const fn name(self) -> &'static str {
        match self {
            Domain::Arguments => "arguments",
            Domain::Conversion => "conversion",
            Domain::Compression => "compression",
            Domain::Io => "io",
            Domain::Input => "input",
            Domain::Memory => "memory",
            Domain::Output => "output",
            Domain::Runtime => "runtime",
        }
    }

    /// Returns the catch-all code of this domain
    pub const fn generic(self) -> ErrorCode {
        match self {
            Domain::Arguments => ErrorCode::Arguments(ArgumentCode::Generic),
            Domain::Conversion => ErrorCode::Conversion(ConversionCode::Generic),
            Domain::Compression => ErrorCode::Compression(CompressionCode::Generic),
            Domain::Io => ErrorCode::Io(IoCode::Generic),
            Domain::Input => ErrorCode::Input(InputCode::Generic),
            Domain::Memory => ErrorCode::Memory(MemoryCode::Generic),
            Domain::Output => ErrorCode::Output(OutputCode::Generic),
            Domain::Runtime => ErrorCode::Runtime(RuntimeCode::Generic),
        }
    }

    /// Returns every code defined for this domain, in numeric order
    pub fn codes(self) -> Vec<ErrorCode> {
        match self {
            Domain::Arguments => ArgumentCode::ALL.iter().map(|&c| c.into()).collect(),
            Domain::Conversion => ConversionCode::ALL.iter().map(|&c| c.into()).collect(),
            Domain::Compression => CompressionCode::ALL.iter().map(|&c| c.into()).collect(),
            Domain::Io => IoCode::ALL.iter().map(|&c| c.into()).collect(),
            Domain::Input => InputCode::ALL.iter().map(|&c| c.into()).collect(),
            Domain::Memory => MemoryCode::ALL.iter().map(|&c| c.into()).collect(),
            Domain::Output => OutputCode::ALL.iter().map(|&c| c.into()).collect(),
            Domain::Runtime => RuntimeCode::ALL.iter().map(|&c| c.into()).collect(),
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i32> for Domain {
    type Error = TaxonomyError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        Domain::from_raw(raw)
    }
}
