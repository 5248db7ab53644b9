//! Error classification for the EWF library family.
//!
//! Every failure carries a two-level identity: a [`Domain`] naming the
//! subsystem that detected it and, within that domain, a code naming the
//! precise condition. Callers branch on the identity; the attached message
//! chain is for humans.
//!
//! ```
//! use ewf_error::{Domain, Error, IoCode};
//!
//! let mut error = Error::new(IoCode::ReadFailed, "unable to read sector 42");
//! error.append_message("during segment file recovery").unwrap();
//!
//! assert_eq!(error.domain(), Domain::Io);
//! assert!(error.is_retryable());
//! assert_eq!(
//!     error.render(),
//!     "unable to read sector 42: during segment file recovery"
//! );
//! ```

pub mod error;
pub mod render;
pub mod result_ext;
pub mod taxonomy;
pub mod wire;

pub use error::{AppendError, ConstructionError, Error, MessageChain};
pub use render::{MessageOrder, RenderOptions};
pub use result_ext::{IntoErrorExt, ResultExt};
pub use taxonomy::{
    ArgumentCode, CompressionCode, ConversionCode, Domain, ErrorCode, InputCode, IoCode,
    MemoryCode, OutputCode, RuntimeCode, TaxonomyError, domain_of, is_valid,
};
pub use wire::{WireError, WireRecord};

pub type Result<T> = std::result::Result<T, Error>;
