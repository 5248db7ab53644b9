//! Wire snapshot for handing errors to sibling libraries
//!
//! Only the frozen numeric identity and the message fragments cross the
//! boundary. The receiving side revalidates the pair against its own copy of
//! the taxonomy.

use crate::error::{Error, MessageChain};
use crate::taxonomy::{ErrorCode, TaxonomyError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WireError {
    #[error("malformed error record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("error record carries {0}")]
    Identity(#[from] TaxonomyError),
}

/// Serializable form of an [`Error`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireRecord {
    pub domain: i32,
    pub code: i32,
    /// Oldest first
    #[serde(default)]
    pub messages: Vec<String>,
}

impl WireRecord {
    /// Revalidates the identity and rebuilds the error
    pub fn into_error(self) -> Result<Error, WireError> {
        let code = ErrorCode::from_raw(self.domain, self.code)?;
        Ok(Error::from_chain(code, MessageChain::from_fragments(self.messages)))
    }
}

impl From<&Error> for WireRecord {
    fn from(error: &Error) -> Self {
        let (domain, code) = error.code().to_raw();
        Self {
            domain,
            code,
            messages: error.messages().to_vec(),
        }
    }
}

impl Error {
    pub fn to_wire(&self) -> WireRecord {
        WireRecord::from(self)
    }

    pub fn from_wire(record: WireRecord) -> Result<Self, WireError> {
        record.into_error()
    }

    pub fn to_json(&self) -> Result<String, WireError> {
        Ok(serde_json::to_string(&self.to_wire())?)
    }

    pub fn from_json(json: &str) -> Result<Self, WireError> {
        let record: WireRecord = serde_json::from_str(json)?;
        record.into_error()
    }
}
