//! Append-only message chain
//!
//! Fragments are kept oldest first: the initial message of an error sits at
//! index 0 and every appended fragment goes at the end. All growth goes
//! through fallible reservation so an exhausted allocator leaves the chain as
//! it was.

use super::AppendError;
use std::collections::TryReserveError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageChain {
    fragments: Vec<String>,
}

impl MessageChain {
    pub const fn new() -> Self {
        Self {
            fragments: Vec::new(),
        }
    }

    /// Builds a chain holding `initial`, or an empty chain if it is empty
    pub fn try_with_initial(initial: &str) -> Result<Self, TryReserveError> {
        let mut chain = Self::new();
        chain.try_push(initial)?;
        Ok(chain)
    }

    /// Appends one fragment. Empty text is ignored.
    pub fn try_push(&mut self, text: &str) -> Result<(), TryReserveError> {
        if text.is_empty() {
            return Ok(());
        }
        let fragment = copy_fragment(text)?;
        self.fragments.try_reserve(1)?;
        self.fragments.push(fragment);
        Ok(())
    }

    /// Appends several fragments at once; either all of them land or none do
    ///
    /// Returns the number of bytes appended. On failure `requested` counts
    /// the bytes examined up to and including the fragment that failed.
    pub fn try_extend<I, S>(&mut self, texts: I) -> Result<usize, AppendError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut requested = 0;
        let mut staged: Vec<String> = Vec::new();
        for text in texts {
            let text = text.as_ref();
            if text.is_empty() {
                continue;
            }
            requested += text.len();
            let fragment = staged
                .try_reserve(1)
                .and_then(|()| copy_fragment(text))
                .map_err(|source| AppendError { requested, source })?;
            staged.push(fragment);
        }
        self.fragments
            .try_reserve(staged.len())
            .map_err(|source| AppendError { requested, source })?;
        self.fragments.extend(staged);
        Ok(requested)
    }

    /// Takes ownership of already allocated fragments, dropping empty ones
    pub(crate) fn from_fragments(mut fragments: Vec<String>) -> Self {
        fragments.retain(|f| !f.is_empty());
        Self { fragments }
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// The initial message
    pub fn first(&self) -> Option<&str> {
        self.fragments.first().map(String::as_str)
    }

    /// The most recently appended message
    pub fn last(&self) -> Option<&str> {
        self.fragments.last().map(String::as_str)
    }

    /// Iterates oldest first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.fragments.iter().map(String::as_str)
    }

    /// Total bytes of text held by the chain
    pub fn text_len(&self) -> usize {
        self.fragments.iter().map(String::len).sum()
    }

    pub(crate) fn to_vec(&self) -> Vec<String> {
        self.fragments.clone()
    }
}

fn copy_fragment(text: &str) -> Result<String, TryReserveError> {
    let mut fragment = String::new();
    fragment.try_reserve_exact(text.len())?;
    fragment.push_str(text);
    Ok(fragment)
}
