//! Scoped staging buffers for font bytes on their way into a collection.
//!
//! A `StagedFontBuffer` owns a private copy of the caller's bytes for the
//! duration of one `add`. Registration consumes it with `into_shared`: the
//! allocation moves into the font collection, which keeps it only if a face
//! was read from it and drops it otherwise. The buffer itself never outlives
//! the `add`. Every buffer reports to a shared `StagingLedger`, so leaks are
//! observable.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::FontError;

/// Counters for staging buffers created by one registry.
#[derive(Debug, Default)]
pub struct StagingLedger {
    outstanding: AtomicUsize,
    staged: AtomicUsize,
}

impl StagingLedger {
    /// Buffers currently alive. Zero whenever no `add` is in flight.
    pub fn outstanding(&self) -> usize {
        self.outstanding.load(Ordering::SeqCst)
    }

    /// Buffers ever staged through this ledger.
    pub fn total_staged(&self) -> usize {
        self.staged.load(Ordering::SeqCst)
    }
}

/// Owned copy of one font file, alive only across a single registration.
pub struct StagedFontBuffer {
    bytes: Vec<u8>,
    ledger: Arc<StagingLedger>,
}

impl StagedFontBuffer {
    /// Copy `bytes` into a freshly allocated buffer sized exactly to them.
    ///
    /// Zero-length input is accepted and produces an empty buffer.
    ///
    /// # Errors
    /// `FontTooLarge` if `bytes` exceeds `limit`, `Allocation` if the
    /// allocator cannot provide the memory. Nothing is counted on failure.
    pub fn stage(
        bytes: &[u8],
        limit: usize,
        ledger: &Arc<StagingLedger>,
    ) -> Result<Self, FontError> {
        if bytes.len() > limit {
            return Err(FontError::FontTooLarge {
                len: bytes.len(),
                limit,
            });
        }

        let mut staged = Vec::new();
        staged
            .try_reserve_exact(bytes.len())
            .map_err(|source| FontError::Allocation {
                requested: bytes.len(),
                source,
            })?;
        staged.extend_from_slice(bytes);

        ledger.outstanding.fetch_add(1, Ordering::SeqCst);
        ledger.staged.fetch_add(1, Ordering::SeqCst);
        log::trace!("Staged {} font bytes", staged.len());

        Ok(Self {
            bytes: staged,
            ledger: Arc::clone(ledger),
        })
    }

    /// Hand the staged allocation over without copying it.
    ///
    /// The buffer is released (and the ledger updated) here; the returned
    /// `Arc` owns the same memory.
    pub fn into_shared(mut self) -> Arc<Vec<u8>> {
        Arc::new(std::mem::take(&mut self.bytes))
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl std::fmt::Debug for StagedFontBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StagedFontBuffer")
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl Drop for StagedFontBuffer {
    fn drop(&mut self) {
        self.ledger.outstanding.fetch_sub(1, Ordering::SeqCst);
        log::trace!("Released staging buffer ({} bytes held)", self.bytes.len());
    }
}
