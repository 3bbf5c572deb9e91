//! Core frequency database.
//!
//! An in-memory BTreeMap of item name → purchase count plus the running
//! maximum. Ordered map chosen deliberately: enumeration is lexicographic
//! by key, which is the display order the console layer relies on.

use std::collections::BTreeMap;

use crate::error::Error;

/// Write-once (bulk) / read-many item→count index.
///
/// Created empty, populated by a single [`ingest`](FrequencyDb::ingest)
/// call, then read-only for the rest of the session. Queries issued
/// before ingestion fail with [`Error::NotReady`].
#[derive(Debug, Default)]
pub struct FrequencyDb {
    counts: BTreeMap<String, u64>,
    max_count: u64,
    ingested: bool,
}

impl FrequencyDb {
    /// Create a new empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume a token stream, incrementing the count for each token and
    /// tracking the running maximum after every increment. Returns the
    /// number of tokens consumed.
    ///
    /// Tokens are trimmed here as well; anything empty after trimming is
    /// skipped. Fails with [`Error::EmptySource`] when the stream yields
    /// zero usable tokens (the database stays empty and not-ready), and
    /// with [`Error::AlreadyIngested`] on a second call — re-ingestion
    /// would be additive, which is never what a caller wants here.
    pub fn ingest<I>(&mut self, tokens: I) -> crate::Result<usize>
    where
        I: IntoIterator<Item = String>,
    {
        if self.ingested {
            return Err(Error::AlreadyIngested);
        }

        let mut consumed = 0usize;
        for token in tokens {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }

            let count = self
                .counts
                .entry(token.to_owned())
                .and_modify(|c| *c += 1)
                .or_insert(1);
            if *count > self.max_count {
                self.max_count = *count;
            }
            consumed += 1;
        }

        if consumed == 0 {
            return Err(Error::EmptySource);
        }
        self.ingested = true;
        Ok(consumed)
    }

    /// Exact case-sensitive lookup after trimming. A miss is `Ok(None)`.
    pub fn get(&self, name: &str) -> crate::Result<Option<u64>> {
        if !self.ingested {
            return Err(Error::NotReady);
        }
        Ok(self.counts.get(name.trim()).copied())
    }

    /// Enumerate all `(name, count)` records in lexicographic key order.
    pub fn entries(&self) -> crate::Result<impl Iterator<Item = (&str, u64)> + '_> {
        if !self.ingested {
            return Err(Error::NotReady);
        }
        Ok(self.counts.iter().map(|(name, count)| (name.as_str(), *count)))
    }

    /// The maximum count across all records.
    pub fn max_count(&self) -> crate::Result<u64> {
        if !self.ingested {
            return Err(Error::NotReady);
        }
        Ok(self.max_count)
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
