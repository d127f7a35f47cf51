use std::collections::BTreeSet;

use crate::{
    foundation::core::IndexPath,
    foundation::error::{LayoutError, LayoutResult},
    layout::attributes::LayoutAttributes,
};

/// Recorder handed to a batch transaction closure.
///
/// Counts reported here are the ones captured when the transaction began, so deletions can be
/// computed against what is on screen even after the data source has been mutated.
#[derive(Debug)]
pub struct BatchUpdate<'a, D> {
    data_source: &'a mut D,
    counts_before: &'a [usize],
    deleted: Vec<IndexPath>,
    inserted: Vec<IndexPath>,
}

impl<'a, D> BatchUpdate<'a, D> {
    pub(crate) fn new(data_source: &'a mut D, counts_before: &'a [usize]) -> Self {
        Self {
            data_source,
            counts_before,
            deleted: Vec::new(),
            inserted: Vec::new(),
        }
    }

    /// Section count displayed before the transaction.
    pub fn number_of_sections(&self) -> usize {
        self.counts_before.len()
    }

    /// Item count of `section` displayed before the transaction.
    pub fn number_of_items(&self, section: usize) -> usize {
        self.counts_before.get(section).copied().unwrap_or(0)
    }

    /// Data source, as mutated so far.
    pub fn data_source(&self) -> &D {
        self.data_source
    }

    /// Mutable access to the data source.
    pub fn data_source_mut(&mut self) -> &mut D {
        self.data_source
    }

    /// Record deletion of `paths` (pre-transaction index paths).
    pub fn delete_items(&mut self, paths: impl IntoIterator<Item = IndexPath>) {
        self.deleted.extend(paths);
    }

    /// Record insertion of `paths` (post-transaction index paths).
    pub fn insert_items(&mut self, paths: impl IntoIterator<Item = IndexPath>) {
        self.inserted.extend(paths);
    }

    pub(crate) fn into_parts(self) -> (Vec<IndexPath>, Vec<IndexPath>) {
        (self.deleted, self.inserted)
    }
}

/// Outcome of a completed batch transaction.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct BatchSummary {
    /// Deleted index paths, in recorded order.
    pub deleted: Vec<IndexPath>,
    /// Inserted index paths, in recorded order.
    pub inserted: Vec<IndexPath>,
    /// Pre-transaction attributes of the deleted cells.
    pub disappearing: Vec<LayoutAttributes>,
    /// Post-transaction attributes of the inserted cells.
    pub appearing: Vec<LayoutAttributes>,
}

/// Check that recorded deletions and insertions explain the change in item counts.
///
/// Deletions and insertions are independent sets; only their per-section totals must
/// reconcile: `after == before - deleted + inserted`.
pub(crate) fn validate_batch(
    before: &[usize],
    after: &[usize],
    deleted: &[IndexPath],
    inserted: &[IndexPath],
) -> LayoutResult<()> {
    if before.len() != after.len() {
        return Err(LayoutError::batch_update(format!(
            "section count changed from {} to {} inside an item batch",
            before.len(),
            after.len()
        )));
    }

    let deleted_per_section = count_per_section(deleted, before, "delete")?;
    let inserted_per_section = count_per_section(inserted, after, "insert")?;

    for (section, (&old, &new)) in before.iter().zip(after).enumerate() {
        let expected = old - deleted_per_section[section] + inserted_per_section[section];
        if new != expected {
            return Err(LayoutError::batch_update(format!(
                "invalid number of items in section {section}: {new} after the update, \
                 expected {expected} ({old} before, {} deleted, {} inserted)",
                deleted_per_section[section], inserted_per_section[section]
            )));
        }
    }
    Ok(())
}

fn count_per_section(
    paths: &[IndexPath],
    counts: &[usize],
    action: &str,
) -> LayoutResult<Vec<usize>> {
    let mut seen = BTreeSet::new();
    let mut per_section = vec![0usize; counts.len()];
    for path in paths {
        let in_range = counts
            .get(path.section)
            .is_some_and(|&count| path.item < count);
        if !in_range {
            return Err(LayoutError::batch_update(format!(
                "attempt to {action} item {path}, which is out of range"
            )));
        }
        if !seen.insert(*path) {
            return Err(LayoutError::batch_update(format!(
                "attempt to {action} item {path} more than once"
            )));
        }
        per_section[path.section] += 1;
    }
    Ok(per_section)
}

#[cfg(test)]
#[path = "../../tests/unit/host/batch.rs"]
mod tests;
