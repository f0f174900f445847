use crate::error::{PolicyError, Result};
use crate::types::{QTable, QValue};
use fxhash::FxBuildHasher;
use std::borrow::Cow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Read access to a table of per-action values.
///
/// Strict tables answer `action_values` for an unseen state with
/// `KeyNotFound`. Defaulting tables hand back a freshly initialized row
/// instead, which is what `EpsilonSoftPolicy` relies on when it exploits a
/// state the learning loop has not written yet. `GreedyPolicy` only ever
/// reads rows after `contains` says the state is stored.
pub trait QTableLike<S> {
    fn contains(&self, state: &S) -> bool;
    fn action_values(&self, state: &S) -> Result<Cow<'_, [QValue]>>;
    /// Every row currently stored.
    fn rows(&self) -> impl Iterator<Item = &[QValue]>;
    /// Width of the row handed back for unseen states, if there is one.
    fn default_width(&self) -> Option<usize> {
        None
    }
}

impl<S, H> QTableLike<S> for HashMap<S, Vec<QValue>, H>
where
    S: Eq + Hash,
    H: BuildHasher,
{
    fn contains(&self, state: &S) -> bool {
        self.contains_key(state)
    }

    fn action_values(&self, state: &S) -> Result<Cow<'_, [QValue]>> {
        self.get(state)
            .map(|row| Cow::Borrowed(row.as_slice()))
            .ok_or(PolicyError::KeyNotFound)
    }

    fn rows(&self) -> impl Iterator<Item = &[QValue]> {
        self.values().map(Vec::as_slice)
    }
}

/// A Q-table whose unseen states read as `num_actions` copies of `init`.
///
/// Reads never insert; the learning loop materializes rows through
/// [`DefaultQTable::entry`] when it writes.
#[derive(Debug, Clone)]
pub struct DefaultQTable<S> {
    table: QTable<S>,
    num_actions: usize,
    init: QValue,
}

impl<S: Eq + Hash> DefaultQTable<S> {
    pub fn new(num_actions: usize) -> Self {
        Self::with_init(num_actions, 0.0)
    }

    pub fn with_init(num_actions: usize, init: QValue) -> Self {
        DefaultQTable {
            table: QTable::with_hasher(FxBuildHasher::default()),
            num_actions,
            init,
        }
    }

    pub fn num_actions(&self) -> usize {
        self.num_actions
    }

    /// Row for `state`, inserting the default row first if needed.
    pub fn entry(&mut self, state: S) -> &mut Vec<QValue> {
        let (n, init) = (self.num_actions, self.init);
        self.table.entry(state).or_insert_with(|| vec![init; n])
    }

    pub fn insert(&mut self, state: S, values: Vec<QValue>) -> Option<Vec<QValue>> {
        self.table.insert(state, values)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl<S: Eq + Hash> QTableLike<S> for DefaultQTable<S> {
    fn contains(&self, state: &S) -> bool {
        self.table.contains_key(state)
    }

    fn action_values(&self, state: &S) -> Result<Cow<'_, [QValue]>> {
        Ok(match self.table.get(state) {
            Some(row) => Cow::Borrowed(row.as_slice()),
            None => Cow::Owned(vec![self.init; self.num_actions]),
        })
    }

    fn rows(&self) -> impl Iterator<Item = &[QValue]> {
        self.table.values().map(Vec::as_slice)
    }

    fn default_width(&self) -> Option<usize> {
        Some(self.num_actions())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_table_reports_missing_state() {
        let mut q = QTable::<u32>::default();
        q.insert(7, vec![1.0, 2.0]);
        assert!(q.contains(&7));
        assert!(!q.contains(&8));
        assert_eq!(q.action_values(&7).unwrap().into_owned(), vec![1.0, 2.0]);
        assert_eq!(q.action_values(&8), Err(PolicyError::KeyNotFound));
    }

    #[test]
    fn default_table_reads_unseen_state_as_init_row() {
        let q = DefaultQTable::<u32>::with_init(3, 0.5);
        assert_eq!(q.action_values(&1).unwrap().into_owned(), vec![0.5, 0.5, 0.5]);
        assert!(!q.contains(&1));
        assert!(q.is_empty());
    }

    #[test]
    fn default_table_entry_vivifies_on_write() {
        let mut q = DefaultQTable::<u32>::new(2);
        q.entry(4)[1] += 1.5;
        assert!(q.contains(&4));
        assert_eq!(q.len(), 1);
        assert_eq!(q.action_values(&4).unwrap().into_owned(), vec![0.0, 1.5]);
    }

    #[test]
    fn only_default_table_has_default_width() {
        assert_eq!(QTable::<u32>::default().default_width(), None);
        let q = DefaultQTable::<u32>::new(4);
        assert_eq!(q.num_actions(), 4);
        assert_eq!(q.default_width(), Some(4));
    }

    #[test]
    fn rows_cover_every_stored_state() {
        let mut q = DefaultQTable::<u32>::new(2);
        q.insert(1, vec![1.0, 0.0]);
        q.insert(2, vec![0.0, 1.0]);
        assert_eq!(q.rows().count(), 2);
        assert!(q.rows().all(|row| row.len() == 2));
    }
}
