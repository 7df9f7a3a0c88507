//! # Note Filter
//!
//! Which natural notes are in play, with a floor of two.
//!
//! ## Persistence
//! The selection lives under a single store key (`selectedNotes` by default)
//! as a JSON array of note names:
//! ```text
//! ["Sol","La"]
//! ```
//! Every change is written through immediately. On restore, a missing,
//! malformed, or too-short entry falls back to the default selection.
//!
//! ## Toggle rules
//! - Not selected: added
//! - Selected, more than two selected: removed
//! - Selected, exactly two selected: nothing happens

use crate::error::FretnoteError;
use crate::note::NaturalNote;
use crate::storage::Store;
use serde::Serialize;
use std::collections::BTreeSet;

/// Fewest notes that can be in play at once
pub const MIN_SELECTED: usize = 2;

/// Set of natural notes with at least [`MIN_SELECTED`] members
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SelectedNotes(BTreeSet<NaturalNote>);

impl SelectedNotes {
    /// Returns `None` when fewer than two distinct notes are given
    pub fn new(notes: impl IntoIterator<Item = NaturalNote>) -> Option<Self> {
        let set: BTreeSet<NaturalNote> = notes.into_iter().collect();
        if set.len() < MIN_SELECTED {
            return None;
        }
        Some(Self(set))
    }

    pub fn contains(&self, note: NaturalNote) -> bool {
        self.0.contains(&note)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Notes in ascending order
    pub fn iter(&self) -> impl Iterator<Item = NaturalNote> + '_ {
        self.0.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<NaturalNote> {
        self.iter().collect()
    }

    fn to_json(&self) -> Result<String, FretnoteError> {
        serde_json::to_string(&self.to_vec()).map_err(|e| FretnoteError::StorageError(e.to_string()))
    }

    fn from_json(value: &str) -> Option<Self> {
        let notes: Vec<NaturalNote> = serde_json::from_str(value).ok()?;
        Self::new(notes)
    }
}

impl Default for SelectedNotes {
    /// Sol and La
    fn default() -> Self {
        Self([NaturalNote::Sol, NaturalNote::La].into_iter().collect())
    }
}

/// Selection of notes in play, written through to a [`Store`]
#[derive(Debug)]
pub struct NoteFilter<S: Store> {
    store: S,
    key: String,
    selected: SelectedNotes,
}

impl<S: Store> NoteFilter<S> {
    /// Load the persisted selection, or `default` when there is none usable
    pub fn restore(store: S, key: impl Into<String>, default: SelectedNotes) -> Self {
        let key = key.into();

        let selected = match store.get(&key) {
            Ok(Some(value)) => SelectedNotes::from_json(&value).unwrap_or_else(|| {
                log::debug!("ignoring persisted selection {:?}, using default", value);
                default
            }),
            Ok(None) => default,
            Err(e) => {
                log::warn!("could not read selected notes: {}", e);
                default
            }
        };

        log::debug!("restored selection {:?}", selected.to_vec());
        Self { store, key, selected }
    }

    pub fn selected(&self) -> &SelectedNotes {
        &self.selected
    }

    pub fn contains(&self, note: NaturalNote) -> bool {
        self.selected.contains(note)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Add or remove `note`. Returns whether the selection changed.
    pub fn toggle(&mut self, note: NaturalNote) -> bool {
        let set = &mut self.selected.0;

        if set.contains(&note) {
            if set.len() <= MIN_SELECTED {
                return false;
            }
            set.remove(&note);
        } else {
            set.insert(note);
        }

        log::info!("selected notes changed to {:?}", self.selected.to_vec());
        self.persist();
        true
    }

    fn persist(&mut self) {
        let result = self
            .selected
            .to_json()
            .and_then(|value| self.store.set(&self.key, &value));

        if let Err(e) = result {
            log::warn!("could not persist selected notes: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    const KEY: &str = "selectedNotes";

    fn filter_with(value: Option<&str>) -> NoteFilter<MemoryStore> {
        let store = match value {
            Some(value) => MemoryStore::with_entry(KEY, value),
            None => MemoryStore::new(),
        };
        NoteFilter::restore(store, KEY, SelectedNotes::default())
    }

    fn persisted(filter: &NoteFilter<MemoryStore>) -> SelectedNotes {
        let value = filter.store().get(KEY).unwrap().expect("selection should be persisted");
        SelectedNotes::from_json(&value).unwrap()
    }

    /// A store whose writes always fail
    struct ReadOnlyStore;

    impl Store for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, FretnoteError> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), FretnoteError> {
            Err(FretnoteError::StorageError("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_cold_start_defaults_to_sol_la() {
        let filter = filter_with(None);
        assert_eq!(filter.selected().to_vec(), vec![NaturalNote::Sol, NaturalNote::La]);
    }

    #[test]
    fn test_restore_persisted_selection() {
        let filter = filter_with(Some(r#"["Do","Mi","Si"]"#));
        assert_eq!(
            filter.selected().to_vec(),
            vec![NaturalNote::Do, NaturalNote::Mi, NaturalNote::Si]
        );
    }

    #[test]
    fn test_restore_falls_back_on_bad_values() {
        for value in [r#"["Do"]"#, "[]", r#"["Do","Do"]"#, r#"["Do","H"]"#, "not json", r#"{"a":1}"#] {
            let filter = filter_with(Some(value));
            assert_eq!(filter.selected(), &SelectedNotes::default(), "value: {}", value);
        }
    }

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut filter = filter_with(None);

        assert!(filter.toggle(NaturalNote::Do));
        assert!(filter.contains(NaturalNote::Do));
        assert_eq!(filter.selected().len(), 3);

        assert!(filter.toggle(NaturalNote::Sol));
        assert!(!filter.contains(NaturalNote::Sol));
        assert_eq!(filter.selected().len(), 2);
    }

    #[test]
    fn test_toggle_never_goes_below_two() {
        let mut filter = filter_with(Some(r#"["Do","Re"]"#));

        assert!(!filter.toggle(NaturalNote::Do));
        assert!(!filter.toggle(NaturalNote::Re));
        assert_eq!(filter.selected().to_vec(), vec![NaturalNote::Do, NaturalNote::Re]);
    }

    #[test]
    fn test_noop_toggle_does_not_write() {
        let mut filter = filter_with(None);
        assert!(!filter.toggle(NaturalNote::La));
        assert_eq!(filter.store().get(KEY).unwrap(), None);
    }

    #[test]
    fn test_every_toggle_round_trips_through_store() {
        let mut filter = filter_with(None);
        let sequence = [
            NaturalNote::Mi,
            NaturalNote::Si,
            NaturalNote::Sol,
            NaturalNote::Mi,
            NaturalNote::Do,
            NaturalNote::La,
            NaturalNote::Si,
        ];

        for note in sequence {
            if filter.toggle(note) {
                assert_eq!(&persisted(&filter), filter.selected());
            }
            assert!(filter.selected().len() >= MIN_SELECTED);
        }
    }

    #[test]
    fn test_write_failure_keeps_selection() {
        let mut filter = NoteFilter::restore(ReadOnlyStore, KEY, SelectedNotes::default());
        assert!(filter.toggle(NaturalNote::Fa));
        assert!(filter.contains(NaturalNote::Fa));
    }

    #[test]
    fn test_selected_notes_requires_two_distinct() {
        assert!(SelectedNotes::new([NaturalNote::Do]).is_none());
        assert!(SelectedNotes::new([NaturalNote::Do, NaturalNote::Do]).is_none());
        assert!(SelectedNotes::new([NaturalNote::Do, NaturalNote::Re]).is_some());
    }
}
