//! # Position Table
//!
//! Every fretboard position the trainer can ask about.
//!
//! The table is built once from a [`Tuning`]: for each string 1..=6 and each
//! fret 0..=12, the note is `chromatic[(open_index + fret) mod 12]`, and the
//! position is kept only when that note is natural. The result is ordered by
//! string, then fret.
//!
//! ## Example
//! ```rust
//! use fretnote::{NaturalNote, Position, PositionTable};
//!
//! let table = PositionTable::standard();
//! assert!(table.positions().contains(&Position { string: 6, fret: 3, note: NaturalNote::Sol }));
//! ```
//!
//! Building is deterministic and cheap, so the table is not cached anywhere;
//! the trainer simply owns one.

use crate::filter::SelectedNotes;
use crate::note::NaturalNote;
use crate::tuning::{Tuning, STRING_COUNT};
use serde::Serialize;

/// Highest fret included in the quiz
pub const MAX_QUIZ_FRET: u8 = 12;

/// A natural note at a string and fret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub string: u8,
    pub fret: u8,
    pub note: NaturalNote,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PositionTable {
    positions: Vec<Position>,
}

impl PositionTable {
    /// Build the table of natural positions for a tuning
    pub fn build(tuning: &Tuning) -> Self {
        let mut positions = Vec::new();

        for string in 1..=STRING_COUNT {
            for fret in 0..=MAX_QUIZ_FRET {
                let natural = tuning
                    .note_at(string, fret)
                    .and_then(|note| note.natural());
                if let Some(note) = natural {
                    positions.push(Position { string, fret, note });
                }
            }
        }

        log::debug!("built position table with {} natural positions", positions.len());
        Self { positions }
    }

    /// Table for standard tuning
    pub fn standard() -> Self {
        Self::build(&Tuning::standard())
    }

    /// Table made of explicit positions, kept in the given order
    pub fn from_positions(positions: Vec<Position>) -> Self {
        Self { positions }
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.positions.iter()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positions whose note is selected, in table order
    pub fn filtered(&self, selected: &SelectedNotes) -> Vec<Position> {
        self.positions
            .iter()
            .filter(|position| selected.contains(position.note))
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::ChromaticNote;

    #[test]
    fn test_table_matches_formula() {
        let tuning = Tuning::standard();
        let table = PositionTable::build(&tuning);

        for string in 1..=6u8 {
            let open = tuning.open_note(string).unwrap().index();
            for fret in 0..=12u8 {
                let expected = ChromaticNote::from_index((open + fret as usize) % 12);
                let found = table
                    .iter()
                    .find(|p| p.string == string && p.fret == fret);
                match expected.natural() {
                    Some(note) => assert_eq!(found.map(|p| p.note), Some(note)),
                    None => assert!(found.is_none(), "{} is not natural", expected),
                }
            }
        }
    }

    #[test]
    fn test_table_size() {
        // 13 frets per string, 7 of every 12 semitones are natural.
        // Each string covers one full octave plus its open note again at fret 12.
        let table = PositionTable::standard();
        assert_eq!(table.len(), 6 * 8);
    }

    #[test]
    fn test_table_order_is_string_then_fret() {
        let table = PositionTable::standard();
        let keys: Vec<(u8, u8)> = table.iter().map(|p| (p.string, p.fret)).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
        assert_eq!(
            table.positions()[0],
            Position { string: 1, fret: 0, note: NaturalNote::Mi }
        );
    }

    #[test]
    fn test_sixth_string_third_fret_is_sol() {
        let table = PositionTable::standard();
        assert!(table
            .positions()
            .contains(&Position { string: 6, fret: 3, note: NaturalNote::Sol }));
    }

    #[test]
    fn test_filtered_keeps_only_selected() {
        let table = PositionTable::standard();
        let selected = SelectedNotes::new([NaturalNote::Sol, NaturalNote::La]).unwrap();
        let filtered = table.filtered(&selected);

        assert!(!filtered.is_empty());
        assert!(filtered
            .iter()
            .all(|p| p.note == NaturalNote::Sol || p.note == NaturalNote::La));
        let expected = table
            .iter()
            .filter(|p| p.note == NaturalNote::Sol || p.note == NaturalNote::La)
            .count();
        assert_eq!(filtered.len(), expected);
    }

    #[test]
    fn test_from_positions_keeps_order() {
        let positions = vec![
            Position { string: 2, fret: 1, note: NaturalNote::Do },
            Position { string: 1, fret: 0, note: NaturalNote::Mi },
        ];
        let table = PositionTable::from_positions(positions.clone());
        assert_eq!(table.positions(), positions.as_slice());
        assert!(PositionTable::from_positions(Vec::new()).is_empty());
    }
}
