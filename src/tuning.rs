//! Open-string tuning of a six-string guitar.

use crate::note::{ChromaticNote, NaturalNote};

/// Number of strings on the fretboard
pub const STRING_COUNT: u8 = 6;

/// Open notes indexed by string number, string 1 is the highest pitch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tuning {
    open_notes: [ChromaticNote; STRING_COUNT as usize],
}

impl Tuning {
    pub fn new(open_notes: [ChromaticNote; STRING_COUNT as usize]) -> Self {
        Self { open_notes }
    }

    /// Standard EADGBE tuning, written from string 1 down: Mi Si Sol Re La Mi
    pub fn standard() -> Self {
        Self::new([
            NaturalNote::Mi.chromatic(),
            NaturalNote::Si.chromatic(),
            NaturalNote::Sol.chromatic(),
            NaturalNote::Re.chromatic(),
            NaturalNote::La.chromatic(),
            NaturalNote::Mi.chromatic(),
        ])
    }

    /// Open note of a string (1-indexed). `None` outside 1..=6.
    pub fn open_note(&self, string: u8) -> Option<ChromaticNote> {
        if !(1..=STRING_COUNT).contains(&string) {
            return None;
        }
        Some(self.open_notes[(string - 1) as usize])
    }

    /// Note sounded on `string` when pressed at `fret`
    pub fn note_at(&self, string: u8, fret: u8) -> Option<ChromaticNote> {
        self.open_note(string).map(|open| open.sharpen(fret as usize))
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::standard()
    }
}
