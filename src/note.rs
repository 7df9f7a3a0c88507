//! # Note Alphabets
//!
//! Solfège note names used by the trainer.
//!
//! ## Chromatic alphabet
//! Twelve semitones starting at Do, sharps only:
//! ```text
//! 0=Do 1=Do# 2=Re 3=Re# 4=Mi 5=Fa 6=Fa# 7=Sol 8=Sol# 9=La 10=La# 11=Si
//! ```
//!
//! ## Natural notes
//! The seven notes without an accidental. These are the only notes the
//! trainer ever asks about, and the only ones the filter can select.

use crate::error::FretnoteError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of semitones in an octave
pub const SEMITONES: u8 = 12;

/// One of the twelve chromatic notes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChromaticNote(u8);

impl ChromaticNote {
    pub const NAMES: [&'static str; 12] = [
        "Do", "Do#", "Re", "Re#", "Mi", "Fa", "Fa#", "Sol", "Sol#", "La", "La#", "Si",
    ];

    /// Build from any semitone index, wrapping around the octave
    pub fn from_index(index: usize) -> Self {
        Self((index % SEMITONES as usize) as u8)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn name(self) -> &'static str {
        Self::NAMES[self.index()]
    }

    /// Move up by `semitones`, wrapping at the octave
    pub fn sharpen(self, semitones: usize) -> Self {
        Self::from_index(self.index() + semitones)
    }

    /// The natural note with this pitch, if it has no accidental
    pub fn natural(self) -> Option<NaturalNote> {
        NaturalNote::ALL
            .iter()
            .copied()
            .find(|natural| natural.chromatic() == self)
    }

    pub fn is_natural(self) -> bool {
        self.natural().is_some()
    }
}

impl fmt::Display for ChromaticNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChromaticNote {
    type Err = FretnoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::NAMES
            .iter()
            .position(|name| *name == s)
            .map(Self::from_index)
            .ok_or_else(|| FretnoteError::UnknownNote(s.to_string()))
    }
}

/// A note without sharp or flat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NaturalNote {
    Do,
    Re,
    Mi,
    Fa,
    Sol,
    La,
    Si,
}

impl NaturalNote {
    /// All natural notes in ascending order
    pub const ALL: [NaturalNote; 7] = [
        NaturalNote::Do,
        NaturalNote::Re,
        NaturalNote::Mi,
        NaturalNote::Fa,
        NaturalNote::Sol,
        NaturalNote::La,
        NaturalNote::Si,
    ];

    pub fn chromatic(self) -> ChromaticNote {
        let index = match self {
            NaturalNote::Do => 0,
            NaturalNote::Re => 2,
            NaturalNote::Mi => 4,
            NaturalNote::Fa => 5,
            NaturalNote::Sol => 7,
            NaturalNote::La => 9,
            NaturalNote::Si => 11,
        };
        ChromaticNote::from_index(index)
    }

    pub fn name(self) -> &'static str {
        self.chromatic().name()
    }
}

impl fmt::Display for NaturalNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NaturalNote {
    type Err = FretnoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaturalNote::ALL
            .iter()
            .copied()
            .find(|note| note.name() == s)
            .ok_or_else(|| FretnoteError::UnknownNote(s.to_string()))
    }
}
