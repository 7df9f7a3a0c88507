//! # Fretnote
//!
//! A fretboard note trainer: the user is shown a position on a guitar neck
//! and names the natural note played there.
//!
//! ## Pieces
//! - [`positions`] - every natural note position on frets 0-12 of six strings
//! - [`filter`] - which notes are in play, persisted through a [`Store`]
//! - [`trainer`] - quiz state, random selection and answer checking
//! - [`fretboard`] - stateless rendering onto a [`fretboard::Surface`]
//!
//! ## Example
//! ```rust
//! use fretnote::{MemoryStore, NaturalNote, Trainer, TrainerConfig};
//!
//! let mut trainer = Trainer::new(MemoryStore::new(), rand::thread_rng(), TrainerConfig::default())?;
//! trainer.toggle_note(NaturalNote::Do)?;
//! assert!(trainer.selected_notes().contains(NaturalNote::Do));
//! # Ok::<(), fretnote::FretnoteError>(())
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod fretboard;
pub mod note;
pub mod positions;
pub mod storage;
pub mod trainer;
pub mod tuning;

pub use config::TrainerConfig;
pub use error::*;
pub use filter::{NoteFilter, SelectedNotes};
pub use fretboard::render_fretboard;
pub use note::{ChromaticNote, NaturalNote};
pub use positions::{Position, PositionTable};
pub use storage::{MemoryStore, Store};
pub use trainer::{Feedback, Phase, QuizState, ScheduledAdvance, Submission, Trainer};
pub use tuning::Tuning;
