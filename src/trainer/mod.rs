//! # Trainer Controller
//!
//! Owns the note filter and the quiz state, and decides which position is
//! asked next.
//!
//! ## State machine
//! ```text
//!              submit_answer (right)
//!   Ready ─────────────────────────────▶ LockedCorrect ──┐
//!     ▲  │     submit_answer (wrong)                      │ advance(ticket)
//!     │  └─────────────────────────────▶ LockedIncorrect ─┤ after delay_ms
//!     │                                                   │
//!     └───────────────────────────────────────────────────┘
//!
//!   any state ── toggle_note (selection changed) ──▶ Ready (new position)
//! ```
//!
//! ## Timer tickets
//! The trainer never sleeps. An accepted answer returns a
//! [`ScheduledAdvance`]; the host waits `delay_ms` and calls
//! [`Trainer::advance`] with its ticket. Changing the selection or calling
//! [`Trainer::cancel_pending`] invalidates the ticket, so a timer that fires
//! late cannot replace a position the user is already looking at.
//!
//! ## Example
//! ```rust
//! use fretnote::{MemoryStore, Trainer, TrainerConfig};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut trainer = Trainer::new(MemoryStore::new(), StdRng::seed_from_u64(7), TrainerConfig::default())?;
//! let expected = trainer.current().unwrap().note;
//!
//! let submission = trainer.submit_answer(expected.name()).unwrap();
//! assert!(submission.feedback.correct);
//! assert!(trainer.submit_answer("Do").is_none()); // locked
//!
//! trainer.advance(submission.advance.ticket)?;
//! assert!(!trainer.quiz().input_locked);
//! # Ok::<(), fretnote::FretnoteError>(())
//! ```

mod state;


pub use state::{Feedback, Phase, QuizState, ScheduledAdvance, Submission};

use crate::config::TrainerConfig;
use crate::error::FretnoteError;
use crate::filter::{NoteFilter, SelectedNotes};
use crate::fretboard::{CanvasSize, FretboardView};
use crate::note::NaturalNote;
use crate::positions::{Position, PositionTable};
use crate::storage::Store;
use rand::Rng;

pub struct Trainer<S: Store, R: Rng> {
    table: PositionTable,
    filter: NoteFilter<S>,
    quiz: QuizState,
    rng: R,
    config: TrainerConfig,
    pending: Option<ScheduledAdvance>,
    next_ticket: u64,
}

impl<S: Store, R: Rng> Trainer<S, R> {
    /// Restore the selection from `store` and pick the first position
    pub fn new(store: S, rng: R, config: TrainerConfig) -> Result<Self, FretnoteError> {
        Self::with_table(PositionTable::standard(), store, rng, config)
    }

    /// Like [`Trainer::new`], asking positions from `table` instead of the
    /// standard-tuning table
    pub fn with_table(
        table: PositionTable,
        store: S,
        rng: R,
        config: TrainerConfig,
    ) -> Result<Self, FretnoteError> {
        let filter = NoteFilter::restore(store, config.storage_key.clone(), config.default_notes.clone());

        let mut trainer = Self {
            table,
            filter,
            quiz: QuizState::default(),
            rng,
            config,
            pending: None,
            next_ticket: 0,
        };
        trainer.reset_round()?;
        Ok(trainer)
    }

    pub fn current(&self) -> Option<&Position> {
        self.quiz.current.as_ref()
    }

    pub fn quiz(&self) -> &QuizState {
        &self.quiz
    }

    pub fn phase(&self) -> Phase {
        self.quiz.phase()
    }

    pub fn selected_notes(&self) -> &SelectedNotes {
        self.filter.selected()
    }

    pub fn pending(&self) -> Option<ScheduledAdvance> {
        self.pending
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    pub fn table(&self) -> &PositionTable {
        &self.table
    }

    pub fn store(&self) -> &S {
        self.filter.store()
    }

    /// Positions that can currently be asked
    pub fn filtered_positions(&self) -> Vec<Position> {
        self.table.filtered(self.filter.selected())
    }

    /// Outcome of the answer whose feedback is showing, if any
    pub fn feedback(&self) -> Option<Feedback> {
        match (self.quiz.result, self.quiz.current) {
            (Some(correct), Some(current)) => Some(Feedback {
                correct,
                expected: current.note,
            }),
            _ => None,
        }
    }

    /// Toggle a note in the filter.
    ///
    /// When the selection changes, any pending advance is cancelled and a new
    /// position is drawn from the updated selection straight away. Returns
    /// whether the selection changed.
    ///
    /// # Errors
    /// [`FretnoteError::EmptyPool`] if no position matches the new selection.
    pub fn toggle_note(&mut self, note: NaturalNote) -> Result<bool, FretnoteError> {
        if !self.filter.toggle(note) {
            return Ok(false);
        }
        self.cancel_pending();
        self.reset_round()?;
        Ok(true)
    }

    /// Answer the current position.
    ///
    /// The answer is right when it is exactly the name of the current note.
    /// Returns `None`, changing nothing, while input is locked or when there
    /// is no current position.
    pub fn submit_answer(&mut self, answer: &str) -> Option<Submission> {
        if self.quiz.input_locked {
            log::debug!("ignoring answer {:?} while locked", answer);
            return None;
        }
        let current = self.quiz.current?;

        let feedback = Feedback {
            correct: answer == current.note.name(),
            expected: current.note,
        };
        self.quiz.result = Some(feedback.correct);
        self.quiz.input_locked = true;

        self.next_ticket += 1;
        let advance = ScheduledAdvance {
            ticket: self.next_ticket,
            delay_ms: self.config.feedback_delay_ms,
        };
        self.pending = Some(advance);

        log::debug!(
            "answer {:?} for string {} fret {}: {}",
            answer,
            current.string,
            current.fret,
            if feedback.correct { "correct" } else { "incorrect" }
        );
        Some(Submission { feedback, advance })
    }

    /// Finish the feedback window started by the answer that issued `ticket`.
    ///
    /// Returns `Ok(false)` without changing anything when the ticket was
    /// cancelled or superseded.
    pub fn advance(&mut self, ticket: u64) -> Result<bool, FretnoteError> {
        match self.pending {
            Some(pending) if pending.ticket == ticket => {}
            _ => {
                log::debug!("ignoring stale advance ticket {}", ticket);
                return Ok(false);
            }
        }
        self.reset_round()?;
        Ok(true)
    }

    /// Forget the pending advance, if any
    pub fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            log::debug!("cancelled advance ticket {}", pending.ticket);
        }
    }

    /// Snapshot for the fretboard renderer
    pub fn view(&self, canvas: CanvasSize) -> FretboardView {
        FretboardView::new(self.quiz.current.map(|p| (p.string, p.fret)), canvas)
    }

    /// Back to Ready with a freshly drawn position
    fn reset_round(&mut self) -> Result<(), FretnoteError> {
        self.pending = None;
        self.quiz.result = None;
        self.quiz.input_locked = false;

        match self.draw_position() {
            Ok(position) => {
                self.quiz.current = Some(position);
                Ok(())
            }
            Err(e) => {
                self.quiz.current = None;
                Err(e)
            }
        }
    }

    /// Uniformly random position from the filtered table
    fn draw_position(&mut self) -> Result<Position, FretnoteError> {
        let pool = self.filtered_positions();
        if pool.is_empty() {
            return Err(FretnoteError::EmptyPool);
        }

        let position = pool[self.rng.gen_range(0..pool.len())];
        log::debug!(
            "asking string {} fret {} ({} candidates)",
            position.string,
            position.fret,
            pool.len()
        );
        Ok(position)
    }
}
