//! Quiz state types
//!
//! These types describe where the quiz is and what the host has to do next.

use crate::note::NaturalNote;
use crate::positions::Position;
use serde::Serialize;

/// Mutable state of one quiz session
///
/// # Fields
/// - `current`: the position being asked about
/// - `result`: outcome of the last answer while its feedback is showing
/// - `input_locked`: answers are ignored while true
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizState {
    pub current: Option<Position>,
    pub result: Option<bool>,
    pub input_locked: bool,
}

impl QuizState {
    pub fn phase(&self) -> Phase {
        match (self.input_locked, self.result) {
            (true, Some(true)) => Phase::LockedCorrect,
            (true, Some(false)) => Phase::LockedIncorrect,
            _ => Phase::Ready,
        }
    }
}

/// Where the trainer is in its answer cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// A position is shown and answers are accepted
    Ready,
    /// The last answer was right; waiting for the next position
    LockedCorrect,
    /// The last answer was wrong; waiting for the next position
    LockedIncorrect,
}

/// Outcome of one answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub correct: bool,
    /// The note that was being asked for
    pub expected: NaturalNote,
}

impl Feedback {
    /// Overlay text shown while input is locked
    pub fn message(&self) -> String {
        if self.correct {
            "¡Correcto!".to_string()
        } else {
            format!("Incorrecto. Era {}", self.expected)
        }
    }
}

/// A pending move to the next position
///
/// The host runs a timer for `delay_ms` and then hands `ticket` back to
/// [`Trainer::advance`](super::Trainer::advance). Only the most recent
/// uncancelled ticket has any effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledAdvance {
    pub ticket: u64,
    pub delay_ms: u32,
}

/// Result of an accepted answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub feedback: Feedback,
    pub advance: ScheduledAdvance,
}
