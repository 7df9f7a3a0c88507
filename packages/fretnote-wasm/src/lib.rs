use fretnote::fretboard::{render_fretboard, CanvasSize};
use fretnote::{
    FretnoteError, NaturalNote, Phase, Position, PositionTable, QuizState, ScheduledAdvance,
    SelectedNotes, Trainer, TrainerConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

mod canvas;
mod storage;
mod timer;

use canvas::CanvasSurface;
use storage::BrowserStore;
use timer::Timeout;

#[derive(Serialize)]
struct TrainerError {
    kind: &'static str,
    message: String,
}

fn to_js_error(e: FretnoteError) -> JsValue {
    let kind = match e {
        FretnoteError::ConfigError(_) => "config",
        FretnoteError::StorageError(_) => "storage",
        FretnoteError::UnknownNote(_) => "unknownNote",
        FretnoteError::EmptyPool => "emptyPool",
    };
    let error = TrainerError {
        kind,
        message: e.to_string(),
    };
    JsValue::from_str(&serde_json::to_string(&error).unwrap_or(error.message))
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(JsValue::from)
}

/// Everything a UI needs to draw the panels and the feedback overlay
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StateSnapshot<'a> {
    current: Option<Position>,
    result: Option<bool>,
    input_locked: bool,
    phase: Phase,
    selected_notes: &'a SelectedNotes,
    feedback_message: Option<String>,
    pending: Option<ScheduledAdvance>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnswerResult {
    correct: bool,
    expected: NaturalNote,
    message: String,
}

struct Session {
    trainer: Trainer<BrowserStore, StdRng>,
    canvas: Option<HtmlCanvasElement>,
    canvas_size: CanvasSize,
    timeout: Option<Timeout>,
    on_change: Option<js_sys::Function>,
}

impl Session {
    fn snapshot(&self) -> StateSnapshot<'_> {
        let QuizState {
            current,
            result,
            input_locked,
        } = *self.trainer.quiz();
        StateSnapshot {
            current,
            result,
            input_locked,
            phase: self.trainer.phase(),
            selected_notes: self.trainer.selected_notes(),
            feedback_message: self.trainer.feedback().map(|feedback| feedback.message()),
            pending: self.trainer.pending(),
        }
    }

    fn render(&self) {
        let Some(canvas) = &self.canvas else {
            return;
        };
        let Some(mut surface) = CanvasSurface::for_canvas(canvas) else {
            log::debug!("canvas has no 2d context, skipping render");
            return;
        };
        render_fretboard(&mut surface, &self.trainer.view(self.canvas_size));
    }

    fn resize_canvas(&mut self) {
        if let Some(canvas) = &self.canvas {
            canvas.set_width(self.canvas_size.width.round() as u32);
            canvas.set_height(self.canvas_size.height.round() as u32);
        }
    }
}

/// Call the change listener outside of any borrow, so it may read state back
fn notify(session: &Rc<RefCell<Session>>) {
    let callback = session.borrow().on_change.clone();
    if let Some(callback) = callback {
        if let Err(e) = callback.call0(&JsValue::NULL) {
            log::warn!("change listener threw: {:?}", e);
        }
    }
}

/// Timer callback: end the feedback window for `ticket`
fn finish_feedback(session: &Weak<RefCell<Session>>, ticket: u64) {
    let Some(session) = session.upgrade() else {
        return;
    };

    let advanced = {
        let mut inner = session.borrow_mut();
        let advanced = inner.trainer.advance(ticket);
        if let Ok(true) = advanced {
            inner.render();
        }
        advanced
    };

    match advanced {
        Ok(true) => notify(&session),
        Ok(false) => {}
        Err(e) => log::warn!("could not pick the next position: {}", e),
    }
}

/// Fretboard note trainer bound to `localStorage`, a timer and a canvas
#[wasm_bindgen]
pub struct FretnoteTrainer {
    session: Rc<RefCell<Session>>,
}

#[wasm_bindgen]
impl FretnoteTrainer {
    /// Create a trainer. `config` is an optional YAML or JSON document.
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<String>) -> Result<FretnoteTrainer, JsValue> {
        let config = match config.as_deref() {
            Some(content) => TrainerConfig::from_yaml(content).map_err(to_js_error)?,
            None => TrainerConfig::default(),
        };
        let canvas_size = CanvasSize::for_container(0.0, config.min_canvas_width);

        let trainer = Trainer::new(BrowserStore::open(), StdRng::from_entropy(), config)
            .map_err(to_js_error)?;

        Ok(FretnoteTrainer {
            session: Rc::new(RefCell::new(Session {
                trainer,
                canvas: None,
                canvas_size,
                timeout: None,
                on_change: None,
            })),
        })
    }

    /// Current state as a plain object
    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_js(&self.session.borrow().snapshot())
    }

    /// Toggle a note in the filter. Returns whether the selection changed.
    #[wasm_bindgen(js_name = toggleNote)]
    pub fn toggle_note(&self, name: &str) -> Result<bool, JsValue> {
        let note: NaturalNote = name.parse().map_err(to_js_error)?;

        let toggled = {
            let mut session = self.session.borrow_mut();
            let toggled = session.trainer.toggle_note(note);
            // Any outcome but an unchanged selection has cancelled the trainer's ticket
            if !matches!(toggled, Ok(false)) {
                session.timeout = None;
                session.render();
            }
            toggled
        };

        if !matches!(toggled, Ok(false)) {
            notify(&self.session);
        }
        toggled.map_err(to_js_error)
    }

    /// Whether a feedback timer is still waiting to fire
    #[wasm_bindgen(js_name = hasScheduledAdvance)]
    pub fn has_scheduled_advance(&self) -> bool {
        self.session.borrow().timeout.is_some()
    }

    /// Answer the shown position. Returns `null` while input is locked,
    /// otherwise `{ correct, expected, message }`.
    #[wasm_bindgen(js_name = submitAnswer)]
    pub fn submit_answer(&self, name: &str) -> Result<JsValue, JsValue> {
        let submission = self.session.borrow_mut().trainer.submit_answer(name);
        let Some(submission) = submission else {
            return Ok(JsValue::NULL);
        };

        let weak = Rc::downgrade(&self.session);
        let ticket = submission.advance.ticket;
        match Timeout::new(submission.advance.delay_ms, move || finish_feedback(&weak, ticket)) {
            Ok(timeout) => self.session.borrow_mut().timeout = Some(timeout),
            Err(e) => {
                // Without a timer the quiz would stay locked
                log::warn!("could not schedule the next position: {:?}", e);
                finish_feedback(&Rc::downgrade(&self.session), ticket);
            }
        }
        notify(&self.session);

        to_js(&AnswerResult {
            correct: submission.feedback.correct,
            expected: submission.feedback.expected,
            message: submission.feedback.message(),
        })
    }

    /// Called with no arguments after every state change
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&self, callback: js_sys::Function) {
        self.session.borrow_mut().on_change = Some(callback);
    }

    #[wasm_bindgen(js_name = attachCanvas)]
    pub fn attach_canvas(&self, canvas: HtmlCanvasElement) {
        let mut session = self.session.borrow_mut();
        session.canvas = Some(canvas);
        session.resize_canvas();
        session.render();
    }

    /// Fit the canvas to its container and redraw
    pub fn resize(&self, container_width: f64) {
        let mut session = self.session.borrow_mut();
        let min_width = session.trainer.config().min_canvas_width;
        session.canvas_size = CanvasSize::for_container(container_width, min_width);
        session.resize_canvas();
        session.render();
    }

    pub fn render(&self) {
        self.session.borrow().render();
    }

    /// Stop the pending timer and release the canvas and listener
    pub fn dispose(&self) {
        let mut session = self.session.borrow_mut();
        session.trainer.cancel_pending();
        session.timeout = None;
        session.on_change = None;
        session.canvas = None;
    }
}

/// Names of the seven natural notes, for the filter and answer panels
#[wasm_bindgen(js_name = naturalNotes)]
pub fn natural_notes() -> Result<JsValue, JsValue> {
    to_js(&NaturalNote::ALL)
}

/// Every natural note position on the quiz frets
#[wasm_bindgen(js_name = positionTable)]
pub fn position_table() -> Result<JsValue, JsValue> {
    to_js(PositionTable::standard().positions())
}

#[wasm_bindgen(start)]
pub fn start() {
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("logger already installed");
    }
}
