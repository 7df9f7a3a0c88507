//! Integration tests for the fretnote trainer
//!
//! Drives a whole session the way a host would: restore, answer, wait out the
//! feedback window, change the filter, and render each frame.

use fretnote::fretboard::{render_fretboard, CanvasSize, Point, Surface};
use fretnote::{
    MemoryStore, NaturalNote, Phase, Position, PositionTable, SelectedNotes, Store, Trainer,
    TrainerConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Counts highlight markers, the only circles drawn in a highlight color
#[derive(Default)]
struct HighlightCounter {
    clears: usize,
    highlights: Vec<Point>,
}

impl Surface for HighlightCounter {
    fn clear(&mut self, _width: f64, _height: f64) {
        self.clears += 1;
        self.highlights.clear();
    }

    fn fill_rect(&mut self, _origin: Point, _width: f64, _height: f64, _color: &str) {}

    fn stroke_line(&mut self, _from: Point, _to: Point, _width: f64, _color: &str) {}

    fn fill_circle(&mut self, center: Point, _radius: f64, color: &str) {
        if color != "white" {
            self.highlights.push(center);
        }
    }
}

#[test]
fn test_sixth_string_third_fret_is_sol() {
    let table = PositionTable::standard();
    assert!(table.positions().contains(&Position {
        string: 6,
        fret: 3,
        note: NaturalNote::Sol,
    }));
}

#[test]
fn test_cold_start_selects_sol_and_la() {
    init_logging();
    let trainer = Trainer::new(MemoryStore::new(), StdRng::seed_from_u64(3), TrainerConfig::default())
        .unwrap();
    assert_eq!(
        trainer.selected_notes(),
        &SelectedNotes::new([NaturalNote::Sol, NaturalNote::La]).unwrap()
    );
}

#[test]
fn test_full_session() {
    init_logging();
    let mut store = MemoryStore::new();
    let canvas = CanvasSize::for_container(1200.0, 500.0);
    let mut surface = HighlightCounter::default();

    {
        let mut trainer = Trainer::new(&mut store, StdRng::seed_from_u64(11), TrainerConfig::default())
            .unwrap();
        render_fretboard(&mut surface, &trainer.view(canvas));
        assert_eq!(surface.highlights.len(), 1);

        for round in 0..20 {
            let expected = trainer.current().unwrap().note;
            let answer = if round % 2 == 0 { expected.name() } else { "Fa#" };

            let submission = trainer.submit_answer(answer).unwrap();
            assert_eq!(submission.feedback.correct, round % 2 == 0);
            assert_eq!(
                trainer.phase(),
                if round % 2 == 0 { Phase::LockedCorrect } else { Phase::LockedIncorrect }
            );

            // Clicking again during the feedback window does nothing
            assert!(trainer.submit_answer(expected.name()).is_none());

            assert!(trainer.advance(submission.advance.ticket).unwrap());
            render_fretboard(&mut surface, &trainer.view(canvas));
            assert_eq!(surface.highlights.len(), 1);
        }

        trainer.toggle_note(NaturalNote::Do).unwrap();
        trainer.toggle_note(NaturalNote::Sol).unwrap();
        assert!(trainer
            .filtered_positions()
            .contains(trainer.current().unwrap()));
        assert_eq!(surface.clears, 21);
    }

    // A new session picks up where the last one left the filter
    let persisted = store.get("selectedNotes").unwrap().unwrap();
    assert_eq!(persisted, r#"["Do","La"]"#);

    let trainer = Trainer::new(store, StdRng::seed_from_u64(12), TrainerConfig::default()).unwrap();
    assert_eq!(
        trainer.selected_notes().to_vec(),
        vec![NaturalNote::Do, NaturalNote::La]
    );
}

#[test]
fn test_filter_floor_of_two() {
    init_logging();
    let store = MemoryStore::with_entry("selectedNotes", r#"["Do","Re"]"#);
    let mut trainer = Trainer::new(store, StdRng::seed_from_u64(5), TrainerConfig::default()).unwrap();

    assert!(!trainer.toggle_note(NaturalNote::Do).unwrap());
    assert_eq!(trainer.selected_notes().len(), 2);
    assert!(trainer.selected_notes().contains(NaturalNote::Do));
}

#[test]
fn test_short_persisted_selection_falls_back() {
    init_logging();
    let store = MemoryStore::with_entry("selectedNotes", r#"["Do"]"#);
    let trainer = Trainer::new(store, StdRng::seed_from_u64(5), TrainerConfig::default()).unwrap();
    assert_eq!(
        trainer.selected_notes().to_vec(),
        vec![NaturalNote::Sol, NaturalNote::La]
    );
}

#[test]
fn test_configured_storage_key_and_defaults() {
    init_logging();
    let config = TrainerConfig::from_yaml("storage-key: trainer.notes\ndefault-notes: [Mi, Si]").unwrap();
    let mut trainer = Trainer::new(MemoryStore::new(), StdRng::seed_from_u64(9), config).unwrap();
    assert_eq!(
        trainer.selected_notes().to_vec(),
        vec![NaturalNote::Mi, NaturalNote::Si]
    );

    trainer.toggle_note(NaturalNote::Re).unwrap();
    assert!(trainer.store().get("trainer.notes").unwrap().is_some());
    assert!(trainer.store().get("selectedNotes").unwrap().is_none());
}
