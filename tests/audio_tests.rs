// Host-side tests for click-tone scheduling with a mock audio output.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod audio {
    include!("../src/audio.rs");
}

use audio::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Records every scheduled tone; its clock advances one second per tone.
struct MockOutput {
    now: Cell<f64>,
    played: Rc<RefCell<Vec<ClickTone>>>,
}

impl ToneOutput for MockOutput {
    fn current_time(&self) -> f64 {
        self.now.get()
    }

    fn play(&self, tone: &ClickTone) -> anyhow::Result<()> {
        self.played.borrow_mut().push(*tone);
        self.now.set(self.now.get() + 1.0);
        Ok(())
    }
}

#[test]
fn context_is_created_once_across_clicks() {
    let mut synth: ClickSynth<MockOutput> = ClickSynth::new();
    let played = Rc::new(RefCell::new(Vec::new()));
    let created = Cell::new(0u32);
    let mut rng = StdRng::seed_from_u64(3);
    assert!(!synth.is_started());

    for _ in 0..25 {
        synth
            .click(&mut rng, || {
                created.set(created.get() + 1);
                Ok(MockOutput {
                    now: Cell::new(10.0),
                    played: played.clone(),
                })
            })
            .unwrap();
    }

    assert!(synth.is_started());
    assert_eq!(created.get(), 1);
    assert_eq!(played.borrow().len(), 25);
}

#[test]
fn each_click_schedules_one_short_decaying_tone() {
    let mut synth: ClickSynth<MockOutput> = ClickSynth::new();
    let played = Rc::new(RefCell::new(Vec::new()));
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..200 {
        let tone = synth
            .click(&mut rng, || {
                Ok(MockOutput {
                    now: Cell::new(0.5),
                    played: played.clone(),
                })
            })
            .unwrap();
        assert!(tone.frequency_hz >= 200.0 && tone.frequency_hz < 800.0);
        assert!((tone.stop_sec - tone.start_sec - 0.2).abs() < 1e-9);
        assert_eq!(tone.gain_start, 0.3);
        assert_eq!(tone.gain_end, 0.01);
    }

    let played = played.borrow();
    assert_eq!(played[0].start_sec, 0.5);
    assert_eq!(played[1].start_sec, 1.5);
}

#[test]
fn failed_creation_is_retried_on_next_click() {
    let mut synth: ClickSynth<MockOutput> = ClickSynth::new();
    let played = Rc::new(RefCell::new(Vec::new()));
    let mut rng = StdRng::seed_from_u64(5);

    let err = synth.click(&mut rng, || Err(anyhow::anyhow!("audio blocked")));
    assert!(err.is_err());
    assert!(!synth.is_started());
    assert!(played.borrow().is_empty());

    synth
        .click(&mut rng, || {
            Ok(MockOutput {
                now: Cell::new(0.0),
                played: played.clone(),
            })
        })
        .unwrap();
    assert!(synth.is_started());
    assert_eq!(played.borrow().len(), 1);
}

#[test]
fn tone_starts_at_output_clock() {
    let mut rng = StdRng::seed_from_u64(1);
    let tone = ClickTone::at(&mut rng, 42.0);
    assert_eq!(tone.start_sec, 42.0);
    assert!((tone.stop_sec - 42.2).abs() < 1e-9);
}
