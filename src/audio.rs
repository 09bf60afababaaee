use crate::constants::{
    TONE_DURATION_SEC, TONE_FREQ_MIN_HZ, TONE_FREQ_SPAN_HZ, TONE_GAIN_END, TONE_GAIN_START,
};
use rand::Rng;

/// One scheduled click tone: a sine blip with an exponential gain decay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickTone {
    pub frequency_hz: f32,
    pub start_sec: f64,
    pub stop_sec: f64,
    pub gain_start: f32,
    pub gain_end: f32,
}

impl ClickTone {
    /// Random-pitch tone starting at `now` (audio-context seconds).
    pub fn at<R: Rng + ?Sized>(rng: &mut R, now: f64) -> Self {
        Self {
            frequency_hz: rng.gen_range(TONE_FREQ_MIN_HZ..TONE_FREQ_MIN_HZ + TONE_FREQ_SPAN_HZ),
            start_sec: now,
            stop_sec: now + TONE_DURATION_SEC,
            gain_start: TONE_GAIN_START,
            gain_end: TONE_GAIN_END,
        }
    }
}

/// Audio sink able to play a [`ClickTone`] on its own clock.
pub trait ToneOutput {
    fn current_time(&self) -> f64;
    fn play(&self, tone: &ClickTone) -> anyhow::Result<()>;
}

/// Click sound player owning a lazily created audio output.
///
/// The output is created on the first click (browsers only allow audio after
/// a user gesture) and reused for every later click.
pub struct ClickSynth<C> {
    output: Option<C>,
}

impl<C> Default for ClickSynth<C> {
    fn default() -> Self {
        Self { output: None }
    }
}

impl<C: ToneOutput> ClickSynth<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_started(&self) -> bool {
        self.output.is_some()
    }

    /// Play one tone, creating the output with `create` if this is the first
    /// click. A failed creation is retried on the next click.
    pub fn click<R, F>(&mut self, rng: &mut R, create: F) -> anyhow::Result<ClickTone>
    where
        R: Rng + ?Sized,
        F: FnOnce() -> anyhow::Result<C>,
    {
        let output = match self.output.take() {
            Some(o) => o,
            None => create()?,
        };
        let output = self.output.insert(output);
        let tone = ClickTone::at(rng, output.current_time());
        output.play(&tone)?;
        Ok(tone)
    }
}

#[cfg(target_arch = "wasm32")]
mod web_output {
    use super::{ClickTone, ToneOutput};
    use web_sys as web;

    fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
        anyhow::anyhow!("{:?}", e)
    }

    impl ToneOutput for web::AudioContext {
        fn current_time(&self) -> f64 {
            web::BaseAudioContext::current_time(self)
        }

        // Fresh oscillator/gain pair per tone; the nodes are collected once stopped.
        fn play(&self, tone: &ClickTone) -> anyhow::Result<()> {
            let src = web::OscillatorNode::new(self).map_err(js_err)?;
            src.set_type(web::OscillatorType::Sine);
            src.frequency().set_value(tone.frequency_hz);
            let gain = web::GainNode::new(self).map_err(js_err)?;
            gain.gain()
                .set_value_at_time(tone.gain_start, tone.start_sec)
                .map_err(js_err)?;
            gain.gain()
                .exponential_ramp_to_value_at_time(tone.gain_end, tone.stop_sec)
                .map_err(js_err)?;
            src.connect_with_audio_node(&gain).map_err(js_err)?;
            gain.connect_with_audio_node(&self.destination())
                .map_err(js_err)?;
            src.start_with_when(tone.start_sec).map_err(js_err)?;
            src.stop_with_when(tone.stop_sec).map_err(js_err)?;
            Ok(())
        }
    }

    pub fn create_context() -> anyhow::Result<web::AudioContext> {
        let ctx = web::AudioContext::new()
            .map_err(|e| crate::error::FxError::Audio(format!("{:?}", e)))?;
        _ = ctx.resume();
        Ok(ctx)
    }
}

#[cfg(target_arch = "wasm32")]
pub use web_output::create_context;
