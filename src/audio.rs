//! Sound effects
//!
//! Three procedurally generated cues, no audio files needed. The browser
//! plays them through Web Audio; the native demo just logs them.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Character jumped
    Jump,
    /// Character hit an obstacle
    Hit,
    /// Score milestone
    Point,
}

impl SoundEffect {
    /// The cue (if any) a simulation event should play
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Jump => Some(SoundEffect::Jump),
            GameEvent::Collision => Some(SoundEffect::Hit),
            GameEvent::Milestone(_) => Some(SoundEffect::Point),
            _ => None,
        }
    }
}

/// Anything that can play cues. Playback failures are swallowed.
pub trait AudioSink {
    fn play(&self, effect: SoundEffect);
    fn set_muted(&mut self, muted: bool);
}

/// Sink for hosts without audio output
#[derive(Debug, Default)]
pub struct LogAudio {
    muted: bool,
}

impl LogAudio {
    pub fn new(muted: bool) -> Self {
        Self { muted }
    }
}

impl AudioSink for LogAudio {
    fn play(&self, effect: SoundEffect) {
        if !self.muted {
            log::debug!("♪ {:?}", effect);
        }
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{AudioSink, SoundEffect};

    /// Audio manager for the game
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        volume: f32,
        muted: bool,
    }

    impl AudioManager {
        pub fn new(muted: bool) -> Self {
            // May fail outside a secure context
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                volume: 1.0,
                muted,
            }
        }

        /// Resume the audio context (browsers require a user gesture first)
        pub fn resume(&self) {
            if self.muted {
                return;
            }
            if let Some(ctx) = &self.ctx {
                if ctx.state() == web_sys::AudioContextState::Suspended {
                    let _ = ctx.resume();
                }
            }
        }

        fn effective_volume(&self) -> f32 {
            if self.muted { 0.0 } else { self.volume }
        }

        /// Create an oscillator routed through a gain node
        fn create_osc(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Short attack to `peak`, exponential decay over `decay` seconds
        fn blip(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
            peak: f32,
            decay: f64,
        ) {
            let Some((osc, gain)) = self.create_osc(ctx, freq, osc_type) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(0.0, t).ok();
            gain.gain().linear_ramp_to_value_at_time(peak, t + 0.01).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.001, t + decay)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + decay + 0.05).ok();
        }
    }

    impl AudioSink for AudioManager {
        fn play(&self, effect: SoundEffect) {
            let vol = self.effective_volume();
            if vol <= 0.0 {
                return;
            }
            let Some(ctx) = &self.ctx else { return };
            self.resume();

            match effect {
                // Bright sine chirp
                SoundEffect::Jump => self.blip(ctx, 600.0, OscillatorType::Sine, vol * 0.18, 0.25),
                // Low triangle thud
                SoundEffect::Hit => {
                    self.blip(ctx, 150.0, OscillatorType::Triangle, vol * 0.2, 0.5)
                }
                // High sine ping
                SoundEffect::Point => {
                    self.blip(ctx, 900.0, OscillatorType::Sine, vol * 0.12, 0.15)
                }
            }
        }

        fn set_muted(&mut self, muted: bool) {
            self.muted = muted;
            self.resume();
        }
    }
}
