use rand::Rng;
use serde::Serialize;
use std::time::Duration;

pub const START_GAIN: f64 = 0.3;
pub const END_GAIN: f64 = 0.01;
pub const HOME_TONE_DURATION: Duration = Duration::from_millis(1000);
pub const MAP_TONE_DURATION: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

impl Waveform {
    /// Value at `phase` in `[0, 1)`. Every shape starts at zero (square at +1)
    /// and peaks at a quarter period.
    pub fn sample(self, phase: f64) -> f64 {
        let phase = phase.rem_euclid(1.0);
        match self {
            Waveform::Sine => (std::f64::consts::TAU * phase).sin(),
            Waveform::Square => {
                if phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Sawtooth => 2.0 * (phase + 0.5).rem_euclid(1.0) - 1.0,
            Waveform::Triangle => 4.0 * ((phase + 0.75).rem_euclid(1.0) - 0.5).abs() - 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ToneSpec {
    pub waveform: Waveform,
    pub frequency_hz: f64,
    pub start_gain: f64,
    pub end_gain: f64,
    #[serde(serialize_with = "serialize_secs")]
    pub duration: Duration,
}

fn serialize_secs<S: serde::Serializer>(duration: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(duration.as_secs_f64())
}

impl ToneSpec {
    /// Genre-specific tone of the home cards.
    pub fn for_genre(genre: &str) -> Self {
        let (waveform, frequency_hz) = match genre {
            "Techno" => (Waveform::Sawtooth, 130.0),
            "House" => (Waveform::Sine, 220.0),
            "Disco" => (Waveform::Triangle, 330.0),
            _ => (Waveform::Square, 200.0),
        };
        Self {
            waveform,
            frequency_hz,
            start_gain: START_GAIN,
            end_gain: END_GAIN,
            duration: HOME_TONE_DURATION,
        }
    }

    /// Sawtooth somewhere in `[200, 400)` Hz, used by the map tiles.
    pub fn randomized<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            waveform: Waveform::Sawtooth,
            frequency_hz: 200.0 + rng.gen::<f64>() * 200.0,
            start_gain: START_GAIN,
            end_gain: END_GAIN,
            duration: MAP_TONE_DURATION,
        }
    }

    /// Exponential ramp from `start_gain` at 0 to `end_gain` at `duration`.
    pub fn gain_at(&self, seconds: f64) -> f64 {
        let total = self.duration.as_secs_f64();
        if total <= 0.0 {
            return self.end_gain;
        }
        let progress = (seconds / total).clamp(0.0, 1.0);
        self.start_gain * (self.end_gain / self.start_gain).powf(progress)
    }

    pub fn sample_count(&self, sample_rate: u32) -> usize {
        (self.duration.as_secs_f64() * sample_rate as f64).round() as usize
    }

    /// Renders the oscillator from start to stop into mono samples.
    pub fn render(&self, sample_rate: u32) -> Vec<f32> {
        let rate = sample_rate as f64;
        (0..self.sample_count(sample_rate))
            .map(|n| {
                let t = n as f64 / rate;
                let phase = (self.frequency_hz * t).fract();
                (self.waveform.sample(phase) * self.gain_at(t)) as f32
            })
            .collect()
    }
}
