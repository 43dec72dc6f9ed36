//! Club tones: oscillator settings per card, sample rendering and WAV packing.

pub mod tone;
pub mod wav;

pub use tone::{ToneSpec, Waveform};
pub use wav::encode_wav;

use crate::catalog::{HOME_CLUBS, MAP_CLUBS};
use rand::Rng;

/// Tone bound to the home card at `index`, driven by the club's genre.
pub fn home_tone(index: usize) -> Option<ToneSpec> {
    HOME_CLUBS
        .get(index)
        .map(|club| ToneSpec::for_genre(club.genre))
}

/// Tone bound to the map tile at `index`; the pitch is drawn again on every call.
pub fn map_tone<R: Rng + ?Sized>(index: usize, rng: &mut R) -> Option<ToneSpec> {
    MAP_CLUBS.get(index).map(|_| ToneSpec::randomized(rng))
}
