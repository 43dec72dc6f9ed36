pub const APP_TITLE: &str = "Club2Stream";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Cookie that carries the selected language between page loads.
pub const LANGUAGE_STORAGE_KEY: &str = "language";

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;
pub const MIN_SAMPLE_RATE: u32 = 8_000;
pub const MAX_SAMPLE_RATE: u32 = 96_000;

pub const NOMINATIM_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";
pub const GEOCODE_RESULT_LIMIT: u32 = 1;
