//! Birthdate Ritual - a mind-reading arithmetic trick
//!
//! Core modules:
//! - `ritual`: Flow engine (controller, decoder, profile, progress animation)
//! - `persistence`: Key/value storage for the saved name and last result
//! - `submit`: Fire-and-forget submission of completed rituals
//! - `settings`: User preferences

pub mod persistence;
pub mod ritual;
pub mod settings;
pub mod submit;

pub use ritual::{Action, DecodedDate, PersonalityProfile, RevealView, ScreenController, decode};
pub use settings::Settings;

/// Ritual configuration constants
pub mod consts {
    /// Added by the final instruction step once the arithmetic is expanded:
    /// `((d * 2 + 5) * 50) + m + 1765 = 100d + m + 2015`
    pub const DECODE_OFFSET: i64 = 2015;
    /// Smallest final number accepted from the user
    pub const MIN_FINAL_NUMBER: i64 = DECODE_OFFSET + 1;

    pub const MAX_DAY: i64 = 31;
    pub const MAX_MONTH: i64 = 12;

    /// Total progress animation time (ms)
    pub const ANIMATION_DURATION_MS: u32 = 4000;
    /// Progress animation tick period (ms)
    pub const ANIMATION_TICK_MS: u32 = 50;
    /// Maximum ticks consumed per `advance` call, so a stalled tab does not
    /// finish the animation in one frame
    pub const MAX_CATCHUP_TICKS: u32 = 8;
}
