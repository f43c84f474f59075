//! Ritual flow engine
//!
//! All ritual logic lives here. Decoding and profile generation are pure;
//! the progress animator is a tick-driven state machine with no timers of its
//! own; the controller owns the session and sequences everything else.

pub mod controller;
pub mod decode;
pub mod profile;
pub mod progress;
pub mod state;

pub use controller::{ScreenController, parse_leading_integer};
pub use decode::{DecodeError, DecodedDate, MONTH_ABBREVS, decode};
pub use profile::{ADVICE, PersonalityProfile, TRAITS, share_text};
pub use progress::{AnimatorConfig, LOADING_MESSAGES, ProgressAnimator, ProgressFrame};
pub use state::{Action, RevealView, RitualError, RitualSession, STEPS, Screen};
