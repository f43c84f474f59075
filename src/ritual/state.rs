//! Ritual session state and screen model

use thiserror::Error;

use super::decode::DecodedDate;
use super::profile::PersonalityProfile;

/// Instruction steps, shown one at a time
pub const STEPS: [&str; 6] = [
    "Think about your birth day.",
    "Multiply it by 2.",
    "Add 5 to the result.",
    "Multiply the current result by 50.",
    "Add your birth month number (1-12).",
    "Finally, add 1765.",
];

/// Headline shown when the final number does not decode
pub const CLOUDED_HEADLINE: &str = "The numbers are clouded...";
/// Body shown when the final number does not decode
pub const CLOUDED_MESSAGE: &str =
    "It seems the calculation was disrupted. Realign your thoughts and try again.";
/// Appended to the trait text once a submission with an email is recorded
pub const EMAIL_FOLLOW_UP: &str = "✨ Get your full personality report in your email.";

/// Which screen the ritual is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Intro, waiting for the user to begin
    Landing,
    /// Walking through `STEPS`
    Steps,
    /// Waiting for the final number
    CollectNumber,
    /// Waiting for name/email
    CollectInfo,
    /// Progress animation running; reveal pending
    Animating,
    /// Result on display
    Reveal,
}

/// User actions, as translated by a platform adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Start,
    NextStep,
    SubmitNumber(String),
    SubmitInfo { name: String, email: String },
    Restart,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Start => "start",
            Action::NextStep => "next step",
            Action::SubmitNumber(_) => "submit number",
            Action::SubmitInfo { .. } => "submit info",
            Action::Restart => "restart",
        }
    }
}

/// Input errors. Display text is what the user is shown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RitualError {
    #[error("The ritual requires a valid number from your calculations.")]
    InvalidInput,
    #[error("The ritual requires your name to channel your energy.")]
    MissingName,
    #[error("cannot {action} on the {screen:?} screen")]
    UnexpectedAction { action: &'static str, screen: Screen },
}

/// Fields collected during one ritual
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RitualSession {
    /// Index into `STEPS`
    pub current_step: usize,
    /// Accepted final number (always >= `MIN_FINAL_NUMBER`)
    pub final_number: Option<i64>,
    pub user_name: String,
    pub user_email: Option<String>,
}

impl RitualSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session for a returning user whose name was remembered
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            user_name: name.into(),
            ..Self::default()
        }
    }

    /// Clear ritual progress, keeping who the user is
    pub fn reset_progress(&mut self) {
        self.current_step = 0;
        self.final_number = None;
    }
}

/// What the reveal screen shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealView {
    Revealed {
        date: DecodedDate,
        profile: PersonalityProfile,
        /// Extra line appended after a recorded submission
        follow_up: Option<&'static str>,
    },
    /// Decode failed; the designed fallback
    Clouded,
}

impl RevealView {
    /// `"DD / Mon"` or the clouded headline
    pub fn headline(&self) -> String {
        match self {
            RevealView::Revealed { date, .. } => date.to_string(),
            RevealView::Clouded => CLOUDED_HEADLINE.to_string(),
        }
    }

    pub fn trait_text(&self) -> String {
        match self {
            RevealView::Revealed {
                profile,
                follow_up: Some(extra),
                ..
            } => format!("{}\n\n{}", profile.trait_text, extra),
            RevealView::Revealed { profile, .. } => profile.trait_text.to_string(),
            RevealView::Clouded => CLOUDED_MESSAGE.to_string(),
        }
    }

    pub fn lucky_number(&self) -> Option<u8> {
        match self {
            RevealView::Revealed { profile, .. } => Some(profile.lucky_number),
            RevealView::Clouded => None,
        }
    }

    pub fn advice_text(&self) -> Option<&'static str> {
        match self {
            RevealView::Revealed { profile, .. } => Some(profile.advice_text),
            RevealView::Clouded => None,
        }
    }

    /// Lucky number as displayed; empty for a clouded reveal
    pub fn lucky_label(&self) -> String {
        self.lucky_number().map(|n| n.to_string()).unwrap_or_default()
    }

    pub fn date(&self) -> Option<DecodedDate> {
        match self {
            RevealView::Revealed { date, .. } => Some(*date),
            RevealView::Clouded => None,
        }
    }
}
