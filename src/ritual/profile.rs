//! Personality profile generation
//!
//! Everything here is index arithmetic over fixed tables. No randomness:
//! the same date always yields the same profile.

use super::decode::DecodedDate;

pub const TRAITS: [&str; 8] = [
    "You possess a rare depth of character that many find mysterious yet captivating.",
    "A natural born leader with an intuitive understanding of those around you.",
    "Your creative spirit knows no bounds, often seeing beauty where others see chaos.",
    "You have a resilient soul that turns challenges into stepping stones for growth.",
    "A seeker of truth, you value authenticity above all else.",
    "Your empathy is your greatest strength, allowing you to connect with the world on a deeper level.",
    "You carry the wisdom of an old soul combined with the curiosity of a child.",
    "A visionary who isn't afraid to walk the path less traveled.",
];

pub const ADVICE: [&str; 5] = [
    "Trust the timing of your life.",
    "Your intuition is your compass; follow it.",
    "Great things take time; be patient with your journey.",
    "The universe conspired to bring you here today.",
    "Embrace your uniqueness; it is your superpower.",
];

/// Derived reading for a decoded date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalityProfile {
    pub trait_text: &'static str,
    /// Always 1..=9
    pub lucky_number: u8,
    pub advice_text: &'static str,
}

impl PersonalityProfile {
    pub fn for_date(date: &DecodedDate) -> Self {
        Self {
            trait_text: TRAITS[trait_index(date)],
            lucky_number: lucky_number(date),
            advice_text: ADVICE[advice_index(date)],
        }
    }
}

fn seed(date: &DecodedDate) -> usize {
    usize::from(date.day()) + usize::from(date.month())
}

pub fn trait_index(date: &DecodedDate) -> usize {
    seed(date) % TRAITS.len()
}

pub fn advice_index(date: &DecodedDate) -> usize {
    seed(date) % ADVICE.len()
}

pub fn lucky_number(date: &DecodedDate) -> u8 {
    // day * month <= 372
    ((u16::from(date.day()) * u16::from(date.month())) % 9 + 1) as u8
}

/// Message offered to the platform share action on the reveal screen
pub fn share_text(url: &str) -> String {
    format!(
        "A mysterious force just read my mind and guessed my birthday! Try the Ritual yourself at: {}",
        url
    )
}
