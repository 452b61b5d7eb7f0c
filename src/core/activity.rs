//! Discrete voice activity and its mapping onto physics parameters.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// High-level state of the voice interaction driving the visual tone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Activity {
    #[default]
    Idle,
    Listening,
    Speaking,
    Processing,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown activity `{0}`")]
pub struct UnknownActivity(pub String);

impl FromStr for Activity {
    type Err = UnknownActivity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "idle" => Ok(Activity::Idle),
            "listening" => Ok(Activity::Listening),
            "speaking" => Ok(Activity::Speaking),
            "processing" => Ok(Activity::Processing),
            _ => Err(UnknownActivity(s.to_string())),
        }
    }
}

impl Activity {
    pub const ALL: [Activity; 4] = [
        Activity::Idle,
        Activity::Listening,
        Activity::Speaking,
        Activity::Processing,
    ];

    /// Parse a host-supplied value; anything unrecognised degrades to `Idle`.
    pub fn parse_or_idle(s: &str) -> Activity {
        s.parse().unwrap_or_else(|e: UnknownActivity| {
            log::warn!("{e}; falling back to idle");
            Activity::Idle
        })
    }

    /// Whether the parameter set ignores intensity.
    pub fn is_fixed(self) -> bool {
        matches!(self, Activity::Processing)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Activity::Idle => "idle",
            Activity::Listening => "listening",
            Activity::Speaking => "speaking",
            Activity::Processing => "processing",
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clamp a raw intensity into \[0, 1\]; NaN becomes 0.
#[inline]
pub fn sanitize_intensity(intensity: f64) -> f64 {
    if intensity.is_nan() {
        0.0
    } else {
        intensity.clamp(0.0, 1.0)
    }
}

/// Physics parameters derived each tick from activity and intensity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActivityParams {
    pub expansion: f64,
    pub speed: f64,
    pub brightness: f64,
    pub jitter: f64,
    pub pulse_strength: f64,
}

impl ActivityParams {
    /// Map `(activity, intensity)` onto the five physics parameters.
    ///
    /// `intensity` is sanitized first, so out-of-range input never escapes the table.
    pub fn derive(activity: Activity, intensity: f64) -> Self {
        let i = sanitize_intensity(intensity);
        match activity {
            Activity::Idle => Self {
                expansion: 1.0 + 0.1 * i,
                speed: 0.5 + i,
                brightness: 0.7 + 0.2 * i,
                jitter: 0.3 + 0.5 * i,
                pulse_strength: 0.1 + 0.3 * i,
            },
            Activity::Listening => Self {
                expansion: 1.1 + 0.2 * i,
                speed: 1.0 + 1.5 * i,
                brightness: 0.85 + 0.15 * i,
                jitter: 0.6 + 0.8 * i,
                pulse_strength: 0.3 + 0.5 * i,
            },
            Activity::Speaking => Self {
                expansion: 1.2 + 0.4 * i,
                speed: 1.5 + 2.0 * i,
                brightness: 0.9 + 0.1 * i,
                jitter: 0.8 + 1.5 * i,
                pulse_strength: 0.5 + 0.8 * i,
            },
            Activity::Processing => Self {
                expansion: 1.15,
                speed: 2.0,
                brightness: 0.9,
                jitter: 0.8,
                pulse_strength: 0.4,
            },
        }
    }
}

impl Default for ActivityParams {
    fn default() -> Self {
        Self::derive(Activity::Idle, 0.0)
    }
}

/// Page-level assistant state shown by the voice front-end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AssistantState {
    #[default]
    Idle,
    Listening,
    Speaking,
    Searching,
    Results,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown assistant state `{0}`")]
pub struct UnknownAssistantState(pub String);

impl FromStr for AssistantState {
    type Err = UnknownAssistantState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "idle" => Ok(AssistantState::Idle),
            "listening" => Ok(AssistantState::Listening),
            "speaking" => Ok(AssistantState::Speaking),
            "searching" => Ok(AssistantState::Searching),
            "results" => Ok(AssistantState::Results),
            _ => Err(UnknownAssistantState(s.to_string())),
        }
    }
}

impl AssistantState {
    pub fn activity(self) -> Activity {
        match self {
            AssistantState::Idle | AssistantState::Results => Activity::Idle,
            AssistantState::Listening => Activity::Listening,
            AssistantState::Speaking => Activity::Speaking,
            AssistantState::Searching => Activity::Processing,
        }
    }

    pub fn status_label(self) -> &'static str {
        match self {
            AssistantState::Idle => "Ready",
            AssistantState::Listening => "Listening...",
            AssistantState::Speaking => "Speaking",
            AssistantState::Searching => "Searching",
            AssistantState::Results => "Found for you",
        }
    }

    /// Floating destination labels orbit only while searching.
    pub fn shows_locations(self) -> bool {
        self == AssistantState::Searching
    }

    pub fn reveals_transcript(self) -> bool {
        self == AssistantState::Speaking
    }
}
