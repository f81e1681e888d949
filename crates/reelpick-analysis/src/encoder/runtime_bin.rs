//! Runtime bins: six half-open minute ranges.

use std::fmt;
use std::str::FromStr;

use reelpick_core::errors::EncodingError;
use serde::{Deserialize, Serialize};

/// A runtime bucket. Bounds are half-open: `[lower, upper)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuntimeBin {
    /// [0, 60)
    VeryShort,
    /// [60, 90)
    Short,
    /// [90, 120)
    Mid,
    /// [120, 180)
    MidLong,
    /// [180, 240)
    Long,
    /// [240, ∞)
    VeryLong,
}

impl RuntimeBin {
    /// All bins in vocabulary order.
    pub const ALL: [RuntimeBin; 6] = [
        Self::VeryShort,
        Self::Short,
        Self::Mid,
        Self::MidLong,
        Self::Long,
        Self::VeryLong,
    ];

    /// Bin containing `minutes`.
    pub fn from_minutes(minutes: u32) -> Self {
        match minutes {
            0..=59 => Self::VeryShort,
            60..=89 => Self::Short,
            90..=119 => Self::Mid,
            120..=179 => Self::MidLong,
            180..=239 => Self::Long,
            _ => Self::VeryLong,
        }
    }

    /// Short name, e.g. `mid-long`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::VeryShort => "very-short",
            Self::Short => "short",
            Self::Mid => "mid",
            Self::MidLong => "mid-long",
            Self::Long => "long",
            Self::VeryLong => "very-long",
        }
    }

    /// Menu label shown to users, e.g. `120-180 minutes`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryShort => "0-60 minutes",
            Self::Short => "60-90 minutes",
            Self::Mid => "90-120 minutes",
            Self::MidLong => "120-180 minutes",
            Self::Long => "180-240 minutes",
            Self::VeryLong => "240+ minutes",
        }
    }

    /// Inclusive lower bound in minutes.
    pub fn lower_bound(&self) -> u32 {
        match self {
            Self::VeryShort => 0,
            Self::Short => 60,
            Self::Mid => 90,
            Self::MidLong => 120,
            Self::Long => 180,
            Self::VeryLong => 240,
        }
    }

    /// Exclusive upper bound in minutes; `None` for the open-ended bin.
    pub fn upper_bound(&self) -> Option<u32> {
        match self {
            Self::VeryLong => None,
            other => Some(Self::ALL[other.position() + 1].lower_bound()),
        }
    }

    /// Index of this bin in `ALL`.
    pub fn position(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for RuntimeBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RuntimeBin {
    type Err = EncodingError;

    /// Accepts a bin name (`mid`), its token (`runtime_bin_mid`), or its
    /// menu label (`90-120 minutes`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let name = s.strip_prefix(super::token::RUNTIME_PREFIX).unwrap_or(s);
        Self::ALL
            .into_iter()
            .find(|bin| bin.name() == name || bin.label() == name)
            .ok_or_else(|| EncodingError::InvalidRuntimeBin(s.to_string()))
    }
}
