use crate::AnimationError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How long the driver waits between two frames, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TimingPolicy {
    Fixed { interval: f32 },
    /// Uniformly sampled in `[min, max]`, independently for every frame.
    Range { min: f32, max: f32 },
}

impl Default for TimingPolicy {
    fn default() -> Self {
        Self::Range { min: 0.1, max: 0.5 }
    }
}

/// Converts `value` seconds to a `Duration` of at least one nanosecond.
pub(crate) fn positive_seconds(name: &str, value: f32) -> Result<Duration, AnimationError> {
    match Duration::try_from_secs_f32(value) {
        Ok(duration) if !duration.is_zero() => Ok(duration),
        _ => Err(AnimationError::invalid(format!(
            "{name} must be a positive number of seconds no shorter than 1ns, got {value}"
        ))),
    }
}

impl TimingPolicy {
    pub fn validate(&self) -> Result<(), AnimationError> {
        match *self {
            Self::Fixed { interval } => positive_seconds("interval", interval).map(drop),
            Self::Range { min, max } => {
                positive_seconds("min", min)?;
                positive_seconds("max", max)?;
                if min > max {
                    return Err(AnimationError::invalid(format!(
                        "min ({min}) must not exceed max ({max})"
                    )));
                }
                Ok(())
            }
        }
    }

    /// Draws the next delay. Only valid policies may be sampled.
    pub fn sample(&self, rng: &mut impl Rng) -> Duration {
        let secs = match *self {
            Self::Fixed { interval } => interval,
            Self::Range { min, max } if min == max => min,
            Self::Range { min, max } => rng.gen_range(min..=max),
        };
        Duration::from_secs_f32(secs)
    }
}
