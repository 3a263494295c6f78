//! Serializable settings for both animations.
//!
//! Every field is optional when deserializing; missing fields take the
//! defaults below. A frame animation in RON:
//! ```
//! # use be_flipbook::*;
//! let config = FrameAnimationConfig::from_ron(
//!     "(rows: 4, columns: 4, timing: Fixed(interval: 0.1), start_delay_secs: 0.0)",
//! )?;
//! assert_eq!(config.start_frame, 0);
//! # Ok::<(), AnimationError>(())
//! ```

use crate::timing::positive_seconds;
use crate::{AnimationError, GridConfig, GridFrameDriver, SwayDirection, TimingPolicy};
use bevy_math::curve::EaseFunction;
use bevy_math::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameAnimationConfig {
    pub rows: u32,
    pub columns: u32,
    pub timing: TimingPolicy,
    /// Seconds before the first frame is shown. Values `<= 0` start right away.
    pub start_delay_secs: f32,
    /// Clamped into the grid when the driver starts.
    pub start_frame: i64,
}

impl Default for FrameAnimationConfig {
    fn default() -> Self {
        Self {
            rows: 8,
            columns: 8,
            timing: TimingPolicy::default(),
            start_delay_secs: 1.0,
            start_frame: 0,
        }
    }
}

impl FrameAnimationConfig {
    /// A steady loop over the whole grid with no start delay, as used for
    /// dripping liquids and similar looping effects.
    pub fn drip(rows: u32, columns: u32, interval: f32) -> Self {
        Self {
            rows,
            columns,
            timing: TimingPolicy::Fixed { interval },
            start_delay_secs: 0.0,
            start_frame: 0,
        }
    }

    pub fn from_ron(text: &str) -> Result<Self, AnimationError> {
        Ok(ron::de::from_str(text)?)
    }

    pub fn grid(&self) -> Result<GridConfig, AnimationError> {
        GridConfig::new(self.rows, self.columns)
    }

    pub fn build(&self) -> Result<GridFrameDriver, AnimationError> {
        GridFrameDriver::start(
            self.grid()?,
            self.timing,
            self.start_frame,
            self.start_delay_secs,
        )
    }

    pub fn build_seeded(&self, seed: u64) -> Result<GridFrameDriver, AnimationError> {
        Ok(self.build()?.seeded(seed))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwayConfig {
    /// Axis to sway around; does not need to be normalized.
    pub axis: Vec3,
    /// Sway to either side, `0..=90` degrees.
    pub angle_degrees: f32,
    /// Seconds per half-swing.
    pub duration_secs: f32,
    pub ease: EaseFunction,
    pub start_direction: SwayDirection,
}

impl Default for SwayConfig {
    fn default() -> Self {
        Self {
            axis: Vec3::Y,
            angle_degrees: 5.0,
            duration_secs: 2.0,
            ease: EaseFunction::SineInOut,
            start_direction: SwayDirection::Positive,
        }
    }
}

impl SwayConfig {
    pub fn from_ron(text: &str) -> Result<Self, AnimationError> {
        Ok(ron::de::from_str(text)?)
    }

    pub fn validate(&self) -> Result<(), AnimationError> {
        if !self.axis.is_finite() || self.axis.length_squared() == 0.0 {
            return Err(AnimationError::invalid(format!(
                "sway axis must be a non-zero vector, got {}",
                self.axis
            )));
        }
        if !(0.0..=90.0).contains(&self.angle_degrees) {
            return Err(AnimationError::invalid(format!(
                "sway angle must be within 0..=90 degrees, got {}",
                self.angle_degrees
            )));
        }
        positive_seconds("sway duration", self.duration_secs)?;
        Ok(())
    }
}
