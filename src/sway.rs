use crate::tween::{Tween, TweenApplier, TweenProgress};
use crate::{AnimationError, SwayConfig};
use bevy_math::curve::EaseFunction;
use bevy_math::Quat;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SwayDirection {
    #[default]
    Positive,
    Negative,
}

impl SwayDirection {
    pub fn toggle(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct SwayRotation {
    start: Quat,
    end: Quat,
}

impl TweenApplier<Quat> for SwayRotation {
    fn apply(&mut self, target: &mut Quat, value: f32) {
        *target = self.start.slerp(self.end, value);
    }
}

fn swing(duration: Duration, ease: EaseFunction, start: Quat, end: Quat) -> Tween<Quat> {
    Tween::new(duration, ease, SwayRotation { start, end })
}

/// Rocks a rotation back and forth between `+angle` and `-angle` around an
/// axis, relative to the rotation it started from.
#[derive(Clone)]
pub struct Sway {
    positive: Quat,
    negative: Quat,
    direction: SwayDirection,
    duration: Duration,
    ease: EaseFunction,
    tween: Tween<Quat>,
}

impl Sway {
    pub fn new(config: &SwayConfig, original: Quat) -> Result<Self, AnimationError> {
        config.validate()?;
        Ok(Self::from_valid(config, original))
    }

    pub(crate) fn from_valid(config: &SwayConfig, original: Quat) -> Self {
        let axis = config.axis.normalize();
        let angle = config.angle_degrees.to_radians();
        let positive = Quat::from_axis_angle(axis, angle) * original;
        let negative = Quat::from_axis_angle(axis, -angle) * original;
        let duration = Duration::from_secs_f32(config.duration_secs);
        let direction = config.start_direction;
        let target = match direction {
            SwayDirection::Positive => positive,
            SwayDirection::Negative => negative,
        };

        Self {
            positive,
            negative,
            direction,
            duration,
            ease: config.ease,
            tween: swing(duration, config.ease, original, target),
        }
    }

    pub fn direction(&self) -> SwayDirection {
        self.direction
    }

    /// Rotation the current half-swing is heading for.
    pub fn target(&self) -> Quat {
        match self.direction {
            SwayDirection::Positive => self.positive,
            SwayDirection::Negative => self.negative,
        }
    }

    pub fn advance(&mut self, rotation: &mut Quat, delta: Duration) {
        let mut remaining = delta;
        loop {
            match self.tween.advance(rotation, remaining) {
                TweenProgress::Running => return,
                TweenProgress::Done { surplus } => {
                    let reached = self.target();
                    self.direction = self.direction.toggle();
                    trace!(direction = ?self.direction, "sway turned");
                    self.tween = swing(self.duration, self.ease, reached, self.target());
                    if surplus.is_zero() {
                        return;
                    }
                    remaining = surplus;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_math::Vec3;

    fn config() -> SwayConfig {
        SwayConfig {
            axis: Vec3::Z,
            angle_degrees: 10.0,
            duration_secs: 1.0,
            ease: EaseFunction::Linear,
            start_direction: SwayDirection::Positive,
        }
    }

    fn close(a: Quat, b: Quat) -> bool {
        a.angle_between(b) < 1e-2
    }

    fn degrees(deg: f32) -> Quat {
        Quat::from_rotation_z(deg.to_radians())
    }

    #[test]
    fn toggles_between_two_states() {
        assert_eq!(SwayDirection::Positive.toggle(), SwayDirection::Negative);
        assert_eq!(SwayDirection::Negative.toggle(), SwayDirection::Positive);
    }

    #[test]
    fn first_swing_starts_from_original() {
        let mut sway = Sway::new(&config(), Quat::IDENTITY).unwrap();
        let mut rotation = Quat::IDENTITY;

        sway.advance(&mut rotation, Duration::from_millis(500));
        assert!(close(rotation, degrees(5.0)));
        assert_eq!(sway.direction(), SwayDirection::Positive);

        sway.advance(&mut rotation, Duration::from_millis(500));
        assert!(close(rotation, degrees(10.0)));
        assert_eq!(sway.direction(), SwayDirection::Negative);
    }

    #[test]
    fn alternates_between_targets() {
        let mut sway = Sway::new(&config(), Quat::IDENTITY).unwrap();
        let mut rotation = Quat::IDENTITY;
        sway.advance(&mut rotation, Duration::from_secs(1));

        // a full swing from +10 to -10 degrees, passing through zero halfway
        sway.advance(&mut rotation, Duration::from_millis(500));
        assert!(close(rotation, Quat::IDENTITY));
        sway.advance(&mut rotation, Duration::from_millis(500));
        assert!(close(rotation, degrees(-10.0)));
        assert_eq!(sway.direction(), SwayDirection::Positive);

        sway.advance(&mut rotation, Duration::from_secs(1));
        assert!(close(rotation, degrees(10.0)));
        assert_eq!(sway.direction(), SwayDirection::Negative);
    }

    #[test]
    fn surplus_carries_into_next_swing() {
        let mut sway = Sway::new(&config(), Quat::IDENTITY).unwrap();
        let mut rotation = Quat::IDENTITY;
        sway.advance(&mut rotation, Duration::from_millis(1500));
        assert!(close(rotation, Quat::IDENTITY));
        assert_eq!(sway.direction(), SwayDirection::Negative);
    }

    #[test]
    fn sways_relative_to_original_rotation() {
        let original = Quat::from_rotation_x(0.3);
        let config = SwayConfig {
            start_direction: SwayDirection::Negative,
            ..config()
        };
        let mut sway = Sway::new(&config, original).unwrap();
        let mut rotation = original;
        sway.advance(&mut rotation, Duration::from_secs(1));
        assert!(close(rotation, degrees(-10.0) * original));
        assert!(close(sway.target(), degrees(10.0) * original));
    }

    #[test]
    fn eased_swing_reaches_target() {
        let config = SwayConfig {
            ease: EaseFunction::SineInOut,
            ..config()
        };
        let mut sway = Sway::new(&config, Quat::IDENTITY).unwrap();
        let mut rotation = Quat::IDENTITY;
        sway.advance(&mut rotation, Duration::from_millis(250));
        // sine in-out lags behind linear in the first quarter
        assert!(rotation.angle_between(Quat::IDENTITY) < 2.5_f32.to_radians());
        sway.advance(&mut rotation, Duration::from_millis(750));
        assert!(close(rotation, degrees(10.0)));
    }

    #[test]
    fn shortest_swing_still_returns() {
        let config = SwayConfig {
            duration_secs: 2e-9,
            ..config()
        };
        let mut sway = Sway::new(&config, Quat::IDENTITY).unwrap();
        let mut rotation = Quat::IDENTITY;
        sway.advance(&mut rotation, Duration::from_micros(100));
        assert!(
            close(rotation, degrees(10.0)) || close(rotation, degrees(-10.0)),
            "{rotation:?} should sit on one of the two targets"
        );
    }

    #[test]
    fn rejects_invalid_config() {
        for config in [
            SwayConfig {
                axis: Vec3::ZERO,
                ..config()
            },
            SwayConfig {
                angle_degrees: 91.0,
                ..config()
            },
            SwayConfig {
                duration_secs: 0.0,
                ..config()
            },
            SwayConfig {
                duration_secs: 1e-10,
                ..config()
            },
        ] {
            assert!(matches!(
                Sway::new(&config, Quat::IDENTITY),
                Err(AnimationError::InvalidConfig(_))
            ));
        }
    }
}
