use bevy_math::curve::{Curve, EaseFunction};
use dyn_clone::DynClone;
use std::time::Duration;

pub trait TweenApplier<T>: Send + Sync + DynClone {
    fn apply(&mut self, target: &mut T, value: f32);
}

pub trait Interpolator: Send + Sync + 'static + DynClone {
    fn interpolate(&self, position: f32) -> f32;
}

dyn_clone::clone_trait_object!(<T> TweenApplier<T>);
dyn_clone::clone_trait_object!(Interpolator);

#[derive(Copy, Clone)]
pub struct Lerp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenProgress {
    Running,
    Done { surplus: Duration },
}

impl Interpolator for Lerp {
    fn interpolate(&self, position: f32) -> f32 {
        position
    }
}

impl Interpolator for EaseFunction {
    fn interpolate(&self, position: f32) -> f32 {
        self.sample_unchecked(position)
    }
}

/// A delay that reports how much of the last skipped time was left over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Wait {
    duration: Duration,
    elapsed: Duration,
}

impl Wait {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            elapsed: Duration::ZERO,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Fraction of the wait that has passed, `1.0` for zero-length waits.
    pub fn fraction(&self) -> f32 {
        if self.duration.is_zero() {
            1.0
        } else {
            self.elapsed.as_secs_f32() / self.duration.as_secs_f32()
        }
    }

    pub fn skip(&mut self, duration: Duration) -> TweenProgress {
        self.elapsed += duration;
        if self.elapsed >= self.duration {
            let surplus = self.elapsed - self.duration;
            self.elapsed = self.duration;
            TweenProgress::Done { surplus }
        } else {
            TweenProgress::Running
        }
    }

    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

/// A single eased segment pushing values into a target through its applier.
#[derive(Clone)]
pub struct Tween<T> {
    wait: Wait,
    function: Box<dyn Interpolator>,
    applier: Box<dyn TweenApplier<T> + 'static>,
}

impl<T> Tween<T> {
    pub fn new(
        duration: Duration,
        function: impl Interpolator + 'static,
        applier: impl TweenApplier<T> + 'static,
    ) -> Self {
        Self {
            wait: Wait::new(duration),
            function: Box::new(function),
            applier: Box::new(applier),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.wait.elapsed()
    }

    pub fn advance(&mut self, target: &mut T, duration: Duration) -> TweenProgress {
        let result = self.wait.skip(duration);
        let v = self.function.interpolate(self.wait.fraction());
        self.applier.apply(target, v);
        result
    }

    pub fn reset(&mut self) {
        self.wait.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl TweenApplier<f32> for f32 {
        fn apply(&mut self, target: &mut f32, value: f32) {
            *target = *self * value * 2.0;
        }
    }

    #[test]
    fn wait_reports_surplus() {
        let mut wait = Wait::new(Duration::from_millis(100));
        assert_eq!(wait.skip(Duration::from_millis(60)), TweenProgress::Running);
        assert_eq!(
            wait.skip(Duration::from_millis(60)),
            TweenProgress::Done {
                surplus: Duration::from_millis(20)
            }
        );
        assert_eq!(wait.elapsed(), Duration::from_millis(100));

        wait.reset();
        assert_eq!(wait.elapsed(), Duration::ZERO);
    }

    #[test]
    fn zero_wait_is_done_immediately() {
        let mut wait = Wait::new(Duration::ZERO);
        assert_eq!(wait.fraction(), 1.0);
        assert_eq!(
            wait.skip(Duration::ZERO),
            TweenProgress::Done {
                surplus: Duration::ZERO
            }
        );
    }

    #[test]
    fn tween_once() {
        let mut tween = Tween::new(Duration::from_secs(2), Lerp, 1.0_f32);

        let mut value = 0.0;
        tween.advance(&mut value, Duration::from_millis(500));
        assert_eq!(tween.elapsed(), Duration::from_millis(500));
        assert_eq!(value, 0.5);

        let progress = tween.advance(&mut value, Duration::from_millis(1600));
        assert_eq!(
            progress,
            TweenProgress::Done {
                surplus: Duration::from_millis(100)
            }
        );
        assert_eq!(value, 2.0);

        tween.reset();
        assert_eq!(tween.elapsed(), Duration::ZERO);
    }

    #[test]
    fn tween_with_ease_function_hits_endpoints() {
        let mut tween = Tween::new(Duration::from_secs(1), EaseFunction::SineInOut, 1.0_f32);

        let mut value = -1.0;
        tween.advance(&mut value, Duration::ZERO);
        assert!(value.abs() < 1e-6);

        tween.advance(&mut value, Duration::from_secs(1));
        assert!((value - 2.0).abs() < 1e-5);
    }
}
