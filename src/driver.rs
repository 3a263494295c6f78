use crate::tween::{TweenProgress, Wait};
use crate::{AnimationError, FrameSequence, FrameSink, GridConfig, TimingPolicy};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};

/// Cancels a running [`GridFrameDriver`]. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct DriverHandle {
    stopped: Arc<AtomicBool>,
}

impl DriverHandle {
    /// Prevents any further frames from being emitted. Safe to call repeatedly.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }

    fn rearm(&self) {
        self.stopped.store(false, Ordering::Release);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverProgress {
    Running,
    Stopped,
}

/// Steps through the cells of an atlas, waiting between frames according to
/// a [`TimingPolicy`].
///
/// The driver does nothing on its own: the owner calls [`advance`] with the
/// time that passed since the last call and a sink that receives the frames.
/// Surplus time carries over, so a long tick may show several frames.
///
/// [`advance`]: GridFrameDriver::advance
#[derive(Debug, Clone)]
pub struct GridFrameDriver {
    frames: FrameSequence,
    timing: TimingPolicy,
    start_delay: Duration,
    wait: Wait,
    handle: DriverHandle,
    rng: StdRng,
}

impl GridFrameDriver {
    /// Out of range start frames are clamped, a start delay `<= 0` means no delay.
    pub fn start(
        grid: GridConfig,
        timing: TimingPolicy,
        start_frame: i64,
        start_delay: f32,
    ) -> Result<Self, AnimationError> {
        timing.validate()?;
        let start_delay = if start_delay.is_nan() {
            return Err(AnimationError::invalid("start delay is not a number"));
        } else if start_delay <= 0.0 {
            Duration::ZERO
        } else {
            Duration::try_from_secs_f32(start_delay).map_err(|_| {
                AnimationError::invalid(format!("start delay of {start_delay}s is out of range"))
            })?
        };

        let frames = grid.frames_from(start_frame);
        debug!(
            rows = grid.rows(),
            columns = grid.columns(),
            requested = start_frame,
            start_frame = frames.start_frame(),
            ?timing,
            ?start_delay,
            "starting grid frame driver"
        );

        Ok(Self {
            frames,
            timing,
            start_delay,
            wait: Wait::new(start_delay),
            handle: DriverHandle::default(),
            rng: StdRng::from_entropy(),
        })
    }

    /// Uses a fixed seed for sampling ranged delays.
    pub fn seeded(self, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            ..self
        }
    }

    pub fn handle(&self) -> DriverHandle {
        self.handle.clone()
    }

    pub fn grid(&self) -> GridConfig {
        self.frames.grid()
    }

    pub fn timing(&self) -> TimingPolicy {
        self.timing
    }

    pub fn start_frame(&self) -> u32 {
        self.frames.start_frame()
    }

    /// Linear index of the frame emitted next.
    pub fn current_frame(&self) -> u32 {
        self.frames.frame()
    }

    pub fn is_stopped(&self) -> bool {
        self.handle.is_stopped()
    }

    pub fn stop(&self) {
        if !self.handle.is_stopped() {
            debug!(frame = self.current_frame(), "stopping grid frame driver");
        }
        self.handle.stop();
    }

    /// Rewinds to the start frame, waits out the start delay again and clears
    /// a previous stop.
    pub fn restart(&mut self) {
        debug!(start_frame = self.start_frame(), "restarting grid frame driver");
        self.frames.restart();
        self.wait = Wait::new(self.start_delay);
        self.handle.rearm();
    }

    pub fn advance(&mut self, delta: Duration, sink: &mut impl FrameSink) -> DriverProgress {
        let mut remaining = delta;
        loop {
            if self.handle.is_stopped() {
                return DriverProgress::Stopped;
            }
            match self.wait.skip(remaining) {
                TweenProgress::Running => return DriverProgress::Running,
                TweenProgress::Done { surplus } => {
                    let cell = self.frames.next_cell();
                    trace!(row = cell.row, column = cell.column, "frame");
                    sink.emit(cell);
                    self.wait = Wait::new(self.timing.sample(&mut self.rng));
                    remaining = surplus;
                }
            }
        }
    }
}
