//! Be-Flipbook
//!
//! Plays texture-atlas ("flipbook") animations by walking the cells of a
//! `rows` x `columns` grid, and sways rotations back and forth between two
//! orientations.
//!
//! Both animations are plain state machines: the owner feeds them the time
//! that passed since the last update.
//! ```
//! use be_flipbook::*;
//! use std::time::Duration;
//!
//! let grid = GridConfig::new(2, 2)?;
//! let mut driver = GridFrameDriver::start(grid, TimingPolicy::Fixed { interval: 0.1 }, 0, 0.0)?;
//! let mut frame = AtlasFrame::default();
//!
//! // With no start delay the first frame shows right away.
//! driver.advance(Duration::ZERO, &mut frame);
//! assert_eq!(frame.cell(), GridCell::new(0, 0));
//!
//! // Stop from anywhere holding a handle.
//! let handle = driver.handle();
//! handle.stop();
//! assert_eq!(driver.advance(Duration::from_secs(1), &mut frame), DriverProgress::Stopped);
//! # Ok::<(), AnimationError>(())
//! ```
//!
//! With Bevy, add the plugin and spawn the components:
//! ```
//! # #[cfg(feature = "bevy")]
//! # fn main() -> Result<(), be_flipbook::AnimationError> {
//! use be_flipbook::*;
//! use bevy_app::App;
//! use bevy_transform::components::Transform;
//!
//! let mut app = App::new();
//! app.add_plugins(FlipbookPlugin);
//!
//! // An 8x8 atlas, one frame every 0.1 to 0.5 seconds after a one second delay.
//! let driver = FrameAnimationConfig::default().build()?;
//! app.world_mut()
//!     .spawn((AtlasFrame::default(), FrameAnimator::new(driver)));
//!
//! // Sway 5 degrees around the Y axis, two seconds per half-swing.
//! app.world_mut()
//!     .spawn((Transform::default(), LightSway::new(SwayConfig::default())?));
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "bevy"))]
//! # fn main() {}
//! ```

mod config;
mod driver;
mod error;
mod grid;
#[cfg(feature = "bevy")]
mod plugin;
mod sink;
mod sway;
mod timing;
pub mod tween;

pub use config::*;
pub use driver::*;
pub use error::*;
pub use grid::*;
#[cfg(feature = "bevy")]
pub use plugin::*;
pub use sink::*;
pub use sway::*;
pub use timing::*;
