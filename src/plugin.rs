use crate::{
    AnimationError, AtlasFrame, DriverHandle, DriverProgress, GridFrameDriver, Sway,
    SwayConfig, SwayDirection,
};
use bevy_app::{App, Plugin, Update};
use bevy_ecs::prelude::*;
use bevy_time::{Real, Time};
use bevy_transform::components::Transform;
use std::marker::PhantomData;
use tracing::debug;

/// Plays a [`GridFrameDriver`] into the entity's [`AtlasFrame`].
///
/// `I` selects the clock: `()` for virtual time, [`Real`] for real time.
#[derive(Component)]
pub struct FrameAnimator<I = ()> {
    driver: GridFrameDriver,
    remove: bool,
    _time: PhantomData<I>,
}

impl FrameAnimator<()> {
    pub fn new(driver: GridFrameDriver) -> Self {
        Self::new_with_time(driver)
    }
}

impl FrameAnimator<Real> {
    pub fn new_real_time(driver: GridFrameDriver) -> Self {
        Self::new_with_time(driver)
    }
}

impl<I> FrameAnimator<I> {
    pub fn new_with_time(driver: GridFrameDriver) -> Self {
        Self {
            driver,
            remove: false,
            _time: PhantomData,
        }
    }

    /// Once the driver is stopped, remove this component.
    pub fn remove_when_stopped(self) -> Self {
        Self {
            remove: true,
            ..self
        }
    }

    pub fn handle(&self) -> DriverHandle {
        self.driver.handle()
    }

    pub fn driver(&self) -> &GridFrameDriver {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut GridFrameDriver {
        &mut self.driver
    }
}

/// Sways the entity's [`Transform`] rotation.
///
/// The rotation found on the first update becomes the rest orientation the
/// sway is centered on.
#[derive(Component)]
pub struct LightSway<I = ()> {
    config: SwayConfig,
    sway: Option<Sway>,
    _time: PhantomData<I>,
}

impl LightSway<()> {
    pub fn new(config: SwayConfig) -> Result<Self, AnimationError> {
        Self::new_with_time(config)
    }
}

impl LightSway<Real> {
    pub fn new_real_time(config: SwayConfig) -> Result<Self, AnimationError> {
        Self::new_with_time(config)
    }
}

impl<I> LightSway<I> {
    pub fn new_with_time(config: SwayConfig) -> Result<Self, AnimationError> {
        config.validate()?;
        Ok(Self {
            config,
            sway: None,
            _time: PhantomData,
        })
    }

    pub fn config(&self) -> &SwayConfig {
        &self.config
    }

    /// `None` until the first update captured the rest orientation.
    pub fn direction(&self) -> Option<SwayDirection> {
        self.sway.as_ref().map(Sway::direction)
    }
}

#[derive(Default)]
pub struct FlipbookPlugin;

impl Plugin for FlipbookPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                animate_frames::<()>,
                animate_frames::<Real>,
                play_sway::<()>,
                play_sway::<Real>,
            )
                .chain(),
        );
    }
}

pub fn animate_frames<I: Default + Send + Sync + 'static>(
    time: Res<Time<I>>,
    mut animators: Query<(Entity, &mut FrameAnimator<I>, &mut AtlasFrame)>,
    mut commands: Commands,
) {
    for (entity, mut animator, mut frame) in animators.iter_mut() {
        let progress = animator.driver.advance(time.delta(), &mut *frame);
        if progress == DriverProgress::Stopped && animator.remove {
            debug!(?entity, "removing stopped frame animator");
            commands.entity(entity).remove::<FrameAnimator<I>>();
        }
    }
}

pub fn play_sway<I: Default + Send + Sync + 'static>(
    time: Res<Time<I>>,
    mut sways: Query<(&mut LightSway<I>, &mut Transform)>,
) {
    for (mut light_sway, mut transform) in sways.iter_mut() {
        let light_sway = &mut *light_sway;
        let original = transform.rotation;
        let sway = light_sway
            .sway
            .get_or_insert_with(|| Sway::from_valid(&light_sway.config, original));
        sway.advance(&mut transform.rotation, time.delta());
    }
}
