//local shortcuts
use crate::*;
use skirmish_net::*;

//third-party shortcuts
use bevy::math::{Quat, Vec3};

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

/// What happened to a rocket during a tick.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RocketEvent
{
    /// Struck something blocking. `target` is the replicated object that was struck, if any.
    Hit{ target: Option<EntityHandle>, location: Vec3 },
    /// Flew for its full lifetime.
    Expired{ location: Vec3 },
}

//-------------------------------------------------------------------------------------------------------------------

/// A pooled projectile. Free rockets are hidden and do not tick.
pub struct Rocket
{
    handle: EntityHandle,
    owner: EntityHandle,
    settings: RocketSettings,
    presentation: Box<dyn Presentation>,

    free: bool,
    launch: Option<u32>,
    origin: Vec3,
    direction: Vec3,
    distance: f32,
    life_remaining: f32,
}

impl Rocket
{
    pub fn new(
        handle           : EntityHandle,
        owner            : EntityHandle,
        settings         : RocketSettings,
        mut presentation : Box<dyn Presentation>,
    ) -> Rocket
    {
        presentation.set_visible(false);
        Rocket{
                handle,
                owner,
                settings,
                presentation,
                free           : true,
                launch         : None,
                origin         : Vec3::ZERO,
                direction      : Vec3::X,
                distance       : 0.0,
                life_remaining : 0.0,
            }
    }

    /// Launches the rocket from `location` along `forward`. The flight has no launch number until
    /// [`Self::set_launch`] tags it.
    pub fn start_moving(&mut self, forward: Vec3, location: Vec3)
    {
        self.direction      = forward.try_normalize().unwrap_or(Vec3::X);
        self.origin         = location;
        self.distance       = 0.0;
        self.life_remaining = self.settings.lifetime;
        self.free           = false;
        self.launch         = None;
        self.presentation.set_visible(true);

        tracing::trace!(rocket = ?self.handle, owner = ?self.owner, ?location, "rocket launched");
    }

    /// Tags the current flight with the firer's launch number.
    pub fn set_launch(&mut self, launch: u32)
    {
        if self.free { return; }
        self.launch = Some(launch);
    }

    /// Returns `true` if the rocket is in flight on behalf of `launch`.
    pub fn is_flying_launch(&self, launch: u32) -> bool
    {
        !self.free && self.launch == Some(launch)
    }

    /// Replaces the flight direction, keeping the current position and the distance already flown.
    pub fn apply_correction(&mut self, forward: Vec3)
    {
        if self.free { return; }

        let location   = self.location();
        self.direction = forward.try_normalize().unwrap_or(self.direction);
        self.origin    = location - self.direction * self.distance;

        tracing::trace!(rocket = ?self.handle, direction = ?self.direction, "rocket direction corrected");
    }

    /// Advances the flight. Returns an event if the rocket exploded.
    pub fn tick(&mut self, delta_seconds: f32, probe: &dyn CollisionProbe) -> Option<RocketEvent>
    {
        if self.free { return None; }

        self.life_remaining -= delta_seconds;
        self.distance += self.settings.velocity * delta_seconds;

        let location = self.location();
        let probe_end = location + self.direction * self.settings.probe_length;
        if let Some(hit) = probe.line_trace(location, probe_end, &[self.handle, self.owner])
        {
            if hit.blocking
            {
                self.explode();
                return Some(RocketEvent::Hit{ target: hit.actor, location });
            }
        }

        if self.life_remaining <= 0.0
        {
            self.explode();
            return Some(RocketEvent::Expired{ location });
        }

        None
    }

    /// Plays the explosion effect and returns the rocket to its pool.
    pub fn explode(&mut self)
    {
        let (location, rotation) = (self.location(), self.rotation());
        self.presentation.spawn_effect(EffectKind::RocketExplosion, location, rotation);
        self.make_free();
    }

    /// Returns the rocket to its pool without an effect.
    pub fn make_free(&mut self)
    {
        self.free = true;
        self.launch = None;
        self.life_remaining = 0.0;
        self.presentation.set_visible(false);
    }

    pub fn handle(&self) -> EntityHandle { self.handle }
    pub fn owner(&self) -> EntityHandle { self.owner }
    pub fn is_free(&self) -> bool { self.free }
    pub fn launch(&self) -> Option<u32> { self.launch }
    pub fn direction(&self) -> Vec3 { self.direction }
    pub fn life_remaining(&self) -> f32 { self.life_remaining }

    pub fn location(&self) -> Vec3
    {
        self.origin + self.direction * self.distance
    }

    pub fn rotation(&self) -> Quat
    {
        yaw_rotation(yaw_of(self.direction))
    }
}

//-------------------------------------------------------------------------------------------------------------------
