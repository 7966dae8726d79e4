//local shortcuts
use crate::*;
use skirmish_net::*;
use skirmish_utils::*;

//third-party shortcuts
use bevy::math::{Quat, Vec3};
use serde::{Serialize, Deserialize};

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

/// The stat a pickup restores.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PickupKind
{
    Ammo,
    Health,
}

//-------------------------------------------------------------------------------------------------------------------

/// Everything a peer needs to mirror a pickup.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickupSpec
{
    pub kind: PickupKind,
    pub amount: i32,
    pub location: Vec3,
    /// Seconds until a consumed pickup becomes available again. Never respawns if not positive.
    pub respawn_time: f32,
}

//-------------------------------------------------------------------------------------------------------------------

/// A collectible that restores ammo or health.
pub struct Pickup
{
    handle: EntityHandle,
    spec: PickupSpec,
    presentation: Box<dyn Presentation>,
    available: bool,
    respawn: Countdown,
}

impl Pickup
{
    pub fn new(handle: EntityHandle, spec: PickupSpec, mut presentation: Box<dyn Presentation>) -> Pickup
    {
        presentation.set_visible(true);
        Pickup{ handle, spec, presentation, available: true, respawn: Countdown::default() }
    }

    /// Hides the pickup until it respawns. Returns `false` if it was already consumed.
    pub fn consume(&mut self) -> bool
    {
        if !self.available { return false; }

        self.available = false;
        self.respawn.start(self.spec.respawn_time);
        self.presentation.spawn_effect(EffectKind::PickupConsumed, self.spec.location, Quat::IDENTITY);
        self.presentation.set_visible(false);

        tracing::trace!(pickup = ?self.handle, kind = ?self.spec.kind, "pickup consumed");
        true
    }

    /// Counts down the respawn timer of a consumed pickup.
    pub fn tick(&mut self, delta_seconds: f32)
    {
        if self.available || self.spec.respawn_time <= 0.0 { return; }

        self.respawn.tick(delta_seconds);
        if !self.respawn.is_done() { return; }

        self.available = true;
        self.presentation.set_visible(true);
        tracing::trace!(pickup = ?self.handle, "pickup respawned");
    }

    pub fn handle(&self) -> EntityHandle { self.handle }
    pub fn spec(&self) -> &PickupSpec { &self.spec }
    pub fn kind(&self) -> PickupKind { self.spec.kind }
    pub fn is_available(&self) -> bool { self.available }
}

//-------------------------------------------------------------------------------------------------------------------
