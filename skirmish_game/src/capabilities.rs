//! Collaborators injected into a session by the hosting engine.
//!
//! The session never implements collision, movement integration or presentation itself; it drives them through the
//! traits in this module.

//local shortcuts
use crate::*;
use skirmish_net::*;

//third-party shortcuts
use bevy::math::{Quat, Vec3};
use serde::{Serialize, Deserialize};

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

/// Movement requested for one frame.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct FrameMovement
{
    delta: Vec3,
}

impl FrameMovement
{
    pub fn add_delta(&mut self, delta: Vec3)
    {
        self.delta += delta;
    }

    pub fn delta(&self) -> Vec3 { self.delta }
}

//-------------------------------------------------------------------------------------------------------------------

/// Moves a collision body through the world.
pub trait Mover
{
    /// Starts accumulating the movement of a frame.
    fn create_frame_movement(&self) -> FrameMovement { FrameMovement::default() }
    /// Accumulates gravity for the next [`Mover::move_frame`].
    fn apply_gravity(&mut self);
    /// Sweeps the body by the frame delta. Returns the displacement actually applied after collision.
    fn move_frame(&mut self, frame: FrameMovement) -> Vec3;
    /// Sets the facing rotation, optionally turning at `turn_rate` degrees per second.
    fn set_facing_rotation(&mut self, rotation: Quat, turn_rate: Option<f32>);
    fn facing_rotation(&self) -> Quat;
    /// Current collision origin.
    fn location(&self) -> Vec3;
    /// Moves the collision origin without sweeping (no collision response).
    fn teleport(&mut self, location: Vec3);
}

//-------------------------------------------------------------------------------------------------------------------

/// Result of a line trace.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TraceHit
{
    /// The replicated object that was hit, if the hit object is one.
    pub actor: Option<EntityHandle>,
    /// The hit blocks movement.
    pub blocking: bool,
    pub location: Vec3,
}

/// Casts rays into the world.
pub trait CollisionProbe
{
    /// Traces from `from` to `to`, ignoring the objects in `ignored`.
    fn line_trace(&self, from: Vec3, to: Vec3, ignored: &[EntityHandle]) -> Option<TraceHit>;
}

//-------------------------------------------------------------------------------------------------------------------

/// Cosmetic effects a session may request.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum EffectKind
{
    RocketExplosion,
    PlayerExplosion,
    PickupConsumed,
}

/// Visual representation of one object.
pub trait Presentation
{
    fn spawn_effect(&mut self, kind: EffectKind, location: Vec3, rotation: Quat);
    fn set_visible(&mut self, visible: bool);
    /// Offsets the visual mesh from the collision origin. Presentation-only; never fed back into the simulation.
    fn set_mesh_offset(&mut self, _offset: Vec3) {}
}

//-------------------------------------------------------------------------------------------------------------------

/// Callbacks for UI/VFX that reflect a player's stats. Invoked synchronously.
pub trait PlayerObserver
{
    fn on_ammo_changed(&mut self, _ammo: i32) {}
    fn on_health_changed(&mut self, _health: i32) {}
    fn on_death(&mut self) {}
}

//-------------------------------------------------------------------------------------------------------------------

/// Kinds of objects a session asks the host to create collaborators for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum EntityKind
{
    Player,
    Rocket,
    Pickup(PickupKind),
}

/// Creates the collaborators of newly spawned objects.
pub trait EntityFactory
{
    fn mover(&mut self, player: EntityHandle, location: Vec3, rotation: Quat) -> Box<dyn Mover>;
    fn presentation(&mut self, entity: EntityHandle, kind: EntityKind) -> Box<dyn Presentation>;
    fn player_observer(&mut self, player: EntityHandle) -> Box<dyn PlayerObserver>;
}

//-------------------------------------------------------------------------------------------------------------------
