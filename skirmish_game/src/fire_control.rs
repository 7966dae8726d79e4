//local shortcuts
use crate::*;
use skirmish_net::*;
use skirmish_utils::*;

//third-party shortcuts
use bevy::math::{Quat, Vec3};
use serde::{Serialize, Deserialize};

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

/// A launch the controller predicted and asks the authority to confirm.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireRequest
{
    pub rocket: EntityHandle,
    /// Sequence number of this launch on the firing player. Outcomes echo it so a late answer cannot touch a
    /// later flight of the same pooled rocket.
    pub launch: u32,
    pub location: Vec3,
    pub rotation: Quat,
}

//-------------------------------------------------------------------------------------------------------------------

/// Outcome of validating a fire request on the authority.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FireVerdict
{
    /// Launch with `rotation`; `ammo` is the firer's authoritative ammo after the launch.
    Confirmed{ rotation: Quat, ammo: i32 },
    /// Not enough ammo; `ammo` is the firer's authoritative ammo.
    Rejected{ ammo: i32 },
}

//-------------------------------------------------------------------------------------------------------------------

/// Predicts rocket launches on the controlling peer and validates them on the authority.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct FireControl
{
    cooldown: Countdown,
    next_launch: u32,
}

impl FireControl
{
    pub fn tick(&mut self, delta_seconds: f32)
    {
        if self.cooldown.is_done() { return; }
        self.cooldown.tick(delta_seconds);
    }

    pub fn cooldown_remaining(&self) -> f32 { self.cooldown.remaining().max(0.0) }

    /// Launches a free rocket locally if the cooldown has elapsed, ammo remains and the active-rocket cap is not
    /// reached.
    ///
    /// Failed admission is not reported to the caller beyond `None`. On success the cooldown restarts, one round of
    /// ammo is spent locally, the rocket is tagged with a fresh launch number and the request to send to the
    /// authority is returned.
    pub fn fire_rocket(
        &mut self,
        settings : &PlayerSettings,
        stats    : &mut PlayerStats,
        pool     : &mut RocketPool,
        location : Vec3,
        rotation : Quat,
    ) -> Option<FireRequest>
    {
        if !self.cooldown.is_done()
        {
            tracing::trace!(remaining = self.cooldown_remaining(), "launch refused: cooldown");
            return None;
        }
        if !settings.unlimited_ammo && stats.ammo() <= 0
        {
            tracing::trace!(ammo = stats.ammo(), "launch refused: out of ammo");
            return None;
        }
        if pool.active_count() >= settings.max_active_rockets
        {
            tracing::trace!(active = pool.active_count(), "launch refused: too many active rockets");
            return None;
        }
        let Some(rocket) = pool.get_free_rocket()
        else { tracing::trace!("launch refused: no free rocket"); return None; };

        self.cooldown.start(settings.fire_cooldown);
        if !settings.unlimited_ammo { stats.predict_ammo_spent(); }

        let forward = forward_vector(rotation);
        let start   = location + forward * settings.rocket_spawn_offset;
        let launch = self.next_launch;
        self.next_launch = self.next_launch.wrapping_add(1);
        rocket.start_moving(forward, start);
        rocket.set_launch(launch);

        tracing::debug!(rocket = ?rocket.handle(), launch, ammo = stats.ammo(), "predicted rocket launch");
        Some(FireRequest{ rocket: rocket.handle(), launch, location: start, rotation })
    }

    /// Validates a fire request against the authoritative ammo, spending one round if it is accepted.
    ///
    /// The claimed rotation is corrected toward `authority_yaw`.
    pub fn validate(
        settings      : &PlayerSettings,
        stats         : &mut PlayerStats,
        request       : &FireRequest,
        authority_yaw : f32,
    ) -> FireVerdict
    {
        if !stats.consume_authoritative_ammo(settings.unlimited_ammo)
        {
            return FireVerdict::Rejected{ ammo: stats.authoritative_ammo() };
        }

        FireVerdict::Confirmed{
                rotation : correct_fire_rotation(request.rotation, authority_yaw, settings.fire_yaw_tolerance),
                ammo     : stats.authoritative_ammo(),
            }
    }
}

//-------------------------------------------------------------------------------------------------------------------
