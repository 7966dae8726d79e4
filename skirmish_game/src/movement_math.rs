//local shortcuts
use crate::*;

//third-party shortcuts
use bevy::math::{Quat, Vec3};

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

/// Exponent of the ease curve that scales turn speed with velocity.
const TURN_EASE_EXPONENT: f32 = 5.0;
/// Fraction of max velocity at which turning reaches full speed.
const FULL_TURN_VELOCITY_FRACTION: f32 = 0.75;

//-------------------------------------------------------------------------------------------------------------------

/// Interpolates from `a` to `b` with an ease-in-out curve of exponent `exponent`.
pub fn interp_ease_in_out(a: f32, b: f32, alpha: f32, exponent: f32) -> f32
{
    let alpha = alpha.clamp(0.0, 1.0);
    let eased = match alpha < 0.5
    {
        true  => 0.5 * (2.0 * alpha).powf(exponent),
        false => 1.0 - 0.5 * (2.0 * (1.0 - alpha)).powf(exponent),
    };
    a + (b - a) * eased
}

//-------------------------------------------------------------------------------------------------------------------

/// Turn speed (degrees/s) available at `velocity`.
///
/// A stationary vehicle cannot turn; turning ramps up until 3/4 of max velocity.
pub fn turn_speed_at(velocity: f32, settings: &PlayerSettings) -> f32
{
    let full_turn_velocity = settings.max_velocity * FULL_TURN_VELOCITY_FRACTION;
    if full_turn_velocity <= 0.0 { return settings.turn_speed; }

    let alpha = (velocity / full_turn_velocity).abs().clamp(0.0, 1.0);
    interp_ease_in_out(0.0, settings.turn_speed, alpha, TURN_EASE_EXPONENT)
}

//-------------------------------------------------------------------------------------------------------------------

/// Yaw change (degrees) for one step. Steering is mirrored while reversing.
pub fn yaw_step(velocity: f32, turn_input: f32, delta_seconds: f32, settings: &PlayerSettings) -> f32
{
    let direction = if velocity > 0.0 { turn_input } else { -turn_input };
    direction * turn_speed_at(velocity, settings) * delta_seconds
}

//-------------------------------------------------------------------------------------------------------------------

/// Integrates forward velocity over one step.
///
/// Input accelerates, the result is clamped to max velocity, then friction (the fraction kept per second) decays it.
pub fn integrate_velocity(
    velocity      : f32,
    forward_input : f32,
    braking       : bool,
    delta_seconds : f32,
    settings      : &PlayerSettings,
) -> f32
{
    let friction = if braking { settings.braking_friction } else { settings.default_friction };
    let delta_seconds = delta_seconds.max(0.0);

    let velocity = velocity + forward_input.clamp(-1.0, 1.0) * settings.acceleration * delta_seconds;
    let velocity = velocity.clamp(-settings.max_velocity, settings.max_velocity);
    velocity * friction.clamp(0.0, 1.0).powf(delta_seconds)
}

//-------------------------------------------------------------------------------------------------------------------

/// Wraps an angle in degrees into (-180, 180].
pub fn normalize_degrees(degrees: f32) -> f32
{
    let wrapped = degrees % 360.0;
    if wrapped > 180.0 { wrapped - 360.0 }
    else if wrapped <= -180.0 { wrapped + 360.0 }
    else { wrapped }
}

/// Shortest signed rotation (degrees) that turns `from` into `to`.
pub fn delta_degrees(from: f32, to: f32) -> f32
{
    normalize_degrees(to - from)
}

//-------------------------------------------------------------------------------------------------------------------

/// Rotation about the up axis (Z).
pub fn yaw_rotation(yaw_degrees: f32) -> Quat
{
    Quat::from_rotation_z(yaw_degrees.to_radians())
}

/// Forward direction (X axis) of a rotation.
pub fn forward_vector(rotation: Quat) -> Vec3
{
    rotation * Vec3::X
}

/// Yaw (degrees) of a direction projected onto the ground plane.
pub fn yaw_of(direction: Vec3) -> f32
{
    direction.y.atan2(direction.x).to_degrees()
}

//-------------------------------------------------------------------------------------------------------------------

/// Pulls the yaw of a claimed fire rotation toward the authority's view of the firer.
///
/// The claimed yaw is kept if it lies within `tolerance_degrees` of `authority_yaw` (along the shortest arc),
/// otherwise it is moved to the edge of the tolerance.
pub fn correct_fire_rotation(claimed: Quat, authority_yaw: f32, tolerance_degrees: f32) -> Quat
{
    let claimed_yaw = yaw_of(forward_vector(claimed));
    let deviation   = delta_degrees(claimed_yaw, authority_yaw);
    let tolerance   = tolerance_degrees.max(0.0);
    let correction  = deviation - deviation.clamp(-tolerance, tolerance);

    yaw_rotation(normalize_degrees(claimed_yaw + correction))
}

//-------------------------------------------------------------------------------------------------------------------
