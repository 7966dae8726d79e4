//local shortcuts
use skirmish_replicator::*;

//third-party shortcuts
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

//standard shortcuts
use std::collections::HashMap;

//-------------------------------------------------------------------------------------------------------------------

/// One named tunable.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tunable
{
    Number(f32),
    Flag(bool),
}

/// A flat set of named tunables (key -> number/flag).
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tunables(pub HashMap<String, Tunable>);

impl Tunables
{
    /// Parses a JSON object of tunables, e.g. `{ "acceleration": 650.0, "unlimited_ammo": true }`.
    pub fn from_json(json: &str) -> Option<Tunables>
    {
        match serde_json::from_str::<Tunables>(json)
        {
            Ok(tunables) => Some(tunables),
            Err(err) =>
            {
                tracing::warn!(?err, "failed parsing tunables");
                None
            }
        }
    }

    pub fn number(&self, key: &str) -> Option<f32>
    {
        match self.0.get(key)
        {
            Some(Tunable::Number(value)) => Some(*value),
            _                            => None,
        }
    }

    pub fn flag(&self, key: &str) -> Option<bool>
    {
        match self.0.get(key)
        {
            Some(Tunable::Flag(value)) => Some(*value),
            _                          => None,
        }
    }
}

//-------------------------------------------------------------------------------------------------------------------

/// Movement, weapon and stat tunables of a player.
#[derive(Resource, Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSettings
{
    /// Forward acceleration (units/s²) at full input.
    pub acceleration: f32,
    /// Turn speed (degrees/s) at speed.
    pub turn_speed: f32,
    pub max_velocity: f32,
    /// Fraction of velocity kept after one second of coasting.
    pub default_friction: f32,
    /// Fraction of velocity kept after one second of braking.
    pub braking_friction: f32,
    /// Seconds between two rocket launches.
    pub fire_cooldown: f32,
    pub max_active_rockets: usize,
    pub initial_ammo: i32,
    pub unlimited_ammo: bool,
    pub max_health: i32,
    pub rocket_damage: i32,
    /// Distance in front of the player where rockets start.
    pub rocket_spawn_offset: f32,
    /// Maximum yaw (degrees) a fire request may deviate from the authority's view of the firer.
    pub fire_yaw_tolerance: f32,
    /// Position error (units) beyond which an observer snaps to the reported location.
    pub correction_threshold: f32,
    /// Seconds over which the mesh offset left by a snap blends back to neutral.
    pub correction_blend_time: f32,
    /// Largest timestamp gap (seconds) replayed from one movement snapshot.
    pub max_replay_step: f32,
}

impl PlayerSettings
{
    /// Overrides defaults with every recognized key in `tunables`.
    pub fn from_tunables(tunables: &Tunables) -> PlayerSettings
    {
        let mut settings = PlayerSettings::default();
        let number = |key: &str, value: &mut f32| { if let Some(v) = tunables.number(key) { *value = v; } };

        number("acceleration", &mut settings.acceleration);
        number("turn_speed", &mut settings.turn_speed);
        number("max_velocity", &mut settings.max_velocity);
        number("default_friction", &mut settings.default_friction);
        number("braking_friction", &mut settings.braking_friction);
        number("fire_cooldown", &mut settings.fire_cooldown);
        number("rocket_spawn_offset", &mut settings.rocket_spawn_offset);
        number("fire_yaw_tolerance", &mut settings.fire_yaw_tolerance);
        number("correction_threshold", &mut settings.correction_threshold);
        number("correction_blend_time", &mut settings.correction_blend_time);
        number("max_replay_step", &mut settings.max_replay_step);

        if let Some(v) = tunables.number("max_active_rockets") { settings.max_active_rockets = v.max(0.0) as usize; }
        if let Some(v) = tunables.number("initial_ammo") { settings.initial_ammo = v as i32; }
        if let Some(v) = tunables.number("max_health") { settings.max_health = v as i32; }
        if let Some(v) = tunables.number("rocket_damage") { settings.rocket_damage = v as i32; }
        if let Some(v) = tunables.flag("unlimited_ammo") { settings.unlimited_ammo = v; }

        settings.default_friction = settings.default_friction.clamp(0.0, 1.0);
        settings.braking_friction = settings.braking_friction.clamp(0.0, 1.0);
        settings
    }
}

impl Default for PlayerSettings
{
    fn default() -> PlayerSettings
    {
        PlayerSettings{
                acceleration          : 500.0,
                turn_speed            : 100.0,
                max_velocity          : 2000.0,
                default_friction      : 0.75,
                braking_friction      : 0.001,
                fire_cooldown         : 2.0,
                max_active_rockets    : 3,
                initial_ammo          : 10,
                unlimited_ammo        : false,
                max_health            : 100,
                rocket_damage         : 10,
                rocket_spawn_offset   : 100.0,
                fire_yaw_tolerance    : 0.0,
                correction_threshold  : 40.0,
                correction_blend_time : 0.25,
                max_replay_step       : 0.25,
            }
    }
}

//-------------------------------------------------------------------------------------------------------------------

/// Flight tunables of a rocket.
#[derive(Resource, Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RocketSettings
{
    /// Units per second.
    pub velocity: f32,
    /// Seconds of flight before the rocket explodes on its own.
    pub lifetime: f32,
    /// Length of the probe cast ahead of the rocket each tick.
    pub probe_length: f32,
}

impl RocketSettings
{
    /// Overrides defaults with the `rocket_*` keys in `tunables`.
    pub fn from_tunables(tunables: &Tunables) -> RocketSettings
    {
        let mut settings = RocketSettings::default();
        if let Some(v) = tunables.number("rocket_velocity") { settings.velocity = v; }
        if let Some(v) = tunables.number("rocket_lifetime") { settings.lifetime = v; }
        if let Some(v) = tunables.number("rocket_probe_length") { settings.probe_length = v.max(0.0); }
        settings
    }
}

impl Default for RocketSettings
{
    fn default() -> RocketSettings
    {
        RocketSettings{ velocity: 1300.0, lifetime: 2.0, probe_length: 100.0 }
    }
}

//-------------------------------------------------------------------------------------------------------------------

/// Number of rockets pre-allocated per player.
pub const ROCKET_POOL_SIZE: usize = 8;

/// Everything a session needs to simulate its objects.
#[derive(Resource, Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig
{
    pub player: PlayerSettings,
    pub rocket: RocketSettings,
    /// Config of the replicated speed channel attached to every player.
    pub speed_replicator: ReplicatorConfig,
}

impl SessionConfig
{
    /// Builds a session config from a flat set of tunables.
    ///
    /// The speed channel reads `speed_send_rate` and `speed_sleep_after`. A send rate of zero panics.
    pub fn from_tunables(tunables: &Tunables) -> SessionConfig
    {
        let defaults    = ReplicatorConfig::default();
        let send_rate   = tunables.number("speed_send_rate").map(|v| v.max(0.0).round() as u32);
        let sleep_after = tunables.number("speed_sleep_after");

        SessionConfig{
                player           : PlayerSettings::from_tunables(tunables),
                rocket           : RocketSettings::from_tunables(tunables),
                speed_replicator : ReplicatorConfig::new(
                        send_rate.unwrap_or(defaults.send_rate()),
                        sleep_after.unwrap_or(defaults.sleep_after())
                    ),
            }
    }
}

//-------------------------------------------------------------------------------------------------------------------
