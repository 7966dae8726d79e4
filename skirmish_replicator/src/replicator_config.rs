//local shortcuts
use skirmish_utils::*;

//third-party shortcuts
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

/// Configuration of one smoothed scalar channel.
#[derive(Resource, Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplicatorConfig
{
    /// Number of samples the controlling role sends per second.
    send_rate: u32,
    /// Seconds a value must stay unchanged before it is sent as terminal.
    sleep_after: f32,
}

impl ReplicatorConfig
{
    pub fn new(send_rate: u32, sleep_after: f32) -> ReplicatorConfig
    {
        if send_rate == 0 { panic!("ReplicatorConfig: send rate must be > 0!"); }
        ReplicatorConfig{ send_rate, sleep_after: sleep_after.max(0.0) }
    }

    pub fn send_rate(&self) -> u32 { self.send_rate }
    pub fn sleep_after(&self) -> f32 { self.sleep_after }

    /// Seconds between two samples.
    pub fn period(&self) -> f32 { rate_to_period(self.send_rate) }

    /// Maximum number of buffered crumbs.
    pub fn trail_capacity(&self) -> usize { (self.send_rate as usize) * 2 }
}

impl Default for ReplicatorConfig
{
    fn default() -> ReplicatorConfig
    {
        ReplicatorConfig::new(10, 0.5)
    }
}

//-------------------------------------------------------------------------------------------------------------------
