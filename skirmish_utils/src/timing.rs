//local shortcuts

//third-party shortcuts
use serde::{Serialize, Deserialize};

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

/// Converts a rate (events per second) to a period in seconds.
///
/// Minimum = 1 event per second.
pub fn rate_to_period(rate_per_sec: u32) -> f32
{
    1.0 / (rate_per_sec.max(1) as f32)
}

//-------------------------------------------------------------------------------------------------------------------

/// Countdown timer measured in seconds.
///
/// The remaining time may go negative when a tick overshoots; callers that run on a fixed cadence add the period
/// back to keep the phase.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Countdown
{
    remaining: f32,
}

impl Countdown
{
    /// Starts counting down from `duration`.
    pub fn start(&mut self, duration: f32)
    {
        self.remaining = duration;
    }

    /// Adds `duration` to the remaining time (fixed-cadence rearm).
    pub fn extend(&mut self, duration: f32)
    {
        self.remaining += duration;
    }

    /// Consumes elapsed time.
    pub fn tick(&mut self, delta_seconds: f32)
    {
        self.remaining -= delta_seconds;
    }

    /// Stops the countdown as if it had elapsed right now.
    pub fn clear(&mut self)
    {
        self.remaining = 0.0;
    }

    pub fn remaining(&self) -> f32 { self.remaining }
    pub fn is_done(&self) -> bool { self.remaining <= 0.0 }
}

//-------------------------------------------------------------------------------------------------------------------
