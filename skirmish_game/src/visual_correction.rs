//local shortcuts

//third-party shortcuts
use bevy::math::Vec3;

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

/// Offset between a body's visual mesh and its collision origin, blended back to neutral after a snap.
///
/// Presentation-only: the simulation never reads it.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct VisualCorrection
{
    offset: Vec3,
    initial_offset: Vec3,
    duration: f32,
    remaining: f32,
}

impl VisualCorrection
{
    /// Starts blending `offset` to zero over `duration` seconds.
    pub fn start(&mut self, offset: Vec3, duration: f32)
    {
        self.offset         = offset;
        self.initial_offset = offset;
        self.duration       = duration.max(0.0);
        self.remaining      = self.duration;

        if self.duration <= 0.0 { self.offset = Vec3::ZERO; }
    }

    /// Advances the blend and returns the current offset.
    pub fn update(&mut self, delta_seconds: f32) -> Vec3
    {
        if self.remaining <= 0.0 { self.offset = Vec3::ZERO; return Vec3::ZERO; }

        self.remaining -= delta_seconds;
        if self.remaining <= 0.0 { self.offset = Vec3::ZERO; return Vec3::ZERO; }

        let t = 1.0 - self.remaining / self.duration;
        self.offset = self.initial_offset * (1.0 - ease_out_cubic(t));
        self.offset
    }

    pub fn offset(&self) -> Vec3 { self.offset }
    pub fn is_complete(&self) -> bool { self.remaining <= 0.0 }
}

//-------------------------------------------------------------------------------------------------------------------

fn ease_out_cubic(t: f32) -> f32
{
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

//-------------------------------------------------------------------------------------------------------------------
