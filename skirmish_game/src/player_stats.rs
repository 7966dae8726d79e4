//local shortcuts
use crate::*;

//third-party shortcuts

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

/// Ammo and health of a player.
///
/// The local values are what this process displays. The authoritative values are only tracked by the authority;
/// other roles overwrite their local values whenever the authority reports.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlayerStats
{
    ammo: i32,
    authoritative_ammo: i32,
    health: i32,
    authoritative_health: i32,
}

impl PlayerStats
{
    pub fn new(settings: &PlayerSettings) -> PlayerStats
    {
        PlayerStats{
                ammo                 : settings.initial_ammo,
                authoritative_ammo   : settings.initial_ammo,
                health               : settings.max_health,
                authoritative_health : settings.max_health,
            }
    }

    /// Starts from values reported by the authority.
    pub fn from_reported(ammo: i32, health: i32) -> PlayerStats
    {
        PlayerStats{ ammo, authoritative_ammo: ammo, health, authoritative_health: health }
    }

    pub fn ammo(&self) -> i32 { self.ammo }
    pub fn health(&self) -> i32 { self.health }
    pub fn authoritative_ammo(&self) -> i32 { self.authoritative_ammo }
    pub fn authoritative_health(&self) -> i32 { self.authoritative_health }

    /// Predicts the ammo spent by a local launch.
    pub fn predict_ammo_spent(&mut self)
    {
        self.ammo -= 1;
    }

    pub fn set_reported_ammo(&mut self, ammo: i32)
    {
        self.ammo = ammo;
    }

    pub fn set_reported_health(&mut self, health: i32)
    {
        self.health = health;
    }

    /// Spends one round of authoritative ammo. Returns `false` if none is left.
    pub fn consume_authoritative_ammo(&mut self, unlimited: bool) -> bool
    {
        if unlimited { return true; }
        if self.authoritative_ammo <= 0 { return false; }
        self.authoritative_ammo -= 1;
        true
    }

    pub fn add_authoritative_ammo(&mut self, amount: i32) -> i32
    {
        self.authoritative_ammo = self.authoritative_ammo.saturating_add(amount);
        self.authoritative_ammo
    }

    /// Heals up to `max_health`.
    pub fn add_authoritative_health(&mut self, amount: i32, max_health: i32) -> i32
    {
        self.authoritative_health = self.authoritative_health.saturating_add(amount).min(max_health);
        self.authoritative_health
    }

    pub fn apply_authoritative_damage(&mut self, damage: i32) -> i32
    {
        self.authoritative_health = self.authoritative_health.saturating_sub(damage.max(0));
        self.authoritative_health
    }

    /// Copies the authoritative values into the displayed values.
    pub fn sync_from_authoritative(&mut self)
    {
        self.ammo   = self.authoritative_ammo;
        self.health = self.authoritative_health;
    }
}

//-------------------------------------------------------------------------------------------------------------------
