//local shortcuts
use crate::*;
use skirmish_net::*;
use skirmish_replicator::*;
use skirmish_utils::*;

//third-party shortcuts
use bevy::math::{Quat, Vec3};
use serde::{Serialize, Deserialize};

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

/// Messages the authority sends to observers.
///
/// The envelope's object is the player for player messages and the pickup for pickup messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObserverMsg
{
    PlayerSpawned{ controller: PeerId, location: Vec3, yaw: f32, ammo: i32, health: i32 },
    /// Binds the handles of a player's rocket pool.
    RocketPoolBound{ rockets: Vec<EntityHandle> },
    PickupSpawned(PickupSpec),
    Movement(MovementSnapshot),
    FireConfirmed{ rocket: EntityHandle, launch: u32, location: Vec3, rotation: Quat, ammo: i32 },
    /// Sent only to the peer whose request was rejected.
    FireRejected{ rocket: EntityHandle, launch: u32, ammo: i32 },
    PickupConsumed{ player: EntityHandle, kind: PickupKind, value: i32 },
    HealthChanged{ health: i32 },
    Replicator(ReplicatorMsg),
}

impl IntoSendPolicy for ObserverMsg
{
    fn send_policy(&self) -> SendPolicy
    {
        match self
        {
            Self::PlayerSpawned{..}   => SendReliable.into(),
            Self::RocketPoolBound{..} => SendReliable.into(),
            Self::PickupSpawned(_)    => SendReliable.into(),
            Self::Movement(_)         => SendUnreliable.into(),
            Self::FireConfirmed{..}   => SendReliable.into(),
            Self::FireRejected{..}    => SendReliable.into(),
            Self::PickupConsumed{..}  => SendReliable.into(),
            Self::HealthChanged{..}   => SendReliable.into(),
            Self::Replicator(msg)     => msg.send_policy(),
        }
    }
}

impl From<ReplicatorMsg> for ObserverMsg
{
    fn from(msg: ReplicatorMsg) -> ObserverMsg
    {
        ObserverMsg::Replicator(msg)
    }
}

//-------------------------------------------------------------------------------------------------------------------
