//local shortcuts
use crate::*;
use skirmish_utils::*;

//third-party shortcuts
use bytes::Bytes;
use serde::{Serialize, Deserialize};

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

/// Destination of a packet.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Target
{
    /// The authority only.
    Authority,
    /// Every peer except the sender, and except `except` if set.
    Broadcast{ except: Option<PeerId> },
    /// One specific peer.
    Only(PeerId),
}

impl Target
{
    /// Checks if `peer` should receive a packet sent by `sender` to this target.
    pub fn includes(&self, sender: PeerId, peer: PeerId) -> bool
    {
        if peer == sender { return false; }

        match *self
        {
            Target::Authority           => peer == PeerId::AUTHORITY,
            Target::Broadcast{ except } => except != Some(peer),
            Target::Only(target)        => peer == target,
        }
    }
}

//-------------------------------------------------------------------------------------------------------------------

/// A message aimed at one replicated object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T>
{
    /// The object that resolves and handles the message on the receiving role.
    pub object: EntityHandle,
    /// The message.
    pub message: T,
}

//-------------------------------------------------------------------------------------------------------------------

/// A serialized envelope in flight between peers.
#[derive(Debug, Clone)]
pub struct Packet
{
    /// Id of the originating peer.
    pub sender: PeerId,
    /// Destination.
    pub target: Target,
    /// Packet send policy (reliability and ordering guarantee).
    pub policy: SendPolicy,
    /// Serialized [`Envelope`].
    pub payload: Bytes,
}

//-------------------------------------------------------------------------------------------------------------------
