//local shortcuts
use crate::*;
use skirmish_utils::*;

//third-party shortcuts
use bytes::Bytes;
use serde::Serialize;

//standard shortcuts
use std::collections::{VecDeque, vec_deque::Drain};

//-------------------------------------------------------------------------------------------------------------------

/// A queue of packets waiting to be handed to the transport.
///
/// The send policy of each packet is taken from the message itself (see [`IntoSendPolicy`]).
#[derive(Debug)]
pub struct Outbox
{
    sender: PeerId,
    buffer: VecDeque<Packet>,
}

impl Outbox
{
    pub fn new(sender: PeerId) -> Outbox
    {
        Outbox{ sender, buffer: VecDeque::default() }
    }

    /// Sends a message to the authority.
    pub fn send_to_authority<T: Serialize + IntoSendPolicy>(&mut self, object: EntityHandle, message: &T)
    {
        self.push(object, message, Target::Authority);
    }

    /// Sends a message to every other peer, optionally skipping one.
    pub fn broadcast<T: Serialize + IntoSendPolicy>(&mut self, object: EntityHandle, message: &T, except: Option<PeerId>)
    {
        self.push(object, message, Target::Broadcast{ except });
    }

    /// Sends a message to one peer.
    pub fn send_to<T: Serialize + IntoSendPolicy>(&mut self, object: EntityHandle, message: &T, peer: PeerId)
    {
        self.push(object, message, Target::Only(peer));
    }

    pub fn len(&self) -> usize { self.buffer.len() }
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }

    pub fn drain(&mut self) -> Drain<'_, Packet>
    {
        self.buffer.drain(..)
    }

    fn push<T: Serialize + IntoSendPolicy>(&mut self, object: EntityHandle, message: &T, target: Target)
    {
        let policy  = message.send_policy();
        let payload = ser_msg(&Envelope{ object, message });
        self.buffer.push_back(
                Packet{
                        sender  : self.sender,
                        target,
                        policy,
                        payload : Bytes::from(payload),
                    }
            );
    }
}

//-------------------------------------------------------------------------------------------------------------------
