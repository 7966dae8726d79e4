//local shortcuts
use crate::*;
use skirmish_utils::*;

//third-party shortcuts
use serde::de::DeserializeOwned;

//standard shortcuts
use std::fmt::Debug;

//-------------------------------------------------------------------------------------------------------------------

/// Reasons a packet may fail to decode.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DecodeError
{
    /// The payload is not a valid envelope for the expected message type.
    Malformed,
    /// The message arrived on a different delivery class than the one it must travel on.
    PolicyMismatch,
}

//-------------------------------------------------------------------------------------------------------------------

/// Deserializes a [`Packet`] into an envelope of `T`.
///
/// Messages that arrived with a send policy other than their own are rejected, so an unreliable channel can never
/// be used to inject a message that drives a state transition.
pub fn decode_packet<T>(packet: &Packet) -> Result<Envelope<T>, DecodeError>
where
    T: Debug + DeserializeOwned + IntoSendPolicy
{
    let Some(envelope) = deser_msg::<Envelope<T>>(&packet.payload[..])
    else
    {
        tracing::warn!(sender = ?packet.sender, "failed deserializing packet");
        return Err(DecodeError::Malformed);
    };

    if envelope.message.send_policy() != packet.policy
    {
        tracing::trace!(sender = ?packet.sender, policy = ?packet.policy, "ignoring message with invalid send policy");
        return Err(DecodeError::PolicyMismatch);
    }

    tracing::trace!(sender = ?packet.sender, object = ?envelope.object, message = ?envelope.message, "received message");
    Ok(envelope)
}

//-------------------------------------------------------------------------------------------------------------------
