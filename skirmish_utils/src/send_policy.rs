//local shortcuts

//third-party shortcuts
use serde::{Serialize, Deserialize};

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

/// Delivery class of a message.
///
/// - `Unreliable`: may be dropped or reordered; receivers discard anything older than the last accepted message.
/// - `Reliable`: delivered exactly once and in send order per sender.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum SendPolicy
{
    Unreliable,
    Reliable,
}

//-------------------------------------------------------------------------------------------------------------------

#[derive(Debug, Copy, Clone)]
pub struct SendUnreliable;
#[derive(Debug, Copy, Clone)]
pub struct SendReliable;

impl From<SendUnreliable> for SendPolicy
{
    fn from(_: SendUnreliable) -> SendPolicy { SendPolicy::Unreliable }
}
impl From<SendReliable> for SendPolicy
{
    fn from(_: SendReliable) -> SendPolicy { SendPolicy::Reliable }
}

//-------------------------------------------------------------------------------------------------------------------

/// Helper trait for converting a message type into its send policy.
///
/// Especially useful for enum-type messages where different variants have different send policies.
pub trait IntoSendPolicy
{
    fn send_policy(&self) -> SendPolicy;
}

//-------------------------------------------------------------------------------------------------------------------
