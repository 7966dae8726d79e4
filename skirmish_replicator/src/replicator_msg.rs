//local shortcuts
use crate::*;
use skirmish_utils::*;

//third-party shortcuts
use serde::{Serialize, Deserialize};

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

/// Index of a channel within its owner's [`ReplicatorSet`].
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Copy, Clone, Debug, Serialize, Deserialize)]
pub struct ChannelId(pub u16);

//-------------------------------------------------------------------------------------------------------------------

/// One sample produced by the controlling side of a channel.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarSample
{
    pub tag: SyncTag,
    pub value: f32,
    /// The value is static; no further samples follow until it changes.
    pub terminal: bool,
}

//-------------------------------------------------------------------------------------------------------------------

/// Replication traffic of a channel.
///
/// The same message travels owner -> authority and authority -> observers.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplicatorMsg
{
    pub channel: ChannelId,
    pub sample: ScalarSample,
}

impl IntoSendPolicy for ReplicatorMsg
{
    fn send_policy(&self) -> SendPolicy
    {
        match self.sample.terminal
        {
            false => SendUnreliable.into(),
            true  => SendReliable.into(),
        }
    }
}

//-------------------------------------------------------------------------------------------------------------------
