//local shortcuts
use crate::*;
use skirmish_replicator::*;
use skirmish_utils::*;

//third-party shortcuts
use serde::{Serialize, Deserialize};

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

/// Requests a controlling peer sends to the authority about one of its objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AuthorityRequest
{
    /// Movement state of the sender's player.
    Movement(MovementSnapshot),
    /// A predicted rocket launch.
    FireRocket(FireRequest),
    /// A sample of one of the sender's smoothed channels.
    Replicator(ReplicatorMsg),
}

impl IntoSendPolicy for AuthorityRequest
{
    fn send_policy(&self) -> SendPolicy
    {
        match self
        {
            Self::Movement(_)     => SendUnreliable.into(),
            Self::FireRocket(_)   => SendReliable.into(),
            Self::Replicator(msg) => msg.send_policy(),
        }
    }
}

impl From<ReplicatorMsg> for AuthorityRequest
{
    fn from(msg: ReplicatorMsg) -> AuthorityRequest
    {
        AuthorityRequest::Replicator(msg)
    }
}

//-------------------------------------------------------------------------------------------------------------------
