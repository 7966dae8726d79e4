//local shortcuts
use crate::*;

//third-party shortcuts

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

/// The simulation role of a local process.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Role
{
    /// This process's peer id.
    peer: PeerId,
}

impl Role
{
    pub fn authority() -> Role
    {
        Role{ peer: PeerId::AUTHORITY }
    }

    pub fn observer(peer: PeerId) -> Role
    {
        if peer == PeerId::AUTHORITY { panic!("Role: observer may not use the authority peer id!"); }
        Role{ peer }
    }

    pub fn peer(&self) -> PeerId { self.peer }

    /// Am I the authority?
    pub fn is_authority(&self) -> bool { self.peer == PeerId::AUTHORITY }

    /// Am I the controlling role of an object controlled by `controller`?
    pub fn is_controller(&self, controller: PeerId) -> bool { self.peer == controller }
}

//-------------------------------------------------------------------------------------------------------------------
