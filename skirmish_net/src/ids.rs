//local shortcuts

//third-party shortcuts
use serde::{Serialize, Deserialize};

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

/// Id of a participant in a session.
///
/// The authority is always [`PeerId::AUTHORITY`].
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Copy, Clone, Debug, Serialize, Deserialize)]
pub struct PeerId(pub u16);

impl PeerId
{
    pub const AUTHORITY: PeerId = PeerId(0);
}

//-------------------------------------------------------------------------------------------------------------------

/// Stable handle of a replicated object (player, rocket, pickup).
///
/// Handles are issued by the authority and are never reused within a session. A role that has not yet received a
/// handle's binding simply has no entry for it.
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Copy, Clone, Debug, Serialize, Deserialize)]
pub struct EntityHandle(pub u32);

//-------------------------------------------------------------------------------------------------------------------

/// Issues entity handles on the authority.
#[derive(Debug, Default)]
pub struct HandleAllocator
{
    next: u32,
}

impl HandleAllocator
{
    pub fn allocate(&mut self) -> EntityHandle
    {
        let handle = EntityHandle(self.next);
        self.next += 1;
        handle
    }
}

//-------------------------------------------------------------------------------------------------------------------
