//local shortcuts

//third-party shortcuts
use bevy::prelude::{Deref, DerefMut};
use serde::{Serialize, Deserialize};

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

/// Sequence number of a sample. Strictly increasing per sending channel.
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Copy, Clone, Default, Debug, Serialize, Deserialize, Deref, DerefMut)]
pub struct SyncTag(pub u32);

impl SyncTag
{
    /// Returns the current tag and advances to the next one.
    pub fn advance(&mut self) -> SyncTag
    {
        let tag = *self;
        self.0 = self.0.wrapping_add(1);
        tag
    }
}

//-------------------------------------------------------------------------------------------------------------------

/// Remembers the last accepted sync tag and rejects anything older.
///
/// Tags equal to the last accepted tag are accepted.
#[derive(Debug, Default, Copy, Clone)]
pub struct SyncTagGuard
{
    last: Option<SyncTag>,
}

impl SyncTagGuard
{
    /// Accepts `tag` if it is not older than the last accepted tag.
    pub fn accept(&mut self, tag: SyncTag) -> bool
    {
        if let Some(last) = self.last
        {
            if tag < last { return false; }
        }
        self.last = Some(tag);
        true
    }

    pub fn last(&self) -> Option<SyncTag> { self.last }
}

//-------------------------------------------------------------------------------------------------------------------
