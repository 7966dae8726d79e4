//module tree
mod mailbox;
mod send_policy;
mod serialization;
mod timing;

//API exports
pub use crate::mailbox::*;
pub use crate::send_policy::*;
pub use crate::serialization::*;
pub use crate::timing::*;
