//module tree
mod decode;
mod ids;
mod outbox;
mod packets;
mod role;
mod transport;

//API exports
pub use crate::decode::*;
pub use crate::ids::*;
pub use crate::outbox::*;
pub use crate::packets::*;
pub use crate::role::*;
pub use crate::transport::*;
