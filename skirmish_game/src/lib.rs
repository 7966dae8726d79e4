//! Vehicle-combat gameplay on top of the replication layer.
//!
//! A [`Session`] holds one process's view of a match: players with their movement reconciliation, rocket pools and
//! stats, and the pickups on the map. The authority validates launches, applies damage and resolves pickups; other
//! roles predict what they control and mirror the rest.

//module tree
mod capabilities;
mod fire_control;
mod game_config;
mod game_msg;
mod game_request;
mod handle_authority_incoming;
mod handle_observer_incoming;
mod movement_math;
mod movement_reconciler;
mod pickup;
mod player;
mod player_stats;
mod rocket;
mod rocket_pool;
mod session;
mod visual_correction;

//API exports
pub use crate::capabilities::*;
pub use crate::fire_control::*;
pub use crate::game_config::*;
pub use crate::game_msg::*;
pub use crate::game_request::*;
pub(crate) use crate::handle_authority_incoming::*;
pub(crate) use crate::handle_observer_incoming::*;
pub use crate::movement_math::*;
pub use crate::movement_reconciler::*;
pub use crate::pickup::*;
pub use crate::player::*;
pub use crate::player_stats::*;
pub use crate::rocket::*;
pub use crate::rocket_pool::*;
pub use crate::session::*;
pub use crate::visual_correction::*;
