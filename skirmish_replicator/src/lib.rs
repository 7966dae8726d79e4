//! Smoothed scalar replication.
//!
//! A value owned by its controlling role is sampled at a fixed send rate and relayed through the authority. Every
//! other role buffers the samples in a crumb trail and time-warps through it, so the displayed value moves
//! continuously instead of stepping once per sample.
//!
//! - The controlling role calls [`SmoothedScalarChannel::set_value`] whenever the value changes.
//! - A value that stays static for the configured sleep duration is sent once as a terminal sample, after which the
//!   channel goes idle until the value changes again.
//! - Stale samples are discarded by sync tag.
//!

//module tree
mod crumb_trail;
mod replicator_config;
mod replicator_msg;
mod replicator_set;
mod smoothed_scalar_channel;
mod sync_tag;

//API exports
pub use crate::crumb_trail::*;
pub use crate::replicator_config::*;
pub use crate::replicator_msg::*;
pub use crate::replicator_set::*;
pub use crate::smoothed_scalar_channel::*;
pub use crate::sync_tag::*;
