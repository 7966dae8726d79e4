//local shortcuts
use crate::*;
use skirmish_net::*;
use skirmish_utils::*;

//third-party shortcuts
use serde::Serialize;

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

/// The smoothed scalar channels attached to one replicated object.
///
/// Channels are created on demand by name and live as long as the set (i.e. as long as their owner).
#[derive(Debug)]
pub struct ReplicatorSet
{
    /// The object the channels belong to.
    owner: EntityHandle,
    /// The peer that controls the channel values.
    controller: PeerId,
    /// This process's role.
    role: Role,
    channels: Vec<(String, SmoothedScalarChannel)>,
}

impl ReplicatorSet
{
    pub fn new(owner: EntityHandle, controller: PeerId, role: Role) -> ReplicatorSet
    {
        ReplicatorSet{ owner, controller, role, channels: Vec::default() }
    }

    /// Gets the channel named `name`, creating it if needed.
    ///
    /// Every role must add the same channels in the same order so channel ids agree.
    pub fn add_channel(&mut self, name: &str, config: ReplicatorConfig) -> ChannelId
    {
        if let Some(id) = self.channel_id(name) { return id; }

        let channel = SmoothedScalarChannel::new(
                config,
                self.role.is_controller(self.controller),
                self.role.is_authority()
            );
        self.channels.push((String::from(name), channel));
        tracing::trace!(owner = ?self.owner, name, "added smoothed scalar channel");

        ChannelId((self.channels.len() - 1) as u16)
    }

    pub fn channel_id(&self, name: &str) -> Option<ChannelId>
    {
        self.channels
            .iter()
            .position(|(channel_name, _)| channel_name == name)
            .map(|index| ChannelId(index as u16))
    }

    pub fn channel(&self, id: ChannelId) -> Option<&SmoothedScalarChannel>
    {
        self.channels.get(id.0 as usize).map(|(_, channel)| channel)
    }

    pub fn channel_mut(&mut self, id: ChannelId) -> Option<&mut SmoothedScalarChannel>
    {
        self.channels.get_mut(id.0 as usize).map(|(_, channel)| channel)
    }

    /// Number of channels that are not idle.
    pub fn num_awake(&self) -> usize
    {
        self.channels.iter().filter(|(_, channel)| !channel.is_sleeping()).count()
    }

    pub fn owner(&self) -> EntityHandle { self.owner }
    pub fn controller(&self) -> PeerId { self.controller }

    /// Ticks every awake channel and sends the samples that are due.
    ///
    /// Samples go to the authority as `R` messages, or straight to every observer as `O` messages if this role is
    /// the authority.
    pub fn tick<R, O>(&mut self, delta_seconds: f32, outbox: &mut Outbox)
    where
        R: From<ReplicatorMsg> + Serialize + IntoSendPolicy,
        O: From<ReplicatorMsg> + Serialize + IntoSendPolicy,
    {
        for (index, (_, channel)) in self.channels.iter_mut().enumerate()
        {
            if channel.is_sleeping() { continue; }
            let Some(sample) = channel.tick(delta_seconds) else { continue; };

            let msg = ReplicatorMsg{ channel: ChannelId(index as u16), sample };
            match self.role.is_authority()
            {
                true  => outbox.broadcast(self.owner, &O::from(msg), None),
                false => outbox.send_to_authority(self.owner, &R::from(msg)),
            }
        }
    }

    /// Handles a replicator message that arrived from `sender`.
    ///
    /// On the authority, samples from the controlling peer are relayed to every other observer as `O` messages. This
    /// relay is the only way the authority applies a sample. Echoes of samples this role sent are ignored.
    pub fn handle_msg<O>(&mut self, sender: PeerId, msg: ReplicatorMsg, outbox: &mut Outbox)
    where
        O: From<ReplicatorMsg> + Serialize + IntoSendPolicy,
    {
        let owner        = self.owner;
        let controller   = self.controller;
        let is_authority = self.role.is_authority();

        // our own samples carry nothing new for us
        if sender == self.role.peer()
        {
            tracing::trace!(?owner, channel = ?msg.channel, "ignoring echo of our own scalar sample");
            return;
        }

        let Some(channel) = self.channel_mut(msg.channel)
        else { tracing::warn!(?owner, channel = ?msg.channel, "replicator message for unknown channel"); return; };

        if !is_authority
        {
            channel.receive(msg.sample);
            return;
        }

        if sender != controller
        {
            tracing::warn!(?owner, ?sender, ?controller, "ignoring scalar sample from a peer that does not control it");
            return;
        }

        let Some(relayed) = channel.relay_from_owner(msg.sample) else { return; };
        outbox.broadcast(owner, &O::from(ReplicatorMsg{ channel: msg.channel, sample: relayed }), Some(controller));
    }
}

//-------------------------------------------------------------------------------------------------------------------
