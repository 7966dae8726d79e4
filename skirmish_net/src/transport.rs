//local shortcuts
use crate::*;
use skirmish_utils::*;

//third-party shortcuts
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

/// The message layer a session talks through.
///
/// Implementations must deliver reliable packets from a given sender in send order. Unreliable packets may be
/// dropped or reordered.
pub trait Transport
{
    /// Hands a packet to the transport.
    fn send(&mut self, packet: Packet);
    /// Takes every packet that arrived since the last call.
    fn receive(&mut self) -> Vec<Packet>;
}

//-------------------------------------------------------------------------------------------------------------------

/// One peer's connection to a [`LoopbackHub`].
#[derive(Debug)]
pub struct LoopbackEndpoint
{
    peer     : PeerId,
    to_hub   : MailboxSender<Packet>,
    from_hub : MailboxReceiver<Packet>,
}

impl LoopbackEndpoint
{
    pub fn peer(&self) -> PeerId { self.peer }
}

impl Transport for LoopbackEndpoint
{
    fn send(&mut self, packet: Packet)
    {
        if !self.to_hub.post(packet)
            { tracing::warn!(peer = ?self.peer, "loopback hub is gone, dropping packet"); }
    }

    fn receive(&mut self) -> Vec<Packet>
    {
        self.from_hub.take_all()
    }
}

//-------------------------------------------------------------------------------------------------------------------

/// In-memory transport connecting several peers of one process.
///
/// Packets sit in the hub until [`LoopbackHub::pump`] routes them. Unreliable packets can be dropped and reordered
/// to exercise stale-data handling; the randomness is seeded so runs are reproducible.
#[derive(Debug)]
pub struct LoopbackHub
{
    inbound_sender  : MailboxSender<Packet>,
    inbound         : MailboxReceiver<Packet>,
    peers           : Vec<(PeerId, MailboxSender<Packet>)>,
    unreliable_loss : f32,
    reorder         : bool,
    rng             : StdRng,
    dropped         : usize,
}

impl LoopbackHub
{
    pub fn new(seed: u64) -> LoopbackHub
    {
        let (inbound_sender, inbound) = new_mailbox();
        LoopbackHub{
                inbound_sender,
                inbound,
                peers           : Vec::default(),
                unreliable_loss : 0.0,
                reorder         : false,
                rng             : StdRng::seed_from_u64(seed),
                dropped         : 0,
            }
    }

    /// Connects a new peer.
    pub fn connect(&mut self, peer: PeerId) -> LoopbackEndpoint
    {
        if self.peers.iter().any(|(existing, _)| *existing == peer)
            { panic!("LoopbackHub: peer {:?} is already connected!", peer); }

        let (to_peer, from_hub) = new_mailbox();
        self.peers.push((peer, to_peer));
        tracing::debug!(?peer, "loopback peer connected");

        LoopbackEndpoint{ peer, to_hub: self.inbound_sender.clone(), from_hub }
    }

    /// Sets the chance in `[0, 1]` that an unreliable packet is dropped per destination.
    pub fn set_unreliable_loss(&mut self, chance: f32)
    {
        self.unreliable_loss = chance.clamp(0.0, 1.0);
    }

    /// Shuffles unreliable packets within each pump when enabled.
    pub fn set_reorder(&mut self, reorder: bool)
    {
        self.reorder = reorder;
    }

    /// Number of unreliable packets dropped so far.
    pub fn dropped(&self) -> usize { self.dropped }

    /// Routes every pending packet to its destinations. Returns the number of deliveries.
    pub fn pump(&mut self) -> usize
    {
        let mut delivered  = 0;
        let mut unreliable = Vec::new();

        for packet in self.inbound.take_all()
        {
            for (peer, mailbox) in self.peers.iter()
            {
                if !packet.target.includes(packet.sender, *peer) { continue; }

                match packet.policy
                {
                    SendPolicy::Reliable =>
                    {
                        if mailbox.post(packet.clone()) { delivered += 1; }
                    }
                    SendPolicy::Unreliable =>
                    {
                        if self.unreliable_loss > 0.0 && self.rng.gen::<f32>() < self.unreliable_loss
                        {
                            self.dropped += 1;
                            tracing::trace!(?peer, sender = ?packet.sender, "loopback dropped unreliable packet");
                            continue;
                        }
                        unreliable.push((mailbox.clone(), packet.clone()));
                    }
                }
            }
        }

        if self.reorder { unreliable.shuffle(&mut self.rng); }

        for (mailbox, packet) in unreliable
        {
            if mailbox.post(packet) { delivered += 1; }
        }

        delivered
    }
}

//-------------------------------------------------------------------------------------------------------------------
