//local shortcuts
use crate::test_helpers::*;
use skirmish_game::*;
use skirmish_net::*;

//third-party shortcuts

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

/// One session plus its link to the hub and the record of its collaborators.
pub struct MatchPeer
{
    pub session: Session,
    pub link: LoopbackEndpoint,
    pub record: SharedRecord,
}

impl MatchPeer
{
    fn new(session: Session, link: LoopbackEndpoint, record: SharedRecord) -> MatchPeer
    {
        MatchPeer{ session, link, record }
    }
}

//-------------------------------------------------------------------------------------------------------------------

/// An authority and several observers connected through a [`LoopbackHub`].
///
/// All sessions share one set of probe targets.
pub struct LoopbackMatch
{
    pub hub: LoopbackHub,
    pub targets: SharedTargets,
    pub authority: MatchPeer,
    pub clients: Vec<MatchPeer>,
    client_config: SessionConfig,
}

impl LoopbackMatch
{
    /// Makes a match with clients `PeerId(1)..=PeerId(num_clients)`.
    pub fn new(num_clients: u16, config: SessionConfig) -> LoopbackMatch
    {
        Self::with_configs(num_clients, config, config)
    }

    /// Makes a match where the clients run with a different config than the authority.
    pub fn with_configs(num_clients: u16, authority_config: SessionConfig, client_config: SessionConfig) -> LoopbackMatch
    {
        init_test_logging();

        let mut hub = LoopbackHub::new(7);
        let targets = SharedTargets::default();

        let authority = make_peer(&mut hub, &targets, PeerId::AUTHORITY, authority_config);
        let mut lmatch = LoopbackMatch{ hub, targets, authority, clients: Vec::default(), client_config };
        for peer in 1..=num_clients { lmatch.add_client(PeerId(peer)); }

        lmatch
    }

    /// Connects another client. It only learns about existing objects once the authority syncs it.
    pub fn add_client(&mut self, peer: PeerId) -> usize
    {
        let client = make_peer(&mut self.hub, &self.targets, peer, self.client_config);
        self.clients.push(client);
        self.clients.len() - 1
    }

    pub fn client(&self, peer: u16) -> &MatchPeer
    {
        &self.clients[(peer - 1) as usize]
    }

    pub fn client_mut(&mut self, peer: u16) -> &mut MatchPeer
    {
        &mut self.clients[(peer - 1) as usize]
    }

    pub fn add_target(&mut self, target: ProbeTarget)
    {
        self.targets.borrow_mut().push(target);
    }

    /// Moves every pending packet one hop.
    pub fn exchange(&mut self)
    {
        self.authority.session.flush(&mut self.authority.link);
        for client in self.clients.iter_mut() { client.session.flush(&mut client.link); }

        self.hub.pump();

        self.authority.session.receive_all(&mut self.authority.link);
        for client in self.clients.iter_mut() { client.session.receive_all(&mut client.link); }
    }

    /// Exchanges until relayed traffic has reached every peer.
    pub fn settle(&mut self)
    {
        for _ in 0..3 { self.exchange(); }
    }

    /// Ticks every session, then moves packets one hop.
    pub fn step(&mut self, delta_seconds: f32)
    {
        self.authority.session.tick(delta_seconds);
        for client in self.clients.iter_mut() { client.session.tick(delta_seconds); }
        self.exchange();
    }
}

//-------------------------------------------------------------------------------------------------------------------

fn make_peer(hub: &mut LoopbackHub, targets: &SharedTargets, peer: PeerId, config: SessionConfig) -> MatchPeer
{
    let record  = SharedRecord::default();
    let probe   = Box::new(ScriptedProbe::new(targets.clone()));
    let factory = Box::new(ScriptedFactory{ record: record.clone() });

    let session = match peer == PeerId::AUTHORITY
    {
        true  => Session::new_authority(config, probe, factory),
        false => Session::new_observer(peer, config, probe, factory),
    };

    MatchPeer::new(session, hub.connect(peer), record)
}

//-------------------------------------------------------------------------------------------------------------------
