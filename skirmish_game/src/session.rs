//local shortcuts
use crate::*;
use skirmish_net::*;

//third-party shortcuts
use bevy::math::Vec3;

//standard shortcuts
use std::collections::BTreeMap;

//-------------------------------------------------------------------------------------------------------------------

/// One process's view of a match.
///
/// The authority owns object creation and every authoritative stat. Other roles mirror what the authority announces
/// and predict only what they control. All traffic goes through the session's outbox; the host moves packets between
/// the outbox and a [`Transport`] with [`Session::flush`] and [`Session::receive_all`].
pub struct Session
{
    pub(crate) role: Role,
    pub(crate) config: SessionConfig,
    pub(crate) outbox: Outbox,
    pub(crate) handles: HandleAllocator,
    pub(crate) players: BTreeMap<EntityHandle, Player>,
    pub(crate) pickups: BTreeMap<EntityHandle, Pickup>,
    pub(crate) probe: Box<dyn CollisionProbe>,
    pub(crate) factory: Box<dyn EntityFactory>,
}

impl Session
{
    pub fn new_authority(
        config  : SessionConfig,
        probe   : Box<dyn CollisionProbe>,
        factory : Box<dyn EntityFactory>,
    ) -> Session
    {
        Self::new(Role::authority(), config, probe, factory)
    }

    pub fn new_observer(
        peer    : PeerId,
        config  : SessionConfig,
        probe   : Box<dyn CollisionProbe>,
        factory : Box<dyn EntityFactory>,
    ) -> Session
    {
        Self::new(Role::observer(peer), config, probe, factory)
    }

    fn new(role: Role, config: SessionConfig, probe: Box<dyn CollisionProbe>, factory: Box<dyn EntityFactory>) -> Session
    {
        tracing::info!(peer = ?role.peer(), authority = role.is_authority(), "starting session");
        Session{
                role,
                config,
                outbox   : Outbox::new(role.peer()),
                handles  : HandleAllocator::default(),
                players  : BTreeMap::default(),
                pickups  : BTreeMap::default(),
                probe,
                factory,
            }
    }

    pub fn role(&self) -> Role { self.role }
    pub fn config(&self) -> &SessionConfig { &self.config }

    pub fn player(&self, handle: EntityHandle) -> Option<&Player> { self.players.get(&handle) }
    pub fn players(&self) -> impl Iterator<Item = &Player> + '_ { self.players.values() }
    pub fn pickup(&self, handle: EntityHandle) -> Option<&Pickup> { self.pickups.get(&handle) }
    pub fn pickups(&self) -> impl Iterator<Item = &Pickup> + '_ { self.pickups.values() }

    /// Number of packets waiting to be flushed.
    pub fn pending_packets(&self) -> usize { self.outbox.len() }

    /// Spawns a player controlled by `controller` and announces it to every peer. Authority only.
    pub fn spawn_player(&mut self, controller: PeerId, location: Vec3, yaw: f32) -> Option<EntityHandle>
    {
        if !self.role.is_authority()
        {
            tracing::warn!("only the authority may spawn players");
            return None;
        }

        let handle = self.handles.allocate();
        let spawn  = PlayerSpawn{ handle, controller, location, yaw, stats: PlayerStats::new(&self.config.player) };
        let rocket_handles: Vec<EntityHandle> = (0..ROCKET_POOL_SIZE).map(|_| self.handles.allocate()).collect();

        let mut player = Player::new(spawn, self.role, &self.config, self.factory.as_mut());
        player.bind_rockets(&rocket_handles, self.config.rocket, self.factory.as_mut());
        self.players.insert(handle, player);

        tracing::info!(?handle, ?controller, "spawned player");
        announce_player(&mut self.outbox, &spawn, &rocket_handles, None);

        Some(handle)
    }

    /// Spawns a pickup and announces it to every peer. Authority only.
    pub fn spawn_pickup(&mut self, spec: PickupSpec) -> Option<EntityHandle>
    {
        if !self.role.is_authority()
        {
            tracing::warn!("only the authority may spawn pickups");
            return None;
        }

        let handle       = self.handles.allocate();
        let presentation = self.factory.presentation(handle, EntityKind::Pickup(spec.kind));
        self.pickups.insert(handle, Pickup::new(handle, spec, presentation));

        tracing::debug!(?handle, kind = ?spec.kind, "spawned pickup");
        self.outbox.broadcast(handle, &ObserverMsg::PickupSpawned(spec), None);

        Some(handle)
    }

    /// Announces every existing object to a peer that connected late. Authority only.
    pub fn sync_peer(&mut self, peer: PeerId)
    {
        if !self.role.is_authority() { return; }

        for player in self.players.values()
        {
            let spawn = PlayerSpawn{
                    handle     : player.handle(),
                    controller : player.controller(),
                    location   : player.location(),
                    yaw        : player.movement().yaw(),
                    stats      : *player.stats(),
                };
            announce_player(&mut self.outbox, &spawn, &player.rockets().handles(), Some(peer));
        }

        for pickup in self.pickups.values()
        {
            self.outbox.send_to(pickup.handle(), &ObserverMsg::PickupSpawned(*pickup.spec()), peer);
        }
    }

    /// Sets the movement input of a player this process controls.
    pub fn set_input(&mut self, player: EntityHandle, input: MovementInput) -> bool
    {
        let Some(player) = self.players.get_mut(&player) else { return false; };
        if !self.role.is_controller(player.controller())
        {
            tracing::warn!(player = ?player.handle(), "ignoring input for a player this process does not control");
            return false;
        }

        player.set_input(input);
        true
    }

    /// Tries to launch a rocket from a player this process controls.
    ///
    /// Returns `true` if the launch was admitted locally. The authority may still reject it.
    pub fn request_fire(&mut self, player_handle: EntityHandle) -> bool
    {
        let Some(player) = self.players.get_mut(&player_handle) else { return false; };
        if !self.role.is_controller(player.controller()) { return false; }

        let Some(request) = player.fire() else { return false; };

        match self.role.is_authority()
        {
            true  => handle_fire_request(self, PeerId::AUTHORITY, player_handle, request),
            false => self.outbox.send_to_authority(player_handle, &AuthorityRequest::FireRocket(request)),
        }
        true
    }

    /// Consumes a pickup on behalf of a player. Authority only; the host calls this when it detects an overlap.
    pub fn on_pickup_overlap(&mut self, player_handle: EntityHandle, pickup_handle: EntityHandle) -> bool
    {
        if !self.role.is_authority() { return false; }

        let Some(pickup) = self.pickups.get_mut(&pickup_handle) else { return false; };
        let Some(player) = self.players.get_mut(&player_handle) else { return false; };
        if player.is_destroyed() || !pickup.consume() { return false; }

        let kind   = pickup.kind();
        let amount = pickup.spec().amount;
        let value  = match kind
        {
            PickupKind::Ammo =>
            {
                let ammo = player.stats_mut().add_authoritative_ammo(amount);
                player.report_ammo(ammo);
                ammo
            }
            PickupKind::Health =>
            {
                let max_health = player.settings().max_health;
                let health = player.stats_mut().add_authoritative_health(amount, max_health);
                player.report_health(health);
                health
            }
        };

        tracing::debug!(player = ?player_handle, pickup = ?pickup_handle, ?kind, value, "pickup collected");
        self.outbox.broadcast(pickup_handle, &ObserverMsg::PickupConsumed{ player: player_handle, kind, value }, None);
        true
    }

    /// Advances the simulation by `delta_seconds`.
    pub fn tick(&mut self, delta_seconds: f32)
    {
        let mut events = Vec::new();
        for player in self.players.values_mut()
        {
            events.extend(player.tick(delta_seconds, self.role, &mut self.outbox, self.probe.as_ref()));
        }

        for pickup in self.pickups.values_mut()
        {
            pickup.tick(delta_seconds);
        }

        if !self.role.is_authority() { return; }

        let damage = self.config.player.rocket_damage;
        for (rocket, event) in events
        {
            let RocketEvent::Hit{ target: Some(target), .. } = event else { continue; };
            tracing::trace!(?rocket, ?target, "rocket hit");
            apply_damage(self, target, damage);
        }
    }

    /// Handles one packet.
    pub fn receive(&mut self, packet: &Packet)
    {
        match self.role.is_authority()
        {
            true =>
            {
                let Ok(envelope) = decode_packet::<AuthorityRequest>(packet) else { return; };
                handle_authority_request(self, packet.sender, envelope);
            }
            false =>
            {
                let Ok(envelope) = decode_packet::<ObserverMsg>(packet) else { return; };
                handle_observer_msg(self, packet.sender, envelope);
            }
        }
    }

    /// Handles every packet that arrived on `transport`.
    pub fn receive_all(&mut self, transport: &mut impl Transport)
    {
        for packet in transport.receive()
        {
            self.receive(&packet);
        }
    }

    /// Hands every pending packet to `transport`.
    pub fn flush(&mut self, transport: &mut impl Transport)
    {
        for packet in self.outbox.drain()
        {
            transport.send(packet);
        }
    }
}

//-------------------------------------------------------------------------------------------------------------------

fn announce_player(outbox: &mut Outbox, spawn: &PlayerSpawn, rockets: &[EntityHandle], peer: Option<PeerId>)
{
    let spawned = ObserverMsg::PlayerSpawned{
            controller : spawn.controller,
            location   : spawn.location,
            yaw        : spawn.yaw,
            ammo       : spawn.stats.authoritative_ammo(),
            health     : spawn.stats.authoritative_health(),
        };
    let bound = ObserverMsg::RocketPoolBound{ rockets: rockets.to_vec() };

    match peer
    {
        Some(peer) =>
        {
            outbox.send_to(spawn.handle, &spawned, peer);
            outbox.send_to(spawn.handle, &bound, peer);
        }
        None =>
        {
            outbox.broadcast(spawn.handle, &spawned, None);
            outbox.broadcast(spawn.handle, &bound, None);
        }
    }
}

//-------------------------------------------------------------------------------------------------------------------
