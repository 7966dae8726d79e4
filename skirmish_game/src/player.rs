//local shortcuts
use crate::*;
use skirmish_net::*;
use skirmish_replicator::*;

//third-party shortcuts
use bevy::math::{Quat, Vec3};

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

/// Name of the smoothed channel that carries a player's speed.
pub const SPEED_CHANNEL: &str = "speed";

//-------------------------------------------------------------------------------------------------------------------

/// Initial state of a player, as announced by the authority.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlayerSpawn
{
    pub handle: EntityHandle,
    pub controller: PeerId,
    pub location: Vec3,
    pub yaw: f32,
    pub stats: PlayerStats,
}

//-------------------------------------------------------------------------------------------------------------------

/// A vehicle and everything attached to it.
pub struct Player
{
    handle: EntityHandle,
    controller: PeerId,
    settings: PlayerSettings,

    mover: Box<dyn Mover>,
    presentation: Box<dyn Presentation>,
    observer: Box<dyn PlayerObserver>,

    movement: MovementReconciler,
    fire_control: FireControl,
    stats: PlayerStats,
    rockets: RocketPool,
    replicators: ReplicatorSet,
    speed_channel: ChannelId,
    destroyed: bool,
}

impl Player
{
    pub fn new(spawn: PlayerSpawn, role: Role, config: &SessionConfig, factory: &mut dyn EntityFactory) -> Player
    {
        let mover        = factory.mover(spawn.handle, spawn.location, yaw_rotation(spawn.yaw));
        let presentation = factory.presentation(spawn.handle, EntityKind::Player);
        let observer     = factory.player_observer(spawn.handle);

        let mut replicators = ReplicatorSet::new(spawn.handle, spawn.controller, role);
        let speed_channel   = replicators.add_channel(SPEED_CHANNEL, config.speed_replicator);

        Player{
                handle       : spawn.handle,
                controller   : spawn.controller,
                settings     : config.player,
                mover,
                presentation,
                observer,
                movement     : MovementReconciler::new(config.player, spawn.location, spawn.yaw),
                fire_control : FireControl::default(),
                stats        : spawn.stats,
                rockets      : RocketPool::default(),
                replicators,
                speed_channel,
                destroyed    : false,
            }
    }

    /// Creates the rocket pool. Ignored if the pool already exists.
    pub fn bind_rockets(&mut self, handles: &[EntityHandle], settings: RocketSettings, factory: &mut dyn EntityFactory)
    {
        if !self.rockets.is_empty()
        {
            tracing::debug!(player = ?self.handle, "ignoring rocket pool rebind");
            return;
        }

        let rockets = handles
            .iter()
            .map(|handle| Rocket::new(*handle, self.handle, settings, factory.presentation(*handle, EntityKind::Rocket)))
            .collect();
        self.rockets = RocketPool::new(rockets);
    }

    pub fn set_input(&mut self, input: MovementInput)
    {
        self.movement.set_input(input);
    }

    /// Simulates one tick. Reports movement and replicator samples through `outbox`.
    ///
    /// Returns the rockets that exploded this tick.
    pub fn tick(
        &mut self,
        delta_seconds : f32,
        role          : Role,
        outbox        : &mut Outbox,
        probe         : &dyn CollisionProbe,
    ) -> Vec<(EntityHandle, RocketEvent)>
    {
        self.fire_control.tick(delta_seconds);

        if !self.destroyed
        {
            match role.is_controller(self.controller)
            {
                true =>
                {
                    let snapshot = self.movement.tick_controlled(delta_seconds, self.mover.as_mut());
                    match role.is_authority()
                    {
                        true  => outbox.broadcast(self.handle, &ObserverMsg::Movement(snapshot), None),
                        false => outbox.send_to_authority(self.handle, &AuthorityRequest::Movement(snapshot)),
                    }

                    let speed = (self.movement.velocity().abs() * 10.0).round() / 10.0;
                    if let Some(channel) = self.replicators.channel_mut(self.speed_channel)
                    {
                        channel.set_value(speed);
                    }
                }
                false =>
                {
                    let offset = self.movement.tick_observed(delta_seconds, self.mover.as_mut());
                    self.presentation.set_mesh_offset(offset);
                }
            }
        }

        self.replicators.tick::<AuthorityRequest, ObserverMsg>(delta_seconds, outbox);
        self.rockets.tick(delta_seconds, probe)
    }

    /// Replays a movement snapshot from the controller.
    pub fn apply_snapshot(&mut self, snapshot: &MovementSnapshot) -> SnapshotOutcome
    {
        let outcome = self.movement.apply_snapshot(snapshot, self.mover.as_mut());
        if outcome == SnapshotOutcome::Snapped
        {
            self.presentation.set_mesh_offset(self.movement.mesh_offset());
        }
        outcome
    }

    /// Tries to launch a rocket from the current location and facing.
    pub fn fire(&mut self) -> Option<FireRequest>
    {
        if self.destroyed { return None; }

        let location = self.mover.location();
        let rotation = self.mover.facing_rotation();
        let request  = self.fire_control.fire_rocket(
                &self.settings,
                &mut self.stats,
                &mut self.rockets,
                location,
                rotation
            )?;
        self.observer.on_ammo_changed(self.stats.ammo());

        Some(request)
    }

    /// Shows ammo reported by the authority.
    pub fn report_ammo(&mut self, ammo: i32)
    {
        self.stats.set_reported_ammo(ammo);
        self.observer.on_ammo_changed(ammo);
    }

    /// Shows health reported by the authority. The player is destroyed once health drops to zero.
    pub fn report_health(&mut self, health: i32)
    {
        self.stats.set_reported_health(health);
        self.observer.on_health_changed(health);

        if health <= 0 { self.destroy(); }
    }

    /// Plays the death effect, hides the player and stops its simulation.
    pub fn destroy(&mut self)
    {
        if self.destroyed { return; }
        self.destroyed = true;

        let (location, rotation) = (self.mover.location(), self.mover.facing_rotation());
        self.presentation.spawn_effect(EffectKind::PlayerExplosion, location, rotation);
        self.presentation.set_visible(false);
        self.observer.on_death();

        tracing::info!(player = ?self.handle, "player destroyed");
    }

    pub fn handle(&self) -> EntityHandle { self.handle }
    pub fn controller(&self) -> PeerId { self.controller }
    pub fn settings(&self) -> &PlayerSettings { &self.settings }
    pub fn is_destroyed(&self) -> bool { self.destroyed }
    pub fn location(&self) -> Vec3 { self.mover.location() }
    pub fn rotation(&self) -> Quat { self.mover.facing_rotation() }
    pub fn movement(&self) -> &MovementReconciler { &self.movement }
    pub fn fire_control(&self) -> &FireControl { &self.fire_control }
    pub fn stats(&self) -> &PlayerStats { &self.stats }
    pub fn rockets(&self) -> &RocketPool { &self.rockets }
    pub fn replicators(&self) -> &ReplicatorSet { &self.replicators }

    /// Speed as displayed by this process (smoothed on roles that do not control the player).
    pub fn displayed_speed(&self) -> f32
    {
        self.replicators.channel(self.speed_channel).map(|channel| channel.value()).unwrap_or_default()
    }

    pub(crate) fn stats_mut(&mut self) -> &mut PlayerStats { &mut self.stats }
    pub(crate) fn rockets_mut(&mut self) -> &mut RocketPool { &mut self.rockets }
    pub(crate) fn replicators_mut(&mut self) -> &mut ReplicatorSet { &mut self.replicators }
}

//-------------------------------------------------------------------------------------------------------------------
