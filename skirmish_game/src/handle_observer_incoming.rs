//local shortcuts
use crate::*;
use skirmish_net::*;

//third-party shortcuts
use bevy::math::{Quat, Vec3};

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------
//-------------------------------------------------------------------------------------------------------------------

fn handle_player_spawned(session: &mut Session, spawn: PlayerSpawn)
{
    if session.players.contains_key(&spawn.handle) { return; }

    let player = Player::new(spawn, session.role, &session.config, session.factory.as_mut());
    session.players.insert(spawn.handle, player);
    tracing::info!(handle = ?spawn.handle, controller = ?spawn.controller, "player joined");
}

//-------------------------------------------------------------------------------------------------------------------
//-------------------------------------------------------------------------------------------------------------------

fn handle_pickup_spawned(session: &mut Session, handle: EntityHandle, spec: PickupSpec)
{
    if session.pickups.contains_key(&handle) { return; }

    let presentation = session.factory.presentation(handle, EntityKind::Pickup(spec.kind));
    session.pickups.insert(handle, Pickup::new(handle, spec, presentation));
}

//-------------------------------------------------------------------------------------------------------------------
//-------------------------------------------------------------------------------------------------------------------

fn handle_fire_confirmed(
    player   : &mut Player,
    role     : Role,
    rocket   : EntityHandle,
    launch   : u32,
    location : Vec3,
    rotation : Quat,
    ammo     : i32,
)
{
    let handle     = player.handle();
    let controlled = role.is_controller(player.controller());
    let forward    = forward_vector(rotation);

    match player.rockets_mut().get_mut(rocket)
    {
        Some(rocket) if controlled =>
        {
            match rocket.is_flying_launch(launch)
            {
                true  => rocket.apply_correction(forward),
                false => tracing::debug!(player = ?handle, rocket = ?rocket.handle(), launch, "confirmed launch already ended"),
            }
        }
        Some(rocket) =>
        {
            rocket.start_moving(forward, location);
            rocket.set_launch(launch);
        }
        None => tracing::warn!(player = ?handle, ?rocket, "confirmed launch of unknown rocket"),
    }
    player.report_ammo(ammo);
}

//-------------------------------------------------------------------------------------------------------------------
//-------------------------------------------------------------------------------------------------------------------

/// Ends the rejected flight. A rocket already relaunched under a newer launch number keeps flying.
fn handle_fire_rejected(player: &mut Player, rocket: EntityHandle, launch: u32, ammo: i32)
{
    let handle = player.handle();
    tracing::debug!(player = ?handle, ?rocket, launch, ammo, "rocket launch rejected");

    if let Some(rocket) = player.rockets_mut().get_mut(rocket)
    {
        match rocket.is_flying_launch(launch)
        {
            true  => rocket.make_free(),
            false => tracing::debug!(player = ?handle, rocket = ?rocket.handle(), launch, "rejected launch already ended"),
        }
    }
    player.report_ammo(ammo);
}

//-------------------------------------------------------------------------------------------------------------------
//-------------------------------------------------------------------------------------------------------------------

fn handle_pickup_consumed(session: &mut Session, pickup: EntityHandle, player: EntityHandle, kind: PickupKind, value: i32)
{
    match session.pickups.get_mut(&pickup)
    {
        Some(pickup) => { pickup.consume(); }
        None         => tracing::debug!(?pickup, "unknown pickup consumed"),
    }

    let Some(player) = session.players.get_mut(&player) else { return; };
    match kind
    {
        PickupKind::Ammo   => player.report_ammo(value),
        PickupKind::Health => player.report_health(value),
    }
}

//-------------------------------------------------------------------------------------------------------------------
//-------------------------------------------------------------------------------------------------------------------

/// Handles a message sent by the authority.
pub(crate) fn handle_observer_msg(session: &mut Session, sender: PeerId, envelope: Envelope<ObserverMsg>)
{
    if sender != PeerId::AUTHORITY
    {
        tracing::warn!(?sender, "ignoring observer message that did not come from the authority");
        return;
    }

    let object = envelope.object;
    let role   = session.role;

    match envelope.message
    {
        ObserverMsg::PlayerSpawned{ controller, location, yaw, ammo, health } =>
        {
            let spawn = PlayerSpawn{ handle: object, controller, location, yaw, stats: PlayerStats::from_reported(ammo, health) };
            handle_player_spawned(session, spawn);
        }
        ObserverMsg::PickupSpawned(spec) => handle_pickup_spawned(session, object, spec),
        ObserverMsg::PickupConsumed{ player, kind, value } => handle_pickup_consumed(session, object, player, kind, value),
        message =>
        {
            let Some(player) = session.players.get_mut(&object)
            else { tracing::debug!(?object, ?message, "message for unknown player"); return; };

            match message
            {
                ObserverMsg::RocketPoolBound{ rockets } =>
                {
                    player.bind_rockets(&rockets, session.config.rocket, session.factory.as_mut());
                }
                ObserverMsg::Movement(snapshot) =>
                {
                    if role.is_controller(player.controller()) { return; }
                    player.apply_snapshot(&snapshot);
                }
                ObserverMsg::FireConfirmed{ rocket, launch, location, rotation, ammo } =>
                {
                    handle_fire_confirmed(player, role, rocket, launch, location, rotation, ammo);
                }
                ObserverMsg::FireRejected{ rocket, launch, ammo } => handle_fire_rejected(player, rocket, launch, ammo),
                ObserverMsg::HealthChanged{ health }      => player.report_health(health),
                ObserverMsg::Replicator(msg) =>
                {
                    player.replicators_mut().handle_msg::<ObserverMsg>(sender, msg, &mut session.outbox);
                }
                ObserverMsg::PlayerSpawned{..}
                | ObserverMsg::PickupSpawned(_)
                | ObserverMsg::PickupConsumed{..} => (),
            }
        }
    }
}

//-------------------------------------------------------------------------------------------------------------------
