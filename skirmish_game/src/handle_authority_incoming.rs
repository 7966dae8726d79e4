//local shortcuts
use crate::*;
use skirmish_net::*;

//third-party shortcuts

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------
//-------------------------------------------------------------------------------------------------------------------

fn handle_movement(session: &mut Session, sender: PeerId, player_handle: EntityHandle, snapshot: MovementSnapshot)
{
    let Some(player) = session.players.get_mut(&player_handle)
    else { tracing::debug!(?player_handle, "movement for unknown player"); return; };

    if player.is_destroyed() { return; }
    if player.apply_snapshot(&snapshot) == SnapshotOutcome::Stale { return; }

    session.outbox.broadcast(player_handle, &ObserverMsg::Movement(snapshot), Some(sender));
}

//-------------------------------------------------------------------------------------------------------------------
//-------------------------------------------------------------------------------------------------------------------

/// Validates a predicted launch and tells every peer the outcome.
///
/// Requests naming a rocket outside the player's pool are rejected back to the sender.
pub(crate) fn handle_fire_request(
    session       : &mut Session,
    sender        : PeerId,
    player_handle : EntityHandle,
    request       : FireRequest,
)
{
    let role = session.role;
    let Some(player) = session.players.get_mut(&player_handle)
    else { tracing::debug!(?player_handle, "fire request for unknown player"); return; };

    if player.controller() != sender
    {
        tracing::warn!(?player_handle, ?sender, "ignoring fire request from a peer that does not control the player");
        return;
    }

    let verdict = match (player.rockets().get(request.rocket).is_some(), player.is_destroyed())
    {
        (false, _) =>
        {
            tracing::warn!(?player_handle, rocket = ?request.rocket, "fire request for a rocket outside the player's pool");
            FireVerdict::Rejected{ ammo: player.stats().authoritative_ammo() }
        }
        (true, true)  => FireVerdict::Rejected{ ammo: player.stats().authoritative_ammo() },
        (true, false) =>
        {
            let settings      = *player.settings();
            let authority_yaw = player.movement().reported_yaw();
            FireControl::validate(&settings, player.stats_mut(), &request, authority_yaw)
        }
    };

    match verdict
    {
        FireVerdict::Rejected{ ammo } =>
        {
            tracing::warn!(?player_handle, rocket = ?request.rocket, launch = request.launch, ammo, "rejected rocket launch");
            match sender == role.peer()
            {
                true =>
                {
                    if let Some(rocket) = player.rockets_mut().get_mut(request.rocket)
                    {
                        if rocket.is_flying_launch(request.launch) { rocket.make_free(); }
                    }
                    player.report_ammo(ammo);
                }
                false =>
                {
                    let msg = ObserverMsg::FireRejected{ rocket: request.rocket, launch: request.launch, ammo };
                    session.outbox.send_to(player_handle, &msg, sender);
                }
            }
        }
        FireVerdict::Confirmed{ rotation, ammo } =>
        {
            tracing::debug!(?player_handle, rocket = ?request.rocket, ammo, "confirmed rocket launch");
            let forward = forward_vector(rotation);
            if let Some(rocket) = player.rockets_mut().get_mut(request.rocket)
            {
                match role.is_controller(sender)
                {
                    true =>
                    {
                        if rocket.is_flying_launch(request.launch) { rocket.apply_correction(forward); }
                    }
                    false =>
                    {
                        rocket.start_moving(forward, request.location);
                        rocket.set_launch(request.launch);
                    }
                }
            }
            player.report_ammo(ammo);

            let msg = ObserverMsg::FireConfirmed{
                    rocket   : request.rocket,
                    launch   : request.launch,
                    location : request.location,
                    rotation,
                    ammo,
                };
            session.outbox.broadcast(player_handle, &msg, None);
        }
    }
}

//-------------------------------------------------------------------------------------------------------------------
//-------------------------------------------------------------------------------------------------------------------

/// Applies damage to a player and tells every peer its new health.
pub(crate) fn apply_damage(session: &mut Session, target: EntityHandle, damage: i32)
{
    let Some(player) = session.players.get_mut(&target) else { return; };
    if player.is_destroyed() { return; }

    let health = player.stats_mut().apply_authoritative_damage(damage);
    player.report_health(health);

    tracing::debug!(?target, damage, health, "player damaged");
    session.outbox.broadcast(target, &ObserverMsg::HealthChanged{ health }, None);
}

//-------------------------------------------------------------------------------------------------------------------
//-------------------------------------------------------------------------------------------------------------------

/// Handles a request sent to the authority.
pub(crate) fn handle_authority_request(session: &mut Session, sender: PeerId, envelope: Envelope<AuthorityRequest>)
{
    let player_handle = envelope.object;
    let Some(player) = session.players.get_mut(&player_handle)
    else { tracing::debug!(?player_handle, ?sender, "request for unknown player"); return; };

    if player.controller() != sender
    {
        tracing::warn!(?player_handle, ?sender, "ignoring request from a peer that does not control the player");
        return;
    }

    match envelope.message
    {
        AuthorityRequest::Movement(snapshot)  => handle_movement(session, sender, player_handle, snapshot),
        AuthorityRequest::FireRocket(request) => handle_fire_request(session, sender, player_handle, request),
        AuthorityRequest::Replicator(msg)     =>
        {
            player.replicators_mut().handle_msg::<ObserverMsg>(sender, msg, &mut session.outbox);
        }
    }
}

//-------------------------------------------------------------------------------------------------------------------
