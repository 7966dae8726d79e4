//local shortcuts
use crate::test_helpers::*;
use skirmish_game::*;
use skirmish_net::*;

//third-party shortcuts
use bevy::math::Vec3;

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

fn ammo_crate() -> PickupSpec
{
    PickupSpec{ kind: PickupKind::Ammo, amount: 5, location: Vec3::new(200.0, 0.0, 0.0), respawn_time: 10.0 }
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn ammo_pickup_refills_on_every_peer()
{
    let mut lmatch = LoopbackMatch::new(2, SessionConfig::default());
    let p1     = lmatch.authority.session.spawn_player(PeerId(1), Vec3::ZERO, 0.0).unwrap();
    let pickup = lmatch.authority.session.spawn_pickup(ammo_crate()).unwrap();
    lmatch.settle();

    for client in lmatch.clients.iter()
    {
        let mirrored = client.session.pickup(pickup).unwrap();
        assert!(mirrored.is_available());
        assert_eq!(*mirrored.spec(), ammo_crate());
    }

    assert!(lmatch.client_mut(1).session.request_fire(p1));
    lmatch.settle();
    assert_eq!(lmatch.authority.session.player(p1).unwrap().stats().authoritative_ammo(), 9);

    assert!(lmatch.authority.session.on_pickup_overlap(p1, pickup));
    assert_eq!(lmatch.authority.session.player(p1).unwrap().stats().authoritative_ammo(), 14);
    assert!(!lmatch.authority.session.pickup(pickup).unwrap().is_available());
    lmatch.settle();

    for client in lmatch.clients.iter()
    {
        assert_eq!(client.session.player(p1).unwrap().stats().ammo(), 14);
        assert!(!client.session.pickup(pickup).unwrap().is_available());

        let record = client.record.borrow();
        assert_eq!(record.is_visible(pickup), Some(false));
        assert_eq!(record.effects_of(EffectKind::PickupConsumed), 1);
    }
    assert_eq!(lmatch.client(1).record.borrow().last_ammo(p1), Some(14));

    // already taken
    assert!(!lmatch.authority.session.on_pickup_overlap(p1, pickup));
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn health_pickup_is_capped()
{
    let mut lmatch = LoopbackMatch::new(1, SessionConfig::default());
    let p1     = lmatch.authority.session.spawn_player(PeerId(1), Vec3::ZERO, 0.0).unwrap();
    let spec   = PickupSpec{ kind: PickupKind::Health, amount: 25, location: Vec3::ZERO, respawn_time: 0.0 };
    let pickup = lmatch.authority.session.spawn_pickup(spec).unwrap();
    lmatch.settle();

    assert!(lmatch.authority.session.on_pickup_overlap(p1, pickup));
    lmatch.settle();

    assert_eq!(lmatch.authority.session.player(p1).unwrap().stats().authoritative_health(), 100);
    assert_eq!(lmatch.client(1).session.player(p1).unwrap().stats().health(), 100);
    assert_eq!(lmatch.client(1).record.borrow().last_health(p1), Some(100));

    // never respawns
    for _ in 0..100 { lmatch.step(0.1); }
    assert!(!lmatch.authority.session.pickup(pickup).unwrap().is_available());
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn consumed_pickup_respawns_everywhere()
{
    let mut lmatch = LoopbackMatch::new(1, SessionConfig::default());
    let p1     = lmatch.authority.session.spawn_player(PeerId(1), Vec3::ZERO, 0.0).unwrap();
    let pickup = lmatch.authority.session.spawn_pickup(ammo_crate()).unwrap();
    lmatch.settle();

    assert!(lmatch.authority.session.on_pickup_overlap(p1, pickup));
    lmatch.settle();

    for _ in 0..95 { lmatch.step(0.1); }
    assert!(!lmatch.authority.session.pickup(pickup).unwrap().is_available());

    for _ in 0..10 { lmatch.step(0.1); }
    assert!(lmatch.authority.session.pickup(pickup).unwrap().is_available());
    assert!(lmatch.client(1).session.pickup(pickup).unwrap().is_available());
    assert!(lmatch.authority.session.on_pickup_overlap(p1, pickup));
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn observers_cannot_consume_pickups()
{
    let mut lmatch = LoopbackMatch::new(1, SessionConfig::default());
    let p1     = lmatch.authority.session.spawn_player(PeerId(1), Vec3::ZERO, 0.0).unwrap();
    let pickup = lmatch.authority.session.spawn_pickup(ammo_crate()).unwrap();
    lmatch.settle();

    assert!(!lmatch.client_mut(1).session.on_pickup_overlap(p1, pickup));
    assert!(lmatch.client(1).session.pickup(pickup).unwrap().is_available());
    assert_eq!(lmatch.client(1).session.pending_packets(), 0);
}

//-------------------------------------------------------------------------------------------------------------------
