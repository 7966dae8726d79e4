//local shortcuts
use crate::test_helpers::*;
use skirmish_game::*;
use skirmish_net::*;

//third-party shortcuts
use bevy::math::Vec3;

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

fn spec(respawn_time: f32) -> PickupSpec
{
    PickupSpec{ kind: PickupKind::Health, amount: 25, location: Vec3::new(0.0, 50.0, 0.0), respawn_time }
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn pickup_is_consumed_once_and_respawns()
{
    let record = SharedRecord::default();
    let handle = EntityHandle(7);
    let mut pickup = Pickup::new(handle, spec(1.0), recording_presentation(handle, &record));

    assert!(pickup.is_available());
    assert!(pickup.consume());
    assert!(!pickup.consume());
    assert_eq!(record.borrow().is_visible(handle), Some(false));
    assert_eq!(record.borrow().effects_of(EffectKind::PickupConsumed), 1);

    pickup.tick(0.5);
    assert!(!pickup.is_available());
    pickup.tick(0.5);
    assert!(pickup.is_available());
    assert_eq!(record.borrow().is_visible(handle), Some(true));
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn pickup_without_respawn_stays_gone()
{
    let record = SharedRecord::default();
    let handle = EntityHandle(8);
    let mut pickup = Pickup::new(handle, spec(0.0), recording_presentation(handle, &record));

    assert!(pickup.consume());
    for _ in 0..100 { pickup.tick(1.0); }
    assert!(!pickup.is_available());
}

//-------------------------------------------------------------------------------------------------------------------
