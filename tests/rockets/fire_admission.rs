//local shortcuts
use crate::test_helpers::*;
use skirmish_game::*;
use skirmish_net::*;

//third-party shortcuts
use bevy::math::{Quat, Vec3};

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

fn make_pool(record: &SharedRecord) -> RocketPool
{
    let owner = EntityHandle(0);
    let rockets = (1..=ROCKET_POOL_SIZE as u32)
        .map(EntityHandle)
        .map(|handle| Rocket::new(handle, owner, RocketSettings::default(), recording_presentation(handle, record)))
        .collect();
    RocketPool::new(rockets)
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn cooldown_gates_launches()
{
    let record      = SharedRecord::default();
    let settings    = PlayerSettings::default();
    let mut stats   = PlayerStats::new(&settings);
    let mut pool    = make_pool(&record);
    let mut control = FireControl::default();

    let request = control.fire_rocket(&settings, &mut stats, &mut pool, Vec3::ZERO, Quat::IDENTITY).unwrap();
    assert_eq!(request.rocket, EntityHandle(1));
    assert_eq!(request.location, Vec3::new(settings.rocket_spawn_offset, 0.0, 0.0));
    assert_eq!(stats.ammo(), settings.initial_ammo - 1);
    assert_eq!(control.cooldown_remaining(), 2.0);

    // nothing while cooling down, silently
    assert!(control.fire_rocket(&settings, &mut stats, &mut pool, Vec3::ZERO, Quat::IDENTITY).is_none());
    control.tick(1.0);
    assert!(control.fire_rocket(&settings, &mut stats, &mut pool, Vec3::ZERO, Quat::IDENTITY).is_none());
    assert_eq!(stats.ammo(), settings.initial_ammo - 1);

    control.tick(1.0);
    let request = control.fire_rocket(&settings, &mut stats, &mut pool, Vec3::ZERO, Quat::IDENTITY).unwrap();
    assert_eq!(request.rocket, EntityHandle(2));
    assert_eq!(stats.ammo(), settings.initial_ammo - 2);
    assert_eq!(pool.active_count(), 2);
    assert_eq!(record.borrow().is_visible(EntityHandle(2)), Some(true));
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn active_rockets_are_capped()
{
    let record      = SharedRecord::default();
    let settings    = PlayerSettings{ fire_cooldown: 0.0, ..Default::default() };
    let mut stats   = PlayerStats::new(&settings);
    let mut pool    = make_pool(&record);
    let mut control = FireControl::default();

    for _ in 0..settings.max_active_rockets
    {
        assert!(control.fire_rocket(&settings, &mut stats, &mut pool, Vec3::ZERO, Quat::IDENTITY).is_some());
    }
    assert!(control.fire_rocket(&settings, &mut stats, &mut pool, Vec3::ZERO, Quat::IDENTITY).is_none());
    assert_eq!(pool.active_count(), 3);
    assert_eq!(stats.ammo(), settings.initial_ammo - 3);

    // a rocket coming back frees a slot
    pool.get_mut(EntityHandle(2)).unwrap().explode();
    let request = control.fire_rocket(&settings, &mut stats, &mut pool, Vec3::ZERO, Quat::IDENTITY).unwrap();
    assert_eq!(request.rocket, EntityHandle(2));
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn empty_magazine_blocks_launches()
{
    let record      = SharedRecord::default();
    let settings    = PlayerSettings{ initial_ammo: 0, ..Default::default() };
    let mut stats   = PlayerStats::new(&settings);
    let mut pool    = make_pool(&record);
    let mut control = FireControl::default();

    assert!(control.fire_rocket(&settings, &mut stats, &mut pool, Vec3::ZERO, Quat::IDENTITY).is_none());
    assert_eq!(pool.active_count(), 0);

    let unlimited = PlayerSettings{ unlimited_ammo: true, ..settings };
    assert!(control.fire_rocket(&unlimited, &mut stats, &mut pool, Vec3::ZERO, Quat::IDENTITY).is_some());
    assert_eq!(stats.ammo(), 0);
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn exhausted_pool_blocks_launches()
{
    let record      = SharedRecord::default();
    let settings    = PlayerSettings{ fire_cooldown: 0.0, max_active_rockets: 100, ..Default::default() };
    let mut stats   = PlayerStats::new(&settings);
    let mut pool    = make_pool(&record);
    let mut control = FireControl::default();

    for _ in 0..ROCKET_POOL_SIZE
    {
        assert!(control.fire_rocket(&settings, &mut stats, &mut pool, Vec3::ZERO, Quat::IDENTITY).is_some());
    }
    assert!(pool.get_free_rocket().is_none());
    assert!(control.fire_rocket(&settings, &mut stats, &mut pool, Vec3::ZERO, Quat::IDENTITY).is_none());
    assert_eq!(stats.ammo(), settings.initial_ammo - ROCKET_POOL_SIZE as i32);
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn relaunched_rocket_carries_a_new_launch_number()
{
    let record      = SharedRecord::default();
    let settings    = PlayerSettings{ fire_cooldown: 0.0, ..Default::default() };
    let mut stats   = PlayerStats::new(&settings);
    let mut pool    = make_pool(&record);
    let mut control = FireControl::default();

    let first = control.fire_rocket(&settings, &mut stats, &mut pool, Vec3::ZERO, Quat::IDENTITY).unwrap();
    assert_eq!(first.launch, 0);
    assert!(pool.get(first.rocket).unwrap().is_flying_launch(0));

    pool.get_mut(first.rocket).unwrap().explode();
    assert_eq!(pool.get(first.rocket).unwrap().launch(), None);

    // same pooled rocket, new flight
    let second = control.fire_rocket(&settings, &mut stats, &mut pool, Vec3::ZERO, Quat::IDENTITY).unwrap();
    assert_eq!(second.rocket, first.rocket);
    assert_eq!(second.launch, 1);

    let rocket = pool.get(second.rocket).unwrap();
    assert!(rocket.is_flying_launch(1));
    assert!(!rocket.is_flying_launch(0));
}

//-------------------------------------------------------------------------------------------------------------------
