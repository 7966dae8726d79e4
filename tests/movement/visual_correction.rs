//local shortcuts
use skirmish_game::*;

//third-party shortcuts
use bevy::math::Vec3;

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

#[test]
fn offset_blends_to_neutral()
{
    let mut correction = VisualCorrection::default();
    assert!(correction.is_complete());

    correction.start(Vec3::new(-30.0, 0.0, 0.0), 0.25);
    let mut previous = correction.offset().length();
    for _ in 0..10
    {
        let offset = correction.update(1.0 / 60.0);
        assert!(offset.length() <= previous);
        previous = offset.length();
    }

    for _ in 0..20 { correction.update(1.0 / 60.0); }
    assert!(correction.is_complete());
    assert_eq!(correction.offset(), Vec3::ZERO);
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn zero_blend_time_snaps()
{
    let mut correction = VisualCorrection::default();
    correction.start(Vec3::new(5.0, 5.0, 0.0), 0.0);
    assert_eq!(correction.offset(), Vec3::ZERO);
    assert_eq!(correction.update(0.1), Vec3::ZERO);
}

//-------------------------------------------------------------------------------------------------------------------
