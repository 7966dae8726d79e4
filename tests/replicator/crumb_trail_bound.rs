//local shortcuts
use skirmish_replicator::*;
use skirmish_utils::*;

//third-party shortcuts

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

#[test]
fn trail_evicts_oldest()
{
    let mut trail = CrumbTrail::new(3);
    assert_eq!(trail.push(1.0), 0);
    assert_eq!(trail.push(2.0), 0);
    assert_eq!(trail.push(3.0), 0);
    assert_eq!(trail.push(4.0), 1);

    let values: Vec<f32> = trail.iter().map(|crumb| crumb.value).collect();
    assert_eq!(values, vec![2.0, 3.0, 4.0]);
    assert_eq!(trail.depth(0.05, 0.1), 0.25);
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn channel_trail_never_exceeds_twice_the_send_rate()
{
    let config = ReplicatorConfig::new(10, 0.5);
    let mut channel = SmoothedScalarChannel::new(config, false, false);

    for tag in 0..100u32
    {
        channel.receive(ScalarSample{ tag: SyncTag(tag), value: tag as f32, terminal: false });
        assert!(channel.crumb_trail().len() <= 20);
    }

    // the newest samples survive
    assert_eq!(channel.crumb_trail().iter().last().map(|crumb| crumb.value), Some(99.0));
    assert_eq!(channel.crumb_trail().capacity(), config.trail_capacity());
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn countdown_and_rates()
{
    assert_eq!(rate_to_period(0), 1.0);
    assert_eq!(rate_to_period(4), 0.25);

    let mut countdown = Countdown::default();
    assert!(countdown.is_done());
    countdown.start(1.0);
    countdown.tick(0.5);
    assert!(!countdown.is_done());
    countdown.tick(0.5);
    assert!(countdown.is_done());
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
#[should_panic]
fn zero_send_rate_is_invalid()
{
    let _ = ReplicatorConfig::new(0, 0.5);
}

//-------------------------------------------------------------------------------------------------------------------
