//local shortcuts
use skirmish_replicator::*;

//third-party shortcuts

//standard shortcuts
use std::cell::RefCell;
use std::rc::Rc;

//-------------------------------------------------------------------------------------------------------------------

/// Ticks the controller and feeds every sample straight to the observer.
fn run_linked(controller: &mut SmoothedScalarChannel, observer: &mut SmoothedScalarChannel, ticks: usize, dt: f32)
    -> Vec<ScalarSample>
{
    let mut sent = Vec::new();
    for _ in 0..ticks
    {
        if let Some(sample) = controller.tick(dt)
        {
            observer.receive(sample);
            sent.push(sample);
        }
        observer.tick(dt);
    }
    sent
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn new_channel_is_idle()
{
    let mut channel = SmoothedScalarChannel::new(ReplicatorConfig::default(), true, false);
    assert!(channel.is_sleeping());
    assert!(!channel.should_tick());
    assert_eq!(channel.tick(0.1), None);

    // setting the same value does not wake it
    channel.set_value(0.0);
    assert!(channel.is_sleeping());
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn static_value_goes_terminal_once()
{
    let config = ReplicatorConfig::new(10, 0.5);
    let mut controller = SmoothedScalarChannel::new(config, true, false);
    let mut observer   = SmoothedScalarChannel::new(config, false, false);

    controller.set_value(5.0);
    assert!(!controller.is_sleeping());

    let sent = run_linked(&mut controller, &mut observer, 40, 0.1);

    // continuous samples first, exactly one terminal at the end
    assert!(sent.len() >= 2);
    assert!(!sent[0].terminal);
    assert_eq!(sent.iter().filter(|sample| sample.terminal).count(), 1);
    assert!(sent.last().unwrap().terminal);
    assert!(sent.windows(2).all(|pair| pair[0].tag < pair[1].tag));

    assert!(controller.is_sleeping());
    assert!(controller.has_sent_terminal());
    assert_eq!(controller.tick(0.1), None);

    assert!(observer.is_sleeping());
    assert!(observer.has_received_terminal());
    assert!(observer.crumb_trail().is_empty());
    assert_eq!(observer.value(), 5.0);
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn value_change_wakes_an_idle_channel()
{
    let config = ReplicatorConfig::new(10, 0.5);
    let mut controller = SmoothedScalarChannel::new(config, true, false);
    let mut observer   = SmoothedScalarChannel::new(config, false, false);

    controller.set_value(2.0);
    run_linked(&mut controller, &mut observer, 40, 0.1);
    assert!(controller.is_sleeping());
    assert!(observer.is_sleeping());

    controller.set_value(8.0);
    let sent = run_linked(&mut controller, &mut observer, 40, 0.1);
    assert!(!sent[0].terminal);
    assert_eq!(sent[0].value, 8.0);
    assert!(sent.last().unwrap().terminal);
    assert_eq!(observer.value(), 8.0);
    assert!(observer.is_sleeping());
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn at_most_one_sample_per_tick()
{
    let config = ReplicatorConfig::new(10, 0.5);
    let mut controller = SmoothedScalarChannel::new(config, true, false);

    controller.set_value(1.0);
    assert!(controller.tick(1.0).is_some());

    // a long frame does not make up for the missed periods
    controller.set_value(2.0);
    assert!(controller.tick(0.0).is_some());
    assert!(controller.tick(0.05).is_none());
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn listener_sees_displayed_values()
{
    let config = ReplicatorConfig::new(10, 0.5);
    let mut controller = SmoothedScalarChannel::new(config, true, false);
    let mut observer   = SmoothedScalarChannel::new(config, false, false);

    let seen = Rc::new(RefCell::new(Vec::<f32>::new()));
    let seen_clone = seen.clone();
    observer.set_listener(move |value| seen_clone.borrow_mut().push(value));

    controller.set_value(3.0);
    run_linked(&mut controller, &mut observer, 40, 0.05);

    let seen = seen.borrow();
    assert!(!seen.is_empty());
    assert_eq!(seen.last().copied(), Some(3.0));
}

//-------------------------------------------------------------------------------------------------------------------
