//local shortcuts
use skirmish_replicator::*;

//third-party shortcuts

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

fn sample(tag: u32, value: f32) -> ScalarSample
{
    ScalarSample{ tag: SyncTag(tag), value, terminal: false }
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn guard_rejects_older_tags()
{
    let mut guard = SyncTagGuard::default();
    assert!(guard.accept(SyncTag(5)));
    assert!(!guard.accept(SyncTag(3)));
    assert!(guard.accept(SyncTag(5)));
    assert!(guard.accept(SyncTag(6)));
    assert_eq!(guard.last(), Some(SyncTag(6)));
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn tags_advance_by_one()
{
    let mut tag = SyncTag::default();
    assert_eq!(tag.advance(), SyncTag(0));
    assert_eq!(tag.advance(), SyncTag(1));
    assert_eq!(*tag, 2);
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn observer_drops_stale_samples()
{
    let mut channel = SmoothedScalarChannel::new(ReplicatorConfig::default(), false, false);

    assert!(channel.receive(sample(5, 1.0)));
    assert!(!channel.receive(sample(3, 2.0)));
    assert_eq!(channel.last_received_sync_tag(), Some(SyncTag(5)));

    // wait crumb + the accepted sample
    assert_eq!(channel.crumb_trail().len(), 2);
    assert!(channel.crumb_trail().iter().all(|crumb| crumb.value != 2.0));
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn controller_ignores_relayed_samples()
{
    let mut channel = SmoothedScalarChannel::new(ReplicatorConfig::default(), true, false);
    assert!(!channel.receive(sample(0, 4.0)));
    assert!(channel.crumb_trail().is_empty());
    assert_eq!(channel.value(), 0.0);
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn authority_relays_only_fresh_samples()
{
    let mut channel = SmoothedScalarChannel::new(ReplicatorConfig::default(), false, true);

    assert_eq!(channel.relay_from_owner(sample(2, 1.0)), Some(sample(2, 1.0)));
    assert_eq!(channel.relay_from_owner(sample(1, 9.0)), None);
    assert_eq!(channel.relay_from_owner(sample(3, 2.0)), Some(sample(3, 2.0)));

    // applied locally as well
    assert!(!channel.is_sleeping());
    assert_eq!(channel.crumb_trail().len(), 3);
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn authority_only_applies_samples_by_relaying()
{
    let mut channel = SmoothedScalarChannel::new(ReplicatorConfig::default(), false, true);

    assert!(!channel.receive(sample(4, 1.0)));
    assert!(channel.crumb_trail().is_empty());
    assert_eq!(channel.last_received_sync_tag(), None);

    assert!(channel.relay_from_owner(sample(4, 1.0)).is_some());
    assert_eq!(channel.last_received_sync_tag(), Some(SyncTag(4)));
}

//-------------------------------------------------------------------------------------------------------------------
