//local shortcuts
use crate::*;
use skirmish_utils::*;

//third-party shortcuts

//standard shortcuts
use std::fmt::{Debug, Formatter};

//-------------------------------------------------------------------------------------------------------------------

/// Remaining time below which a crumb counts as consumed.
const CRUMB_EPSILON: f32 = 0.001;

/// Trail depth (in periods) below which consumption slows down.
const SLOWDOWN_DEPTH: f32 = 0.5;

/// Trail depth (in periods) above which consumption speeds up.
const SPEEDUP_DEPTH: f32 = 2.5;

//-------------------------------------------------------------------------------------------------------------------

/// Moves `current` toward `target` by the fraction `alpha` of the remaining gap.
fn interp_constant_velocity(current: f32, target: f32, alpha: f32) -> f32
{
    current + (target - current) * alpha
}

//-------------------------------------------------------------------------------------------------------------------
//-------------------------------------------------------------------------------------------------------------------

/// A replicated scalar that observers see as continuous motion.
///
/// The controlling side samples its value every `1 / send_rate` seconds. Observers buffer the samples as crumbs and
/// consume them with a constant-velocity law, speeding up or slowing down depending on how deep the trail is.
pub struct SmoothedScalarChannel
{
    config: ReplicatorConfig,
    /// True on the role that owns the value.
    locally_controlled: bool,
    /// True on the authority. The authority takes owner samples through `relay_from_owner` only.
    is_authority: bool,

    current_value: f32,
    listener: Option<Box<dyn FnMut(f32)>>,

    // controlling side
    previously_sent: f32,
    sync_timer: Countdown,
    static_timer: f32,
    next_sync_tag: SyncTag,
    has_sent_terminal: bool,

    // observing side
    crumb_trail: CrumbTrail,
    current_crumb_remaining: f32,
    sync_guard: SyncTagGuard,
    has_received_terminal: bool,
    lerp_speed: f32,

    sleeping: bool,
}

impl SmoothedScalarChannel
{
    /// Makes an idle channel.
    pub fn new(config: ReplicatorConfig, locally_controlled: bool, is_authority: bool) -> SmoothedScalarChannel
    {
        SmoothedScalarChannel{
                config,
                locally_controlled,
                is_authority,
                current_value           : 0.0,
                listener                : None,
                previously_sent         : 0.0,
                sync_timer              : Countdown::default(),
                static_timer            : 0.0,
                next_sync_tag           : SyncTag::default(),
                has_sent_terminal       : true,
                crumb_trail             : CrumbTrail::new(config.trail_capacity()),
                current_crumb_remaining : 0.0,
                sync_guard              : SyncTagGuard::default(),
                has_received_terminal   : true,
                lerp_speed              : 1.0,
                sleeping                : true,
            }
    }

    /// Registers a callback invoked whenever the displayed value changes.
    pub fn set_listener(&mut self, listener: impl FnMut(f32) + 'static)
    {
        self.listener = Some(Box::new(listener));
    }

    /// Sets the value on the controlling side.
    ///
    /// An idle channel adopts the value immediately and sends on the next tick. An active channel only updates the
    /// pending value, which goes out at the regular cadence. Ignored on non-controlling roles.
    pub fn set_value(&mut self, value: f32)
    {
        if value == self.current_value { return; }
        if !self.locally_controlled
        {
            tracing::trace!("ignoring set value on a channel this role does not control");
            return;
        }

        self.current_value = value;
        if self.sleeping
        {
            self.sleeping          = false;
            self.has_sent_terminal = false;
            self.sync_timer.clear();
        }

        self.notify();
    }

    /// The current (displayed) value.
    pub fn value(&self) -> f32 { self.current_value }

    /// Advances the channel.
    ///
    /// On the controlling side this returns a sample whenever one is due. On every other role it consumes the crumb
    /// trail and returns `None`.
    pub fn tick(&mut self, delta_seconds: f32) -> Option<ScalarSample>
    {
        if self.sleeping { return None; }

        let sample = match self.locally_controlled
        {
            true  => self.tick_controlled(delta_seconds),
            false => { self.tick_observed(delta_seconds); None }
        };

        if !self.should_tick()
        {
            self.sleeping = true;
            tracing::trace!(value = self.current_value, "smoothed scalar channel going idle");
        }

        sample
    }

    /// Handles a sample relayed to this role.
    ///
    /// Returns `false` if the sample was ignored (this role controls the value, this role is the authority, or the
    /// sample is stale). The authority applies owner samples through [`Self::relay_from_owner`] instead; broadcasts
    /// never loop back to it, so it has no echoes to accept.
    pub fn receive(&mut self, sample: ScalarSample) -> bool
    {
        if self.locally_controlled { return false; }
        if self.is_authority
        {
            tracing::error!("the authority applies scalar samples through relay_from_owner");
            return false;
        }
        if !self.sync_guard.accept(sample.tag)
        {
            tracing::trace!(tag = ?sample.tag, last = ?self.sync_guard.last(), "dropping stale scalar sample");
            return false;
        }

        self.push_sample(sample);
        true
    }

    /// Handles a sample sent by the controlling role to the authority.
    ///
    /// Returns the sample to relay to observers, or `None` if it is stale. The authority applies the sample to its
    /// own copy as well.
    pub fn relay_from_owner(&mut self, sample: ScalarSample) -> Option<ScalarSample>
    {
        if !self.is_authority
        {
            tracing::error!("only the authority relays scalar samples");
            return None;
        }
        if !self.sync_guard.accept(sample.tag)
        {
            tracing::trace!(tag = ?sample.tag, last = ?self.sync_guard.last(), "dropping stale scalar sample");
            return None;
        }

        if !self.locally_controlled { self.push_sample(sample); }
        Some(sample)
    }

    /// Checks if the channel still has work to do.
    ///
    /// - Controlling side: until the terminal sample was sent.
    /// - Observing side: until the trail is drained and the terminal sample was received.
    pub fn should_tick(&self) -> bool
    {
        match self.locally_controlled
        {
            true  => !self.has_sent_terminal,
            false => !(self.has_received_terminal && self.crumb_trail.is_empty()),
        }
    }

    pub fn is_sleeping(&self) -> bool { self.sleeping }
    pub fn is_locally_controlled(&self) -> bool { self.locally_controlled }
    pub fn config(&self) -> &ReplicatorConfig { &self.config }
    pub fn crumb_trail(&self) -> &CrumbTrail { &self.crumb_trail }
    pub fn current_crumb_remaining(&self) -> f32 { self.current_crumb_remaining }
    pub fn has_sent_terminal(&self) -> bool { self.has_sent_terminal }
    pub fn has_received_terminal(&self) -> bool { self.has_received_terminal }
    pub fn last_received_sync_tag(&self) -> Option<SyncTag> { self.sync_guard.last() }

    /// Consumption speed multiplier used by the last observer tick.
    pub fn lerp_speed(&self) -> f32 { self.lerp_speed }

    fn tick_controlled(&mut self, delta_seconds: f32) -> Option<ScalarSample>
    {
        let mut is_terminal = false;
        if self.current_value != self.previously_sent
        {
            self.static_timer = 0.0;
        }
        else
        {
            self.static_timer += delta_seconds;
            if self.static_timer >= self.config.sleep_after() { is_terminal = true; }
        }

        self.sync_timer.tick(delta_seconds);
        if !self.sync_timer.is_done() { return None; }

        let mut sample = None;
        if is_terminal
        {
            if !self.has_sent_terminal
            {
                sample = Some(ScalarSample{ tag: self.next_sync_tag.advance(), value: self.current_value, terminal: true });
                self.has_sent_terminal = true;
            }
        }
        else
        {
            sample = Some(ScalarSample{ tag: self.next_sync_tag.advance(), value: self.current_value, terminal: false });
            self.has_sent_terminal = false;
        }

        // one sample per tick at most; a long frame does not cause a burst of catch-up samples
        self.sync_timer.extend(self.config.period());
        if self.sync_timer.is_done() { self.sync_timer.clear(); }

        self.previously_sent = self.current_value;
        sample
    }

    fn tick_observed(&mut self, delta_seconds: f32)
    {
        if self.crumb_trail.is_empty() { return; }

        let period       = self.config.period();
        let trail_length = self.crumb_trail.depth(self.current_crumb_remaining, period);

        self.lerp_speed = 1.0;
        if trail_length < period * SLOWDOWN_DEPTH && !self.has_received_terminal
        {
            // nearly drained and more samples are coming: slow down
            self.lerp_speed *= trail_length / (period * SLOWDOWN_DEPTH);
        }
        else if trail_length > period * SPEEDUP_DEPTH
        {
            // trail too deep: catch up
            self.lerp_speed *= trail_length / (period * SPEEDUP_DEPTH);
        }

        let mut frame_target        = self.current_value;
        let mut frame_target_future = 0.0f32;
        let mut remaining_lerp      = self.lerp_speed * delta_seconds;

        while remaining_lerp > CRUMB_EPSILON
        {
            let Some(front) = self.crumb_trail.front().copied() else { break; };

            let consume    = self.current_crumb_remaining.min(remaining_lerp);
            let crumb_size = self.current_crumb_remaining;
            remaining_lerp               -= consume;
            self.current_crumb_remaining -= consume;
            frame_target = front.value;

            if self.current_crumb_remaining <= CRUMB_EPSILON
            {
                frame_target_future = 0.0;
                self.crumb_trail.pop_front();
                self.current_crumb_remaining = period;
            }
            else
            {
                frame_target_future = crumb_size - consume;
            }
        }

        if frame_target == self.current_value { return; }

        if frame_target_future == 0.0
        {
            self.current_value = frame_target;
        }
        else
        {
            let advance_time   = (self.lerp_speed * delta_seconds) - remaining_lerp;
            let time_to_target = frame_target_future + advance_time;
            let alpha          = (advance_time / time_to_target).clamp(0.0, 1.0);
            self.current_value = interp_constant_velocity(self.current_value, frame_target, alpha);
        }

        self.notify();
    }

    fn push_sample(&mut self, sample: ScalarSample)
    {
        if sample.terminal
        {
            self.has_received_terminal = true;
        }
        else
        {
            // coming out of a terminal state: start interpolating from where we are now
            if self.has_received_terminal && self.crumb_trail.is_empty()
            {
                self.crumb_trail.push(self.current_value);
            }
            self.has_received_terminal = false;
        }

        let evicted = self.crumb_trail.push(sample.value);
        if evicted > 0 { tracing::trace!(evicted, "crumb trail full, evicted oldest crumbs"); }

        self.sleeping = false;
    }

    fn notify(&mut self)
    {
        let value = self.current_value;
        if let Some(listener) = self.listener.as_mut() { (listener)(value); }
    }
}

impl Debug for SmoothedScalarChannel
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        f.debug_struct("SmoothedScalarChannel")
            .field("value", &self.current_value)
            .field("locally_controlled", &self.locally_controlled)
            .field("is_authority", &self.is_authority)
            .field("crumbs", &self.crumb_trail.len())
            .field("sleeping", &self.sleeping)
            .finish()
    }
}

//-------------------------------------------------------------------------------------------------------------------
