//local shortcuts
use crate::*;

//third-party shortcuts
use bevy::math::Vec3;
use serde::{Serialize, Deserialize};

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

/// Movement input of the controlling peer.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementInput
{
    /// Throttle in [-1, 1].
    pub forward: f32,
    /// Steering in [-1, 1].
    pub turn: f32,
    pub brake: bool,
}

//-------------------------------------------------------------------------------------------------------------------

/// Movement state reported by the controlling peer once per tick.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementSnapshot
{
    pub location: Vec3,
    /// Sender-local simulation time (seconds).
    pub timestamp: f32,
    pub forward_input: f32,
    /// Facing yaw in degrees.
    pub yaw: f32,
    pub braking: bool,
}

//-------------------------------------------------------------------------------------------------------------------

/// Result of applying a [`MovementSnapshot`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SnapshotOutcome
{
    /// Older than the last accepted snapshot; ignored.
    Stale,
    /// Replayed without a correction.
    Accepted,
    /// The local body drifted past the correction threshold and was moved to the reported location.
    Snapped,
}

//-------------------------------------------------------------------------------------------------------------------

/// Keeps a vehicle's local simulation consistent with the location its controller reports.
///
/// The controlling peer simulates from input and reports a snapshot every tick. Other roles replay the reported
/// input and yaw, extrapolate between snapshots, and snap to the reported location when they drift too far.
#[derive(Debug, Clone)]
pub struct MovementReconciler
{
    settings: PlayerSettings,
    input: MovementInput,
    velocity: f32,
    yaw: f32,
    local_time: f32,
    last_timestamp: Option<f32>,
    /// Seconds extrapolated by [`Self::tick_observed`] since the last accepted snapshot.
    observed_since_snapshot: f32,
    reported_location: Vec3,
    reported_yaw: f32,
    visual_correction: VisualCorrection,
}

impl MovementReconciler
{
    pub fn new(settings: PlayerSettings, location: Vec3, yaw: f32) -> MovementReconciler
    {
        MovementReconciler{
                settings,
                input                   : MovementInput::default(),
                velocity                : 0.0,
                yaw                     : normalize_degrees(yaw),
                local_time              : 0.0,
                last_timestamp          : None,
                observed_since_snapshot : 0.0,
                reported_location       : location,
                reported_yaw            : normalize_degrees(yaw),
                visual_correction       : VisualCorrection::default(),
            }
    }

    pub fn set_input(&mut self, input: MovementInput)
    {
        self.input = MovementInput{
                forward : input.forward.clamp(-1.0, 1.0),
                turn    : input.turn.clamp(-1.0, 1.0),
                brake   : input.brake,
            };
    }

    /// Simulates one tick from local input. Returns the snapshot to report.
    pub fn tick_controlled(&mut self, delta_seconds: f32, mover: &mut dyn Mover) -> MovementSnapshot
    {
        self.local_time += delta_seconds;

        self.yaw = normalize_degrees(self.yaw + yaw_step(self.velocity, self.input.turn, delta_seconds, &self.settings));
        mover.set_facing_rotation(yaw_rotation(self.yaw), None);

        self.velocity = integrate_velocity(
                self.velocity,
                self.input.forward,
                self.input.brake,
                delta_seconds,
                &self.settings
            );
        self.step(delta_seconds, mover);

        self.reported_location = mover.location();
        self.reported_yaw      = self.yaw;

        MovementSnapshot{
                location      : self.reported_location,
                timestamp     : self.local_time,
                forward_input : self.input.forward,
                yaw           : self.yaw,
                braking       : self.input.brake,
            }
    }

    /// Replays a snapshot reported by the controller.
    ///
    /// Snapshots older than the last accepted one are ignored. The part of the time between the previous snapshot and
    /// this one that was not already extrapolated locally (capped) is used to integrate the reported input; yaw is
    /// taken as reported.
    pub fn apply_snapshot(&mut self, snapshot: &MovementSnapshot, mover: &mut dyn Mover) -> SnapshotOutcome
    {
        let elapsed = match self.last_timestamp
        {
            Some(last) if snapshot.timestamp < last =>
            {
                tracing::trace!(last, timestamp = snapshot.timestamp, "ignoring stale movement snapshot");
                return SnapshotOutcome::Stale;
            }
            Some(last) =>
            {
                let unsimulated = snapshot.timestamp - last - self.observed_since_snapshot;
                unsimulated.clamp(0.0, self.settings.max_replay_step)
            }
            None => 0.0,
        };
        self.last_timestamp          = Some(snapshot.timestamp);
        self.observed_since_snapshot = 0.0;

        self.input.forward = snapshot.forward_input.clamp(-1.0, 1.0);
        self.input.brake   = snapshot.braking;
        self.velocity = integrate_velocity(
                self.velocity,
                self.input.forward,
                self.input.brake,
                elapsed,
                &self.settings
            );

        self.yaw = normalize_degrees(snapshot.yaw);
        mover.set_facing_rotation(yaw_rotation(self.yaw), None);

        self.reported_location = snapshot.location;
        self.reported_yaw      = self.yaw;

        let current   = mover.location();
        let threshold = self.settings.correction_threshold;
        if current.distance_squared(snapshot.location) <= threshold * threshold
        {
            return SnapshotOutcome::Accepted;
        }

        tracing::debug!(?current, reported = ?snapshot.location, "movement drifted past threshold, snapping");
        mover.teleport(snapshot.location);

        // the mesh stays where it was displayed and blends toward the new origin
        let displayed = current + self.visual_correction.offset();
        self.visual_correction.start(displayed - snapshot.location, self.settings.correction_blend_time);

        SnapshotOutcome::Snapped
    }

    /// Extrapolates one tick by integrating the last replayed input. Returns the current mesh offset.
    pub fn tick_observed(&mut self, delta_seconds: f32, mover: &mut dyn Mover) -> Vec3
    {
        self.velocity = integrate_velocity(
                self.velocity,
                self.input.forward,
                self.input.brake,
                delta_seconds,
                &self.settings
            );
        self.step(delta_seconds, mover);
        self.observed_since_snapshot += delta_seconds;

        self.visual_correction.update(delta_seconds)
    }

    pub fn input(&self) -> MovementInput { self.input }
    pub fn velocity(&self) -> f32 { self.velocity }
    pub fn yaw(&self) -> f32 { self.yaw }
    pub fn local_time(&self) -> f32 { self.local_time }
    pub fn last_timestamp(&self) -> Option<f32> { self.last_timestamp }
    /// Last location reported by (or, on the controller, for) the controlling peer.
    pub fn reported_location(&self) -> Vec3 { self.reported_location }
    pub fn reported_yaw(&self) -> f32 { self.reported_yaw }
    pub fn mesh_offset(&self) -> Vec3 { self.visual_correction.offset() }

    fn step(&self, delta_seconds: f32, mover: &mut dyn Mover)
    {
        let mut frame = mover.create_frame_movement();
        mover.apply_gravity();
        frame.add_delta(forward_vector(mover.facing_rotation()) * self.velocity * delta_seconds);
        mover.move_frame(frame);
    }
}

//-------------------------------------------------------------------------------------------------------------------
