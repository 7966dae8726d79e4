//local shortcuts

//third-party shortcuts

//standard shortcuts
use std::collections::VecDeque;

//-------------------------------------------------------------------------------------------------------------------

/// One buffered authoritative sample awaiting consumption.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Crumb
{
    pub value: f32,
}

//-------------------------------------------------------------------------------------------------------------------

/// Samples in arrival order, consumed front-to-back.
///
/// The trail never holds more than its capacity. Pushing into a full trail evicts the oldest crumb.
#[derive(Debug, Clone)]
pub struct CrumbTrail
{
    crumbs: VecDeque<Crumb>,
    capacity: usize,
}

impl CrumbTrail
{
    pub fn new(capacity: usize) -> CrumbTrail
    {
        let capacity = capacity.max(1);
        CrumbTrail{ crumbs: VecDeque::with_capacity(capacity), capacity }
    }

    /// Appends a crumb. Returns the number of crumbs evicted to respect the capacity.
    pub fn push(&mut self, value: f32) -> usize
    {
        self.crumbs.push_back(Crumb{ value });

        let mut evicted = 0;
        while self.crumbs.len() > self.capacity
        {
            self.crumbs.pop_front();
            evicted += 1;
        }
        evicted
    }

    pub fn front(&self) -> Option<&Crumb>
    {
        self.crumbs.front()
    }

    pub fn pop_front(&mut self) -> Option<Crumb>
    {
        self.crumbs.pop_front()
    }

    /// Time in seconds until the trail is drained at normal speed.
    ///
    /// `current_remaining` is the time left in the front crumb. Every crumb behind it adds a full `period`.
    pub fn depth(&self, current_remaining: f32, period: f32) -> f32
    {
        if self.crumbs.is_empty() { return 0.0; }
        current_remaining + ((self.crumbs.len() - 1) as f32) * period
    }

    pub fn len(&self) -> usize { self.crumbs.len() }
    pub fn is_empty(&self) -> bool { self.crumbs.is_empty() }
    pub fn capacity(&self) -> usize { self.capacity }

    pub fn iter(&self) -> impl Iterator<Item = &Crumb> + '_
    {
        self.crumbs.iter()
    }
}

//-------------------------------------------------------------------------------------------------------------------
