//local shortcuts
use crate::*;
use skirmish_net::*;

//third-party shortcuts

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

/// The rockets pre-allocated for one player.
#[derive(Default)]
pub struct RocketPool
{
    rockets: Vec<Rocket>,
}

impl RocketPool
{
    pub fn new(rockets: Vec<Rocket>) -> RocketPool
    {
        RocketPool{ rockets }
    }

    /// First free rocket, if any.
    pub fn get_free_rocket(&mut self) -> Option<&mut Rocket>
    {
        self.rockets.iter_mut().find(|rocket| rocket.is_free())
    }

    pub fn get(&self, handle: EntityHandle) -> Option<&Rocket>
    {
        self.rockets.iter().find(|rocket| rocket.handle() == handle)
    }

    pub fn get_mut(&mut self, handle: EntityHandle) -> Option<&mut Rocket>
    {
        self.rockets.iter_mut().find(|rocket| rocket.handle() == handle)
    }

    /// Number of rockets in flight.
    pub fn active_count(&self) -> usize
    {
        self.rockets.iter().filter(|rocket| !rocket.is_free()).count()
    }

    pub fn len(&self) -> usize { self.rockets.len() }
    pub fn is_empty(&self) -> bool { self.rockets.is_empty() }

    pub fn handles(&self) -> Vec<EntityHandle>
    {
        self.rockets.iter().map(|rocket| rocket.handle()).collect()
    }

    /// Advances every rocket in flight.
    pub fn tick(&mut self, delta_seconds: f32, probe: &dyn CollisionProbe) -> Vec<(EntityHandle, RocketEvent)>
    {
        self.rockets
            .iter_mut()
            .filter_map(|rocket| rocket.tick(delta_seconds, probe).map(|event| (rocket.handle(), event)))
            .collect()
    }
}

//-------------------------------------------------------------------------------------------------------------------
