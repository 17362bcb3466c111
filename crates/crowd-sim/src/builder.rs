//! Fluent construction of a [`CrowdSim`].

use crowd_core::{CrowdConfig, ObstacleRecord};

use crate::{CrowdSim, CrowdSpawner, SimResult, SpawnPlan, SpawnRequest};

/// Builder for [`CrowdSim`].  Configuration is validated once, at
/// [`build`][Self::build]; every setter is infallible.
///
/// ```
/// use crowd_core::{CrowdConfig, Vec3};
/// use crowd_sim::{CrowdSimBuilder, SpawnRequest};
///
/// let sim = CrowdSimBuilder::new(CrowdConfig::default())
///     .spawn(SpawnRequest::at(Vec3::new(3.0, 0.0, -2.0)))
///     .build()
///     .unwrap();
/// assert_eq!(sim.agent_count(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CrowdSimBuilder {
    config: CrowdConfig,
    obstacles: Vec<ObstacleRecord>,
    spawn_plan: Option<SpawnPlan>,
    initial: Vec<SpawnRequest>,
}

impl CrowdSimBuilder {
    pub fn new(config: CrowdConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Add one static obstacle.
    pub fn obstacle(mut self, obstacle: ObstacleRecord) -> Self {
        self.obstacles.push(obstacle);
        self
    }

    /// Replace the whole obstacle list.
    pub fn obstacles(mut self, obstacles: Vec<ObstacleRecord>) -> Self {
        self.obstacles = obstacles;
        self
    }

    /// Attach an interval spawner.
    pub fn spawner(mut self, plan: SpawnPlan) -> Self {
        self.spawn_plan = Some(plan);
        self
    }

    /// Queue one agent to exist from tick 0.
    pub fn spawn(mut self, request: SpawnRequest) -> Self {
        self.initial.push(request);
        self
    }

    /// Queue a batch of agents to exist from tick 0.
    pub fn spawn_all(mut self, requests: impl IntoIterator<Item = SpawnRequest>) -> Self {
        self.initial.extend(requests);
        self
    }

    /// Validate the configuration and assemble the simulation.
    pub fn build(self) -> SimResult<CrowdSim> {
        self.config.validate()?;
        let spawner = self.spawn_plan.map(CrowdSpawner::new);
        Ok(CrowdSim::new(
            self.config,
            self.obstacles,
            spawner,
            self.initial,
        ))
    }
}
