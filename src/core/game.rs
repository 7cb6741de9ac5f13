use super::challenge::{Challenge, ChallengeTiming};
use super::collision::{self, Collision};
use super::constants::*;
use super::entity::{Entity, Obstacle};
use super::obstacles::{spawn_cadence, spawn_pair};
use super::speech::SpeechInput;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

/// Tunables for one run. `Default` matches the shipped game.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub field: Vec2,
    pub base_gap: f32,
    pub obstacle_width: f32,
    pub spawn_cadence: f32,
    pub scroll_per_tick: f32,
    pub start_speed: f32,
    pub speed_step: f32,
    pub challenge: ChallengeTiming,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field: Vec2::new(DEFAULT_FIELD_WIDTH, DEFAULT_FIELD_HEIGHT),
            base_gap: BASE_GAP,
            obstacle_width: OBSTACLE_WIDTH,
            spawn_cadence: BASE_SPAWN_CADENCE,
            scroll_per_tick: SCROLL_PER_TICK,
            start_speed: START_SPEED,
            speed_step: SPEED_STEP,
            challenge: ChallengeTiming::default(),
        }
    }
}

impl GameConfig {
    pub fn with_field(mut self, width: f32, height: f32) -> Self {
        self.field = Vec2::new(width, height);
        self
    }
}

/// Player input sampled once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub ascend: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Running,
    Over,
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub config: GameConfig,
    pub entity: Entity,
    pub obstacles: Vec<Obstacle>,
    pub score: u64,
    pub speed: f32,
    pub tick: u64,
    pub challenge: Challenge,
    status: Status,
    ended_by: Option<Collision>,
    rng: StdRng,
}

impl GameState {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Seeds from the platform RNG (`crypto.getRandomValues` in the browser).
    pub fn from_entropy(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let challenge = Challenge::new(&mut rng, config.challenge);
        Self {
            entity: Entity::default(),
            obstacles: Vec::new(),
            score: 0,
            speed: config.start_speed,
            tick: 0,
            challenge,
            status: Status::Running,
            ended_by: None,
            rng,
            config,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status == Status::Over
    }

    pub fn ended_by(&self) -> Option<Collision> {
        self.ended_by
    }

    pub fn field_width(&self) -> f32 {
        self.config.field.x
    }

    pub fn field_height(&self) -> f32 {
        self.config.field.y
    }

    /// Advances the game by one tick. A finished game is left untouched.
    pub fn update(
        &mut self,
        dt: Duration,
        controls: Controls,
        speech: &mut dyn SpeechInput,
    ) -> Status {
        if self.is_over() {
            return self.status;
        }

        // Velocity keeps evolving during a penalty; only the position is held.
        self.entity.steer(controls.ascend);
        if !self.challenge.is_penalized() {
            self.entity.integrate();
        }

        if self.tick % spawn_cadence(self.config.spawn_cadence, self.speed) == 0 {
            let pair = spawn_pair(
                &mut self.rng,
                self.config.field.x,
                self.config.field.y,
                self.config.base_gap,
                self.config.obstacle_width,
            );
            self.obstacles.push(pair.upper);
            self.obstacles.push(pair.lower);
        }

        let shift = self.config.scroll_per_tick * self.speed;
        for o in self.obstacles.iter_mut() {
            o.pos.x -= shift;
        }
        self.obstacles.retain(|o| o.right() > 0.0);

        if let Some(hit) = collision::detect(
            &self.entity.bounds(),
            &self.obstacles,
            self.config.field.y,
        ) {
            log::info!("[game] over: {:?} at score {}", hit, self.score);
            self.status = Status::Over;
            self.ended_by = Some(hit);
        }

        if !self.is_over() {
            self.score += 1;
            self.speed += self.config.speed_step;
        }

        self.challenge.advance(dt, &mut self.rng, speech);
        if self.is_over() {
            self.challenge.halt(speech);
        }

        self.tick += 1;
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::speech::NoSpeech;

    #[test]
    fn first_tick_spawns_a_pair() {
        let mut g = GameState::new(GameConfig::default(), 5);
        g.update(Duration::ZERO, Controls::default(), &mut NoSpeech);
        assert_eq!(g.obstacles.len(), 2);
        assert_eq!(g.tick, 1);
        assert_eq!(g.score, 1);
    }

    #[test]
    fn update_after_game_over_is_a_no_op() {
        let mut g = GameState::new(GameConfig::default(), 5);
        g.entity.pos.y = -50.0;
        assert_eq!(
            g.update(Duration::ZERO, Controls::default(), &mut NoSpeech),
            Status::Over
        );
        let tick = g.tick;
        let y = g.entity.pos.y;
        g.update(Duration::from_secs(10), Controls { ascend: true }, &mut NoSpeech);
        assert_eq!(g.tick, tick);
        assert_eq!(g.entity.pos.y, y);
        assert!(g.is_over());
    }
}
