//! Score-driven difficulty and per-predator anger.
//!
//! Nothing here is stored between frames except the anger table: every frame
//! the engine asks for a fresh [`DifficultyLevel`] computed from the score.

use super::config::{DifficultyTuning, GameConfig, PredatorProfile};
use super::predator::PredatorKind;

/// Anger of each predator kind, 1 (calm) up to the configured maximum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AngerLevels {
    levels: [u8; 3],
    max: u8,
}

impl AngerLevels {
    pub fn new(max: u8) -> Self {
        Self {
            levels: [1; 3],
            max: max.max(1),
        }
    }

    pub fn get(&self, kind: PredatorKind) -> u8 {
        self.levels[kind.index()]
    }

    fn raise(&mut self, kind: PredatorKind) -> u8 {
        let level = &mut self.levels[kind.index()];
        *level = (*level + 1).min(self.max);
        *level
    }
}

/// Difficulty derived from the current score
#[derive(Debug, Clone, PartialEq)]
pub struct DifficultyLevel {
    /// Kinds allowed to act this frame
    pub eligible: Vec<PredatorKind>,
    /// Cap on predators active at the same time
    pub max_simultaneous: usize,
    /// Movement speed per kind, indexed by [`PredatorKind::index`]
    pub speeds: [f32; 3],
    /// Extra spawn countdown frames removed per frame while below the cap
    pub spawn_acceleration: i32,
}

impl DifficultyLevel {
    pub fn is_eligible(&self, kind: PredatorKind) -> bool {
        self.eligible.contains(&kind)
    }

    pub fn speed(&self, kind: PredatorKind) -> f32 {
        self.speeds[kind.index()]
    }
}

/// Speed of one kind: base, plus a capped score term, plus anger
pub fn predator_speed(profile: &PredatorProfile, score: u32, anger: u8) -> f32 {
    let score_term = if profile.score_divisor > 0.0 {
        (score as f32 / profile.score_divisor).min(profile.score_cap)
    } else {
        0.0
    };
    let anger_term = anger.saturating_sub(1) as f32 * profile.anger_step;
    profile.base_speed + score_term + anger_term
}

/// Compute the difficulty for `score` under the given anger table
pub fn difficulty(score: u32, anger: &AngerLevels, config: &GameConfig) -> DifficultyLevel {
    let tuning = &config.difficulty;

    let mut eligible = vec![PredatorKind::DirectPursuit];
    if score > tuning.erratic_threshold {
        eligible.push(PredatorKind::ErraticPursuit);
    }
    if score > tuning.dive_threshold {
        eligible.push(PredatorKind::CircleAndDive);
    }

    let max_simultaneous = if score > tuning.third_slot_threshold {
        3
    } else if score > tuning.second_slot_threshold {
        2
    } else {
        1
    };

    let mut speeds = [0.0; 3];
    for kind in PredatorKind::ALL {
        speeds[kind.index()] = predator_speed(config.profile(kind), score, anger.get(kind));
    }

    DifficultyLevel {
        eligible,
        max_simultaneous,
        speeds,
        spawn_acceleration: spawn_acceleration(score, tuning),
    }
}

fn spawn_acceleration(score: u32, tuning: &DifficultyTuning) -> i32 {
    if tuning.spawn_acceleration_divisor <= 0.0 {
        return 1;
    }
    (1.0 + score as f32 / tuning.spawn_acceleration_divisor) as i32
}

/// Owns the anger table and turns scores into difficulty levels
#[derive(Debug, Clone)]
pub struct DifficultyController {
    config: GameConfig,
    anger: AngerLevels,
}

impl DifficultyController {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            config: config.clone(),
            anger: AngerLevels::new(config.difficulty.max_anger),
        }
    }

    pub fn anger(&self, kind: PredatorKind) -> u8 {
        self.anger.get(kind)
    }

    pub fn anger_levels(&self) -> &AngerLevels {
        &self.anger
    }

    /// Provoke a predator: its anger rises by one, up to the maximum.
    /// Returns the new level.
    pub fn taunt(&mut self, kind: PredatorKind) -> u8 {
        let level = self.anger.raise(kind);
        tracing::debug!(?kind, level, "predator taunted");
        level
    }

    pub fn assess(&self, score: u32) -> DifficultyLevel {
        difficulty(score, &self.anger, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> DifficultyController {
        DifficultyController::new(&GameConfig::default())
    }

    #[test]
    fn test_score_zero_only_direct() {
        let level = controller().assess(0);
        assert_eq!(level.eligible, vec![PredatorKind::DirectPursuit]);
        assert_eq!(level.max_simultaneous, 1);
        assert_eq!(level.spawn_acceleration, 1);
    }

    #[test]
    fn test_score_25_all_three() {
        let level = controller().assess(25);
        for kind in PredatorKind::ALL {
            assert!(level.is_eligible(kind));
        }
        assert_eq!(level.max_simultaneous, 3);
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        let c = controller();
        assert!(!c.assess(5).is_eligible(PredatorKind::ErraticPursuit));
        assert!(c.assess(6).is_eligible(PredatorKind::ErraticPursuit));
        assert!(!c.assess(15).is_eligible(PredatorKind::CircleAndDive));
        assert!(c.assess(16).is_eligible(PredatorKind::CircleAndDive));
        assert_eq!(c.assess(10).max_simultaneous, 1);
        assert_eq!(c.assess(11).max_simultaneous, 2);
        assert_eq!(c.assess(20).max_simultaneous, 2);
        assert_eq!(c.assess(21).max_simultaneous, 3);
    }

    #[test]
    fn test_spawn_acceleration_grows_with_score() {
        let c = controller();
        assert_eq!(c.assess(49).spawn_acceleration, 1);
        assert_eq!(c.assess(50).spawn_acceleration, 2);
        assert_eq!(c.assess(120).spawn_acceleration, 3);
    }

    #[test]
    fn test_speed_monotonic_in_score() {
        let c = controller();
        for kind in PredatorKind::ALL {
            let mut previous = c.assess(0).speed(kind);
            for score in 1..200 {
                let speed = c.assess(score).speed(kind);
                assert!(speed >= previous);
                previous = speed;
            }
        }
    }

    #[test]
    fn test_speed_score_term_capped() {
        let config = GameConfig::default();
        let direct = &config.direct;
        assert_eq!(predator_speed(direct, 0, 1), 2.5);
        assert_eq!(predator_speed(direct, 25, 1), 3.5);
        assert_eq!(predator_speed(direct, 1000, 1), 4.5);
        assert_eq!(predator_speed(&config.diver, 1000, 1), 12.0);
    }

    #[test]
    fn test_anger_strictly_increases_speed() {
        let mut c = controller();
        for kind in PredatorKind::ALL {
            let mut previous = c.assess(10).speed(kind);
            for _ in 0..3 {
                c.taunt(kind);
                let speed = c.assess(10).speed(kind);
                assert!(speed > previous);
                previous = speed;
            }
        }
    }

    #[test]
    fn test_taunt_clamps_at_max() {
        let mut c = controller();
        for _ in 0..10 {
            c.taunt(PredatorKind::ErraticPursuit);
        }
        assert_eq!(c.anger(PredatorKind::ErraticPursuit), 4);
        assert_eq!(c.anger(PredatorKind::DirectPursuit), 1);
        assert_eq!(c.anger_levels().get(PredatorKind::CircleAndDive), 1);
    }
}
