//! Experience-to-level progression rules.
//!
//! The level is a pure function of accumulated experience: every 100
//! points of experience is one level, starting at level 1. Maximum hit
//! points follow the level (10 per level) but are only rewritten when the
//! level actually changes; experience gains inside a level leave them
//! alone. Current hit points are never touched here; healing after a
//! level-up is the combat layer's decision.

use crate::world::Player;

/// Experience points required per level.
pub const EXPERIENCE_PER_LEVEL: u32 = 100;

/// Maximum hit points granted per level.
pub const HIT_POINTS_PER_LEVEL: u32 = 10;

/// Something observable that happened while applying a progression
/// change. Returned from [`Player::add_experience`] so callers see
/// level-ups without subscribing to anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Experience was gained.
    ExperienceGained { amount: u32, new_total: u32 },

    /// The derived level changed.
    LevelUp { new_level: u32 },
}

/// Derive the level for a given experience total.
pub fn level_for_experience(experience_points: u32) -> u32 {
    experience_points / EXPERIENCE_PER_LEVEL + 1
}

impl Player {
    /// Grant experience and re-derive the level.
    ///
    /// When the derived level differs from the current one, maximum hit
    /// points are reset to `level * 10` and the returned events include
    /// [`GameEvent::LevelUp`]. Re-derivation is idempotent: the same
    /// experience total always produces the same level, and a gain that
    /// stays inside the current level produces no level-up.
    pub fn add_experience(&mut self, points: u32) -> Vec<GameEvent> {
        let mut events = Vec::new();

        let new_total = self.experience_points() + points;
        if points > 0 {
            events.push(GameEvent::ExperienceGained {
                amount: points,
                new_total,
            });
        }

        let new_level = level_for_experience(new_total);
        let leveled = new_level != self.level();
        self.set_progression(new_total, new_level);

        if leveled {
            self.maximum_hit_points = (new_level * HIT_POINTS_PER_LEVEL) as i32;
            events.push(GameEvent::LevelUp { new_level });
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_player() -> Player {
        Player::new("Test Hero", 0, 10, 10, Vec::new(), 0)
    }

    #[test]
    fn test_level_derivation() {
        assert_eq!(level_for_experience(0), 1);
        assert_eq!(level_for_experience(99), 1);
        assert_eq!(level_for_experience(100), 2);
        assert_eq!(level_for_experience(199), 2);
        assert_eq!(level_for_experience(200), 3);
        assert_eq!(level_for_experience(1000), 11);
    }

    #[test]
    fn test_derivation_law_holds_after_any_gain() {
        let mut player = fresh_player();
        for points in [0, 1, 49, 50, 99, 100, 250, 1] {
            player.add_experience(points);
            assert_eq!(
                player.level(),
                player.experience_points() / EXPERIENCE_PER_LEVEL + 1
            );
        }
    }

    #[test]
    fn test_level_up_scenario() {
        let mut player = fresh_player();
        assert_eq!(player.level(), 1);

        let events = player.add_experience(150);
        assert_eq!(player.experience_points(), 150);
        assert_eq!(player.level(), 2);
        assert_eq!(player.maximum_hit_points, 20);
        assert_eq!(
            events,
            vec![
                GameEvent::ExperienceGained {
                    amount: 150,
                    new_total: 150
                },
                GameEvent::LevelUp { new_level: 2 },
            ]
        );

        // A gain inside the level changes neither level nor max HP.
        let events = player.add_experience(49);
        assert_eq!(player.experience_points(), 199);
        assert_eq!(player.level(), 2);
        assert_eq!(player.maximum_hit_points, 20);
        assert_eq!(
            events,
            vec![GameEvent::ExperienceGained {
                amount: 49,
                new_total: 199
            }]
        );
    }

    #[test]
    fn test_zero_gain_is_a_non_event() {
        let mut player = fresh_player();
        player.add_experience(150);

        let events = player.add_experience(0);
        assert!(events.is_empty());
        assert_eq!(player.level(), 2);
        assert_eq!(player.maximum_hit_points, 20);
    }

    #[test]
    fn test_level_up_fires_once_per_transition() {
        let mut player = fresh_player();

        let first = player.add_experience(100);
        assert!(first.contains(&GameEvent::LevelUp { new_level: 2 }));

        // Same level re-derived on the next gain: no duplicate signal.
        let second = player.add_experience(10);
        assert!(!second
            .iter()
            .any(|e| matches!(e, GameEvent::LevelUp { .. })));
    }

    #[test]
    fn test_multi_level_jump_reports_final_level() {
        let mut player = fresh_player();

        let events = player.add_experience(550);
        assert_eq!(player.level(), 6);
        assert_eq!(player.maximum_hit_points, 60);
        assert!(events.contains(&GameEvent::LevelUp { new_level: 6 }));
    }

    #[test]
    fn test_current_hit_points_untouched_by_level_up() {
        let mut player = fresh_player();
        player.current_hit_points = 3;

        player.add_experience(100);
        assert_eq!(player.maximum_hit_points, 20);
        assert_eq!(player.current_hit_points, 3);
    }
}
