//! Builder for fresh player characters.
//!
//! A new character gets the six standard attributes rolled from their
//! dice notation, starting gold, a basic weapon, a snack, and the recipe
//! to make more snacks. Restored characters skip this entirely and come
//! back through [`persist`](crate::persist) with their rolled values
//! intact.

use crate::catalog::{self, item_ids, recipe_ids};
use crate::dice::{DiceError, DiceExpression};
use crate::world::{Player, PlayerAttribute};
use rand::Rng;
use thiserror::Error;

/// The six standard attributes, as (key, display name) pairs.
pub const STANDARD_ATTRIBUTES: [(&str, &str); 6] = [
    ("STR", "Strength"),
    ("DEX", "Dexterity"),
    ("CON", "Constitution"),
    ("INT", "Intelligence"),
    ("WIS", "Wisdom"),
    ("CHA", "Charisma"),
];

/// Notation rolled for each standard attribute.
pub const ATTRIBUTE_DICE: &str = "3d6";

const STARTING_GOLD: i32 = 100;
const STARTING_HIT_POINTS: i32 = 10;
const STARTING_ITEMS: [u32; 2] = [item_ids::POINTY_STICK, item_ids::GRANOLA_BAR];
const STARTING_RECIPES: [u32; 1] = [recipe_ids::GRANOLA_BAR];

/// Error from character building.
#[derive(Debug, Error)]
pub enum BuilderError {
    #[error("player name is required")]
    MissingName,

    #[error(transparent)]
    Dice(#[from] DiceError),

    #[error("starting item {0} is not in the catalog")]
    UnknownStartingItem(u32),

    #[error("starting recipe {0} is not in the catalog")]
    UnknownStartingRecipe(u32),
}

/// Step-by-step builder for a new [`Player`].
#[derive(Debug, Clone, Default)]
pub struct PlayerBuilder {
    name: Option<String>,
    gold: Option<i32>,
}

impl PlayerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn starting_gold(mut self, gold: i32) -> Self {
        self.gold = Some(gold);
        self
    }

    /// Build with the thread-local RNG.
    pub fn build(self) -> Result<Player, BuilderError> {
        self.build_with_rng(&mut rand::thread_rng())
    }

    /// Build with a specific RNG (useful for deterministic tests).
    pub fn build_with_rng<R: Rng>(self, rng: &mut R) -> Result<Player, BuilderError> {
        let name = self.name.ok_or(BuilderError::MissingName)?;

        let dice = DiceExpression::parse(ATTRIBUTE_DICE)?;
        let attributes = STANDARD_ATTRIBUTES
            .iter()
            .map(|(key, display_name)| {
                PlayerAttribute::new(*key, *display_name, ATTRIBUTE_DICE, dice.roll_with_rng(rng))
            })
            .collect();

        let mut player = Player::new(
            name,
            0,
            STARTING_HIT_POINTS,
            STARTING_HIT_POINTS,
            attributes,
            self.gold.unwrap_or(STARTING_GOLD),
        );

        for id in STARTING_ITEMS {
            let item =
                catalog::item_by_type_id(id).ok_or(BuilderError::UnknownStartingItem(id))?;
            player.inventory.add_item(item);
        }

        for id in STARTING_RECIPES {
            let recipe =
                catalog::recipe_by_id(id).ok_or(BuilderError::UnknownStartingRecipe(id))?;
            player.learn_recipe(recipe);
        }

        Ok(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_build_requires_name() {
        assert!(matches!(
            PlayerBuilder::new().build(),
            Err(BuilderError::MissingName)
        ));
    }

    #[test]
    fn test_fresh_player_state() {
        let player = PlayerBuilder::new()
            .name("Aria")
            .build_with_rng(&mut StdRng::seed_from_u64(1))
            .unwrap();

        assert_eq!(player.name, "Aria");
        assert_eq!(player.experience_points(), 0);
        assert_eq!(player.level(), 1);
        assert_eq!(player.maximum_hit_points, STARTING_HIT_POINTS);
        assert_eq!(player.current_hit_points, STARTING_HIT_POINTS);
        assert_eq!(player.gold, STARTING_GOLD);

        assert!(player.inventory.has_item(item_ids::POINTY_STICK));
        assert!(player.inventory.has_item(item_ids::GRANOLA_BAR));
        assert!(player.knows_recipe(recipe_ids::GRANOLA_BAR));
        assert!(player.quests.is_empty());
    }

    #[test]
    fn test_attributes_rolled_in_notation_range() {
        let player = PlayerBuilder::new()
            .name("Aria")
            .build_with_rng(&mut StdRng::seed_from_u64(2))
            .unwrap();

        assert_eq!(player.attributes.len(), STANDARD_ATTRIBUTES.len());
        for attribute in &player.attributes {
            assert_eq!(attribute.dice_notation, ATTRIBUTE_DICE);
            assert!((3..=18).contains(&attribute.base_value));
            assert_eq!(attribute.modified_value, attribute.base_value);
        }
    }

    #[test]
    fn test_seeded_build_is_deterministic() {
        let a = PlayerBuilder::new()
            .name("Aria")
            .build_with_rng(&mut StdRng::seed_from_u64(9))
            .unwrap();
        let b = PlayerBuilder::new()
            .name("Aria")
            .build_with_rng(&mut StdRng::seed_from_u64(9))
            .unwrap();

        assert_eq!(a.attributes, b.attributes);
    }

    #[test]
    fn test_starting_gold_override() {
        let player = PlayerBuilder::new()
            .name("Aria")
            .starting_gold(7)
            .build_with_rng(&mut StdRng::seed_from_u64(3))
            .unwrap();

        assert_eq!(player.gold, 7);
    }
}
