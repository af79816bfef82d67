//! Persistence and progression core for a single-player, turn-based RPG.
//!
//! This crate provides:
//! - Level derivation from accumulated experience, with explicit
//!   level-up events
//! - Catalog registries for canonical item/quest/recipe definitions
//! - Save/load of the full player state as a JSON document, with
//!   catalog references reattached by ID on load
//! - Dice-notation rolling and a builder for fresh characters
//!
//! # Quick Start
//!
//! ```
//! use rpg_core::{GameEvent, GameSession, PlayerBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut player = PlayerBuilder::new().name("Aria").build()?;
//!
//! let events = player.add_experience(150);
//! assert!(events.contains(&GameEvent::LevelUp { new_level: 2 }));
//!
//! let session = GameSession::new(player, 0, 0);
//! let restored = rpg_core::persist::from_document(&rpg_core::persist::to_document(&session))?;
//! assert_eq!(restored.player.level(), 2);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod character_builder;
pub mod dice;
pub mod persist;
pub mod progression;
pub mod world;

// Primary public API
pub use character_builder::{BuilderError, PlayerBuilder};
pub use dice::{DiceError, DiceExpression};
pub use persist::{load_game, save_game, PersistError};
pub use progression::{level_for_experience, GameEvent};
pub use world::{GameSession, Player};
