//! Canonical item, quest, and recipe registries.
//!
//! These are the single source of truth for what exists in the game,
//! populated once and immutable for the process lifetime. All stored
//! references (inventories, save files) use integer IDs that resolve
//! here; a failed lookup is how the persistence layer detects a dangling
//! reference.
//!
//! Items resolve to clones (they have value identity); quests and
//! recipes resolve to `&'static` borrows of the one canonical instance.

use crate::world::{GameItem, ItemCategory, ItemQuantity, Quest, Recipe};

/// Well-known item type IDs.
pub mod item_ids {
    pub const POINTY_STICK: u32 = 1001;
    pub const RUSTY_SWORD: u32 = 1002;
    pub const SNAKE_FANG: u32 = 1101;
    pub const SNAKESKIN: u32 = 1102;
    pub const GRANOLA_BAR: u32 = 2001;
    pub const OATS: u32 = 3001;
    pub const HONEY: u32 = 3002;
    pub const RAISINS: u32 = 3003;
}

/// Well-known quest IDs.
pub mod quest_ids {
    pub const CLEAR_THE_HERB_GARDEN: u32 = 1;
    pub const CULL_THE_SNAKES: u32 = 2;
}

/// Well-known recipe IDs.
pub mod recipe_ids {
    pub const GRANOLA_BAR: u32 = 1;
}

/// Look up an item definition by type ID, returning a fresh instance.
pub fn item_by_type_id(id: u32) -> Option<GameItem> {
    ITEMS.iter().find(|i| i.item_type_id == id).cloned()
}

/// Look up the canonical quest with the given ID.
pub fn quest_by_id(id: u32) -> Option<&'static Quest> {
    QUESTS.iter().find(|q| q.id == id)
}

/// Look up the canonical recipe with the given ID.
pub fn recipe_by_id(id: u32) -> Option<&'static Recipe> {
    RECIPES.iter().find(|r| r.id == id)
}

lazy_static::lazy_static! {
    /// Standard item definitions.
    static ref ITEMS: Vec<GameItem> = vec![
        GameItem::new(item_ids::POINTY_STICK, ItemCategory::Weapon, "Pointy Stick", 1),
        GameItem::new(item_ids::RUSTY_SWORD, ItemCategory::Weapon, "Rusty Sword", 5),
        GameItem::new(item_ids::SNAKE_FANG, ItemCategory::Miscellaneous, "Snake Fang", 1),
        GameItem::new(item_ids::SNAKESKIN, ItemCategory::Miscellaneous, "Snakeskin", 2),
        GameItem::new(item_ids::GRANOLA_BAR, ItemCategory::Consumable, "Granola Bar", 5),
        GameItem::new(item_ids::OATS, ItemCategory::Miscellaneous, "Oats", 1),
        GameItem::new(item_ids::HONEY, ItemCategory::Miscellaneous, "Honey", 2),
        GameItem::new(item_ids::RAISINS, ItemCategory::Miscellaneous, "Raisins", 2),
    ];

    /// Standard quest definitions.
    static ref QUESTS: Vec<Quest> = vec![
        Quest {
            id: quest_ids::CLEAR_THE_HERB_GARDEN,
            name: "Clear the Herb Garden".to_string(),
            description: "Gather oats from the overgrown herb garden behind the farmhouse."
                .to_string(),
            items_to_complete: vec![ItemQuantity::new(item_ids::OATS, 5)],
            reward_experience_points: 25,
            reward_gold: 10,
            reward_items: vec![ItemQuantity::new(item_ids::GRANOLA_BAR, 1)],
        },
        Quest {
            id: quest_ids::CULL_THE_SNAKES,
            name: "Cull the Snakes".to_string(),
            description: "Thin out the snakes along the trade road and bring back proof."
                .to_string(),
            items_to_complete: vec![ItemQuantity::new(item_ids::SNAKE_FANG, 3)],
            reward_experience_points: 40,
            reward_gold: 20,
            reward_items: vec![ItemQuantity::new(item_ids::RUSTY_SWORD, 1)],
        },
    ];

    /// Standard recipe definitions.
    static ref RECIPES: Vec<Recipe> = vec![
        Recipe {
            id: recipe_ids::GRANOLA_BAR,
            name: "Granola Bar".to_string(),
            ingredients: vec![
                ItemQuantity::new(item_ids::OATS, 1),
                ItemQuantity::new(item_ids::HONEY, 1),
                ItemQuantity::new(item_ids::RAISINS, 1),
            ],
            output_items: vec![ItemQuantity::new(item_ids::GRANOLA_BAR, 1)],
        },
    ];
}
