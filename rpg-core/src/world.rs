//! Core game world data model.
//!
//! Defines the player character, attributes, items, quests, recipes,
//! and the session wrapper that ties a character to a world position.
//!
//! Quest and recipe definitions are canonical objects owned by the
//! [`catalog`](crate::catalog); a player only ever holds `&'static`
//! borrows of them, so two characters who know the same recipe share
//! one object. Items are value-identity: each inventory entry is a
//! clone of its catalog definition, keyed by `item_type_id`.

use crate::progression::level_for_experience;

// ============================================================================
// Attributes
// ============================================================================

/// A single player attribute (strength, dexterity, and so on).
///
/// `base_value` is rolled from `dice_notation` at character creation and
/// never re-rolled; `modified_value` is the value after equipment or
/// status effects, maintained by the combat/trading layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerAttribute {
    pub key: String,
    pub display_name: String,
    pub dice_notation: String,
    pub base_value: i32,
    pub modified_value: i32,
}

impl PlayerAttribute {
    /// Create an attribute whose modified value starts at its base value.
    pub fn new(
        key: impl Into<String>,
        display_name: impl Into<String>,
        dice_notation: impl Into<String>,
        base_value: i32,
    ) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
            dice_notation: dice_notation.into(),
            base_value,
            modified_value: base_value,
        }
    }
}

// ============================================================================
// Items and Inventory
// ============================================================================

/// Broad gameplay category of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemCategory {
    Weapon,
    Consumable,
    Miscellaneous,
}

/// An item instance carried by a character.
///
/// Items have value identity: two instances with the same `item_type_id`
/// are interchangeable, and every instance is a clone of the canonical
/// definition in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameItem {
    pub item_type_id: u32,
    pub category: ItemCategory,
    pub name: String,
    pub price: i32,
}

impl GameItem {
    pub fn new(
        item_type_id: u32,
        category: ItemCategory,
        name: impl Into<String>,
        price: i32,
    ) -> Self {
        Self {
            item_type_id,
            category,
            name: name.into(),
            price,
        }
    }
}

/// A reference to an item type together with a count, used by quest
/// requirements and recipe ingredients/outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemQuantity {
    pub item_id: u32,
    pub quantity: u32,
}

impl ItemQuantity {
    pub fn new(item_id: u32, quantity: u32) -> Self {
        Self { item_id, quantity }
    }
}

/// A character's carried items, as a multiset: one entry per instance,
/// repeated entries for repeated items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<GameItem>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// All carried item instances, in acquisition order.
    pub fn items(&self) -> &[GameItem] {
        &self.items
    }

    /// Add one item instance.
    pub fn add_item(&mut self, item: GameItem) {
        self.items.push(item);
    }

    /// Remove one instance of the given item type. Returns false if the
    /// inventory holds no such item.
    pub fn remove_item(&mut self, item_type_id: u32) -> bool {
        if let Some(idx) = self
            .items
            .iter()
            .position(|i| i.item_type_id == item_type_id)
        {
            self.items.remove(idx);
            true
        } else {
            false
        }
    }

    /// Number of instances of the given item type.
    pub fn quantity_of(&self, item_type_id: u32) -> u32 {
        self.items
            .iter()
            .filter(|i| i.item_type_id == item_type_id)
            .count() as u32
    }

    pub fn has_item(&self, item_type_id: u32) -> bool {
        self.quantity_of(item_type_id) > 0
    }

    /// Whether the inventory covers every entry of a requirement list.
    pub fn has_all_of(&self, required: &[ItemQuantity]) -> bool {
        required
            .iter()
            .all(|req| self.quantity_of(req.item_id) >= req.quantity)
    }
}

// ============================================================================
// Quests and Recipes
// ============================================================================

/// A canonical quest definition. Lives in the catalog for the whole
/// process lifetime; characters reference it, never copy it.
#[derive(Debug, PartialEq, Eq)]
pub struct Quest {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub items_to_complete: Vec<ItemQuantity>,
    pub reward_experience_points: u32,
    pub reward_gold: i32,
    pub reward_items: Vec<ItemQuantity>,
}

/// A character's progress on one quest: a borrow of the canonical quest
/// plus a per-character completion flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestStatus {
    pub quest: &'static Quest,
    pub is_completed: bool,
}

impl QuestStatus {
    pub fn new(quest: &'static Quest) -> Self {
        Self {
            quest,
            is_completed: false,
        }
    }
}

/// A canonical crafting recipe definition, catalog-owned like [`Quest`].
#[derive(Debug, PartialEq, Eq)]
pub struct Recipe {
    pub id: u32,
    pub name: String,
    pub ingredients: Vec<ItemQuantity>,
    pub output_items: Vec<ItemQuantity>,
}

// ============================================================================
// Player
// ============================================================================

/// Error from gold transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("insufficient gold: tried to spend {requested} but only {held} held")]
pub struct InsufficientGold {
    pub requested: i32,
    pub held: i32,
}

/// The player character.
///
/// Created once per session, either fresh through
/// [`PlayerBuilder`](crate::character_builder::PlayerBuilder) or restored
/// through [`persist`](crate::persist), and mutated in place afterwards.
#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    experience_points: u32,
    level: u32,
    pub maximum_hit_points: i32,
    pub current_hit_points: i32,
    pub attributes: Vec<PlayerAttribute>,
    pub gold: i32,
    pub inventory: Inventory,
    pub quests: Vec<QuestStatus>,
    pub recipes: Vec<&'static Recipe>,
}

impl Player {
    /// Construct a player from stored state. The level is always derived
    /// from the experience value, never taken on faith.
    pub fn new(
        name: impl Into<String>,
        experience_points: u32,
        maximum_hit_points: i32,
        current_hit_points: i32,
        attributes: Vec<PlayerAttribute>,
        gold: i32,
    ) -> Self {
        Self {
            name: name.into(),
            experience_points,
            level: level_for_experience(experience_points),
            maximum_hit_points,
            current_hit_points,
            attributes,
            gold,
            inventory: Inventory::new(),
            quests: Vec::new(),
            recipes: Vec::new(),
        }
    }

    pub fn experience_points(&self) -> u32 {
        self.experience_points
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub(crate) fn set_progression(&mut self, experience_points: u32, level: u32) {
        self.experience_points = experience_points;
        self.level = level;
    }

    /// Accept a quest. Accepting a quest the player already has is a
    /// no-op, so acceptance is idempotent per quest ID.
    pub fn assign_quest(&mut self, quest: &'static Quest) {
        if !self.quests.iter().any(|qs| qs.quest.id == quest.id) {
            self.quests.push(QuestStatus::new(quest));
        }
    }

    /// Mark a held quest completed. Returns false if the player does not
    /// have the quest.
    pub fn complete_quest(&mut self, quest_id: u32) -> bool {
        match self.quests.iter_mut().find(|qs| qs.quest.id == quest_id) {
            Some(status) => {
                status.is_completed = true;
                true
            }
            None => false,
        }
    }

    /// Learn a recipe. Learning a known recipe is a no-op.
    pub fn learn_recipe(&mut self, recipe: &'static Recipe) {
        if !self.recipes.iter().any(|r| r.id == recipe.id) {
            self.recipes.push(recipe);
        }
    }

    pub fn knows_recipe(&self, recipe_id: u32) -> bool {
        self.recipes.iter().any(|r| r.id == recipe_id)
    }

    pub fn receive_gold(&mut self, amount: i32) {
        self.gold += amount;
    }

    /// Spend gold. Fails without mutating when the balance is too low,
    /// so the balance never goes negative.
    pub fn spend_gold(&mut self, amount: i32) -> Result<(), InsufficientGold> {
        if amount > self.gold {
            return Err(InsufficientGold {
                requested: amount,
                held: self.gold,
            });
        }
        self.gold -= amount;
        Ok(())
    }
}

// ============================================================================
// Session
// ============================================================================

/// One play session: the player plus their current world position.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub player: Player,
    pub x_coordinate: i32,
    pub y_coordinate: i32,
}

impl GameSession {
    pub fn new(player: Player, x_coordinate: i32, y_coordinate: i32) -> Self {
        Self {
            player,
            x_coordinate,
            y_coordinate,
        }
    }
}
