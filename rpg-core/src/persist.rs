//! Save-game persistence.
//!
//! Converts a [`GameSession`] to and from a human-readable JSON document.
//! Scalar state (name, experience, hit points, gold, attributes) is
//! serialized by value; items, quests, and recipes are serialized as
//! catalog IDs and reattached to their canonical definitions on load.
//!
//! Loading is fail-fast: a missing file, an unparseable document, or a
//! single dangling catalog reference aborts the whole reconstruction
//! with one error. No partial session is ever returned.

use crate::catalog;
use crate::world::{GameSession, Player, PlayerAttribute, QuestStatus};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from save/load operations.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("save file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("malformed save data in {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown {kind} ID {id} in save data")]
    UnknownReference { kind: ReferenceKind, id: u32 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Which catalog a dangling reference pointed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Item,
    Quest,
    Recipe,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReferenceKind::Item => "item",
            ReferenceKind::Quest => "quest",
            ReferenceKind::Recipe => "recipe",
        };
        write!(f, "{name}")
    }
}

// ============================================================================
// Wire document
// ============================================================================
//
// Field names are the stable on-disk contract. The document carries no
// version tag; any future schema change must add one and branch on it in
// decode rather than silently reinterpreting fields.

/// Root of the saved-game document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedGame {
    #[serde(rename = "CurrentPlayer")]
    pub current_player: SavedPlayer,
    #[serde(rename = "CurrentLocation")]
    pub current_location: SavedLocation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedPlayer {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "ExperiencePoints")]
    pub experience_points: u32,
    #[serde(rename = "MaximumHitPoints")]
    pub maximum_hit_points: i32,
    #[serde(rename = "CurrentHitPoints")]
    pub current_hit_points: i32,
    #[serde(rename = "Gold")]
    pub gold: i32,
    #[serde(rename = "Attributes")]
    pub attributes: Vec<SavedAttribute>,
    #[serde(rename = "Inventory")]
    pub inventory: SavedInventory,
    #[serde(rename = "Quests")]
    pub quests: Vec<SavedQuestStatus>,
    #[serde(rename = "Recipes")]
    pub recipes: Vec<SavedRecipe>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedAttribute {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "DisplayName")]
    pub display_name: String,
    #[serde(rename = "DiceNotation")]
    pub dice_notation: String,
    #[serde(rename = "BaseValue")]
    pub base_value: i32,
    #[serde(rename = "ModifiedValue")]
    pub modified_value: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedInventory {
    #[serde(rename = "Items")]
    pub items: Vec<SavedItem>,
}

/// One inventory entry. Only the type ID matters on load; the name and
/// price are written for readability of the save file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedItem {
    #[serde(rename = "ItemTypeID")]
    pub item_type_id: u32,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Price", default)]
    pub price: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedQuestStatus {
    #[serde(rename = "PlayerQuest")]
    pub player_quest: SavedQuestRef,
    #[serde(rename = "IsCompleted")]
    pub is_completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedQuestRef {
    #[serde(rename = "ID")]
    pub id: u32,
    #[serde(rename = "Name", default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedRecipe {
    #[serde(rename = "ID")]
    pub id: u32,
    #[serde(rename = "Name", default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedLocation {
    #[serde(rename = "XCoordinate")]
    pub x_coordinate: i32,
    #[serde(rename = "YCoordinate")]
    pub y_coordinate: i32,
}

// ============================================================================
// Encode
// ============================================================================

/// Convert a live session into its wire document. Total: every session
/// encodes.
pub fn to_document(session: &GameSession) -> SavedGame {
    let player = &session.player;

    SavedGame {
        current_player: SavedPlayer {
            name: player.name.clone(),
            experience_points: player.experience_points(),
            maximum_hit_points: player.maximum_hit_points,
            current_hit_points: player.current_hit_points,
            gold: player.gold,
            attributes: player
                .attributes
                .iter()
                .map(|a| SavedAttribute {
                    key: a.key.clone(),
                    display_name: a.display_name.clone(),
                    dice_notation: a.dice_notation.clone(),
                    base_value: a.base_value,
                    modified_value: a.modified_value,
                })
                .collect(),
            inventory: SavedInventory {
                items: player
                    .inventory
                    .items()
                    .iter()
                    .map(|i| SavedItem {
                        item_type_id: i.item_type_id,
                        name: i.name.clone(),
                        price: i.price,
                    })
                    .collect(),
            },
            quests: player
                .quests
                .iter()
                .map(|qs| SavedQuestStatus {
                    player_quest: SavedQuestRef {
                        id: qs.quest.id,
                        name: qs.quest.name.clone(),
                    },
                    is_completed: qs.is_completed,
                })
                .collect(),
            recipes: player
                .recipes
                .iter()
                .map(|r| SavedRecipe {
                    id: r.id,
                    name: r.name.clone(),
                })
                .collect(),
        },
        current_location: SavedLocation {
            x_coordinate: session.x_coordinate,
            y_coordinate: session.y_coordinate,
        },
    }
}

/// Save a session to a pretty-printed JSON file.
pub fn save_game(session: &GameSession, path: impl AsRef<Path>) -> Result<(), PersistError> {
    let document = to_document(session);
    let json = serde_json::to_string_pretty(&document)?;
    fs::write(path, json)?;
    Ok(())
}

// ============================================================================
// Decode
// ============================================================================

/// Reconstruct a live session from a wire document, reattaching every
/// catalog reference. Any dangling ID fails the whole reconstruction.
pub fn from_document(document: &SavedGame) -> Result<GameSession, PersistError> {
    let saved = &document.current_player;

    let attributes = saved
        .attributes
        .iter()
        .map(|a| PlayerAttribute {
            key: a.key.clone(),
            display_name: a.display_name.clone(),
            dice_notation: a.dice_notation.clone(),
            base_value: a.base_value,
            modified_value: a.modified_value,
        })
        .collect();

    // Level is re-derived from the restored experience inside Player::new.
    let mut player = Player::new(
        saved.name.clone(),
        saved.experience_points,
        saved.maximum_hit_points,
        saved.current_hit_points,
        attributes,
        saved.gold,
    );

    for entry in &saved.inventory.items {
        let item = catalog::item_by_type_id(entry.item_type_id).ok_or(
            PersistError::UnknownReference {
                kind: ReferenceKind::Item,
                id: entry.item_type_id,
            },
        )?;
        player.inventory.add_item(item);
    }

    for entry in &saved.quests {
        let quest =
            catalog::quest_by_id(entry.player_quest.id).ok_or(PersistError::UnknownReference {
                kind: ReferenceKind::Quest,
                id: entry.player_quest.id,
            })?;
        let mut status = QuestStatus::new(quest);
        status.is_completed = entry.is_completed;
        player.quests.push(status);
    }

    for entry in &saved.recipes {
        let recipe = catalog::recipe_by_id(entry.id).ok_or(PersistError::UnknownReference {
            kind: ReferenceKind::Recipe,
            id: entry.id,
        })?;
        player.learn_recipe(recipe);
    }

    Ok(GameSession::new(
        player,
        document.current_location.x_coordinate,
        document.current_location.y_coordinate,
    ))
}

/// Load a session from a JSON save file.
///
/// Fails with [`PersistError::NotFound`] before reading anything when the
/// path does not exist, [`PersistError::Malformed`] when the file does
/// not parse as a save document, and
/// [`PersistError::UnknownReference`] when a catalog ID has no
/// definition.
pub fn load_game(path: impl AsRef<Path>) -> Result<GameSession, PersistError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(PersistError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let text = fs::read_to_string(path)?;
    let document: SavedGame =
        serde_json::from_str(&text).map_err(|source| PersistError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    from_document(&document)
}
