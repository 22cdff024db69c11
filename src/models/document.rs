//! Nested Pokémon document as published by the external source.
//!
//! Only the fields that end up in the relational store are declared; anything else in
//! the payload (`past_types`, `cries`, ...) is ignored on deserialization.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Display name plus canonical source URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameAndUrl {
    pub name: String,
    pub url: String,
}

#[cfg(test)]
impl NameAndUrl {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// The eight image slots every sprite variant may carry. Missing and null both map to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteMap {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub front_female: Option<String>,
    #[serde(default)]
    pub front_shiny: Option<String>,
    #[serde(default)]
    pub front_shiny_female: Option<String>,
    #[serde(default)]
    pub back_default: Option<String>,
    #[serde(default)]
    pub back_female: Option<String>,
    #[serde(default)]
    pub back_shiny: Option<String>,
    #[serde(default)]
    pub back_shiny_female: Option<String>,
}

/// A per-game variant, optionally with an animated counterpart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VersionSprites {
    #[serde(flatten)]
    pub sprites: SpriteMap,
    #[serde(default)]
    pub animated: Option<SpriteMap>,
}

/// Top-level `sprites` object: base fields, artwork variants and per-generation variants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SpriteBundle {
    #[serde(flatten)]
    pub base: SpriteMap,
    #[serde(default)]
    pub other: BTreeMap<String, SpriteMap>,
    /// generation key -> variant title -> sprites
    #[serde(default)]
    pub versions: BTreeMap<String, BTreeMap<String, VersionSprites>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AbilityEntry {
    pub ability: NameAndUrl,
    pub is_hidden: bool,
    pub slot: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameIndexEntry {
    pub game_index: i64,
    pub version: NameAndUrl,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ItemVersionEntry {
    pub rarity: i64,
    pub version: NameAndUrl,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HeldItemEntry {
    pub item: NameAndUrl,
    #[serde(default)]
    pub version_details: Vec<ItemVersionEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VersionGroupEntry {
    pub level_learned_at: i64,
    pub move_learn_method: NameAndUrl,
    pub version_group: NameAndUrl,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MoveEntry {
    #[serde(rename = "move")]
    pub move_: NameAndUrl,
    #[serde(default)]
    pub version_group_details: Vec<VersionGroupEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatEntry {
    pub base_stat: i64,
    pub effort: i64,
    pub stat: NameAndUrl,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeEntry {
    pub slot: i64,
    #[serde(rename = "type")]
    pub kind: NameAndUrl,
}

/// The full nested document accepted by the import endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonDocument {
    /// Source-side identity. Not used as the stored identity.
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub abilities: Vec<AbilityEntry>,
    pub base_experience: i64,
    pub forms: Vec<NameAndUrl>,
    #[serde(default)]
    pub game_indices: Vec<GameIndexEntry>,
    pub height: i64,
    #[serde(default)]
    pub held_items: Vec<HeldItemEntry>,
    pub is_default: bool,
    #[serde(default)]
    pub location_area_encounters: String,
    #[serde(default)]
    pub moves: Vec<MoveEntry>,
    pub order: i64,
    pub species: NameAndUrl,
    pub sprites: SpriteBundle,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    #[serde(default)]
    pub types: Vec<TypeEntry>,
    pub weight: i64,
}

impl PokemonDocument {
    /// The inlined form; its name is the public name of the record.
    pub fn form(&self) -> Option<&NameAndUrl> {
        self.forms.first()
    }

    /// Reject documents that cannot produce a root row.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("name is required".to_string()));
        }
        match self.form() {
            Some(form) if !form.name.trim().is_empty() => Ok(()),
            _ => Err(AppError::Validation(format!(
                "{}: forms must contain at least one named form",
                self.name
            ))),
        }
    }
}

/// Import body: a single document or an array of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ImportPayload {
    Many(Vec<PokemonDocument>),
    One(Box<PokemonDocument>),
}

impl ImportPayload {
    pub fn into_documents(self) -> Vec<PokemonDocument> {
        match self {
            ImportPayload::Many(docs) => docs,
            ImportPayload::One(doc) => vec![*doc],
        }
    }
}
