//! Relational rows for a Pokémon, the reassembled record, and the public response shapes.

use serde::{Deserialize, Serialize};

use super::{NameAndUrl, SpriteMap};

/// Root row before it has been given an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPokemon {
    pub base_experience: i64,
    pub height: i64,
    pub weight: i64,
    pub order: i64,
    pub is_default: bool,
    pub location_area_encounters: String,
    pub form: NameAndUrl,
    pub species: NameAndUrl,
}

/// Stored root row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonRow {
    pub id: i64,
    pub base_experience: i64,
    pub height: i64,
    pub weight: i64,
    pub order: i64,
    pub is_default: bool,
    pub location_area_encounters: String,
    pub form: NameAndUrl,
    pub species: NameAndUrl,
}

#[cfg(test)]
impl PokemonRow {
    pub fn from_new(id: i64, new: NewPokemon) -> Self {
        Self {
            id,
            base_experience: new.base_experience,
            height: new.height,
            weight: new.weight,
            order: new.order,
            is_default: new.is_default,
            location_area_encounters: new.location_area_encounters,
            form: new.form,
            species: new.species,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilityRow {
    pub pokemon_id: i64,
    pub ability: NameAndUrl,
    pub is_hidden: bool,
    pub slot: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameIndexRow {
    pub pokemon_id: i64,
    pub version: NameAndUrl,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeldItemRow {
    pub pokemon_id: i64,
    pub item: NameAndUrl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemVersionDetailRow {
    pub item_id: i64,
    pub version: NameAndUrl,
    pub rarity: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRow {
    pub pokemon_id: i64,
    pub move_: NameAndUrl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveVersionDetailRow {
    pub move_id: i64,
    pub level_learned_at: i64,
    pub move_learn_method: NameAndUrl,
    pub version_group: NameAndUrl,
}

/// One flattened sprite variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteRow {
    pub pokemon_id: i64,
    pub sprites: SpriteMap,
    pub title: Option<String>,
    pub is_other: bool,
    pub is_animated: bool,
    pub is_icons: bool,
}

impl SpriteRow {
    /// The base sprite is untitled and carries none of the variant flags.
    pub fn is_base(&self) -> bool {
        self.title.is_none() && !self.is_other && !self.is_animated && !self.is_icons
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatRow {
    pub pokemon_id: i64,
    pub stat: NameAndUrl,
    pub base_stat: i64,
    pub effort: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRow {
    pub pokemon_id: i64,
    pub kind: NameAndUrl,
    pub slot: i64,
}

/// First-level children keyed by the root identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relations {
    pub abilities: Vec<AbilityRow>,
    pub game_indices: Vec<GameIndexRow>,
    pub held_items: Vec<HeldItemRow>,
    pub moves: Vec<MoveRow>,
    pub sprites: Vec<SpriteRow>,
    pub stats: Vec<StatRow>,
    pub types: Vec<TypeRow>,
}

/// Second-level children keyed by held item and move identities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Details {
    pub item_version_details: Vec<ItemVersionDetailRow>,
    pub move_version_details: Vec<MoveVersionDetailRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeldItem {
    pub id: i64,
    pub item: NameAndUrl,
    pub version_details: Vec<ItemVersionDetailRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub id: i64,
    pub move_: NameAndUrl,
    pub version_group_details: Vec<MoveVersionDetailRow>,
}

/// A root row with every child collection reattached.
///
/// Collections that were not fetched are left empty; listings only load sprites and types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonRecord {
    pub pokemon: PokemonRow,
    pub abilities: Vec<AbilityRow>,
    pub game_indices: Vec<GameIndexRow>,
    pub held_items: Vec<HeldItem>,
    pub moves: Vec<Move>,
    pub sprites: Vec<SpriteRow>,
    pub stats: Vec<StatRow>,
    pub types: Vec<TypeRow>,
}

impl PokemonRecord {
    pub fn new(pokemon: PokemonRow) -> Self {
        Self {
            pokemon,
            abilities: Vec::new(),
            game_indices: Vec::new(),
            held_items: Vec::new(),
            moves: Vec::new(),
            sprites: Vec::new(),
            stats: Vec::new(),
            types: Vec::new(),
        }
    }
}

// ==================== RESPONSE SHAPES ====================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeName {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDto {
    pub slot: i64,
    #[serde(rename = "type")]
    pub kind: TypeName,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontSprite {
    pub front_default: Option<String>,
}

/// Listing and search entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSummary {
    pub id: i64,
    pub name: String,
    pub sprites: FrontSprite,
    pub types: Vec<TypeDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDetailDto {
    pub level_learned_at: i64,
    pub version_group: String,
    pub move_learn_method: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDto {
    #[serde(rename = "move")]
    pub move_: String,
    pub version_group_details: Vec<MoveDetailDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatDto {
    pub base_stat: i64,
    pub stat: String,
    pub effort: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityDto {
    pub ability: String,
    pub is_hidden: bool,
    pub slot: i64,
}

/// Single-record response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonDetails {
    pub id: i64,
    pub name: String,
    pub sprites: SpriteMap,
    pub types: Vec<TypeDto>,
    pub height: i64,
    pub weight: i64,
    pub moves: Vec<MoveDto>,
    pub order: i64,
    pub species: String,
    pub stats: Vec<StatDto>,
    pub abilities: Vec<AbilityDto>,
    pub form: String,
}

/// Pagination metadata attached to `/api/v2/pokemons`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub total: u64,
    pub pages: u64,
    pub page: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonPage {
    pub data: Vec<PokemonSummary>,
    pub metadata: PageMetadata,
}

/// Identities assigned by an import, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub count: usize,
    pub ids: Vec<i64>,
}
