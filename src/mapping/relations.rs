//! Relation extraction: nested document arrays to flat, parent-keyed rows.
//!
//! Writing a document happens in three phases because every level needs the generated
//! identity of the level above it:
//!
//! 1. [`root_from_document`] produces the root row,
//! 2. [`extract_relations`] produces first-level children for a root identity,
//! 3. [`extract_details`] produces held item and move details for the identities the
//!    first-level rows received, in document order.
//!
//! All three are pure. The `group_*` helpers go the other way.

use std::collections::HashMap;

use crate::config::SpriteTitlePolicy;
use crate::errors::AppError;
use crate::models::{
    AbilityRow, Details, GameIndexRow, HeldItem, HeldItemRow, ItemVersionDetailRow, Move,
    MoveRow, MoveVersionDetailRow, NewPokemon, PokemonDocument, Relations, StatRow, TypeRow,
};
#[cfg(test)]
use crate::models::{PokemonRecord, PokemonRow};

use super::sprites::flatten_sprites;

pub fn root_from_document(doc: &PokemonDocument) -> Result<NewPokemon, AppError> {
    doc.validate()?;
    let form = doc
        .form()
        .cloned()
        .ok_or_else(|| AppError::Validation(format!("{}: missing form", doc.name)))?;

    Ok(NewPokemon {
        base_experience: doc.base_experience,
        height: doc.height,
        weight: doc.weight,
        order: doc.order,
        is_default: doc.is_default,
        location_area_encounters: doc.location_area_encounters.clone(),
        form,
        species: doc.species.clone(),
    })
}

pub fn extract_relations(
    doc: &PokemonDocument,
    pokemon_id: i64,
    titles: SpriteTitlePolicy,
) -> Relations {
    Relations {
        abilities: doc
            .abilities
            .iter()
            .map(|a| AbilityRow {
                pokemon_id,
                ability: a.ability.clone(),
                is_hidden: a.is_hidden,
                slot: a.slot,
            })
            .collect(),
        game_indices: doc
            .game_indices
            .iter()
            .map(|g| GameIndexRow {
                pokemon_id,
                version: g.version.clone(),
                value: g.game_index,
            })
            .collect(),
        held_items: doc
            .held_items
            .iter()
            .map(|h| HeldItemRow {
                pokemon_id,
                item: h.item.clone(),
            })
            .collect(),
        moves: doc
            .moves
            .iter()
            .map(|m| MoveRow {
                pokemon_id,
                move_: m.move_.clone(),
            })
            .collect(),
        sprites: flatten_sprites(&doc.sprites, pokemon_id, titles),
        stats: doc
            .stats
            .iter()
            .map(|s| StatRow {
                pokemon_id,
                stat: s.stat.clone(),
                base_stat: s.base_stat,
                effort: s.effort,
            })
            .collect(),
        types: doc
            .types
            .iter()
            .map(|t| TypeRow {
                pokemon_id,
                kind: t.kind.clone(),
                slot: t.slot,
            })
            .collect(),
    }
}

/// Build grandchild rows. `item_ids` and `move_ids` are the identities assigned to
/// `doc.held_items` and `doc.moves`, position for position.
pub fn extract_details(
    doc: &PokemonDocument,
    item_ids: &[i64],
    move_ids: &[i64],
) -> Result<Details, AppError> {
    if item_ids.len() != doc.held_items.len() || move_ids.len() != doc.moves.len() {
        return Err(AppError::Internal(format!(
            "{}: got {} item ids for {} held items and {} move ids for {} moves",
            doc.name,
            item_ids.len(),
            doc.held_items.len(),
            move_ids.len(),
            doc.moves.len()
        )));
    }

    let item_version_details = doc
        .held_items
        .iter()
        .zip(item_ids)
        .flat_map(|(held, &item_id)| {
            held.version_details.iter().map(move |d| ItemVersionDetailRow {
                item_id,
                version: d.version.clone(),
                rarity: d.rarity,
            })
        })
        .collect();

    let move_version_details = doc
        .moves
        .iter()
        .zip(move_ids)
        .flat_map(|(mv, &move_id)| {
            mv.version_group_details
                .iter()
                .map(move |d| MoveVersionDetailRow {
                    move_id,
                    level_learned_at: d.level_learned_at,
                    move_learn_method: d.move_learn_method.clone(),
                    version_group: d.version_group.clone(),
                })
        })
        .collect();

    Ok(Details {
        item_version_details,
        move_version_details,
    })
}

/// Reattach item details to their items, keeping item order.
pub fn group_held_items(
    items: Vec<(i64, HeldItemRow)>,
    details: Vec<ItemVersionDetailRow>,
) -> Vec<HeldItem> {
    let mut by_item: HashMap<i64, Vec<ItemVersionDetailRow>> = HashMap::new();
    for detail in details {
        by_item.entry(detail.item_id).or_default().push(detail);
    }

    items
        .into_iter()
        .map(|(id, row)| HeldItem {
            id,
            item: row.item,
            version_details: by_item.remove(&id).unwrap_or_default(),
        })
        .collect()
}

/// Reattach move details to their moves, keeping move order.
pub fn group_moves(moves: Vec<(i64, MoveRow)>, details: Vec<MoveVersionDetailRow>) -> Vec<Move> {
    let mut by_move: HashMap<i64, Vec<MoveVersionDetailRow>> = HashMap::new();
    for detail in details {
        by_move.entry(detail.move_id).or_default().push(detail);
    }

    moves
        .into_iter()
        .map(|(id, row)| Move {
            id,
            move_: row.move_,
            version_group_details: by_move.remove(&id).unwrap_or_default(),
        })
        .collect()
}

/// Rebuild a record from the rows of all three phases without going through a store.
#[cfg(test)]
pub fn assemble(
    pokemon: PokemonRow,
    relations: Relations,
    details: Details,
    item_ids: &[i64],
    move_ids: &[i64],
) -> PokemonRecord {
    let held_items = group_held_items(
        item_ids.iter().copied().zip(relations.held_items).collect(),
        details.item_version_details,
    );
    let moves = group_moves(
        move_ids.iter().copied().zip(relations.moves).collect(),
        details.move_version_details,
    );

    PokemonRecord {
        pokemon,
        abilities: relations.abilities,
        game_indices: relations.game_indices,
        held_items,
        moves,
        sprites: relations.sprites,
        stats: relations.stats,
        types: relations.types,
    }
}
