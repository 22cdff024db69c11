//! Read-side projection of reassembled records into the public response shapes.

use crate::errors::AppError;
use crate::models::{
    AbilityDto, FrontSprite, MoveDetailDto, MoveDto, PokemonDetails, PokemonRecord,
    PokemonSummary, SpriteRow, StatDto, TypeDto, TypeName, TypeRow,
};

use super::sprites::find_base_sprite;

/// Locate the base sprite. A record without one was built incorrectly.
pub fn base_sprite(record: &PokemonRecord) -> Result<&SpriteRow, AppError> {
    find_base_sprite(&record.sprites).ok_or_else(|| {
        tracing::error!(
            "Pokemon {} has {} sprite rows and no base sprite",
            record.pokemon.id,
            record.sprites.len()
        );
        AppError::Invariant(format!("Pokemon {} has no base sprite", record.pokemon.id))
    })
}

pub fn to_summary(record: &PokemonRecord) -> Result<PokemonSummary, AppError> {
    let sprite = base_sprite(record)?;

    Ok(PokemonSummary {
        id: record.pokemon.id,
        name: record.pokemon.form.name.clone(),
        sprites: FrontSprite {
            front_default: sprite.sprites.front_default.clone(),
        },
        types: types(&record.types),
    })
}

pub fn to_details(record: &PokemonRecord) -> Result<PokemonDetails, AppError> {
    let sprite = base_sprite(record)?;
    let pokemon = &record.pokemon;

    Ok(PokemonDetails {
        id: pokemon.id,
        name: pokemon.form.name.clone(),
        sprites: sprite.sprites.clone(),
        types: types(&record.types),
        height: pokemon.height,
        weight: pokemon.weight,
        moves: record
            .moves
            .iter()
            .map(|m| MoveDto {
                move_: m.move_.name.clone(),
                version_group_details: m
                    .version_group_details
                    .iter()
                    .map(|d| MoveDetailDto {
                        level_learned_at: d.level_learned_at,
                        version_group: d.version_group.name.clone(),
                        move_learn_method: d.move_learn_method.name.clone(),
                    })
                    .collect(),
            })
            .collect(),
        order: pokemon.order,
        species: pokemon.species.name.clone(),
        stats: record
            .stats
            .iter()
            .map(|s| StatDto {
                base_stat: s.base_stat,
                stat: s.stat.name.clone(),
                effort: s.effort,
            })
            .collect(),
        abilities: record
            .abilities
            .iter()
            .map(|a| AbilityDto {
                ability: a.ability.name.clone(),
                is_hidden: a.is_hidden,
                slot: a.slot,
            })
            .collect(),
        form: pokemon.form.name.clone(),
    })
}

/// Slots pass through untouched and rows keep their stored order.
fn types(rows: &[TypeRow]) -> Vec<TypeDto> {
    rows.iter()
        .map(|t| TypeDto {
            slot: t.slot,
            kind: TypeName {
                name: t.kind.name.clone(),
            },
        })
        .collect()
}
