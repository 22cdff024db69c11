//! Sprite bundle flattening.
//!
//! A bundle becomes an ordered list of rows: the base row first, then every version
//! variant (followed by its animated copy when present), then the `other` artwork.

use crate::config::SpriteTitlePolicy;
use crate::models::{SpriteBundle, SpriteMap, SpriteRow};

/// Version titles known to belong to a game generation.
pub const GENERATION_TITLES: [&str; 15] = [
    // generation i
    "red-blue",
    "yellow",
    // generation ii
    "crystal",
    "gold",
    "silver",
    // generation iii
    "emerald",
    "firered-leafgreen",
    "ruby-sapphire",
    // generation iv
    "diamond-pearl",
    "heartgold-soulsilver",
    "platinum",
    // generation v
    "black-white",
    // generation vi
    "omegaruby-alphasapphire",
    "x-y",
    // generation vii
    "ultra-sun-ultra-moon",
];

const ICONS_TITLE: &str = "icons";

pub fn is_generation_title(title: &str) -> bool {
    GENERATION_TITLES.contains(&title)
}

/// Flatten a nested sprite bundle into rows owned by `pokemon_id`.
pub fn flatten_sprites(
    bundle: &SpriteBundle,
    pokemon_id: i64,
    policy: SpriteTitlePolicy,
) -> Vec<SpriteRow> {
    let mut rows = vec![row(pokemon_id, &bundle.base, None)];

    for (generation, variants) in &bundle.versions {
        for (title, variant) in variants {
            let stored_title = match policy {
                SpriteTitlePolicy::Keep => Some(title.clone()),
                SpriteTitlePolicy::Recognized if is_generation_title(title) => Some(title.clone()),
                SpriteTitlePolicy::Recognized => {
                    tracing::debug!("Dropping unrecognized sprite title {}/{}", generation, title);
                    None
                }
            };
            let is_icons = title == ICONS_TITLE;

            rows.push(SpriteRow {
                is_icons,
                ..row(pokemon_id, &variant.sprites, stored_title.clone())
            });

            if let Some(animated) = &variant.animated {
                rows.push(SpriteRow {
                    is_animated: true,
                    is_icons,
                    ..row(pokemon_id, animated, stored_title)
                });
            }
        }
    }

    for (title, sprites) in &bundle.other {
        rows.push(SpriteRow {
            is_other: true,
            ..row(pokemon_id, sprites, Some(title.clone()))
        });
    }

    let base_rows = rows.iter().filter(|r| r.is_base()).count();
    if base_rows != 1 {
        tracing::warn!(
            "Pokemon {} flattened into {} base sprite candidates",
            pokemon_id,
            base_rows
        );
    }

    rows
}

/// The first row matching the base predicate. Flattening always emits it first.
pub fn find_base_sprite(rows: &[SpriteRow]) -> Option<&SpriteRow> {
    rows.iter().find(|r| r.is_base())
}

fn row(pokemon_id: i64, sprites: &SpriteMap, title: Option<String>) -> SpriteRow {
    SpriteRow {
        pokemon_id,
        sprites: sprites.clone(),
        title,
        is_other: false,
        is_animated: false,
        is_icons: false,
    }
}
