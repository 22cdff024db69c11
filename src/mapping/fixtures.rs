//! Test documents shaped like the external source.

use serde_json::{json, Value};

use crate::models::PokemonDocument;

/// A trimmed but structurally complete charmander document.
pub fn charmander() -> Value {
    json!({
        "id": 4,
        "name": "charmander",
        "base_experience": 62,
        "height": 6,
        "weight": 85,
        "order": 5,
        "is_default": true,
        "location_area_encounters": "https://pokeapi.co/api/v2/pokemon/4/encounters",
        "forms": [{ "name": "charmander", "url": "https://pokeapi.co/api/v2/pokemon-form/4/" }],
        "species": { "name": "charmander", "url": "https://pokeapi.co/api/v2/pokemon-species/4/" },
        "abilities": [
            {
                "ability": { "name": "blaze", "url": "https://pokeapi.co/api/v2/ability/66/" },
                "is_hidden": false,
                "slot": 1
            },
            {
                "ability": { "name": "solar-power", "url": "https://pokeapi.co/api/v2/ability/94/" },
                "is_hidden": true,
                "slot": 3
            }
        ],
        "game_indices": [
            { "game_index": 176, "version": { "name": "red", "url": "https://pokeapi.co/api/v2/version/1/" } },
            { "game_index": 4, "version": { "name": "white", "url": "https://pokeapi.co/api/v2/version/18/" } }
        ],
        "held_items": [
            {
                "item": { "name": "charcoal", "url": "https://pokeapi.co/api/v2/item/249/" },
                "version_details": [
                    { "rarity": 5, "version": { "name": "x", "url": "https://pokeapi.co/api/v2/version/23/" } },
                    { "rarity": 50, "version": { "name": "y", "url": "https://pokeapi.co/api/v2/version/24/" } }
                ]
            }
        ],
        "moves": [
            {
                "move": { "name": "scratch", "url": "https://pokeapi.co/api/v2/move/10/" },
                "version_group_details": [
                    {
                        "level_learned_at": 1,
                        "move_learn_method": { "name": "level-up", "url": "https://pokeapi.co/api/v2/move-learn-method/1/" },
                        "version_group": { "name": "red-blue", "url": "https://pokeapi.co/api/v2/version-group/1/" }
                    },
                    {
                        "level_learned_at": 1,
                        "move_learn_method": { "name": "level-up", "url": "https://pokeapi.co/api/v2/move-learn-method/1/" },
                        "version_group": { "name": "yellow", "url": "https://pokeapi.co/api/v2/version-group/2/" }
                    }
                ]
            },
            {
                "move": { "name": "ember", "url": "https://pokeapi.co/api/v2/move/52/" },
                "version_group_details": [
                    {
                        "level_learned_at": 9,
                        "move_learn_method": { "name": "level-up", "url": "https://pokeapi.co/api/v2/move-learn-method/1/" },
                        "version_group": { "name": "x-y", "url": "https://pokeapi.co/api/v2/version-group/15/" }
                    }
                ]
            }
        ],
        "sprites": {
            "front_default": "https://img.example/4/front.png",
            "front_female": null,
            "front_shiny": "https://img.example/4/front-shiny.png",
            "front_shiny_female": null,
            "back_default": "https://img.example/4/back.png",
            "back_female": null,
            "back_shiny": "https://img.example/4/back-shiny.png",
            "back_shiny_female": null,
            "other": {
                "official-artwork": {
                    "front_default": "https://img.example/4/artwork.png",
                    "front_shiny": "https://img.example/4/artwork-shiny.png"
                }
            },
            "versions": {
                "generation-i": {
                    "red-blue": {
                        "front_default": "https://img.example/4/rb.png",
                        "back_default": "https://img.example/4/rb-back.png",
                        "front_gray": "https://img.example/4/rb-gray.png"
                    }
                },
                "generation-v": {
                    "black-white": {
                        "front_default": "https://img.example/4/bw.png",
                        "animated": {
                            "front_default": "https://img.example/4/bw-animated.gif",
                            "back_default": "https://img.example/4/bw-animated-back.gif"
                        }
                    }
                },
                "generation-vii": {
                    "icons": { "front_default": "https://img.example/4/icon.png", "front_female": null }
                }
            }
        },
        "stats": [
            { "base_stat": 39, "effort": 0, "stat": { "name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/" } },
            { "base_stat": 52, "effort": 0, "stat": { "name": "attack", "url": "https://pokeapi.co/api/v2/stat/2/" } },
            { "base_stat": 65, "effort": 1, "stat": { "name": "speed", "url": "https://pokeapi.co/api/v2/stat/6/" } }
        ],
        "types": [
            { "slot": 1, "type": { "name": "fire", "url": "https://pokeapi.co/api/v2/type/10/" } }
        ],
        "past_types": []
    })
}

/// A minimal document with the given name and `(slot, type)` pairs.
pub fn minimal(name: &str, types: &[(i64, &str)]) -> Value {
    let types: Vec<Value> = types
        .iter()
        .map(|(slot, kind)| {
            json!({
                "slot": slot,
                "type": { "name": kind, "url": format!("https://pokeapi.co/api/v2/type/{}/", kind) }
            })
        })
        .collect();

    json!({
        "name": name,
        "base_experience": 50,
        "height": 5,
        "weight": 50,
        "order": 1,
        "is_default": true,
        "location_area_encounters": "",
        "forms": [{ "name": name, "url": format!("https://pokeapi.co/api/v2/pokemon-form/{}/", name) }],
        "species": { "name": name, "url": format!("https://pokeapi.co/api/v2/pokemon-species/{}/", name) },
        "abilities": [],
        "game_indices": [],
        "held_items": [],
        "moves": [],
        "sprites": {
            "front_default": format!("https://img.example/{}.png", name),
            "other": {},
            "versions": {}
        },
        "stats": [],
        "types": types
    })
}

pub fn charmander_document() -> PokemonDocument {
    serde_json::from_value(charmander()).expect("fixture is a valid document")
}

pub fn minimal_document(name: &str, types: &[(i64, &str)]) -> PokemonDocument {
    serde_json::from_value(minimal(name, types)).expect("fixture is a valid document")
}
