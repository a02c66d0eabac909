use serde_json::Value;

use super::models::Pokemon;
use crate::modules::catalog::domain::entities::DisplayRecord;
use crate::shared::errors::AppResult;

/// Maps raw PokeAPI detail payloads to `DisplayRecord`
#[derive(Debug, Clone, Default)]
pub struct PokeApiMapper;

impl PokeApiMapper {
    pub fn new() -> Self {
        Self
    }

    /// Normalize a decoded detail payload.
    ///
    /// Either every required path is present and well-typed and a full record
    /// comes back, or the result is `ShapeMismatch`. Fields outside
    /// the required set are ignored.
    pub fn normalize(&self, raw: Value) -> AppResult<DisplayRecord> {
        let pokemon: Pokemon = serde_json::from_value(raw)?;

        Ok(self.map_to_display_record(pokemon))
    }

    pub fn map_to_display_record(&self, pokemon: Pokemon) -> DisplayRecord {
        DisplayRecord {
            id: pokemon.id,
            name: pokemon.name,
            height: pokemon.height,
            weight: pokemon.weight,
            types: pokemon
                .types
                .into_iter()
                .map(|slot| slot.type_.name)
                .collect(),
            image: pokemon.sprites.other.official_artwork.front_default,
        }
    }
}

/// Free-function form of [`PokeApiMapper::normalize`]
pub fn normalize(raw: Value) -> AppResult<DisplayRecord> {
    PokeApiMapper::new().normalize(raw)
}
