// PokeAPI v2 detail payload, reduced to the fields the card needs
// https://pokeapi.co/docs/v2#pokemon
//
// Every field is required: a missing key or a `null` fails deserialization,
// which the mapper reports as a shape mismatch.

use serde::{Deserialize, Serialize};

pub type PokemonId = u32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: PokemonId,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub types: Vec<PokemonTypeSlot>,
    pub sprites: Sprites,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonTypeSlot {
    #[serde(rename = "type")]
    pub type_: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedApiResource {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprites {
    pub other: OtherSprites,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork")]
    pub official_artwork: OfficialArtwork,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfficialArtwork {
    pub front_default: String,
}
