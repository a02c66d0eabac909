/// Test data factories using builder pattern
///
/// Payloads are built as raw JSON, the same shape the catalog sends.
use serde_json::{json, Value};

pub const PIKACHU_JSON: &str = include_str!("../fixtures/pikachu.json");
pub const LISTING_OFFSET_20_JSON: &str = include_str!("../fixtures/pokemon_offset_20_limit_20.json");

pub const PIKACHU_ARTWORK: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/25.png";

pub struct PokemonPayloadFactory {
    id: u32,
    name: String,
    height: u32,
    weight: u32,
    types: Vec<String>,
    artwork: Option<String>,
    omitted: Vec<&'static str>,
}

impl Default for PokemonPayloadFactory {
    fn default() -> Self {
        Self {
            id: 1,
            name: "bulbasaur".to_string(),
            height: 7,
            weight: 69,
            types: vec!["grass".to_string(), "poison".to_string()],
            artwork: Some(
                "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/1.png"
                    .to_string(),
            ),
            omitted: Vec::new(),
        }
    }
}

impl PokemonPayloadFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn types(mut self, types: &[&str]) -> Self {
        self.types = types.iter().map(|t| t.to_string()).collect();
        self
    }

    /// `None` writes an explicit `null` at the artwork path
    pub fn artwork(mut self, artwork: Option<&str>) -> Self {
        self.artwork = artwork.map(str::to_string);
        self
    }

    /// Drop a top-level key from the built payload
    pub fn without(mut self, field: &'static str) -> Self {
        self.omitted.push(field);
        self
    }

    pub fn build(self) -> Value {
        let types: Vec<Value> = self
            .types
            .iter()
            .enumerate()
            .map(|(i, name)| {
                json!({
                    "slot": i + 1,
                    "type": {"name": name, "url": format!("https://pokeapi.co/api/v2/type/{}/", name)}
                })
            })
            .collect();

        let mut payload = json!({
            "id": self.id,
            "name": self.name,
            "height": self.height,
            "weight": self.weight,
            "types": types,
            "sprites": {
                "front_default": null,
                "other": {
                    "official-artwork": {"front_default": self.artwork}
                }
            }
        });

        if let Some(object) = payload.as_object_mut() {
            for field in &self.omitted {
                object.remove(*field);
            }
        }
        payload
    }
}
