pub mod pokeapi;

pub use pokeapi::PokeApiAdapter;
