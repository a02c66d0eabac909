use serde::{Deserialize, Serialize};
use std::fmt;

/// Display-ready summary of a single catalog creature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRecord {
    pub id: u32,

    pub name: String,

    /// Height in decimetres, as reported by the catalog
    pub height: u32,

    /// Weight in hectograms, as reported by the catalog
    pub weight: u32,

    /// Type names in source order, duplicates preserved
    pub types: Vec<String>,

    /// Official artwork URL
    pub image: String,
}

impl DisplayRecord {
    pub fn height_in_metres(&self) -> f64 {
        self.height as f64 / 10.0
    }

    pub fn weight_in_kilograms(&self) -> f64 {
        self.weight as f64 / 10.0
    }

    /// Name with its first letter uppercased, for card titles
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for DisplayRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#{:03} {}", self.id, self.display_name())?;
        writeln!(f, "Height: {:.1} m", self.height_in_metres())?;
        writeln!(f, "Weight: {:.1} kg", self.weight_in_kilograms())?;
        writeln!(f, "Types: {}", self.types.join(" / "))?;
        write!(f, "Image: {}", self.image)
    }
}
