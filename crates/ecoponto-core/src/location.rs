//! Domain types for electronic-waste disposal points.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair. Both components are finite in every value this
/// workspace constructs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Identifier for a disposal location.
///
/// Seed data uses small integer ids; records resolved through the places
/// provider carry opaque provider-assigned strings. Untagged serde lets the
/// id round-trip as either a JSON number or a JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocationId {
    Seed(u32),
    Place(String),
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationId::Seed(n) => write!(f, "{n}"),
            LocationId::Place(s) => write!(f, "{s}"),
        }
    }
}

/// One tag from the closed set of waste categories.
///
/// Serde renames carry the exact Portuguese labels used by the seed dataset,
/// so serialized values match the labels shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WasteCategory {
    #[serde(rename = "Pilhas e Baterias")]
    Batteries,
    #[serde(rename = "Pequenos Eletrônicos")]
    SmallElectronics,
    #[serde(rename = "Computadores e Periféricos")]
    Computers,
    #[serde(rename = "Eletrodomésticos Grandes")]
    LargeAppliances,
    #[serde(rename = "Cabos e Acessórios")]
    CablesAccessories,
    #[serde(rename = "Celulares e Tablets")]
    PhonesTablets,
}

impl WasteCategory {
    /// The closed enumeration, in dataset order. No dynamic extension.
    pub const ALL: [WasteCategory; 6] = [
        WasteCategory::Batteries,
        WasteCategory::SmallElectronics,
        WasteCategory::Computers,
        WasteCategory::LargeAppliances,
        WasteCategory::CablesAccessories,
        WasteCategory::PhonesTablets,
    ];

    /// Human-readable label as shown to users.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            WasteCategory::Batteries => "Pilhas e Baterias",
            WasteCategory::SmallElectronics => "Pequenos Eletrônicos",
            WasteCategory::Computers => "Computadores e Periféricos",
            WasteCategory::LargeAppliances => "Eletrodomésticos Grandes",
            WasteCategory::CablesAccessories => "Cabos e Acessórios",
            WasteCategory::PhonesTablets => "Celulares e Tablets",
        }
    }

    /// Short ASCII slug accepted on the command line.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            WasteCategory::Batteries => "pilhas",
            WasteCategory::SmallElectronics => "eletronicos",
            WasteCategory::Computers => "computadores",
            WasteCategory::LargeAppliances => "eletrodomesticos",
            WasteCategory::CablesAccessories => "cabos",
            WasteCategory::PhonesTablets => "celulares",
        }
    }
}

impl fmt::Display for WasteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error parsing a [`WasteCategory`] from user input.
#[derive(Debug, thiserror::Error)]
#[error("unknown waste category \"{0}\"")]
pub struct ParseCategoryError(String);

impl FromStr for WasteCategory {
    type Err = ParseCategoryError;

    /// Accepts the CLI slug or the full Portuguese label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        WasteCategory::ALL
            .into_iter()
            .find(|c| c.slug() == needle || c.label().to_lowercase() == needle)
            .ok_or_else(|| ParseCategoryError(s.to_owned()))
    }
}

/// A physical point accepting electronic waste for recycling or disposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub address: String,
    pub coordinates: Coordinates,
    /// Free-text schedule. A placeholder when sourced from the places
    /// provider, which has no opening-hours concept in our field mask.
    pub opening_hours: String,
    pub phone: Option<String>,
    /// Ordered material labels. Duplicates are tolerated, never deduplicated.
    pub accepted_materials: Vec<String>,
    pub categories: Vec<WasteCategory>,
    pub description: String,
}
