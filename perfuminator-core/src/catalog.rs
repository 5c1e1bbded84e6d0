//! Scent catalog: note profiles, preset palettes, and the JSON loader.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Attribute intensities of a single scent note.
///
/// The attribute set is fixed; a note's JSON may omit any attribute and it
/// contributes zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ScentProfile {
    #[serde(default)]
    pub fruity: u32,
    #[serde(default)]
    pub sweet: u32,
    #[serde(default)]
    pub citrus: u32,
    #[serde(default)]
    pub woody: u32,
}

impl ScentProfile {
    /// Attribute names in display order.
    pub const ATTRIBUTES: [&'static str; 4] = ["fruity", "sweet", "citrus", "woody"];

    /// Attribute name/value pairs in display order.
    #[must_use]
    pub const fn entries(&self) -> [(&'static str, u32); 4] {
        [
            ("fruity", self.fruity),
            ("sweet", self.sweet),
            ("citrus", self.citrus),
            ("woody", self.woody),
        ]
    }

    /// Component-wise sum, saturating on overflow.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self {
            fruity: self.fruity.saturating_add(other.fruity),
            sweet: self.sweet.saturating_add(other.sweet),
            citrus: self.citrus.saturating_add(other.citrus),
            woody: self.woody.saturating_add(other.woody),
        }
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.fruity == 0 && self.sweet == 0 && self.citrus == 0 && self.woody == 0
    }
}

/// Errors raised while loading or validating catalog data.
///
/// All of these are fatal to the application: without a usable catalog there
/// is nothing to pick from.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog root must be a JSON object")]
    RootNotObject,
    #[error("catalog is missing required '{section}' key")]
    MissingSection { section: &'static str },
    #[error("catalog contains no scent notes")]
    EmptyCatalog,
    #[error("palette '{palette}' references unknown scent note '{note}'")]
    UnknownPaletteNote { palette: String, note: String },
}

/// Immutable scent data: every known note plus the preset palettes.
///
/// `BTreeMap` keeps iteration order deterministic for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Catalog {
    pub scent_notes: BTreeMap<String, ScentProfile>,
    pub palettes: BTreeMap<String, Vec<String>>,
}

impl Catalog {
    /// Load and validate a catalog from a JSON string.
    ///
    /// The top level must be an object carrying both `scent_notes` and
    /// `palettes`, and every note a palette references must exist.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] describing the first problem found.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let object = value.as_object().ok_or(CatalogError::RootNotObject)?;
        for section in ["scent_notes", "palettes"] {
            if !object.contains_key(section) {
                return Err(CatalogError::MissingSection { section });
            }
        }
        let catalog: Self = serde_json::from_value(value)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.scent_notes.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        for (palette, notes) in &self.palettes {
            for note in notes {
                if !self.scent_notes.contains_key(note) {
                    return Err(CatalogError::UnknownPaletteNote {
                        palette: palette.clone(),
                        note: note.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Look up a note's profile by name.
    #[must_use]
    pub fn note(&self, name: &str) -> Option<&ScentProfile> {
        self.scent_notes.get(name)
    }

    /// All note names in catalog order. This is also the free-reign palette.
    #[must_use]
    pub fn note_names(&self) -> Vec<&str> {
        self.scent_notes.keys().map(String::as_str).collect()
    }

    /// Preset palette names in catalog order.
    #[must_use]
    pub fn palette_names(&self) -> Vec<&str> {
        self.palettes.keys().map(String::as_str).collect()
    }

    /// The ordered note list of a preset palette, if it exists.
    #[must_use]
    pub fn palette(&self, name: &str) -> Option<&[String]> {
        self.palettes.get(name).map(Vec::as_slice)
    }
}
