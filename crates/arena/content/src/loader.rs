//! Equipment catalog loader.
//!
//! The catalog is the only data the engine needs at startup; a file it
//! cannot read or that fails validation is fatal, never served partially.

use std::path::Path;

use arena_core::{Armor, Weapon};
use serde::{Deserialize, Serialize};

use crate::catalog::EquipmentCatalog;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Equipment file structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentFile {
    pub weapons: Vec<Weapon>,
    pub armors: Vec<Armor>,
}

/// Loader for the equipment catalog from RON files.
pub struct EquipmentLoader;

impl EquipmentLoader {
    /// Load the equipment catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing an EquipmentFile
    ///
    /// # Returns
    ///
    /// Returns a validated EquipmentCatalog, or an error if the file is
    /// unreadable, malformed or fails validation.
    pub fn load(path: &Path) -> LoadResult<EquipmentCatalog> {
        let content = read_file(path)?;
        let file: EquipmentFile = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse equipment RON: {}", e))?;

        Self::validate(&file)?;
        Ok(EquipmentCatalog::new(file.weapons, file.armors))
    }

    /// Reject files the catalog could not serve correctly.
    fn validate(file: &EquipmentFile) -> LoadResult<()> {
        if file.weapons.is_empty() {
            anyhow::bail!("equipment file defines no weapons");
        }
        for weapon in &file.weapons {
            if weapon.min_damage > weapon.max_damage {
                anyhow::bail!(
                    "weapon {:?} has min_damage {} above max_damage {}",
                    weapon.name,
                    weapon.min_damage,
                    weapon.max_damage
                );
            }
        }
        Ok(())
    }
}

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
