//! Equipment catalog: name lookup over loaded definitions.

use arena_core::{Armor, Weapon};

/// Lookup failure for a name that is not in the catalog.
///
/// Distinct from an intentionally empty equip slot: a caller asking for a
/// definition that does not exist always gets an error, never a silent
/// no-equip.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown weapon: {0}")]
    UnknownWeapon(String),
    #[error("unknown armor: {0}")]
    UnknownArmor(String),
}

/// In-memory catalog of every weapon and armor definition.
#[derive(Clone, Debug, Default)]
pub struct EquipmentCatalog {
    weapons: Vec<Weapon>,
    armors: Vec<Armor>,
}

impl EquipmentCatalog {
    pub fn new(weapons: Vec<Weapon>, armors: Vec<Armor>) -> Self {
        Self { weapons, armors }
    }

    /// Look up a weapon definition by display name.
    pub fn weapon(&self, name: &str) -> Result<&Weapon, CatalogError> {
        self.weapons
            .iter()
            .find(|weapon| weapon.name == name)
            .ok_or_else(|| CatalogError::UnknownWeapon(name.to_owned()))
    }

    /// Look up an armor definition by display name.
    pub fn armor(&self, name: &str) -> Result<&Armor, CatalogError> {
        self.armors
            .iter()
            .find(|armor| armor.name == name)
            .ok_or_else(|| CatalogError::UnknownArmor(name.to_owned()))
    }

    /// Names of all weapons, in catalog order. Consumed by selection UIs.
    pub fn weapon_names(&self) -> Vec<&str> {
        self.weapons.iter().map(|weapon| weapon.name.as_str()).collect()
    }

    /// Names of all armors, in catalog order. Consumed by selection UIs.
    pub fn armor_names(&self) -> Vec<&str> {
        self.armors.iter().map(|armor| armor.name.as_str()).collect()
    }

    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    pub fn armors(&self) -> &[Armor] {
        &self.armors
    }
}
