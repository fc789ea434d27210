//! Combatant assembly from catalog definitions.

use anyhow::{Context, Result};
use arena_content::EquipmentCatalog;
use arena_core::{ClassTemplate, Unit};

use crate::config::HeroSpec;

/// Build a fully-equipped unit from a hero selection.
///
/// Unknown class, weapon or armor names are reported as errors; an absent
/// armor selection means the unit deliberately fights unarmored.
pub fn build_unit(catalog: &EquipmentCatalog, spec: &HeroSpec) -> Result<Unit> {
    let class = ClassTemplate::by_name(&spec.class)
        .with_context(|| format!("unknown class: {}", spec.class))?;
    let mut unit = Unit::new(spec.name.clone(), class);

    let weapon = catalog
        .weapon(&spec.weapon)
        .with_context(|| format!("equipping {}", spec.name))?;
    unit.equip_weapon(weapon.clone());

    if let Some(armor_name) = &spec.armor {
        let armor = catalog
            .armor(armor_name)
            .with_context(|| format!("equipping {}", spec.name))?;
        unit.equip_armor(armor.clone());
    }

    Ok(unit)
}
