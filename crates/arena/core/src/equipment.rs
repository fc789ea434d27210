//! Weapon and armor definitions.
//!
//! Definitions are plain data supplied by the equipment catalog; the only
//! behavior here is the per-swing damage roll.

use crate::rng::DamageRoll;

/// Round to one decimal place, the precision used for all damage values.
pub(crate) fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Equippable weapon definition.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    pub id: u32,
    pub name: String,
    pub min_damage: f64,
    pub max_damage: f64,
    pub stamina_per_hit: f64,
}

impl Weapon {
    /// Sample this weapon's damage for a single swing.
    ///
    /// Draws a fresh uniform sample from `[min_damage, max_damage]` on every
    /// call and rounds it to one decimal. Nothing is cached; two swings with
    /// the same weapon are independent samples.
    pub fn roll_damage(&self, roller: &mut dyn DamageRoll) -> f64 {
        round_tenth(roller.roll(self.min_damage, self.max_damage))
    }
}

/// Equippable armor definition.
///
/// `stamina_per_turn` is the upkeep the wearer pays each time the armor
/// absorbs a blow; a wearer too exhausted to pay gets no mitigation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Armor {
    pub id: u32,
    pub name: String,
    pub defence: f64,
    pub stamina_per_turn: f64,
}
