//! Per-role combat constants.

use crate::skill::Skill;

/// Combat constants shared by every unit of a given role: resource caps,
/// attack/defence modifiers and the role's single active skill.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassTemplate {
    pub name: &'static str,
    pub max_health: f64,
    pub max_stamina: f64,
    /// Multiplier applied to weapon damage dealt by this class.
    pub attack_mod: f64,
    /// Multiplier applied to armor defence worn by this class.
    pub defence_mod: f64,
    /// The single active skill available to this class.
    pub skill: Skill,
}

impl ClassTemplate {
    /// Durable bruiser: weak swings, heavy armor use.
    pub const WARRIOR: Self = Self {
        name: "Warrior",
        max_health: 60.0,
        max_stamina: 30.0,
        attack_mod: 0.8,
        defence_mod: 1.2,
        skill: Skill::FURY_PUNCH,
    };

    /// Fragile striker: hits hard, armor barely helps.
    pub const THIEF: Self = Self {
        name: "Thief",
        max_health: 50.0,
        max_stamina: 25.0,
        attack_mod: 1.5,
        defence_mod: 1.0,
        skill: Skill::HARD_SHOT,
    };

    /// Look up a built-in class by name, case-insensitively.
    pub fn by_name(name: &str) -> Option<Self> {
        [Self::WARRIOR, Self::THIEF]
            .into_iter()
            .find(|class| class.name.eq_ignore_ascii_case(name))
    }
}
