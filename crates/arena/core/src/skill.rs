//! Active skills.
//!
//! Every skill behaves the same way — spend stamina, deal flat damage — and
//! the variants differ only in their three numbers, so a skill is one
//! parameterized record rather than a trait hierarchy.

use crate::unit::Unit;

/// A named active action with a stamina cost and flat damage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    pub cost: f64,
    pub damage: f64,
}

impl Skill {
    pub const FURY_PUNCH: Self = Self {
        name: "Fury Punch",
        cost: 6.0,
        damage: 12.0,
    };

    pub const HARD_SHOT: Self = Self {
        name: "Hard Shot",
        cost: 5.0,
        damage: 15.0,
    };

    /// Whether `user` can pay for this skill.
    ///
    /// Strictly greater: a unit holding exactly `cost` stamina cannot use
    /// the skill.
    fn stamina_sufficient(&self, user: &Unit) -> bool {
        user.stamina > self.cost
    }

    /// Resolve this skill from `user` against `target`.
    ///
    /// On success the user pays the stamina cost and the target loses
    /// exactly `damage` hit points. With insufficient stamina nothing is
    /// mutated and a failure description is returned instead.
    pub fn use_on(&self, user: &mut Unit, target: &mut Unit) -> String {
        if !self.stamina_sufficient(user) {
            return format!(
                "{} tried to use {} but ran out of stamina.",
                user.name, self.name
            );
        }

        user.spend_stamina(self.cost);
        target.hp -= self.damage;

        format!(
            "{} uses {} and deals {} damage to the opponent.",
            user.name, self.name, self.damage
        )
    }
}
