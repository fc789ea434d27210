//! Combatant state and basic actions.

use crate::class::ClassTemplate;
use crate::equipment::{Armor, Weapon, round_tenth};
use crate::rng::DamageRoll;

/// Base damage of a bare-fisted basic attack.
///
/// An unarmed attacker lands a minimum-power strike instead of erroring,
/// so the duel can always make progress.
pub const UNARMED_DAMAGE: f64 = 1.0;

/// A combatant: hit points, stamina, class constants and optional gear.
///
/// Hit points are deliberately unclamped below zero — outcome
/// classification distinguishes a unit at exactly zero from one driven
/// negative. Stamina is clamped to `[0, class.max_stamina]` at every
/// mutation.
#[derive(Clone, Debug, PartialEq)]
pub struct Unit {
    pub name: String,
    pub hp: f64,
    pub stamina: f64,
    pub class: ClassTemplate,
    pub weapon: Option<Weapon>,
    pub armor: Option<Armor>,
}

impl Unit {
    /// Create a unit at full health and stamina, with no gear.
    pub fn new(name: impl Into<String>, class: ClassTemplate) -> Self {
        Self {
            name: name.into(),
            hp: class.max_health,
            stamina: class.max_stamina,
            class,
            weapon: None,
            armor: None,
        }
    }

    pub fn equip_weapon(&mut self, weapon: Weapon) {
        self.weapon = Some(weapon);
    }

    pub fn equip_armor(&mut self, armor: Armor) {
        self.armor = Some(armor);
    }

    /// True while this unit still stands.
    pub fn is_alive(&self) -> bool {
        self.hp > 0.0
    }

    /// Spend stamina, floored at zero.
    pub(crate) fn spend_stamina(&mut self, amount: f64) {
        self.stamina = (self.stamina - amount).max(0.0);
    }

    /// Regain stamina, capped at the class maximum.
    pub fn regenerate_stamina(&mut self, amount: f64) {
        self.stamina = (self.stamina + amount).min(self.class.max_stamina);
    }

    /// Perform a basic attack against `target`.
    ///
    /// Mitigation is flat subtraction floored at zero: the target's armor
    /// defence, scaled by its class defence modifier, comes off the rolled
    /// damage. Armor only counts when the target can pay its per-turn
    /// stamina upkeep, which is deducted on use. The attacker pays the
    /// weapon's per-hit stamina cost; too little stamina means the swing
    /// never happens.
    pub fn hit(&mut self, target: &mut Unit, roller: &mut dyn DamageRoll) -> String {
        let (raw, stamina_cost) = match &self.weapon {
            Some(weapon) => {
                if self.stamina < weapon.stamina_per_hit {
                    return format!(
                        "{} tried to swing {} but ran out of stamina.",
                        self.name, weapon.name
                    );
                }
                (weapon.roll_damage(roller), weapon.stamina_per_hit)
            }
            None => (UNARMED_DAMAGE, 0.0),
        };

        let raw = round_tenth(raw * self.class.attack_mod);
        let mitigation = target.armor_mitigation();
        let dealt = round_tenth((raw - mitigation).max(0.0));

        target.hp -= dealt;
        self.spend_stamina(stamina_cost);

        let weapon_name = self
            .weapon
            .as_ref()
            .map(|weapon| weapon.name.as_str())
            .unwrap_or("bare fists");

        if dealt > 0.0 {
            format!(
                "{} with {} breaks through {}'s defence and deals {} damage.",
                self.name, weapon_name, target.name, dealt
            )
        } else {
            format!(
                "{} with {} hits {}, but the armor absorbs the blow.",
                self.name, weapon_name, target.name
            )
        }
    }

    /// Use the class skill against `target`.
    pub fn use_skill(&mut self, target: &mut Unit) -> String {
        let skill = self.class.skill;
        skill.use_on(self, target)
    }

    /// Effective armor mitigation for an incoming hit.
    ///
    /// Deducts the armor's stamina upkeep when it absorbs a blow; a wearer
    /// that cannot pay the upkeep gets no mitigation.
    fn armor_mitigation(&mut self) -> f64 {
        let Some(armor) = &self.armor else {
            return 0.0;
        };
        let upkeep = armor.stamina_per_turn;
        if self.stamina < upkeep {
            return 0.0;
        }
        let mitigation = armor.defence * self.class.defence_mod;
        self.spend_stamina(upkeep);
        mitigation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::FixedRoll;
    use crate::skill::Skill;

    fn sword() -> Weapon {
        Weapon {
            id: 1,
            name: "Sword".into(),
            min_damage: 1.0,
            max_damage: 10.0,
            stamina_per_hit: 2.0,
        }
    }

    fn mail() -> Armor {
        Armor {
            id: 1,
            name: "Mail".into(),
            defence: 3.0,
            stamina_per_turn: 1.0,
        }
    }

    /// Neutral class so damage numbers come straight from the roll.
    const DUMMY: ClassTemplate = ClassTemplate {
        name: "Dummy",
        max_health: 20.0,
        max_stamina: 20.0,
        attack_mod: 1.0,
        defence_mod: 1.0,
        skill: Skill::FURY_PUNCH,
    };

    #[test]
    fn regeneration_never_exceeds_class_maximum() {
        let mut unit = Unit::new("Hero", DUMMY);
        unit.stamina = 19.5;
        unit.regenerate_stamina(1.0);
        assert_eq!(unit.stamina, 20.0);
        unit.regenerate_stamina(1.0);
        assert_eq!(unit.stamina, 20.0);
    }

    #[test]
    fn hit_subtracts_damage_and_stamina() {
        let mut attacker = Unit::new("Hero", DUMMY);
        attacker.equip_weapon(sword());
        let mut target = Unit::new("Raider", DUMMY);

        attacker.hit(&mut target, &mut FixedRoll(5.0));

        assert_eq!(target.hp, 15.0);
        assert_eq!(attacker.stamina, 18.0);
    }

    #[test]
    fn armor_mitigates_and_costs_upkeep() {
        let mut attacker = Unit::new("Hero", DUMMY);
        attacker.equip_weapon(sword());
        let mut target = Unit::new("Raider", DUMMY);
        target.equip_armor(mail());

        attacker.hit(&mut target, &mut FixedRoll(5.0));

        // 5.0 rolled - 3.0 defence = 2.0 dealt; upkeep 1.0 deducted.
        assert_eq!(target.hp, 18.0);
        assert_eq!(target.stamina, 19.0);
    }

    #[test]
    fn mitigation_floors_damage_at_zero() {
        let mut attacker = Unit::new("Hero", DUMMY);
        attacker.equip_weapon(sword());
        let mut target = Unit::new("Raider", DUMMY);
        target.equip_armor(Armor {
            defence: 9.0,
            ..mail()
        });

        let result = attacker.hit(&mut target, &mut FixedRoll(2.0));

        assert_eq!(target.hp, 20.0);
        assert!(result.contains("absorbs the blow"));
    }

    #[test]
    fn exhausted_wearer_gets_no_mitigation() {
        let mut attacker = Unit::new("Hero", DUMMY);
        attacker.equip_weapon(sword());
        let mut target = Unit::new("Raider", DUMMY);
        target.equip_armor(mail());
        target.stamina = 0.5;

        attacker.hit(&mut target, &mut FixedRoll(5.0));

        assert_eq!(target.hp, 15.0);
        assert_eq!(target.stamina, 0.5);
    }

    #[test]
    fn insufficient_stamina_cancels_the_swing() {
        let mut attacker = Unit::new("Hero", DUMMY);
        attacker.equip_weapon(sword());
        attacker.stamina = 1.0;
        let mut target = Unit::new("Raider", DUMMY);

        let result = attacker.hit(&mut target, &mut FixedRoll(5.0));

        assert_eq!(target.hp, 20.0);
        assert_eq!(attacker.stamina, 1.0);
        assert!(result.contains("ran out of stamina"));
    }

    #[test]
    fn unarmed_attacker_lands_minimum_strike() {
        let mut attacker = Unit::new("Hero", DUMMY);
        let mut target = Unit::new("Raider", DUMMY);

        let result = attacker.hit(&mut target, &mut FixedRoll(5.0));

        assert_eq!(target.hp, 20.0 - UNARMED_DAMAGE);
        assert_eq!(attacker.stamina, 20.0);
        assert!(result.contains("bare fists"));
    }

    #[test]
    fn attack_modifier_scales_rolled_damage() {
        let mut attacker = Unit::new("Sneak", ClassTemplate::THIEF);
        attacker.equip_weapon(sword());
        let mut target = Unit::new("Raider", DUMMY);

        attacker.hit(&mut target, &mut FixedRoll(4.0));

        // 4.0 x 1.5 thief attack modifier.
        assert_eq!(target.hp, 14.0);
    }

    #[test]
    fn hp_can_go_negative_on_a_lethal_hit() {
        let mut attacker = Unit::new("Hero", DUMMY);
        attacker.equip_weapon(sword());
        let mut target = Unit::new("Raider", DUMMY);
        target.hp = 3.0;

        attacker.hit(&mut target, &mut FixedRoll(8.0));

        assert_eq!(target.hp, -5.0);
        assert!(!target.is_alive());
    }
}
