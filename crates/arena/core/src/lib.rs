//! Arena combat resolution engine.
//!
//! `arena-core` defines the entity model (units, class templates, weapons,
//! armor, skills) and the turn orchestrator that resolves a two-party duel
//! to a terminal outcome. All nondeterminism flows through the
//! [`rng::DamageRoll`] trait so matches can be replayed and tested with
//! pinned rolls, and multi-match serving goes through the id-keyed
//! [`registry::MatchRegistry`].
pub mod arena;
pub mod class;
pub mod equipment;
pub mod registry;
pub mod rng;
pub mod skill;
pub mod unit;

pub use arena::{Arena, BattleOutcome, MatchPhase, STAMINA_PER_TURN};
pub use class::ClassTemplate;
pub use equipment::{Armor, Weapon};
pub use registry::{MatchId, MatchRegistry, RegistryError};
pub use rng::{DamageRoll, FixedRoll, SeededRoll};
pub use skill::Skill;
pub use unit::{UNARMED_DAMAGE, Unit};
