//! Match orchestration state machine.
//!
//! The [`Arena`] owns the two combatants for one duel and is the only place
//! that mutates them once the match starts. Lifecycle: `Idle` until
//! [`Arena::start_game`], `Running` while both sides have hit points,
//! `Finished` once the termination check classifies an outcome.

use crate::rng::{DamageRoll, SeededRoll};
use crate::unit::Unit;

/// Stamina regained by both sides on every non-terminal turn.
pub const STAMINA_PER_TURN: f64 = 1.0;

/// Terminal classification of a finished match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum BattleOutcome {
    #[strum(serialize = "Player wins")]
    PlayerWins,
    #[strum(serialize = "Enemy wins")]
    EnemyWins,
    #[strum(serialize = "Draw")]
    Draw,
}

/// Observable lifecycle phase of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchPhase {
    /// No match has been started.
    Idle,
    /// A match is in progress.
    Running,
    /// The last match reached a terminal outcome.
    Finished,
}

/// Turn orchestrator for one duel.
///
/// An arena is an owned context object: callers create as many as they need
/// and drive each one independently. There is no process-wide match state;
/// multi-match serving goes through [`crate::registry::MatchRegistry`].
pub struct Arena {
    player: Option<Unit>,
    enemy: Option<Unit>,
    running: bool,
    outcome: Option<BattleOutcome>,
    roller: Box<dyn DamageRoll>,
}

impl Arena {
    /// Arena rolling damage from fresh OS entropy.
    pub fn new() -> Self {
        Self::with_roller(Box::new(SeededRoll::from_entropy()))
    }

    /// Arena with an injected damage roller, for replays and tests.
    pub fn with_roller(roller: Box<dyn DamageRoll>) -> Self {
        Self {
            player: None,
            enemy: None,
            running: false,
            outcome: None,
            roller,
        }
    }

    /// Begin a match between `player` and `enemy`.
    ///
    /// Fully resets the arena: any previous outcome and combatants are
    /// discarded, so no state leaks between matches.
    pub fn start_game(&mut self, player: Unit, enemy: Unit) {
        self.player = Some(player);
        self.enemy = Some(enemy);
        self.outcome = None;
        self.running = true;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        self.outcome
    }

    pub fn phase(&self) -> MatchPhase {
        if self.running {
            MatchPhase::Running
        } else if self.outcome.is_some() {
            MatchPhase::Finished
        } else {
            MatchPhase::Idle
        }
    }

    /// The player-side combatant, if a match has been started.
    pub fn player(&self) -> Option<&Unit> {
        self.player.as_ref()
    }

    /// The enemy-side combatant, if a match has been started.
    pub fn enemy(&self) -> Option<&Unit> {
        self.enemy.as_ref()
    }

    /// Resolve one full round: the player's basic attack, then the turn
    /// advance (termination check, regeneration, enemy riposte).
    ///
    /// Both descriptions come back as one atomic result; callers never see
    /// the state between the two halves. Outside a running match this is a
    /// no-op that returns the last known outcome.
    pub fn player_hit(&mut self) -> String {
        if !self.running {
            return self.last_outcome_text();
        }
        let (Some(player), Some(enemy)) = (&mut self.player, &mut self.enemy) else {
            return self.last_outcome_text();
        };
        let action = player.hit(enemy, self.roller.as_mut());
        let turn = self.next_turn();
        format!("{action}\n{turn}")
    }

    /// Like [`Arena::player_hit`], but the player uses the class skill.
    pub fn player_use_skill(&mut self) -> String {
        if !self.running {
            return self.last_outcome_text();
        }
        let (Some(player), Some(enemy)) = (&mut self.player, &mut self.enemy) else {
            return self.last_outcome_text();
        };
        let action = player.use_skill(enemy);
        let turn = self.next_turn();
        format!("{action}\n{turn}")
    }

    /// Advance the match by one turn (also the "pass" action).
    ///
    /// Checks for a terminal condition first and finalizes the match if one
    /// holds; otherwise both sides regain [`STAMINA_PER_TURN`] and the enemy
    /// answers with an automatic basic attack.
    pub fn next_turn(&mut self) -> String {
        if !self.running {
            return self.last_outcome_text();
        }
        let (Some(player), Some(enemy)) = (&mut self.player, &mut self.enemy) else {
            return self.last_outcome_text();
        };

        if let Some(outcome) = Self::check_hp(player, enemy) {
            return self.finish(outcome);
        }

        player.regenerate_stamina(STAMINA_PER_TURN);
        enemy.regenerate_stamina(STAMINA_PER_TURN);

        enemy.hit(player, self.roller.as_mut())
    }

    /// Classify the outcome if either side is out of hit points.
    ///
    /// Branch order is load-bearing: a double knockout is a draw, a player
    /// driven strictly negative loses, and everything else — including a
    /// player at exactly zero with the enemy down — is a player win.
    fn check_hp(player: &Unit, enemy: &Unit) -> Option<BattleOutcome> {
        if player.is_alive() && enemy.is_alive() {
            return None;
        }

        let outcome = if player.hp <= 0.0 && enemy.hp <= 0.0 {
            BattleOutcome::Draw
        } else if player.hp < 0.0 {
            BattleOutcome::EnemyWins
        } else {
            BattleOutcome::PlayerWins
        };
        Some(outcome)
    }

    /// Fix the outcome and stop the match. The units stay readable for
    /// display until the next `start_game`.
    fn finish(&mut self, outcome: BattleOutcome) -> String {
        self.outcome = Some(outcome);
        self.running = false;
        outcome.to_string()
    }

    /// Text returned by turn operations when no match is running.
    fn last_outcome_text(&self) -> String {
        match self.outcome {
            Some(outcome) => outcome.to_string(),
            None => String::from("No battle in progress."),
        }
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}
