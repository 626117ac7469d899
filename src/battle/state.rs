use crate::pokemon::PokemonInst;
use schema::{Effectiveness, PokemonType};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Idle,
    PlayerTurn,
    ResolvingTurn, // An attack has landed; waiting for the presenter to continue
    EnemyTurn,     // The opponent acts on the next continue
    Victory,
    Defeat,
}

impl GameState {
    /// True while a battle is still being fought, i.e. leaving now means running away.
    pub fn is_undecided(&self) -> bool {
        matches!(
            self,
            GameState::PlayerTurn | GameState::ResolvingTurn | GameState::EnemyTurn
        )
    }
}

/// Which combatant of a BattlePair an event or turn refers to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn other(&self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Opponent => write!(f, "opponent"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    // Battle Start
    BattleStarted {
        opponent: String,
        opponent_type: PokemonType,
        opponent_level: u32,
        opponent_max_hp: u16,
    },

    // Turn Management
    TurnSwitched {
        side: Side,
    },

    // Attacks
    MoveUsed {
        side: Side,
        pokemon: String,
        move_used: String,
    },
    AttackTypeEffectiveness {
        multiplier: f32,
    },
    /// Only the defender's health changes on a hit; the attacker's current health is
    /// read from `BattleEngine::battle()` alongside this event.
    DamageDealt {
        side: Side, // The side that took the damage
        target: String,
        damage: u16,
        remaining_hp: u16,
        max_hp: u16,
    },
    PokemonFainted {
        side: Side,
        pokemon: String,
    },

    // Progression
    ExperienceGained {
        pokemon: String,
        amount: u32,
        total: u32,
    },
    LevelUp {
        pokemon: String,
        new_level: u32,
        new_max_hp: u16,
    },

    // Battle End
    BattleEnded {
        winner: Side,
    },
}

impl BattleEvent {
    /// Formats the event into a human-readable line.
    /// Returns None for silent events that should not produce user-visible text.
    pub fn format(&self) -> Option<String> {
        match self {
            BattleEvent::BattleStarted { opponent, .. } => {
                Some(format!("A wild {} appeared!", opponent))
            }
            BattleEvent::TurnSwitched { side } => match side {
                Side::Player => Some("Your turn! Choose a move.".to_string()),
                Side::Opponent => None, // The enemy's MoveUsed follows right after
            },
            BattleEvent::MoveUsed {
                pokemon, move_used, ..
            } => Some(format!("{} used {}!", pokemon, move_used)),
            BattleEvent::AttackTypeEffectiveness { multiplier } => {
                Effectiveness::from_multiplier(*multiplier)
                    .message()
                    .map(str::to_string)
            }
            BattleEvent::DamageDealt { target, damage, .. } => {
                Some(format!("{} lost {} HP!", target, damage))
            }
            BattleEvent::PokemonFainted { side, pokemon } => match side {
                Side::Opponent => Some(format!("{} fainted! You won!", pokemon)),
                Side::Player => Some(format!("{} fainted! You lost...", pokemon)),
            },
            BattleEvent::ExperienceGained { amount, .. } => {
                Some(format!("You gained {} EXP!", amount))
            }
            BattleEvent::LevelUp {
                pokemon, new_level, ..
            } => Some(format!("{} leveled up! Level {}!", pokemon, new_level)),
            BattleEvent::BattleEnded { .. } => None, // Faint text already announced the result
        }
    }
}

/// Event bus for collecting the events of one engine step.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<BattleEvent> {
        self.events
    }

    /// Return true if the event bus contains no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Return the number of events in the bus.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl fmt::Display for EventBus {
    /// Shows the debug format of all events, one per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for event in &self.events {
            writeln!(f, "  {:?}", event)?;
        }
        Ok(())
    }
}

/// The two combatants of a live battle and whose turn it is.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BattlePair {
    pub player: PokemonInst,
    pub opponent: PokemonInst,
    pub turn: Side,
}

impl BattlePair {
    /// Pairs the two combatants at full health with the player to move.
    pub fn new(mut player: PokemonInst, mut opponent: PokemonInst) -> Self {
        player.set_hp_to_max();
        opponent.set_hp_to_max();
        Self {
            player,
            opponent,
            turn: Side::Player,
        }
    }

    pub fn pokemon(&self, side: Side) -> &PokemonInst {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    /// Borrow the attacker immutably and the defender mutably at the same time.
    pub fn attacker_and_defender(&mut self, attacker: Side) -> (&PokemonInst, &mut PokemonInst) {
        match attacker {
            Side::Player => (&self.player, &mut self.opponent),
            Side::Opponent => (&self.opponent, &mut self.player),
        }
    }
}
