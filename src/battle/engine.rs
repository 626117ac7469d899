use crate::battle::ai::{Behavior, RandomAI};
use crate::battle::calculators::{resolve_attack, AttackOutcome};
use crate::battle::rng::BattleRng;
use crate::battle::state::{BattleEvent, BattlePair, EventBus, GameState, Side};
use crate::errors::{ActionError, BattleResult, BattleStateError, PersistenceError};
use crate::pokemon::PokemonInst;
use crate::pool::OpponentPool;
use crate::progress::{ProgressRecord, ProgressStore};
use crate::progression::{self, award_experience, RewardCalculator};
use tracing::{debug, info, warn};

/// Resolve one attack inside a live battle.
///
/// The move is looked up on the attacker before anything is rolled, so an unknown name
/// leaves the pair and the RNG untouched.
pub fn resolve_turn(
    pair: &mut BattlePair,
    attacker: Side,
    move_name: &str,
    rng: &mut dyn BattleRng,
    bus: &mut EventBus,
) -> BattleResult<AttackOutcome> {
    let move_data = pair
        .pokemon(attacker)
        .get_move(move_name)
        .cloned()
        .ok_or_else(|| ActionError::InvalidMoveSelection(move_name.to_string()))?;

    let (attacking, defending) = pair.attacker_and_defender(attacker);
    let outcome = resolve_attack(attacking, attacker, defending, &move_data, rng, bus);
    debug!(
        "{} used {} for {} damage (base {}, x{})",
        attacking.name, move_data.name, outcome.damage, outcome.base_power, outcome.multiplier
    );
    Ok(outcome)
}

/// Owns one player's battles from menu to menu.
///
/// Every call returns the events it produced and leaves the engine in a state the
/// presenter can render. The engine never waits: after `submit_player_move` or an
/// enemy move the state is `ResolvingTurn`, and nothing happens until `advance` is
/// called. That gap is where the presenter shows the result and paces itself.
pub struct BattleEngine<S: ProgressStore, R: BattleRng> {
    player: PokemonInst,
    pool: OpponentPool,
    battle: Option<BattlePair>,
    state: GameState,
    last_attacker: Side,
    store: S,
    rng: R,
    ai: Box<dyn Behavior>,
    rewards: RewardCalculator,
}

impl<S: ProgressStore, R: BattleRng> BattleEngine<S, R> {
    /// Create an idle engine. `player` is the template every battle copies from; saved
    /// progress is not applied until `restore_progress` is called.
    pub fn new(player: PokemonInst, pool: OpponentPool, store: S, rng: R) -> Self {
        Self {
            player,
            pool,
            battle: None,
            state: GameState::Idle,
            last_attacker: Side::Player,
            store,
            rng,
            ai: Box::new(RandomAI::new()),
            rewards: RewardCalculator,
        }
    }

    /// Replace the opponent's move picker.
    pub fn with_behavior(mut self, ai: Box<dyn Behavior>) -> Self {
        self.ai = ai;
        self
    }

    /// Apply the saved level and experience to the player template.
    ///
    /// A missing save keeps the template silently. A save that cannot be read also keeps
    /// the template; the error is logged and handed back to the caller.
    pub fn restore_progress(&mut self) -> Option<PersistenceError> {
        match self.store.load() {
            Ok(None) => {
                debug!("No saved progress, starting from the template");
                None
            }
            Ok(Some(saved)) => {
                let record = saved.resolve(ProgressRecord {
                    level: self.player.level,
                    experience: self.player.experience,
                });
                progression::restore_progress(&mut self.player, record.level, record.experience);
                info!(
                    "Restored {} to level {} with {} exp",
                    self.player.name, self.player.level, self.player.experience
                );
                None
            }
            Err(err) => {
                warn!("{}; keeping default progress", err);
                Some(err)
            }
        }
    }

    /// Draw a wild opponent and begin a battle with the player to move.
    ///
    /// Valid from `Idle`, and from `Victory`/`Defeat`, which drops the finished battle.
    pub fn start_battle(&mut self) -> BattleResult<Vec<BattleEvent>> {
        match self.state {
            GameState::Idle | GameState::Victory | GameState::Defeat => {}
            state => return Err(ActionError::InvalidActionForGameState(state).into()),
        }

        let opponent = self
            .pool
            .sample(&mut self.rng)
            .ok_or(BattleStateError::EmptyOpponentPool)?;
        let pair = BattlePair::new(self.player.clone(), opponent);

        let mut bus = EventBus::new();
        bus.push(BattleEvent::BattleStarted {
            opponent: pair.opponent.name.clone(),
            opponent_type: pair.opponent.pokemon_type,
            opponent_level: pair.opponent.level,
            opponent_max_hp: pair.opponent.max_hp(),
        });

        info!(
            "Battle started: {} vs {} ({})",
            pair.player.name, pair.opponent.name, pair.opponent.pokemon_type
        );
        self.battle = Some(pair);
        self.last_attacker = Side::Player;
        self.state = GameState::PlayerTurn;
        Ok(bus.into_events())
    }

    /// Resolve the player's chosen move.
    ///
    /// An unknown name is rejected with no change to the battle, so it can be retried.
    pub fn submit_player_move(&mut self, move_name: &str) -> BattleResult<Vec<BattleEvent>> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidActionForGameState(self.state).into());
        }
        let pair = self
            .battle
            .as_mut()
            .ok_or(BattleStateError::NoActiveBattle)?;

        let mut bus = EventBus::new();
        resolve_turn(pair, Side::Player, move_name, &mut self.rng, &mut bus)?;

        self.last_attacker = Side::Player;
        self.state = GameState::ResolvingTurn;
        Ok(bus.into_events())
    }

    /// Move the battle on by one step.
    ///
    /// - `ResolvingTurn`: announce a faint and finish the battle, or hand the turn over.
    /// - `EnemyTurn`: the opponent picks and resolves its move.
    /// - `Victory` / `Defeat`: drop the battle and return to `Idle`.
    pub fn advance(&mut self) -> BattleResult<Vec<BattleEvent>> {
        let mut bus = EventBus::new();
        match self.state {
            GameState::ResolvingTurn => self.finish_turn(&mut bus)?,
            GameState::EnemyTurn => self.take_enemy_turn(&mut bus)?,
            GameState::Victory | GameState::Defeat => {
                self.battle = None;
                self.state = GameState::Idle;
                debug!("Battle closed, back to idle");
            }
            state => return Err(ActionError::InvalidActionForGameState(state).into()),
        }
        Ok(bus.into_events())
    }

    /// Same as `advance`; named for presenters that call it when their delay runs out.
    pub fn continue_after_delay(&mut self) -> BattleResult<Vec<BattleEvent>> {
        self.advance()
    }

    /// Abandon whatever is happening and go back to `Idle`. Nothing from an unfinished
    /// battle is kept.
    pub fn reset(&mut self) {
        if self.battle.take().is_some() && self.state.is_undecided() {
            info!("Battle abandoned");
        }
        self.state = GameState::Idle;
        self.last_attacker = Side::Player;
    }

    fn finish_turn(&mut self, bus: &mut EventBus) -> BattleResult<()> {
        let pair = self
            .battle
            .as_mut()
            .ok_or(BattleStateError::NoActiveBattle)?;
        let defender_side = self.last_attacker.other();
        let defender = pair.pokemon(defender_side);

        if defender.is_fainted() {
            bus.push(BattleEvent::PokemonFainted {
                side: defender_side,
                pokemon: defender.name.clone(),
            });
            match defender_side {
                Side::Opponent => self.handle_victory(bus),
                Side::Player => self.handle_defeat(bus),
            }
        } else {
            pair.turn = defender_side;
            bus.push(BattleEvent::TurnSwitched {
                side: defender_side,
            });
            self.state = match defender_side {
                Side::Opponent => GameState::EnemyTurn,
                Side::Player => GameState::PlayerTurn,
            };
            Ok(())
        }
    }

    fn take_enemy_turn(&mut self, bus: &mut EventBus) -> BattleResult<()> {
        let pair = self
            .battle
            .as_mut()
            .ok_or(BattleStateError::NoActiveBattle)?;
        let move_name = self
            .ai
            .choose_move(&pair.opponent, &mut self.rng)
            .ok_or_else(|| {
                BattleStateError::InconsistentState(format!(
                    "{} has no moves to use",
                    pair.opponent.name
                ))
            })?;

        resolve_turn(pair, Side::Opponent, &move_name, &mut self.rng, bus)?;
        self.last_attacker = Side::Opponent;
        self.state = GameState::ResolvingTurn;
        Ok(())
    }

    fn handle_victory(&mut self, bus: &mut EventBus) -> BattleResult<()> {
        let pair = self
            .battle
            .as_mut()
            .ok_or(BattleStateError::NoActiveBattle)?;
        let amount = self.rewards.roll_victory_exp(&mut self.rng);
        let player = &mut pair.player;
        let level_ups = award_experience(player, amount);

        bus.push(BattleEvent::ExperienceGained {
            pokemon: player.name.clone(),
            amount,
            total: player.experience,
        });
        for level_up in &level_ups {
            bus.push(BattleEvent::LevelUp {
                pokemon: player.name.clone(),
                new_level: level_up.new_level,
                new_max_hp: level_up.new_max_hp,
            });
        }

        self.player = player.clone();
        self.player.set_hp_to_max();

        let record = ProgressRecord {
            level: self.player.level,
            experience: self.player.experience,
        };
        if let Err(err) = self.store.save(&record) {
            warn!("{}; progress from this battle was not saved", err);
        }

        info!(
            "Victory: +{} exp, {} levels gained",
            amount,
            level_ups.len()
        );
        bus.push(BattleEvent::BattleEnded {
            winner: Side::Player,
        });
        self.state = GameState::Victory;
        Ok(())
    }

    fn handle_defeat(&mut self, bus: &mut EventBus) -> BattleResult<()> {
        info!("Defeat: {} fainted", self.player.name);
        bus.push(BattleEvent::BattleEnded {
            winner: Side::Opponent,
        });
        self.state = GameState::Defeat;
        Ok(())
    }

    pub fn game_state(&self) -> GameState {
        self.state
    }

    /// The live battle, if any. Present in every state except `Idle`.
    pub fn battle(&self) -> Option<&BattlePair> {
        self.battle.as_ref()
    }

    /// The player template, carrying the latest level and experience.
    pub fn player(&self) -> &PokemonInst {
        &self.player
    }

    pub fn pool(&self) -> &OpponentPool {
        &self.pool
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}
