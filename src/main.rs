//! Pocket Battle - terminal front end
//!
//! Renders engine events as text, reads move choices from stdin and paces the
//! battle with async sleeps. Ctrl-C during a battle abandons it and returns to
//! the menu; Ctrl-C at the menu quits.

use pocket_battle::config::DEFAULT_CONFIG_PATH;
use pocket_battle::{
    default_player, default_roster, BattleEngine, BattleEvent, GameConfig, GameState,
    JsonFileStore, MoveCatalog, OpponentPool, Pacing, PokemonInst, SeededRng,
    DEFAULT_OPPONENT_TYPES,
};
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::signal;
use tokio::time::sleep;
use tracing::warn;
use tracing_subscriber::filter::LevelFilter;

type Engine = BattleEngine<JsonFileStore, SeededRng>;
type Input = Lines<BufReader<Stdin>>;

const HP_BAR_WIDTH: u32 = 20;

enum Pause {
    Elapsed,
    Interrupted,
}

#[tokio::main]
async fn main() {
    let (config, config_err) = GameConfig::load_or_default(DEFAULT_CONFIG_PATH);
    init_logging(&config.log_level);
    if let Some(err) = config_err {
        warn!("{}; using default settings", err);
    }

    let mut rng = match config.seed {
        Some(seed) => SeededRng::from_seed(seed),
        None => SeededRng::from_os(),
    };
    let roster = config.roster.clone().unwrap_or_else(default_roster);
    let pool = OpponentPool::generate(
        &roster,
        &DEFAULT_OPPONENT_TYPES,
        &MoveCatalog::default(),
        &mut rng,
    );

    let store = JsonFileStore::new(&config.save_path);
    let mut engine = BattleEngine::new(default_player(), pool, store, rng);
    // Load failures are already logged by the engine; the player just starts fresh.
    let _ = engine.restore_progress();

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print_menu(engine.player());
        match read_line(&mut input).await.as_deref().map(str::trim) {
            Some("1") => run_battle(&mut engine, &mut input, &config.pacing).await,
            Some("2") | None => break,
            Some(other) => println!("Unknown choice: {}", other),
        }
    }
    println!("Goodbye!");
}

fn init_logging(level: &str) {
    let filter = level.parse::<LevelFilter>().unwrap_or(LevelFilter::WARN);
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(filter)
        .with_target(false)
        .init();
}

/// Play one battle until the engine is back at `Idle`.
async fn run_battle(engine: &mut Engine, input: &mut Input, pacing: &Pacing) {
    match engine.start_battle() {
        Ok(events) => render(&events),
        Err(err) => {
            println!("{}", err);
            return;
        }
    }

    loop {
        let delay_ms = match engine.game_state() {
            GameState::Idle => return,
            GameState::PlayerTurn => {
                draw_battle(engine);
                let Some(choice) = choose_move(engine, input).await else {
                    abandon(engine);
                    return;
                };
                match engine.submit_player_move(&choice) {
                    Ok(events) => render(&events),
                    Err(err) => println!("{}", err),
                }
                continue;
            }
            GameState::ResolvingTurn => pacing.turn_delay_ms,
            GameState::EnemyTurn => pacing.enemy_delay_ms,
            GameState::Victory | GameState::Defeat => pacing.end_delay_ms,
        };

        if let Pause::Interrupted = pause(delay_ms).await {
            abandon(engine);
            return;
        }
        match engine.continue_after_delay() {
            Ok(events) => render(&events),
            Err(err) => {
                warn!("{}", err);
                engine.reset();
                return;
            }
        }
    }
}

/// Drop the current battle. Only an undecided battle counts as running away.
fn abandon(engine: &mut Engine) {
    let fled = engine.game_state().is_undecided();
    engine.reset();
    if fled {
        println!("\nYou ran away!");
    }
}

async fn pause(delay_ms: u64) -> Pause {
    tokio::select! {
        _ = sleep(Duration::from_millis(delay_ms)) => Pause::Elapsed,
        _ = signal::ctrl_c() => Pause::Interrupted,
    }
}

/// Next line of input, or None on EOF, read error or Ctrl-C.
async fn read_line(input: &mut Input) -> Option<String> {
    tokio::select! {
        line = input.next_line() => line.ok().flatten(),
        _ = signal::ctrl_c() => None,
    }
}

/// Ask for a move by number or by name. Names are passed through unchecked so the
/// engine can reject them.
async fn choose_move(engine: &Engine, input: &mut Input) -> Option<String> {
    let player = &engine.battle()?.player;
    for (i, move_data) in player.moves().iter().enumerate() {
        println!("  {}. {}", i + 1, move_data);
    }
    prompt("Choose a move: ");

    let line = read_line(input).await?;
    let line = line.trim();
    let by_number = line
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| player.moves().get(i));
    Some(match by_number {
        Some(move_data) => move_data.name.clone(),
        None => line.to_string(),
    })
}

fn render(events: &[BattleEvent]) {
    for line in events.iter().filter_map(BattleEvent::format) {
        println!("{}", line);
    }
}

fn draw_battle(engine: &Engine) {
    let Some(pair) = engine.battle() else {
        return;
    };
    println!();
    println!("  {}", status_line(&pair.opponent));
    println!("  {}", status_line(&pair.player));
    println!(
        "  EXP {}/{}",
        pair.player.experience, pair.player.exp_to_next_level
    );
}

fn status_line(pokemon: &PokemonInst) -> String {
    format!(
        "{:<12} {:<9} Lv{:<3} {} {}/{}",
        pokemon.name,
        pokemon.pokemon_type.to_string(),
        pokemon.level,
        hp_bar(pokemon.current_hp(), pokemon.max_hp()),
        pokemon.current_hp(),
        pokemon.max_hp()
    )
}

fn hp_bar(current: u16, max: u16) -> String {
    let filled = if max == 0 {
        0
    } else {
        current as u32 * HP_BAR_WIDTH / max as u32
    };
    format!(
        "[{}{}]",
        "#".repeat(filled as usize),
        "-".repeat((HP_BAR_WIDTH - filled) as usize)
    )
}

fn print_menu(player: &PokemonInst) {
    println!();
    println!("=== Pocket Battle ===");
    println!(
        "{} Lv{}  EXP {}/{}",
        player.name, player.level, player.experience, player.exp_to_next_level
    );
    println!("  1. Start Battle");
    println!("  2. Quit");
    prompt("> ");
}

fn prompt(text: &str) {
    print!("{}", text);
    let _ = std::io::stdout().flush();
}
