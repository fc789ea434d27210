//! Arena duel client.
//!
//! Assembles two combatants from the equipment catalog, starts a match and
//! drives it with stdin commands: `hit`, `skill`, `pass`, `status`, `quit`.
mod config;
mod roster;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use arena_content::EquipmentLoader;
use arena_core::{Arena, SeededRoll};

use config::ClientConfig;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env();

    let catalog_path = config.data_dir.join("equipment.ron");
    let catalog = EquipmentLoader::load(&catalog_path)
        .with_context(|| format!("loading equipment catalog from {}", catalog_path.display()))?;
    tracing::info!(
        weapons = catalog.weapon_names().len(),
        armors = catalog.armor_names().len(),
        "equipment catalog loaded"
    );

    let player = roster::build_unit(&catalog, &config.player)?;
    let enemy = roster::build_unit(&catalog, &config.enemy)?;

    let roller = match config.seed {
        Some(seed) => SeededRoll::seed_from_u64(seed),
        None => SeededRoll::from_entropy(),
    };
    let mut arena = Arena::with_roller(Box::new(roller));

    println!(
        "{} ({}) vs {} ({})",
        player.name, player.class.name, enemy.name, enemy.class.name
    );
    println!("Commands: hit, skill, pass, status, quit");
    arena.start_game(player, enemy);

    run_loop(&mut arena)
}

/// Read commands until the match finishes or stdin closes.
fn run_loop(arena: &mut Arena) -> Result<()> {
    let stdin = io::stdin();
    print_status(arena);
    prompt()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let result = match line.trim() {
            "hit" => arena.player_hit(),
            "skill" => arena.player_use_skill(),
            "pass" => arena.next_turn(),
            "status" => {
                print_status(arena);
                prompt()?;
                continue;
            }
            "quit" => break,
            "" => {
                prompt()?;
                continue;
            }
            other => {
                println!("unknown command: {other}");
                prompt()?;
                continue;
            }
        };

        println!("{result}");
        if !arena.is_running() {
            if let Some(outcome) = arena.outcome() {
                tracing::info!(%outcome, "match finished");
            }
            break;
        }

        print_status(arena);
        prompt()?;
    }

    Ok(())
}

fn print_status(arena: &Arena) {
    if let (Some(player), Some(enemy)) = (arena.player(), arena.enemy()) {
        println!(
            "{}: {:.1} hp, {:.1} stamina | {}: {:.1} hp, {:.1} stamina",
            player.name, player.hp, player.stamina, enemy.name, enemy.hp, enemy.stamina
        );
    }
}

fn prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}
