//! Client configuration from environment variables.
use std::env;
use std::path::PathBuf;

/// Client configuration.
///
/// Environment variables:
/// - `ARENA_DATA_DIR` - directory holding `equipment.ron` (default: `data`)
/// - `ARENA_PLAYER_NAME` / `ARENA_ENEMY_NAME` - display names
/// - `ARENA_PLAYER_CLASS` / `ARENA_ENEMY_CLASS` - `warrior` or `thief`
/// - `ARENA_PLAYER_WEAPON` / `ARENA_ENEMY_WEAPON` - catalog weapon names
/// - `ARENA_PLAYER_ARMOR` / `ARENA_ENEMY_ARMOR` - catalog armor names
///   (unset = fight unarmored)
/// - `ARENA_SEED` - optional u64 seed for reproducible damage rolls
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub data_dir: PathBuf,
    pub player: HeroSpec,
    pub enemy: HeroSpec,
    pub seed: Option<u64>,
}

/// Selection describing one combatant to assemble.
#[derive(Clone, Debug)]
pub struct HeroSpec {
    pub name: String,
    pub class: String,
    pub weapon: String,
    pub armor: Option<String>,
}

impl ClientConfig {
    /// Construct client configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            data_dir: read_env::<PathBuf>("ARENA_DATA_DIR").unwrap_or_else(|| "data".into()),
            player: HeroSpec {
                name: read_env("ARENA_PLAYER_NAME").unwrap_or_else(|| "Hero".into()),
                class: read_env("ARENA_PLAYER_CLASS").unwrap_or_else(|| "warrior".into()),
                weapon: read_env("ARENA_PLAYER_WEAPON").unwrap_or_else(|| "Battle Axe".into()),
                armor: env::var("ARENA_PLAYER_ARMOR").ok(),
            },
            enemy: HeroSpec {
                name: read_env("ARENA_ENEMY_NAME").unwrap_or_else(|| "Raider".into()),
                class: read_env("ARENA_ENEMY_CLASS").unwrap_or_else(|| "thief".into()),
                weapon: read_env("ARENA_ENEMY_WEAPON").unwrap_or_else(|| "Short Bow".into()),
                armor: env::var("ARENA_ENEMY_ARMOR").ok(),
            },
            seed: read_env("ARENA_SEED"),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
