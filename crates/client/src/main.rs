//! `dungeon`: fight one encounter from the terminal.
//!
//! Configuration comes from the environment (a `.env` file is honoured), see
//! [`ClientConfig::from_env`]. Logs go to stderr and are filtered by
//! `RUST_LOG`.
//!
//! ```bash
//! DUNGEON_CLASS=wizard DUNGEON_ENEMY=orc_warrior DUNGEON_SEED=7 cargo run -p dungeon-client
//! ```

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use dungeon_client::{ClientConfig, run};
use game_content::{ContentFactory, builtin, builtin_config};
use game_core::{Catalog, CombatSession, Combatant, SessionState};
use tracing::info;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env();

    let loaded;
    let (catalog, combat_config): (&Catalog, _) = match &config.data_dir {
        Some(dir) => {
            let factory = ContentFactory::new(dir);
            loaded = factory.load_catalog()?;
            (&loaded, factory.load_config()?)
        }
        None => (builtin()?, builtin_config()?),
    };

    let mut player = catalog
        .create_player(config.player_name.as_str(), config.class)
        .context("Failed to create player")?;
    let mut enemy = catalog
        .spawn_enemy(&config.enemy)
        .with_context(|| format!("Failed to spawn enemy '{}'", config.enemy))?;

    let seed = config.seed.unwrap_or_else(seed_from_clock);
    info!(class = %config.class, enemy = %config.enemy, seed, "starting encounter");

    let outcome = {
        let mut session =
            CombatSession::start(catalog, &combat_config, &mut player, &mut enemy, seed)?;
        run(&mut session, catalog, io::stdin().lock(), io::stdout().lock())?
    };

    if outcome == SessionState::Victory {
        println!(
            "{} is level {} with {} gold.",
            player.name(),
            player.stats().level(),
            player.gold()
        );
    }
    info!(%outcome, "encounter finished");

    Ok(())
}

fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64)
}
