#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use navy::{
    init_logging, select_target, Engagement, EngagementStatus, FileStore, Navy, NavySnapshot,
    Side, SnapshotKey, SnapshotStore, DEFAULT_OCEAN_SIZE,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Pit two randomly deployed navies against each other.
    Skirmish {
        #[arg(long, default_value_t = DEFAULT_OCEAN_SIZE)]
        ocean_size: usize,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Print both final oceans")]
        show_oceans: bool,
        #[arg(long, help = "Directory to save both navies' snapshots into")]
        save_dir: Option<PathBuf>,
        #[arg(long, default_value_t = 0)]
        match_id: u64,
    },
    /// Print a saved navy.
    Inspect {
        #[arg(long)]
        dir: PathBuf,
        #[arg(long)]
        match_id: u64,
        #[arg(long)]
        player_id: u64,
    },
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Skirmish {
            ocean_size,
            seed,
            show_oceans,
            save_dir,
            match_id,
        } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let engagement = skirmish(ocean_size, &mut rng)?;

            let winner = match engagement.status() {
                EngagementStatus::Won(side) => side,
                EngagementStatus::InProgress => {
                    return Err(anyhow::anyhow!("engagement ended without a winner"))
                }
            };
            println!(
                "winner: {:?} ({} shots to {} shots)",
                winner,
                engagement.shots_fired(winner),
                engagement.shots_fired(winner.opponent()),
            );

            let (first, second) = engagement.into_navies();
            if show_oceans {
                print_navy("first", &first);
                print_navy("second", &second);
            }
            if let Some(dir) = save_dir {
                let store = FileStore::new(dir);
                for (player_id, navy) in [(0, &first), (1, &second)] {
                    let key = SnapshotKey::new(match_id, player_id);
                    store.save(key, &NavySnapshot::from(navy)).await?;
                }
                println!("Saved match {} to {}", match_id, store.root().display());
            }
        }
        Commands::Inspect {
            dir,
            match_id,
            player_id,
        } => {
            let store = FileStore::new(dir);
            let key = SnapshotKey::new(match_id, player_id);
            let snapshot = store
                .load(key)
                .await?
                .ok_or_else(|| anyhow::anyhow!("no snapshot for {:?}", key))?;
            let navy = Navy::try_from(snapshot)?;
            print_navy(&format!("player {}", player_id), &navy);
        }
    }
    Ok(())
}

/// Deploy two random fleets and fire until one is sunk.
#[cfg(feature = "std")]
fn skirmish(ocean_size: usize, rng: &mut SmallRng) -> anyhow::Result<Engagement> {
    let mut first = Navy::new(ocean_size);
    let mut second = Navy::new(ocean_size);
    first.place_fleet_randomly(rng)?;
    second.place_fleet_randomly(rng)?;

    let mut engagement = Engagement::new(first, second)?;
    while engagement.winner().is_none() {
        let side: Side = engagement.turn();
        let target = select_target(engagement.navy(side).enemy_ocean(), rng)
            .ok_or_else(|| anyhow::anyhow!("{:?} has no cells left to fire at", side))?;
        engagement.fire(target)?;
    }
    Ok(engagement)
}

#[cfg(feature = "std")]
fn print_navy(label: &str, navy: &Navy) {
    println!("== {} ==", label);
    for ship in navy.ships() {
        let status = if ship.is_destroyed() {
            "destroyed"
        } else if ship.hit_count() > 0 {
            "damaged"
        } else {
            "intact"
        };
        match ship.placement() {
            Some(p) => println!(
                "{:<10} {} {:?} {}/{} hits, {}",
                ship.class(),
                p.head,
                p.orientation,
                ship.hit_count(),
                ship.size(),
                status
            ),
            None => println!("{:<10} unplaced", ship.class()),
        }
    }
    println!("own ocean:\n{}", navy.ocean());
    println!("enemy ocean:\n{}", navy.enemy_ocean());
}
