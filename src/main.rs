//! Builds a loadout from the command line and prints the deployment briefing.
//!
//! Every option falls back to an environment variable and then to Venom
//! Snake's default deployment. Set `RUST_LOG=debug` to see the built loadout
//! on stderr.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use loadout::LoadoutBuilder;

#[derive(Debug, Parser)]
#[command(name = "loadout")]
#[command(about = "Configure and print an MGSV mission loadout")]
#[command(version)]
struct Args {
    /// Player character
    #[arg(long, env = "LOADOUT_CHARACTER", default_value = "Venom Snake")]
    character: String,

    /// Main firearm
    #[arg(long, env = "LOADOUT_PRIMARY_WEAPON", default_value = "AM MRS-4")]
    primary_weapon: String,

    /// Sidearm
    #[arg(
        long,
        env = "LOADOUT_SECONDARY_WEAPON",
        default_value = "WU Silent Pistol"
    )]
    secondary_weapon: String,

    /// Special weapon such as a rocket launcher or sniper rifle
    #[arg(long, env = "LOADOUT_SUPPORT_WEAPON")]
    support_weapon: Option<String>,

    /// Consumable item; repeat to add more
    #[arg(long = "item", default_values = ["Magazine", "Water Pistol"])]
    items: Vec<String>,

    /// Companion
    #[arg(long, env = "LOADOUT_BUDDY", default_value = "D-Dog")]
    buddy: String,

    /// Deployment vehicle
    #[arg(long, env = "LOADOUT_VEHICLE", default_value = "Jeep")]
    vehicle: String,

    /// Time of day, e.g. 06:00
    #[arg(long, env = "LOADOUT_MISSION_TIME", default_value = "18:00")]
    mission_time: String,
}

impl Args {
    fn into_builder(self) -> LoadoutBuilder {
        let mut builder = LoadoutBuilder::new();
        builder
            .set_character(self.character)
            .set_primary_weapon(self.primary_weapon)
            .set_secondary_weapon(self.secondary_weapon)
            .set_buddy(self.buddy)
            .set_vehicle(self.vehicle)
            .set_mission_time(self.mission_time);
        if let Some(weapon) = self.support_weapon {
            builder.set_support_weapon(weapon);
        }
        for item in self.items {
            builder.add_item(item);
        }
        builder
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let loadout = Args::parse().into_builder().build();
    tracing::debug!(?loadout, "loadout ready");

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{loadout}").context("failed to write loadout briefing")?;
    Ok(())
}
