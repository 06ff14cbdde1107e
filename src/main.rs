use std::path::PathBuf;

use bevy::log::LogPlugin;
use bevy::prelude::*;
use clap::Parser;
use stride::{
    init_logging, ActionBindings, InputBridgeSettings, MoveInput, MoveInputAuthoring,
    MoveInputPlugin,
};

/// Publishes keyboard and mouse input into a `MoveInput` record
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON file overriding the default key bindings
    #[arg(short, long)]
    bindings: Option<PathBuf>,

    /// Leave the input bridge disabled after startup
    #[arg(long)]
    no_autostart: bool,
}

fn spawn_placeholder(mut commands: Commands) {
    commands.spawn((MoveInputAuthoring::default(), Name::new("PlayerInput")));
}

fn log_move_input(records: Query<&MoveInput, Changed<MoveInput>>) {
    for input in &records {
        if *input != MoveInput::default() {
            log::debug!("{input:?}");
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let bindings = match &args.bindings {
        Some(path) => ActionBindings::load(path)?,
        None => ActionBindings::default(),
    };

    App::new()
        .add_plugins(DefaultPlugins.build().disable::<LogPlugin>())
        .insert_resource(bindings)
        .insert_resource(InputBridgeSettings {
            enable_on_startup: !args.no_autostart,
        })
        .add_plugins(MoveInputPlugin)
        .add_systems(Startup, spawn_placeholder)
        .add_systems(Update, log_move_input)
        .run();

    Ok(())
}
