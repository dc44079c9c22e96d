mod config;
mod lifecycle;
mod masterlist;
mod model;
mod service;
mod state;

mod commands;
mod core;
mod platform;

use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::core::{CommandProcessor, CommandRegistry, MessageDispatcher};
use crate::lifecycle::{BaseCloseable, PlatformGuard};
use crate::masterlist::MasterList;
use crate::model::CallerId;
use crate::platform::console::{ConsoleReceiver, ConsoleStack};
use crate::state::BotState;

// placeholder address until a real transport supplies one
const CONSOLE_ADDRESS: &str =
    "0000000000000000000000000000000000000000000000000000000000000000000000000000";

#[tokio::main]
async fn main() -> Result<()> {
    // ---- logging init ----
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("wardenbot starting...");
    let boot_t0 = Instant::now();

    // ---- config ----
    let t0 = Instant::now();
    let props = config::load_or_init()?;
    info!(
        "config loaded in {:?} (masterkeys='{}', console_enabled={})",
        t0.elapsed(),
        props.masterkeys,
        props.console.enabled,
    );

    // ---- core: registry / gate / service / processor ----
    let t0 = Instant::now();
    let registry = CommandRegistry::build();
    info!(
        "CommandRegistry built in {:?} (commands: {})",
        t0.elapsed(),
        registry.list_commands()
    );

    let gate = Arc::new(MasterList::new(&props.masterkeys));
    debug!("MasterList gate created");

    let stack = Arc::new(ConsoleStack::new(CONSOLE_ADDRESS));
    debug!("ConsoleStack created");

    let processor = CommandProcessor::new(registry, stack.clone(), gate);
    debug!("CommandProcessor created");

    let (in_tx, in_rx) = mpsc::unbounded_channel();
    debug!("inbound channel created");

    // ---- platforms ----
    let mut closeable = BaseCloseable::new();
    let mut enabled_any = false;
    let mut sender = None;

    if props.console.enabled {
        let t0 = Instant::now();
        enabled_any = true;

        info!("starting ConsoleReceiver...");
        let caller = CallerId::new(props.console.friend_number, props.console.public_key.clone());
        let console = ConsoleReceiver::new(caller);

        console.bind(in_tx.clone()).await;
        debug!("ConsoleReceiver bind done");

        console
            .start()
            .await
            .context("ConsoleReceiver.start failed")?;
        info!("ConsoleReceiver started in {:?}", t0.elapsed());

        sender = Some(console.sender().await?);
        closeable.add(Box::new(console));
        info!("console ready");
    } else {
        info!("console disabled by config");
    }

    PlatformGuard::ensure(enabled_any).context("no platform enabled")?;
    info!("platform guard ok (enabled_any={enabled_any})");

    let sender = sender.context("no sender registered")?;

    // ---- dispatcher task ----
    info!("spawning dispatcher loop...");
    let dispatcher = MessageDispatcher::new(processor, sender, BotState::new());
    let dispatcher_task = tokio::spawn(async move {
        info!("dispatcher loop started");
        dispatcher.run(in_rx).await;
        info!("dispatcher loop exited");
    });

    info!("boot completed in {:?}", boot_t0.elapsed());

    // ---- shutdown ----
    tokio::signal::ctrl_c().await?;
    warn!("Ctrl+C received, shutting down...");

    info!("closing platforms (BaseCloseable)...");
    closeable.close();
    info!("platforms closed");

    // dropping the last inbound sender ends the dispatcher loop
    drop(in_tx);

    match dispatcher_task.await {
        Ok(_) => info!("dispatcher task joined"),
        Err(e) => error!("dispatcher task join error: {e:?}"),
    }

    info!("shutdown complete");
    Ok(())
}
