//! Console telemetry monitor
//!
//! Run with: cargo run --example monitor [HOST] [WINDOW]
//!
//! Adds two signal and two inference channels on their default ports of HOST
//! (default 10.42.0.253), then prints each channel's window stats on every
//! refresh. After 10 seconds the view is frozen in history mode, scrubbed
//! back to the start, and resumed live 5 seconds later.
//!
//! Start the `sine_source` example first for local data:
//!   cargo run --example sine_source
//!   cargo run --example monitor 127.0.0.1

use std::sync::Arc;
use std::time::{Duration, Instant};

use telemetry_stream::registry::{ChannelRegistry, Group, RegistryConfig};
use telemetry_stream::{RefreshFrame, ViewMode};

const REFRESH_INTERVAL: Duration = Duration::from_millis(500);
const STALE_AFTER: Duration = Duration::from_secs(3);

fn print_frame(frame: &RefreshFrame) {
    let mode = match frame.mode {
        ViewMode::Live => "LIVE".to_string(),
        ViewMode::History => format!(
            "HISTORY @ {} of {}",
            frame.offset.unwrap_or(0),
            frame.history_range.1
        ),
    };
    println!("--- {} (W={}) ---", mode, frame.window_size);

    for group in Group::ALL {
        for snap in frame.group(group) {
            let status = if !snap.health.connected {
                "down"
            } else if snap.health.is_stale(STALE_AFTER) {
                "stale"
            } else {
                "up"
            };
            println!(
                "{:<6} {:<5} min {:>8.2}  max {:>8.2}  avg {:>8.2}  last {:>8.2}  ({} samples, {} attempts)",
                snap.key.label(),
                status,
                snap.stats.min,
                snap.stats.max,
                snap.stats.avg,
                snap.stats.last,
                snap.health.samples_received,
                snap.health.connect_attempts,
            );
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("telemetry_stream=info".parse()?)
                .add_directive("monitor=debug".parse()?),
        )
        .init();

    let mut config = RegistryConfig::default();
    if let Some(host) = args.get(1) {
        config = config.default_host(host.clone());
    }
    if let Some(window) = args.get(2) {
        config = config.window_size(window.parse()?);
    }

    let registry = Arc::new(ChannelRegistry::with_config(config)?);
    for group in Group::ALL {
        for _ in 0..registry.config().max_channels_per_group {
            registry.add_channel(group).await?;
        }
    }

    let (refresh_task, mut frames) = registry.spawn_refresh_task(REFRESH_INTERVAL);
    let started = Instant::now();
    let mut frozen_at: Option<Instant> = None;

    loop {
        tokio::select! {
            frame = frames.recv() => {
                let Some(frame) = frame else { break };
                print_frame(&frame);

                match frozen_at {
                    None if started.elapsed() > Duration::from_secs(10) => {
                        let offset = registry.enter_history().await;
                        tracing::info!(offset = offset, "Froze view");
                        registry.scrub_to(0).await;
                        frozen_at = Some(Instant::now());
                    }
                    Some(at) if at.elapsed() > Duration::from_secs(5) && frame.is_history_mode() => {
                        registry.enter_live().await;
                        tracing::info!("Resumed live view");
                    }
                    _ => {}
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!("\nShutting down...");
                break;
            }
        }
    }

    drop(frames);
    let _ = refresh_task.await;
    registry.shutdown().await;

    Ok(())
}
