//! Sine-wave telemetry source
//!
//! Run with: cargo run --example sine_source [BASE_PORT] [RATE_HZ]
//!
//! Listens on BASE_PORT and BASE_PORT+1 (default 4000/4001, the default
//! signal ports) plus 5000/5001 for the inference group, and streams a sine
//! wave as little-endian f32 frames to every client that connects.
//!
//! Pair it with the `monitor` example:
//!   cargo run --example sine_source
//!   cargo run --example monitor 127.0.0.1

use std::f32::consts::TAU;
use std::time::Duration;

use bytes::BytesMut;
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpStream};

use telemetry_stream::protocol::encode_sample;

const DEFAULT_RATE_HZ: u32 = 100;

async fn serve(port: u16, amplitude: f32, period: f32, rate_hz: u32) -> std::io::Result<()> {
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port = port, "Sample source listening");

    loop {
        let (socket, peer) = listener.accept().await?;
        tracing::info!(port = port, peer = %peer, "Client connected");

        tokio::spawn(async move {
            if let Err(e) = stream_samples(socket, amplitude, period, rate_hz).await {
                tracing::debug!(port = port, error = %e, "Client gone");
            }
        });
    }
}

async fn stream_samples(
    mut socket: TcpStream,
    amplitude: f32,
    period: f32,
    rate_hz: u32,
) -> std::io::Result<()> {
    socket.set_nodelay(true)?;

    let mut ticker = tokio::time::interval(Duration::from_secs(1) / rate_hz.max(1));
    let mut buf = BytesMut::with_capacity(4);
    let mut n: u64 = 0;

    loop {
        ticker.tick().await;
        let phase = (n as f32 / period) * TAU;
        encode_sample(amplitude * phase.sin(), &mut buf);
        socket.write_all(&buf.split()).await?;
        n += 1;
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    let base_port: u16 = match args.get(1) {
        Some(p) => p.parse()?,
        None => 4000,
    };
    let rate_hz: u32 = match args.get(2) {
        Some(r) => r.parse()?,
        None => DEFAULT_RATE_HZ,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sine_source=debug".parse()?),
        )
        .init();

    let Some(last_port) = base_port.checked_add(1001) else {
        eprintln!("Usage: sine_source [BASE_PORT <= 64534] [RATE_HZ]");
        std::process::exit(2);
    };
    let inference_base = last_port - 1;
    let sources = [
        (base_port, 50.0, 200.0),
        (base_port + 1, 20.0, 50.0),
        (inference_base, 80.0, 400.0),
        (last_port, 10.0, 25.0),
    ];

    for (port, amplitude, period) in sources {
        tokio::spawn(async move {
            if let Err(e) = serve(port, amplitude, period, rate_hz).await {
                tracing::error!(port = port, error = %e, "Listener failed");
            }
        });
    }

    tokio::signal::ctrl_c().await?;
    println!("\nShutting down...");

    Ok(())
}
