/// Timetable Studio
///
/// A browser front-end for the scheduler service: fill in the form, press
/// Generate, and the returned timetable is shown as a day × slot table.
/// Served by a synchronous tiny_http server; no JavaScript required.
///
/// Run with:
///   cargo run --bin studio -- --endpoint http://localhost:5000/generate-timetable
/// Then open http://127.0.0.1:7878

mod state;
mod render;
mod routes;
mod handlers;
mod util;

use std::sync::{Arc, Mutex};

use clap::Parser;
use tiny_http::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use timetable_studio::client::DEFAULT_ENDPOINT;
use timetable_studio::HttpScheduleClient;

use state::{SharedService, StudioState};

#[derive(Parser, Debug)]
#[command(name = "studio", about = "Browser front-end for the timetable scheduler")]
struct Args {
    /// Address the studio listens on
    #[arg(long, env = "STUDIO_BIND", default_value = "127.0.0.1:7878")]
    bind: String,

    /// Scheduler endpoint requests are POSTed to
    #[arg(long, env = "TIMETABLE_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "studio=info,timetable_studio=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let server = Server::http(&args.bind)
        .map_err(|e| anyhow::anyhow!("failed to bind HTTP server on {}: {}", args.bind, e))?;

    let shared_state = Arc::new(Mutex::new(StudioState::new()));
    let service: SharedService = Arc::new(HttpScheduleClient::new(args.endpoint.clone()));

    tracing::info!(bind = %args.bind, endpoint = %args.endpoint, "timetable studio listening");
    println!("Open http://{} in your browser.", args.bind);

    // Each request is dispatched on its own thread so a slow scheduler
    // does not stall page loads while a submission is pending.
    for request in server.incoming_requests() {
        let state_clone   = shared_state.clone();
        let service_clone = service.clone();
        std::thread::spawn(move || {
            routes::dispatch(request, state_clone, service_clone);
        });
    }

    Ok(())
}
