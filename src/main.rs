use color_eyre::eyre::Result;
use dotenv::dotenv;
use roomly_client::{ClientConfig, Session, api};
use roomly_core::errors::ApiError;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration and open a session against the backend
    let config = ClientConfig::from_env()?;
    let session = Session::new(config)?;

    let rooms = match api::rooms::list_rooms(&session).await {
        Ok(rooms) => rooms,
        Err(err) => return report(&session, err),
    };

    println!("Salas:");
    for room in &rooms {
        let state = if room.status.is_available() {
            "disponible"
        } else {
            "no disponible"
        };
        match &room.description {
            Some(description) => println!("  [{}] {} ({state}) – {description}", room.id, room.name),
            None => println!("  [{}] {} ({state})", room.id, room.name),
        }
    }

    let events = match api::bookings::load_calendar(&session).await {
        Ok(events) => events,
        Err(err) => return report(&session, err),
    };

    println!("Citas:");
    for event in &events {
        println!(
            "  {} – {}  {}",
            event.start.format("%Y-%m-%d %H:%M"),
            event.end.format("%H:%M"),
            event.title
        );
    }

    Ok(())
}

/// Surfaces a failure the way the page does: tell the user, never crash
/// the session. Auth failures point at the login page; everything else is
/// retried by rerunning the command.
fn report(session: &Session, err: ApiError) -> Result<()> {
    match err {
        ApiError::AuthRequired => {
            warn!("acceso denegado – inicia sesión en {}", session.login_url());
        }
        other if other.is_transient() => {
            error!(%other, "request failed – retry the action");
        }
        other => {
            error!(%other, "request rejected");
        }
    }
    std::process::exit(1)
}
