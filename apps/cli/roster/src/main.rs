use roster::error::RosterError;
use roster::logger;
use roster::view_model::UserViewModel;

use client_core::{ApiClient, UserApi};

use common::{ErrorLocation, User};

use std::fs::create_dir_all;
use std::panic::Location;

use log::info;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("{error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), RosterError> {
    let log_dir = std::env::temp_dir().join("roster");

    create_dir_all(&log_dir).map_err(|e| RosterError::App {
        message: format!("Failed to create log directory: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    logger::initialize(&log_dir)?;

    info!("Roster starting");
    info!("Log directory: {}", log_dir.display());

    let stub = std::env::args().any(|argument| argument == "--stub");
    let client = ApiClient::new(stub)?;

    // `roster <id>` shows one user's detail; no argument lists everyone.
    let id_argument = std::env::args()
        .skip(1)
        .find(|argument| !argument.starts_with("--"));

    match id_argument {
        Some(raw) => {
            let id: i64 = raw.parse().map_err(|e| RosterError::App {
                message: format!("Invalid user id '{raw}': {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;
            show_user(&client, id).await
        }
        None => list_users(client).await,
    }
}

async fn list_users(client: ApiClient) -> Result<(), RosterError> {
    let mut view_model = UserViewModel::new(client);
    view_model.fetch_users().await;

    if let Some(message) = &view_model.error_message {
        return Err(RosterError::Client {
            message: message.clone(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    for user in &view_model.users {
        println!("{:>4}  {} <{}> ({})", user.id, user.name, user.email, user.username);
    }

    Ok(())
}

async fn show_user(client: &ApiClient, id: i64) -> Result<(), RosterError> {
    let user: User = client.execute(UserApi::GetUserDetail { id }).await?;

    println!("id:       {}", user.id);
    println!("name:     {}", user.name);
    println!("username: {}", user.username);
    println!("email:    {}", user.email);

    Ok(())
}
