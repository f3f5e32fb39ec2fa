//! ud - user directory client
//!
//! Keeps a local SQLite copy of the remote user directory, signs in with an
//! offline fallback and prints every result as JSON.
//!
//! # Examples
//!
//! ```bash
//! # Sign in (offline session when the API is unreachable but the email is cached)
//! ud login --email janet.weaver@reqres.in --password cityslicka
//!
//! # List the cached directory
//! ud users list --pretty
//!
//! # Deactivate a user
//! ud users toggle 2 --active false
//! ```

pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod user_commands;


pub use app::App;
pub use cli::Cli;
pub use error::{CliError, Result};

use crate::commands::Commands;
use crate::user_commands::UserCommands;

use ud_core::{ProfileForm, RegistrationForm, UserRecord};

use serde_json::{Value, json};

/// Run one command against the wired application.
pub async fn execute(app: &App, command: Commands) -> Result<Value> {
    let value = match command {
        Commands::Login { email, password } => {
            let state = app.authenticator.login(&email, &password).await?;
            session_json(&state)?
        }
        Commands::Logout => {
            app.authenticator.logout()?;
            json!({ "logged_out": true })
        }
        Commands::Whoami => session_json(&app.authenticator.session().current())?,
        Commands::Register {
            first_name,
            last_name,
            email,
            national_id,
            password,
            password_confirmation,
        } => {
            let form = RegistrationForm {
                first_name,
                last_name,
                email,
                national_id,
                password,
                password_confirmation,
            };
            user_json(app.authenticator.register(&form).await?)?
        }
        Commands::Users { action } => execute_user_command(app, action).await?,
    };

    Ok(value)
}

async fn execute_user_command(app: &App, action: UserCommands) -> Result<Value> {
    let reconciler = &app.reconciler;

    let value = match action {
        UserCommands::List => {
            let mut reconciled = reconciler.reconcile().await?;
            let signed_in_id = app
                .authenticator
                .session()
                .current()
                .email
                .and_then(|email| reconciled.find_by_email(&email).and_then(|u| u.id));

            for user in &mut reconciled.users {
                with_display_avatar(user);
            }

            let mut value = serde_json::to_value(reconciled)?;
            if let Value::Object(ref mut map) = value {
                map.insert("signed_in_id".to_string(), json!(signed_in_id));
            }
            value
        }
        UserCommands::Show { id } => {
            let user = reconciler
                .find(id)
                .await?
                .ok_or(CliError::UserNotFound { id })?;
            user_json(user)?
        }
        UserCommands::Toggle { id, active } => {
            reconciler.toggle_status(id, active).await?;
            json!({ "id": id, "active": active })
        }
        UserCommands::Save {
            id,
            first_name,
            last_name,
            email,
            national_id,
            avatar_uri,
            password,
            password_confirmation,
        } => {
            let form = ProfileForm {
                first_name,
                last_name,
                email,
                national_id,
                avatar_uri,
                password,
                password_confirmation,
            };
            user_json(reconciler.save_profile(id, &form).await?)?
        }
        UserCommands::Delete { id } => {
            reconciler.delete(id).await?;
            json!({ "deleted": id })
        }
        UserCommands::Refresh { id } => user_json(reconciler.refresh_user(id).await?)?,
    };

    Ok(value)
}

/// Rows without an avatar are shown with the placeholder image.
fn with_display_avatar(user: &mut UserRecord) {
    if user.avatar_uri.as_deref().is_none_or(str::is_empty) {
        user.avatar_uri = Some(user.avatar_or_placeholder().to_string());
    }
}

fn user_json(mut user: UserRecord) -> Result<Value> {
    with_display_avatar(&mut user);
    Ok(serde_json::to_value(user)?)
}

fn session_json(state: &ud_core::SessionState) -> Result<Value> {
    let mut value = serde_json::to_value(state)?;
    if let Value::Object(ref mut map) = value {
        map.insert("mode".to_string(), serde_json::to_value(state.mode())?);
    }
    Ok(value)
}
