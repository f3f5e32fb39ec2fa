use clap::{ArgAction, Subcommand};

#[derive(Subcommand)]
pub enum UserCommands {
    /// List users, refreshing from the remote directory per sync.refresh_policy
    List,

    /// Show one cached user
    Show { id: i64 },

    /// Set a user's status flag
    Toggle {
        id: i64,

        /// New status: true or false
        #[arg(long, action = ArgAction::Set)]
        active: bool,
    },

    /// Create a user, or update one when --id is given
    Save {
        #[arg(long)]
        id: Option<i64>,

        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(long)]
        email: String,

        /// National identity number (DNI)
        #[arg(long)]
        national_id: String,

        #[arg(long)]
        avatar_uri: Option<String>,

        #[arg(long, requires = "password_confirmation")]
        password: Option<String>,

        #[arg(long)]
        password_confirmation: Option<String>,
    },

    /// Remove a user from the cache
    Delete { id: i64 },

    /// Re-fetch one user from the remote directory
    Refresh { id: i64 },
}
