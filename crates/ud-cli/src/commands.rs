use crate::user_commands::UserCommands;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in, falling back to the cached directory when offline
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Show the current session
    Whoami,

    /// Create an account remotely and cache it
    Register {
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
        password: String,

        #[arg(long)]
        password_confirmation: String,
    },

    /// Cached user directory operations
    Users {
        #[command(subcommand)]
        action: UserCommands,
    },
}
