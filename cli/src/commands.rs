use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{info, warn};

use chat_auth_application::error::AppResult;
use domain::forms::{SignInForm, SignUpForm};

use crate::bootstrap::state::AppState;

#[derive(Debug, Parser)]
#[command(name = "chat-auth", version, about = "Sign in to or create a chat account")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in with email and password.
    SignIn {
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Create an account and its profile.
    SignUp {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
        #[arg(long, default_value = "")]
        confirm_password: String,
        /// Profile picture; any format the decoder understands.
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// Show the locally cached session.
    Session,
    /// Forget the locally cached session.
    SignOut,
}

impl Command {
    pub fn image_path(&self) -> Option<PathBuf> {
        match self {
            Self::SignUp { image, .. } => image.clone(),
            _ => None,
        }
    }
}

pub async fn run(command: Command, state: &AppState) -> AppResult<()> {
    match command {
        Command::SignIn { email, password } => {
            let session = state
                .auth_flow
                .sign_in(SignInForm::new(&email, &password))
                .await?;
            info!(user_id = %session.user_id, name = %session.name, "Welcome back");
        }
        Command::SignUp {
            name,
            email,
            password,
            confirm_password,
            image,
        } => {
            let avatar = state.image_capture.capture_profile_image().await;
            if avatar.is_none() && image.is_some() {
                warn!("Profile image could not be used");
            }

            let form =
                SignUpForm::new(&name, &email, &password, &confirm_password).with_avatar(avatar);
            let session = state.auth_flow.sign_up(form).await?;
            info!(user_id = %session.user_id, name = %session.name, "Account created");
        }
        Command::Session => {
            let session = state.session.current()?;
            if session.signed_in {
                info!(
                    user_id = %session.user_id,
                    name = %session.name,
                    image_chars = session.image.len(),
                    "Signed in"
                );
            } else {
                info!("Not signed in");
            }
        }
        Command::SignOut => {
            state.session.sign_out()?;
            info!("Signed out");
        }
    }

    Ok(())
}
