//! Auth Config

use clap::Args;

/// Bearer token verification settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Shared secret used to verify HS256 bearer tokens
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,
}
