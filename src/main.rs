// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! OAuth2 grants command line
//!
//! Drives the client against the authorization server configured through
//! `OAUTH2_*` environment variables and prints results as JSON.
//!
//! ```bash
//! oauth2-grants authorize-url --redirect-uri https://app.example/cb
//! oauth2-grants password --username ada@example.com --password hunter2
//! oauth2-grants code --redirect-uri https://app.example/cb --code abc123
//! oauth2-grants user --access-token tok123
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use oauth2_grants::{config::Config, AccessToken, OAuth2Client};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "oauth2-grants",
    about = "OAuth2 password and authorization code grant client"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the URL that starts the authorization code flow
    AuthorizeUrl {
        #[arg(long)]
        redirect_uri: String,
    },

    /// Exchange a username and password for an access token
    Password {
        #[arg(long)]
        username: String,
        #[arg(long, env = "OAUTH2_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Exchange an authorization code for an access token
    Code {
        #[arg(long)]
        redirect_uri: String,
        #[arg(long)]
        code: String,
    },

    /// Fetch the user an access token belongs to
    User {
        #[arg(long, env = "OAUTH2_ACCESS_TOKEN", hide_env_values = true)]
        access_token: String,
        #[arg(long, default_value = "Bearer")]
        token_type: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::debug!(server_url = %config.client.server_url, "Configuration loaded");

    let client =
        OAuth2Client::from_config(&config).context("Failed to initialize HTTP transport")?;

    let output = match cli.command {
        Command::AuthorizeUrl { redirect_uri } => {
            println!("{}", client.build_authorization_url(&redirect_uri));
            return Ok(());
        }
        Command::Password { username, password } => {
            let token = client
                .exchange_password_for_token(&username, &password)
                .await?;
            serde_json::to_string_pretty(&token)?
        }
        Command::Code { redirect_uri, code } => {
            let token = client
                .exchange_authorization_code_for_token(&redirect_uri, &code)
                .await?;
            serde_json::to_string_pretty(&token)?
        }
        Command::User {
            access_token,
            token_type,
        } => {
            let token = AccessToken {
                access_token,
                token_type,
                ..Default::default()
            };
            let user = client.fetch_user(&token).await?;
            serde_json::to_string_pretty(&user)?
        }
    };

    println!("{}", output);
    Ok(())
}

/// Initialize structured JSON logging on stderr, keeping stdout for results.
fn init_logging() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("oauth2_grants=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();

    Ok(())
}
