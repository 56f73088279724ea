#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Notification dispatch server

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use quizmaster_notify::{
    domain::notifications::NotificationServiceImpl,
    infrastructure::{
        db::postgres::{DatabaseConnectionDetails, PostgresDatabase},
        email::resend::{ResendConfig, ResendMailer},
        http::{HttpServer, HttpServerConfig},
        identity::api::{HttpIdentityProvider, IdentityConfig},
    },
};

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The HTTP server configuration
    #[clap(flatten)]
    pub server: HttpServerConfig,

    /// The database connection details
    #[clap(flatten)]
    pub db: DatabaseConnectionDetails,

    /// The identity service configuration
    #[clap(flatten)]
    pub identity: IdentityConfig,

    /// The email provider configuration
    #[clap(flatten)]
    pub resend: ResendConfig,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let postgres = Arc::new(PostgresDatabase::new(&args.db.connection_string).await?);
    let identity = Arc::new(HttpIdentityProvider::new(args.identity));
    let mailer = Arc::new(ResendMailer::new(args.resend));

    let notifications = NotificationServiceImpl::new(identity, postgres, mailer);

    HttpServer::new(notifications, args.server).await?.run().await
}
