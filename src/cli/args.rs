//! Command-line surface, declared with clap derive.

use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};

/// user-api: minimal user-management backend
#[derive(Parser, Debug)]
#[command(name = "user-api")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Force debug-level logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),

    /// Manage the database schema
    Migrate(MigrateArgs),
}

#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(short = 'H', long, default_value = DEFAULT_SERVER_HOST, env = "SERVER_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_SERVER_PORT, env = "SERVER_PORT")]
    pub port: u16,
}

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Apply pending migrations
    Up,
    /// Roll back the most recent migration
    Down,
    /// List migrations as applied or pending
    Status,
    /// Drop everything and migrate from scratch
    Fresh,
}
