//! CLI administration tool for user-crud.
//!
//! Manages user records directly in the database, without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all users
//! cargo run --bin admin -- user list
//!
//! # Create a user
//! cargo run --bin admin -- user create --name Ana --email ana@x.com --age 30
//!
//! # Delete a user
//! cargo run --bin admin -- user delete 1
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use user_crud::application::services::UserService;
use user_crud::config::mask_connection_string;
use user_crud::domain::entities::UserFields;
use user_crud::infrastructure::persistence::PgUserRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

type Service = UserService<PgUserRepository>;

/// CLI tool for managing user-crud.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// List all users
    List,

    /// Create a user (prompts for missing fields)
    Create {
        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        email: Option<String>,

        #[arg(short, long)]
        age: Option<i32>,
    },

    /// Delete a user by id
    Delete {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &database_url).await?,
    }

    Ok(())
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to migrate")?;

    let repo = Arc::new(PgUserRepository::new(Arc::new(pool.clone())));
    let service = UserService::new(repo);

    match action {
        UserAction::List => list_users(&service).await,
        UserAction::Create { name, email, age } => create_user(&service, name, email, age).await,
        UserAction::Delete { id, yes } => delete_user(&service, id, yes).await,
    }
}

/// Prints all users as a table.
///
/// ```text
///   ID    Name                     Email                          Age
///   ────────────────────────────────────────────────────────────────────
///   1     Ana                      ana@x.com                      30
/// ```
async fn list_users(service: &Service) -> Result<()> {
    println!("{}", "Users".bright_blue().bold());
    println!();

    let users = service
        .list_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<5} {:<24} {:<30} {:<4}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Email".bright_white().bold(),
        "Age".bright_white().bold()
    );
    println!("  {}", "─".repeat(68).bright_black());

    for user in &users {
        println!(
            "  {:<5} {:<24} {:<30} {}",
            user.id.to_string().bright_black(),
            user.name.cyan(),
            user.email,
            user.age
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Creates a user, prompting for any field not given on the command line.
async fn create_user(
    service: &Service,
    name: Option<String>,
    email: Option<String>,
    age: Option<i32>,
) -> Result<()> {
    println!("{}", "Create User".bright_blue().bold());
    println!();

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Name").interact_text()?,
    };
    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let age = match age {
        Some(a) => a,
        None => Input::new().with_prompt("Age").interact_text()?,
    };

    let user = service
        .create(UserFields { name, email, age })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!(
        "{} {}",
        "User created with id".green().bold(),
        user.id.to_string().bright_yellow().bold()
    );
    println!();

    Ok(())
}

/// Deletes a user after confirmation. Unknown ids are reported, not failed.
async fn delete_user(service: &Service, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "Delete User".bright_blue().bold());
    println!();

    let user = match service.get_by_id(id).await {
        Ok(user) => user,
        Err(user_crud::AppError::NotFound { .. }) => {
            println!("{}", "  User does not exist, nothing to delete".yellow());
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("Database error: {}", e)),
    };

    println!("  User:  {}", user.name.cyan());
    println!("  Email: {}", user.email);
    println!("  ID:    {}", user.id.to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this user?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete user: {}", e))?;

    println!("{}", "User deleted".green().bold());
    println!();

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool, database_url: &str) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Database Check".bright_blue().bold());
            println!();
            println!("  URL: {}", mask_connection_string(database_url).bright_black());

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await
                .context("Database query failed")?;

            println!("  {}", "Connection OK".green().bold());
            println!("  {}", version.bright_black());
            println!();
        }
    }

    Ok(())
}
