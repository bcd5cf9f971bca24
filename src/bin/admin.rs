//! CLI administration tool for roster-api.
//!
//! Inspects the database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply migrations
//! cargo run --bin admin -- db migrate
//!
//! # List users / courses (same clamping as the HTTP listing)
//! cargo run --bin admin -- users list --start 0 --count 5
//! cargo run --bin admin -- courses list
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server (`DATABASE_URL` or `DB_*`).

use roster_api::config::{load_from_env, mask_connection_string};
use roster_api::domain::pagination::Page;
use roster_api::domain::repositories::{CourseRepository, HealthRepository, UserRepository};
use roster_api::infrastructure::persistence::{
    PgCourseRepository, PgHealthRepository, PgUserRepository,
};
use roster_api::server;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing roster-api.
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
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Inspect users
    Users {
        #[command(subcommand)]
        action: ListAction,
    },

    /// Inspect courses
    Courses {
        #[command(subcommand)]
        action: ListAction,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[derive(Subcommand)]
enum ListAction {
    /// List one page of records
    List(PageArgs),
}

#[derive(Args)]
struct PageArgs {
    /// Offset of the first record
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    start: i64,

    /// Number of records (1-10; anything else means 10)
    #[arg(long, default_value_t = 10, allow_hyphen_values = true)]
    count: i64,
}

impl PageArgs {
    fn page(&self) -> Page {
        Page::clamped(self.start, self.count)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_from_env()?;

    println!(
        "{} {}",
        "Database:".dimmed(),
        mask_connection_string(&config.database_url)
    );
    let pool = server::connect(&config).await?;

    match cli.command {
        Commands::Db { action } => match action {
            DbAction::Check => db_check(pool).await?,
            DbAction::Migrate => db_migrate(&pool).await?,
        },
        Commands::Users {
            action: ListAction::List(args),
        } => list_users(pool, args.page()).await?,
        Commands::Courses {
            action: ListAction::List(args),
        } => list_courses(pool, args.page()).await?,
    }

    Ok(())
}

async fn db_check(pool: PgPool) -> Result<()> {
    let probe = PgHealthRepository::new(Arc::new(pool));
    match probe.ping().await {
        Ok(()) => println!("{}", "✓ Database connection OK".green().bold()),
        Err(e) => {
            println!("{} {}", "✗ Database check failed:".red().bold(), e);
            anyhow::bail!("database check failed");
        }
    }
    Ok(())
}

async fn db_migrate(pool: &PgPool) -> Result<()> {
    server::migrate(pool).await?;
    println!("{}", "✓ Migrations applied".green().bold());
    Ok(())
}

async fn list_users(pool: PgPool, page: Page) -> Result<()> {
    let repository = PgUserRepository::new(Arc::new(pool));
    let users = repository.list(page).await?;

    print_page_header("Users", page, users.len());
    for user in users {
        println!(
            "  {:>6}  {}  {}",
            user.id.to_string().cyan(),
            user.name.bold(),
            user.email.unwrap_or_default().dimmed()
        );
    }
    Ok(())
}

async fn list_courses(pool: PgPool, page: Page) -> Result<()> {
    let repository = PgCourseRepository::new(Arc::new(pool));
    let courses = repository.list(page).await?;

    print_page_header("Courses", page, courses.len());
    for course in courses {
        println!(
            "  {:>6}  {}  {}",
            course.id.to_string().cyan(),
            course.name.bold(),
            course.description.unwrap_or_default().dimmed()
        );
    }
    Ok(())
}

fn print_page_header(title: &str, page: Page, found: usize) {
    println!(
        "{} {} (start={}, count={})",
        title.bold().underline(),
        format!("{found} found").yellow(),
        page.start(),
        page.count()
    );
}
