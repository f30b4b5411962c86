//! Migration CLI tool.

use sea_orm_migration::prelude::*;

mod m20250801_000001_create_users;
mod m20250801_000002_create_posts;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_create_users::Migration),
            Box::new(m20250801_000002_create_posts::Migration),
        ]
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    cli::run_cli(Migrator).await;
}
