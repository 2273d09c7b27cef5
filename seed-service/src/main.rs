mod schema;
mod models;
mod seeder;

use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use diesel::PgConnection;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use diesel::Connection;
use diesel_async::{AsyncConnection, AsyncPgConnection};
use shared::*;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "seed-service", about = "Populate the retail schema with synthetic data")]
struct Args {
    #[arg(long, env = "HOST")]
    host: String,

    #[arg(long, env = "DB")]
    db: String,

    #[arg(long, env = "USER")]
    user: String,

    #[arg(long, env = "PASSWORD", hide_env_values = true)]
    password: String,

    #[arg(long, env = "PORT", default_value = "5432")]
    port: u16,

    /// Create the tables from the embedded migrations before seeding
    #[arg(long)]
    migrate: bool,
}

impl Args {
    /// libpq-style `key=value` connection string.
    fn conninfo(&self) -> String {
        format!(
            "host={} port={} dbname={} user={} password={}",
            quote(&self.host),
            self.port,
            quote(&self.db),
            quote(&self.user),
            quote(&self.password)
        )
    }
}

fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let args = Args::parse();
    let conninfo = args.conninfo();

    let conn = match AsyncPgConnection::establish(&conninfo).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("Database connection failed: {}", e);
            std::process::exit(1);
        }
    };
    info!("Connected to {} on {}:{}", args.db, args.host, args.port);

    if args.migrate {
        info!("Running database migrations...");
        let mut sync_conn = PgConnection::establish(&conninfo)?;
        sync_conn.run_pending_migrations(MIGRATIONS).map_err(|e| anyhow::anyhow!("Migration error: {}", e))?;
        info!("Migrations completed successfully");
    }

    let mut generator = DataGenerator::new(SEED, Utc::now())?;
    let mut seeder = seeder::Seeder::new(conn);
    info!("Generating data with seed {} anchored at {}", SEED, generator.anchor());

    let reference = generator.reference_data(NUM_STORES, NUM_PRODUCTS, NUM_CUSTOMERS);
    let reference_report = seeder.seed_reference_data(&reference).await?;

    let purchases = (0..NUM_TRANSACTIONS)
        .map(|i| generator.transaction(i, &reference))
        .collect::<Result<Vec<_>>>()?;
    let purchase_report = seeder.seed_purchases(purchases).await?;

    seeder.close();

    let report = reference_report.merge(purchase_report);
    info!(
        "Seeding finished: {} stores, {} products, {} customers, {} transactions, {} transaction items inserted",
        report.stores, report.products, report.customers, report.transactions, report.transaction_items
    );

    Ok(())
}
