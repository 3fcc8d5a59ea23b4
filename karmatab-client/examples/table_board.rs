//! Table board demo
//!
//! Reads the store location from the environment (or `.env`), loads the
//! tables and prints the board. Pass a table id to advance its status.
//!
//! ```text
//! KARMATAB_STORE_URL=https://project.supabase.co KARMATAB_STORE_KEY=... \
//!     cargo run -p karmatab-client --example table_board -- 3
//! ```

use karmatab_client::logger::init_logger;
use karmatab_client::{ClientConfig, LoadState, RecordId, TableStatus, TablesController};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());
    init_logger(&level, false, None)?;

    let config = ClientConfig::from_env();
    tracing::info!(store_url = %config.store_url, "Connecting to store");
    let gateway = config.build_gateway()?;

    let mut tables = TablesController::new(gateway);
    tables.load().await;

    match tables.load_state() {
        LoadState::Failed => {
            if let Some(err) = tables.error() {
                eprintln!("Could not load tables: {}", err);
            }
            return Ok(());
        }
        LoadState::Empty => {
            println!("No tables configured");
            return Ok(());
        }
        _ => {}
    }

    if let Some(arg) = std::env::args().nth(1) {
        let id = match arg.parse::<i64>() {
            Ok(n) => RecordId::Int(n),
            Err(_) => RecordId::Text(arg),
        };
        match tables.cycle_table_status(&id).await {
            Ok(status) => println!("Table {} is now {}", id, status.label()),
            Err(err) => eprintln!("{}", err),
        }
    }

    for table in tables.items() {
        println!("{:<16} {}", table.name, table.status.label());
    }
    println!(
        "\n{} available, {} occupied, {} reserved",
        tables.count_with_status(TableStatus::Free),
        tables.count_with_status(TableStatus::Occupied),
        tables.count_with_status(TableStatus::Reserved),
    );
    Ok(())
}
