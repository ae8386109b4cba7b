use mongodb::{Client, Database};

use crate::config::AppConfig;
use crate::database::store::LIVE_MATCHES;

const DB_NAME: &str = "cricketdb";

pub async fn get_db_client(config: &AppConfig) -> Database {
    let client = Client::with_uri_str(&config.database_url)
        .await
        .expect("Failed to connect to MongoDB");

    let db = client.database(DB_NAME);

    // Verify database exists by listing collections
    match db.list_collection_names().await {
        Ok(collections) => {
            println!("✅ Connected to database: {}", DB_NAME);
            println!("📂 Collections found: {:?}", collections);

            if !collections.contains(&LIVE_MATCHES.to_string()) {
                println!("⚠️ '{}' collection not found yet, it is created on first insert", LIVE_MATCHES);
            }
        }
        Err(e) => {
            eprintln!("❌ Database '{}' may not exist or is inaccessible: {}", DB_NAME, e);
        }
    }

    db
}
