//! Print the Kraken user that owns `TWITCH_ACCESS_TOKEN`.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use twitch_api::{Config, Kraken};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let kraken = Kraken::new(Config::from_env()).context("Failed to create Kraken client")?;
    let me = kraken.get_user(None).await.context("Failed to look up token user")?;
    tracing::debug!(user_id = me.id, "Resolved token user");

    println!("My name is {} (id {})", me.display_name, me.id);
    if !me.bio.is_empty() {
        println!("{}", me.bio);
    }
    Ok(())
}
