//! Print the token's user, then which of their followed channels are live.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use twitch_api::kraken::{FollowedStreamsQuery, StreamType};
use twitch_api::{Config, Kraken};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let kraken = Kraken::new(Config::from_env()).context("Failed to create Kraken client")?;

    let me = kraken.get_user(None).await.context("Failed to look up token user")?;
    println!("My name is {}", me.name);

    let query = FollowedStreamsQuery {
        stream_type: Some(StreamType::Live),
        ..FollowedStreamsQuery::default()
    };
    let followed = kraken
        .get_followed_streams(&query)
        .await
        .context("Failed to get followed streams")?;

    tracing::debug!(total = followed.total, "Fetched followed streams");

    if followed.streams.is_empty() {
        println!("None of your followed streams are live right now, or you follow none");
        return Ok(());
    }

    println!("\nStreaming now:");
    for (i, stream) in followed.streams.iter().enumerate() {
        println!(
            "\t{}) {} playing {} ({} viewers)",
            i + 1,
            stream.channel.display_name,
            stream.game,
            stream.viewers
        );
    }
    Ok(())
}
