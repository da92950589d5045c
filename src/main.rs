use anyhow::Context;
use chrono::Utc;
use chrono_humanize::HumanTime;
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;
use wanikani_api::config::Config;
use wanikani_api::CredentialStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("invalid configuration")?;
    let credentials = CredentialStore::from_config(&config)?;
    let client = credentials.client(&config.wanikani_base_url)?;

    let (user, summary) = tokio::try_join!(client.user().get(), client.summary().get())?;
    println!("Welcome, {}!", user.data.username);

    let now = Utc::now();
    println!(
        "{} lessons and {} reviews available",
        summary.data.lessons_available(now),
        summary.data.reviews_available(now),
    );
    match summary.data.next_reviews_at {
        Some(next_reviews_at) if next_reviews_at > now => {
            println!("Next reviews {}", HumanTime::from(next_reviews_at - now));
        }
        Some(_) => println!("Reviews are waiting"),
        None => println!("No reviews scheduled"),
    }

    Ok(())
}
