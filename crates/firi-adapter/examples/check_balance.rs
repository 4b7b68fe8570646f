/*
[INPUT]:  API_KEY_FIRI environment variable
[OUTPUT]: The authenticated user's balances, pretty-printed as JSON
[POS]:    Examples - minimal read-only client usage
[UPDATE]: When client construction or the balances endpoint changes
*/

use firi_adapter::{ClientConfig, FiriClient};
use std::time::Duration;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let Ok(token) = std::env::var("API_KEY_FIRI") else {
        eprintln!("Set API_KEY_FIRI with your Firi API key before running this example.");
        std::process::exit(1);
    };

    let config = ClientConfig {
        rate_limit: Duration::from_millis(300),
        ..ClientConfig::default()
    };
    let client = match FiriClient::with_config(&token, config) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("Failed to create client: {err}");
            std::process::exit(1);
        }
    };

    match client.balances().await {
        Ok(balances) => {
            println!(
                "{}",
                serde_json::to_string_pretty(&balances).expect("balances are valid JSON")
            );
        }
        Err(err) => {
            eprintln!("Unable to fetch balances: {err}");
            std::process::exit(1);
        }
    }
    client.close();
}
