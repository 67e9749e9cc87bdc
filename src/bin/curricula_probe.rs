//! curricula-probe — API key and quota diagnostic
//!
//! Sends one minimal generation request and reports whether the configured
//! key can generate right now, with a hint per failure class. Exit code 0
//! when the key works, 1 otherwise.

use curricula::CurriculaError;
use curricula::llm::{API_KEY_ENV, DEFAULT_MODEL, GeminiClient, TextGenerator};
use curricula::types::GenerationRequest;

/// The placeholder value shipped in `.env` templates.
const PLACEHOLDER_KEY: &str = "your_gemini_api_key_here";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    dotenvy::dotenv().ok();

    let ok = probe().await;
    std::process::exit(if ok { 0 } else { 1 });
}

async fn probe() -> bool {
    println!("{}", "=".repeat(60));
    println!(
        "Gemini API quota check (curricula {})",
        curricula::version::version_string()
    );
    println!("{}", "=".repeat(60));

    let api_key = match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.trim().is_empty() && key != PLACEHOLDER_KEY => key,
        _ => {
            println!("{API_KEY_ENV} is not configured (.env file or environment)");
            println!("  Get a key: https://aistudio.google.com/apikey");
            return false;
        }
    };
    println!("API key loaded: {}", mask_key(&api_key));

    let client = match GeminiClient::new(api_key, DEFAULT_MODEL) {
        Ok(client) => client,
        Err(e) => {
            println!("Client setup failed: {e}");
            return false;
        }
    };

    println!();
    println!("Testing the API with a minimal request...");
    let request = GenerationRequest::new("Reply with just the word 'OK'");
    match client.generate(&request).await {
        Ok(text) => {
            println!("API is working.");
            println!("  Response: {}", text.trim());
            println!();
            println!("Quota is available. Generation calls will go through.");
            println!();
            println!("Free tier limits:");
            println!("  - 15 requests per minute");
            println!("  - 1,500 requests per day");
            println!("  - Monitor usage: https://aistudio.google.com/apikey");
            true
        }
        Err(e) => {
            print_failure(&e);
            false
        }
    }
}

/// Per-class diagnosis with what to do next.
fn print_failure(error: &CurriculaError) {
    println!("API error: {error}");
    println!();
    match error {
        CurriculaError::RateLimited { retry_after } => {
            println!("QUOTA EXCEEDED");
            println!("  The free tier quota for this key is used up.");
            if let Some(delay) = retry_after {
                println!("  The service asks for a {}s wait before retrying.", delay.as_secs());
            }
            println!("  What to do:");
            println!("  1. Wait a few minutes (the per-minute limit resets)");
            println!("  2. Check whether the daily limit is hit (1,500 requests/day)");
            println!("  3. Monitor usage: https://aistudio.google.com/apikey");
        }
        CurriculaError::AuthenticationFailed => {
            println!("INVALID API KEY");
            println!("  The key is not valid or has been revoked.");
            println!("  Get a new key: https://aistudio.google.com/apikey");
        }
        CurriculaError::ModelNotFound(model) => {
            println!("MODEL NOT FOUND");
            println!("  {model} is not available to this key; the name may have changed.");
        }
        _ => {
            println!("UNKNOWN ERROR");
            println!("  Check the network connection and the key status.");
        }
    }
}

/// Mask a credential for display: first 10 characters, then the last 4.
fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 14 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..10].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}
