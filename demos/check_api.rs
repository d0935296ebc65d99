//! API connectivity check

use dotenvy::dotenv;
use gemini_translator::core::{client::CompletionClient, config::EndpointConfig};
use gemini_translator::{AgentIdentity, TranslationRequest};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt::init();

    println!("=== API connectivity check ===");

    // Check environment variables
    match std::env::var("GEMINI_API_KEY") {
        Ok(key) => println!("✅ GEMINI_API_KEY is set: {}...", &key[..key.len().min(8)]),
        Err(_) => {
            println!("❌ GEMINI_API_KEY is not set");
            return;
        }
    }

    // Load configuration
    println!("\n--- Loading configuration ---");
    let config = match EndpointConfig::from_env() {
        Ok(cfg) => {
            println!("✅ Configuration loaded");
            println!("   Base URL: {}", cfg.base_url);
            println!("   Model: {}", cfg.model);
            cfg
        }
        Err(e) => {
            println!("❌ Failed to load configuration: {}", e);
            return;
        }
    };

    // Create client
    println!("\n--- Creating completion client ---");
    let client = match CompletionClient::new(config, AgentIdentity::translator()) {
        Ok(c) => {
            println!("✅ Client created");
            c
        }
        Err(e) => {
            println!("❌ Failed to create client: {}", e);
            return;
        }
    };

    // Test a simple translation
    println!("\n--- Testing a simple translation ---");
    let request = TranslationRequest::new("Hello, world!".to_string(), "Spanish".to_string());

    match client.translate(&request).await {
        Ok(result) => {
            println!("✅ Translation succeeded!");
            println!("   Input: {}", request.text);
            println!("   Output: {}", result.text);
            println!("   Model: {}", result.model_used);
            println!("   Tokens used: {}", result.tokens_used);
            if let Some(id) = result.request_id {
                println!("   Request id: {}", id);
            }
        }
        Err(e) => {
            println!("❌ Translation failed: {}", e);
            println!("   Details: {:?}", e);
        }
    }

    println!("\n=== Check complete ===");
}
