//! CLI command definitions and handlers

use clap::Subcommand;

/// Commands for Gemini Translator
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate a piece of text
    Translate {
        /// Text to translate
        text: String,

        /// Source language (auto-detect if not specified)
        #[arg(long, default_value = "auto")]
        from: String,

        /// Target language (default: English)
        #[arg(long, default_value = "English")]
        to: String,
    },

    /// List supported languages
    Languages,

    /// Start HTTP API server
    Serve {
        /// Bind address (default: 0.0.0.0)
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Listen port (default: 8000)
        #[arg(short, long, default_value_t = 8000)]
        port: u16,

        /// Enable debug mode
        #[arg(long)]
        debug: bool,
    },
}

/// Handle one-shot translation command
pub async fn handle_translate(text: String, from: String, to: String) -> anyhow::Result<()> {
    use indicatif::{ProgressBar, ProgressStyle};
    use std::time::{Duration, Instant};
    use tracing::info;

    use crate::core::client::CompletionClient;
    use crate::core::languages;
    use crate::core::models::TranslationRequest;
    use crate::core::prompt;

    let source = match languages::resolve(&from) {
        Some(lang) => lang,
        None => {
            println!("⚠️  Unsupported source language: {}", from);
            return Ok(());
        }
    };

    let target = match languages::resolve(&to) {
        Some(lang) => lang,
        None => {
            println!("⚠️  Unsupported target language: {}", to);
            return Ok(());
        }
    };

    // Validate before creating the client so warnings render without the
    // spinner flashing.
    if let Err(e) = prompt::build_prompt(&text, source, target) {
        println!("⚠️  {}", e);
        return Ok(());
    }

    let client = CompletionClient::from_env()?;

    let request = TranslationRequest::new(text, target.to_string()).with_source_lang(source);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    spinner.set_message("Translating...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let start_time = Instant::now();
    let result = client.translate(&request).await;
    spinner.finish_and_clear();

    match result {
        Ok(translation) => {
            info!(
                "Translated in {:?} using {}",
                start_time.elapsed(),
                translation.model_used
            );
            println!("✅ Translation complete:");
            println!("{}", translation.text);
            Ok(())
        }
        Err(e) if e.is_warning() => {
            println!("⚠️  {}", e);
            Ok(())
        }
        Err(e) => {
            info!("Translation failed ({:?}): {}", e.reason(), e);
            println!("❌ Could not get a translation. Please try again.");
            Err(e.into())
        }
    }
}

/// Handle language listing command
pub fn handle_languages() {
    use crate::core::languages;

    println!("Supported languages:");
    for (label, code) in languages::entries() {
        println!("   {:<22} {}", label, code);
    }
}

/// Handle server command
pub async fn handle_serve(host: String, port: u16, debug: bool) -> anyhow::Result<()> {
    use crate::server::api::run_server;
    use tracing::info;

    if debug {
        std::env::set_var("RUST_LOG", "debug");
    }

    info!("Starting HTTP server on {}:{}", host, port);
    println!("🚀 Server starting on http://{}:{}", host, port);

    run_server(host, port).await?;

    Ok(())
}
