//! Offline prompt preview - shows what would be sent to the endpoint

use gemini_translator::core::{agent::AgentIdentity, languages, prompt};

fn main() {
    let agent = AgentIdentity::translator();

    println!("=== Prompt preview ===");
    println!("\nAgent: {}", agent.name);
    println!("System instructions:\n{}\n", agent.instructions);

    let cases = [
        ("Hello, how are you?", "auto", "Spanish"),
        ("Bonjour le monde", "French", "English"),
        ("", "auto", "German"),
        ("Good morning", "Japanese", "Japanese"),
        ("Good morning", "English", "Klingon"),
    ];

    for (text, from, to) in cases {
        println!("--- text={:?} from={} to={} ---", text, from, to);

        let source = match languages::resolve(from) {
            Some(lang) => lang,
            None => {
                println!("⚠️  Unsupported source language: {}\n", from);
                continue;
            }
        };
        let target = match languages::resolve(to) {
            Some(lang) => lang,
            None => {
                println!("⚠️  Unsupported target language: {}\n", to);
                continue;
            }
        };

        match prompt::build_prompt(text, source, target) {
            Ok(user_prompt) => println!("{}\n", user_prompt),
            Err(e) => println!("⚠️  {}\n", e),
        }
    }

    println!("=== Preview complete ===");
}
