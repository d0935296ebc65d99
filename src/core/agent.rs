//! Fixed agent persona attached to every completion request

/// Immutable agent identity: a name plus the system instructions that define
/// the remote model's behavior. Created once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct AgentIdentity {
    /// Human-readable agent name
    pub name: String,
    /// System instructions sent as the first message of every request
    pub instructions: String,
}

impl AgentIdentity {
    /// Create an agent identity
    pub fn new(name: impl Into<String>, instructions: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instructions: instructions.into(),
        }
    }

    /// The translator persona used for every translation request
    pub fn translator() -> Self {
        Self::new(
            "Translator Agent",
            "You are a professional translator agent. \
             Your task is to accurately and naturally translate text from a given source language to a target language. \
             Maintain the original meaning, tone, and context as much as possible. \
             If the source or target language is not explicitly mentioned or is unclear, assume common languages like English or the most probable language based on the input. \
             Provide only the translated text as your response, without any additional commentary or formatting unless specifically requested.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translator_persona() {
        let agent = AgentIdentity::translator();
        assert_eq!(agent.name, "Translator Agent");
        assert!(agent.instructions.contains("professional translator"));
        assert!(agent.instructions.contains("only the translated text"));
    }
}
