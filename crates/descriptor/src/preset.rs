use crate::descriptor::{AgentDescriptor, AgentDescriptorBuilder};

/// The stable identifier of the chat agent.
pub const CHAT_AGENT_ID: &str = "chat-agent";

/// The display name of the chat agent.
pub const CHAT_AGENT_NAME: &str = "Chat Agent";

/// The model serving the chat agent, as a `provider/model` pair.
pub const CHAT_AGENT_MODEL: &str = "anthropic/claude-sonnet-4-20250514";

/// Returns the descriptor of the entertainment chat agent.
///
/// The instructions ask the model to chat casually in Japanese with a
/// friendly, concise tone. Every call returns an identical record; the
/// host process is expected to build it once at startup and hand it to
/// the agent runtime for the rest of the process lifetime.
pub fn chat_agent() -> AgentDescriptor {
    let descriptor = AgentDescriptorBuilder::with_id(CHAT_AGENT_ID)
        .with_name(CHAT_AGENT_NAME)
        .with_instructions(include_str!("./instructions.md"))
        .with_model(CHAT_AGENT_MODEL)
        .build()
        .expect("preset fields are statically non-empty");
    debug!("constructed `{}` descriptor", descriptor.id());
    descriptor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_fields() {
        let descriptor = chat_agent();
        assert_eq!(descriptor.id(), CHAT_AGENT_ID);
        assert_eq!(descriptor.name(), CHAT_AGENT_NAME);
        assert_eq!(descriptor.model(), CHAT_AGENT_MODEL);
        assert!(!descriptor.instructions().is_empty());
        assert!(descriptor.instructions().contains("チャットボット"));
    }

    #[test]
    fn test_preset_is_idempotent() {
        assert_eq!(chat_agent(), chat_agent());
    }
}
