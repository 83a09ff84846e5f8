use chat_agent_descriptor::{
    AgentDescriptorBuilder, CHAT_AGENT_ID, CHAT_AGENT_MODEL,
    CHAT_AGENT_NAME, chat_agent,
};
use serde_json::Value;

#[test]
fn test_builder_round_matches_preset() {
    let descriptor = AgentDescriptorBuilder::with_id("chat-agent")
        .with_name("Chat Agent")
        .with_instructions(chat_agent().instructions())
        .with_model("anthropic/claude-sonnet-4-20250514")
        .build()
        .unwrap();

    assert_eq!(descriptor, chat_agent());
    assert_eq!(descriptor.id(), CHAT_AGENT_ID);
    assert_eq!(descriptor.name(), CHAT_AGENT_NAME);
    assert_eq!(descriptor.model(), CHAT_AGENT_MODEL);
}

#[test]
fn test_wire_shape_for_the_runtime() {
    let value = serde_json::to_value(chat_agent()).unwrap();

    let Value::Object(fields) = &value else {
        panic!("expected an object, got: {value:?}");
    };
    assert_eq!(fields.len(), 4);
    assert_eq!(fields["id"], "chat-agent");
    assert_eq!(fields["name"], "Chat Agent");
    assert_eq!(fields["model"], "anthropic/claude-sonnet-4-20250514");

    let instructions = fields["instructions"]
        .as_str()
        .expect("instructions should be a string");
    assert!(!instructions.is_empty());
}
