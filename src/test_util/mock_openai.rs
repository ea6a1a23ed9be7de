use serde_json::{json, Value};

/// Builders for chat-completion response bodies in the shape the OpenAI API
/// returns them.
pub struct MockChatCompletion;

impl MockChatCompletion {
    /// A completion whose message content is the given JSON object,
    /// serialized the way a json_object-constrained response arrives.
    pub fn json_object(content: &Value) -> Value {
        Self::text(&content.to_string())
    }

    /// A completion with arbitrary text content. Useful for simulating a
    /// model that ignored the JSON constraint.
    pub fn text(content: &str) -> Value {
        json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "created": 1722772800,
            "model": "gpt-4o",
            "choices": [{
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": content
                },
                "finish_reason": "stop"
            }],
            "usage": {
                "prompt_tokens": 420,
                "completion_tokens": 310,
                "total_tokens": 730
            }
        })
    }

    /// A completion whose message carries no content at all.
    pub fn without_content() -> Value {
        json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "created": 1722772800,
            "model": "gpt-4o",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant" },
                "finish_reason": "stop"
            }]
        })
    }

    /// An API-level error body.
    pub fn error_json(message: &str) -> Value {
        json!({
            "error": {
                "message": message,
                "type": "invalid_request_error"
            }
        })
    }
}
