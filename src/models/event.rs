use crate::error::EventError;
use crate::models::whatsapp::{MessageType, WebhookPayload};

/// What the sender actually sent, reduced to the parts the responder acts on.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageContent {
    Text(String),
    ListSelection(String),
    Unsupported,
}

/// A single inbound message, alive for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct InboundEvent {
    pub from: String,
    /// The business number the platform delivered the event for.
    pub bot_number: String,
    pub message_id: Option<String>,
    pub content: MessageContent,
}

impl InboundEvent {
    pub fn is_self_echo(&self) -> bool {
        self.from == self.bot_number
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParsedEvent {
    Message(InboundEvent),
    /// Status callbacks and other changes that carry no user message.
    NoMessages,
}

/// Extracts the first message of the first change of the first entry.
pub fn parse_event(body: &[u8]) -> Result<ParsedEvent, EventError> {
    let payload: WebhookPayload = serde_json::from_slice(body)?;

    let value = payload
        .entry
        .ok_or(EventError::MissingField("entry"))?
        .into_iter()
        .next()
        .ok_or(EventError::MissingField("entry[0]"))?
        .changes
        .ok_or(EventError::MissingField("entry[0].changes"))?
        .into_iter()
        .next()
        .ok_or(EventError::MissingField("entry[0].changes[0]"))?
        .value
        .ok_or(EventError::MissingField("entry[0].changes[0].value"))?;

    let bot_number = value
        .metadata
        .and_then(|m| m.display_phone_number)
        .ok_or(EventError::MissingField("value.metadata.display_phone_number"))?;

    let message = match value.messages.and_then(|m| m.into_iter().next()) {
        Some(message) => message,
        None => return Ok(ParsedEvent::NoMessages),
    };

    let from = message
        .from
        .ok_or(EventError::MissingField("messages[0].from"))?;
    let message_type = message
        .message_type
        .ok_or(EventError::MissingField("messages[0].type"))?;

    let content = match message_type {
        MessageType::Text => MessageContent::Text(
            message
                .text
                .and_then(|t| t.body)
                .ok_or(EventError::MissingField("messages[0].text.body"))?,
        ),
        MessageType::Interactive => MessageContent::ListSelection(
            message
                .interactive
                .and_then(|i| i.list_reply)
                .and_then(|r| r.id)
                .ok_or(EventError::MissingField("messages[0].interactive.list_reply.id"))?,
        ),
        MessageType::Unsupported => MessageContent::Unsupported,
    };

    Ok(ParsedEvent::Message(InboundEvent {
        from,
        bot_number,
        message_id: message.id,
        content,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(messages: serde_json::Value) -> Vec<u8> {
        serde_json::to_vec(&json!({
            "object": "whatsapp_business_account",
            "entry": [{
                "id": "12345",
                "changes": [{
                    "value": {
                        "messaging_product": "whatsapp",
                        "metadata": {
                            "display_phone_number": "16505551111",
                            "phone_number_id": "1234567890"
                        },
                        "messages": messages
                    },
                    "field": "messages"
                }]
            }]
        }))
        .unwrap()
    }

    #[test]
    fn test_text_message_is_extracted() {
        let body = envelope(json!([{
            "from": "15551234567",
            "id": "wamid.1",
            "timestamp": "1678901234",
            "type": "text",
            "text": { "body": "Hello there" }
        }]));

        let parsed = parse_event(&body).unwrap();
        assert_eq!(
            parsed,
            ParsedEvent::Message(InboundEvent {
                from: "15551234567".into(),
                bot_number: "16505551111".into(),
                message_id: Some("wamid.1".into()),
                content: MessageContent::Text("Hello there".into()),
            })
        );
    }

    #[test]
    fn test_list_reply_is_extracted() {
        let body = envelope(json!([{
            "from": "15551234567",
            "type": "interactive",
            "interactive": {
                "type": "list_reply",
                "list_reply": { "id": "service3", "title": "Service 3" }
            }
        }]));

        match parse_event(&body).unwrap() {
            ParsedEvent::Message(event) => {
                assert_eq!(event.content, MessageContent::ListSelection("service3".into()));
                assert!(!event.is_self_echo());
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_missing_entry_is_reported() {
        let err = parse_event(br#"{"object":"whatsapp_business_account"}"#).unwrap_err();
        assert!(matches!(err, EventError::MissingField("entry")));
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let err = parse_event(b"not json").unwrap_err();
        assert!(matches!(err, EventError::InvalidJson(_)));
    }

    #[test]
    fn test_status_callback_has_no_messages() {
        let body = serde_json::to_vec(&json!({
            "entry": [{
                "changes": [{
                    "value": {
                        "metadata": { "display_phone_number": "16505551111" },
                        "statuses": [{ "id": "wamid.1", "status": "delivered" }]
                    }
                }]
            }]
        }))
        .unwrap();
        assert_eq!(parse_event(&body).unwrap(), ParsedEvent::NoMessages);
    }

    #[test]
    fn test_interactive_without_list_reply_is_malformed() {
        let body = envelope(json!([{
            "from": "15551234567",
            "type": "interactive",
            "interactive": {
                "type": "button_reply",
                "button_reply": { "id": "yes", "title": "Yes" }
            }
        }]));
        let err = parse_event(&body).unwrap_err();
        assert!(matches!(err, EventError::MissingField("messages[0].interactive.list_reply.id")));
    }

    #[test]
    fn test_other_types_are_unsupported() {
        let body = envelope(json!([{
            "from": "15551234567",
            "type": "image",
            "image": { "id": "media-1" }
        }]));
        match parse_event(&body).unwrap() {
            ParsedEvent::Message(event) => assert_eq!(event.content, MessageContent::Unsupported),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_self_echo_detection() {
        let body = envelope(json!([{
            "from": "16505551111",
            "type": "text",
            "text": { "body": "hi" }
        }]));
        match parse_event(&body).unwrap() {
            ParsedEvent::Message(event) => assert!(event.is_self_echo()),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}
