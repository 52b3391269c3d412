use serde::{Deserialize, Serialize};

pub const MESSAGING_PRODUCT: &str = "whatsapp";

// Inbound webhook shapes. Every field is optional so that a missing piece is
// reported by name instead of failing the whole deserialization.

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Text,
    Interactive,
    #[serde(other)]
    #[default]
    Unsupported,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WebhookVerification {
    #[serde(rename = "hub.mode")]
    pub hub_mode: Option<String>,
    #[serde(rename = "hub.verify_token")]
    pub hub_verify_token: Option<String>,
    #[serde(rename = "hub.challenge")]
    pub hub_challenge: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct TextContent {
    pub body: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ListReply {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Interactive {
    #[serde(rename = "type")]
    pub r#type: Option<String>,
    pub list_reply: Option<ListReply>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Message {
    pub from: Option<String>,
    pub id: Option<String>,
    pub timestamp: Option<String>,
    #[serde(rename = "type")]
    pub message_type: Option<MessageType>,
    pub text: Option<TextContent>,
    pub interactive: Option<Interactive>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Metadata {
    pub display_phone_number: Option<String>,
    pub phone_number_id: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Value {
    pub messaging_product: Option<String>,
    pub metadata: Option<Metadata>,
    pub messages: Option<Vec<Message>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Change {
    pub value: Option<Value>,
    pub field: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Entry {
    pub id: Option<String>,
    pub changes: Option<Vec<Change>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WebhookPayload {
    pub object: Option<String>,
    pub entry: Option<Vec<Entry>>,
}

// Outbound message requests

#[derive(Debug, Serialize, Clone)]
pub struct Text {
    pub body: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct TextMessageRequest {
    pub messaging_product: String,
    pub to: String,
    #[serde(rename = "type")]
    pub message_type: String,
    pub text: Text,
}

impl TextMessageRequest {
    pub fn new(to: &str, body: &str) -> Self {
        Self {
            messaging_product: MESSAGING_PRODUCT.to_string(),
            to: to.to_string(),
            message_type: "text".to_string(),
            text: Text { body: body.to_string() },
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct DocumentMedia {
    pub link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Serialize, Clone)]
pub struct DocumentMessageRequest {
    pub messaging_product: String,
    pub to: String,
    #[serde(rename = "type")]
    pub message_type: String,
    pub document: DocumentMedia,
}

impl DocumentMessageRequest {
    pub fn new(to: &str, document: DocumentMedia) -> Self {
        Self {
            messaging_product: MESSAGING_PRODUCT.to_string(),
            to: to.to_string(),
            message_type: "document".to_string(),
            document,
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct Row {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Clone)]
pub struct Section {
    pub title: String,
    pub rows: Vec<Row>,
}

#[derive(Debug, Serialize, Clone)]
pub struct Action {
    pub button: String,
    pub sections: Vec<Section>,
}

impl Action {
    pub fn new_for_list(button_text: &str, sections: Vec<Section>) -> Self {
        Self {
            button: button_text.to_string(),
            sections,
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct InteractiveBody {
    pub text: String,
}

impl InteractiveBody {
    pub fn new(text: &str) -> Self {
        Self { text: text.to_string() }
    }
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "lowercase")]
pub enum InteractiveType {
    List,
}

#[derive(Debug, Serialize, Clone)]
pub struct InteractiveMessage {
    #[serde(rename = "type")]
    pub r#type: InteractiveType,
    pub body: InteractiveBody,
    pub action: Action,
}

impl InteractiveMessage {
    pub fn new_for_list(body: InteractiveBody, action: Action) -> Self {
        Self { r#type: InteractiveType::List, body, action }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct InteractiveMessageRequest {
    pub messaging_product: String,
    pub to: String,
    #[serde(rename = "type")]
    pub message_type: String,
    pub interactive: InteractiveMessage,
}

impl InteractiveMessageRequest {
    pub fn new(to: &str, interactive: InteractiveMessage) -> Self {
        Self {
            messaging_product: MESSAGING_PRODUCT.to_string(),
            to: to.to_string(),
            message_type: "interactive".to_string(),
            interactive,
        }
    }
}

// Graph API response for a successful send

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SentContact {
    #[serde(default)]
    pub input: String,
    #[serde(default)]
    pub wa_id: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SentMessage {
    #[serde(default)]
    pub id: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SendMessageResponse {
    #[serde(default)]
    pub messaging_product: String,
    #[serde(default)]
    pub contacts: Vec<SentContact>,
    #[serde(default)]
    pub messages: Vec<SentMessage>,
}

impl SendMessageResponse {
    pub fn message_id(&self) -> Option<&str> {
        self.messages.first().map(|m| m.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_request_shape() {
        let request = TextMessageRequest::new("15551234567", "hello");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "messaging_product": "whatsapp",
                "to": "15551234567",
                "type": "text",
                "text": { "body": "hello" }
            })
        );
    }

    #[test]
    fn test_document_request_omits_missing_filename() {
        let request = DocumentMessageRequest::new(
            "15551234567",
            DocumentMedia {
                link: "https://example.com/a.pdf".into(),
                filename: None,
                caption: None,
            },
        );
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["type"], "document");
        assert_eq!(value["document"], json!({ "link": "https://example.com/a.pdf" }));
    }

    #[test]
    fn test_unknown_message_type_is_unsupported() {
        let message: Message = serde_json::from_value(json!({
            "from": "1",
            "type": "sticker"
        }))
        .unwrap();
        assert_eq!(message.message_type, Some(MessageType::Unsupported));
    }

    #[test]
    fn test_send_response_tolerates_missing_fields() {
        let response: SendMessageResponse = serde_json::from_value(json!({
            "messages": [{ "id": "wamid.abc" }]
        }))
        .unwrap();
        assert_eq!(response.message_id(), Some("wamid.abc"));
        assert!(response.contacts.is_empty());
    }
}
