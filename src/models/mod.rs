pub mod event;
pub mod whatsapp;

pub use event::{parse_event, InboundEvent, MessageContent, ParsedEvent};
