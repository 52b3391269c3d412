//! Keyword classifier for free-text messages.
//!
//! Rules are checked top to bottom against the lower-cased text and the first
//! rule with any keyword contained in the text wins. Matching is plain
//! substring containment, so "this" matches the greeting rule through "hi".

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Text(&'static str),
    /// Answer with the interactive service list instead of text.
    ServiceMenu,
}

struct Rule {
    keywords: &'static [&'static str],
    reply: Reply,
}

pub const GREETING_REPLY: &str = "Hi, how are you? 👋 This is the WhatsApp bot.\n\n\
You can use this chatbot to:\n\
- Ask about our services by typing 'services'\n\
- Get our contact number, email, or address\n\
- Request brochures for services\n\n\
Just type what you want to know or select a service from the menu when prompted!\n\
Or connect to a live agent for assistance.";
pub const NAME_REPLY: &str = "Our company name is Example Company.";
pub const PHONE_REPLY: &str = "📞 You can reach us at +1234567890.";
pub const EMAIL_REPLY: &str = "📧 You can email us at example@example.com.";
pub const WEBSITE_REPLY: &str = "🌐 Check out our website: https://example.com";
pub const ADDRESS_REPLY: &str = "📍 123 Business Street, City, Country.";
pub const HOURS_REPLY: &str =
    "🕒 Our working hours: Monday to Saturday, 08:00 AM - 06:00 PM. Sunday closed.";
pub const FALLBACK_REPLY: &str =
    "This is an automated bot. Please ask about our services, contact, or location.";

const SERVICES_KEYWORD: &str = "services";

// Order is observable behavior: do not reorder.
const RULES: &[Rule] = &[
    Rule { keywords: &["hi", "hello", "hey"], reply: Reply::Text(GREETING_REPLY) },
    Rule { keywords: &["name"], reply: Reply::Text(NAME_REPLY) },
    Rule { keywords: &["phone", "contact number"], reply: Reply::Text(PHONE_REPLY) },
    Rule { keywords: &["email"], reply: Reply::Text(EMAIL_REPLY) },
    Rule { keywords: &["website"], reply: Reply::Text(WEBSITE_REPLY) },
    Rule { keywords: &["address", "location"], reply: Reply::Text(ADDRESS_REPLY) },
    Rule { keywords: &["hours", "working hours"], reply: Reply::Text(HOURS_REPLY) },
    Rule { keywords: &[SERVICES_KEYWORD], reply: Reply::ServiceMenu },
];

/// Entry point for inbound text: any mention of "services" opens the menu
/// before the keyword table is consulted.
pub fn route_text(text: &str) -> Reply {
    if text.to_lowercase().contains(SERVICES_KEYWORD) {
        return Reply::ServiceMenu;
    }
    classify(text)
}

pub fn classify(text: &str) -> Reply {
    let normalized = text.to_lowercase();

    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| normalized.contains(k)))
        .map(|rule| rule.reply)
        .unwrap_or(Reply::Text(FALLBACK_REPLY))
}
