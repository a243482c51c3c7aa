use serde::{Deserialize, Serialize};

use super::wire::ChatMessage;

pub const TEMPERATURE: f32 = 0.7;

const TITLE_SYSTEM_PROMPT: &str = "You are a professional e-commerce copywriter who \
specialises in product titles. Rewrite the title so it is more attractive, keeps the important \
search keywords and suits a second-hand marketplace listing. Keep it short and lead with the \
main selling point.";

const DESCRIPTION_SYSTEM_PROMPT: &str = "You are a professional e-commerce copywriter who \
specialises in product descriptions. Rewrite the description so it is more attractive and \
persuasive for a second-hand marketplace listing. Highlight the product's features, its \
advantages and the service guarantees offered to the buyer.";

/// Which listing field is being rewritten.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Title,
    Description,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Title => "title",
            FieldKind::Description => "description",
        }
    }

    pub fn max_tokens(&self) -> u32 {
        match self {
            FieldKind::Title => 100,
            FieldKind::Description => 500,
        }
    }

    pub fn system_prompt(&self) -> &'static str {
        match self {
            FieldKind::Title => TITLE_SYSTEM_PROMPT,
            FieldKind::Description => DESCRIPTION_SYSTEM_PROMPT,
        }
    }

    pub fn user_prompt(&self, text: &str) -> String {
        match self {
            FieldKind::Title => {
                format!("Optimize this product title to make it more appealing: {}", text)
            }
            FieldKind::Description => format!(
                "Optimize this product description to make it more appealing and persuasive: {}",
                text
            ),
        }
    }
}

/// System instruction followed by the templated user instruction.
pub fn build_chat_messages(text: &str, kind: FieldKind) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(kind.system_prompt()),
        ChatMessage::user(kind.user_prompt(text)),
    ]
}
