use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sleep {
    Great,
    Ok,
    Bad,
    Nightmare,
}

impl Sleep {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "great" => Some(Self::Great),
            "ok" => Some(Self::Ok),
            "bad" => Some(Self::Bad),
            "nightmare" => Some(Self::Nightmare),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Great => "great",
            Self::Ok => "ok",
            Self::Bad => "bad",
            Self::Nightmare => "nightmare",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Great => "😊",
            Self::Ok => "😐",
            Self::Bad => "😞",
            Self::Nightmare => "😱",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Great => "Great",
            Self::Ok => "OK",
            Self::Bad => "Bad",
            Self::Nightmare => "Nightmare",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ritual {
    Coffee,
    Learning,
    Working,
    Fruit,
}

impl Ritual {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "coffee" => Some(Self::Coffee),
            "learning" => Some(Self::Learning),
            "working" => Some(Self::Working),
            "fruit" => Some(Self::Fruit),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Coffee => "coffee",
            Self::Learning => "learning",
            Self::Working => "working",
            Self::Fruit => "fruit",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Coffee => "☕",
            Self::Learning => "📚",
            Self::Working => "🔨",
            Self::Fruit => "🍓",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Coffee => "Coffee",
            Self::Learning => "Learning",
            Self::Working => "Working",
            Self::Fruit => "Fruit",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DateRequest {
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct SleepRequest {
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct RitualRequest {
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct EmojiRequest {
    pub emoji: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SelectionResponse {
    pub date: Option<String>,
    pub sleep: Option<String>,
    pub rituals: Vec<String>,
    pub custom_emojis: Vec<String>,
    pub shareable: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
