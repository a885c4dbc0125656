#[derive(Clone, Debug, PartialEq)]
pub struct GroundingSource {
    pub title: String,
    pub uri: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Model,
}

impl ChatRole {
    pub fn as_str(self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Model => "model",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    pub sources: Vec<GroundingSource>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
            sources: Vec::new(),
        }
    }

    pub fn model(text: impl Into<String>, sources: Vec<GroundingSource>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
            sources,
        }
    }
}

// Static page content

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub index: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Project {
    pub name: &'static str,
    pub category: &'static str,
    pub summary: &'static str,
    pub metric: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProcessStep {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub handle: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub company: &'static str,
}
