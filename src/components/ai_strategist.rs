use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::gemini::{self, Content, GeminiError, GenerateContentRequest, Tool};
use crate::models::{ChatMessage, ChatRole};

const SYSTEM_PROMPT: &str = "You are the lead strategist at NodeForge, a studio that designs \
and ships decentralised products: protocols, wallets, DeFi front-ends and on-chain brand \
experiences. Answer in at most four short paragraphs, concrete and practical, and ground \
claims about the current market in search results.";

const FALLBACK_REPLY: &str = "Our strategy node is offline right now. Try again in a moment \
or reach the team through the contact section below.";

const GREETING: &str = "Ask me about tokenomics, L2 choices, wallet UX or launch strategy.";

pub fn strategist_request(history: &[ChatMessage]) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: history
            .iter()
            .map(|message| Content::text(Some(message.role.as_str()), message.text.clone()))
            .collect(),
        system_instruction: Some(Content::text(None, SYSTEM_PROMPT)),
        tools: vec![Tool::GoogleSearch {}],
    }
}

async fn ask_strategist(history: Vec<ChatMessage>) -> Result<ChatMessage, GeminiError> {
    let response = gemini::generate(&strategist_request(&history)).await?;
    let text = response.text().ok_or(GeminiError::EmptyResponse)?;
    Ok(ChatMessage::model(text, response.sources()))
}

pub enum StrategistMsg {
    SetDraft(String),
    Submit,
    Reply(ChatMessage),
}

pub struct AiStrategist {
    messages: Vec<ChatMessage>,
    draft: String,
    thinking: bool,
}

impl Component for AiStrategist {
    type Message = StrategistMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            messages: Vec::new(),
            draft: String::new(),
            thinking: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            StrategistMsg::SetDraft(draft) => {
                self.draft = draft;
                true
            }
            StrategistMsg::Submit => {
                let question = self.draft.trim().to_string();
                if question.is_empty() || self.thinking {
                    return false;
                }
                self.messages.push(ChatMessage::user(question));
                self.draft.clear();
                self.thinking = true;

                let history = self.messages.clone();
                ctx.link().send_future(async move {
                    match ask_strategist(history).await {
                        Ok(reply) => StrategistMsg::Reply(reply),
                        Err(e) => {
                            gloo_console::error!(format!("Strategist request failed: {}", e));
                            StrategistMsg::Reply(ChatMessage::model(FALLBACK_REPLY, Vec::new()))
                        }
                    }
                });
                true
            }
            StrategistMsg::Reply(reply) => {
                self.messages.push(reply);
                self.thinking = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            StrategistMsg::SetDraft(input.value())
        });
        let onkeydown = ctx.link().batch_callback(|e: KeyboardEvent| {
            (e.key() == "Enter").then_some(StrategistMsg::Submit)
        });
        let onsubmit = ctx.link().callback(|_| StrategistMsg::Submit);

        html! {
            <section class="strategist" id="strategist">
                <div class="strategist-header">
                    <span class="section-kicker">{"04 / AI STRATEGIST"}</span>
                    <h2>{"Consult the "}<span class="accent">{"Oracle"}</span></h2>
                </div>
                <div class="strategist-log">
                    if self.messages.is_empty() {
                        <p class="strategist-greeting">{ GREETING }</p>
                    }
                    { for self.messages.iter().map(render_message) }
                    if self.thinking {
                        <p class="strategist-thinking">{"PROCESSING BLOCKS..."}</p>
                    }
                </div>
                <div class="strategist-input">
                    <input
                        type="text"
                        placeholder="Ask about your protocol..."
                        value={self.draft.clone()}
                        disabled={self.thinking}
                        {oninput}
                        {onkeydown}
                    />
                    <button onclick={onsubmit} disabled={self.thinking}>
                        {"Transmit"}
                    </button>
                </div>
            </section>
        }
    }
}

fn render_message(message: &ChatMessage) -> Html {
    let class = match message.role {
        ChatRole::User => "chat-message from-user",
        ChatRole::Model => "chat-message from-model",
    };
    html! {
        <div class={class}>
            <p>{ &message.text }</p>
            if !message.sources.is_empty() {
                <ul class="chat-sources">
                    { for message.sources.iter().map(|source| html! {
                        <li>
                            <a href={source.uri.clone()} target="_blank" rel="noopener noreferrer">
                                { &source.title }
                            </a>
                        </li>
                    }) }
                </ul>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_replays_history_with_roles() {
        let history = vec![
            ChatMessage::user("Which L2 for a game?"),
            ChatMessage::model("Depends on throughput.", Vec::new()),
            ChatMessage::user("We expect 50 tx/s."),
        ];

        let request = strategist_request(&history);
        let roles: Vec<_> = request
            .contents
            .iter()
            .map(|content| content.role.as_deref())
            .collect();
        assert_eq!(roles, vec![Some("user"), Some("model"), Some("user")]);
        assert_eq!(
            request.contents[2].parts[0].text.as_deref(),
            Some("We expect 50 tx/s.")
        );
        assert!(request.system_instruction.is_some());
        assert_eq!(request.tools.len(), 1);
    }
}
