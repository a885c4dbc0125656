//! One-shot "what's moving in web3" summary for the ticker strip.

use log::{debug, error, info};

use crate::cursor::PointerClass;
use crate::gemini::{self, Content, GeminiError, GenerateContentRequest, Tool};
use crate::lifecycle::MountToken;

const TREND_PROMPT: &str = "In one short sentence of at most 18 words, summarise the most \
important current trends in decentralised web, DeFi and crypto infrastructure. \
No preamble, no markdown, no quotes.";

pub trait TrendSource {
    async fn fetch_trend_summary(&self) -> Result<String, GeminiError>;
}

/// Asks Gemini, grounded on Google Search so the summary is current.
pub struct GeminiTrends;

impl TrendSource for GeminiTrends {
    async fn fetch_trend_summary(&self) -> Result<String, GeminiError> {
        let response = gemini::generate(&trend_request()).await?;
        response.text().ok_or(GeminiError::EmptyResponse)
    }
}

fn trend_request() -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content::text(Some("user"), TREND_PROMPT)],
        system_instruction: None,
        tools: vec![Tool::GoogleSearch {}],
    }
}

pub fn ticker_text(summary: &str) -> String {
    summary.trim().to_uppercase()
}

/// Fetches once and hands the upper-cased summary to `publish`.
///
/// Coarse-pointer devices never fetch and keep the placeholder. Failures are logged
/// and swallowed the same way. `publish` is skipped if `token` was revoked while the
/// request was in flight.
pub async fn refresh_ticker<S, F>(
    class: PointerClass,
    source: &S,
    token: &MountToken,
    publish: F,
) -> bool
where
    S: TrendSource,
    F: FnOnce(String),
{
    if class == PointerClass::Coarse {
        debug!("Coarse pointer, ticker stays on its placeholder");
        return false;
    }
    match source.fetch_trend_summary().await {
        Ok(summary) => {
            if !token.is_live() {
                debug!("Ticker unmounted before trends arrived, discarding");
                return false;
            }
            let text = ticker_text(&summary);
            info!("Ticker updated with {} characters of trend copy", text.len());
            publish(text);
            true
        }
        Err(err) => {
            error!("Ticker update failed: {}", err);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TICKER_PLACEHOLDER;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    struct Stub {
        result: Result<String, GeminiError>,
        calls: Cell<u32>,
    }

    impl Stub {
        fn new(result: Result<String, GeminiError>) -> Self {
            Self {
                result,
                calls: Cell::new(0),
            }
        }
    }

    impl TrendSource for Stub {
        async fn fetch_trend_summary(&self) -> Result<String, GeminiError> {
            self.calls.set(self.calls.get() + 1);
            self.result.clone()
        }
    }

    fn run_as(class: PointerClass, stub: &Stub, token: &MountToken) -> (bool, String) {
        let slot = RefCell::new(TICKER_PLACEHOLDER.to_string());
        let published = block_on(refresh_ticker(class, stub, token, |text| {
            *slot.borrow_mut() = text
        }));
        (published, slot.into_inner())
    }

    fn run(stub: &Stub, token: &MountToken) -> (bool, String) {
        run_as(PointerClass::Fine, stub, token)
    }

    #[test]
    fn success_is_upper_cased_into_the_slot() {
        let stub = Stub::new(Ok("layer 2 adoption accelerates".to_string()));
        let (published, slot) = run(&stub, &MountToken::new());

        assert!(published);
        assert_eq!(slot, "LAYER 2 ADOPTION ACCELERATES");
        assert_eq!(stub.calls.get(), 1);
    }

    #[test]
    fn failure_keeps_the_placeholder() {
        for err in [
            GeminiError::Request("connection reset".to_string()),
            GeminiError::Status(503),
            GeminiError::EmptyResponse,
            GeminiError::MissingApiKey,
        ] {
            let stub = Stub::new(Err(err));
            let (published, slot) = run(&stub, &MountToken::new());

            assert!(!published);
            assert_eq!(slot, TICKER_PLACEHOLDER);
            assert_eq!(stub.calls.get(), 1);
        }
    }

    #[test]
    fn late_result_after_unmount_is_discarded() {
        let stub = Stub::new(Ok("restaking heats up".to_string()));
        let token = MountToken::new();
        token.revoke();

        let (published, slot) = run(&stub, &token);
        assert!(!published);
        assert_eq!(slot, TICKER_PLACEHOLDER);
    }

    #[test]
    fn coarse_pointer_never_asks_for_trends() {
        let stub = Stub::new(Ok("layer 2 adoption accelerates".to_string()));
        let (published, slot) = run_as(PointerClass::Coarse, &stub, &MountToken::new());

        assert!(!published);
        assert_eq!(stub.calls.get(), 0);
        assert_eq!(slot, TICKER_PLACEHOLDER);
    }

    #[test]
    fn ticker_text_trims() {
        assert_eq!(ticker_text("  zk rollups \n"), "ZK ROLLUPS");
    }

    #[test]
    fn trend_request_is_grounded() {
        let value = serde_json::to_value(trend_request()).unwrap();
        assert!(value.get("tools").is_some());
        assert_eq!(value["contents"][0]["role"], "user");
    }
}
