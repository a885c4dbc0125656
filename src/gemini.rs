//! Minimal client for Gemini's `generateContent` REST endpoint.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;
use crate::models::GroundingSource;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum GeminiError {
    #[error("no Gemini API key was configured at build time")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Request(String),
    #[error("service answered with status {0}")]
    Status(u16),
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("response contained no text")]
    EmptyResponse,
}

#[derive(Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn text(role: Option<&str>, text: impl Into<String>) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![Part {
                text: Some(text.into()),
            }],
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Serialize, Debug, Clone)]
pub enum Tool {
    #[serde(rename = "googleSearch")]
    GoogleSearch {},
}

#[derive(Deserialize, Debug, Default)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Deserialize, Debug, Default)]
pub struct GroundingChunk {
    #[serde(default)]
    pub web: Option<WebChunk>,
}

#[derive(Deserialize, Debug, Default)]
pub struct WebChunk {
    pub uri: Option<String>,
    pub title: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, parts joined, or `None` when blank.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        let text = text.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }

    /// Web grounding of the first candidate, deduplicated by URI.
    pub fn sources(&self) -> Vec<GroundingSource> {
        let mut sources: Vec<GroundingSource> = Vec::new();
        let chunks = self
            .candidates
            .first()
            .and_then(|candidate| candidate.grounding_metadata.as_ref())
            .map(|metadata| metadata.grounding_chunks.as_slice())
            .unwrap_or_default();
        for web in chunks.iter().filter_map(|chunk| chunk.web.as_ref()) {
            let Some(uri) = web.uri.as_ref().filter(|uri| !uri.is_empty()) else {
                continue;
            };
            if sources.iter().any(|source| &source.uri == uri) {
                continue;
            }
            sources.push(GroundingSource {
                title: web.title.clone().unwrap_or_else(|| uri.clone()),
                uri: uri.clone(),
            });
        }
        sources
    }
}

pub async fn generate(
    body: &GenerateContentRequest,
) -> Result<GenerateContentResponse, GeminiError> {
    let api_key = config::gemini_api_key().ok_or(GeminiError::MissingApiKey)?;
    let url = config::generate_content_url(config::gemini_model(), api_key);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| GeminiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| GeminiError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(GeminiError::Status(response.status()));
    }

    response
        .json::<GenerateContentResponse>()
        .await
        .map_err(|e| GeminiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(value).expect("valid response json")
    }

    #[test]
    fn request_serializes_in_rest_shape() {
        let request = GenerateContentRequest {
            contents: vec![Content::text(Some("user"), "hello")],
            system_instruction: Some(Content::text(None, "be brief")),
            tools: vec![Tool::GoogleSearch {}],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "contents": [{ "role": "user", "parts": [{ "text": "hello" }] }],
                "systemInstruction": { "parts": [{ "text": "be brief" }] },
                "tools": [{ "googleSearch": {} }]
            })
        );
    }

    #[test]
    fn optional_fields_are_left_out() {
        let request = GenerateContentRequest {
            contents: vec![Content::text(None, "hi")],
            ..Default::default()
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({ "contents": [{ "parts": [{ "text": "hi" }] }] }));
    }

    #[test]
    fn text_joins_parts_of_first_candidate() {
        let response = parse(json!({
            "candidates": [
                { "content": { "role": "model", "parts": [{ "text": "  Restaking " }, { "text": "is back. " }] } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }));
        assert_eq!(response.text().as_deref(), Some("Restaking is back."));
    }

    #[test]
    fn blank_or_missing_text_is_none() {
        assert_eq!(parse(json!({})).text(), None);
        assert_eq!(parse(json!({ "candidates": [{}] })).text(), None);
        assert_eq!(
            parse(json!({ "candidates": [{ "content": { "parts": [{ "text": "  " }] } }] })).text(),
            None
        );
    }

    #[test]
    fn sources_are_deduplicated_by_uri() {
        let response = parse(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "x" }] },
                "groundingMetadata": {
                    "groundingChunks": [
                        { "web": { "uri": "https://a.example", "title": "A" } },
                        { "web": { "uri": "https://a.example", "title": "A again" } },
                        { "web": { "uri": "https://b.example" } },
                        { "retrievedContext": {} },
                        { "web": { "uri": "" } }
                    ]
                }
            }]
        }));

        let sources = response.sources();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].title, "A");
        assert_eq!(sources[1].title, "https://b.example");
    }
}
