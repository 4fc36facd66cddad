use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const UNAVAILABLE_ANSWER: &str = "System unavailable.";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Citation {
    pub source_type: Option<String>,
    pub episode_title: Option<String>,
    pub timestamp: Option<String>,
    pub youtube_url: Option<String>,
    pub text: Option<String>,
}

/// What the question-answering function sends back. Nothing about the
/// upstream shape is enforced, so every field is optional.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct AskResponse {
    pub answer: Option<String>,
    pub citations: Option<Vec<Citation>>,
    pub error: Option<String>,
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(String::from)
}

// absent, wrong-typed and empty all read as "not there"
fn present_string_field(value: &Value, key: &str) -> Option<String> {
    string_field(value, key).filter(|s| !s.is_empty())
}

impl Citation {
    pub fn from_value(value: &Value) -> Self {
        Self {
            source_type: string_field(value, "source_type"),
            episode_title: string_field(value, "episode_title"),
            timestamp: present_string_field(value, "timestamp"),
            youtube_url: present_string_field(value, "youtube_url"),
            text: string_field(value, "text"),
        }
    }

    pub fn source_label(&self) -> String {
        self.source_type
            .as_deref()
            .map(str::to_uppercase)
            .unwrap_or_default()
    }

    pub fn is_podcast(&self) -> bool {
        self.source_type.as_deref() == Some("podcast")
    }

    pub fn is_hbr(&self) -> bool {
        self.source_type.as_deref() == Some("hbr")
    }

    /// Frame source for podcast citations that carry a video link.
    pub fn podcast_embed(&self) -> Option<String> {
        if !self.is_podcast() {
            return None;
        }
        self.youtube_url.as_deref().map(embed_url)
    }
}

impl AskResponse {
    pub fn from_value(value: &Value) -> Self {
        let citations = value
            .get("citations")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(Citation::from_value).collect());

        Self {
            answer: present_string_field(value, "answer"),
            citations,
            error: string_field(value, "error"),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            answer: Some(UNAVAILABLE_ANSWER.to_string()),
            ..Default::default()
        }
    }

    pub fn citations(&self) -> &[Citation] {
        self.citations.as_deref().unwrap_or_default()
    }
}

/// Turns a `watch?v=` video link into its embeddable form. Only the first
/// occurrence is rewritten; links without it pass through.
pub fn embed_url(url: &str) -> String {
    url.replacen("watch?v=", "embed/", 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn embed_url_rewrites_watch_links() {
        assert_eq!(
            embed_url("https://www.youtube.com/watch?v=XYZ"),
            "https://www.youtube.com/embed/XYZ"
        );
        assert_eq!(embed_url("https://youtu.be/XYZ"), "https://youtu.be/XYZ");
        assert_eq!(
            embed_url("https://x/watch?v=a&list=watch?v=b"),
            "https://x/embed/a&list=watch?v=b"
        );
    }

    #[test]
    fn decodes_full_response() {
        let response = AskResponse::from_value(&json!({
            "answer": "1. Executive Summary\nGrow.",
            "citations": [
                {
                    "source_type": "podcast",
                    "episode_title": "Scaling teams",
                    "timestamp": "12:30",
                    "youtube_url": "https://www.youtube.com/watch?v=abc"
                },
                { "source_type": "hbr", "episode_title": "Strategy", "text": "Brief." }
            ]
        }));

        assert_eq!(response.answer.as_deref(), Some("1. Executive Summary\nGrow."));
        let citations = response.citations();
        assert_eq!(citations.len(), 2);
        assert_eq!(citations[0].source_label(), "PODCAST");
        assert_eq!(
            citations[0].podcast_embed().as_deref(),
            Some("https://www.youtube.com/embed/abc")
        );
        assert!(citations[1].is_hbr());
        assert_eq!(citations[1].podcast_embed(), None);
        assert_eq!(citations[1].text.as_deref(), Some("Brief."));
    }

    #[test]
    fn wrong_types_and_empty_strings_read_as_absent() {
        let response = AskResponse::from_value(&json!({
            "answer": "",
            "citations": "not a list"
        }));
        assert_eq!(response.answer, None);
        assert!(response.citations().is_empty());

        let citation = Citation::from_value(&json!({
            "source_type": 7,
            "timestamp": "",
            "youtube_url": null
        }));
        assert_eq!(citation.source_label(), "");
        assert_eq!(citation.timestamp, None);
        assert_eq!(citation.youtube_url, None);
    }

    #[test]
    fn error_payloads_have_no_answer() {
        let response = AskResponse::from_value(&json!({ "error": "Missing message" }));
        assert_eq!(response.answer, None);
        assert_eq!(response.error.as_deref(), Some("Missing message"));
    }

    #[test]
    fn podcast_without_video_has_no_embed() {
        let citation = Citation {
            source_type: Some("podcast".into()),
            ..Default::default()
        };
        assert_eq!(citation.podcast_embed(), None);
    }
}
