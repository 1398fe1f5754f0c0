//! A single question/answer card and the trusted-markup boundary for answers.

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};
use serde::{Deserialize, Serialize};

/// Build the id for the card at `index` in emission order.
pub fn card_id(index: usize) -> String {
    format!("card-{}", index)
}

/// A question/answer pair. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    /// Identifier, unique within one deck.
    pub id: String,
    /// Front of the card.
    pub question: String,
    /// Back of the card. May contain markdown or markup from the completion service.
    pub answer: String,
}

impl Flashcard {
    /// Create a new card.
    pub fn new(
        id: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Render the answer for display.
    ///
    /// This is the trust boundary for answer text: the answer is treated as
    /// markdown, every raw HTML fragment is escaped instead of passed through,
    /// and `javascript:`/`data:` link targets are neutralised. The returned
    /// [`TrustedHtml`] is the only form of the answer a renderer may insert
    /// verbatim.
    pub fn answer_html(&self) -> TrustedHtml {
        TrustedHtml::from_markdown(&self.answer)
    }
}

/// HTML produced by [`Flashcard::answer_html`], safe to render verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    fn from_markdown(markdown: &str) -> Self {
        let parser = Parser::new_ext(markdown, Options::ENABLE_STRIKETHROUGH).map(sanitize);
        let mut out = String::with_capacity(markdown.len() + markdown.len() / 2);
        html::push_html(&mut out, parser);
        Self(out)
    }

    /// The rendered HTML.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the rendered HTML string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for TrustedHtml {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn sanitize(event: Event<'_>) -> Event<'_> {
    match event {
        // Raw HTML is shown as text, never interpreted.
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) if is_unsafe_url(&dest_url) => Event::Start(Tag::Link {
            link_type,
            dest_url: CowStr::Borrowed("#"),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) if is_unsafe_url(&dest_url) => Event::Start(Tag::Image {
            link_type,
            dest_url: CowStr::Borrowed(""),
            title,
            id,
        }),
        other => other,
    }
}

fn is_unsafe_url(url: &str) -> bool {
    let scheme = url
        .trim_start()
        .chars()
        .take_while(|c| *c != ':')
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();
    url.contains(':') && matches!(scheme.as_str(), "javascript" | "vbscript" | "data")
}
