//! Structural tier: top-level `# Heading` followed by a paragraph.

use std::ops::Range;

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::deck::{Flashcard, card_id};

/// Pair each top-level H1 with the next top-level paragraph.
///
/// Headings nested in block quotes or lists, sub-headings, and paragraphs
/// with no pending question are ignored. A question left pending at the
/// end of input produces no card.
pub(crate) fn extract_sections(raw: &str) -> Vec<Flashcard> {
    let mut cards = Vec::new();
    let mut pending: Option<String> = None;
    let mut nesting = 0usize;
    let mut heading: Option<Option<Range<usize>>> = None;

    let parser = Parser::new_ext(raw, Options::ENABLE_TABLES).into_offset_iter();
    for (event, range) in parser {
        // Inside a level-1 heading: record the span of its inline content.
        if let Some(span) = heading.as_mut() {
            if let Event::End(TagEnd::Heading(_)) = event {
                let text = span
                    .take()
                    .map(|r| raw[r].trim().to_string())
                    .unwrap_or_default();
                // An empty heading clears the pending question.
                pending = (!text.is_empty()).then_some(text);
                heading = None;
            } else {
                *span = Some(match span.take() {
                    Some(r) => r.start.min(range.start)..r.end.max(range.end),
                    None => range,
                });
            }
            continue;
        }

        match event {
            Event::Start(tag) if is_container(&tag) => nesting += 1,
            Event::End(end) if is_container_end(&end) => nesting = nesting.saturating_sub(1),
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) if nesting == 0 => heading = Some(None),
            Event::Start(Tag::Paragraph) if nesting == 0 => {
                if let Some(question) = pending.take() {
                    cards.push(Flashcard::new(
                        card_id(cards.len()),
                        question,
                        raw[range].trim(),
                    ));
                }
            }
            _ => {}
        }
    }

    cards
}

fn is_container(tag: &Tag<'_>) -> bool {
    matches!(
        tag,
        Tag::BlockQuote | Tag::List(_) | Tag::Item | Tag::FootnoteDefinition(_) | Tag::Table(_)
    )
}

fn is_container_end(end: &TagEnd) -> bool {
    matches!(
        end,
        TagEnd::BlockQuote
            | TagEnd::List(_)
            | TagEnd::Item
            | TagEnd::FootnoteDefinition
            | TagEnd::Table
    )
}
