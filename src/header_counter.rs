use crate::scanner::{MarkupEvent, MarkupVisitor};
use crate::tag::is_heading;
use std::collections::HashMap;

/// Histogram of heading start tags, keyed by tag name (lower-cased by the tokenizer)
#[derive(Debug, Default)]
pub struct HeaderCounter {
    counts: HashMap<String, usize>,
}

impl HeaderCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_counts(self) -> HashMap<String, usize> {
        self.counts
    }
}

impl MarkupVisitor for HeaderCounter {
    fn visit(&mut self, event: &MarkupEvent<'_>) {
        // Self-closing headings are not counted
        if let MarkupEvent::StartTag(tag) = event
            && is_heading(&tag.name)
        {
            *self.counts.entry(tag.name.to_string()).or_insert(0) += 1;
        }
    }
}
