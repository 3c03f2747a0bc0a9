use crate::scanner::{MarkupEvent, MarkupVisitor};
use crate::tag::is_named;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum TitleState {
    #[default]
    Searching,
    /// A `<title>` start tag was just seen; the next event decides
    AfterTitleTag,
    Found,
}

/// Captures the text right after the first `<title>` that is followed by text
#[derive(Debug, Default)]
pub struct TitleExtractor {
    state: TitleState,
    title: String,
}

impl TitleExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_title(self) -> String {
        self.title
    }
}

impl MarkupVisitor for TitleExtractor {
    fn visit(&mut self, event: &MarkupEvent<'_>) {
        match self.state {
            TitleState::Found => {}
            TitleState::AfterTitleTag => {
                if let MarkupEvent::Text(text) = event {
                    self.title = (*text).to_string();
                    self.state = TitleState::Found;
                } else {
                    self.state = TitleState::Searching;
                }
            }
            TitleState::Searching => {
                if let MarkupEvent::StartTag(tag) = event
                    && is_named(tag, "title")
                {
                    self.state = TitleState::AfterTitleTag;
                }
            }
        }
    }
}
