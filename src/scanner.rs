//! Single-pass markup scanner.
//!
//! The html5ever tokenizer drives a [`TokenSink`] which turns raw tokens into
//! [`MarkupEvent`]s and hands every event to a [`MarkupVisitor`]. All page
//! signals are collected by [`PageScanner`] from one traversal of the body.

use crate::header_counter::HeaderCounter;
use crate::link_extractor::LinkExtractor;
use crate::login_form_detector::LoginFormDetector;
use crate::models::PageSignals;
use crate::title_extractor::TitleExtractor;
use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use std::cell::RefCell;

/// A structural event in the token stream
#[derive(Debug)]
pub enum MarkupEvent<'a> {
    StartTag(&'a Tag),
    SelfClosingTag(&'a Tag),
    EndTag(&'a Tag),
    /// Text between two non-text tokens
    Text(&'a str),
    /// Comments and doctypes
    Other,
}

impl<'a> MarkupEvent<'a> {
    /// The tag of a start or self-closing tag event
    pub fn opening_tag(&self) -> Option<&'a Tag> {
        match self {
            MarkupEvent::StartTag(tag) | MarkupEvent::SelfClosingTag(tag) => Some(tag),
            _ => None,
        }
    }
}

/// Receives every event of one scan, in document order
pub trait MarkupVisitor {
    fn visit(&mut self, event: &MarkupEvent<'_>);
}

struct EventSink<'v, V: MarkupVisitor> {
    visitor: RefCell<&'v mut V>,
    pending_text: RefCell<String>,
}

impl<'v, V: MarkupVisitor> EventSink<'v, V> {
    fn new(visitor: &'v mut V) -> Self {
        Self {
            visitor: RefCell::new(visitor),
            pending_text: RefCell::new(String::new()),
        }
    }

    fn emit(&self, event: MarkupEvent<'_>) {
        self.visitor.borrow_mut().visit(&event);
    }

    /// The tokenizer may split a run of text into several character tokens;
    /// they are delivered as a single text event.
    fn flush_text(&self) {
        let text = std::mem::take(&mut *self.pending_text.borrow_mut());
        if !text.is_empty() {
            self.emit(MarkupEvent::Text(&text));
        }
    }

    fn emit_tag(&self, tag: &Tag) -> TokenSinkResult<()> {
        match tag.kind {
            TagKind::EndTag => {
                self.emit(MarkupEvent::EndTag(tag));
                TokenSinkResult::Continue
            }
            TagKind::StartTag if tag.self_closing => {
                self.emit(MarkupEvent::SelfClosingTag(tag));
                TokenSinkResult::Continue
            }
            TagKind::StartTag => {
                self.emit(MarkupEvent::StartTag(tag));
                raw_text_state(&tag.name)
            }
        }
    }
}

/// Elements whose content is text rather than markup
fn raw_text_state(name: &str) -> TokenSinkResult<()> {
    match name {
        "title" | "textarea" => TokenSinkResult::RawData(RawKind::Rcdata),
        "style" | "xmp" | "iframe" | "noembed" | "noframes" => {
            TokenSinkResult::RawData(RawKind::Rawtext)
        }
        "script" => TokenSinkResult::RawData(RawKind::ScriptData),
        "plaintext" => TokenSinkResult::Plaintext,
        _ => TokenSinkResult::Continue,
    }
}

impl<V: MarkupVisitor> TokenSink for EventSink<'_, V> {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::CharacterTokens(text) => {
                self.pending_text.borrow_mut().push_str(&text);
                TokenSinkResult::Continue
            }
            Token::NullCharacterToken => {
                self.pending_text.borrow_mut().push('\0');
                TokenSinkResult::Continue
            }
            // Parse errors do not end the stream and do not split text
            Token::ParseError(_) => TokenSinkResult::Continue,
            Token::TagToken(tag) => {
                self.flush_text();
                self.emit_tag(&tag)
            }
            Token::CommentToken(_) | Token::DoctypeToken(_) => {
                self.flush_text();
                self.emit(MarkupEvent::Other);
                TokenSinkResult::Continue
            }
            Token::EOFToken => {
                self.flush_text();
                TokenSinkResult::Continue
            }
        }
    }
}

/// Runs one tokenizer pass over `body`, feeding every event to `visitor`
pub fn scan_with<V: MarkupVisitor>(body: &str, visitor: &mut V) {
    let input = BufferQueue::default();
    input.push_back(StrTendril::from(body));

    let tokenizer = Tokenizer::new(EventSink::new(visitor), TokenizerOpts::default());
    let _ = tokenizer.feed(&input);
    tokenizer.end();
}

/// Fans one event stream out to the header, title, login-form and link
/// accumulators
pub struct PageScanner {
    headers: HeaderCounter,
    title: TitleExtractor,
    login_form: LoginFormDetector,
    links: LinkExtractor,
}

impl PageScanner {
    pub fn new(origin_host: &str) -> Self {
        Self {
            headers: HeaderCounter::new(),
            title: TitleExtractor::new(),
            login_form: LoginFormDetector::new(),
            links: LinkExtractor::new(origin_host),
        }
    }

    pub fn finish(self) -> PageSignals {
        PageSignals {
            header_counts: self.headers.into_counts(),
            title: self.title.into_title(),
            has_login_form: self.login_form.detected(),
            links: self.links.into_links(),
        }
    }
}

impl MarkupVisitor for PageScanner {
    fn visit(&mut self, event: &MarkupEvent<'_>) {
        self.headers.visit(event);
        self.title.visit(event);
        self.login_form.visit(event);
        self.links.visit(event);
    }
}

/// Extracts every token-level signal of a page in a single pass
pub fn scan_page(body: &str, origin_host: &str) -> PageSignals {
    let mut scanner = PageScanner::new(origin_host);
    scan_with(body, &mut scanner);
    scanner.finish()
}
