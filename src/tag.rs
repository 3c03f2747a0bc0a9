//! Stateless predicates over a single tokenized tag.
//!
//! The tokenizer lower-cases tag and attribute names, so names are compared
//! as-is. Attribute values are compared exactly.

use html5ever::tokenizer::Tag;

/// Value of the first attribute called `name`, if present
pub fn attribute<'a>(tag: &'a Tag, name: &str) -> Option<&'a str> {
    tag.attrs
        .iter()
        .find(|attr| &*attr.name.local == name)
        .map(|attr| &*attr.value)
}

/// Whether the tag carries attribute `name` with exactly `value`
pub fn has_attribute_value(tag: &Tag, name: &str, value: &str) -> bool {
    attribute(tag, name) == Some(value)
}

pub fn is_named(tag: &Tag, name: &str) -> bool {
    &*tag.name == name
}

/// `h1` through `h6`
pub fn is_heading(name: &str) -> bool {
    matches!(name.as_bytes(), [b'h' | b'H', b'1'..=b'6'])
}
