use crate::models::UNKNOWN_VERSION;

/// Known doctype declarations, checked in this order
const DECLARATIONS: &[(&str, &str)] = &[
    ("HTML 1.0", r#""-//IETF//DTD HTML 1.0//EN""#),
    ("HTML 2.0", r#""-//IETF//DTD HTML 2.0//EN""#),
    ("HTML 3.2", r#""-//W3C//DTD HTML 3.2//EN""#),
    ("HTML 4.0 Strict", r#""-//W3C//DTD HTML 4.0//EN""#),
    (
        "HTML 4.0 Transitional",
        r#""-//W3C//DTD HTML 4.0 Transitional//EN""#,
    ),
    ("HTML 4.0 Frameset", r#""-//W3C//DTD HTML 4.0 Frameset//EN""#),
    ("HTML 4.01 Strict", r#""-//W3C//DTD HTML 4.01//EN""#),
    (
        "HTML 4.01 Transitional",
        r#""-//W3C//DTD HTML 4.01 Transitional//EN""#,
    ),
    ("HTML 4.01 Frameset", r#""-//W3C//DTD HTML 4.01 Frameset//EN""#),
    ("XHTML 1.0 Strict", r#""-//W3C//DTD XHTML 1.0 Strict//EN""#),
    (
        "XHTML 1.0 Transitional",
        r#""-//W3C//DTD XHTML 1.0 Transitional//EN""#,
    ),
    ("XHTML 1.0 Frameset", r#""-//W3C//DTD XHTML 1.0 Frameset//EN""#),
    ("XHTML 1.1", r#""-//W3C//DTD XHTML 1.1//EN""#),
    ("HTML 5", "<!DOCTYPE html>"),
];

/// Detects the markup version from the doctype declaration in `body`.
///
/// Each signature is matched verbatim, upper-cased and lower-cased, so
/// `<!doctype html>` and `<!DOCTYPE HTML>` are both recognized as HTML 5.
pub fn detect_html_version(body: &str) -> &'static str {
    DECLARATIONS
        .iter()
        .find(|(_, declaration)| {
            body.contains(declaration)
                || body.contains(&declaration.to_uppercase())
                || body.contains(&declaration.to_lowercase())
        })
        .map(|(name, _)| *name)
        .unwrap_or(UNKNOWN_VERSION)
}
