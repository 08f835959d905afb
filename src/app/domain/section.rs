//! The managed-section model of `userChrome.css`.
//!
//! The override file is user-editable. FontSetter owns exactly one block in it,
//! bounded by [`SECTION_START`] and [`SECTION_END`], and never touches anything
//! else apart from adding the XUL namespace declaration when it is missing.

use std::sync::OnceLock;

use regex_lite::Regex;
use thiserror::Error;

pub const SECTION_START: &str = "/*fontsetter section*/";
pub const SECTION_END: &str = "/*end of fontsetter section*/";

/// Without this declaration the universal rule would not reach XUL chrome elements.
pub const NAMESPACE_LINE: &str =
    "@namespace url(\"http://www.mozilla.org/keymaster/gatekeeper/there.is.only.xul\");";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SectionError {
    #[error("section start marker at byte {0} has no matching end marker")]
    Unterminated(usize),
}

/// A text resource split around its (optional) managed span.
///
/// `managed` holds the span verbatim, markers included, so an untouched
/// document renders back byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionedDocument {
    prefix: String,
    managed: Option<String>,
    suffix: String,
}

impl SectionedDocument {
    /// Split `text` at the first managed span.
    ///
    /// Markers only count when they start a line, so a marker quoted in the
    /// middle of some other comment is left alone.
    pub fn parse(text: &str) -> Result<Self, SectionError> {
        let Some(start) = find_at_line_start(text, SECTION_START, 0) else {
            return Ok(Self {
                prefix: text.to_string(),
                managed: None,
                suffix: String::new(),
            });
        };

        let body_from = start + SECTION_START.len();
        let end = find_at_line_start(text, SECTION_END, body_from)
            .ok_or(SectionError::Unterminated(start))?;
        let span_end = end + SECTION_END.len();

        Ok(Self {
            prefix: text[..start].to_string(),
            managed: Some(text[start..span_end].to_string()),
            suffix: text[span_end..].to_string(),
        })
    }

    pub fn has_section(&self) -> bool {
        self.managed.is_some()
    }

    /// The managed span, markers included.
    pub fn managed_span(&self) -> Option<&str> {
        self.managed.as_deref()
    }

    /// The text between the markers, without the line breaks next to them.
    pub fn managed_body(&self) -> Option<&str> {
        self.managed.as_deref().map(|span| {
            let inner = &span[SECTION_START.len()..span.len() - SECTION_END.len()];
            let inner = inner.strip_prefix('\n').unwrap_or(inner);
            inner.strip_suffix('\n').unwrap_or(inner)
        })
    }

    /// Whether the unmanaged text already declares the XUL namespace.
    pub fn has_namespace(&self) -> bool {
        namespace_pattern()
            .map(|re| re.is_match(&self.prefix) || re.is_match(&self.suffix))
            .unwrap_or(false)
    }

    /// Render the document with its managed span set to `body`.
    ///
    /// An existing span is replaced in place. Otherwise the span is appended,
    /// preceded by the namespace line when the document lacks one.
    pub fn with_section(&self, body: &str) -> String {
        let span = render_span(body);

        if self.managed.is_some() {
            return format!("{}{}{}", self.prefix, span, self.suffix);
        }

        let mut out = self.prefix.clone();
        if !out.is_empty() {
            out.push('\n');
        }
        if !self.has_namespace() {
            out.push_str(NAMESPACE_LINE);
            out.push('\n');
        }
        out.push_str(&span);
        out
    }

    /// Render the document with the managed span and the line break right
    /// before it removed.
    pub fn without_section(&self) -> String {
        if self.managed.is_none() {
            return self.render();
        }

        let prefix = self
            .prefix
            .strip_suffix("\r\n")
            .or_else(|| self.prefix.strip_suffix('\n'))
            .unwrap_or(&self.prefix);
        format!("{}{}", prefix, self.suffix)
    }

    /// Render the document unchanged.
    pub fn render(&self) -> String {
        let mut out = self.prefix.clone();
        if let Some(span) = &self.managed {
            out.push_str(span);
        }
        out.push_str(&self.suffix);
        out
    }
}

/// The delimited span for `body`.
pub fn render_span(body: &str) -> String {
    format!("{}\n{}\n{}", SECTION_START, body, SECTION_END)
}

/// The universal rule stored inside the managed span.
pub fn font_rule_body(font_name: &str) -> String {
    format!("*{{\n\tfont-family: {};\n}}", quote_css_string(font_name))
}

/// Quote a font family name as a CSS string.
pub fn quote_css_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        if ch == '"' || ch == '\\' {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}

fn find_at_line_start(text: &str, needle: &str, from: usize) -> Option<usize> {
    text[from..]
        .match_indices(needle)
        .map(|(idx, _)| from + idx)
        .find(|&idx| idx == 0 || text[..idx].ends_with('\n'))
}

fn namespace_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"@namespace.*there\.is\.only\.xul").ok())
        .as_ref()
}
