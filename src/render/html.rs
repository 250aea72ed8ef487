//! HTML fragments for environments, headings and references.

use crate::config::{Config, Language};
use crate::parser::lexer::reference;

/// Opening and closing HTML of one environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragments {
    pub begin: String,
    pub end: String,
}

/// Kind of the environment wrapping the whole document.
pub const DOCUMENT: &str = "document";

/// List environment kinds and the element each one opens.
const LIST_ENVIRONMENTS: &[(&str, &str)] = &[("itemize", "ul"), ("enumerate", "ol")];

/// Whether `kind` is one of the list environments.
pub fn is_list(kind: &str) -> bool {
    list_tag(kind).is_some()
}

fn list_tag(kind: &str) -> Option<&'static str> {
    LIST_ENVIRONMENTS
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, tag)| *tag)
}

/// Produces the HTML for each construct of a document.
pub struct HtmlRenderer<'a> {
    config: &'a Config,
}

impl<'a> HtmlRenderer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Render the begin/end pair of an environment.
    pub fn environment(
        &self,
        kind: &str,
        label: Option<&str>,
        number: Option<&str>,
        annotation: Option<&str>,
    ) -> Fragments {
        if kind == DOCUMENT {
            return self.document();
        }

        if let Some(tag) = list_tag(kind) {
            return Fragments {
                begin: format!("<{}>\n", tag),
                end: format!("</{}>\n", tag),
            };
        }

        let mut begin = format!(r#"<div class="env_{}""#, css_ident(kind));
        if let Some(label) = label {
            begin.push_str(&format!(r#" id="{}""#, label_id(label)));
        }
        begin.push('>');

        let mut header = Vec::new();
        if let Some(name) = self.config.display_name(kind) {
            header.push(span("env__name", name));
        }
        if let Some(number) = number {
            header.push(span("env__number", number));
        }
        if let Some(annotation) = annotation {
            header.push(span("env__opt_text", annotation));
        }
        begin.push_str(&header.join(" "));
        begin.push('\n');

        Fragments {
            begin,
            end: "</div>\n".to_string(),
        }
    }

    fn document(&self) -> Fragments {
        let lang = match self.config.language {
            Language::En => "en",
            Language::Ru => "ru",
        };

        let mut begin = format!("<html lang=\"{}\"><meta charset=\"UTF-8\">\n<head>\n", lang);
        if let Some(ref title) = self.config.html.title {
            begin.push_str(&format!("<title>{}</title>\n", escape_html(title)));
        }
        if let Some(head) = self.config.html.math.head_content() {
            begin.push_str(head);
            begin.push('\n');
        }
        begin.push_str("</head>\n<body>\n");

        Fragments {
            begin,
            end: "</body>\n</html>\n".to_string(),
        }
    }

    /// Render a heading; `number` is `None` for starred headings.
    pub fn section(
        &self,
        depth: usize,
        title: &str,
        label: Option<&str>,
        number: Option<&str>,
    ) -> String {
        let tag = format!("h{}", depth.clamp(1, 6));

        let mut out = format!(r#"<{} class="section""#, tag);
        if let Some(label) = label {
            out.push_str(&format!(r#" id="{}""#, label_id(label)));
        }
        out.push('>');

        if let Some(number) = number {
            out.push_str(&span("section__number", &format!("{}.", number)));
            out.push(' ');
        }
        out.push_str(&escape_text(title));
        out.push_str(&format!("</{}>\n", tag));
        out
    }
}

/// Render a list item; items are never explicitly closed.
pub fn list_item(rest: &str) -> String {
    format!("<li>{}\n", rest)
}

/// Render a resolved cross-reference.
pub fn reference_link(label: &str, number: &str) -> String {
    format!(
        "<a href=\"#{}\" class=\"ref\">{}</a>",
        label_id(label),
        escape_html(number)
    )
}

/// The `id` attribute value used for a label.
pub fn label_id(label: &str) -> String {
    format!("label_{}", css_ident(label))
}

/// Turn arbitrary text into a valid CSS identifier.
///
/// Characters outside `[A-Za-z0-9_-]` become `_`; a leading run of
/// non-letters is moved to the end after `__`.
pub fn css_ident(s: &str) -> String {
    let safe: String = s
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let first_letter = safe
        .find(|c: char| c.is_ascii_alphabetic())
        .unwrap_or(safe.len());
    if first_letter == 0 {
        return safe;
    }

    let (leading, rest) = safe.split_at(first_letter);
    if rest.is_empty() {
        format!("id__{}", leading)
    } else {
        format!("{}__{}", rest, leading)
    }
}

fn span(class: &str, text: &str) -> String {
    format!(r#"<span class="{}">{}</span>"#, class, escape_text(text))
}

/// Escape source text while keeping `\ref{...}` spans intact for the
/// second pass to look up.
fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find(r"\ref{") {
        out.push_str(&escape_html(&rest[..start]));
        match reference(&rest[start..]) {
            Ok((tail, _)) => {
                let len = rest.len() - start - tail.len();
                out.push_str(&rest[start..start + len]);
                rest = tail;
            }
            Err(_) => {
                out.push_str(&escape_html(&rest[start..]));
                rest = "";
            }
        }
    }
    out.push_str(&escape_html(rest));
    out
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
