//! Client-side math rendering scripts.
//!
//! Math is passed through untouched; the document prologue pulls in a
//! script that typesets `$...$`, `\(...\)` and `\[...\]` in the browser.

use serde::Deserialize;

/// Math rendering backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum MathBackend {
    /// MathJax 3 from a CDN.
    #[default]
    #[serde(rename = "mathjax")]
    MathJax,
    /// KaTeX with its auto-render extension.
    #[serde(rename = "katex")]
    KaTeX,
    /// No math script at all.
    #[serde(rename = "none")]
    None,
}

impl MathBackend {
    /// HTML to place inside `<head>`, if any.
    pub fn head_content(self) -> Option<&'static str> {
        match self {
            MathBackend::MathJax => Some(MATHJAX_HEAD),
            MathBackend::KaTeX => Some(KATEX_HEAD),
            MathBackend::None => None,
        }
    }
}

const MATHJAX_HEAD: &str = r#"<script>
MathJax = {
    tex: {
        inlineMath: [['$', '$'], ['\\(', '\\)']],
        displayMath: [['$$', '$$'], ['\\[', '\\]']]
    }
};
</script>
<script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>"#;

const KATEX_HEAD: &str = r#"<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/katex@0.16.9/dist/katex.min.css" crossorigin="anonymous">
<script defer src="https://cdn.jsdelivr.net/npm/katex@0.16.9/dist/katex.min.js" crossorigin="anonymous"></script>
<script defer src="https://cdn.jsdelivr.net/npm/katex@0.16.9/dist/contrib/auto-render.min.js" crossorigin="anonymous"
    onload="renderMathInElement(document.body, {
        delimiters: [
            {left: '$$', right: '$$', display: true},
            {left: '$', right: '$', display: false},
            {left: '\\[', right: '\\]', display: true},
            {left: '\\(', right: '\\)', display: false}
        ]
    });"></script>"#;
