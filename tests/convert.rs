use pretty_assertions::assert_eq;
use t2h::{convert, convert_lines, Config, EnvironmentNumbering, Error, ParseErrorKind};

fn render(lines: &[&str]) -> String {
    convert_lines(lines, &Config::default()).unwrap()
}

#[test]
fn test_heading_theorem_and_reference() {
    let html = render(&[
        r"\begin{document}",
        r"\section{Intro}",
        r"\begin{theorem}\label{t1}",
        "content",
        r"\end{theorem}",
        r"See \ref{t1}.",
        r"\end{document}",
    ]);

    assert!(html.contains(
        r#"<h1 class="section"><span class="section__number">1.</span> Intro</h1>"#
    ));
    assert!(html.contains(
        r#"<div class="env_theorem" id="label_t1"><span class="env__name">Theorem</span> <span class="env__number">1</span>"#
    ));
    assert!(html.contains(r##"See <a href="#label_t1" class="ref">1</a>."##));
}

#[test]
fn test_body_is_exact() {
    let mut config = Config::default();
    config.html.math = t2h::MathBackend::None;

    let html = convert(
        "\\begin{document}\n\\begin{itemize}\n\\item one\n\\end{itemize}\n\\end{document}\n",
        &config,
    )
    .unwrap();

    assert_eq!(
        html,
        "<html lang=\"en\"><meta charset=\"UTF-8\">\n<head>\n</head>\n<body>\n\
         <ul>\n<li> one\n</ul>\n</body>\n</html>\n"
    );
}

#[test]
fn test_theorem_counter_ignores_lemmas() {
    let html = render(&[
        r"\begin{document}",
        r"\begin{theorem}\label{a}",
        r"\end{theorem}",
        r"\begin{lemma}\label{b}",
        r"\end{lemma}",
        r"\begin{theorem}\label{c}",
        r"\end{theorem}",
        r"\ref{a} \ref{b} \ref{c}",
        r"\end{document}",
    ]);

    assert!(html.contains(
        r##"<a href="#label_a" class="ref">1</a> <a href="#label_b" class="ref">1</a> <a href="#label_c" class="ref">2</a>"##
    ));
}

#[test]
fn test_section_numbers_cascade() {
    let html = render(&[
        r"\begin{document}",
        r"\section{A}",
        r"\subsection{A.1}",
        r"\subsection{A.2}",
        r"\section{B}",
        r"\subsection{B.1}\label{b1}",
        r"\ref{b1}",
        r"\end{document}",
    ]);

    assert!(html.contains(r#"<span class="section__number">1.2.</span> A.2"#));
    assert!(html.contains(r#"<h2 class="section" id="label_b1"><span class="section__number">2.1.</span> B.1</h2>"#));
    assert!(html.contains(r##"<a href="#label_b1" class="ref">2.1</a>"##));
}

#[test]
fn test_unnumbered_section() {
    let html = render(&[
        r"\begin{document}",
        r"\section*{Preface}\label{pre}",
        r"\section{First}",
        r"\ref{pre}",
        r"\end{document}",
    ]);

    assert!(html.contains(r#"<h1 class="section" id="label_pre">Preface</h1>"#));
    assert!(html.contains(r#"<span class="section__number">1.</span> First"#));
    assert!(html.contains("(??)"));
}

#[test]
fn test_undeclared_reference() {
    let html = render(&[r"\begin{document}", r"see \ref{nowhere}", r"\end{document}"]);
    assert!(html.contains("see (??)"));
    assert!(!html.contains("label_nowhere"));
}

#[test]
fn test_mismatched_close_line_number() {
    let err = convert_lines(
        &[
            r"\begin{document}",
            "text",
            r"\begin{theorem}",
            r"\end{lemma}",
            r"\end{document}",
        ],
        &Config::default(),
    )
    .unwrap_err();

    match err {
        Error::Parse(err) => {
            assert_eq!(
                err.kind,
                ParseErrorKind::MismatchedClose {
                    opened: "theorem".to_string(),
                    closed: "lemma".to_string()
                }
            );
            assert_eq!(err.line, 3);
            assert_eq!(err.context, r"\end{lemma}");
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_per_section_numbering_policy() {
    let mut config = Config::default();
    config.numbering.environments = EnvironmentNumbering::PerSection;

    let html = convert_lines(
        &[
            r"\begin{document}",
            r"\section{One}",
            r"\begin{example}\label{e1}",
            r"\end{example}",
            r"\section{Two}",
            r"\begin{example}\label{e2}",
            r"\end{example}",
            r"\ref{e1}/\ref{e2}",
            r"\end{document}",
        ],
        &config,
    )
    .unwrap();

    assert!(html.contains(
        r##"<a href="#label_e1" class="ref">1</a>/<a href="#label_e2" class="ref">1</a>"##
    ));
}

#[test]
fn test_within_section_numbering_policy() {
    let config = Config::from_toml_str("[numbering]\nenvironments = \"within-section\"\n").unwrap();

    let html = convert_lines(
        &[
            r"\begin{document}",
            r"\section{One}",
            r"\section{Two}",
            r"\begin{hint}\label{h}",
            r"\end{hint}",
            r"\ref{h}",
            r"\end{document}",
        ],
        &config,
    )
    .unwrap();

    assert!(html.contains(r#"<span class="env__number">2.1</span>"#));
    assert!(html.contains(r##"<a href="#label_h" class="ref">2.1</a>"##));
}

#[test]
fn test_custom_environment_and_language() {
    let config = Config::from_toml_str(
        "language = \"ru\"\n[environments]\nclaim = \"Утверждение\"\n",
    )
    .unwrap();

    let html = convert_lines(
        &[
            r"\begin{document}",
            r"\begin{claim}",
            r"\end{claim}",
            r"\begin{theorem}",
            r"\end{theorem}",
            r"\end{document}",
        ],
        &config,
    )
    .unwrap();

    assert!(html.starts_with("<html lang=\"ru\">"));
    assert!(html.contains(
        r#"<div class="env_claim"><span class="env__name">Утверждение</span> <span class="env__number">1</span>"#
    ));
    assert!(html.contains(r#"<span class="env__name">Теорема</span>"#));
}

#[test]
fn test_strict_references() {
    let config = Config::from_toml_str("[references]\nstrict = true\n").unwrap();
    let err = convert_lines(&[r"\begin{document}", r"\ref{x}", r"\end{document}"], &config)
        .unwrap_err();
    assert!(matches!(err, Error::Resolution(_)));
}

#[test]
fn test_reference_in_heading_resolves_with_special_characters() {
    let html = render(&[
        r"\begin{document}",
        r"\section{See \ref{a&b} <here>}",
        r"\begin{theorem}[After \ref{a&b}]\label{a&b}",
        r"\end{theorem}",
        r"\end{document}",
    ]);

    assert!(html.contains(
        r##"<span class="section__number">1.</span> See <a href="#label_a_b" class="ref">1</a> &lt;here&gt;</h1>"##
    ));
    assert!(html.contains(
        r##"<span class="env__opt_text">After <a href="#label_a_b" class="ref">1</a></span>"##
    ));
    assert!(!html.contains("(??)"));
}

#[test]
fn test_named_list_is_not_numbered() {
    let mut config = Config::default();
    config.environments.insert("itemize".to_string(), "List".to_string());

    let html = convert_lines(
        &[
            r"\begin{document}",
            r"\begin{itemize}\label{l1}",
            r"\item one",
            r"\end{itemize}",
            r"\begin{theorem}\label{t1}",
            r"\end{theorem}",
            r"\ref{l1} \ref{t1}",
            r"\end{document}",
        ],
        &config,
    )
    .unwrap();

    assert!(html.contains("<ul>\n<li> one\n</ul>\n"));
    assert!(html.contains(r##"(??) <a href="#label_t1" class="ref">1</a>"##));
}
