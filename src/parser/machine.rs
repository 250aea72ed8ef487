//! First pass: the environment stack machine.

use crate::ast::{Draft, Frame, LabelTable};
use crate::config::Config;
use crate::error::{ParseError, ParseErrorKind};
use crate::parser::lexer::{classify, Line};
use crate::render::html::{is_list, list_item, HtmlRenderer, DOCUMENT};
use crate::resolve::numbering::Numbering;

/// Consumes lines one at a time, tracking open environments and numbering.
///
/// Output fragments are appended in emission order; `\ref{...}` in content
/// is left for the second pass.
pub struct Machine<'a> {
    config: &'a Config,
    renderer: HtmlRenderer<'a>,
    numbering: Numbering,
    labels: LabelTable,
    stack: Vec<Frame>,
    out: Vec<String>,
    started: bool,
    finished: bool,
    lines_seen: usize,
}

impl<'a> Machine<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            renderer: HtmlRenderer::new(config),
            numbering: Numbering::new(config.numbering.environments),
            labels: LabelTable::new(),
            stack: Vec::new(),
            out: Vec::new(),
            started: false,
            finished: false,
            lines_seen: 0,
        }
    }

    /// Whether the document environment has been closed.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Process one raw line. Lines after the document is closed are ignored.
    pub fn feed(&mut self, line_num: usize, line: &str) -> Result<(), ParseError> {
        if self.finished {
            return Ok(());
        }
        self.lines_seen = line_num + 1;

        let stripped = line.trim();
        let classified = classify(stripped).map_err(|kind| self.error(kind, line_num, line))?;
        log::trace!("line {}: {:?}", line_num, classified);

        match classified {
            Line::Comment => {}
            Line::Begin {
                kind,
                annotation,
                label,
            } => self.begin(kind, annotation, label, line_num, line)?,
            Line::End { kind } => self.end(kind, line_num, line)?,
            Line::Item { rest } => {
                match self.stack.last() {
                    Some(frame) if is_list(&frame.kind) => {}
                    _ => return Err(self.error(ParseErrorKind::ItemOutsideList, line_num, line)),
                }
                self.out.push(list_item(rest));
            }
            Line::Heading {
                depth,
                numbered,
                title,
                label,
            } => self.heading(depth, numbered, title, label, line_num, line)?,
            Line::Content(content) => {
                if !self.stack.is_empty() {
                    self.out.push(format!("{}\n", content));
                }
            }
        }

        Ok(())
    }

    /// Finish the pass and hand over the assembled text and label table.
    pub fn finish(self) -> Result<Draft, ParseError> {
        if let Some(frame) = self.stack.last() {
            return Err(ParseError::new(
                ParseErrorKind::UnclosedEnvironment(frame.kind.clone()),
                frame.opened_at,
                frame.source.clone(),
            )
            .in_env(frame.kind.clone()));
        }

        if !self.started {
            return Err(ParseError::new(
                ParseErrorKind::MissingDocument,
                self.lines_seen.saturating_sub(1),
                "",
            ));
        }

        Ok(Draft {
            text: self.out.concat(),
            labels: self.labels,
        })
    }

    fn begin(
        &mut self,
        kind: &str,
        annotation: Option<&str>,
        label: Option<&str>,
        line_num: usize,
        line: &str,
    ) -> Result<(), ParseError> {
        if self.stack.is_empty() && kind != DOCUMENT {
            return Err(self.error(ParseErrorKind::PrematureContent(kind.to_string()), line_num, line));
        }

        let number = if self.config.is_enumerable(kind) {
            Some(self.numbering.environment(kind))
        } else {
            None
        };

        if let Some(label) = label {
            match number {
                Some(ref number) => self.record_label(label, number),
                None => log::debug!("label '{}' on unnumbered environment {}", label, kind),
            }
        }

        let fragments = self
            .renderer
            .environment(kind, label, number.as_deref(), annotation);
        self.out.push(fragments.begin);

        log::debug!("open {} at line {}", kind, line_num);
        self.started = true;
        self.stack.push(Frame {
            kind: kind.to_string(),
            closing: fragments.end,
            opened_at: line_num,
            source: line.to_string(),
        });

        Ok(())
    }

    fn end(&mut self, kind: &str, line_num: usize, line: &str) -> Result<(), ParseError> {
        let frame = self.stack.pop().ok_or_else(|| {
            ParseError::new(ParseErrorKind::UnopenedClose(kind.to_string()), line_num, line)
        })?;

        if frame.kind != kind {
            return Err(ParseError::new(
                ParseErrorKind::MismatchedClose {
                    opened: frame.kind.clone(),
                    closed: kind.to_string(),
                },
                line_num,
                line,
            )
            .in_env(frame.kind));
        }

        log::debug!("close {} at line {}", kind, line_num);
        self.out.push(frame.closing);

        if self.stack.is_empty() {
            self.finished = true;
        }

        Ok(())
    }

    fn heading(
        &mut self,
        depth: usize,
        numbered: bool,
        title: &str,
        label: Option<&str>,
        line_num: usize,
        line: &str,
    ) -> Result<(), ParseError> {
        if self.stack.is_empty() {
            return Ok(());
        }

        let number = self
            .numbering
            .heading(depth, numbered)
            .map_err(|kind| self.error(kind, line_num, line))?;

        if let (Some(label), Some(number)) = (label, &number) {
            self.record_label(label, number);
        }

        self.out
            .push(self.renderer.section(depth, title, label, number.as_deref()));

        Ok(())
    }

    fn record_label(&mut self, label: &str, number: &str) {
        if let Some(previous) = self.labels.insert(label.to_string(), number.to_string()) {
            log::warn!(
                "duplicate label '{}': {} replaced by {}",
                label,
                previous,
                number
            );
        }
    }

    fn error(&self, kind: ParseErrorKind, line_num: usize, line: &str) -> ParseError {
        let error = ParseError::new(kind, line_num, line);
        match self.stack.last() {
            Some(frame) => error.in_env(frame.kind.clone()),
            None => error,
        }
    }
}
