//! Line classifier for the LaTeX subset.

use crate::error::ParseErrorKind;
use nom::{
    bytes::complete::{is_not, tag, take_while, take_while1},
    character::complete::{char, multispace0, satisfy},
    combinator::{not, opt, peek},
    multi::many0_count,
    sequence::delimited,
    IResult,
};

/// What a single stripped source line means.
#[derive(Debug, Clone, PartialEq)]
pub enum Line<'a> {
    /// `% ...`
    Comment,
    /// `\begin{kind}[annotation]\label{label}`
    Begin {
        kind: &'a str,
        annotation: Option<&'a str>,
        label: Option<&'a str>,
    },
    /// `\end{kind}`
    End { kind: &'a str },
    /// `\item` followed by the rest of the line.
    Item { rest: &'a str },
    /// `\(sub)*section(*){title}\label{label}`
    Heading {
        depth: usize,
        numbered: bool,
        title: &'a str,
        label: Option<&'a str>,
    },
    /// Anything else.
    Content(&'a str),
}

/// Classify an already stripped line.
pub fn classify(line: &str) -> Result<Line<'_>, ParseErrorKind> {
    if line.starts_with('%') {
        return Ok(Line::Comment);
    }

    if line.starts_with(r"\begin{") {
        return begin(line)
            .map(|(_, parsed)| parsed)
            .map_err(|_| ParseErrorKind::MalformedBegin);
    }

    if line.starts_with(r"\end{") {
        return end(line)
            .map(|(_, parsed)| parsed)
            .map_err(|_| ParseErrorKind::MalformedEnd);
    }

    if let Ok((rest, _)) = item(line) {
        return Ok(Line::Item { rest });
    }

    if let Ok((rest, (depth, numbered))) = heading_command(line) {
        return heading_body(rest, depth, numbered);
    }

    Ok(Line::Content(line))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Parse an environment start (`\begin{...}`).
pub fn begin(input: &str) -> IResult<&str, Line<'_>> {
    let (input, kind) = delimited(tag(r"\begin{"), take_while1(is_word_char), char('}'))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, annotation) = opt(delimited(char('['), is_not("]"), char(']')))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, label) = opt(label)(input)?;
    Ok((
        input,
        Line::Begin {
            kind,
            annotation,
            label,
        },
    ))
}

/// Parse an environment end (`\end{...}`).
pub fn end(input: &str) -> IResult<&str, Line<'_>> {
    let (input, kind) = delimited(tag(r"\end{"), is_not("}"), char('}'))(input)?;
    Ok((input, Line::End { kind }))
}

/// Parse a list item marker; `\itemsep` and friends are not items.
pub fn item(input: &str) -> IResult<&str, ()> {
    let (input, _) = tag(r"\item")(input)?;
    let (input, _) = not(satisfy(|c| c.is_alphabetic()))(input)?;
    Ok((input, ()))
}

/// Parse a label (`\label{...}`).
pub fn label(input: &str) -> IResult<&str, &str> {
    delimited(tag(r"\label{"), is_not("}"), char('}'))(input)
}

/// Parse a cross-reference (`\ref{...}`); the label may be empty.
pub fn reference(input: &str) -> IResult<&str, &str> {
    delimited(tag(r"\ref{"), take_while(|c| c != '}'), char('}'))(input)
}

/// Parse the `\subsection*` part of a heading, stopping at the title brace.
///
/// Returns (depth, numbered).
fn heading_command(input: &str) -> IResult<&str, (usize, bool)> {
    let (input, _) = char('\\')(input)?;
    let (input, subs) = many0_count(tag("sub"))(input)?;
    let (input, _) = tag("section")(input)?;
    let (input, star) = opt(char('*'))(input)?;
    let (input, _) = peek(char('{'))(input)?;
    Ok((input, (subs + 1, star.is_none())))
}

fn heading_body(rest: &str, depth: usize, numbered: bool) -> Result<Line<'_>, ParseErrorKind> {
    let close = matching_bracket(rest).ok_or(ParseErrorKind::UnclosedSectionBracket)?;
    let title = &rest[1..close];
    let ending = rest[close + 1..].trim();
    let label = label(ending).ok().map(|(_, label)| label);

    Ok(Line::Heading {
        depth,
        numbered,
        title,
        label,
    })
}

/// Byte index of the bracket closing the one `input` starts with.
pub fn matching_bracket(input: &str) -> Option<usize> {
    let opening = input.chars().next()?;
    let closing = match opening {
        '(' => ')',
        '[' => ']',
        '{' => '}',
        _ => return None,
    };

    let mut depth = 0usize;
    for (i, c) in input.char_indices() {
        if c == opening {
            depth += 1;
        } else if c == closing {
            depth -= 1;
            if depth == 0 {
                return Some(i);
            }
        }
    }
    None
}
