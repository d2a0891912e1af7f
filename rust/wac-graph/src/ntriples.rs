//! A line-oriented reader for N-Triples documents.
//!
//! Each non-blank line holds one `subject predicate object .` statement;
//! lines starting with `#` are comments. Literal datatype and language tags
//! are accepted and discarded, since decisions only ever compare IRIs.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{escaped_transform, is_not, tag, take_while1},
    character::complete::{char, not_line_ending, space0},
    combinator::{all_consuming, map, opt, recognize, value},
    sequence::{delimited, preceded, terminated, tuple},
};

use crate::{GraphError, Node, Triple};

/// Parse a whole document into its triples
pub fn parse(document: &str) -> Result<Vec<Triple>, GraphError> {
    let mut triples = Vec::new();

    for (index, line) in document.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (_, triple) =
            all_consuming(statement)(line).map_err(|error| GraphError::Syntax {
                line: index + 1,
                reason: error.to_string(),
            })?;
        triples.push(triple);
    }

    Ok(triples)
}

/// Parse a single node written in N-Triples syntax
pub fn parse_node(input: &str) -> Result<Node, GraphError> {
    all_consuming(node)(input)
        .map(|(_, node)| node)
        .map_err(|error| GraphError::Syntax {
            line: 1,
            reason: error.to_string(),
        })
}

fn statement(input: &str) -> IResult<&str, Triple> {
    map(
        terminated(
            tuple((
                alt((iri, blank)),
                preceded(space0, iri),
                preceded(space0, node),
            )),
            tuple((
                space0,
                char('.'),
                space0,
                opt(preceded(char('#'), not_line_ending)),
            )),
        ),
        |(subject, predicate, object)| Triple {
            subject,
            predicate,
            object,
        },
    )(input)
}

fn node(input: &str) -> IResult<&str, Node> {
    alt((iri, blank, literal))(input)
}

fn iri(input: &str) -> IResult<&str, Node> {
    map(
        delimited(char('<'), is_not(">\"{}|^` \t\r\n"), char('>')),
        Node::named,
    )(input)
}

fn blank(input: &str) -> IResult<&str, Node> {
    map(
        preceded(
            tag("_:"),
            take_while1(|c: char| c.is_alphanumeric() || c == '_' || c == '-'),
        ),
        Node::blank,
    )(input)
}

fn literal(input: &str) -> IResult<&str, Node> {
    map(
        terminated(
            delimited(char('"'), lexical_form, char('"')),
            opt(alt((
                recognize(preceded(
                    char('@'),
                    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-'),
                )),
                recognize(preceded(tag("^^"), iri)),
            ))),
        ),
        Node::literal,
    )(input)
}

fn lexical_form(input: &str) -> IResult<&str, String> {
    map(
        opt(escaped_transform(
            is_not("\\\""),
            '\\',
            alt((
                value("\\", char('\\')),
                value("\"", char('"')),
                value("\n", char('n')),
                value("\r", char('r')),
                value("\t", char('t')),
            )),
        )),
        Option::unwrap_or_default,
    )(input)
}
