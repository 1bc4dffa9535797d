//! Nom-based IRC line parser.
//!
//! One combinator per grammar segment:
//!
//! ```text
//! [@<tags> ][:<sender> ]<command>[ <middle>]*[ :<trailing>]
//! ```
//!
//! Segments are separated by runs of one or more spaces. Once a `@` or `:`
//! prefix marker has been seen the segment is committed with `cut`, so a
//! line made only of prefixes fails instead of being re-read as a command.

use nom::{
    bytes::complete::{take_while, take_while1},
    character::complete::{char, satisfy},
    combinator::{cut, eof, opt, recognize},
    error::{context, VerboseError, VerboseErrorKind},
    multi::many0,
    sequence::{pair, preceded, terminated},
    IResult,
};

use crate::error::InvalidMessage;

type ParseResult<I, O> = IResult<I, O, VerboseError<I>>;

#[inline]
fn is_space(c: char) -> bool {
    c == ' '
}

/// Anything but the segment separator and line terminators.
#[inline]
fn is_token_char(c: char) -> bool {
    c != ' ' && c != '\r' && c != '\n'
}

#[inline]
fn is_trailing_char(c: char) -> bool {
    c != '\r' && c != '\n'
}

fn spaces(input: &str) -> ParseResult<&str, &str> {
    take_while1(is_space)(input)
}

fn skip_spaces(input: &str) -> ParseResult<&str, &str> {
    take_while(is_space)(input)
}

/// Tags: `@` followed by a (possibly empty) token and a space run.
fn parse_tags(input: &str) -> ParseResult<&str, &str> {
    context(
        "parsing message tags",
        preceded(char('@'), cut(terminated(take_while(is_token_char), spaces))),
    )(input)
}

/// Sender: `:` followed by a non-empty token and a space run.
fn parse_sender(input: &str) -> ParseResult<&str, &str> {
    context(
        "parsing message sender",
        preceded(char(':'), cut(terminated(take_while1(is_token_char), spaces))),
    )(input)
}

fn parse_command(input: &str) -> ParseResult<&str, &str> {
    context("parsing command", take_while1(is_token_char))(input)
}

/// A middle parameter: a token that does not start with `:`.
fn parse_middle(input: &str) -> ParseResult<&str, &str> {
    preceded(
        spaces,
        recognize(pair(
            satisfy(|c| is_token_char(c) && c != ':'),
            take_while(is_token_char),
        )),
    )(input)
}

/// The trailing parameter: everything after ` :` up to the line end.
fn parse_trailing(input: &str) -> ParseResult<&str, &str> {
    preceded(pair(spaces, char(':')), take_while(is_trailing_char))(input)
}

/// Parse a complete IRC line (without its CR/LF terminator) into its
/// components.
pub fn parse_message(input: &str) -> ParseResult<&str, ParsedMessage<'_>> {
    let (input, _) = skip_spaces(input)?;
    let (input, tags) = opt(parse_tags)(input)?;
    let (input, sender) = opt(parse_sender)(input)?;
    let (input, command) = parse_command(input)?;
    let (input, mut params) = many0(parse_middle)(input)?;
    let (input, trailing) = opt(parse_trailing)(input)?;
    let (input, _) = skip_spaces(input)?;
    let (input, _) = context("expecting end of line", eof)(input)?;

    params.extend(trailing);

    Ok((
        input,
        ParsedMessage {
            tags,
            sender,
            command,
            params,
        },
    ))
}

/// A parsed IRC message with borrowed string slices.
///
/// This is the intermediate representation produced by the nom parser.
/// It holds references into the original input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMessage<'a> {
    /// Raw tags string (without the leading `@`), if present.
    pub tags: Option<&'a str>,
    /// Raw sender string (without the leading `:`), if present.
    pub sender: Option<&'a str>,
    /// The command token.
    pub command: &'a str,
    /// Middle parameters followed by the trailing parameter, if any.
    pub params: Vec<&'a str>,
}

impl<'a> ParsedMessage<'a> {
    /// Parse one line into a `ParsedMessage`.
    ///
    /// CR and LF characters at the end of `input` are ignored.
    pub fn parse(input: &'a str) -> Result<Self, InvalidMessage> {
        let line = input.trim_end_matches(['\r', '\n']);

        match parse_message(line) {
            Ok((_rest, msg)) => Ok(msg),
            Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
                let position = e
                    .errors
                    .first()
                    .map(|(rest, _)| line.len() - rest.len())
                    .unwrap_or(0);
                let context = e.errors.iter().find_map(|(_, kind)| match kind {
                    VerboseErrorKind::Context(ctx) => Some(*ctx),
                    _ => None,
                });
                Err(InvalidMessage::new(input, position, context))
            }
            Err(nom::Err::Incomplete(_)) => Err(InvalidMessage::new(
                input,
                line.len(),
                Some("incomplete input"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_command() {
        let msg = ParsedMessage::parse("PING").unwrap();
        assert_eq!(msg.command, "PING");
        assert!(msg.tags.is_none());
        assert!(msg.sender.is_none());
        assert!(msg.params.is_empty());
    }

    #[test]
    fn test_parse_middle_params() {
        let msg = ParsedMessage::parse("foo bar baz asdf").unwrap();
        assert_eq!(msg.command, "foo");
        assert_eq!(msg.params, vec!["bar", "baz", "asdf"]);
    }

    #[test]
    fn test_parse_with_sender() {
        let msg = ParsedMessage::parse(":coolguy foo bar baz asdf").unwrap();
        assert_eq!(msg.sender, Some("coolguy"));
        assert_eq!(msg.command, "foo");
        assert_eq!(msg.params, vec!["bar", "baz", "asdf"]);
    }

    #[test]
    fn test_parse_with_tags_and_sender() {
        let msg = ParsedMessage::parse("@c;h=;a=b :quux ab cd").unwrap();
        assert_eq!(msg.tags, Some("c;h=;a=b"));
        assert_eq!(msg.sender, Some("quux"));
        assert_eq!(msg.command, "ab");
        assert_eq!(msg.params, vec!["cd"]);
    }

    #[test]
    fn test_parse_trailing_with_spaces() {
        let msg = ParsedMessage::parse("foo bar baz :asdf quux").unwrap();
        assert_eq!(msg.params, vec!["bar", "baz", "asdf quux"]);
    }

    #[test]
    fn test_parse_empty_trailing() {
        let msg = ParsedMessage::parse("foo bar baz :").unwrap();
        assert_eq!(msg.params, vec!["bar", "baz", ""]);
    }

    #[test]
    fn test_parse_trailing_colon_is_literal() {
        let msg = ParsedMessage::parse("foo bar baz ::asdf").unwrap();
        assert_eq!(msg.params, vec!["bar", "baz", ":asdf"]);
    }

    #[test]
    fn test_parse_colon_inside_middle() {
        let msg = ParsedMessage::parse("foo a:b c").unwrap();
        assert_eq!(msg.params, vec!["a:b", "c"]);
    }

    #[test]
    fn test_parse_space_runs_collapse() {
        let msg = ParsedMessage::parse("foo   bar    baz   ").unwrap();
        assert_eq!(msg.command, "foo");
        assert_eq!(msg.params, vec!["bar", "baz"]);
    }

    #[test]
    fn test_parse_leading_spaces_skipped() {
        let msg = ParsedMessage::parse("   PING x").unwrap();
        assert_eq!(msg.command, "PING");
        assert_eq!(msg.params, vec!["x"]);
    }

    #[test]
    fn test_parse_strips_line_terminators() {
        let msg = ParsedMessage::parse("PING :server\r\n").unwrap();
        assert_eq!(msg.params, vec!["server"]);

        let msg = ParsedMessage::parse("PING :server\n").unwrap();
        assert_eq!(msg.params, vec!["server"]);

        let msg = ParsedMessage::parse("PING server\r\n").unwrap();
        assert_eq!(msg.params, vec!["server"]);
    }

    #[test]
    fn test_parse_tab_is_token_char() {
        let msg = ParsedMessage::parse(":cool\tguy foo bar baz").unwrap();
        assert_eq!(msg.sender, Some("cool\tguy"));
    }

    #[test]
    fn test_parse_empty_tags() {
        let msg = ParsedMessage::parse("@ foo").unwrap();
        assert_eq!(msg.tags, Some(""));
        assert_eq!(msg.command, "foo");
    }

    #[test]
    fn test_reject_empty_and_blank() {
        assert!(ParsedMessage::parse("").is_err());
        assert!(ParsedMessage::parse("    ").is_err());
        assert!(ParsedMessage::parse("\r\n").is_err());
    }

    #[test]
    fn test_reject_prefix_only_lines() {
        assert!(ParsedMessage::parse("@a=b").is_err());
        assert!(ParsedMessage::parse("@a=b ").is_err());
        assert!(ParsedMessage::parse(":coolguy").is_err());
        assert!(ParsedMessage::parse(":coolguy ").is_err());
        assert!(ParsedMessage::parse("@a=b :coolguy").is_err());
        assert!(ParsedMessage::parse("@a=b :coolguy   ").is_err());
    }

    #[test]
    fn test_reject_empty_sender() {
        assert!(ParsedMessage::parse(": foo").is_err());
    }

    #[test]
    fn test_reject_interior_line_break() {
        let err = ParsedMessage::parse("PRIVMSG #a :one\rtwo").unwrap_err();
        assert_eq!(err.position(), 15);
        assert!(ParsedMessage::parse("foo\nbar").is_err());
    }

    #[test]
    fn test_error_reports_context() {
        let err = ParsedMessage::parse(":coolguy").unwrap_err();
        assert_eq!(err.line(), ":coolguy");
        assert_eq!(err.context(), Some("parsing message sender"));

        let err = ParsedMessage::parse("").unwrap_err();
        assert_eq!(err.context(), Some("parsing command"));
        assert_eq!(err.position(), 0);
    }

    #[test]
    fn test_error_keeps_original_line() {
        let err = ParsedMessage::parse("   \r\n").unwrap_err();
        assert_eq!(err.line(), "   \r\n");
    }
}
