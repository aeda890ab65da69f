//! # Lexer for RoboZZle program text
//!
//! Program text is a flat run of two-character command codes and `|`
//! separators. There is no whitespace or comment syntax.

use crate::error::{CodecError, Result};
use logos::Logos;
use robozzle_spec::Color;

/// Tokens of program text
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// End of a function
    #[token("|")]
    Separator,

    /// Condition character followed by an action character
    #[regex(r"[_rgb][^|]", |lex| {
        let mut chars = lex.slice().chars();
        Some((chars.next()?, chars.next()?))
    })]
    Command((char, char)),
}

/// Token stream tagged with byte offsets
pub struct Tokens<'a> {
    inner: logos::SpannedIter<'a, Token>,
    source: &'a str,
}

/// Tokenize program text lazily; the first bad token ends the stream with an error
pub fn tokenize(source: &str) -> Tokens<'_> {
    Tokens {
        inner: Token::lexer(source).spanned(),
        source,
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Result<(Token, usize)>;

    fn next(&mut self) -> Option<Self::Item> {
        let (token, span) = self.inner.next()?;
        Some(match token {
            Ok(token) => Ok((token, span.start)),
            Err(()) => Err(lex_error(self.source, span.start)),
        })
    }
}

fn lex_error(source: &str, offset: usize) -> CodecError {
    match source.get(offset..).and_then(|rest| rest.chars().next()) {
        Some(c) if Color::parse_condition(c).is_ok() => CodecError::TruncatedCommand { offset },
        Some(found) => CodecError::UnexpectedCharacter { offset, found },
        None => CodecError::TruncatedCommand { offset },
    }
}
