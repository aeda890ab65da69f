//! # Program text parser
//!
//! Two decode modes:
//! - [`parse_for_layout`] fills a program whose function capacities are
//!   already known (usually from a puzzle)
//! - [`parse`] derives the layout from the text itself
//!
//! Both modes reject a call to a function the program does not have.

use crate::error::{CodecError, Result};
use crate::lexer::{tokenize, Token, Tokens};
use robozzle_spec::{Command, Function, Program, Puzzle, SpecError, MAX_COMMANDS, MAX_FUNCTIONS};
use std::iter::Peekable;
use tracing::trace;

/// Parse program text into the layout given by `capacities`.
///
/// Functions are filled in order. A separator ends a function early; one
/// separator right after a full function is skipped. Parsing stops when the
/// text runs out, leaving the rest of the program empty, or when every
/// function is full, ignoring what remains of the text.
pub fn parse_for_layout(text: &str, capacities: &[usize]) -> Result<Program> {
    let mut functions = Program::new(capacities)?.functions().to_vec();
    let mut tokens = tokenize(text).peekable();

    for function in functions.iter_mut() {
        if !fill_function(&mut tokens, function)? {
            break;
        }
    }

    Ok(Program::from_functions(functions)?)
}

/// Parse program text into the layout of `puzzle`
pub fn parse_for_puzzle(text: &str, puzzle: &Puzzle) -> Result<Program> {
    parse_for_layout(text, puzzle.function_lengths())
}

/// Fill one function from the token stream.
///
/// Returns `false` once the text is exhausted.
fn fill_function(tokens: &mut Peekable<Tokens<'_>>, function: &mut Function) -> Result<bool> {
    for index in 0..function.len() {
        match tokens.next().transpose()? {
            None => return Ok(false),
            Some((Token::Separator, _)) => return Ok(true),
            Some((Token::Command(code), offset)) => {
                function.set(index, decode_slot(code, offset)?)?;
            }
        }
    }

    if let Some(Ok((Token::Separator, _))) = tokens.peek() {
        tokens.next();
    }
    Ok(tokens.peek().is_some())
}

/// Parse program text, taking each separator-terminated run of commands as
/// one function sized to fit it.
///
/// Text ending without a separator still closes its last run, unless that
/// run is empty.
pub fn parse(text: &str) -> Result<Program> {
    let mut functions = Vec::new();
    let mut slots = Vec::new();
    let mut end = 0;

    for token in tokenize(text) {
        let (token, offset) = token?;
        match token {
            Token::Command(code) => {
                if slots.len() == MAX_COMMANDS {
                    return Err(CodecError::TooManyCommands {
                        function: functions.len(),
                        offset,
                    });
                }
                slots.push(decode_slot(code, offset)?);
                end = offset + code.0.len_utf8() + code.1.len_utf8();
            }
            Token::Separator => {
                push_function(&mut functions, std::mem::take(&mut slots), offset)?;
                end = offset + 1;
            }
        }
    }

    if !slots.is_empty() {
        push_function(&mut functions, slots, end)?;
    }
    if functions.is_empty() {
        return Err(CodecError::NoFunctions);
    }

    Ok(Program::from_functions(functions)?)
}

fn push_function(
    functions: &mut Vec<Function>,
    slots: Vec<Option<Command>>,
    offset: usize,
) -> Result<()> {
    if functions.len() == MAX_FUNCTIONS {
        return Err(CodecError::TooManyFunctions { offset });
    }
    functions.push(Function::from_slots(slots)?);
    Ok(())
}

/// Decode one command code; unknown actions leave the slot empty
fn decode_slot((condition, action): (char, char), offset: usize) -> Result<Option<Command>> {
    match Command::from_chars(condition, action) {
        Ok(slot) => Ok(slot),
        Err(SpecError::UnknownAction(c)) => {
            trace!(offset, action = ?c, "unknown action, slot left empty");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
