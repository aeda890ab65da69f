//! Program encoding to text
//!
//! Every function, the last one included, is terminated by `|`. Encoding
//! fails only for a call target with no character, which the program
//! constructors already reject.

use crate::error::Result;
use robozzle_spec::command::slot_code;
use robozzle_spec::{Function, Program, FUNCTION_SEPARATOR};

/// How empty slots are written
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmptySlots {
    /// Write `__` for every empty slot, preserving the layout
    Keep,
    /// Omit empty slots
    Collapse,
}

/// Encode a program to its text form
pub fn encode(program: &Program, empty_slots: EmptySlots) -> Result<String> {
    let mut text = String::with_capacity(program.total_slots() * 2 + program.function_count());
    for function in program.functions() {
        encode_function_into(&mut text, function, empty_slots)?;
        text.push(FUNCTION_SEPARATOR);
    }
    Ok(text)
}

/// Encode a single function, without the trailing separator
pub fn encode_function(function: &Function, empty_slots: EmptySlots) -> Result<String> {
    let mut text = String::with_capacity(function.len() * 2);
    encode_function_into(&mut text, function, empty_slots)?;
    Ok(text)
}

fn encode_function_into(
    text: &mut String,
    function: &Function,
    empty_slots: EmptySlots,
) -> Result<()> {
    for slot in function.slots() {
        if slot.is_none() && empty_slots == EmptySlots::Collapse {
            continue;
        }
        text.extend(slot_code(slot.as_ref())?);
    }
    Ok(())
}
