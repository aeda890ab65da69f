//! RoboZZle program text codec
//!
//! Convert programs to and from their compact text form.
//!
//! ## Example
//!
//! ```rust
//! use robozzle_codec::{encode, parse_for_layout, EmptySlots};
//!
//! let program = parse_for_layout("_Fr1|_L|", &[2, 1]).unwrap();
//! assert_eq!(encode(&program, EmptySlots::Keep).unwrap(), "_Fr1|_L|");
//! ```

pub mod error;
pub mod lexer;
pub mod parser;
pub mod encoder;

pub use error::{CodecError, Result};
pub use lexer::{tokenize, Token};
pub use parser::{parse, parse_for_layout, parse_for_puzzle};
pub use encoder::{encode, encode_function, EmptySlots};
