use std::borrow::Borrow;

use log::{debug, error};

use crate::codes::{Bits, CodeTable};
use crate::error::{HuffmanError, Result};
use crate::frequency::Symbol;

/// Concatenates the code of every symbol in `symbols`, in input order.
///
/// Fails with [`HuffmanError::UnknownSymbol`] when a symbol has no code, which
/// means the table was built from some other input.
pub fn encode<S, I>(symbols: I, table: &CodeTable<S>) -> Result<Bits>
where
    S: Symbol,
    I: IntoIterator,
    I::Item: Borrow<S>,
{
    debug!("Starting data encoding...");
    // Grows as codes arrive; an iterator's size hint is not trusted for capacity.
    let mut bits = Bits::new();

    for (position, symbol) in symbols.into_iter().enumerate() {
        let symbol = symbol.borrow();
        match table.get(symbol) {
            Some(code) => bits.extend_from_bitslice(code),
            None => {
                error!(
                    "Symbol {:?} at position {} found in data but not in code table!",
                    symbol, position
                );
                return Err(HuffmanError::UnknownSymbol {
                    position,
                    symbol: format!("{:?}", symbol),
                });
            }
        }
    }

    debug!("Encoded into {} bits.", bits.len());
    Ok(bits)
}

/// Encodes the characters of `text`.
pub fn encode_str(text: &str, table: &CodeTable<char>) -> Result<Bits> {
    encode(text.chars(), table)
}
