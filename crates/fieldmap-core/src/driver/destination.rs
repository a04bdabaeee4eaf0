use crate::stmt::Value;

/// Where a scanned column is written.
///
/// Text goes through a raw byte buffer so SQL NULL and the empty string both
/// land as an empty buffer; fixed-width primitives are written in place.
#[derive(Debug)]
pub enum Destination<'a> {
    /// Raw bytes, decoded into a string after the scan
    Buffer(&'a mut Vec<u8>),

    /// A typed slot; the scanned column is converted to the slot's current type
    Direct(&'a mut Value),
}

impl Destination<'_> {
    pub fn is_buffer(&self) -> bool {
        matches!(self, Destination::Buffer(_))
    }
}
