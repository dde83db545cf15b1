//! Computes the single read request that covers a register block.

use crate::registers::RegisterBlock;

/// A contiguous range of holding registers, read with one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ReadPlan {
    pub address: u16,
    pub count: u16,
}

impl ReadPlan {
    /// Offset of `address` within the words returned for this plan.
    pub fn offset_of(&self, address: u16) -> Option<usize> {
        let offset = address.checked_sub(self.address)?;
        (offset < self.count).then_some(usize::from(offset))
    }
}

/// The minimal range starting at the first register of `block` and covering its last register
/// entirely. Registers in the gaps are read along and ignored.
pub fn plan(block: &RegisterBlock) -> ReadPlan {
    let first = block.first();
    let last = block.last();
    ReadPlan { address: first.address, count: last.address - first.address + last.words() }
}
