// nfcdev/src/tag/operations.rs
//! Block access on a selected ST25TB tag.

use std::ops::RangeInclusive;

use log::debug;

use crate::constants::ST25TB_BLOCK_LEN;
use crate::device::{Checked, Device};
use crate::tag::st25tb::{self, St25tb};
use crate::{Error, Result};

/// Read one 4-byte block (least significant byte first).
pub fn read_block(
    tag: &St25tb,
    device: &mut Device<Checked>,
    block: u8,
) -> Result<[u8; ST25TB_BLOCK_LEN]> {
    debug!("st25tb {}: read block {}", tag.uid_display(), block);
    let resp = device.transceive(st25tb::read_block_request(block))?;
    st25tb::parse_read_block_response(&resp)
}

/// Read a range of blocks, stopping at the first failure.
pub fn read_blocks(
    tag: &St25tb,
    device: &mut Device<Checked>,
    blocks: RangeInclusive<u8>,
) -> Result<Vec<(u8, [u8; ST25TB_BLOCK_LEN])>> {
    blocks
        .map(|block| read_block(tag, device, block).map(|data| (block, data)))
        .collect()
}

/// Write one block. The tag does not answer writes; the driver still sends
/// an empty response, which only tells whether the field stayed up.
pub fn write_block(
    tag: &St25tb,
    device: &mut Device<Checked>,
    block: u8,
    data: [u8; ST25TB_BLOCK_LEN],
) -> Result<()> {
    debug!("st25tb {}: write block {}", tag.uid_display(), block);
    let resp = device.transceive(st25tb::write_block_request(block, data))?;
    if resp.is_error() {
        return Err(Error::TransceiveFailed);
    }
    Ok(())
}

/// Block access as methods on the tag.
impl St25tb {
    /// See [`read_block`](fn@read_block).
    pub fn read_block(
        &self,
        device: &mut Device<Checked>,
        block: u8,
    ) -> Result<[u8; ST25TB_BLOCK_LEN]> {
        read_block(self, device, block)
    }

    /// See [`read_blocks`](fn@read_blocks).
    pub fn read_blocks(
        &self,
        device: &mut Device<Checked>,
        blocks: RangeInclusive<u8>,
    ) -> Result<Vec<(u8, [u8; ST25TB_BLOCK_LEN])>> {
        read_blocks(self, device, blocks)
    }

    /// See [`write_block`](fn@write_block).
    pub fn write_block(
        &self,
        device: &mut Device<Checked>,
        block: u8,
        data: [u8; ST25TB_BLOCK_LEN],
    ) -> Result<()> {
        write_block(self, device, block, data)
    }
}
