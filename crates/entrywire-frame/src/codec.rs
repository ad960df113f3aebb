use bytes::{BufMut, BytesMut};
use entrywire_proto::{BrokerEntryMetadata, Message, MessageMetadata, SingleMessageMetadata};

use crate::error::{EntryError, Result};

/// Magic identifying a message entry whose checksum is CRC32-C.
pub const MAGIC_CRC32C: u16 = 0x0e01;

/// Magic identifying a broker-entry-metadata wrapper frame.
pub const MAGIC_BROKER_ENTRY_METADATA: u16 = 0x0e02;

/// Message entry header: magic (2) + checksum (4) + metadata length (4) = 10 bytes.
pub const MESSAGE_HEADER_SIZE: usize = 10;

/// Broker frame header: magic (2) + metadata length (4) = 6 bytes.
pub const BROKER_HEADER_SIZE: usize = 6;

/// Default upper bound for any declared metadata length: 5 MiB.
pub const DEFAULT_MAX_METADATA_SIZE: usize = 5 * 1024 * 1024;

/// The two outer frame kinds, told apart by their leading magic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// Checksummed message entry (`MAGIC_CRC32C`).
    MessageEntry,
    /// Broker-added wrapper preceding a message entry.
    BrokerEntryMetadata,
}

impl FrameKind {
    /// Classify a magic number, returning `None` for unknown values.
    pub fn from_magic(magic: u16) -> Option<Self> {
        match magic {
            MAGIC_CRC32C => Some(FrameKind::MessageEntry),
            MAGIC_BROKER_ENTRY_METADATA => Some(FrameKind::BrokerEntryMetadata),
            _ => None,
        }
    }

    /// The magic number that introduces this frame kind.
    pub fn magic(self) -> u16 {
        match self {
            FrameKind::MessageEntry => MAGIC_CRC32C,
            FrameKind::BrokerEntryMetadata => MAGIC_BROKER_ENTRY_METADATA,
        }
    }
}

/// Configuration for a decode session.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Validate the CRC32-C of message entries. Default: true.
    pub verify_checksum: bool,
    /// Maximum declared length of any metadata record. Default: 5 MiB.
    pub max_metadata_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            verify_checksum: true,
            max_metadata_size: DEFAULT_MAX_METADATA_SIZE,
        }
    }
}

/// CRC32-C (Castagnoli) of `data`.
pub fn checksum(data: &[u8]) -> u32 {
    crc32c::crc32c(data)
}

fn metadata_len(frame: &'static str, len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| EntryError::MetadataTooLarge {
        frame,
        size: len,
        max: u32::MAX as usize,
    })
}

/// Encode a message entry.
///
/// Wire format:
/// ```text
/// ┌────────────┬────────────┬─────────────┬──────────────┬──────────────┐
/// │ Magic (2B) │ CRC32-C    │ Meta length │ Metadata     │ Body         │
/// │ 0x0e 0x01  │ (4B BE)    │ (4B BE)     │ (length B)   │ (rest)       │
/// └────────────┴────────────┴─────────────┴──────────────┴──────────────┘
/// ```
///
/// The checksum covers everything after the checksum field. `body` is either
/// a bare payload or a sequence of elements written by
/// [`encode_single_message`].
pub fn encode_message_entry(
    metadata: &MessageMetadata,
    body: &[u8],
    dst: &mut BytesMut,
) -> Result<()> {
    let meta_len = metadata_len("message", metadata.encoded_len())?;
    dst.reserve(MESSAGE_HEADER_SIZE + meta_len as usize + body.len());

    dst.put_u16(MAGIC_CRC32C);
    let checksum_at = dst.len();
    dst.put_u32(0);

    let covered_from = dst.len();
    dst.put_u32(meta_len);
    metadata.encode(dst)?;
    dst.put_slice(body);

    let crc = checksum(&dst[covered_from..]);
    dst[checksum_at..checksum_at + 4].copy_from_slice(&crc.to_be_bytes());
    Ok(())
}

/// Append one batch element: metadata length, metadata, payload.
///
/// `single.payload_size` must equal `payload.len()`.
pub fn encode_single_message(
    single: &SingleMessageMetadata,
    payload: &[u8],
    dst: &mut BytesMut,
) -> Result<()> {
    if usize::try_from(single.payload_size).ok() != Some(payload.len()) {
        return Err(EntryError::CorruptMetadata {
            frame: "single message",
            reason: format!(
                "payload_size {} does not match payload length {}",
                single.payload_size,
                payload.len()
            ),
        });
    }

    let meta_len = metadata_len("single message", single.encoded_len())?;
    dst.reserve(4 + meta_len as usize + payload.len());
    dst.put_u32(meta_len);
    single.encode(dst)?;
    dst.put_slice(payload);
    Ok(())
}

/// Encode the broker wrapper frame. The wrapped message entry follows it.
pub fn encode_broker_entry_metadata(meta: &BrokerEntryMetadata, dst: &mut BytesMut) -> Result<()> {
    let meta_len = metadata_len("broker entry", meta.encoded_len())?;
    dst.reserve(BROKER_HEADER_SIZE + meta_len as usize);
    dst.put_u16(MAGIC_BROKER_ENTRY_METADATA);
    dst.put_u32(meta_len);
    meta.encode(dst)?;
    Ok(())
}
