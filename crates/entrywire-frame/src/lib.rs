//! Cursor-based decoding of broker message entries.
//!
//! An entry is one complete buffer received from (or stored by) a broker:
//! - An optional broker wrapper: magic `0x0e02`, 4-byte length, metadata record
//! - A message entry: magic `0x0e01`, CRC32-C, 4-byte length, metadata record
//! - Either a bare payload (legacy layout) or `num_messages_in_batch`
//!   elements of 4-byte length, single-message metadata, payload
//!
//! All integers are big-endian. Decoding is a pull over one shared cursor;
//! payloads are views into the original buffer.

pub mod codec;
pub mod cursor;
pub mod error;
pub mod reader;

pub use codec::{
    checksum, encode_broker_entry_metadata, encode_message_entry, encode_single_message,
    FrameKind, ReaderConfig, BROKER_HEADER_SIZE, DEFAULT_MAX_METADATA_SIZE,
    MAGIC_BROKER_ENTRY_METADATA, MAGIC_CRC32C, MESSAGE_HEADER_SIZE,
};
pub use cursor::ByteCursor;
pub use error::{EntryError, Result};
pub use reader::{DecodedMessage, MessageReader, Messages, ReaderState};
