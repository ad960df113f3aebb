//! Wire-format decoding of broker message entries.
//!
//! Turns raw entry buffers into message metadata, per-message metadata and
//! payload views. Connection handling, acknowledgment and payload
//! interpretation belong to the caller.
//!
//! # Crate Structure
//!
//! - [`proto`] — Metadata records and property list/map conversion
//! - [`frame`] — Byte cursor, entry decoding session and entry encoder
//!
//! ```
//! use entrywire::frame::{EntryError, MessageReader};
//!
//! fn payloads(entry: Vec<u8>) -> Result<Vec<Vec<u8>>, EntryError> {
//!     let mut reader = MessageReader::new(entry);
//!     reader.read_broker_metadata_if_present()?;
//!     reader.read_message_metadata()?;
//!     reader
//!         .messages()
//!         .map(|msg| msg.map(|m| m.payload.to_vec()))
//!         .collect()
//! }
//! # assert!(payloads(vec![0xff, 0xff]).is_err());
//! ```

/// Re-export metadata records and the property codec.
pub mod proto {
    pub use entrywire_proto::*;
}

/// Re-export the decoding session and frame primitives.
pub mod frame {
    pub use entrywire_frame::*;
}

pub use entrywire_frame::{DecodedMessage, EntryError, MessageReader, ReaderConfig};
pub use entrywire_proto::{
    property_list_to_map, property_map_to_list, BrokerEntryMetadata, KeyValue, MessageMetadata,
    SingleMessageMetadata,
};
