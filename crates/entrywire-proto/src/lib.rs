//! Schema types for broker message entries.
//!
//! The records here are the structured payloads of the length-prefixed
//! metadata blocks inside an entry:
//! - [`MessageMetadata`] follows the message-entry magic and checksum
//! - [`SingleMessageMetadata`] precedes each payload of a batched entry
//! - [`BrokerEntryMetadata`] is the optional broker-added outer wrapper
//!
//! Property lists are exposed in wire order; [`property_list_to_map`] and
//! [`property_map_to_list`] convert to and from the application's map form.

pub mod metadata;
pub mod properties;

pub use metadata::{
    BrokerEntryMetadata, CompressionType, EncryptionKeys, KeyLongValue, KeyValue,
    MessageMetadata, SingleMessageMetadata, DEFAULT_NUM_MESSAGES_IN_BATCH,
};
pub use properties::{property_list_to_map, property_map_to_list};

pub use prost::Message;
