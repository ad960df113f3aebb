//! Structured records carried inside entry frames.
//!
//! Field numbers follow the broker protocol schema. Every field the protocol
//! defines is declared here so that decoding and re-encoding a record keeps
//! all of its known content; unknown tags are skipped on decode.

use std::collections::HashMap;

use crate::properties::property_list_to_map;

/// Number of messages an entry carries when `num_messages_in_batch` is absent.
pub const DEFAULT_NUM_MESSAGES_IN_BATCH: i32 = 1;

/// A single key/value property as it appears on the wire.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyValue {
    #[prost(string, required, tag = "1")]
    pub key: String,
    #[prost(string, required, tag = "2")]
    pub value: String,
}

impl KeyValue {
    /// Create a property from anything string-like.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Key paired with an unsigned numeric value (encryption key metadata).
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyLongValue {
    #[prost(string, required, tag = "1")]
    pub key: String,
    #[prost(uint64, required, tag = "2")]
    pub value: u64,
}

/// An encrypted data key attached to a message.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncryptionKeys {
    #[prost(string, required, tag = "1")]
    pub key: String,
    #[prost(bytes = "vec", required, tag = "2")]
    pub value: Vec<u8>,
    #[prost(message, repeated, tag = "3")]
    pub metadata: Vec<KeyLongValue>,
}

/// Payload compression codec declared by the producer.
///
/// The decoder never decompresses; the value is passed through to the
/// payload owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum CompressionType {
    None = 0,
    Lz4 = 1,
    Zlib = 2,
    Zstd = 3,
    Snappy = 4,
}

/// Producer-set metadata preceding the payload region of an entry.
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageMetadata {
    #[prost(string, required, tag = "1")]
    pub producer_name: String,
    #[prost(uint64, required, tag = "2")]
    pub sequence_id: u64,
    #[prost(uint64, required, tag = "3")]
    pub publish_time: u64,
    /// Properties in wire order. Duplicate keys are preserved here.
    #[prost(message, repeated, tag = "4")]
    pub properties: Vec<KeyValue>,
    #[prost(string, optional, tag = "5")]
    pub replicated_from: Option<String>,
    #[prost(string, optional, tag = "6")]
    pub partition_key: Option<String>,
    #[prost(string, repeated, tag = "7")]
    pub replicate_to: Vec<String>,
    #[prost(enumeration = "CompressionType", optional, tag = "8")]
    pub compression: Option<i32>,
    #[prost(uint32, optional, tag = "9")]
    pub uncompressed_size: Option<u32>,
    /// Present only for batched entries. Absent means the legacy single
    /// message layout.
    #[prost(int32, optional, tag = "11")]
    pub num_messages_in_batch: Option<i32>,
    #[prost(uint64, optional, tag = "12")]
    pub event_time: Option<u64>,
    #[prost(message, repeated, tag = "13")]
    pub encryption_keys: Vec<EncryptionKeys>,
    #[prost(string, optional, tag = "14")]
    pub encryption_algo: Option<String>,
    #[prost(bytes = "vec", optional, tag = "15")]
    pub encryption_param: Option<Vec<u8>>,
    #[prost(bytes = "vec", optional, tag = "16")]
    pub schema_version: Option<Vec<u8>>,
    #[prost(bool, optional, tag = "17")]
    pub partition_key_b64_encoded: Option<bool>,
    #[prost(bytes = "vec", optional, tag = "18")]
    pub ordering_key: Option<Vec<u8>>,
    #[prost(int64, optional, tag = "19")]
    pub deliver_at_time: Option<i64>,
    #[prost(int32, optional, tag = "20")]
    pub marker_type: Option<i32>,
    #[prost(uint64, optional, tag = "22")]
    pub txnid_least_bits: Option<u64>,
    #[prost(uint64, optional, tag = "23")]
    pub txnid_most_bits: Option<u64>,
    #[prost(uint64, optional, tag = "24")]
    pub highest_sequence_id: Option<u64>,
    #[prost(bool, optional, tag = "25")]
    pub null_value: Option<bool>,
    #[prost(string, optional, tag = "26")]
    pub uuid: Option<String>,
    #[prost(int32, optional, tag = "27")]
    pub num_chunks_from_msg: Option<i32>,
    #[prost(int32, optional, tag = "28")]
    pub total_chunk_msg_size: Option<i32>,
    #[prost(int32, optional, tag = "29")]
    pub chunk_id: Option<i32>,
    #[prost(bool, optional, tag = "30")]
    pub null_partition_key: Option<bool>,
}

impl MessageMetadata {
    /// True when the entry carries per-message metadata for each element.
    pub fn is_batched(&self) -> bool {
        self.num_messages_in_batch.is_some()
    }

    /// Declared message count, defaulting to one when the field is absent.
    pub fn batch_size(&self) -> i32 {
        self.num_messages_in_batch
            .unwrap_or(DEFAULT_NUM_MESSAGES_IN_BATCH)
    }

    /// Compression codec, falling back to `None` for absent or unknown values.
    pub fn compression_type(&self) -> CompressionType {
        self.compression
            .and_then(|raw| CompressionType::try_from(raw).ok())
            .unwrap_or(CompressionType::None)
    }

    /// Properties folded into a map (last occurrence wins on duplicate keys).
    pub fn property_map(&self) -> HashMap<String, String> {
        property_list_to_map(&self.properties)
    }
}

/// Per-message metadata for one element of a batched entry.
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SingleMessageMetadata {
    #[prost(message, repeated, tag = "1")]
    pub properties: Vec<KeyValue>,
    #[prost(string, optional, tag = "2")]
    pub partition_key: Option<String>,
    /// Byte length of the payload that immediately follows this record.
    #[prost(int32, required, tag = "3")]
    pub payload_size: i32,
    #[prost(bool, optional, tag = "4")]
    pub compacted_out: Option<bool>,
    #[prost(uint64, optional, tag = "5")]
    pub event_time: Option<u64>,
    #[prost(bool, optional, tag = "6")]
    pub partition_key_b64_encoded: Option<bool>,
    #[prost(bytes = "vec", optional, tag = "7")]
    pub ordering_key: Option<Vec<u8>>,
    /// Offset from the entry's `sequence_id`.
    #[prost(uint64, optional, tag = "8")]
    pub sequence_id: Option<u64>,
    #[prost(bool, optional, tag = "9")]
    pub null_value: Option<bool>,
    #[prost(bool, optional, tag = "10")]
    pub null_partition_key: Option<bool>,
}

impl SingleMessageMetadata {
    /// Properties folded into a map (last occurrence wins on duplicate keys).
    pub fn property_map(&self) -> HashMap<String, String> {
        property_list_to_map(&self.properties)
    }
}

/// Broker-observed metadata prepended to an entry.
///
/// Both fields are independently optional; zero is a legal value for each.
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BrokerEntryMetadata {
    #[prost(uint64, optional, tag = "1")]
    pub broker_timestamp: Option<u64>,
    #[prost(uint64, optional, tag = "2")]
    pub index: Option<u64>,
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn broker_metadata_to_json() {
        let meta = BrokerEntryMetadata {
            broker_timestamp: Some(1_646_983_036_054),
            index: None,
        };
        let json = serde_json::to_value(meta).unwrap();
        assert_eq!(json["broker_timestamp"], 1_646_983_036_054u64);
        assert!(json["index"].is_null());
    }

    #[test]
    fn properties_to_json() {
        let kv = KeyValue::new("a", "1");
        let json = serde_json::to_string(&kv).unwrap();
        assert_eq!(json, r#"{"key":"a","value":"1"}"#);
        let back: KeyValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, kv);
    }
}
