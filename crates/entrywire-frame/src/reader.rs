use std::fmt;

use bytes::Bytes;
use entrywire_proto::{BrokerEntryMetadata, Message, MessageMetadata, SingleMessageMetadata};
use tracing::{debug, trace};

use crate::codec::{checksum, FrameKind, ReaderConfig};
use crate::cursor::ByteCursor;
use crate::error::{EntryError, Result};

/// Where a decode session stands.
///
/// `Fresh -> [BrokerMetadataRead] -> MessageMetadataRead -> Exhausted`.
/// From `Exhausted` the next frame in the buffer may be started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderState {
    Fresh,
    BrokerMetadataRead,
    MessageMetadataRead {
        /// Each element carries its own single-message metadata.
        batched: bool,
        /// Messages still to be returned by `read_message`.
        remaining: u32,
    },
    Exhausted,
}

impl ReaderState {
    pub fn name(&self) -> &'static str {
        match self {
            ReaderState::Fresh => "fresh",
            ReaderState::BrokerMetadataRead => "broker-metadata-read",
            ReaderState::MessageMetadataRead { .. } => "message-metadata-read",
            ReaderState::Exhausted => "exhausted",
        }
    }
}

impl fmt::Display for ReaderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One message split out of an entry.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedMessage {
    /// Per-message metadata; `None` for the legacy non-batched layout.
    pub metadata: Option<SingleMessageMetadata>,
    /// View into the session's buffer.
    pub payload: Bytes,
}

impl DecodedMessage {
    pub fn into_parts(self) -> (Option<SingleMessageMetadata>, Bytes) {
        (self.metadata, self.payload)
    }
}

/// Pull-based decoder over one complete entry buffer.
///
/// Call [`read_broker_metadata`](Self::read_broker_metadata) if the entry is
/// wrapped by the broker, then [`read_message_metadata`](Self::read_message_metadata),
/// then [`read_message`](Self::read_message) once per message. Every call
/// advances a single shared cursor; a failed call leaves the cursor and the
/// session state exactly where they were.
#[derive(Debug)]
pub struct MessageReader {
    cursor: ByteCursor,
    config: ReaderConfig,
    state: ReaderState,
}

impl MessageReader {
    /// Create a session with default configuration.
    pub fn new(buf: impl Into<Bytes>) -> Self {
        Self::with_config(buf, ReaderConfig::default())
    }

    /// Create a session with explicit configuration.
    pub fn with_config(buf: impl Into<Bytes>, config: ReaderConfig) -> Self {
        Self {
            cursor: ByteCursor::new(buf),
            config,
            state: ReaderState::Fresh,
        }
    }

    /// Classify the frame at the cursor without consuming it.
    pub fn peek_frame_kind(&self) -> Result<FrameKind> {
        let magic = self.cursor.peek_u16()?;
        FrameKind::from_magic(magic).ok_or(EntryError::UnknownMagic { found: magic })
    }

    /// Read the broker-entry-metadata wrapper frame.
    pub fn read_broker_metadata(&mut self) -> Result<BrokerEntryMetadata> {
        self.expect_frame_start("read_broker_metadata", false)?;

        self.transactional(|r| {
            r.read_magic(FrameKind::BrokerEntryMetadata)?;
            let raw = r.read_metadata_block("broker entry")?;
            let meta = BrokerEntryMetadata::decode(raw)
                .map_err(|err| EntryError::corrupt("broker entry", err))?;

            debug!(
                broker_timestamp = ?meta.broker_timestamp,
                index = ?meta.index,
                "decoded broker entry metadata"
            );
            r.state = ReaderState::BrokerMetadataRead;
            Ok(meta)
        })
    }

    /// Read the broker wrapper if the next frame is one.
    ///
    /// Returns `Ok(None)` without consuming anything when the next frame is a
    /// message entry.
    pub fn read_broker_metadata_if_present(&mut self) -> Result<Option<BrokerEntryMetadata>> {
        match self.peek_frame_kind()? {
            FrameKind::BrokerEntryMetadata => self.read_broker_metadata().map(Some),
            FrameKind::MessageEntry => Ok(None),
        }
    }

    /// Read the message-entry header and its metadata record.
    ///
    /// Validates the CRC32-C over everything after the checksum field unless
    /// disabled in [`ReaderConfig`]. On success the declared message count
    /// bounds how many times [`read_message`](Self::read_message) succeeds.
    pub fn read_message_metadata(&mut self) -> Result<MessageMetadata> {
        self.expect_frame_start("read_message_metadata", true)?;

        self.transactional(|r| {
            r.read_magic(FrameKind::MessageEntry)?;
            let declared = r.cursor.read_u32()?;
            let covered_from = r.cursor.position();

            let raw = r.read_metadata_block("message")?;
            let metadata_size = raw.len();
            let metadata = MessageMetadata::decode(raw)
                .map_err(|err| EntryError::corrupt("message", err))?;

            let count = u32::try_from(metadata.batch_size()).map_err(|_| {
                EntryError::CorruptMetadata {
                    frame: "message",
                    reason: format!(
                        "negative num_messages_in_batch {}",
                        metadata.batch_size()
                    ),
                }
            })?;

            if r.config.verify_checksum {
                let computed = checksum(&r.cursor.get_ref()[covered_from..]);
                if computed != declared {
                    return Err(EntryError::ChecksumMismatch {
                        expected: declared,
                        computed,
                    });
                }
            }

            debug!(
                metadata_size,
                num_messages = count,
                batched = metadata.is_batched(),
                "decoded message metadata"
            );
            r.state = if count == 0 {
                ReaderState::Exhausted
            } else {
                ReaderState::MessageMetadataRead {
                    batched: metadata.is_batched(),
                    remaining: count,
                }
            };
            Ok(metadata)
        })
    }

    /// Return the next message of the entry.
    ///
    /// Fails with [`EntryError::EndOfMessage`] once the declared count has
    /// been returned, regardless of any bytes left in the buffer.
    pub fn read_message(&mut self) -> Result<DecodedMessage> {
        let (batched, remaining) = match self.state {
            ReaderState::MessageMetadataRead { batched, remaining } => (batched, remaining),
            ReaderState::Exhausted => return Err(EntryError::EndOfMessage),
            state => {
                return Err(EntryError::InvalidState {
                    operation: "read_message",
                    state: state.name(),
                })
            }
        };

        if !batched {
            let payload = self.cursor.read_remaining();
            trace!(payload_len = payload.len(), "read legacy message");
            self.state = ReaderState::Exhausted;
            return Ok(DecodedMessage {
                metadata: None,
                payload,
            });
        }

        self.transactional(|r| {
            let raw = r.read_metadata_block("single message")?;
            let single = SingleMessageMetadata::decode(raw)
                .map_err(|err| EntryError::corrupt("single message", err))?;
            let payload_size =
                usize::try_from(single.payload_size).map_err(|_| EntryError::CorruptMetadata {
                    frame: "single message",
                    reason: format!("negative payload_size {}", single.payload_size),
                })?;
            let payload = r.cursor.read_bytes(payload_size)?;

            let remaining = remaining - 1;
            trace!(payload_len = payload.len(), remaining, "read batched message");
            r.state = if remaining == 0 {
                ReaderState::Exhausted
            } else {
                ReaderState::MessageMetadataRead { batched, remaining }
            };
            Ok(DecodedMessage {
                metadata: Some(single),
                payload,
            })
        })
    }

    /// Iterate the messages of the current entry.
    ///
    /// Ends cleanly after the declared count. A decode failure is yielded
    /// once and ends the iteration.
    pub fn messages(&mut self) -> Messages<'_> {
        Messages {
            reader: self,
            done: false,
        }
    }

    /// Current cursor offset into the buffer.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Bytes between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.cursor.remaining()
    }

    pub fn state(&self) -> ReaderState {
        self.state
    }

    /// Current reader configuration.
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Borrow the underlying buffer.
    pub fn get_ref(&self) -> &Bytes {
        self.cursor.get_ref()
    }

    /// Consume the session and return the underlying buffer.
    pub fn into_inner(self) -> Bytes {
        self.cursor.into_inner()
    }

    fn expect_frame_start(&self, operation: &'static str, after_broker: bool) -> Result<()> {
        match self.state {
            ReaderState::Fresh | ReaderState::Exhausted => Ok(()),
            ReaderState::BrokerMetadataRead if after_broker => Ok(()),
            state => Err(EntryError::InvalidState {
                operation,
                state: state.name(),
            }),
        }
    }

    fn transactional<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let start = self.cursor.position();
        let result = f(self);
        if result.is_err() {
            self.cursor.rewind(start);
        }
        result
    }

    fn read_magic(&mut self, kind: FrameKind) -> Result<()> {
        let magic = self.cursor.read_u16()?;
        if magic != kind.magic() {
            return Err(EntryError::UnknownMagic { found: magic });
        }
        Ok(())
    }

    fn read_metadata_block(&mut self, frame: &'static str) -> Result<Bytes> {
        let start = self.cursor.position();
        let size = self.cursor.read_u32()? as usize;
        if size > self.config.max_metadata_size {
            self.cursor.rewind(start);
            return Err(EntryError::MetadataTooLarge {
                frame,
                size,
                max: self.config.max_metadata_size,
            });
        }
        self.cursor.read_bytes(size).inspect_err(|_| self.cursor.rewind(start))
    }
}

/// Iterator returned by [`MessageReader::messages`].
#[derive(Debug)]
pub struct Messages<'a> {
    reader: &'a mut MessageReader,
    done: bool,
}

impl Iterator for Messages<'_> {
    type Item = Result<DecodedMessage>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.reader.state == ReaderState::Exhausted {
            return None;
        }
        let item = self.reader.read_message();
        if item.is_err() {
            self.done = true;
        }
        Some(item)
    }
}
