/// Errors that can occur while decoding or encoding entry frames.
#[derive(Debug, thiserror::Error)]
pub enum EntryError {
    /// The buffer (or the declared message count) is exhausted.
    #[error("end of message")]
    EndOfMessage,

    /// The leading bytes of a frame do not match any known frame kind.
    #[error("unknown frame magic 0x{found:04x}")]
    UnknownMagic { found: u16 },

    /// The declared CRC32-C does not match the bytes that follow it.
    #[error("checksum mismatch (declared 0x{expected:08x}, computed 0x{computed:08x})")]
    ChecksumMismatch { expected: u32, computed: u32 },

    /// A length-prefixed metadata record is not a well-formed record.
    #[error("corrupt {frame} metadata: {reason}")]
    CorruptMetadata { frame: &'static str, reason: String },

    /// A declared metadata length exceeds the configured maximum.
    #[error("{frame} metadata too large ({size} bytes, max {max})")]
    MetadataTooLarge {
        frame: &'static str,
        size: usize,
        max: usize,
    },

    /// The operation is not valid in the session's current state.
    #[error("{operation} is not valid in state {state}")]
    InvalidState {
        operation: &'static str,
        state: &'static str,
    },

    /// A record could not be serialized.
    #[error("encode error: {0}")]
    Encode(#[from] prost::EncodeError),
}

impl EntryError {
    pub(crate) fn corrupt(frame: &'static str, err: prost::DecodeError) -> Self {
        EntryError::CorruptMetadata {
            frame,
            reason: err.to_string(),
        }
    }

    /// True for [`EntryError::EndOfMessage`].
    pub fn is_end_of_message(&self) -> bool {
        matches!(self, EntryError::EndOfMessage)
    }
}

pub type Result<T> = std::result::Result<T, EntryError>;
