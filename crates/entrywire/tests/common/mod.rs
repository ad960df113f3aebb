//! Entries captured from a broker.
#![allow(dead_code)]

/// Non-batched entry. Properties `a=1`, `b=2`; payload `hello`.
pub const LEGACY_SINGLE_MESSAGE: &[u8] = &[
    0x0e, 0x01, 0x08, 0x36, 0xb4, 0x66, 0x00, 0x00, 0x00, 0x31, 0x0a, 0x0f,
    0x73, 0x74, 0x61, 0x6e, 0x64, 0x61, 0x6c, 0x6f, 0x6e, 0x65, 0x2d, 0x37,
    0x34, 0x2d, 0x30, 0x10, 0x00, 0x18, 0xac, 0xef, 0xe8, 0xa0, 0xe2, 0x2d,
    0x22, 0x06, 0x0a, 0x01, 0x61, 0x12, 0x01, 0x31, 0x22, 0x06, 0x0a, 0x01,
    0x62, 0x12, 0x01, 0x32, 0x48, 0x05, 0x60, 0x05, 0x82, 0x01, 0x00, 0x68,
    0x65, 0x6c, 0x6c, 0x6f,
];

/// Batch of one. Element properties `a=1`, `b=2`; payload `hello`.
pub const BATCH_OF_1: &[u8] = &[
    0x0e, 0x01, 0x1f, 0x80, 0x09, 0x68, 0x00, 0x00, 0x00, 0x1f, 0x0a, 0x0f,
    0x73, 0x74, 0x61, 0x6e, 0x64, 0x61, 0x6c, 0x6f, 0x6e, 0x65, 0x2d, 0x37,
    0x34, 0x2d, 0x31, 0x10, 0x00, 0x18, 0xdb, 0x80, 0xf4, 0xa0, 0xe2, 0x2d,
    0x58, 0x01, 0x82, 0x01, 0x00, 0x00, 0x00, 0x00, 0x16, 0x0a, 0x06, 0x0a,
    0x01, 0x61, 0x12, 0x01, 0x31, 0x0a, 0x06, 0x0a, 0x01, 0x62, 0x12, 0x01,
    0x32, 0x18, 0x05, 0x28, 0x05, 0x40, 0x00, 0x68, 0x65, 0x6c, 0x6c, 0x6f,
];

/// Batch of ten, element sequence ids 0..10, each payload `hello`.
pub const BATCH_OF_10: &[u8] = &[
    0x0e, 0x01, 0x7b, 0x28, 0x8c, 0x08, 0x00, 0x00, 0x00, 0x1f, 0x0a, 0x0f,
    0x73, 0x74, 0x61, 0x6e, 0x64, 0x61, 0x6c, 0x6f, 0x6e, 0x65, 0x2d, 0x37,
    0x34, 0x2d, 0x32, 0x10, 0x00, 0x18, 0xd0, 0xc2, 0xfa, 0xa0, 0xe2, 0x2d,
    0x58, 0x0a, 0x82, 0x01, 0x00, 0x00, 0x00, 0x00, 0x16, 0x0a, 0x06, 0x0a,
    0x01, 0x61, 0x12, 0x01, 0x31, 0x0a, 0x06, 0x0a, 0x01, 0x62, 0x12, 0x01,
    0x32, 0x18, 0x05, 0x28, 0x05, 0x40, 0x00, 0x68, 0x65, 0x6c, 0x6c, 0x6f,
    0x00, 0x00, 0x00, 0x16, 0x0a, 0x06, 0x0a, 0x01, 0x61, 0x12, 0x01, 0x31,
    0x0a, 0x06, 0x0a, 0x01, 0x62, 0x12, 0x01, 0x32, 0x18, 0x05, 0x28, 0x05,
    0x40, 0x01, 0x68, 0x65, 0x6c, 0x6c, 0x6f, 0x00, 0x00, 0x00, 0x16, 0x0a,
    0x06, 0x0a, 0x01, 0x61, 0x12, 0x01, 0x31, 0x0a, 0x06, 0x0a, 0x01, 0x62,
    0x12, 0x01, 0x32, 0x18, 0x05, 0x28, 0x05, 0x40, 0x02, 0x68, 0x65, 0x6c,
    0x6c, 0x6f, 0x00, 0x00, 0x00, 0x16, 0x0a, 0x06, 0x0a, 0x01, 0x61, 0x12,
    0x01, 0x31, 0x0a, 0x06, 0x0a, 0x01, 0x62, 0x12, 0x01, 0x32, 0x18, 0x05,
    0x28, 0x05, 0x40, 0x03, 0x68, 0x65, 0x6c, 0x6c, 0x6f, 0x00, 0x00, 0x00,
    0x16, 0x0a, 0x06, 0x0a, 0x01, 0x61, 0x12, 0x01, 0x31, 0x0a, 0x06, 0x0a,
    0x01, 0x62, 0x12, 0x01, 0x32, 0x18, 0x05, 0x28, 0x05, 0x40, 0x04, 0x68,
    0x65, 0x6c, 0x6c, 0x6f, 0x00, 0x00, 0x00, 0x16, 0x0a, 0x06, 0x0a, 0x01,
    0x61, 0x12, 0x01, 0x31, 0x0a, 0x06, 0x0a, 0x01, 0x62, 0x12, 0x01, 0x32,
    0x18, 0x05, 0x28, 0x05, 0x40, 0x05, 0x68, 0x65, 0x6c, 0x6c, 0x6f, 0x00,
    0x00, 0x00, 0x16, 0x0a, 0x06, 0x0a, 0x01, 0x61, 0x12, 0x01, 0x31, 0x0a,
    0x06, 0x0a, 0x01, 0x62, 0x12, 0x01, 0x32, 0x18, 0x05, 0x28, 0x05, 0x40,
    0x06, 0x68, 0x65, 0x6c, 0x6c, 0x6f, 0x00, 0x00, 0x00, 0x16, 0x0a, 0x06,
    0x0a, 0x01, 0x61, 0x12, 0x01, 0x31, 0x0a, 0x06, 0x0a, 0x01, 0x62, 0x12,
    0x01, 0x32, 0x18, 0x05, 0x28, 0x05, 0x40, 0x07, 0x68, 0x65, 0x6c, 0x6c,
    0x6f, 0x00, 0x00, 0x00, 0x16, 0x0a, 0x06, 0x0a, 0x01, 0x61, 0x12, 0x01,
    0x31, 0x0a, 0x06, 0x0a, 0x01, 0x62, 0x12, 0x01, 0x32, 0x18, 0x05, 0x28,
    0x05, 0x40, 0x08, 0x68, 0x65, 0x6c, 0x6c, 0x6f, 0x00, 0x00, 0x00, 0x16,
    0x0a, 0x06, 0x0a, 0x01, 0x61, 0x12, 0x01, 0x31, 0x0a, 0x06, 0x0a, 0x01,
    0x62, 0x12, 0x01, 0x32, 0x18, 0x05, 0x28, 0x05, 0x40, 0x09, 0x68, 0x65,
    0x6c, 0x6c, 0x6f,
];

/// Broker wrapper alone: timestamp 1646983036054, index 5.
pub const BROKER_ENTRY_METADATA: &[u8] = &[
    0x0e, 0x02, 0x00, 0x00, 0x00, 0x09, 0x08, 0x96, 0xf9, 0xda, 0xbe, 0xf7,
    0x2f, 0x10, 0x05,
];

pub const ALL: &[(&str, &[u8])] = &[
    ("legacy", LEGACY_SINGLE_MESSAGE),
    ("batch-1", BATCH_OF_1),
    ("batch-10", BATCH_OF_10),
    ("broker", BROKER_ENTRY_METADATA),
];
