use bitflags::bitflags;

bitflags! {
    /// Per-transition properties of the decode automaton.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct NodeFlags: u8 {
        const ACCEPTED = 0x01;
        const SYMBOL = 0x02;
        const FAILED = 0x04;
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Node {
    pub state: u8,
    pub flags: NodeFlags,
    pub symbol: u8,
}

const fn n(state: u8, flags: u8, symbol: u8) -> Node {
    Node {
        state,
        flags: NodeFlags::from_bits_retain(flags),
        symbol,
    }
}

/// Nibble-at-a-time decode automaton for the HPACK Huffman code,
/// one row per automaton state, one column per input nibble.
/// Regenerated from the code table; do not edit by hand.
pub static DECODE_TABLE: [[Node; 16]; 256] = [
    // state 0
    [
        n(0x0f, 0, 0x00), n(0x10, 0, 0x00), n(0x11, 0, 0x00), n(0x12, 0, 0x00),
        n(0x13, 0, 0x00), n(0x14, 0, 0x00), n(0x15, 0, 0x00), n(0x16, 0, 0x00),
        n(0x17, 0, 0x00), n(0x18, 0, 0x00), n(0x19, 0, 0x00), n(0x1a, 0, 0x00),
        n(0x1b, 0, 0x00), n(0x1c, 0, 0x00), n(0x1d, 0, 0x00), n(0x1e, 1, 0x00),
    ],
    // state 1
    [
        n(0x00, 3, 0x30), n(0x00, 3, 0x31), n(0x00, 3, 0x32), n(0x00, 3, 0x61),
        n(0x00, 3, 0x63), n(0x00, 3, 0x65), n(0x00, 3, 0x69), n(0x00, 3, 0x6f),
        n(0x00, 3, 0x73), n(0x00, 3, 0x74), n(0x1f, 0, 0x00), n(0x20, 0, 0x00),
        n(0x21, 0, 0x00), n(0x22, 0, 0x00), n(0x23, 0, 0x00), n(0x24, 0, 0x00),
    ],
    // state 2
    [
        n(0x25, 0, 0x00), n(0x26, 0, 0x00), n(0x27, 0, 0x00), n(0x28, 0, 0x00),
        n(0x29, 0, 0x00), n(0x2a, 0, 0x00), n(0x2b, 0, 0x00), n(0x2c, 0, 0x00),
        n(0x2d, 0, 0x00), n(0x2e, 0, 0x00), n(0x2f, 0, 0x00), n(0x30, 0, 0x00),
        n(0x31, 0, 0x00), n(0x32, 0, 0x00), n(0x33, 0, 0x00), n(0x34, 1, 0x00),
    ],
    // state 3
    [
        n(0x01, 2, 0x30), n(0x02, 3, 0x30), n(0x01, 2, 0x31), n(0x02, 3, 0x31),
        n(0x01, 2, 0x32), n(0x02, 3, 0x32), n(0x01, 2, 0x61), n(0x02, 3, 0x61),
        n(0x01, 2, 0x63), n(0x02, 3, 0x63), n(0x01, 2, 0x65), n(0x02, 3, 0x65),
        n(0x01, 2, 0x69), n(0x02, 3, 0x69), n(0x01, 2, 0x6f), n(0x02, 3, 0x6f),
    ],
    // state 4
    [
        n(0x01, 2, 0x73), n(0x02, 3, 0x73), n(0x01, 2, 0x74), n(0x02, 3, 0x74),
        n(0x00, 3, 0x20), n(0x00, 3, 0x25), n(0x00, 3, 0x2d), n(0x00, 3, 0x2e),
        n(0x00, 3, 0x2f), n(0x00, 3, 0x33), n(0x00, 3, 0x34), n(0x00, 3, 0x35),
        n(0x00, 3, 0x36), n(0x00, 3, 0x37), n(0x00, 3, 0x38), n(0x00, 3, 0x39),
    ],
    // state 5
    [
        n(0x00, 3, 0x3d), n(0x00, 3, 0x41), n(0x00, 3, 0x5f), n(0x00, 3, 0x62),
        n(0x00, 3, 0x64), n(0x00, 3, 0x66), n(0x00, 3, 0x67), n(0x00, 3, 0x68),
        n(0x00, 3, 0x6c), n(0x00, 3, 0x6d), n(0x00, 3, 0x6e), n(0x00, 3, 0x70),
        n(0x00, 3, 0x72), n(0x00, 3, 0x75), n(0x35, 0, 0x00), n(0x36, 0, 0x00),
    ],
    // state 6
    [
        n(0x37, 0, 0x00), n(0x38, 0, 0x00), n(0x39, 0, 0x00), n(0x3a, 0, 0x00),
        n(0x3b, 0, 0x00), n(0x3c, 0, 0x00), n(0x3d, 0, 0x00), n(0x3e, 0, 0x00),
        n(0x3f, 0, 0x00), n(0x40, 0, 0x00), n(0x41, 0, 0x00), n(0x42, 0, 0x00),
        n(0x43, 0, 0x00), n(0x44, 0, 0x00), n(0x45, 0, 0x00), n(0x46, 1, 0x00),
    ],
    // state 7
    [
        n(0x03, 2, 0x30), n(0x04, 2, 0x30), n(0x05, 2, 0x30), n(0x06, 3, 0x30),
        n(0x03, 2, 0x31), n(0x04, 2, 0x31), n(0x05, 2, 0x31), n(0x06, 3, 0x31),
        n(0x03, 2, 0x32), n(0x04, 2, 0x32), n(0x05, 2, 0x32), n(0x06, 3, 0x32),
        n(0x03, 2, 0x61), n(0x04, 2, 0x61), n(0x05, 2, 0x61), n(0x06, 3, 0x61),
    ],
    // state 8
    [
        n(0x03, 2, 0x63), n(0x04, 2, 0x63), n(0x05, 2, 0x63), n(0x06, 3, 0x63),
        n(0x03, 2, 0x65), n(0x04, 2, 0x65), n(0x05, 2, 0x65), n(0x06, 3, 0x65),
        n(0x03, 2, 0x69), n(0x04, 2, 0x69), n(0x05, 2, 0x69), n(0x06, 3, 0x69),
        n(0x03, 2, 0x6f), n(0x04, 2, 0x6f), n(0x05, 2, 0x6f), n(0x06, 3, 0x6f),
    ],
    // state 9
    [
        n(0x03, 2, 0x73), n(0x04, 2, 0x73), n(0x05, 2, 0x73), n(0x06, 3, 0x73),
        n(0x03, 2, 0x74), n(0x04, 2, 0x74), n(0x05, 2, 0x74), n(0x06, 3, 0x74),
        n(0x01, 2, 0x20), n(0x02, 3, 0x20), n(0x01, 2, 0x25), n(0x02, 3, 0x25),
        n(0x01, 2, 0x2d), n(0x02, 3, 0x2d), n(0x01, 2, 0x2e), n(0x02, 3, 0x2e),
    ],
    // state 10
    [
        n(0x01, 2, 0x2f), n(0x02, 3, 0x2f), n(0x01, 2, 0x33), n(0x02, 3, 0x33),
        n(0x01, 2, 0x34), n(0x02, 3, 0x34), n(0x01, 2, 0x35), n(0x02, 3, 0x35),
        n(0x01, 2, 0x36), n(0x02, 3, 0x36), n(0x01, 2, 0x37), n(0x02, 3, 0x37),
        n(0x01, 2, 0x38), n(0x02, 3, 0x38), n(0x01, 2, 0x39), n(0x02, 3, 0x39),
    ],
    // state 11
    [
        n(0x01, 2, 0x3d), n(0x02, 3, 0x3d), n(0x01, 2, 0x41), n(0x02, 3, 0x41),
        n(0x01, 2, 0x5f), n(0x02, 3, 0x5f), n(0x01, 2, 0x62), n(0x02, 3, 0x62),
        n(0x01, 2, 0x64), n(0x02, 3, 0x64), n(0x01, 2, 0x66), n(0x02, 3, 0x66),
        n(0x01, 2, 0x67), n(0x02, 3, 0x67), n(0x01, 2, 0x68), n(0x02, 3, 0x68),
    ],
    // state 12
    [
        n(0x01, 2, 0x6c), n(0x02, 3, 0x6c), n(0x01, 2, 0x6d), n(0x02, 3, 0x6d),
        n(0x01, 2, 0x6e), n(0x02, 3, 0x6e), n(0x01, 2, 0x70), n(0x02, 3, 0x70),
        n(0x01, 2, 0x72), n(0x02, 3, 0x72), n(0x01, 2, 0x75), n(0x02, 3, 0x75),
        n(0x00, 3, 0x3a), n(0x00, 3, 0x42), n(0x00, 3, 0x43), n(0x00, 3, 0x44),
    ],
    // state 13
    [
        n(0x00, 3, 0x45), n(0x00, 3, 0x46), n(0x00, 3, 0x47), n(0x00, 3, 0x48),
        n(0x00, 3, 0x49), n(0x00, 3, 0x4a), n(0x00, 3, 0x4b), n(0x00, 3, 0x4c),
        n(0x00, 3, 0x4d), n(0x00, 3, 0x4e), n(0x00, 3, 0x4f), n(0x00, 3, 0x50),
        n(0x00, 3, 0x51), n(0x00, 3, 0x52), n(0x00, 3, 0x53), n(0x00, 3, 0x54),
    ],
    // state 14
    [
        n(0x00, 3, 0x55), n(0x00, 3, 0x56), n(0x00, 3, 0x57), n(0x00, 3, 0x59),
        n(0x00, 3, 0x6a), n(0x00, 3, 0x6b), n(0x00, 3, 0x71), n(0x00, 3, 0x76),
        n(0x00, 3, 0x77), n(0x00, 3, 0x78), n(0x00, 3, 0x79), n(0x00, 3, 0x7a),
        n(0x47, 0, 0x00), n(0x48, 0, 0x00), n(0x49, 0, 0x00), n(0x4a, 1, 0x00),
    ],
    // state 15
    [
        n(0x07, 2, 0x30), n(0x08, 2, 0x30), n(0x09, 2, 0x30), n(0x0a, 2, 0x30),
        n(0x0b, 2, 0x30), n(0x0c, 2, 0x30), n(0x0d, 2, 0x30), n(0x0e, 3, 0x30),
        n(0x07, 2, 0x31), n(0x08, 2, 0x31), n(0x09, 2, 0x31), n(0x0a, 2, 0x31),
        n(0x0b, 2, 0x31), n(0x0c, 2, 0x31), n(0x0d, 2, 0x31), n(0x0e, 3, 0x31),
    ],
    // state 16
    [
        n(0x07, 2, 0x32), n(0x08, 2, 0x32), n(0x09, 2, 0x32), n(0x0a, 2, 0x32),
        n(0x0b, 2, 0x32), n(0x0c, 2, 0x32), n(0x0d, 2, 0x32), n(0x0e, 3, 0x32),
        n(0x07, 2, 0x61), n(0x08, 2, 0x61), n(0x09, 2, 0x61), n(0x0a, 2, 0x61),
        n(0x0b, 2, 0x61), n(0x0c, 2, 0x61), n(0x0d, 2, 0x61), n(0x0e, 3, 0x61),
    ],
    // state 17
    [
        n(0x07, 2, 0x63), n(0x08, 2, 0x63), n(0x09, 2, 0x63), n(0x0a, 2, 0x63),
        n(0x0b, 2, 0x63), n(0x0c, 2, 0x63), n(0x0d, 2, 0x63), n(0x0e, 3, 0x63),
        n(0x07, 2, 0x65), n(0x08, 2, 0x65), n(0x09, 2, 0x65), n(0x0a, 2, 0x65),
        n(0x0b, 2, 0x65), n(0x0c, 2, 0x65), n(0x0d, 2, 0x65), n(0x0e, 3, 0x65),
    ],
    // state 18
    [
        n(0x07, 2, 0x69), n(0x08, 2, 0x69), n(0x09, 2, 0x69), n(0x0a, 2, 0x69),
        n(0x0b, 2, 0x69), n(0x0c, 2, 0x69), n(0x0d, 2, 0x69), n(0x0e, 3, 0x69),
        n(0x07, 2, 0x6f), n(0x08, 2, 0x6f), n(0x09, 2, 0x6f), n(0x0a, 2, 0x6f),
        n(0x0b, 2, 0x6f), n(0x0c, 2, 0x6f), n(0x0d, 2, 0x6f), n(0x0e, 3, 0x6f),
    ],
    // state 19
    [
        n(0x07, 2, 0x73), n(0x08, 2, 0x73), n(0x09, 2, 0x73), n(0x0a, 2, 0x73),
        n(0x0b, 2, 0x73), n(0x0c, 2, 0x73), n(0x0d, 2, 0x73), n(0x0e, 3, 0x73),
        n(0x07, 2, 0x74), n(0x08, 2, 0x74), n(0x09, 2, 0x74), n(0x0a, 2, 0x74),
        n(0x0b, 2, 0x74), n(0x0c, 2, 0x74), n(0x0d, 2, 0x74), n(0x0e, 3, 0x74),
    ],
    // state 20
    [
        n(0x03, 2, 0x20), n(0x04, 2, 0x20), n(0x05, 2, 0x20), n(0x06, 3, 0x20),
        n(0x03, 2, 0x25), n(0x04, 2, 0x25), n(0x05, 2, 0x25), n(0x06, 3, 0x25),
        n(0x03, 2, 0x2d), n(0x04, 2, 0x2d), n(0x05, 2, 0x2d), n(0x06, 3, 0x2d),
        n(0x03, 2, 0x2e), n(0x04, 2, 0x2e), n(0x05, 2, 0x2e), n(0x06, 3, 0x2e),
    ],
    // state 21
    [
        n(0x03, 2, 0x2f), n(0x04, 2, 0x2f), n(0x05, 2, 0x2f), n(0x06, 3, 0x2f),
        n(0x03, 2, 0x33), n(0x04, 2, 0x33), n(0x05, 2, 0x33), n(0x06, 3, 0x33),
        n(0x03, 2, 0x34), n(0x04, 2, 0x34), n(0x05, 2, 0x34), n(0x06, 3, 0x34),
        n(0x03, 2, 0x35), n(0x04, 2, 0x35), n(0x05, 2, 0x35), n(0x06, 3, 0x35),
    ],
    // state 22
    [
        n(0x03, 2, 0x36), n(0x04, 2, 0x36), n(0x05, 2, 0x36), n(0x06, 3, 0x36),
        n(0x03, 2, 0x37), n(0x04, 2, 0x37), n(0x05, 2, 0x37), n(0x06, 3, 0x37),
        n(0x03, 2, 0x38), n(0x04, 2, 0x38), n(0x05, 2, 0x38), n(0x06, 3, 0x38),
        n(0x03, 2, 0x39), n(0x04, 2, 0x39), n(0x05, 2, 0x39), n(0x06, 3, 0x39),
    ],
    // state 23
    [
        n(0x03, 2, 0x3d), n(0x04, 2, 0x3d), n(0x05, 2, 0x3d), n(0x06, 3, 0x3d),
        n(0x03, 2, 0x41), n(0x04, 2, 0x41), n(0x05, 2, 0x41), n(0x06, 3, 0x41),
        n(0x03, 2, 0x5f), n(0x04, 2, 0x5f), n(0x05, 2, 0x5f), n(0x06, 3, 0x5f),
        n(0x03, 2, 0x62), n(0x04, 2, 0x62), n(0x05, 2, 0x62), n(0x06, 3, 0x62),
    ],
    // state 24
    [
        n(0x03, 2, 0x64), n(0x04, 2, 0x64), n(0x05, 2, 0x64), n(0x06, 3, 0x64),
        n(0x03, 2, 0x66), n(0x04, 2, 0x66), n(0x05, 2, 0x66), n(0x06, 3, 0x66),
        n(0x03, 2, 0x67), n(0x04, 2, 0x67), n(0x05, 2, 0x67), n(0x06, 3, 0x67),
        n(0x03, 2, 0x68), n(0x04, 2, 0x68), n(0x05, 2, 0x68), n(0x06, 3, 0x68),
    ],
    // state 25
    [
        n(0x03, 2, 0x6c), n(0x04, 2, 0x6c), n(0x05, 2, 0x6c), n(0x06, 3, 0x6c),
        n(0x03, 2, 0x6d), n(0x04, 2, 0x6d), n(0x05, 2, 0x6d), n(0x06, 3, 0x6d),
        n(0x03, 2, 0x6e), n(0x04, 2, 0x6e), n(0x05, 2, 0x6e), n(0x06, 3, 0x6e),
        n(0x03, 2, 0x70), n(0x04, 2, 0x70), n(0x05, 2, 0x70), n(0x06, 3, 0x70),
    ],
    // state 26
    [
        n(0x03, 2, 0x72), n(0x04, 2, 0x72), n(0x05, 2, 0x72), n(0x06, 3, 0x72),
        n(0x03, 2, 0x75), n(0x04, 2, 0x75), n(0x05, 2, 0x75), n(0x06, 3, 0x75),
        n(0x01, 2, 0x3a), n(0x02, 3, 0x3a), n(0x01, 2, 0x42), n(0x02, 3, 0x42),
        n(0x01, 2, 0x43), n(0x02, 3, 0x43), n(0x01, 2, 0x44), n(0x02, 3, 0x44),
    ],
    // state 27
    [
        n(0x01, 2, 0x45), n(0x02, 3, 0x45), n(0x01, 2, 0x46), n(0x02, 3, 0x46),
        n(0x01, 2, 0x47), n(0x02, 3, 0x47), n(0x01, 2, 0x48), n(0x02, 3, 0x48),
        n(0x01, 2, 0x49), n(0x02, 3, 0x49), n(0x01, 2, 0x4a), n(0x02, 3, 0x4a),
        n(0x01, 2, 0x4b), n(0x02, 3, 0x4b), n(0x01, 2, 0x4c), n(0x02, 3, 0x4c),
    ],
    // state 28
    [
        n(0x01, 2, 0x4d), n(0x02, 3, 0x4d), n(0x01, 2, 0x4e), n(0x02, 3, 0x4e),
        n(0x01, 2, 0x4f), n(0x02, 3, 0x4f), n(0x01, 2, 0x50), n(0x02, 3, 0x50),
        n(0x01, 2, 0x51), n(0x02, 3, 0x51), n(0x01, 2, 0x52), n(0x02, 3, 0x52),
        n(0x01, 2, 0x53), n(0x02, 3, 0x53), n(0x01, 2, 0x54), n(0x02, 3, 0x54),
    ],
    // state 29
    [
        n(0x01, 2, 0x55), n(0x02, 3, 0x55), n(0x01, 2, 0x56), n(0x02, 3, 0x56),
        n(0x01, 2, 0x57), n(0x02, 3, 0x57), n(0x01, 2, 0x59), n(0x02, 3, 0x59),
        n(0x01, 2, 0x6a), n(0x02, 3, 0x6a), n(0x01, 2, 0x6b), n(0x02, 3, 0x6b),
        n(0x01, 2, 0x71), n(0x02, 3, 0x71), n(0x01, 2, 0x76), n(0x02, 3, 0x76),
    ],
    // state 30
    [
        n(0x01, 2, 0x77), n(0x02, 3, 0x77), n(0x01, 2, 0x78), n(0x02, 3, 0x78),
        n(0x01, 2, 0x79), n(0x02, 3, 0x79), n(0x01, 2, 0x7a), n(0x02, 3, 0x7a),
        n(0x00, 3, 0x26), n(0x00, 3, 0x2a), n(0x00, 3, 0x2c), n(0x00, 3, 0x3b),
        n(0x00, 3, 0x58), n(0x00, 3, 0x5a), n(0x4b, 0, 0x00), n(0x4c, 0, 0x00),
    ],
    // state 31
    [
        n(0x07, 2, 0x20), n(0x08, 2, 0x20), n(0x09, 2, 0x20), n(0x0a, 2, 0x20),
        n(0x0b, 2, 0x20), n(0x0c, 2, 0x20), n(0x0d, 2, 0x20), n(0x0e, 3, 0x20),
        n(0x07, 2, 0x25), n(0x08, 2, 0x25), n(0x09, 2, 0x25), n(0x0a, 2, 0x25),
        n(0x0b, 2, 0x25), n(0x0c, 2, 0x25), n(0x0d, 2, 0x25), n(0x0e, 3, 0x25),
    ],
    // state 32
    [
        n(0x07, 2, 0x2d), n(0x08, 2, 0x2d), n(0x09, 2, 0x2d), n(0x0a, 2, 0x2d),
        n(0x0b, 2, 0x2d), n(0x0c, 2, 0x2d), n(0x0d, 2, 0x2d), n(0x0e, 3, 0x2d),
        n(0x07, 2, 0x2e), n(0x08, 2, 0x2e), n(0x09, 2, 0x2e), n(0x0a, 2, 0x2e),
        n(0x0b, 2, 0x2e), n(0x0c, 2, 0x2e), n(0x0d, 2, 0x2e), n(0x0e, 3, 0x2e),
    ],
    // state 33
    [
        n(0x07, 2, 0x2f), n(0x08, 2, 0x2f), n(0x09, 2, 0x2f), n(0x0a, 2, 0x2f),
        n(0x0b, 2, 0x2f), n(0x0c, 2, 0x2f), n(0x0d, 2, 0x2f), n(0x0e, 3, 0x2f),
        n(0x07, 2, 0x33), n(0x08, 2, 0x33), n(0x09, 2, 0x33), n(0x0a, 2, 0x33),
        n(0x0b, 2, 0x33), n(0x0c, 2, 0x33), n(0x0d, 2, 0x33), n(0x0e, 3, 0x33),
    ],
    // state 34
    [
        n(0x07, 2, 0x34), n(0x08, 2, 0x34), n(0x09, 2, 0x34), n(0x0a, 2, 0x34),
        n(0x0b, 2, 0x34), n(0x0c, 2, 0x34), n(0x0d, 2, 0x34), n(0x0e, 3, 0x34),
        n(0x07, 2, 0x35), n(0x08, 2, 0x35), n(0x09, 2, 0x35), n(0x0a, 2, 0x35),
        n(0x0b, 2, 0x35), n(0x0c, 2, 0x35), n(0x0d, 2, 0x35), n(0x0e, 3, 0x35),
    ],
    // state 35
    [
        n(0x07, 2, 0x36), n(0x08, 2, 0x36), n(0x09, 2, 0x36), n(0x0a, 2, 0x36),
        n(0x0b, 2, 0x36), n(0x0c, 2, 0x36), n(0x0d, 2, 0x36), n(0x0e, 3, 0x36),
        n(0x07, 2, 0x37), n(0x08, 2, 0x37), n(0x09, 2, 0x37), n(0x0a, 2, 0x37),
        n(0x0b, 2, 0x37), n(0x0c, 2, 0x37), n(0x0d, 2, 0x37), n(0x0e, 3, 0x37),
    ],
    // state 36
    [
        n(0x07, 2, 0x38), n(0x08, 2, 0x38), n(0x09, 2, 0x38), n(0x0a, 2, 0x38),
        n(0x0b, 2, 0x38), n(0x0c, 2, 0x38), n(0x0d, 2, 0x38), n(0x0e, 3, 0x38),
        n(0x07, 2, 0x39), n(0x08, 2, 0x39), n(0x09, 2, 0x39), n(0x0a, 2, 0x39),
        n(0x0b, 2, 0x39), n(0x0c, 2, 0x39), n(0x0d, 2, 0x39), n(0x0e, 3, 0x39),
    ],
    // state 37
    [
        n(0x07, 2, 0x3d), n(0x08, 2, 0x3d), n(0x09, 2, 0x3d), n(0x0a, 2, 0x3d),
        n(0x0b, 2, 0x3d), n(0x0c, 2, 0x3d), n(0x0d, 2, 0x3d), n(0x0e, 3, 0x3d),
        n(0x07, 2, 0x41), n(0x08, 2, 0x41), n(0x09, 2, 0x41), n(0x0a, 2, 0x41),
        n(0x0b, 2, 0x41), n(0x0c, 2, 0x41), n(0x0d, 2, 0x41), n(0x0e, 3, 0x41),
    ],
    // state 38
    [
        n(0x07, 2, 0x5f), n(0x08, 2, 0x5f), n(0x09, 2, 0x5f), n(0x0a, 2, 0x5f),
        n(0x0b, 2, 0x5f), n(0x0c, 2, 0x5f), n(0x0d, 2, 0x5f), n(0x0e, 3, 0x5f),
        n(0x07, 2, 0x62), n(0x08, 2, 0x62), n(0x09, 2, 0x62), n(0x0a, 2, 0x62),
        n(0x0b, 2, 0x62), n(0x0c, 2, 0x62), n(0x0d, 2, 0x62), n(0x0e, 3, 0x62),
    ],
    // state 39
    [
        n(0x07, 2, 0x64), n(0x08, 2, 0x64), n(0x09, 2, 0x64), n(0x0a, 2, 0x64),
        n(0x0b, 2, 0x64), n(0x0c, 2, 0x64), n(0x0d, 2, 0x64), n(0x0e, 3, 0x64),
        n(0x07, 2, 0x66), n(0x08, 2, 0x66), n(0x09, 2, 0x66), n(0x0a, 2, 0x66),
        n(0x0b, 2, 0x66), n(0x0c, 2, 0x66), n(0x0d, 2, 0x66), n(0x0e, 3, 0x66),
    ],
    // state 40
    [
        n(0x07, 2, 0x67), n(0x08, 2, 0x67), n(0x09, 2, 0x67), n(0x0a, 2, 0x67),
        n(0x0b, 2, 0x67), n(0x0c, 2, 0x67), n(0x0d, 2, 0x67), n(0x0e, 3, 0x67),
        n(0x07, 2, 0x68), n(0x08, 2, 0x68), n(0x09, 2, 0x68), n(0x0a, 2, 0x68),
        n(0x0b, 2, 0x68), n(0x0c, 2, 0x68), n(0x0d, 2, 0x68), n(0x0e, 3, 0x68),
    ],
    // state 41
    [
        n(0x07, 2, 0x6c), n(0x08, 2, 0x6c), n(0x09, 2, 0x6c), n(0x0a, 2, 0x6c),
        n(0x0b, 2, 0x6c), n(0x0c, 2, 0x6c), n(0x0d, 2, 0x6c), n(0x0e, 3, 0x6c),
        n(0x07, 2, 0x6d), n(0x08, 2, 0x6d), n(0x09, 2, 0x6d), n(0x0a, 2, 0x6d),
        n(0x0b, 2, 0x6d), n(0x0c, 2, 0x6d), n(0x0d, 2, 0x6d), n(0x0e, 3, 0x6d),
    ],
    // state 42
    [
        n(0x07, 2, 0x6e), n(0x08, 2, 0x6e), n(0x09, 2, 0x6e), n(0x0a, 2, 0x6e),
        n(0x0b, 2, 0x6e), n(0x0c, 2, 0x6e), n(0x0d, 2, 0x6e), n(0x0e, 3, 0x6e),
        n(0x07, 2, 0x70), n(0x08, 2, 0x70), n(0x09, 2, 0x70), n(0x0a, 2, 0x70),
        n(0x0b, 2, 0x70), n(0x0c, 2, 0x70), n(0x0d, 2, 0x70), n(0x0e, 3, 0x70),
    ],
    // state 43
    [
        n(0x07, 2, 0x72), n(0x08, 2, 0x72), n(0x09, 2, 0x72), n(0x0a, 2, 0x72),
        n(0x0b, 2, 0x72), n(0x0c, 2, 0x72), n(0x0d, 2, 0x72), n(0x0e, 3, 0x72),
        n(0x07, 2, 0x75), n(0x08, 2, 0x75), n(0x09, 2, 0x75), n(0x0a, 2, 0x75),
        n(0x0b, 2, 0x75), n(0x0c, 2, 0x75), n(0x0d, 2, 0x75), n(0x0e, 3, 0x75),
    ],
    // state 44
    [
        n(0x03, 2, 0x3a), n(0x04, 2, 0x3a), n(0x05, 2, 0x3a), n(0x06, 3, 0x3a),
        n(0x03, 2, 0x42), n(0x04, 2, 0x42), n(0x05, 2, 0x42), n(0x06, 3, 0x42),
        n(0x03, 2, 0x43), n(0x04, 2, 0x43), n(0x05, 2, 0x43), n(0x06, 3, 0x43),
        n(0x03, 2, 0x44), n(0x04, 2, 0x44), n(0x05, 2, 0x44), n(0x06, 3, 0x44),
    ],
    // state 45
    [
        n(0x03, 2, 0x45), n(0x04, 2, 0x45), n(0x05, 2, 0x45), n(0x06, 3, 0x45),
        n(0x03, 2, 0x46), n(0x04, 2, 0x46), n(0x05, 2, 0x46), n(0x06, 3, 0x46),
        n(0x03, 2, 0x47), n(0x04, 2, 0x47), n(0x05, 2, 0x47), n(0x06, 3, 0x47),
        n(0x03, 2, 0x48), n(0x04, 2, 0x48), n(0x05, 2, 0x48), n(0x06, 3, 0x48),
    ],
    // state 46
    [
        n(0x03, 2, 0x49), n(0x04, 2, 0x49), n(0x05, 2, 0x49), n(0x06, 3, 0x49),
        n(0x03, 2, 0x4a), n(0x04, 2, 0x4a), n(0x05, 2, 0x4a), n(0x06, 3, 0x4a),
        n(0x03, 2, 0x4b), n(0x04, 2, 0x4b), n(0x05, 2, 0x4b), n(0x06, 3, 0x4b),
        n(0x03, 2, 0x4c), n(0x04, 2, 0x4c), n(0x05, 2, 0x4c), n(0x06, 3, 0x4c),
    ],
    // state 47
    [
        n(0x03, 2, 0x4d), n(0x04, 2, 0x4d), n(0x05, 2, 0x4d), n(0x06, 3, 0x4d),
        n(0x03, 2, 0x4e), n(0x04, 2, 0x4e), n(0x05, 2, 0x4e), n(0x06, 3, 0x4e),
        n(0x03, 2, 0x4f), n(0x04, 2, 0x4f), n(0x05, 2, 0x4f), n(0x06, 3, 0x4f),
        n(0x03, 2, 0x50), n(0x04, 2, 0x50), n(0x05, 2, 0x50), n(0x06, 3, 0x50),
    ],
    // state 48
    [
        n(0x03, 2, 0x51), n(0x04, 2, 0x51), n(0x05, 2, 0x51), n(0x06, 3, 0x51),
        n(0x03, 2, 0x52), n(0x04, 2, 0x52), n(0x05, 2, 0x52), n(0x06, 3, 0x52),
        n(0x03, 2, 0x53), n(0x04, 2, 0x53), n(0x05, 2, 0x53), n(0x06, 3, 0x53),
        n(0x03, 2, 0x54), n(0x04, 2, 0x54), n(0x05, 2, 0x54), n(0x06, 3, 0x54),
    ],
    // state 49
    [
        n(0x03, 2, 0x55), n(0x04, 2, 0x55), n(0x05, 2, 0x55), n(0x06, 3, 0x55),
        n(0x03, 2, 0x56), n(0x04, 2, 0x56), n(0x05, 2, 0x56), n(0x06, 3, 0x56),
        n(0x03, 2, 0x57), n(0x04, 2, 0x57), n(0x05, 2, 0x57), n(0x06, 3, 0x57),
        n(0x03, 2, 0x59), n(0x04, 2, 0x59), n(0x05, 2, 0x59), n(0x06, 3, 0x59),
    ],
    // state 50
    [
        n(0x03, 2, 0x6a), n(0x04, 2, 0x6a), n(0x05, 2, 0x6a), n(0x06, 3, 0x6a),
        n(0x03, 2, 0x6b), n(0x04, 2, 0x6b), n(0x05, 2, 0x6b), n(0x06, 3, 0x6b),
        n(0x03, 2, 0x71), n(0x04, 2, 0x71), n(0x05, 2, 0x71), n(0x06, 3, 0x71),
        n(0x03, 2, 0x76), n(0x04, 2, 0x76), n(0x05, 2, 0x76), n(0x06, 3, 0x76),
    ],
    // state 51
    [
        n(0x03, 2, 0x77), n(0x04, 2, 0x77), n(0x05, 2, 0x77), n(0x06, 3, 0x77),
        n(0x03, 2, 0x78), n(0x04, 2, 0x78), n(0x05, 2, 0x78), n(0x06, 3, 0x78),
        n(0x03, 2, 0x79), n(0x04, 2, 0x79), n(0x05, 2, 0x79), n(0x06, 3, 0x79),
        n(0x03, 2, 0x7a), n(0x04, 2, 0x7a), n(0x05, 2, 0x7a), n(0x06, 3, 0x7a),
    ],
    // state 52
    [
        n(0x01, 2, 0x26), n(0x02, 3, 0x26), n(0x01, 2, 0x2a), n(0x02, 3, 0x2a),
        n(0x01, 2, 0x2c), n(0x02, 3, 0x2c), n(0x01, 2, 0x3b), n(0x02, 3, 0x3b),
        n(0x01, 2, 0x58), n(0x02, 3, 0x58), n(0x01, 2, 0x5a), n(0x02, 3, 0x5a),
        n(0x4d, 0, 0x00), n(0x4e, 0, 0x00), n(0x4f, 0, 0x00), n(0x50, 0, 0x00),
    ],
    // state 53
    [
        n(0x07, 2, 0x3a), n(0x08, 2, 0x3a), n(0x09, 2, 0x3a), n(0x0a, 2, 0x3a),
        n(0x0b, 2, 0x3a), n(0x0c, 2, 0x3a), n(0x0d, 2, 0x3a), n(0x0e, 3, 0x3a),
        n(0x07, 2, 0x42), n(0x08, 2, 0x42), n(0x09, 2, 0x42), n(0x0a, 2, 0x42),
        n(0x0b, 2, 0x42), n(0x0c, 2, 0x42), n(0x0d, 2, 0x42), n(0x0e, 3, 0x42),
    ],
    // state 54
    [
        n(0x07, 2, 0x43), n(0x08, 2, 0x43), n(0x09, 2, 0x43), n(0x0a, 2, 0x43),
        n(0x0b, 2, 0x43), n(0x0c, 2, 0x43), n(0x0d, 2, 0x43), n(0x0e, 3, 0x43),
        n(0x07, 2, 0x44), n(0x08, 2, 0x44), n(0x09, 2, 0x44), n(0x0a, 2, 0x44),
        n(0x0b, 2, 0x44), n(0x0c, 2, 0x44), n(0x0d, 2, 0x44), n(0x0e, 3, 0x44),
    ],
    // state 55
    [
        n(0x07, 2, 0x45), n(0x08, 2, 0x45), n(0x09, 2, 0x45), n(0x0a, 2, 0x45),
        n(0x0b, 2, 0x45), n(0x0c, 2, 0x45), n(0x0d, 2, 0x45), n(0x0e, 3, 0x45),
        n(0x07, 2, 0x46), n(0x08, 2, 0x46), n(0x09, 2, 0x46), n(0x0a, 2, 0x46),
        n(0x0b, 2, 0x46), n(0x0c, 2, 0x46), n(0x0d, 2, 0x46), n(0x0e, 3, 0x46),
    ],
    // state 56
    [
        n(0x07, 2, 0x47), n(0x08, 2, 0x47), n(0x09, 2, 0x47), n(0x0a, 2, 0x47),
        n(0x0b, 2, 0x47), n(0x0c, 2, 0x47), n(0x0d, 2, 0x47), n(0x0e, 3, 0x47),
        n(0x07, 2, 0x48), n(0x08, 2, 0x48), n(0x09, 2, 0x48), n(0x0a, 2, 0x48),
        n(0x0b, 2, 0x48), n(0x0c, 2, 0x48), n(0x0d, 2, 0x48), n(0x0e, 3, 0x48),
    ],
    // state 57
    [
        n(0x07, 2, 0x49), n(0x08, 2, 0x49), n(0x09, 2, 0x49), n(0x0a, 2, 0x49),
        n(0x0b, 2, 0x49), n(0x0c, 2, 0x49), n(0x0d, 2, 0x49), n(0x0e, 3, 0x49),
        n(0x07, 2, 0x4a), n(0x08, 2, 0x4a), n(0x09, 2, 0x4a), n(0x0a, 2, 0x4a),
        n(0x0b, 2, 0x4a), n(0x0c, 2, 0x4a), n(0x0d, 2, 0x4a), n(0x0e, 3, 0x4a),
    ],
    // state 58
    [
        n(0x07, 2, 0x4b), n(0x08, 2, 0x4b), n(0x09, 2, 0x4b), n(0x0a, 2, 0x4b),
        n(0x0b, 2, 0x4b), n(0x0c, 2, 0x4b), n(0x0d, 2, 0x4b), n(0x0e, 3, 0x4b),
        n(0x07, 2, 0x4c), n(0x08, 2, 0x4c), n(0x09, 2, 0x4c), n(0x0a, 2, 0x4c),
        n(0x0b, 2, 0x4c), n(0x0c, 2, 0x4c), n(0x0d, 2, 0x4c), n(0x0e, 3, 0x4c),
    ],
    // state 59
    [
        n(0x07, 2, 0x4d), n(0x08, 2, 0x4d), n(0x09, 2, 0x4d), n(0x0a, 2, 0x4d),
        n(0x0b, 2, 0x4d), n(0x0c, 2, 0x4d), n(0x0d, 2, 0x4d), n(0x0e, 3, 0x4d),
        n(0x07, 2, 0x4e), n(0x08, 2, 0x4e), n(0x09, 2, 0x4e), n(0x0a, 2, 0x4e),
        n(0x0b, 2, 0x4e), n(0x0c, 2, 0x4e), n(0x0d, 2, 0x4e), n(0x0e, 3, 0x4e),
    ],
    // state 60
    [
        n(0x07, 2, 0x4f), n(0x08, 2, 0x4f), n(0x09, 2, 0x4f), n(0x0a, 2, 0x4f),
        n(0x0b, 2, 0x4f), n(0x0c, 2, 0x4f), n(0x0d, 2, 0x4f), n(0x0e, 3, 0x4f),
        n(0x07, 2, 0x50), n(0x08, 2, 0x50), n(0x09, 2, 0x50), n(0x0a, 2, 0x50),
        n(0x0b, 2, 0x50), n(0x0c, 2, 0x50), n(0x0d, 2, 0x50), n(0x0e, 3, 0x50),
    ],
    // state 61
    [
        n(0x07, 2, 0x51), n(0x08, 2, 0x51), n(0x09, 2, 0x51), n(0x0a, 2, 0x51),
        n(0x0b, 2, 0x51), n(0x0c, 2, 0x51), n(0x0d, 2, 0x51), n(0x0e, 3, 0x51),
        n(0x07, 2, 0x52), n(0x08, 2, 0x52), n(0x09, 2, 0x52), n(0x0a, 2, 0x52),
        n(0x0b, 2, 0x52), n(0x0c, 2, 0x52), n(0x0d, 2, 0x52), n(0x0e, 3, 0x52),
    ],
    // state 62
    [
        n(0x07, 2, 0x53), n(0x08, 2, 0x53), n(0x09, 2, 0x53), n(0x0a, 2, 0x53),
        n(0x0b, 2, 0x53), n(0x0c, 2, 0x53), n(0x0d, 2, 0x53), n(0x0e, 3, 0x53),
        n(0x07, 2, 0x54), n(0x08, 2, 0x54), n(0x09, 2, 0x54), n(0x0a, 2, 0x54),
        n(0x0b, 2, 0x54), n(0x0c, 2, 0x54), n(0x0d, 2, 0x54), n(0x0e, 3, 0x54),
    ],
    // state 63
    [
        n(0x07, 2, 0x55), n(0x08, 2, 0x55), n(0x09, 2, 0x55), n(0x0a, 2, 0x55),
        n(0x0b, 2, 0x55), n(0x0c, 2, 0x55), n(0x0d, 2, 0x55), n(0x0e, 3, 0x55),
        n(0x07, 2, 0x56), n(0x08, 2, 0x56), n(0x09, 2, 0x56), n(0x0a, 2, 0x56),
        n(0x0b, 2, 0x56), n(0x0c, 2, 0x56), n(0x0d, 2, 0x56), n(0x0e, 3, 0x56),
    ],
    // state 64
    [
        n(0x07, 2, 0x57), n(0x08, 2, 0x57), n(0x09, 2, 0x57), n(0x0a, 2, 0x57),
        n(0x0b, 2, 0x57), n(0x0c, 2, 0x57), n(0x0d, 2, 0x57), n(0x0e, 3, 0x57),
        n(0x07, 2, 0x59), n(0x08, 2, 0x59), n(0x09, 2, 0x59), n(0x0a, 2, 0x59),
        n(0x0b, 2, 0x59), n(0x0c, 2, 0x59), n(0x0d, 2, 0x59), n(0x0e, 3, 0x59),
    ],
    // state 65
    [
        n(0x07, 2, 0x6a), n(0x08, 2, 0x6a), n(0x09, 2, 0x6a), n(0x0a, 2, 0x6a),
        n(0x0b, 2, 0x6a), n(0x0c, 2, 0x6a), n(0x0d, 2, 0x6a), n(0x0e, 3, 0x6a),
        n(0x07, 2, 0x6b), n(0x08, 2, 0x6b), n(0x09, 2, 0x6b), n(0x0a, 2, 0x6b),
        n(0x0b, 2, 0x6b), n(0x0c, 2, 0x6b), n(0x0d, 2, 0x6b), n(0x0e, 3, 0x6b),
    ],
    // state 66
    [
        n(0x07, 2, 0x71), n(0x08, 2, 0x71), n(0x09, 2, 0x71), n(0x0a, 2, 0x71),
        n(0x0b, 2, 0x71), n(0x0c, 2, 0x71), n(0x0d, 2, 0x71), n(0x0e, 3, 0x71),
        n(0x07, 2, 0x76), n(0x08, 2, 0x76), n(0x09, 2, 0x76), n(0x0a, 2, 0x76),
        n(0x0b, 2, 0x76), n(0x0c, 2, 0x76), n(0x0d, 2, 0x76), n(0x0e, 3, 0x76),
    ],
    // state 67
    [
        n(0x07, 2, 0x77), n(0x08, 2, 0x77), n(0x09, 2, 0x77), n(0x0a, 2, 0x77),
        n(0x0b, 2, 0x77), n(0x0c, 2, 0x77), n(0x0d, 2, 0x77), n(0x0e, 3, 0x77),
        n(0x07, 2, 0x78), n(0x08, 2, 0x78), n(0x09, 2, 0x78), n(0x0a, 2, 0x78),
        n(0x0b, 2, 0x78), n(0x0c, 2, 0x78), n(0x0d, 2, 0x78), n(0x0e, 3, 0x78),
    ],
    // state 68
    [
        n(0x07, 2, 0x79), n(0x08, 2, 0x79), n(0x09, 2, 0x79), n(0x0a, 2, 0x79),
        n(0x0b, 2, 0x79), n(0x0c, 2, 0x79), n(0x0d, 2, 0x79), n(0x0e, 3, 0x79),
        n(0x07, 2, 0x7a), n(0x08, 2, 0x7a), n(0x09, 2, 0x7a), n(0x0a, 2, 0x7a),
        n(0x0b, 2, 0x7a), n(0x0c, 2, 0x7a), n(0x0d, 2, 0x7a), n(0x0e, 3, 0x7a),
    ],
    // state 69
    [
        n(0x03, 2, 0x26), n(0x04, 2, 0x26), n(0x05, 2, 0x26), n(0x06, 3, 0x26),
        n(0x03, 2, 0x2a), n(0x04, 2, 0x2a), n(0x05, 2, 0x2a), n(0x06, 3, 0x2a),
        n(0x03, 2, 0x2c), n(0x04, 2, 0x2c), n(0x05, 2, 0x2c), n(0x06, 3, 0x2c),
        n(0x03, 2, 0x3b), n(0x04, 2, 0x3b), n(0x05, 2, 0x3b), n(0x06, 3, 0x3b),
    ],
    // state 70
    [
        n(0x03, 2, 0x58), n(0x04, 2, 0x58), n(0x05, 2, 0x58), n(0x06, 3, 0x58),
        n(0x03, 2, 0x5a), n(0x04, 2, 0x5a), n(0x05, 2, 0x5a), n(0x06, 3, 0x5a),
        n(0x00, 3, 0x21), n(0x00, 3, 0x22), n(0x00, 3, 0x28), n(0x00, 3, 0x29),
        n(0x00, 3, 0x3f), n(0x51, 0, 0x00), n(0x52, 0, 0x00), n(0x53, 0, 0x00),
    ],
    // state 71
    [
        n(0x07, 2, 0x26), n(0x08, 2, 0x26), n(0x09, 2, 0x26), n(0x0a, 2, 0x26),
        n(0x0b, 2, 0x26), n(0x0c, 2, 0x26), n(0x0d, 2, 0x26), n(0x0e, 3, 0x26),
        n(0x07, 2, 0x2a), n(0x08, 2, 0x2a), n(0x09, 2, 0x2a), n(0x0a, 2, 0x2a),
        n(0x0b, 2, 0x2a), n(0x0c, 2, 0x2a), n(0x0d, 2, 0x2a), n(0x0e, 3, 0x2a),
    ],
    // state 72
    [
        n(0x07, 2, 0x2c), n(0x08, 2, 0x2c), n(0x09, 2, 0x2c), n(0x0a, 2, 0x2c),
        n(0x0b, 2, 0x2c), n(0x0c, 2, 0x2c), n(0x0d, 2, 0x2c), n(0x0e, 3, 0x2c),
        n(0x07, 2, 0x3b), n(0x08, 2, 0x3b), n(0x09, 2, 0x3b), n(0x0a, 2, 0x3b),
        n(0x0b, 2, 0x3b), n(0x0c, 2, 0x3b), n(0x0d, 2, 0x3b), n(0x0e, 3, 0x3b),
    ],
    // state 73
    [
        n(0x07, 2, 0x58), n(0x08, 2, 0x58), n(0x09, 2, 0x58), n(0x0a, 2, 0x58),
        n(0x0b, 2, 0x58), n(0x0c, 2, 0x58), n(0x0d, 2, 0x58), n(0x0e, 3, 0x58),
        n(0x07, 2, 0x5a), n(0x08, 2, 0x5a), n(0x09, 2, 0x5a), n(0x0a, 2, 0x5a),
        n(0x0b, 2, 0x5a), n(0x0c, 2, 0x5a), n(0x0d, 2, 0x5a), n(0x0e, 3, 0x5a),
    ],
    // state 74
    [
        n(0x01, 2, 0x21), n(0x02, 3, 0x21), n(0x01, 2, 0x22), n(0x02, 3, 0x22),
        n(0x01, 2, 0x28), n(0x02, 3, 0x28), n(0x01, 2, 0x29), n(0x02, 3, 0x29),
        n(0x01, 2, 0x3f), n(0x02, 3, 0x3f), n(0x00, 3, 0x27), n(0x00, 3, 0x2b),
        n(0x00, 3, 0x7c), n(0x54, 0, 0x00), n(0x55, 0, 0x00), n(0x56, 0, 0x00),
    ],
    // state 75
    [
        n(0x03, 2, 0x21), n(0x04, 2, 0x21), n(0x05, 2, 0x21), n(0x06, 3, 0x21),
        n(0x03, 2, 0x22), n(0x04, 2, 0x22), n(0x05, 2, 0x22), n(0x06, 3, 0x22),
        n(0x03, 2, 0x28), n(0x04, 2, 0x28), n(0x05, 2, 0x28), n(0x06, 3, 0x28),
        n(0x03, 2, 0x29), n(0x04, 2, 0x29), n(0x05, 2, 0x29), n(0x06, 3, 0x29),
    ],
    // state 76
    [
        n(0x03, 2, 0x3f), n(0x04, 2, 0x3f), n(0x05, 2, 0x3f), n(0x06, 3, 0x3f),
        n(0x01, 2, 0x27), n(0x02, 3, 0x27), n(0x01, 2, 0x2b), n(0x02, 3, 0x2b),
        n(0x01, 2, 0x7c), n(0x02, 3, 0x7c), n(0x00, 3, 0x23), n(0x00, 3, 0x3e),
        n(0x57, 0, 0x00), n(0x58, 0, 0x00), n(0x59, 0, 0x00), n(0x5a, 0, 0x00),
    ],
    // state 77
    [
        n(0x07, 2, 0x21), n(0x08, 2, 0x21), n(0x09, 2, 0x21), n(0x0a, 2, 0x21),
        n(0x0b, 2, 0x21), n(0x0c, 2, 0x21), n(0x0d, 2, 0x21), n(0x0e, 3, 0x21),
        n(0x07, 2, 0x22), n(0x08, 2, 0x22), n(0x09, 2, 0x22), n(0x0a, 2, 0x22),
        n(0x0b, 2, 0x22), n(0x0c, 2, 0x22), n(0x0d, 2, 0x22), n(0x0e, 3, 0x22),
    ],
    // state 78
    [
        n(0x07, 2, 0x28), n(0x08, 2, 0x28), n(0x09, 2, 0x28), n(0x0a, 2, 0x28),
        n(0x0b, 2, 0x28), n(0x0c, 2, 0x28), n(0x0d, 2, 0x28), n(0x0e, 3, 0x28),
        n(0x07, 2, 0x29), n(0x08, 2, 0x29), n(0x09, 2, 0x29), n(0x0a, 2, 0x29),
        n(0x0b, 2, 0x29), n(0x0c, 2, 0x29), n(0x0d, 2, 0x29), n(0x0e, 3, 0x29),
    ],
    // state 79
    [
        n(0x07, 2, 0x3f), n(0x08, 2, 0x3f), n(0x09, 2, 0x3f), n(0x0a, 2, 0x3f),
        n(0x0b, 2, 0x3f), n(0x0c, 2, 0x3f), n(0x0d, 2, 0x3f), n(0x0e, 3, 0x3f),
        n(0x03, 2, 0x27), n(0x04, 2, 0x27), n(0x05, 2, 0x27), n(0x06, 3, 0x27),
        n(0x03, 2, 0x2b), n(0x04, 2, 0x2b), n(0x05, 2, 0x2b), n(0x06, 3, 0x2b),
    ],
    // state 80
    [
        n(0x03, 2, 0x7c), n(0x04, 2, 0x7c), n(0x05, 2, 0x7c), n(0x06, 3, 0x7c),
        n(0x01, 2, 0x23), n(0x02, 3, 0x23), n(0x01, 2, 0x3e), n(0x02, 3, 0x3e),
        n(0x00, 3, 0x00), n(0x00, 3, 0x24), n(0x00, 3, 0x40), n(0x00, 3, 0x5b),
        n(0x00, 3, 0x5d), n(0x00, 3, 0x7e), n(0x5b, 0, 0x00), n(0x5c, 0, 0x00),
    ],
    // state 81
    [
        n(0x07, 2, 0x27), n(0x08, 2, 0x27), n(0x09, 2, 0x27), n(0x0a, 2, 0x27),
        n(0x0b, 2, 0x27), n(0x0c, 2, 0x27), n(0x0d, 2, 0x27), n(0x0e, 3, 0x27),
        n(0x07, 2, 0x2b), n(0x08, 2, 0x2b), n(0x09, 2, 0x2b), n(0x0a, 2, 0x2b),
        n(0x0b, 2, 0x2b), n(0x0c, 2, 0x2b), n(0x0d, 2, 0x2b), n(0x0e, 3, 0x2b),
    ],
    // state 82
    [
        n(0x07, 2, 0x7c), n(0x08, 2, 0x7c), n(0x09, 2, 0x7c), n(0x0a, 2, 0x7c),
        n(0x0b, 2, 0x7c), n(0x0c, 2, 0x7c), n(0x0d, 2, 0x7c), n(0x0e, 3, 0x7c),
        n(0x03, 2, 0x23), n(0x04, 2, 0x23), n(0x05, 2, 0x23), n(0x06, 3, 0x23),
        n(0x03, 2, 0x3e), n(0x04, 2, 0x3e), n(0x05, 2, 0x3e), n(0x06, 3, 0x3e),
    ],
    // state 83
    [
        n(0x01, 2, 0x00), n(0x02, 3, 0x00), n(0x01, 2, 0x24), n(0x02, 3, 0x24),
        n(0x01, 2, 0x40), n(0x02, 3, 0x40), n(0x01, 2, 0x5b), n(0x02, 3, 0x5b),
        n(0x01, 2, 0x5d), n(0x02, 3, 0x5d), n(0x01, 2, 0x7e), n(0x02, 3, 0x7e),
        n(0x00, 3, 0x5e), n(0x00, 3, 0x7d), n(0x5d, 0, 0x00), n(0x5e, 0, 0x00),
    ],
    // state 84
    [
        n(0x07, 2, 0x23), n(0x08, 2, 0x23), n(0x09, 2, 0x23), n(0x0a, 2, 0x23),
        n(0x0b, 2, 0x23), n(0x0c, 2, 0x23), n(0x0d, 2, 0x23), n(0x0e, 3, 0x23),
        n(0x07, 2, 0x3e), n(0x08, 2, 0x3e), n(0x09, 2, 0x3e), n(0x0a, 2, 0x3e),
        n(0x0b, 2, 0x3e), n(0x0c, 2, 0x3e), n(0x0d, 2, 0x3e), n(0x0e, 3, 0x3e),
    ],
    // state 85
    [
        n(0x03, 2, 0x00), n(0x04, 2, 0x00), n(0x05, 2, 0x00), n(0x06, 3, 0x00),
        n(0x03, 2, 0x24), n(0x04, 2, 0x24), n(0x05, 2, 0x24), n(0x06, 3, 0x24),
        n(0x03, 2, 0x40), n(0x04, 2, 0x40), n(0x05, 2, 0x40), n(0x06, 3, 0x40),
        n(0x03, 2, 0x5b), n(0x04, 2, 0x5b), n(0x05, 2, 0x5b), n(0x06, 3, 0x5b),
    ],
    // state 86
    [
        n(0x03, 2, 0x5d), n(0x04, 2, 0x5d), n(0x05, 2, 0x5d), n(0x06, 3, 0x5d),
        n(0x03, 2, 0x7e), n(0x04, 2, 0x7e), n(0x05, 2, 0x7e), n(0x06, 3, 0x7e),
        n(0x01, 2, 0x5e), n(0x02, 3, 0x5e), n(0x01, 2, 0x7d), n(0x02, 3, 0x7d),
        n(0x00, 3, 0x3c), n(0x00, 3, 0x60), n(0x00, 3, 0x7b), n(0x5f, 0, 0x00),
    ],
    // state 87
    [
        n(0x07, 2, 0x00), n(0x08, 2, 0x00), n(0x09, 2, 0x00), n(0x0a, 2, 0x00),
        n(0x0b, 2, 0x00), n(0x0c, 2, 0x00), n(0x0d, 2, 0x00), n(0x0e, 3, 0x00),
        n(0x07, 2, 0x24), n(0x08, 2, 0x24), n(0x09, 2, 0x24), n(0x0a, 2, 0x24),
        n(0x0b, 2, 0x24), n(0x0c, 2, 0x24), n(0x0d, 2, 0x24), n(0x0e, 3, 0x24),
    ],
    // state 88
    [
        n(0x07, 2, 0x40), n(0x08, 2, 0x40), n(0x09, 2, 0x40), n(0x0a, 2, 0x40),
        n(0x0b, 2, 0x40), n(0x0c, 2, 0x40), n(0x0d, 2, 0x40), n(0x0e, 3, 0x40),
        n(0x07, 2, 0x5b), n(0x08, 2, 0x5b), n(0x09, 2, 0x5b), n(0x0a, 2, 0x5b),
        n(0x0b, 2, 0x5b), n(0x0c, 2, 0x5b), n(0x0d, 2, 0x5b), n(0x0e, 3, 0x5b),
    ],
    // state 89
    [
        n(0x07, 2, 0x5d), n(0x08, 2, 0x5d), n(0x09, 2, 0x5d), n(0x0a, 2, 0x5d),
        n(0x0b, 2, 0x5d), n(0x0c, 2, 0x5d), n(0x0d, 2, 0x5d), n(0x0e, 3, 0x5d),
        n(0x07, 2, 0x7e), n(0x08, 2, 0x7e), n(0x09, 2, 0x7e), n(0x0a, 2, 0x7e),
        n(0x0b, 2, 0x7e), n(0x0c, 2, 0x7e), n(0x0d, 2, 0x7e), n(0x0e, 3, 0x7e),
    ],
    // state 90
    [
        n(0x03, 2, 0x5e), n(0x04, 2, 0x5e), n(0x05, 2, 0x5e), n(0x06, 3, 0x5e),
        n(0x03, 2, 0x7d), n(0x04, 2, 0x7d), n(0x05, 2, 0x7d), n(0x06, 3, 0x7d),
        n(0x01, 2, 0x3c), n(0x02, 3, 0x3c), n(0x01, 2, 0x60), n(0x02, 3, 0x60),
        n(0x01, 2, 0x7b), n(0x02, 3, 0x7b), n(0x60, 0, 0x00), n(0x61, 0, 0x00),
    ],
    // state 91
    [
        n(0x07, 2, 0x5e), n(0x08, 2, 0x5e), n(0x09, 2, 0x5e), n(0x0a, 2, 0x5e),
        n(0x0b, 2, 0x5e), n(0x0c, 2, 0x5e), n(0x0d, 2, 0x5e), n(0x0e, 3, 0x5e),
        n(0x07, 2, 0x7d), n(0x08, 2, 0x7d), n(0x09, 2, 0x7d), n(0x0a, 2, 0x7d),
        n(0x0b, 2, 0x7d), n(0x0c, 2, 0x7d), n(0x0d, 2, 0x7d), n(0x0e, 3, 0x7d),
    ],
    // state 92
    [
        n(0x03, 2, 0x3c), n(0x04, 2, 0x3c), n(0x05, 2, 0x3c), n(0x06, 3, 0x3c),
        n(0x03, 2, 0x60), n(0x04, 2, 0x60), n(0x05, 2, 0x60), n(0x06, 3, 0x60),
        n(0x03, 2, 0x7b), n(0x04, 2, 0x7b), n(0x05, 2, 0x7b), n(0x06, 3, 0x7b),
        n(0x62, 0, 0x00), n(0x63, 0, 0x00), n(0x64, 0, 0x00), n(0x65, 0, 0x00),
    ],
    // state 93
    [
        n(0x07, 2, 0x3c), n(0x08, 2, 0x3c), n(0x09, 2, 0x3c), n(0x0a, 2, 0x3c),
        n(0x0b, 2, 0x3c), n(0x0c, 2, 0x3c), n(0x0d, 2, 0x3c), n(0x0e, 3, 0x3c),
        n(0x07, 2, 0x60), n(0x08, 2, 0x60), n(0x09, 2, 0x60), n(0x0a, 2, 0x60),
        n(0x0b, 2, 0x60), n(0x0c, 2, 0x60), n(0x0d, 2, 0x60), n(0x0e, 3, 0x60),
    ],
    // state 94
    [
        n(0x07, 2, 0x7b), n(0x08, 2, 0x7b), n(0x09, 2, 0x7b), n(0x0a, 2, 0x7b),
        n(0x0b, 2, 0x7b), n(0x0c, 2, 0x7b), n(0x0d, 2, 0x7b), n(0x0e, 3, 0x7b),
        n(0x66, 0, 0x00), n(0x67, 0, 0x00), n(0x68, 0, 0x00), n(0x69, 0, 0x00),
        n(0x6a, 0, 0x00), n(0x6b, 0, 0x00), n(0x6c, 0, 0x00), n(0x6d, 0, 0x00),
    ],
    // state 95
    [
        n(0x00, 3, 0x5c), n(0x00, 3, 0xc3), n(0x00, 3, 0xd0), n(0x6e, 0, 0x00),
        n(0x6f, 0, 0x00), n(0x70, 0, 0x00), n(0x71, 0, 0x00), n(0x72, 0, 0x00),
        n(0x73, 0, 0x00), n(0x74, 0, 0x00), n(0x75, 0, 0x00), n(0x76, 0, 0x00),
        n(0x77, 0, 0x00), n(0x78, 0, 0x00), n(0x79, 0, 0x00), n(0x7a, 0, 0x00),
    ],
    // state 96
    [
        n(0x01, 2, 0x5c), n(0x02, 3, 0x5c), n(0x01, 2, 0xc3), n(0x02, 3, 0xc3),
        n(0x01, 2, 0xd0), n(0x02, 3, 0xd0), n(0x00, 3, 0x80), n(0x00, 3, 0x82),
        n(0x00, 3, 0x83), n(0x00, 3, 0xa2), n(0x00, 3, 0xb8), n(0x00, 3, 0xc2),
        n(0x00, 3, 0xe0), n(0x00, 3, 0xe2), n(0x7b, 0, 0x00), n(0x7c, 0, 0x00),
    ],
    // state 97
    [
        n(0x7d, 0, 0x00), n(0x7e, 0, 0x00), n(0x7f, 0, 0x00), n(0x80, 0, 0x00),
        n(0x81, 0, 0x00), n(0x82, 0, 0x00), n(0x83, 0, 0x00), n(0x84, 0, 0x00),
        n(0x85, 0, 0x00), n(0x86, 0, 0x00), n(0x87, 0, 0x00), n(0x88, 0, 0x00),
        n(0x89, 0, 0x00), n(0x8a, 0, 0x00), n(0x8b, 0, 0x00), n(0x8c, 0, 0x00),
    ],
    // state 98
    [
        n(0x03, 2, 0x5c), n(0x04, 2, 0x5c), n(0x05, 2, 0x5c), n(0x06, 3, 0x5c),
        n(0x03, 2, 0xc3), n(0x04, 2, 0xc3), n(0x05, 2, 0xc3), n(0x06, 3, 0xc3),
        n(0x03, 2, 0xd0), n(0x04, 2, 0xd0), n(0x05, 2, 0xd0), n(0x06, 3, 0xd0),
        n(0x01, 2, 0x80), n(0x02, 3, 0x80), n(0x01, 2, 0x82), n(0x02, 3, 0x82),
    ],
    // state 99
    [
        n(0x01, 2, 0x83), n(0x02, 3, 0x83), n(0x01, 2, 0xa2), n(0x02, 3, 0xa2),
        n(0x01, 2, 0xb8), n(0x02, 3, 0xb8), n(0x01, 2, 0xc2), n(0x02, 3, 0xc2),
        n(0x01, 2, 0xe0), n(0x02, 3, 0xe0), n(0x01, 2, 0xe2), n(0x02, 3, 0xe2),
        n(0x00, 3, 0x99), n(0x00, 3, 0xa1), n(0x00, 3, 0xa7), n(0x00, 3, 0xac),
    ],
    // state 100
    [
        n(0x00, 3, 0xb0), n(0x00, 3, 0xb1), n(0x00, 3, 0xb3), n(0x00, 3, 0xd1),
        n(0x00, 3, 0xd8), n(0x00, 3, 0xd9), n(0x00, 3, 0xe3), n(0x00, 3, 0xe5),
        n(0x00, 3, 0xe6), n(0x8d, 0, 0x00), n(0x8e, 0, 0x00), n(0x8f, 0, 0x00),
        n(0x90, 0, 0x00), n(0x91, 0, 0x00), n(0x92, 0, 0x00), n(0x93, 0, 0x00),
    ],
    // state 101
    [
        n(0x94, 0, 0x00), n(0x95, 0, 0x00), n(0x96, 0, 0x00), n(0x97, 0, 0x00),
        n(0x98, 0, 0x00), n(0x99, 0, 0x00), n(0x9a, 0, 0x00), n(0x9b, 0, 0x00),
        n(0x9c, 0, 0x00), n(0x9d, 0, 0x00), n(0x9e, 0, 0x00), n(0x9f, 0, 0x00),
        n(0xa0, 0, 0x00), n(0xa1, 0, 0x00), n(0xa2, 0, 0x00), n(0xa3, 0, 0x00),
    ],
    // state 102
    [
        n(0x07, 2, 0x5c), n(0x08, 2, 0x5c), n(0x09, 2, 0x5c), n(0x0a, 2, 0x5c),
        n(0x0b, 2, 0x5c), n(0x0c, 2, 0x5c), n(0x0d, 2, 0x5c), n(0x0e, 3, 0x5c),
        n(0x07, 2, 0xc3), n(0x08, 2, 0xc3), n(0x09, 2, 0xc3), n(0x0a, 2, 0xc3),
        n(0x0b, 2, 0xc3), n(0x0c, 2, 0xc3), n(0x0d, 2, 0xc3), n(0x0e, 3, 0xc3),
    ],
    // state 103
    [
        n(0x07, 2, 0xd0), n(0x08, 2, 0xd0), n(0x09, 2, 0xd0), n(0x0a, 2, 0xd0),
        n(0x0b, 2, 0xd0), n(0x0c, 2, 0xd0), n(0x0d, 2, 0xd0), n(0x0e, 3, 0xd0),
        n(0x03, 2, 0x80), n(0x04, 2, 0x80), n(0x05, 2, 0x80), n(0x06, 3, 0x80),
        n(0x03, 2, 0x82), n(0x04, 2, 0x82), n(0x05, 2, 0x82), n(0x06, 3, 0x82),
    ],
    // state 104
    [
        n(0x03, 2, 0x83), n(0x04, 2, 0x83), n(0x05, 2, 0x83), n(0x06, 3, 0x83),
        n(0x03, 2, 0xa2), n(0x04, 2, 0xa2), n(0x05, 2, 0xa2), n(0x06, 3, 0xa2),
        n(0x03, 2, 0xb8), n(0x04, 2, 0xb8), n(0x05, 2, 0xb8), n(0x06, 3, 0xb8),
        n(0x03, 2, 0xc2), n(0x04, 2, 0xc2), n(0x05, 2, 0xc2), n(0x06, 3, 0xc2),
    ],
    // state 105
    [
        n(0x03, 2, 0xe0), n(0x04, 2, 0xe0), n(0x05, 2, 0xe0), n(0x06, 3, 0xe0),
        n(0x03, 2, 0xe2), n(0x04, 2, 0xe2), n(0x05, 2, 0xe2), n(0x06, 3, 0xe2),
        n(0x01, 2, 0x99), n(0x02, 3, 0x99), n(0x01, 2, 0xa1), n(0x02, 3, 0xa1),
        n(0x01, 2, 0xa7), n(0x02, 3, 0xa7), n(0x01, 2, 0xac), n(0x02, 3, 0xac),
    ],
    // state 106
    [
        n(0x01, 2, 0xb0), n(0x02, 3, 0xb0), n(0x01, 2, 0xb1), n(0x02, 3, 0xb1),
        n(0x01, 2, 0xb3), n(0x02, 3, 0xb3), n(0x01, 2, 0xd1), n(0x02, 3, 0xd1),
        n(0x01, 2, 0xd8), n(0x02, 3, 0xd8), n(0x01, 2, 0xd9), n(0x02, 3, 0xd9),
        n(0x01, 2, 0xe3), n(0x02, 3, 0xe3), n(0x01, 2, 0xe5), n(0x02, 3, 0xe5),
    ],
    // state 107
    [
        n(0x01, 2, 0xe6), n(0x02, 3, 0xe6), n(0x00, 3, 0x81), n(0x00, 3, 0x84),
        n(0x00, 3, 0x85), n(0x00, 3, 0x86), n(0x00, 3, 0x88), n(0x00, 3, 0x92),
        n(0x00, 3, 0x9a), n(0x00, 3, 0x9c), n(0x00, 3, 0xa0), n(0x00, 3, 0xa3),
        n(0x00, 3, 0xa4), n(0x00, 3, 0xa9), n(0x00, 3, 0xaa), n(0x00, 3, 0xad),
    ],
    // state 108
    [
        n(0x00, 3, 0xb2), n(0x00, 3, 0xb5), n(0x00, 3, 0xb9), n(0x00, 3, 0xba),
        n(0x00, 3, 0xbb), n(0x00, 3, 0xbd), n(0x00, 3, 0xbe), n(0x00, 3, 0xc4),
        n(0x00, 3, 0xc6), n(0x00, 3, 0xe4), n(0x00, 3, 0xe8), n(0x00, 3, 0xe9),
        n(0xa4, 0, 0x00), n(0xa5, 0, 0x00), n(0xa6, 0, 0x00), n(0xa7, 0, 0x00),
    ],
    // state 109
    [
        n(0xa8, 0, 0x00), n(0xa9, 0, 0x00), n(0xaa, 0, 0x00), n(0xab, 0, 0x00),
        n(0xac, 0, 0x00), n(0xad, 0, 0x00), n(0xae, 0, 0x00), n(0xaf, 0, 0x00),
        n(0xb0, 0, 0x00), n(0xb1, 0, 0x00), n(0xb2, 0, 0x00), n(0xb3, 0, 0x00),
        n(0xb4, 0, 0x00), n(0xb5, 0, 0x00), n(0xb6, 0, 0x00), n(0xb7, 0, 0x00),
    ],
    // state 110
    [
        n(0x07, 2, 0x80), n(0x08, 2, 0x80), n(0x09, 2, 0x80), n(0x0a, 2, 0x80),
        n(0x0b, 2, 0x80), n(0x0c, 2, 0x80), n(0x0d, 2, 0x80), n(0x0e, 3, 0x80),
        n(0x07, 2, 0x82), n(0x08, 2, 0x82), n(0x09, 2, 0x82), n(0x0a, 2, 0x82),
        n(0x0b, 2, 0x82), n(0x0c, 2, 0x82), n(0x0d, 2, 0x82), n(0x0e, 3, 0x82),
    ],
    // state 111
    [
        n(0x07, 2, 0x83), n(0x08, 2, 0x83), n(0x09, 2, 0x83), n(0x0a, 2, 0x83),
        n(0x0b, 2, 0x83), n(0x0c, 2, 0x83), n(0x0d, 2, 0x83), n(0x0e, 3, 0x83),
        n(0x07, 2, 0xa2), n(0x08, 2, 0xa2), n(0x09, 2, 0xa2), n(0x0a, 2, 0xa2),
        n(0x0b, 2, 0xa2), n(0x0c, 2, 0xa2), n(0x0d, 2, 0xa2), n(0x0e, 3, 0xa2),
    ],
    // state 112
    [
        n(0x07, 2, 0xb8), n(0x08, 2, 0xb8), n(0x09, 2, 0xb8), n(0x0a, 2, 0xb8),
        n(0x0b, 2, 0xb8), n(0x0c, 2, 0xb8), n(0x0d, 2, 0xb8), n(0x0e, 3, 0xb8),
        n(0x07, 2, 0xc2), n(0x08, 2, 0xc2), n(0x09, 2, 0xc2), n(0x0a, 2, 0xc2),
        n(0x0b, 2, 0xc2), n(0x0c, 2, 0xc2), n(0x0d, 2, 0xc2), n(0x0e, 3, 0xc2),
    ],
    // state 113
    [
        n(0x07, 2, 0xe0), n(0x08, 2, 0xe0), n(0x09, 2, 0xe0), n(0x0a, 2, 0xe0),
        n(0x0b, 2, 0xe0), n(0x0c, 2, 0xe0), n(0x0d, 2, 0xe0), n(0x0e, 3, 0xe0),
        n(0x07, 2, 0xe2), n(0x08, 2, 0xe2), n(0x09, 2, 0xe2), n(0x0a, 2, 0xe2),
        n(0x0b, 2, 0xe2), n(0x0c, 2, 0xe2), n(0x0d, 2, 0xe2), n(0x0e, 3, 0xe2),
    ],
    // state 114
    [
        n(0x03, 2, 0x99), n(0x04, 2, 0x99), n(0x05, 2, 0x99), n(0x06, 3, 0x99),
        n(0x03, 2, 0xa1), n(0x04, 2, 0xa1), n(0x05, 2, 0xa1), n(0x06, 3, 0xa1),
        n(0x03, 2, 0xa7), n(0x04, 2, 0xa7), n(0x05, 2, 0xa7), n(0x06, 3, 0xa7),
        n(0x03, 2, 0xac), n(0x04, 2, 0xac), n(0x05, 2, 0xac), n(0x06, 3, 0xac),
    ],
    // state 115
    [
        n(0x03, 2, 0xb0), n(0x04, 2, 0xb0), n(0x05, 2, 0xb0), n(0x06, 3, 0xb0),
        n(0x03, 2, 0xb1), n(0x04, 2, 0xb1), n(0x05, 2, 0xb1), n(0x06, 3, 0xb1),
        n(0x03, 2, 0xb3), n(0x04, 2, 0xb3), n(0x05, 2, 0xb3), n(0x06, 3, 0xb3),
        n(0x03, 2, 0xd1), n(0x04, 2, 0xd1), n(0x05, 2, 0xd1), n(0x06, 3, 0xd1),
    ],
    // state 116
    [
        n(0x03, 2, 0xd8), n(0x04, 2, 0xd8), n(0x05, 2, 0xd8), n(0x06, 3, 0xd8),
        n(0x03, 2, 0xd9), n(0x04, 2, 0xd9), n(0x05, 2, 0xd9), n(0x06, 3, 0xd9),
        n(0x03, 2, 0xe3), n(0x04, 2, 0xe3), n(0x05, 2, 0xe3), n(0x06, 3, 0xe3),
        n(0x03, 2, 0xe5), n(0x04, 2, 0xe5), n(0x05, 2, 0xe5), n(0x06, 3, 0xe5),
    ],
    // state 117
    [
        n(0x03, 2, 0xe6), n(0x04, 2, 0xe6), n(0x05, 2, 0xe6), n(0x06, 3, 0xe6),
        n(0x01, 2, 0x81), n(0x02, 3, 0x81), n(0x01, 2, 0x84), n(0x02, 3, 0x84),
        n(0x01, 2, 0x85), n(0x02, 3, 0x85), n(0x01, 2, 0x86), n(0x02, 3, 0x86),
        n(0x01, 2, 0x88), n(0x02, 3, 0x88), n(0x01, 2, 0x92), n(0x02, 3, 0x92),
    ],
    // state 118
    [
        n(0x01, 2, 0x9a), n(0x02, 3, 0x9a), n(0x01, 2, 0x9c), n(0x02, 3, 0x9c),
        n(0x01, 2, 0xa0), n(0x02, 3, 0xa0), n(0x01, 2, 0xa3), n(0x02, 3, 0xa3),
        n(0x01, 2, 0xa4), n(0x02, 3, 0xa4), n(0x01, 2, 0xa9), n(0x02, 3, 0xa9),
        n(0x01, 2, 0xaa), n(0x02, 3, 0xaa), n(0x01, 2, 0xad), n(0x02, 3, 0xad),
    ],
    // state 119
    [
        n(0x01, 2, 0xb2), n(0x02, 3, 0xb2), n(0x01, 2, 0xb5), n(0x02, 3, 0xb5),
        n(0x01, 2, 0xb9), n(0x02, 3, 0xb9), n(0x01, 2, 0xba), n(0x02, 3, 0xba),
        n(0x01, 2, 0xbb), n(0x02, 3, 0xbb), n(0x01, 2, 0xbd), n(0x02, 3, 0xbd),
        n(0x01, 2, 0xbe), n(0x02, 3, 0xbe), n(0x01, 2, 0xc4), n(0x02, 3, 0xc4),
    ],
    // state 120
    [
        n(0x01, 2, 0xc6), n(0x02, 3, 0xc6), n(0x01, 2, 0xe4), n(0x02, 3, 0xe4),
        n(0x01, 2, 0xe8), n(0x02, 3, 0xe8), n(0x01, 2, 0xe9), n(0x02, 3, 0xe9),
        n(0x00, 3, 0x01), n(0x00, 3, 0x87), n(0x00, 3, 0x89), n(0x00, 3, 0x8a),
        n(0x00, 3, 0x8b), n(0x00, 3, 0x8c), n(0x00, 3, 0x8d), n(0x00, 3, 0x8f),
    ],
    // state 121
    [
        n(0x00, 3, 0x93), n(0x00, 3, 0x95), n(0x00, 3, 0x96), n(0x00, 3, 0x97),
        n(0x00, 3, 0x98), n(0x00, 3, 0x9b), n(0x00, 3, 0x9d), n(0x00, 3, 0x9e),
        n(0x00, 3, 0xa5), n(0x00, 3, 0xa6), n(0x00, 3, 0xa8), n(0x00, 3, 0xae),
        n(0x00, 3, 0xaf), n(0x00, 3, 0xb4), n(0x00, 3, 0xb6), n(0x00, 3, 0xb7),
    ],
    // state 122
    [
        n(0x00, 3, 0xbc), n(0x00, 3, 0xbf), n(0x00, 3, 0xc5), n(0x00, 3, 0xe7),
        n(0x00, 3, 0xef), n(0xb8, 0, 0x00), n(0xb9, 0, 0x00), n(0xba, 0, 0x00),
        n(0xbb, 0, 0x00), n(0xbc, 0, 0x00), n(0xbd, 0, 0x00), n(0xbe, 0, 0x00),
        n(0xbf, 0, 0x00), n(0xc0, 0, 0x00), n(0xc1, 0, 0x00), n(0xc2, 0, 0x00),
    ],
    // state 123
    [
        n(0x07, 2, 0x99), n(0x08, 2, 0x99), n(0x09, 2, 0x99), n(0x0a, 2, 0x99),
        n(0x0b, 2, 0x99), n(0x0c, 2, 0x99), n(0x0d, 2, 0x99), n(0x0e, 3, 0x99),
        n(0x07, 2, 0xa1), n(0x08, 2, 0xa1), n(0x09, 2, 0xa1), n(0x0a, 2, 0xa1),
        n(0x0b, 2, 0xa1), n(0x0c, 2, 0xa1), n(0x0d, 2, 0xa1), n(0x0e, 3, 0xa1),
    ],
    // state 124
    [
        n(0x07, 2, 0xa7), n(0x08, 2, 0xa7), n(0x09, 2, 0xa7), n(0x0a, 2, 0xa7),
        n(0x0b, 2, 0xa7), n(0x0c, 2, 0xa7), n(0x0d, 2, 0xa7), n(0x0e, 3, 0xa7),
        n(0x07, 2, 0xac), n(0x08, 2, 0xac), n(0x09, 2, 0xac), n(0x0a, 2, 0xac),
        n(0x0b, 2, 0xac), n(0x0c, 2, 0xac), n(0x0d, 2, 0xac), n(0x0e, 3, 0xac),
    ],
    // state 125
    [
        n(0x07, 2, 0xb0), n(0x08, 2, 0xb0), n(0x09, 2, 0xb0), n(0x0a, 2, 0xb0),
        n(0x0b, 2, 0xb0), n(0x0c, 2, 0xb0), n(0x0d, 2, 0xb0), n(0x0e, 3, 0xb0),
        n(0x07, 2, 0xb1), n(0x08, 2, 0xb1), n(0x09, 2, 0xb1), n(0x0a, 2, 0xb1),
        n(0x0b, 2, 0xb1), n(0x0c, 2, 0xb1), n(0x0d, 2, 0xb1), n(0x0e, 3, 0xb1),
    ],
    // state 126
    [
        n(0x07, 2, 0xb3), n(0x08, 2, 0xb3), n(0x09, 2, 0xb3), n(0x0a, 2, 0xb3),
        n(0x0b, 2, 0xb3), n(0x0c, 2, 0xb3), n(0x0d, 2, 0xb3), n(0x0e, 3, 0xb3),
        n(0x07, 2, 0xd1), n(0x08, 2, 0xd1), n(0x09, 2, 0xd1), n(0x0a, 2, 0xd1),
        n(0x0b, 2, 0xd1), n(0x0c, 2, 0xd1), n(0x0d, 2, 0xd1), n(0x0e, 3, 0xd1),
    ],
    // state 127
    [
        n(0x07, 2, 0xd8), n(0x08, 2, 0xd8), n(0x09, 2, 0xd8), n(0x0a, 2, 0xd8),
        n(0x0b, 2, 0xd8), n(0x0c, 2, 0xd8), n(0x0d, 2, 0xd8), n(0x0e, 3, 0xd8),
        n(0x07, 2, 0xd9), n(0x08, 2, 0xd9), n(0x09, 2, 0xd9), n(0x0a, 2, 0xd9),
        n(0x0b, 2, 0xd9), n(0x0c, 2, 0xd9), n(0x0d, 2, 0xd9), n(0x0e, 3, 0xd9),
    ],
    // state 128
    [
        n(0x07, 2, 0xe3), n(0x08, 2, 0xe3), n(0x09, 2, 0xe3), n(0x0a, 2, 0xe3),
        n(0x0b, 2, 0xe3), n(0x0c, 2, 0xe3), n(0x0d, 2, 0xe3), n(0x0e, 3, 0xe3),
        n(0x07, 2, 0xe5), n(0x08, 2, 0xe5), n(0x09, 2, 0xe5), n(0x0a, 2, 0xe5),
        n(0x0b, 2, 0xe5), n(0x0c, 2, 0xe5), n(0x0d, 2, 0xe5), n(0x0e, 3, 0xe5),
    ],
    // state 129
    [
        n(0x07, 2, 0xe6), n(0x08, 2, 0xe6), n(0x09, 2, 0xe6), n(0x0a, 2, 0xe6),
        n(0x0b, 2, 0xe6), n(0x0c, 2, 0xe6), n(0x0d, 2, 0xe6), n(0x0e, 3, 0xe6),
        n(0x03, 2, 0x81), n(0x04, 2, 0x81), n(0x05, 2, 0x81), n(0x06, 3, 0x81),
        n(0x03, 2, 0x84), n(0x04, 2, 0x84), n(0x05, 2, 0x84), n(0x06, 3, 0x84),
    ],
    // state 130
    [
        n(0x03, 2, 0x85), n(0x04, 2, 0x85), n(0x05, 2, 0x85), n(0x06, 3, 0x85),
        n(0x03, 2, 0x86), n(0x04, 2, 0x86), n(0x05, 2, 0x86), n(0x06, 3, 0x86),
        n(0x03, 2, 0x88), n(0x04, 2, 0x88), n(0x05, 2, 0x88), n(0x06, 3, 0x88),
        n(0x03, 2, 0x92), n(0x04, 2, 0x92), n(0x05, 2, 0x92), n(0x06, 3, 0x92),
    ],
    // state 131
    [
        n(0x03, 2, 0x9a), n(0x04, 2, 0x9a), n(0x05, 2, 0x9a), n(0x06, 3, 0x9a),
        n(0x03, 2, 0x9c), n(0x04, 2, 0x9c), n(0x05, 2, 0x9c), n(0x06, 3, 0x9c),
        n(0x03, 2, 0xa0), n(0x04, 2, 0xa0), n(0x05, 2, 0xa0), n(0x06, 3, 0xa0),
        n(0x03, 2, 0xa3), n(0x04, 2, 0xa3), n(0x05, 2, 0xa3), n(0x06, 3, 0xa3),
    ],
    // state 132
    [
        n(0x03, 2, 0xa4), n(0x04, 2, 0xa4), n(0x05, 2, 0xa4), n(0x06, 3, 0xa4),
        n(0x03, 2, 0xa9), n(0x04, 2, 0xa9), n(0x05, 2, 0xa9), n(0x06, 3, 0xa9),
        n(0x03, 2, 0xaa), n(0x04, 2, 0xaa), n(0x05, 2, 0xaa), n(0x06, 3, 0xaa),
        n(0x03, 2, 0xad), n(0x04, 2, 0xad), n(0x05, 2, 0xad), n(0x06, 3, 0xad),
    ],
    // state 133
    [
        n(0x03, 2, 0xb2), n(0x04, 2, 0xb2), n(0x05, 2, 0xb2), n(0x06, 3, 0xb2),
        n(0x03, 2, 0xb5), n(0x04, 2, 0xb5), n(0x05, 2, 0xb5), n(0x06, 3, 0xb5),
        n(0x03, 2, 0xb9), n(0x04, 2, 0xb9), n(0x05, 2, 0xb9), n(0x06, 3, 0xb9),
        n(0x03, 2, 0xba), n(0x04, 2, 0xba), n(0x05, 2, 0xba), n(0x06, 3, 0xba),
    ],
    // state 134
    [
        n(0x03, 2, 0xbb), n(0x04, 2, 0xbb), n(0x05, 2, 0xbb), n(0x06, 3, 0xbb),
        n(0x03, 2, 0xbd), n(0x04, 2, 0xbd), n(0x05, 2, 0xbd), n(0x06, 3, 0xbd),
        n(0x03, 2, 0xbe), n(0x04, 2, 0xbe), n(0x05, 2, 0xbe), n(0x06, 3, 0xbe),
        n(0x03, 2, 0xc4), n(0x04, 2, 0xc4), n(0x05, 2, 0xc4), n(0x06, 3, 0xc4),
    ],
    // state 135
    [
        n(0x03, 2, 0xc6), n(0x04, 2, 0xc6), n(0x05, 2, 0xc6), n(0x06, 3, 0xc6),
        n(0x03, 2, 0xe4), n(0x04, 2, 0xe4), n(0x05, 2, 0xe4), n(0x06, 3, 0xe4),
        n(0x03, 2, 0xe8), n(0x04, 2, 0xe8), n(0x05, 2, 0xe8), n(0x06, 3, 0xe8),
        n(0x03, 2, 0xe9), n(0x04, 2, 0xe9), n(0x05, 2, 0xe9), n(0x06, 3, 0xe9),
    ],
    // state 136
    [
        n(0x01, 2, 0x01), n(0x02, 3, 0x01), n(0x01, 2, 0x87), n(0x02, 3, 0x87),
        n(0x01, 2, 0x89), n(0x02, 3, 0x89), n(0x01, 2, 0x8a), n(0x02, 3, 0x8a),
        n(0x01, 2, 0x8b), n(0x02, 3, 0x8b), n(0x01, 2, 0x8c), n(0x02, 3, 0x8c),
        n(0x01, 2, 0x8d), n(0x02, 3, 0x8d), n(0x01, 2, 0x8f), n(0x02, 3, 0x8f),
    ],
    // state 137
    [
        n(0x01, 2, 0x93), n(0x02, 3, 0x93), n(0x01, 2, 0x95), n(0x02, 3, 0x95),
        n(0x01, 2, 0x96), n(0x02, 3, 0x96), n(0x01, 2, 0x97), n(0x02, 3, 0x97),
        n(0x01, 2, 0x98), n(0x02, 3, 0x98), n(0x01, 2, 0x9b), n(0x02, 3, 0x9b),
        n(0x01, 2, 0x9d), n(0x02, 3, 0x9d), n(0x01, 2, 0x9e), n(0x02, 3, 0x9e),
    ],
    // state 138
    [
        n(0x01, 2, 0xa5), n(0x02, 3, 0xa5), n(0x01, 2, 0xa6), n(0x02, 3, 0xa6),
        n(0x01, 2, 0xa8), n(0x02, 3, 0xa8), n(0x01, 2, 0xae), n(0x02, 3, 0xae),
        n(0x01, 2, 0xaf), n(0x02, 3, 0xaf), n(0x01, 2, 0xb4), n(0x02, 3, 0xb4),
        n(0x01, 2, 0xb6), n(0x02, 3, 0xb6), n(0x01, 2, 0xb7), n(0x02, 3, 0xb7),
    ],
    // state 139
    [
        n(0x01, 2, 0xbc), n(0x02, 3, 0xbc), n(0x01, 2, 0xbf), n(0x02, 3, 0xbf),
        n(0x01, 2, 0xc5), n(0x02, 3, 0xc5), n(0x01, 2, 0xe7), n(0x02, 3, 0xe7),
        n(0x01, 2, 0xef), n(0x02, 3, 0xef), n(0x00, 3, 0x09), n(0x00, 3, 0x8e),
        n(0x00, 3, 0x90), n(0x00, 3, 0x91), n(0x00, 3, 0x94), n(0x00, 3, 0x9f),
    ],
    // state 140
    [
        n(0x00, 3, 0xab), n(0x00, 3, 0xce), n(0x00, 3, 0xd7), n(0x00, 3, 0xe1),
        n(0x00, 3, 0xec), n(0x00, 3, 0xed), n(0xc3, 0, 0x00), n(0xc4, 0, 0x00),
        n(0xc5, 0, 0x00), n(0xc6, 0, 0x00), n(0xc7, 0, 0x00), n(0xc8, 0, 0x00),
        n(0xc9, 0, 0x00), n(0xca, 0, 0x00), n(0xcb, 0, 0x00), n(0xcc, 0, 0x00),
    ],
    // state 141
    [
        n(0x07, 2, 0x81), n(0x08, 2, 0x81), n(0x09, 2, 0x81), n(0x0a, 2, 0x81),
        n(0x0b, 2, 0x81), n(0x0c, 2, 0x81), n(0x0d, 2, 0x81), n(0x0e, 3, 0x81),
        n(0x07, 2, 0x84), n(0x08, 2, 0x84), n(0x09, 2, 0x84), n(0x0a, 2, 0x84),
        n(0x0b, 2, 0x84), n(0x0c, 2, 0x84), n(0x0d, 2, 0x84), n(0x0e, 3, 0x84),
    ],
    // state 142
    [
        n(0x07, 2, 0x85), n(0x08, 2, 0x85), n(0x09, 2, 0x85), n(0x0a, 2, 0x85),
        n(0x0b, 2, 0x85), n(0x0c, 2, 0x85), n(0x0d, 2, 0x85), n(0x0e, 3, 0x85),
        n(0x07, 2, 0x86), n(0x08, 2, 0x86), n(0x09, 2, 0x86), n(0x0a, 2, 0x86),
        n(0x0b, 2, 0x86), n(0x0c, 2, 0x86), n(0x0d, 2, 0x86), n(0x0e, 3, 0x86),
    ],
    // state 143
    [
        n(0x07, 2, 0x88), n(0x08, 2, 0x88), n(0x09, 2, 0x88), n(0x0a, 2, 0x88),
        n(0x0b, 2, 0x88), n(0x0c, 2, 0x88), n(0x0d, 2, 0x88), n(0x0e, 3, 0x88),
        n(0x07, 2, 0x92), n(0x08, 2, 0x92), n(0x09, 2, 0x92), n(0x0a, 2, 0x92),
        n(0x0b, 2, 0x92), n(0x0c, 2, 0x92), n(0x0d, 2, 0x92), n(0x0e, 3, 0x92),
    ],
    // state 144
    [
        n(0x07, 2, 0x9a), n(0x08, 2, 0x9a), n(0x09, 2, 0x9a), n(0x0a, 2, 0x9a),
        n(0x0b, 2, 0x9a), n(0x0c, 2, 0x9a), n(0x0d, 2, 0x9a), n(0x0e, 3, 0x9a),
        n(0x07, 2, 0x9c), n(0x08, 2, 0x9c), n(0x09, 2, 0x9c), n(0x0a, 2, 0x9c),
        n(0x0b, 2, 0x9c), n(0x0c, 2, 0x9c), n(0x0d, 2, 0x9c), n(0x0e, 3, 0x9c),
    ],
    // state 145
    [
        n(0x07, 2, 0xa0), n(0x08, 2, 0xa0), n(0x09, 2, 0xa0), n(0x0a, 2, 0xa0),
        n(0x0b, 2, 0xa0), n(0x0c, 2, 0xa0), n(0x0d, 2, 0xa0), n(0x0e, 3, 0xa0),
        n(0x07, 2, 0xa3), n(0x08, 2, 0xa3), n(0x09, 2, 0xa3), n(0x0a, 2, 0xa3),
        n(0x0b, 2, 0xa3), n(0x0c, 2, 0xa3), n(0x0d, 2, 0xa3), n(0x0e, 3, 0xa3),
    ],
    // state 146
    [
        n(0x07, 2, 0xa4), n(0x08, 2, 0xa4), n(0x09, 2, 0xa4), n(0x0a, 2, 0xa4),
        n(0x0b, 2, 0xa4), n(0x0c, 2, 0xa4), n(0x0d, 2, 0xa4), n(0x0e, 3, 0xa4),
        n(0x07, 2, 0xa9), n(0x08, 2, 0xa9), n(0x09, 2, 0xa9), n(0x0a, 2, 0xa9),
        n(0x0b, 2, 0xa9), n(0x0c, 2, 0xa9), n(0x0d, 2, 0xa9), n(0x0e, 3, 0xa9),
    ],
    // state 147
    [
        n(0x07, 2, 0xaa), n(0x08, 2, 0xaa), n(0x09, 2, 0xaa), n(0x0a, 2, 0xaa),
        n(0x0b, 2, 0xaa), n(0x0c, 2, 0xaa), n(0x0d, 2, 0xaa), n(0x0e, 3, 0xaa),
        n(0x07, 2, 0xad), n(0x08, 2, 0xad), n(0x09, 2, 0xad), n(0x0a, 2, 0xad),
        n(0x0b, 2, 0xad), n(0x0c, 2, 0xad), n(0x0d, 2, 0xad), n(0x0e, 3, 0xad),
    ],
    // state 148
    [
        n(0x07, 2, 0xb2), n(0x08, 2, 0xb2), n(0x09, 2, 0xb2), n(0x0a, 2, 0xb2),
        n(0x0b, 2, 0xb2), n(0x0c, 2, 0xb2), n(0x0d, 2, 0xb2), n(0x0e, 3, 0xb2),
        n(0x07, 2, 0xb5), n(0x08, 2, 0xb5), n(0x09, 2, 0xb5), n(0x0a, 2, 0xb5),
        n(0x0b, 2, 0xb5), n(0x0c, 2, 0xb5), n(0x0d, 2, 0xb5), n(0x0e, 3, 0xb5),
    ],
    // state 149
    [
        n(0x07, 2, 0xb9), n(0x08, 2, 0xb9), n(0x09, 2, 0xb9), n(0x0a, 2, 0xb9),
        n(0x0b, 2, 0xb9), n(0x0c, 2, 0xb9), n(0x0d, 2, 0xb9), n(0x0e, 3, 0xb9),
        n(0x07, 2, 0xba), n(0x08, 2, 0xba), n(0x09, 2, 0xba), n(0x0a, 2, 0xba),
        n(0x0b, 2, 0xba), n(0x0c, 2, 0xba), n(0x0d, 2, 0xba), n(0x0e, 3, 0xba),
    ],
    // state 150
    [
        n(0x07, 2, 0xbb), n(0x08, 2, 0xbb), n(0x09, 2, 0xbb), n(0x0a, 2, 0xbb),
        n(0x0b, 2, 0xbb), n(0x0c, 2, 0xbb), n(0x0d, 2, 0xbb), n(0x0e, 3, 0xbb),
        n(0x07, 2, 0xbd), n(0x08, 2, 0xbd), n(0x09, 2, 0xbd), n(0x0a, 2, 0xbd),
        n(0x0b, 2, 0xbd), n(0x0c, 2, 0xbd), n(0x0d, 2, 0xbd), n(0x0e, 3, 0xbd),
    ],
    // state 151
    [
        n(0x07, 2, 0xbe), n(0x08, 2, 0xbe), n(0x09, 2, 0xbe), n(0x0a, 2, 0xbe),
        n(0x0b, 2, 0xbe), n(0x0c, 2, 0xbe), n(0x0d, 2, 0xbe), n(0x0e, 3, 0xbe),
        n(0x07, 2, 0xc4), n(0x08, 2, 0xc4), n(0x09, 2, 0xc4), n(0x0a, 2, 0xc4),
        n(0x0b, 2, 0xc4), n(0x0c, 2, 0xc4), n(0x0d, 2, 0xc4), n(0x0e, 3, 0xc4),
    ],
    // state 152
    [
        n(0x07, 2, 0xc6), n(0x08, 2, 0xc6), n(0x09, 2, 0xc6), n(0x0a, 2, 0xc6),
        n(0x0b, 2, 0xc6), n(0x0c, 2, 0xc6), n(0x0d, 2, 0xc6), n(0x0e, 3, 0xc6),
        n(0x07, 2, 0xe4), n(0x08, 2, 0xe4), n(0x09, 2, 0xe4), n(0x0a, 2, 0xe4),
        n(0x0b, 2, 0xe4), n(0x0c, 2, 0xe4), n(0x0d, 2, 0xe4), n(0x0e, 3, 0xe4),
    ],
    // state 153
    [
        n(0x07, 2, 0xe8), n(0x08, 2, 0xe8), n(0x09, 2, 0xe8), n(0x0a, 2, 0xe8),
        n(0x0b, 2, 0xe8), n(0x0c, 2, 0xe8), n(0x0d, 2, 0xe8), n(0x0e, 3, 0xe8),
        n(0x07, 2, 0xe9), n(0x08, 2, 0xe9), n(0x09, 2, 0xe9), n(0x0a, 2, 0xe9),
        n(0x0b, 2, 0xe9), n(0x0c, 2, 0xe9), n(0x0d, 2, 0xe9), n(0x0e, 3, 0xe9),
    ],
    // state 154
    [
        n(0x03, 2, 0x01), n(0x04, 2, 0x01), n(0x05, 2, 0x01), n(0x06, 3, 0x01),
        n(0x03, 2, 0x87), n(0x04, 2, 0x87), n(0x05, 2, 0x87), n(0x06, 3, 0x87),
        n(0x03, 2, 0x89), n(0x04, 2, 0x89), n(0x05, 2, 0x89), n(0x06, 3, 0x89),
        n(0x03, 2, 0x8a), n(0x04, 2, 0x8a), n(0x05, 2, 0x8a), n(0x06, 3, 0x8a),
    ],
    // state 155
    [
        n(0x03, 2, 0x8b), n(0x04, 2, 0x8b), n(0x05, 2, 0x8b), n(0x06, 3, 0x8b),
        n(0x03, 2, 0x8c), n(0x04, 2, 0x8c), n(0x05, 2, 0x8c), n(0x06, 3, 0x8c),
        n(0x03, 2, 0x8d), n(0x04, 2, 0x8d), n(0x05, 2, 0x8d), n(0x06, 3, 0x8d),
        n(0x03, 2, 0x8f), n(0x04, 2, 0x8f), n(0x05, 2, 0x8f), n(0x06, 3, 0x8f),
    ],
    // state 156
    [
        n(0x03, 2, 0x93), n(0x04, 2, 0x93), n(0x05, 2, 0x93), n(0x06, 3, 0x93),
        n(0x03, 2, 0x95), n(0x04, 2, 0x95), n(0x05, 2, 0x95), n(0x06, 3, 0x95),
        n(0x03, 2, 0x96), n(0x04, 2, 0x96), n(0x05, 2, 0x96), n(0x06, 3, 0x96),
        n(0x03, 2, 0x97), n(0x04, 2, 0x97), n(0x05, 2, 0x97), n(0x06, 3, 0x97),
    ],
    // state 157
    [
        n(0x03, 2, 0x98), n(0x04, 2, 0x98), n(0x05, 2, 0x98), n(0x06, 3, 0x98),
        n(0x03, 2, 0x9b), n(0x04, 2, 0x9b), n(0x05, 2, 0x9b), n(0x06, 3, 0x9b),
        n(0x03, 2, 0x9d), n(0x04, 2, 0x9d), n(0x05, 2, 0x9d), n(0x06, 3, 0x9d),
        n(0x03, 2, 0x9e), n(0x04, 2, 0x9e), n(0x05, 2, 0x9e), n(0x06, 3, 0x9e),
    ],
    // state 158
    [
        n(0x03, 2, 0xa5), n(0x04, 2, 0xa5), n(0x05, 2, 0xa5), n(0x06, 3, 0xa5),
        n(0x03, 2, 0xa6), n(0x04, 2, 0xa6), n(0x05, 2, 0xa6), n(0x06, 3, 0xa6),
        n(0x03, 2, 0xa8), n(0x04, 2, 0xa8), n(0x05, 2, 0xa8), n(0x06, 3, 0xa8),
        n(0x03, 2, 0xae), n(0x04, 2, 0xae), n(0x05, 2, 0xae), n(0x06, 3, 0xae),
    ],
    // state 159
    [
        n(0x03, 2, 0xaf), n(0x04, 2, 0xaf), n(0x05, 2, 0xaf), n(0x06, 3, 0xaf),
        n(0x03, 2, 0xb4), n(0x04, 2, 0xb4), n(0x05, 2, 0xb4), n(0x06, 3, 0xb4),
        n(0x03, 2, 0xb6), n(0x04, 2, 0xb6), n(0x05, 2, 0xb6), n(0x06, 3, 0xb6),
        n(0x03, 2, 0xb7), n(0x04, 2, 0xb7), n(0x05, 2, 0xb7), n(0x06, 3, 0xb7),
    ],
    // state 160
    [
        n(0x03, 2, 0xbc), n(0x04, 2, 0xbc), n(0x05, 2, 0xbc), n(0x06, 3, 0xbc),
        n(0x03, 2, 0xbf), n(0x04, 2, 0xbf), n(0x05, 2, 0xbf), n(0x06, 3, 0xbf),
        n(0x03, 2, 0xc5), n(0x04, 2, 0xc5), n(0x05, 2, 0xc5), n(0x06, 3, 0xc5),
        n(0x03, 2, 0xe7), n(0x04, 2, 0xe7), n(0x05, 2, 0xe7), n(0x06, 3, 0xe7),
    ],
    // state 161
    [
        n(0x03, 2, 0xef), n(0x04, 2, 0xef), n(0x05, 2, 0xef), n(0x06, 3, 0xef),
        n(0x01, 2, 0x09), n(0x02, 3, 0x09), n(0x01, 2, 0x8e), n(0x02, 3, 0x8e),
        n(0x01, 2, 0x90), n(0x02, 3, 0x90), n(0x01, 2, 0x91), n(0x02, 3, 0x91),
        n(0x01, 2, 0x94), n(0x02, 3, 0x94), n(0x01, 2, 0x9f), n(0x02, 3, 0x9f),
    ],
    // state 162
    [
        n(0x01, 2, 0xab), n(0x02, 3, 0xab), n(0x01, 2, 0xce), n(0x02, 3, 0xce),
        n(0x01, 2, 0xd7), n(0x02, 3, 0xd7), n(0x01, 2, 0xe1), n(0x02, 3, 0xe1),
        n(0x01, 2, 0xec), n(0x02, 3, 0xec), n(0x01, 2, 0xed), n(0x02, 3, 0xed),
        n(0x00, 3, 0xc7), n(0x00, 3, 0xcf), n(0x00, 3, 0xea), n(0x00, 3, 0xeb),
    ],
    // state 163
    [
        n(0xcd, 0, 0x00), n(0xce, 0, 0x00), n(0xcf, 0, 0x00), n(0xd0, 0, 0x00),
        n(0xd1, 0, 0x00), n(0xd2, 0, 0x00), n(0xd3, 0, 0x00), n(0xd4, 0, 0x00),
        n(0xd5, 0, 0x00), n(0xd6, 0, 0x00), n(0xd7, 0, 0x00), n(0xd8, 0, 0x00),
        n(0xd9, 0, 0x00), n(0xda, 0, 0x00), n(0xdb, 0, 0x00), n(0xdc, 0, 0x00),
    ],
    // state 164
    [
        n(0x07, 2, 0x01), n(0x08, 2, 0x01), n(0x09, 2, 0x01), n(0x0a, 2, 0x01),
        n(0x0b, 2, 0x01), n(0x0c, 2, 0x01), n(0x0d, 2, 0x01), n(0x0e, 3, 0x01),
        n(0x07, 2, 0x87), n(0x08, 2, 0x87), n(0x09, 2, 0x87), n(0x0a, 2, 0x87),
        n(0x0b, 2, 0x87), n(0x0c, 2, 0x87), n(0x0d, 2, 0x87), n(0x0e, 3, 0x87),
    ],
    // state 165
    [
        n(0x07, 2, 0x89), n(0x08, 2, 0x89), n(0x09, 2, 0x89), n(0x0a, 2, 0x89),
        n(0x0b, 2, 0x89), n(0x0c, 2, 0x89), n(0x0d, 2, 0x89), n(0x0e, 3, 0x89),
        n(0x07, 2, 0x8a), n(0x08, 2, 0x8a), n(0x09, 2, 0x8a), n(0x0a, 2, 0x8a),
        n(0x0b, 2, 0x8a), n(0x0c, 2, 0x8a), n(0x0d, 2, 0x8a), n(0x0e, 3, 0x8a),
    ],
    // state 166
    [
        n(0x07, 2, 0x8b), n(0x08, 2, 0x8b), n(0x09, 2, 0x8b), n(0x0a, 2, 0x8b),
        n(0x0b, 2, 0x8b), n(0x0c, 2, 0x8b), n(0x0d, 2, 0x8b), n(0x0e, 3, 0x8b),
        n(0x07, 2, 0x8c), n(0x08, 2, 0x8c), n(0x09, 2, 0x8c), n(0x0a, 2, 0x8c),
        n(0x0b, 2, 0x8c), n(0x0c, 2, 0x8c), n(0x0d, 2, 0x8c), n(0x0e, 3, 0x8c),
    ],
    // state 167
    [
        n(0x07, 2, 0x8d), n(0x08, 2, 0x8d), n(0x09, 2, 0x8d), n(0x0a, 2, 0x8d),
        n(0x0b, 2, 0x8d), n(0x0c, 2, 0x8d), n(0x0d, 2, 0x8d), n(0x0e, 3, 0x8d),
        n(0x07, 2, 0x8f), n(0x08, 2, 0x8f), n(0x09, 2, 0x8f), n(0x0a, 2, 0x8f),
        n(0x0b, 2, 0x8f), n(0x0c, 2, 0x8f), n(0x0d, 2, 0x8f), n(0x0e, 3, 0x8f),
    ],
    // state 168
    [
        n(0x07, 2, 0x93), n(0x08, 2, 0x93), n(0x09, 2, 0x93), n(0x0a, 2, 0x93),
        n(0x0b, 2, 0x93), n(0x0c, 2, 0x93), n(0x0d, 2, 0x93), n(0x0e, 3, 0x93),
        n(0x07, 2, 0x95), n(0x08, 2, 0x95), n(0x09, 2, 0x95), n(0x0a, 2, 0x95),
        n(0x0b, 2, 0x95), n(0x0c, 2, 0x95), n(0x0d, 2, 0x95), n(0x0e, 3, 0x95),
    ],
    // state 169
    [
        n(0x07, 2, 0x96), n(0x08, 2, 0x96), n(0x09, 2, 0x96), n(0x0a, 2, 0x96),
        n(0x0b, 2, 0x96), n(0x0c, 2, 0x96), n(0x0d, 2, 0x96), n(0x0e, 3, 0x96),
        n(0x07, 2, 0x97), n(0x08, 2, 0x97), n(0x09, 2, 0x97), n(0x0a, 2, 0x97),
        n(0x0b, 2, 0x97), n(0x0c, 2, 0x97), n(0x0d, 2, 0x97), n(0x0e, 3, 0x97),
    ],
    // state 170
    [
        n(0x07, 2, 0x98), n(0x08, 2, 0x98), n(0x09, 2, 0x98), n(0x0a, 2, 0x98),
        n(0x0b, 2, 0x98), n(0x0c, 2, 0x98), n(0x0d, 2, 0x98), n(0x0e, 3, 0x98),
        n(0x07, 2, 0x9b), n(0x08, 2, 0x9b), n(0x09, 2, 0x9b), n(0x0a, 2, 0x9b),
        n(0x0b, 2, 0x9b), n(0x0c, 2, 0x9b), n(0x0d, 2, 0x9b), n(0x0e, 3, 0x9b),
    ],
    // state 171
    [
        n(0x07, 2, 0x9d), n(0x08, 2, 0x9d), n(0x09, 2, 0x9d), n(0x0a, 2, 0x9d),
        n(0x0b, 2, 0x9d), n(0x0c, 2, 0x9d), n(0x0d, 2, 0x9d), n(0x0e, 3, 0x9d),
        n(0x07, 2, 0x9e), n(0x08, 2, 0x9e), n(0x09, 2, 0x9e), n(0x0a, 2, 0x9e),
        n(0x0b, 2, 0x9e), n(0x0c, 2, 0x9e), n(0x0d, 2, 0x9e), n(0x0e, 3, 0x9e),
    ],
    // state 172
    [
        n(0x07, 2, 0xa5), n(0x08, 2, 0xa5), n(0x09, 2, 0xa5), n(0x0a, 2, 0xa5),
        n(0x0b, 2, 0xa5), n(0x0c, 2, 0xa5), n(0x0d, 2, 0xa5), n(0x0e, 3, 0xa5),
        n(0x07, 2, 0xa6), n(0x08, 2, 0xa6), n(0x09, 2, 0xa6), n(0x0a, 2, 0xa6),
        n(0x0b, 2, 0xa6), n(0x0c, 2, 0xa6), n(0x0d, 2, 0xa6), n(0x0e, 3, 0xa6),
    ],
    // state 173
    [
        n(0x07, 2, 0xa8), n(0x08, 2, 0xa8), n(0x09, 2, 0xa8), n(0x0a, 2, 0xa8),
        n(0x0b, 2, 0xa8), n(0x0c, 2, 0xa8), n(0x0d, 2, 0xa8), n(0x0e, 3, 0xa8),
        n(0x07, 2, 0xae), n(0x08, 2, 0xae), n(0x09, 2, 0xae), n(0x0a, 2, 0xae),
        n(0x0b, 2, 0xae), n(0x0c, 2, 0xae), n(0x0d, 2, 0xae), n(0x0e, 3, 0xae),
    ],
    // state 174
    [
        n(0x07, 2, 0xaf), n(0x08, 2, 0xaf), n(0x09, 2, 0xaf), n(0x0a, 2, 0xaf),
        n(0x0b, 2, 0xaf), n(0x0c, 2, 0xaf), n(0x0d, 2, 0xaf), n(0x0e, 3, 0xaf),
        n(0x07, 2, 0xb4), n(0x08, 2, 0xb4), n(0x09, 2, 0xb4), n(0x0a, 2, 0xb4),
        n(0x0b, 2, 0xb4), n(0x0c, 2, 0xb4), n(0x0d, 2, 0xb4), n(0x0e, 3, 0xb4),
    ],
    // state 175
    [
        n(0x07, 2, 0xb6), n(0x08, 2, 0xb6), n(0x09, 2, 0xb6), n(0x0a, 2, 0xb6),
        n(0x0b, 2, 0xb6), n(0x0c, 2, 0xb6), n(0x0d, 2, 0xb6), n(0x0e, 3, 0xb6),
        n(0x07, 2, 0xb7), n(0x08, 2, 0xb7), n(0x09, 2, 0xb7), n(0x0a, 2, 0xb7),
        n(0x0b, 2, 0xb7), n(0x0c, 2, 0xb7), n(0x0d, 2, 0xb7), n(0x0e, 3, 0xb7),
    ],
    // state 176
    [
        n(0x07, 2, 0xbc), n(0x08, 2, 0xbc), n(0x09, 2, 0xbc), n(0x0a, 2, 0xbc),
        n(0x0b, 2, 0xbc), n(0x0c, 2, 0xbc), n(0x0d, 2, 0xbc), n(0x0e, 3, 0xbc),
        n(0x07, 2, 0xbf), n(0x08, 2, 0xbf), n(0x09, 2, 0xbf), n(0x0a, 2, 0xbf),
        n(0x0b, 2, 0xbf), n(0x0c, 2, 0xbf), n(0x0d, 2, 0xbf), n(0x0e, 3, 0xbf),
    ],
    // state 177
    [
        n(0x07, 2, 0xc5), n(0x08, 2, 0xc5), n(0x09, 2, 0xc5), n(0x0a, 2, 0xc5),
        n(0x0b, 2, 0xc5), n(0x0c, 2, 0xc5), n(0x0d, 2, 0xc5), n(0x0e, 3, 0xc5),
        n(0x07, 2, 0xe7), n(0x08, 2, 0xe7), n(0x09, 2, 0xe7), n(0x0a, 2, 0xe7),
        n(0x0b, 2, 0xe7), n(0x0c, 2, 0xe7), n(0x0d, 2, 0xe7), n(0x0e, 3, 0xe7),
    ],
    // state 178
    [
        n(0x07, 2, 0xef), n(0x08, 2, 0xef), n(0x09, 2, 0xef), n(0x0a, 2, 0xef),
        n(0x0b, 2, 0xef), n(0x0c, 2, 0xef), n(0x0d, 2, 0xef), n(0x0e, 3, 0xef),
        n(0x03, 2, 0x09), n(0x04, 2, 0x09), n(0x05, 2, 0x09), n(0x06, 3, 0x09),
        n(0x03, 2, 0x8e), n(0x04, 2, 0x8e), n(0x05, 2, 0x8e), n(0x06, 3, 0x8e),
    ],
    // state 179
    [
        n(0x03, 2, 0x90), n(0x04, 2, 0x90), n(0x05, 2, 0x90), n(0x06, 3, 0x90),
        n(0x03, 2, 0x91), n(0x04, 2, 0x91), n(0x05, 2, 0x91), n(0x06, 3, 0x91),
        n(0x03, 2, 0x94), n(0x04, 2, 0x94), n(0x05, 2, 0x94), n(0x06, 3, 0x94),
        n(0x03, 2, 0x9f), n(0x04, 2, 0x9f), n(0x05, 2, 0x9f), n(0x06, 3, 0x9f),
    ],
    // state 180
    [
        n(0x03, 2, 0xab), n(0x04, 2, 0xab), n(0x05, 2, 0xab), n(0x06, 3, 0xab),
        n(0x03, 2, 0xce), n(0x04, 2, 0xce), n(0x05, 2, 0xce), n(0x06, 3, 0xce),
        n(0x03, 2, 0xd7), n(0x04, 2, 0xd7), n(0x05, 2, 0xd7), n(0x06, 3, 0xd7),
        n(0x03, 2, 0xe1), n(0x04, 2, 0xe1), n(0x05, 2, 0xe1), n(0x06, 3, 0xe1),
    ],
    // state 181
    [
        n(0x03, 2, 0xec), n(0x04, 2, 0xec), n(0x05, 2, 0xec), n(0x06, 3, 0xec),
        n(0x03, 2, 0xed), n(0x04, 2, 0xed), n(0x05, 2, 0xed), n(0x06, 3, 0xed),
        n(0x01, 2, 0xc7), n(0x02, 3, 0xc7), n(0x01, 2, 0xcf), n(0x02, 3, 0xcf),
        n(0x01, 2, 0xea), n(0x02, 3, 0xea), n(0x01, 2, 0xeb), n(0x02, 3, 0xeb),
    ],
    // state 182
    [
        n(0x00, 3, 0xc0), n(0x00, 3, 0xc1), n(0x00, 3, 0xc8), n(0x00, 3, 0xc9),
        n(0x00, 3, 0xca), n(0x00, 3, 0xcd), n(0x00, 3, 0xd2), n(0x00, 3, 0xd5),
        n(0x00, 3, 0xda), n(0x00, 3, 0xdb), n(0x00, 3, 0xee), n(0x00, 3, 0xf0),
        n(0x00, 3, 0xf2), n(0x00, 3, 0xf3), n(0x00, 3, 0xff), n(0xdd, 0, 0x00),
    ],
    // state 183
    [
        n(0xde, 0, 0x00), n(0xdf, 0, 0x00), n(0xe0, 0, 0x00), n(0xe1, 0, 0x00),
        n(0xe2, 0, 0x00), n(0xe3, 0, 0x00), n(0xe4, 0, 0x00), n(0xe5, 0, 0x00),
        n(0xe6, 0, 0x00), n(0xe7, 0, 0x00), n(0xe8, 0, 0x00), n(0xe9, 0, 0x00),
        n(0xea, 0, 0x00), n(0xeb, 0, 0x00), n(0xec, 0, 0x00), n(0xed, 0, 0x00),
    ],
    // state 184
    [
        n(0x07, 2, 0x09), n(0x08, 2, 0x09), n(0x09, 2, 0x09), n(0x0a, 2, 0x09),
        n(0x0b, 2, 0x09), n(0x0c, 2, 0x09), n(0x0d, 2, 0x09), n(0x0e, 3, 0x09),
        n(0x07, 2, 0x8e), n(0x08, 2, 0x8e), n(0x09, 2, 0x8e), n(0x0a, 2, 0x8e),
        n(0x0b, 2, 0x8e), n(0x0c, 2, 0x8e), n(0x0d, 2, 0x8e), n(0x0e, 3, 0x8e),
    ],
    // state 185
    [
        n(0x07, 2, 0x90), n(0x08, 2, 0x90), n(0x09, 2, 0x90), n(0x0a, 2, 0x90),
        n(0x0b, 2, 0x90), n(0x0c, 2, 0x90), n(0x0d, 2, 0x90), n(0x0e, 3, 0x90),
        n(0x07, 2, 0x91), n(0x08, 2, 0x91), n(0x09, 2, 0x91), n(0x0a, 2, 0x91),
        n(0x0b, 2, 0x91), n(0x0c, 2, 0x91), n(0x0d, 2, 0x91), n(0x0e, 3, 0x91),
    ],
    // state 186
    [
        n(0x07, 2, 0x94), n(0x08, 2, 0x94), n(0x09, 2, 0x94), n(0x0a, 2, 0x94),
        n(0x0b, 2, 0x94), n(0x0c, 2, 0x94), n(0x0d, 2, 0x94), n(0x0e, 3, 0x94),
        n(0x07, 2, 0x9f), n(0x08, 2, 0x9f), n(0x09, 2, 0x9f), n(0x0a, 2, 0x9f),
        n(0x0b, 2, 0x9f), n(0x0c, 2, 0x9f), n(0x0d, 2, 0x9f), n(0x0e, 3, 0x9f),
    ],
    // state 187
    [
        n(0x07, 2, 0xab), n(0x08, 2, 0xab), n(0x09, 2, 0xab), n(0x0a, 2, 0xab),
        n(0x0b, 2, 0xab), n(0x0c, 2, 0xab), n(0x0d, 2, 0xab), n(0x0e, 3, 0xab),
        n(0x07, 2, 0xce), n(0x08, 2, 0xce), n(0x09, 2, 0xce), n(0x0a, 2, 0xce),
        n(0x0b, 2, 0xce), n(0x0c, 2, 0xce), n(0x0d, 2, 0xce), n(0x0e, 3, 0xce),
    ],
    // state 188
    [
        n(0x07, 2, 0xd7), n(0x08, 2, 0xd7), n(0x09, 2, 0xd7), n(0x0a, 2, 0xd7),
        n(0x0b, 2, 0xd7), n(0x0c, 2, 0xd7), n(0x0d, 2, 0xd7), n(0x0e, 3, 0xd7),
        n(0x07, 2, 0xe1), n(0x08, 2, 0xe1), n(0x09, 2, 0xe1), n(0x0a, 2, 0xe1),
        n(0x0b, 2, 0xe1), n(0x0c, 2, 0xe1), n(0x0d, 2, 0xe1), n(0x0e, 3, 0xe1),
    ],
    // state 189
    [
        n(0x07, 2, 0xec), n(0x08, 2, 0xec), n(0x09, 2, 0xec), n(0x0a, 2, 0xec),
        n(0x0b, 2, 0xec), n(0x0c, 2, 0xec), n(0x0d, 2, 0xec), n(0x0e, 3, 0xec),
        n(0x07, 2, 0xed), n(0x08, 2, 0xed), n(0x09, 2, 0xed), n(0x0a, 2, 0xed),
        n(0x0b, 2, 0xed), n(0x0c, 2, 0xed), n(0x0d, 2, 0xed), n(0x0e, 3, 0xed),
    ],
    // state 190
    [
        n(0x03, 2, 0xc7), n(0x04, 2, 0xc7), n(0x05, 2, 0xc7), n(0x06, 3, 0xc7),
        n(0x03, 2, 0xcf), n(0x04, 2, 0xcf), n(0x05, 2, 0xcf), n(0x06, 3, 0xcf),
        n(0x03, 2, 0xea), n(0x04, 2, 0xea), n(0x05, 2, 0xea), n(0x06, 3, 0xea),
        n(0x03, 2, 0xeb), n(0x04, 2, 0xeb), n(0x05, 2, 0xeb), n(0x06, 3, 0xeb),
    ],
    // state 191
    [
        n(0x01, 2, 0xc0), n(0x02, 3, 0xc0), n(0x01, 2, 0xc1), n(0x02, 3, 0xc1),
        n(0x01, 2, 0xc8), n(0x02, 3, 0xc8), n(0x01, 2, 0xc9), n(0x02, 3, 0xc9),
        n(0x01, 2, 0xca), n(0x02, 3, 0xca), n(0x01, 2, 0xcd), n(0x02, 3, 0xcd),
        n(0x01, 2, 0xd2), n(0x02, 3, 0xd2), n(0x01, 2, 0xd5), n(0x02, 3, 0xd5),
    ],
    // state 192
    [
        n(0x01, 2, 0xda), n(0x02, 3, 0xda), n(0x01, 2, 0xdb), n(0x02, 3, 0xdb),
        n(0x01, 2, 0xee), n(0x02, 3, 0xee), n(0x01, 2, 0xf0), n(0x02, 3, 0xf0),
        n(0x01, 2, 0xf2), n(0x02, 3, 0xf2), n(0x01, 2, 0xf3), n(0x02, 3, 0xf3),
        n(0x01, 2, 0xff), n(0x02, 3, 0xff), n(0x00, 3, 0xcb), n(0x00, 3, 0xcc),
    ],
    // state 193
    [
        n(0x00, 3, 0xd3), n(0x00, 3, 0xd4), n(0x00, 3, 0xd6), n(0x00, 3, 0xdd),
        n(0x00, 3, 0xde), n(0x00, 3, 0xdf), n(0x00, 3, 0xf1), n(0x00, 3, 0xf4),
        n(0x00, 3, 0xf5), n(0x00, 3, 0xf6), n(0x00, 3, 0xf7), n(0x00, 3, 0xf8),
        n(0x00, 3, 0xfa), n(0x00, 3, 0xfb), n(0x00, 3, 0xfc), n(0x00, 3, 0xfd),
    ],
    // state 194
    [
        n(0x00, 3, 0xfe), n(0xee, 0, 0x00), n(0xef, 0, 0x00), n(0xf0, 0, 0x00),
        n(0xf1, 0, 0x00), n(0xf2, 0, 0x00), n(0xf3, 0, 0x00), n(0xf4, 0, 0x00),
        n(0xf5, 0, 0x00), n(0xf6, 0, 0x00), n(0xf7, 0, 0x00), n(0xf8, 0, 0x00),
        n(0xf9, 0, 0x00), n(0xfa, 0, 0x00), n(0xfb, 0, 0x00), n(0xfc, 0, 0x00),
    ],
    // state 195
    [
        n(0x07, 2, 0xc7), n(0x08, 2, 0xc7), n(0x09, 2, 0xc7), n(0x0a, 2, 0xc7),
        n(0x0b, 2, 0xc7), n(0x0c, 2, 0xc7), n(0x0d, 2, 0xc7), n(0x0e, 3, 0xc7),
        n(0x07, 2, 0xcf), n(0x08, 2, 0xcf), n(0x09, 2, 0xcf), n(0x0a, 2, 0xcf),
        n(0x0b, 2, 0xcf), n(0x0c, 2, 0xcf), n(0x0d, 2, 0xcf), n(0x0e, 3, 0xcf),
    ],
    // state 196
    [
        n(0x07, 2, 0xea), n(0x08, 2, 0xea), n(0x09, 2, 0xea), n(0x0a, 2, 0xea),
        n(0x0b, 2, 0xea), n(0x0c, 2, 0xea), n(0x0d, 2, 0xea), n(0x0e, 3, 0xea),
        n(0x07, 2, 0xeb), n(0x08, 2, 0xeb), n(0x09, 2, 0xeb), n(0x0a, 2, 0xeb),
        n(0x0b, 2, 0xeb), n(0x0c, 2, 0xeb), n(0x0d, 2, 0xeb), n(0x0e, 3, 0xeb),
    ],
    // state 197
    [
        n(0x03, 2, 0xc0), n(0x04, 2, 0xc0), n(0x05, 2, 0xc0), n(0x06, 3, 0xc0),
        n(0x03, 2, 0xc1), n(0x04, 2, 0xc1), n(0x05, 2, 0xc1), n(0x06, 3, 0xc1),
        n(0x03, 2, 0xc8), n(0x04, 2, 0xc8), n(0x05, 2, 0xc8), n(0x06, 3, 0xc8),
        n(0x03, 2, 0xc9), n(0x04, 2, 0xc9), n(0x05, 2, 0xc9), n(0x06, 3, 0xc9),
    ],
    // state 198
    [
        n(0x03, 2, 0xca), n(0x04, 2, 0xca), n(0x05, 2, 0xca), n(0x06, 3, 0xca),
        n(0x03, 2, 0xcd), n(0x04, 2, 0xcd), n(0x05, 2, 0xcd), n(0x06, 3, 0xcd),
        n(0x03, 2, 0xd2), n(0x04, 2, 0xd2), n(0x05, 2, 0xd2), n(0x06, 3, 0xd2),
        n(0x03, 2, 0xd5), n(0x04, 2, 0xd5), n(0x05, 2, 0xd5), n(0x06, 3, 0xd5),
    ],
    // state 199
    [
        n(0x03, 2, 0xda), n(0x04, 2, 0xda), n(0x05, 2, 0xda), n(0x06, 3, 0xda),
        n(0x03, 2, 0xdb), n(0x04, 2, 0xdb), n(0x05, 2, 0xdb), n(0x06, 3, 0xdb),
        n(0x03, 2, 0xee), n(0x04, 2, 0xee), n(0x05, 2, 0xee), n(0x06, 3, 0xee),
        n(0x03, 2, 0xf0), n(0x04, 2, 0xf0), n(0x05, 2, 0xf0), n(0x06, 3, 0xf0),
    ],
    // state 200
    [
        n(0x03, 2, 0xf2), n(0x04, 2, 0xf2), n(0x05, 2, 0xf2), n(0x06, 3, 0xf2),
        n(0x03, 2, 0xf3), n(0x04, 2, 0xf3), n(0x05, 2, 0xf3), n(0x06, 3, 0xf3),
        n(0x03, 2, 0xff), n(0x04, 2, 0xff), n(0x05, 2, 0xff), n(0x06, 3, 0xff),
        n(0x01, 2, 0xcb), n(0x02, 3, 0xcb), n(0x01, 2, 0xcc), n(0x02, 3, 0xcc),
    ],
    // state 201
    [
        n(0x01, 2, 0xd3), n(0x02, 3, 0xd3), n(0x01, 2, 0xd4), n(0x02, 3, 0xd4),
        n(0x01, 2, 0xd6), n(0x02, 3, 0xd6), n(0x01, 2, 0xdd), n(0x02, 3, 0xdd),
        n(0x01, 2, 0xde), n(0x02, 3, 0xde), n(0x01, 2, 0xdf), n(0x02, 3, 0xdf),
        n(0x01, 2, 0xf1), n(0x02, 3, 0xf1), n(0x01, 2, 0xf4), n(0x02, 3, 0xf4),
    ],
    // state 202
    [
        n(0x01, 2, 0xf5), n(0x02, 3, 0xf5), n(0x01, 2, 0xf6), n(0x02, 3, 0xf6),
        n(0x01, 2, 0xf7), n(0x02, 3, 0xf7), n(0x01, 2, 0xf8), n(0x02, 3, 0xf8),
        n(0x01, 2, 0xfa), n(0x02, 3, 0xfa), n(0x01, 2, 0xfb), n(0x02, 3, 0xfb),
        n(0x01, 2, 0xfc), n(0x02, 3, 0xfc), n(0x01, 2, 0xfd), n(0x02, 3, 0xfd),
    ],
    // state 203
    [
        n(0x01, 2, 0xfe), n(0x02, 3, 0xfe), n(0x00, 3, 0x02), n(0x00, 3, 0x03),
        n(0x00, 3, 0x04), n(0x00, 3, 0x05), n(0x00, 3, 0x06), n(0x00, 3, 0x07),
        n(0x00, 3, 0x08), n(0x00, 3, 0x0b), n(0x00, 3, 0x0c), n(0x00, 3, 0x0e),
        n(0x00, 3, 0x0f), n(0x00, 3, 0x10), n(0x00, 3, 0x11), n(0x00, 3, 0x12),
    ],
    // state 204
    [
        n(0x00, 3, 0x13), n(0x00, 3, 0x14), n(0x00, 3, 0x15), n(0x00, 3, 0x17),
        n(0x00, 3, 0x18), n(0x00, 3, 0x19), n(0x00, 3, 0x1a), n(0x00, 3, 0x1b),
        n(0x00, 3, 0x1c), n(0x00, 3, 0x1d), n(0x00, 3, 0x1e), n(0x00, 3, 0x1f),
        n(0x00, 3, 0x7f), n(0x00, 3, 0xdc), n(0x00, 3, 0xf9), n(0xfd, 0, 0x00),
    ],
    // state 205
    [
        n(0x07, 2, 0xc0), n(0x08, 2, 0xc0), n(0x09, 2, 0xc0), n(0x0a, 2, 0xc0),
        n(0x0b, 2, 0xc0), n(0x0c, 2, 0xc0), n(0x0d, 2, 0xc0), n(0x0e, 3, 0xc0),
        n(0x07, 2, 0xc1), n(0x08, 2, 0xc1), n(0x09, 2, 0xc1), n(0x0a, 2, 0xc1),
        n(0x0b, 2, 0xc1), n(0x0c, 2, 0xc1), n(0x0d, 2, 0xc1), n(0x0e, 3, 0xc1),
    ],
    // state 206
    [
        n(0x07, 2, 0xc8), n(0x08, 2, 0xc8), n(0x09, 2, 0xc8), n(0x0a, 2, 0xc8),
        n(0x0b, 2, 0xc8), n(0x0c, 2, 0xc8), n(0x0d, 2, 0xc8), n(0x0e, 3, 0xc8),
        n(0x07, 2, 0xc9), n(0x08, 2, 0xc9), n(0x09, 2, 0xc9), n(0x0a, 2, 0xc9),
        n(0x0b, 2, 0xc9), n(0x0c, 2, 0xc9), n(0x0d, 2, 0xc9), n(0x0e, 3, 0xc9),
    ],
    // state 207
    [
        n(0x07, 2, 0xca), n(0x08, 2, 0xca), n(0x09, 2, 0xca), n(0x0a, 2, 0xca),
        n(0x0b, 2, 0xca), n(0x0c, 2, 0xca), n(0x0d, 2, 0xca), n(0x0e, 3, 0xca),
        n(0x07, 2, 0xcd), n(0x08, 2, 0xcd), n(0x09, 2, 0xcd), n(0x0a, 2, 0xcd),
        n(0x0b, 2, 0xcd), n(0x0c, 2, 0xcd), n(0x0d, 2, 0xcd), n(0x0e, 3, 0xcd),
    ],
    // state 208
    [
        n(0x07, 2, 0xd2), n(0x08, 2, 0xd2), n(0x09, 2, 0xd2), n(0x0a, 2, 0xd2),
        n(0x0b, 2, 0xd2), n(0x0c, 2, 0xd2), n(0x0d, 2, 0xd2), n(0x0e, 3, 0xd2),
        n(0x07, 2, 0xd5), n(0x08, 2, 0xd5), n(0x09, 2, 0xd5), n(0x0a, 2, 0xd5),
        n(0x0b, 2, 0xd5), n(0x0c, 2, 0xd5), n(0x0d, 2, 0xd5), n(0x0e, 3, 0xd5),
    ],
    // state 209
    [
        n(0x07, 2, 0xda), n(0x08, 2, 0xda), n(0x09, 2, 0xda), n(0x0a, 2, 0xda),
        n(0x0b, 2, 0xda), n(0x0c, 2, 0xda), n(0x0d, 2, 0xda), n(0x0e, 3, 0xda),
        n(0x07, 2, 0xdb), n(0x08, 2, 0xdb), n(0x09, 2, 0xdb), n(0x0a, 2, 0xdb),
        n(0x0b, 2, 0xdb), n(0x0c, 2, 0xdb), n(0x0d, 2, 0xdb), n(0x0e, 3, 0xdb),
    ],
    // state 210
    [
        n(0x07, 2, 0xee), n(0x08, 2, 0xee), n(0x09, 2, 0xee), n(0x0a, 2, 0xee),
        n(0x0b, 2, 0xee), n(0x0c, 2, 0xee), n(0x0d, 2, 0xee), n(0x0e, 3, 0xee),
        n(0x07, 2, 0xf0), n(0x08, 2, 0xf0), n(0x09, 2, 0xf0), n(0x0a, 2, 0xf0),
        n(0x0b, 2, 0xf0), n(0x0c, 2, 0xf0), n(0x0d, 2, 0xf0), n(0x0e, 3, 0xf0),
    ],
    // state 211
    [
        n(0x07, 2, 0xf2), n(0x08, 2, 0xf2), n(0x09, 2, 0xf2), n(0x0a, 2, 0xf2),
        n(0x0b, 2, 0xf2), n(0x0c, 2, 0xf2), n(0x0d, 2, 0xf2), n(0x0e, 3, 0xf2),
        n(0x07, 2, 0xf3), n(0x08, 2, 0xf3), n(0x09, 2, 0xf3), n(0x0a, 2, 0xf3),
        n(0x0b, 2, 0xf3), n(0x0c, 2, 0xf3), n(0x0d, 2, 0xf3), n(0x0e, 3, 0xf3),
    ],
    // state 212
    [
        n(0x07, 2, 0xff), n(0x08, 2, 0xff), n(0x09, 2, 0xff), n(0x0a, 2, 0xff),
        n(0x0b, 2, 0xff), n(0x0c, 2, 0xff), n(0x0d, 2, 0xff), n(0x0e, 3, 0xff),
        n(0x03, 2, 0xcb), n(0x04, 2, 0xcb), n(0x05, 2, 0xcb), n(0x06, 3, 0xcb),
        n(0x03, 2, 0xcc), n(0x04, 2, 0xcc), n(0x05, 2, 0xcc), n(0x06, 3, 0xcc),
    ],
    // state 213
    [
        n(0x03, 2, 0xd3), n(0x04, 2, 0xd3), n(0x05, 2, 0xd3), n(0x06, 3, 0xd3),
        n(0x03, 2, 0xd4), n(0x04, 2, 0xd4), n(0x05, 2, 0xd4), n(0x06, 3, 0xd4),
        n(0x03, 2, 0xd6), n(0x04, 2, 0xd6), n(0x05, 2, 0xd6), n(0x06, 3, 0xd6),
        n(0x03, 2, 0xdd), n(0x04, 2, 0xdd), n(0x05, 2, 0xdd), n(0x06, 3, 0xdd),
    ],
    // state 214
    [
        n(0x03, 2, 0xde), n(0x04, 2, 0xde), n(0x05, 2, 0xde), n(0x06, 3, 0xde),
        n(0x03, 2, 0xdf), n(0x04, 2, 0xdf), n(0x05, 2, 0xdf), n(0x06, 3, 0xdf),
        n(0x03, 2, 0xf1), n(0x04, 2, 0xf1), n(0x05, 2, 0xf1), n(0x06, 3, 0xf1),
        n(0x03, 2, 0xf4), n(0x04, 2, 0xf4), n(0x05, 2, 0xf4), n(0x06, 3, 0xf4),
    ],
    // state 215
    [
        n(0x03, 2, 0xf5), n(0x04, 2, 0xf5), n(0x05, 2, 0xf5), n(0x06, 3, 0xf5),
        n(0x03, 2, 0xf6), n(0x04, 2, 0xf6), n(0x05, 2, 0xf6), n(0x06, 3, 0xf6),
        n(0x03, 2, 0xf7), n(0x04, 2, 0xf7), n(0x05, 2, 0xf7), n(0x06, 3, 0xf7),
        n(0x03, 2, 0xf8), n(0x04, 2, 0xf8), n(0x05, 2, 0xf8), n(0x06, 3, 0xf8),
    ],
    // state 216
    [
        n(0x03, 2, 0xfa), n(0x04, 2, 0xfa), n(0x05, 2, 0xfa), n(0x06, 3, 0xfa),
        n(0x03, 2, 0xfb), n(0x04, 2, 0xfb), n(0x05, 2, 0xfb), n(0x06, 3, 0xfb),
        n(0x03, 2, 0xfc), n(0x04, 2, 0xfc), n(0x05, 2, 0xfc), n(0x06, 3, 0xfc),
        n(0x03, 2, 0xfd), n(0x04, 2, 0xfd), n(0x05, 2, 0xfd), n(0x06, 3, 0xfd),
    ],
    // state 217
    [
        n(0x03, 2, 0xfe), n(0x04, 2, 0xfe), n(0x05, 2, 0xfe), n(0x06, 3, 0xfe),
        n(0x01, 2, 0x02), n(0x02, 3, 0x02), n(0x01, 2, 0x03), n(0x02, 3, 0x03),
        n(0x01, 2, 0x04), n(0x02, 3, 0x04), n(0x01, 2, 0x05), n(0x02, 3, 0x05),
        n(0x01, 2, 0x06), n(0x02, 3, 0x06), n(0x01, 2, 0x07), n(0x02, 3, 0x07),
    ],
    // state 218
    [
        n(0x01, 2, 0x08), n(0x02, 3, 0x08), n(0x01, 2, 0x0b), n(0x02, 3, 0x0b),
        n(0x01, 2, 0x0c), n(0x02, 3, 0x0c), n(0x01, 2, 0x0e), n(0x02, 3, 0x0e),
        n(0x01, 2, 0x0f), n(0x02, 3, 0x0f), n(0x01, 2, 0x10), n(0x02, 3, 0x10),
        n(0x01, 2, 0x11), n(0x02, 3, 0x11), n(0x01, 2, 0x12), n(0x02, 3, 0x12),
    ],
    // state 219
    [
        n(0x01, 2, 0x13), n(0x02, 3, 0x13), n(0x01, 2, 0x14), n(0x02, 3, 0x14),
        n(0x01, 2, 0x15), n(0x02, 3, 0x15), n(0x01, 2, 0x17), n(0x02, 3, 0x17),
        n(0x01, 2, 0x18), n(0x02, 3, 0x18), n(0x01, 2, 0x19), n(0x02, 3, 0x19),
        n(0x01, 2, 0x1a), n(0x02, 3, 0x1a), n(0x01, 2, 0x1b), n(0x02, 3, 0x1b),
    ],
    // state 220
    [
        n(0x01, 2, 0x1c), n(0x02, 3, 0x1c), n(0x01, 2, 0x1d), n(0x02, 3, 0x1d),
        n(0x01, 2, 0x1e), n(0x02, 3, 0x1e), n(0x01, 2, 0x1f), n(0x02, 3, 0x1f),
        n(0x01, 2, 0x7f), n(0x02, 3, 0x7f), n(0x01, 2, 0xdc), n(0x02, 3, 0xdc),
        n(0x01, 2, 0xf9), n(0x02, 3, 0xf9), n(0xfe, 0, 0x00), n(0xff, 0, 0x00),
    ],
    // state 221
    [
        n(0x07, 2, 0xcb), n(0x08, 2, 0xcb), n(0x09, 2, 0xcb), n(0x0a, 2, 0xcb),
        n(0x0b, 2, 0xcb), n(0x0c, 2, 0xcb), n(0x0d, 2, 0xcb), n(0x0e, 3, 0xcb),
        n(0x07, 2, 0xcc), n(0x08, 2, 0xcc), n(0x09, 2, 0xcc), n(0x0a, 2, 0xcc),
        n(0x0b, 2, 0xcc), n(0x0c, 2, 0xcc), n(0x0d, 2, 0xcc), n(0x0e, 3, 0xcc),
    ],
    // state 222
    [
        n(0x07, 2, 0xd3), n(0x08, 2, 0xd3), n(0x09, 2, 0xd3), n(0x0a, 2, 0xd3),
        n(0x0b, 2, 0xd3), n(0x0c, 2, 0xd3), n(0x0d, 2, 0xd3), n(0x0e, 3, 0xd3),
        n(0x07, 2, 0xd4), n(0x08, 2, 0xd4), n(0x09, 2, 0xd4), n(0x0a, 2, 0xd4),
        n(0x0b, 2, 0xd4), n(0x0c, 2, 0xd4), n(0x0d, 2, 0xd4), n(0x0e, 3, 0xd4),
    ],
    // state 223
    [
        n(0x07, 2, 0xd6), n(0x08, 2, 0xd6), n(0x09, 2, 0xd6), n(0x0a, 2, 0xd6),
        n(0x0b, 2, 0xd6), n(0x0c, 2, 0xd6), n(0x0d, 2, 0xd6), n(0x0e, 3, 0xd6),
        n(0x07, 2, 0xdd), n(0x08, 2, 0xdd), n(0x09, 2, 0xdd), n(0x0a, 2, 0xdd),
        n(0x0b, 2, 0xdd), n(0x0c, 2, 0xdd), n(0x0d, 2, 0xdd), n(0x0e, 3, 0xdd),
    ],
    // state 224
    [
        n(0x07, 2, 0xde), n(0x08, 2, 0xde), n(0x09, 2, 0xde), n(0x0a, 2, 0xde),
        n(0x0b, 2, 0xde), n(0x0c, 2, 0xde), n(0x0d, 2, 0xde), n(0x0e, 3, 0xde),
        n(0x07, 2, 0xdf), n(0x08, 2, 0xdf), n(0x09, 2, 0xdf), n(0x0a, 2, 0xdf),
        n(0x0b, 2, 0xdf), n(0x0c, 2, 0xdf), n(0x0d, 2, 0xdf), n(0x0e, 3, 0xdf),
    ],
    // state 225
    [
        n(0x07, 2, 0xf1), n(0x08, 2, 0xf1), n(0x09, 2, 0xf1), n(0x0a, 2, 0xf1),
        n(0x0b, 2, 0xf1), n(0x0c, 2, 0xf1), n(0x0d, 2, 0xf1), n(0x0e, 3, 0xf1),
        n(0x07, 2, 0xf4), n(0x08, 2, 0xf4), n(0x09, 2, 0xf4), n(0x0a, 2, 0xf4),
        n(0x0b, 2, 0xf4), n(0x0c, 2, 0xf4), n(0x0d, 2, 0xf4), n(0x0e, 3, 0xf4),
    ],
    // state 226
    [
        n(0x07, 2, 0xf5), n(0x08, 2, 0xf5), n(0x09, 2, 0xf5), n(0x0a, 2, 0xf5),
        n(0x0b, 2, 0xf5), n(0x0c, 2, 0xf5), n(0x0d, 2, 0xf5), n(0x0e, 3, 0xf5),
        n(0x07, 2, 0xf6), n(0x08, 2, 0xf6), n(0x09, 2, 0xf6), n(0x0a, 2, 0xf6),
        n(0x0b, 2, 0xf6), n(0x0c, 2, 0xf6), n(0x0d, 2, 0xf6), n(0x0e, 3, 0xf6),
    ],
    // state 227
    [
        n(0x07, 2, 0xf7), n(0x08, 2, 0xf7), n(0x09, 2, 0xf7), n(0x0a, 2, 0xf7),
        n(0x0b, 2, 0xf7), n(0x0c, 2, 0xf7), n(0x0d, 2, 0xf7), n(0x0e, 3, 0xf7),
        n(0x07, 2, 0xf8), n(0x08, 2, 0xf8), n(0x09, 2, 0xf8), n(0x0a, 2, 0xf8),
        n(0x0b, 2, 0xf8), n(0x0c, 2, 0xf8), n(0x0d, 2, 0xf8), n(0x0e, 3, 0xf8),
    ],
    // state 228
    [
        n(0x07, 2, 0xfa), n(0x08, 2, 0xfa), n(0x09, 2, 0xfa), n(0x0a, 2, 0xfa),
        n(0x0b, 2, 0xfa), n(0x0c, 2, 0xfa), n(0x0d, 2, 0xfa), n(0x0e, 3, 0xfa),
        n(0x07, 2, 0xfb), n(0x08, 2, 0xfb), n(0x09, 2, 0xfb), n(0x0a, 2, 0xfb),
        n(0x0b, 2, 0xfb), n(0x0c, 2, 0xfb), n(0x0d, 2, 0xfb), n(0x0e, 3, 0xfb),
    ],
    // state 229
    [
        n(0x07, 2, 0xfc), n(0x08, 2, 0xfc), n(0x09, 2, 0xfc), n(0x0a, 2, 0xfc),
        n(0x0b, 2, 0xfc), n(0x0c, 2, 0xfc), n(0x0d, 2, 0xfc), n(0x0e, 3, 0xfc),
        n(0x07, 2, 0xfd), n(0x08, 2, 0xfd), n(0x09, 2, 0xfd), n(0x0a, 2, 0xfd),
        n(0x0b, 2, 0xfd), n(0x0c, 2, 0xfd), n(0x0d, 2, 0xfd), n(0x0e, 3, 0xfd),
    ],
    // state 230
    [
        n(0x07, 2, 0xfe), n(0x08, 2, 0xfe), n(0x09, 2, 0xfe), n(0x0a, 2, 0xfe),
        n(0x0b, 2, 0xfe), n(0x0c, 2, 0xfe), n(0x0d, 2, 0xfe), n(0x0e, 3, 0xfe),
        n(0x03, 2, 0x02), n(0x04, 2, 0x02), n(0x05, 2, 0x02), n(0x06, 3, 0x02),
        n(0x03, 2, 0x03), n(0x04, 2, 0x03), n(0x05, 2, 0x03), n(0x06, 3, 0x03),
    ],
    // state 231
    [
        n(0x03, 2, 0x04), n(0x04, 2, 0x04), n(0x05, 2, 0x04), n(0x06, 3, 0x04),
        n(0x03, 2, 0x05), n(0x04, 2, 0x05), n(0x05, 2, 0x05), n(0x06, 3, 0x05),
        n(0x03, 2, 0x06), n(0x04, 2, 0x06), n(0x05, 2, 0x06), n(0x06, 3, 0x06),
        n(0x03, 2, 0x07), n(0x04, 2, 0x07), n(0x05, 2, 0x07), n(0x06, 3, 0x07),
    ],
    // state 232
    [
        n(0x03, 2, 0x08), n(0x04, 2, 0x08), n(0x05, 2, 0x08), n(0x06, 3, 0x08),
        n(0x03, 2, 0x0b), n(0x04, 2, 0x0b), n(0x05, 2, 0x0b), n(0x06, 3, 0x0b),
        n(0x03, 2, 0x0c), n(0x04, 2, 0x0c), n(0x05, 2, 0x0c), n(0x06, 3, 0x0c),
        n(0x03, 2, 0x0e), n(0x04, 2, 0x0e), n(0x05, 2, 0x0e), n(0x06, 3, 0x0e),
    ],
    // state 233
    [
        n(0x03, 2, 0x0f), n(0x04, 2, 0x0f), n(0x05, 2, 0x0f), n(0x06, 3, 0x0f),
        n(0x03, 2, 0x10), n(0x04, 2, 0x10), n(0x05, 2, 0x10), n(0x06, 3, 0x10),
        n(0x03, 2, 0x11), n(0x04, 2, 0x11), n(0x05, 2, 0x11), n(0x06, 3, 0x11),
        n(0x03, 2, 0x12), n(0x04, 2, 0x12), n(0x05, 2, 0x12), n(0x06, 3, 0x12),
    ],
    // state 234
    [
        n(0x03, 2, 0x13), n(0x04, 2, 0x13), n(0x05, 2, 0x13), n(0x06, 3, 0x13),
        n(0x03, 2, 0x14), n(0x04, 2, 0x14), n(0x05, 2, 0x14), n(0x06, 3, 0x14),
        n(0x03, 2, 0x15), n(0x04, 2, 0x15), n(0x05, 2, 0x15), n(0x06, 3, 0x15),
        n(0x03, 2, 0x17), n(0x04, 2, 0x17), n(0x05, 2, 0x17), n(0x06, 3, 0x17),
    ],
    // state 235
    [
        n(0x03, 2, 0x18), n(0x04, 2, 0x18), n(0x05, 2, 0x18), n(0x06, 3, 0x18),
        n(0x03, 2, 0x19), n(0x04, 2, 0x19), n(0x05, 2, 0x19), n(0x06, 3, 0x19),
        n(0x03, 2, 0x1a), n(0x04, 2, 0x1a), n(0x05, 2, 0x1a), n(0x06, 3, 0x1a),
        n(0x03, 2, 0x1b), n(0x04, 2, 0x1b), n(0x05, 2, 0x1b), n(0x06, 3, 0x1b),
    ],
    // state 236
    [
        n(0x03, 2, 0x1c), n(0x04, 2, 0x1c), n(0x05, 2, 0x1c), n(0x06, 3, 0x1c),
        n(0x03, 2, 0x1d), n(0x04, 2, 0x1d), n(0x05, 2, 0x1d), n(0x06, 3, 0x1d),
        n(0x03, 2, 0x1e), n(0x04, 2, 0x1e), n(0x05, 2, 0x1e), n(0x06, 3, 0x1e),
        n(0x03, 2, 0x1f), n(0x04, 2, 0x1f), n(0x05, 2, 0x1f), n(0x06, 3, 0x1f),
    ],
    // state 237
    [
        n(0x03, 2, 0x7f), n(0x04, 2, 0x7f), n(0x05, 2, 0x7f), n(0x06, 3, 0x7f),
        n(0x03, 2, 0xdc), n(0x04, 2, 0xdc), n(0x05, 2, 0xdc), n(0x06, 3, 0xdc),
        n(0x03, 2, 0xf9), n(0x04, 2, 0xf9), n(0x05, 2, 0xf9), n(0x06, 3, 0xf9),
        n(0x00, 3, 0x0a), n(0x00, 3, 0x0d), n(0x00, 3, 0x16), n(0x00, 4, 0x00),
    ],
    // state 238
    [
        n(0x07, 2, 0x02), n(0x08, 2, 0x02), n(0x09, 2, 0x02), n(0x0a, 2, 0x02),
        n(0x0b, 2, 0x02), n(0x0c, 2, 0x02), n(0x0d, 2, 0x02), n(0x0e, 3, 0x02),
        n(0x07, 2, 0x03), n(0x08, 2, 0x03), n(0x09, 2, 0x03), n(0x0a, 2, 0x03),
        n(0x0b, 2, 0x03), n(0x0c, 2, 0x03), n(0x0d, 2, 0x03), n(0x0e, 3, 0x03),
    ],
    // state 239
    [
        n(0x07, 2, 0x04), n(0x08, 2, 0x04), n(0x09, 2, 0x04), n(0x0a, 2, 0x04),
        n(0x0b, 2, 0x04), n(0x0c, 2, 0x04), n(0x0d, 2, 0x04), n(0x0e, 3, 0x04),
        n(0x07, 2, 0x05), n(0x08, 2, 0x05), n(0x09, 2, 0x05), n(0x0a, 2, 0x05),
        n(0x0b, 2, 0x05), n(0x0c, 2, 0x05), n(0x0d, 2, 0x05), n(0x0e, 3, 0x05),
    ],
    // state 240
    [
        n(0x07, 2, 0x06), n(0x08, 2, 0x06), n(0x09, 2, 0x06), n(0x0a, 2, 0x06),
        n(0x0b, 2, 0x06), n(0x0c, 2, 0x06), n(0x0d, 2, 0x06), n(0x0e, 3, 0x06),
        n(0x07, 2, 0x07), n(0x08, 2, 0x07), n(0x09, 2, 0x07), n(0x0a, 2, 0x07),
        n(0x0b, 2, 0x07), n(0x0c, 2, 0x07), n(0x0d, 2, 0x07), n(0x0e, 3, 0x07),
    ],
    // state 241
    [
        n(0x07, 2, 0x08), n(0x08, 2, 0x08), n(0x09, 2, 0x08), n(0x0a, 2, 0x08),
        n(0x0b, 2, 0x08), n(0x0c, 2, 0x08), n(0x0d, 2, 0x08), n(0x0e, 3, 0x08),
        n(0x07, 2, 0x0b), n(0x08, 2, 0x0b), n(0x09, 2, 0x0b), n(0x0a, 2, 0x0b),
        n(0x0b, 2, 0x0b), n(0x0c, 2, 0x0b), n(0x0d, 2, 0x0b), n(0x0e, 3, 0x0b),
    ],
    // state 242
    [
        n(0x07, 2, 0x0c), n(0x08, 2, 0x0c), n(0x09, 2, 0x0c), n(0x0a, 2, 0x0c),
        n(0x0b, 2, 0x0c), n(0x0c, 2, 0x0c), n(0x0d, 2, 0x0c), n(0x0e, 3, 0x0c),
        n(0x07, 2, 0x0e), n(0x08, 2, 0x0e), n(0x09, 2, 0x0e), n(0x0a, 2, 0x0e),
        n(0x0b, 2, 0x0e), n(0x0c, 2, 0x0e), n(0x0d, 2, 0x0e), n(0x0e, 3, 0x0e),
    ],
    // state 243
    [
        n(0x07, 2, 0x0f), n(0x08, 2, 0x0f), n(0x09, 2, 0x0f), n(0x0a, 2, 0x0f),
        n(0x0b, 2, 0x0f), n(0x0c, 2, 0x0f), n(0x0d, 2, 0x0f), n(0x0e, 3, 0x0f),
        n(0x07, 2, 0x10), n(0x08, 2, 0x10), n(0x09, 2, 0x10), n(0x0a, 2, 0x10),
        n(0x0b, 2, 0x10), n(0x0c, 2, 0x10), n(0x0d, 2, 0x10), n(0x0e, 3, 0x10),
    ],
    // state 244
    [
        n(0x07, 2, 0x11), n(0x08, 2, 0x11), n(0x09, 2, 0x11), n(0x0a, 2, 0x11),
        n(0x0b, 2, 0x11), n(0x0c, 2, 0x11), n(0x0d, 2, 0x11), n(0x0e, 3, 0x11),
        n(0x07, 2, 0x12), n(0x08, 2, 0x12), n(0x09, 2, 0x12), n(0x0a, 2, 0x12),
        n(0x0b, 2, 0x12), n(0x0c, 2, 0x12), n(0x0d, 2, 0x12), n(0x0e, 3, 0x12),
    ],
    // state 245
    [
        n(0x07, 2, 0x13), n(0x08, 2, 0x13), n(0x09, 2, 0x13), n(0x0a, 2, 0x13),
        n(0x0b, 2, 0x13), n(0x0c, 2, 0x13), n(0x0d, 2, 0x13), n(0x0e, 3, 0x13),
        n(0x07, 2, 0x14), n(0x08, 2, 0x14), n(0x09, 2, 0x14), n(0x0a, 2, 0x14),
        n(0x0b, 2, 0x14), n(0x0c, 2, 0x14), n(0x0d, 2, 0x14), n(0x0e, 3, 0x14),
    ],
    // state 246
    [
        n(0x07, 2, 0x15), n(0x08, 2, 0x15), n(0x09, 2, 0x15), n(0x0a, 2, 0x15),
        n(0x0b, 2, 0x15), n(0x0c, 2, 0x15), n(0x0d, 2, 0x15), n(0x0e, 3, 0x15),
        n(0x07, 2, 0x17), n(0x08, 2, 0x17), n(0x09, 2, 0x17), n(0x0a, 2, 0x17),
        n(0x0b, 2, 0x17), n(0x0c, 2, 0x17), n(0x0d, 2, 0x17), n(0x0e, 3, 0x17),
    ],
    // state 247
    [
        n(0x07, 2, 0x18), n(0x08, 2, 0x18), n(0x09, 2, 0x18), n(0x0a, 2, 0x18),
        n(0x0b, 2, 0x18), n(0x0c, 2, 0x18), n(0x0d, 2, 0x18), n(0x0e, 3, 0x18),
        n(0x07, 2, 0x19), n(0x08, 2, 0x19), n(0x09, 2, 0x19), n(0x0a, 2, 0x19),
        n(0x0b, 2, 0x19), n(0x0c, 2, 0x19), n(0x0d, 2, 0x19), n(0x0e, 3, 0x19),
    ],
    // state 248
    [
        n(0x07, 2, 0x1a), n(0x08, 2, 0x1a), n(0x09, 2, 0x1a), n(0x0a, 2, 0x1a),
        n(0x0b, 2, 0x1a), n(0x0c, 2, 0x1a), n(0x0d, 2, 0x1a), n(0x0e, 3, 0x1a),
        n(0x07, 2, 0x1b), n(0x08, 2, 0x1b), n(0x09, 2, 0x1b), n(0x0a, 2, 0x1b),
        n(0x0b, 2, 0x1b), n(0x0c, 2, 0x1b), n(0x0d, 2, 0x1b), n(0x0e, 3, 0x1b),
    ],
    // state 249
    [
        n(0x07, 2, 0x1c), n(0x08, 2, 0x1c), n(0x09, 2, 0x1c), n(0x0a, 2, 0x1c),
        n(0x0b, 2, 0x1c), n(0x0c, 2, 0x1c), n(0x0d, 2, 0x1c), n(0x0e, 3, 0x1c),
        n(0x07, 2, 0x1d), n(0x08, 2, 0x1d), n(0x09, 2, 0x1d), n(0x0a, 2, 0x1d),
        n(0x0b, 2, 0x1d), n(0x0c, 2, 0x1d), n(0x0d, 2, 0x1d), n(0x0e, 3, 0x1d),
    ],
    // state 250
    [
        n(0x07, 2, 0x1e), n(0x08, 2, 0x1e), n(0x09, 2, 0x1e), n(0x0a, 2, 0x1e),
        n(0x0b, 2, 0x1e), n(0x0c, 2, 0x1e), n(0x0d, 2, 0x1e), n(0x0e, 3, 0x1e),
        n(0x07, 2, 0x1f), n(0x08, 2, 0x1f), n(0x09, 2, 0x1f), n(0x0a, 2, 0x1f),
        n(0x0b, 2, 0x1f), n(0x0c, 2, 0x1f), n(0x0d, 2, 0x1f), n(0x0e, 3, 0x1f),
    ],
    // state 251
    [
        n(0x07, 2, 0x7f), n(0x08, 2, 0x7f), n(0x09, 2, 0x7f), n(0x0a, 2, 0x7f),
        n(0x0b, 2, 0x7f), n(0x0c, 2, 0x7f), n(0x0d, 2, 0x7f), n(0x0e, 3, 0x7f),
        n(0x07, 2, 0xdc), n(0x08, 2, 0xdc), n(0x09, 2, 0xdc), n(0x0a, 2, 0xdc),
        n(0x0b, 2, 0xdc), n(0x0c, 2, 0xdc), n(0x0d, 2, 0xdc), n(0x0e, 3, 0xdc),
    ],
    // state 252
    [
        n(0x07, 2, 0xf9), n(0x08, 2, 0xf9), n(0x09, 2, 0xf9), n(0x0a, 2, 0xf9),
        n(0x0b, 2, 0xf9), n(0x0c, 2, 0xf9), n(0x0d, 2, 0xf9), n(0x0e, 3, 0xf9),
        n(0x01, 2, 0x0a), n(0x02, 3, 0x0a), n(0x01, 2, 0x0d), n(0x02, 3, 0x0d),
        n(0x01, 2, 0x16), n(0x02, 3, 0x16), n(0x00, 4, 0x00), n(0x00, 4, 0x00),
    ],
    // state 253
    [
        n(0x03, 2, 0x0a), n(0x04, 2, 0x0a), n(0x05, 2, 0x0a), n(0x06, 3, 0x0a),
        n(0x03, 2, 0x0d), n(0x04, 2, 0x0d), n(0x05, 2, 0x0d), n(0x06, 3, 0x0d),
        n(0x03, 2, 0x16), n(0x04, 2, 0x16), n(0x05, 2, 0x16), n(0x06, 3, 0x16),
        n(0x00, 4, 0x00), n(0x00, 4, 0x00), n(0x00, 4, 0x00), n(0x00, 4, 0x00),
    ],
    // state 254
    [
        n(0x07, 2, 0x0a), n(0x08, 2, 0x0a), n(0x09, 2, 0x0a), n(0x0a, 2, 0x0a),
        n(0x0b, 2, 0x0a), n(0x0c, 2, 0x0a), n(0x0d, 2, 0x0a), n(0x0e, 3, 0x0a),
        n(0x07, 2, 0x0d), n(0x08, 2, 0x0d), n(0x09, 2, 0x0d), n(0x0a, 2, 0x0d),
        n(0x0b, 2, 0x0d), n(0x0c, 2, 0x0d), n(0x0d, 2, 0x0d), n(0x0e, 3, 0x0d),
    ],
    // state 255
    [
        n(0x07, 2, 0x16), n(0x08, 2, 0x16), n(0x09, 2, 0x16), n(0x0a, 2, 0x16),
        n(0x0b, 2, 0x16), n(0x0c, 2, 0x16), n(0x0d, 2, 0x16), n(0x0e, 3, 0x16),
        n(0x00, 4, 0x00), n(0x00, 4, 0x00), n(0x00, 4, 0x00), n(0x00, 4, 0x00),
        n(0x00, 4, 0x00), n(0x00, 4, 0x00), n(0x00, 4, 0x00), n(0x00, 4, 0x00),
    ],
];

/// `(code, bit length)` for every byte value, HPACK Appendix B.
pub static ENCODE_TABLE: [(u32, u8); 256] = [
    (0x1ff8, 13), (0x7fffd8, 23), (0xfffffe2, 28), (0xfffffe3, 28),
    (0xfffffe4, 28), (0xfffffe5, 28), (0xfffffe6, 28), (0xfffffe7, 28),
    (0xfffffe8, 28), (0xffffea, 24), (0x3ffffffc, 30), (0xfffffe9, 28),
    (0xfffffea, 28), (0x3ffffffd, 30), (0xfffffeb, 28), (0xfffffec, 28),
    (0xfffffed, 28), (0xfffffee, 28), (0xfffffef, 28), (0xffffff0, 28),
    (0xffffff1, 28), (0xffffff2, 28), (0x3ffffffe, 30), (0xffffff3, 28),
    (0xffffff4, 28), (0xffffff5, 28), (0xffffff6, 28), (0xffffff7, 28),
    (0xffffff8, 28), (0xffffff9, 28), (0xffffffa, 28), (0xffffffb, 28),
    (0x14, 6), (0x3f8, 10), (0x3f9, 10), (0xffa, 12),
    (0x1ff9, 13), (0x15, 6), (0xf8, 8), (0x7fa, 11),
    (0x3fa, 10), (0x3fb, 10), (0xf9, 8), (0x7fb, 11),
    (0xfa, 8), (0x16, 6), (0x17, 6), (0x18, 6),
    (0x0, 5), (0x1, 5), (0x2, 5), (0x19, 6),
    (0x1a, 6), (0x1b, 6), (0x1c, 6), (0x1d, 6),
    (0x1e, 6), (0x1f, 6), (0x5c, 7), (0xfb, 8),
    (0x7ffc, 15), (0x20, 6), (0xffb, 12), (0x3fc, 10),
    (0x1ffa, 13), (0x21, 6), (0x5d, 7), (0x5e, 7),
    (0x5f, 7), (0x60, 7), (0x61, 7), (0x62, 7),
    (0x63, 7), (0x64, 7), (0x65, 7), (0x66, 7),
    (0x67, 7), (0x68, 7), (0x69, 7), (0x6a, 7),
    (0x6b, 7), (0x6c, 7), (0x6d, 7), (0x6e, 7),
    (0x6f, 7), (0x70, 7), (0x71, 7), (0x72, 7),
    (0xfc, 8), (0x73, 7), (0xfd, 8), (0x1ffb, 13),
    (0x7fff0, 19), (0x1ffc, 13), (0x3ffc, 14), (0x22, 6),
    (0x7ffd, 15), (0x3, 5), (0x23, 6), (0x4, 5),
    (0x24, 6), (0x5, 5), (0x25, 6), (0x26, 6),
    (0x27, 6), (0x6, 5), (0x74, 7), (0x75, 7),
    (0x28, 6), (0x29, 6), (0x2a, 6), (0x7, 5),
    (0x2b, 6), (0x76, 7), (0x2c, 6), (0x8, 5),
    (0x9, 5), (0x2d, 6), (0x77, 7), (0x78, 7),
    (0x79, 7), (0x7a, 7), (0x7b, 7), (0x7ffe, 15),
    (0x7fc, 11), (0x3ffd, 14), (0x1ffd, 13), (0xffffffc, 28),
    (0xfffe6, 20), (0x3fffd2, 22), (0xfffe7, 20), (0xfffe8, 20),
    (0x3fffd3, 22), (0x3fffd4, 22), (0x3fffd5, 22), (0x7fffd9, 23),
    (0x3fffd6, 22), (0x7fffda, 23), (0x7fffdb, 23), (0x7fffdc, 23),
    (0x7fffdd, 23), (0x7fffde, 23), (0xffffeb, 24), (0x7fffdf, 23),
    (0xffffec, 24), (0xffffed, 24), (0x3fffd7, 22), (0x7fffe0, 23),
    (0xffffee, 24), (0x7fffe1, 23), (0x7fffe2, 23), (0x7fffe3, 23),
    (0x7fffe4, 23), (0x1fffdc, 21), (0x3fffd8, 22), (0x7fffe5, 23),
    (0x3fffd9, 22), (0x7fffe6, 23), (0x7fffe7, 23), (0xffffef, 24),
    (0x3fffda, 22), (0x1fffdd, 21), (0xfffe9, 20), (0x3fffdb, 22),
    (0x3fffdc, 22), (0x7fffe8, 23), (0x7fffe9, 23), (0x1fffde, 21),
    (0x7fffea, 23), (0x3fffdd, 22), (0x3fffde, 22), (0xfffff0, 24),
    (0x1fffdf, 21), (0x3fffdf, 22), (0x7fffeb, 23), (0x7fffec, 23),
    (0x1fffe0, 21), (0x1fffe1, 21), (0x3fffe0, 22), (0x1fffe2, 21),
    (0x7fffed, 23), (0x3fffe1, 22), (0x7fffee, 23), (0x7fffef, 23),
    (0xfffea, 20), (0x3fffe2, 22), (0x3fffe3, 22), (0x3fffe4, 22),
    (0x7ffff0, 23), (0x3fffe5, 22), (0x3fffe6, 22), (0x7ffff1, 23),
    (0x3ffffe0, 26), (0x3ffffe1, 26), (0xfffeb, 20), (0x7fff1, 19),
    (0x3fffe7, 22), (0x7ffff2, 23), (0x3fffe8, 22), (0x1ffffec, 25),
    (0x3ffffe2, 26), (0x3ffffe3, 26), (0x3ffffe4, 26), (0x7ffffde, 27),
    (0x7ffffdf, 27), (0x3ffffe5, 26), (0xfffff1, 24), (0x1ffffed, 25),
    (0x7fff2, 19), (0x1fffe3, 21), (0x3ffffe6, 26), (0x7ffffe0, 27),
    (0x7ffffe1, 27), (0x3ffffe7, 26), (0x7ffffe2, 27), (0xfffff2, 24),
    (0x1fffe4, 21), (0x1fffe5, 21), (0x3ffffe8, 26), (0x3ffffe9, 26),
    (0xffffffd, 28), (0x7ffffe3, 27), (0x7ffffe4, 27), (0x7ffffe5, 27),
    (0xfffec, 20), (0xfffff3, 24), (0xfffed, 20), (0x1fffe6, 21),
    (0x3fffe9, 22), (0x1fffe7, 21), (0x1fffe8, 21), (0x7ffff3, 23),
    (0x3fffea, 22), (0x3fffeb, 22), (0x1ffffee, 25), (0x1ffffef, 25),
    (0xfffff4, 24), (0xfffff5, 24), (0x3ffffea, 26), (0x7ffff4, 23),
    (0x3ffffeb, 26), (0x7ffffe6, 27), (0x3ffffec, 26), (0x3ffffed, 26),
    (0x7ffffe7, 27), (0x7ffffe8, 27), (0x7ffffe9, 27), (0x7ffffea, 27),
    (0x7ffffeb, 27), (0xffffffe, 28), (0x7ffffec, 27), (0x7ffffed, 27),
    (0x7ffffee, 27), (0x7ffffef, 27), (0x7fffff0, 27), (0x3ffffee, 26),
];
