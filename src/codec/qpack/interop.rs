//! The record format used by the qpack-interop test corpus: each encoded
//! field section is framed as `{stream id: u64 BE, length: u32 BE, bytes}`.
//! File handling belongs to the harness around the crate; only the pure
//! record codec lives here.

use crate::{Binary, Buf, BufMut, H3Error, H3Result, Lookahead};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub stream_id: u64,
    pub block: Binary,
}

pub fn encode_record<B: BufMut>(dst: &mut B, stream_id: u64, block: &[u8]) -> usize {
    let mut size = dst.put_u64(stream_id);
    size += dst.put_u32(block.len() as u32);
    size += dst.put_slice(block);
    size
}

/// Reads one record, consuming nothing on `Incomplete`.
pub fn decode_record<B: Buf>(src: &mut B) -> H3Result<Record> {
    let (record, consumed) = {
        let mut lookahead = Lookahead::new(&*src);
        if lookahead.remaining() < 12 {
            return Err(H3Error::Incomplete);
        }
        let stream_id = lookahead.get_u64();
        let length = lookahead.get_u32() as usize;
        if lookahead.remaining() < length {
            return Err(H3Error::Incomplete);
        }
        let mut block = vec![0u8; length];
        lookahead.copy_to_slice(&mut block);
        (
            Record {
                stream_id,
                block: Binary::from(block),
            },
            lookahead.consumed(),
        )
    };
    src.advance(consumed);
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::{decode_record, encode_record};
    use crate::{Buf, H3Error};

    #[test]
    fn record_roundtrip() {
        let mut encoded = vec![];
        encode_record(&mut encoded, 4, b"block-a");
        encode_record(&mut encoded, 8, b"block-b");

        let mut src = &encoded[..];
        let first = decode_record(&mut src).unwrap();
        assert_eq!(first.stream_id, 4);
        assert_eq!(first.block.as_slice(), b"block-a");
        let second = decode_record(&mut src).unwrap();
        assert_eq!(second.stream_id, 8);
        assert_eq!(second.block.as_slice(), b"block-b");
        assert!(!src.has_remaining());
    }

    #[test]
    fn truncated_record() {
        let mut encoded = vec![];
        encode_record(&mut encoded, 0, b"block");
        let mut src = &encoded[..encoded.len() - 1];
        let before = src.remaining();
        assert_eq!(decode_record(&mut src), Err(H3Error::Incomplete));
        assert_eq!(src.remaining(), before);
    }
}
