use super::{huffman, prefix_int};
use crate::{Binary, Buf, BufMut, H3Error, H3Result};

pub fn encoded_size(literal: &[u8], prefix: u8) -> H3Result<usize> {
    let huffman_size = huffman::encoded_size(literal);
    let payload_size = huffman_size.min(literal.len());
    Ok(prefix_int::encoded_size(payload_size as u64, prefix)? + payload_size)
}

/// Writes a length-prefixed string, Huffman-coded only when that is strictly
/// shorter than the raw bytes. The bit at position `prefix` of the first
/// byte signals the Huffman form; `flags` fills the bits above it.
pub fn encode<B: BufMut>(dst: &mut B, literal: &[u8], prefix: u8, flags: u8) -> H3Result<usize> {
    if prefix >= 8 {
        return Err(H3Error::InvalidArgument);
    }
    let huffman_size = huffman::encoded_size(literal);
    if huffman_size < literal.len() {
        let mut size =
            prefix_int::encode(dst, huffman_size as u64, prefix, flags | 1 << prefix)?;
        size += huffman::encode(dst, literal);
        Ok(size)
    } else {
        let mut size = prefix_int::encode(dst, literal.len() as u64, prefix, flags)?;
        size += dst.put_slice(literal);
        Ok(size)
    }
}

pub fn decode<B: Buf>(src: &mut B, prefix: u8) -> H3Result<Binary> {
    if prefix >= 8 {
        return Err(H3Error::InvalidArgument);
    }
    let huffman_coded = match src.peek() {
        Some(first) => first & 1 << prefix != 0,
        None => return Err(H3Error::Incomplete),
    };
    let (length, _) = prefix_int::decode(src, prefix)?;
    let length =
        usize::try_from(length).map_err(|_| H3Error::QpackDecompressionFailed)?;
    if huffman_coded {
        Ok(Binary::from(huffman::decode(src, length)?))
    } else {
        if src.remaining() < length {
            return Err(H3Error::Incomplete);
        }
        let mut raw = vec![0u8; length];
        src.copy_to_slice(&mut raw);
        Ok(Binary::from(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::{decode, encode, encoded_size};
    use crate::H3Error;

    #[test]
    fn huffman_only_when_shorter() {
        // lowercase text compresses, so the huffman bit is set
        let mut encoded = vec![];
        encode(&mut encoded, b"location", 7, 0).unwrap();
        assert!(encoded[0] & 0x80 != 0);
        assert!(((encoded[0] & 0x7f) as usize) < b"location".len());
        // bytes with long codes stay raw
        let mut encoded = vec![];
        encode(&mut encoded, &[0xff, 0xfe, 0xfd], 7, 0).unwrap();
        assert_eq!(encoded[0], 3);
        assert_eq!(&encoded[1..], &[0xff, 0xfe, 0xfd]);
    }

    #[test]
    fn roundtrip_both_paths() {
        for literal in [&b"content-type"[..], &[0xff, 0x01, 0x80][..], b""] {
            let mut encoded = vec![];
            let size = encode(&mut encoded, literal, 3, 0x20).unwrap();
            assert_eq!(size, encoded.len());
            assert_eq!(encoded_size(literal, 3).unwrap(), size);
            assert_eq!(encoded[0] & 0x20, 0x20);
            let decoded = decode(&mut &encoded[..], 3).unwrap();
            assert_eq!(decoded.as_slice(), literal);
        }
    }

    #[test]
    fn truncated_raw() {
        let mut encoded = vec![];
        encode(&mut encoded, &[0xff, 0xfe, 0xfd], 7, 0).unwrap();
        let mut short = &encoded[..2];
        assert_eq!(decode(&mut short, 7), Err(H3Error::Incomplete));
    }
}
