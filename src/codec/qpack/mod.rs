//! Static-table-only QPACK. Header blocks are encoded against the fixed
//! table; no dynamic insertions are ever emitted or accepted, so every block
//! carries a required insert count and base of zero.

pub mod interop;
mod static_table;

pub use static_table::STATIC_TABLE;

use super::{literal, prefix_int};
use crate::{Buf, BufMut, H3Error, H3Result, Header};

// First-byte patterns of the field line representations.
const INDEXED: u8 = 0x80;
const INDEXED_STATIC: u8 = 0x40;
const NAME_REF: u8 = 0x40;
const NAME_REF_STATIC: u8 = 0x10;
const LITERAL: u8 = 0x20;

/// Encodes one header block: the two-byte zero prefix, then one
/// representation per header. Prefers a full static-table match, then a name
/// match, then a fully literal field.
pub fn encode_block<B: BufMut>(dst: &mut B, headers: &[Header]) -> H3Result<usize> {
    let mut size = dst.put_u8(0);
    size += dst.put_u8(0);
    for header in headers {
        size += encode_header(dst, header)?;
    }
    Ok(size)
}

fn encode_header<B: BufMut>(dst: &mut B, header: &Header) -> H3Result<usize> {
    if !Header::name_is_lowercase(header.name()) {
        return Err(H3Error::MalformedHeader);
    }
    match static_table::find(header.name(), header.value()) {
        Some((index, true)) => {
            log::trace!("encoding header {:?} as static index {}", header, index);
            prefix_int::encode(dst, index, 6, INDEXED | INDEXED_STATIC)
        }
        Some((index, false)) => {
            log::trace!("encoding header {:?} with static name {}", header, index);
            let mut size = prefix_int::encode(dst, index, 4, NAME_REF | NAME_REF_STATIC)?;
            size += literal::encode(dst, header.value(), 7, 0)?;
            Ok(size)
        }
        None => {
            log::trace!("encoding header {:?} as literals", header);
            let mut size = literal::encode(dst, header.name(), 3, LITERAL)?;
            size += literal::encode(dst, header.value(), 7, 0)?;
            Ok(size)
        }
    }
}

/// Decodes a complete header block. The stream layer slices exactly the
/// advertised block length out of its buffers first, so a block that runs
/// out of bytes mid-field is lying about its length and fails for good.
pub fn decode_block<B: Buf>(src: &mut B) -> H3Result<Vec<Header>> {
    match decode_block_inner(src) {
        Err(H3Error::Incomplete) => Err(H3Error::QpackDecompressionFailed),
        result => result,
    }
}

fn decode_block_inner<B: Buf>(src: &mut B) -> H3Result<Vec<Header>> {
    let (required_insert_count, _) = prefix_int::decode(src, 8)?;
    if required_insert_count != 0 {
        // dynamic table references cannot be satisfied here
        return Err(H3Error::QpackDecompressionFailed);
    }
    let (base, sign) = prefix_int::decode(src, 7)?;
    if base != 0 || sign & 0x80 != 0 {
        return Err(H3Error::QpackDecompressionFailed);
    }

    let mut headers = vec![];
    while src.has_remaining() {
        headers.push(decode_header(src)?);
    }
    Ok(headers)
}

fn decode_header<B: Buf>(src: &mut B) -> H3Result<Header> {
    let first = match src.peek() {
        Some(first) => first,
        None => return Err(H3Error::Incomplete),
    };

    let header = if first & INDEXED != 0 {
        if first & INDEXED_STATIC == 0 {
            return Err(H3Error::QpackDecompressionFailed);
        }
        let (index, _) = prefix_int::decode(src, 6)?;
        let (name, value) = match static_table::get(index) {
            Some(entry) => entry,
            None => return Err(H3Error::QpackDecompressionFailed),
        };
        Header::new(name.into(), value.into())
    } else if first & NAME_REF != 0 {
        // the never-index bit changes nothing for a proxy-less decoder
        if first & NAME_REF_STATIC == 0 {
            return Err(H3Error::QpackDecompressionFailed);
        }
        let (index, _) = prefix_int::decode(src, 4)?;
        let (name, _) = match static_table::get(index) {
            Some(entry) => entry,
            None => return Err(H3Error::QpackDecompressionFailed),
        };
        let value = literal::decode(src, 7)?;
        Header::new(name.into(), value)
    } else if first & LITERAL != 0 {
        let name = literal::decode(src, 3)?;
        let value = literal::decode(src, 7)?;
        Header::new(name, value)
    } else {
        // post-base representations need a dynamic table
        return Err(H3Error::QpackDecompressionFailed);
    };

    if !Header::name_is_lowercase(header.name()) {
        return Err(H3Error::MalformedHeader);
    }
    Ok(header)
}

#[cfg(test)]
mod tests {
    use super::{decode_block, encode_block};
    use crate::{H3Error, Header};

    fn roundtrip(headers: &[Header]) -> Vec<u8> {
        let mut encoded = vec![];
        let size = encode_block(&mut encoded, headers).unwrap();
        assert_eq!(size, encoded.len());
        let decoded = decode_block(&mut &encoded[..]).unwrap();
        assert_eq!(decoded, headers);
        encoded
    }

    #[test]
    fn request_block() {
        roundtrip(&[
            (":method", "GET").into(),
            (":scheme", "https").into(),
            (":authority", "www.example.com").into(),
            (":path", "/index.html").into(),
            ("user-agent", "h3parse").into(),
            ("x-custom", "binary\x00value").into(),
        ]);
    }

    #[test]
    fn response_block() {
        roundtrip(&[
            (":status", "200").into(),
            ("content-type", "text/html; charset=utf-8").into(),
            ("content-length", "512").into(),
        ]);
    }

    #[test]
    fn representation_choice() {
        // exact match => single indexed byte after the two-byte prefix
        let encoded = roundtrip(&[(":method", "GET").into()]);
        assert_eq!(encoded.len(), 3);
        assert_eq!(encoded[2] & 0xc0, 0xc0);
        // name-only match => name reference
        let encoded = roundtrip(&[(":method", "TRACE").into()]);
        assert_eq!(encoded[2] & 0xf0, 0x50);
        // no match => literal name
        let encoded = roundtrip(&[("x-custom", "1").into()]);
        assert_eq!(encoded[2] & 0xe0, 0x20);
    }

    #[test]
    fn uppercase_rejected_on_encode() {
        let mut dst = vec![];
        assert_eq!(
            encode_block(&mut dst, &[("X-Custom", "1").into()]),
            Err(H3Error::MalformedHeader)
        );
    }

    #[test]
    fn uppercase_rejected_on_decode() {
        let mut encoded = vec![0u8, 0];
        super::literal::encode(&mut encoded, b"X-Custom", 3, super::LITERAL).unwrap();
        super::literal::encode(&mut encoded, b"1", 7, 0).unwrap();
        assert_eq!(
            decode_block(&mut &encoded[..]),
            Err(H3Error::MalformedHeader)
        );
    }

    #[test]
    fn nonzero_insert_count_rejected() {
        let encoded = [1u8, 0, 0xc0 | 17];
        assert_eq!(
            decode_block(&mut &encoded[..]),
            Err(H3Error::QpackDecompressionFailed)
        );
    }

    #[test]
    fn dynamic_representation_rejected() {
        // indexed without the static bit
        let encoded = [0u8, 0, 0x81];
        assert_eq!(
            decode_block(&mut &encoded[..]),
            Err(H3Error::QpackDecompressionFailed)
        );
        // post-base indexed
        let encoded = [0u8, 0, 0x10];
        assert_eq!(
            decode_block(&mut &encoded[..]),
            Err(H3Error::QpackDecompressionFailed)
        );
    }

    #[test]
    fn ordering_preserved() {
        let headers: Vec<Header> = (0..32)
            .map(|i| {
                Header::new(
                    format!("x-field-{}", i).as_str().into(),
                    format!("{}", i).as_str().into(),
                )
            })
            .collect();
        roundtrip(&headers);
    }
}
