use std::cmp;

/// Read side of a byte source. Mirrors the usual chunked-buffer shape: a
/// `chunk()` is the current contiguous run, which may be shorter than
/// `remaining()` for segmented sources.
pub trait Buf {
    /// 获取剩余数量
    fn remaining(&self) -> usize;

    /// 获取当前数据的切片引用
    fn chunk(&self) -> &[u8];

    /// 消耗掉多少字节的数据, 做指针偏移
    fn advance(&mut self, n: usize);

    /// The contiguous run starting `off` bytes past the cursor. Segmented
    /// sources override this; for contiguous sources the default is exact.
    fn chunk_at(&self, off: usize) -> &[u8] {
        &self.chunk()[off..]
    }

    /// Random access relative to the cursor, without consuming.
    fn try_get(&self, index: usize) -> Option<u8> {
        self.chunk().get(index).copied()
    }

    /// 是否还有数据
    fn has_remaining(&self) -> bool {
        self.remaining() > 0
    }

    /// 获取当前的值, 但不做任何偏移
    fn peek(&self) -> Option<u8> {
        self.try_get(0)
    }

    /// 获取当前的值并将偏移值+1
    fn get_next(&mut self) -> Option<u8> {
        let val = self.peek()?;
        self.advance(1);
        Some(val)
    }

    /// 消耗所有的字节
    fn advance_all(&mut self) {
        self.advance(self.remaining());
    }

    /// Copies `dst.len()` bytes into `dst`, advancing the cursor. Iterates
    /// chunks so segmented sources work.
    ///
    /// # Panics
    ///
    /// This function panics if `self.remaining() < dst.len()`
    fn copy_to_slice(&mut self, dst: &mut [u8]) -> usize {
        assert!(self.remaining() >= dst.len());
        let mut off = 0;
        while off < dst.len() {
            let src = self.chunk();
            let n = cmp::min(src.len(), dst.len() - off);
            dst[off..off + n].copy_from_slice(&src[..n]);
            self.advance(n);
            off += n;
        }
        dst.len()
    }

    fn get_u8(&mut self) -> u8 {
        assert!(self.remaining() >= 1);
        let ret = self.chunk()[0];
        self.advance(1);
        ret
    }

    /// Gets an unsigned 32 bit integer in big-endian byte order.
    ///
    /// # Panics
    ///
    /// This function panics if there is not enough remaining data in `self`.
    fn get_u32(&mut self) -> u32 {
        let mut buf = [0; 4];
        self.copy_to_slice(&mut buf);
        u32::from_be_bytes(buf)
    }

    /// Gets an unsigned 64 bit integer in big-endian byte order.
    ///
    /// # Panics
    ///
    /// This function panics if there is not enough remaining data in `self`.
    fn get_u64(&mut self) -> u64 {
        let mut buf = [0; 8];
        self.copy_to_slice(&mut buf);
        u64::from_be_bytes(buf)
    }
}

impl Buf for &[u8] {
    #[inline]
    fn remaining(&self) -> usize {
        self.len()
    }

    #[inline]
    fn chunk(&self) -> &[u8] {
        self
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        *self = &self[n..];
    }
}

#[cfg(test)]
mod tests {
    use super::Buf;

    #[test]
    fn slice_buf() {
        let mut buf = &b"\x01\x02\x03\x04\x05\x06\x07\x08\x09"[..];
        assert_eq!(buf.peek(), Some(1));
        assert_eq!(buf.get_u8(), 1);
        assert_eq!(buf.get_u32(), 0x02030405);
        assert_eq!(buf.remaining(), 4);
        assert_eq!(buf.try_get(3), Some(9));
        buf.advance_all();
        assert!(!buf.has_remaining());
        assert_eq!(buf.get_next(), None);
    }
}
