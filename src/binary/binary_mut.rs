use std::fmt::Debug;
use std::ops::Deref;

use super::{Binary, Buf, BufMut};

/// 二进制的封装, 可写可读
///
/// Encoders write into one of these and `freeze` it into an immutable
/// [`Binary`] once the wire bytes are complete.
pub struct BinaryMut {
    vec: Vec<u8>,
    // 游标值, 可以得出当前指向的位置
    cursor: usize,
}

impl BinaryMut {
    #[inline]
    pub fn new() -> BinaryMut {
        BinaryMut::with_capacity(0)
    }

    #[inline]
    pub fn with_capacity(n: usize) -> BinaryMut {
        BinaryMut {
            vec: Vec::with_capacity(n),
            cursor: 0,
        }
    }

    /// 判断对象的长度
    #[inline]
    pub fn len(&self) -> usize {
        self.vec.len() - self.cursor
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.vec[self.cursor..]
    }

    pub fn put<B: Buf>(&mut self, mut src: B) {
        while src.has_remaining() {
            let chunk = src.chunk();
            let n = chunk.len();
            self.vec.extend_from_slice(chunk);
            src.advance(n);
        }
    }

    /// 将当前的数据转成不可写的对象Binary
    ///
    /// # Examples
    ///
    /// ```
    /// use h3parse::{Binary, BinaryMut, BufMut};
    ///
    /// let mut buf = BinaryMut::new();
    /// buf.put_slice(b"aaabbb");
    /// let bin: Binary = buf.freeze();
    /// assert_eq!(b"aaabbb", &bin[..]);
    /// ```
    #[inline]
    pub fn freeze(mut self) -> Binary {
        if self.cursor > 0 {
            self.vec.drain(..self.cursor);
        }
        Binary::from(self.vec)
    }
}

impl Buf for BinaryMut {
    fn remaining(&self) -> usize {
        self.len()
    }

    fn chunk(&self) -> &[u8] {
        self.as_slice()
    }

    fn advance(&mut self, n: usize) {
        assert!(n <= self.len(), "advance out of bounds");
        self.cursor += n;
    }
}

impl BufMut for BinaryMut {
    #[inline]
    fn put_slice(&mut self, src: &[u8]) -> usize {
        self.vec.extend_from_slice(src);
        src.len()
    }
}

impl Deref for BinaryMut {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl Default for BinaryMut {
    fn default() -> BinaryMut {
        BinaryMut::new()
    }
}

impl Debug for BinaryMut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinaryMut")
            .field("cursor", &self.cursor)
            .field("bytes", &self.as_slice())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{BinaryMut, Buf, BufMut};

    #[test]
    fn write_read_freeze() {
        let mut buf = BinaryMut::new();
        buf.put_u8(0x40);
        buf.put_slice(b"abc");
        assert_eq!(buf.get_u8(), 0x40);
        assert_eq!(buf.len(), 3);
        let frozen = buf.freeze();
        assert_eq!(frozen.as_slice(), b"abc");
    }
}
