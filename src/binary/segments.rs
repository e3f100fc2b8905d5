use std::collections::VecDeque;
use std::fmt::Debug;
use std::ops::{Deref, DerefMut};

use super::{Binary, Buf};

/// An ordered run of [`Binary`] segments read as one logical byte stream.
///
/// Consumed bytes stay buffered (so a parse can be rewound with [`undo`])
/// until [`discard`] drops fully-consumed prefix segments.
///
/// [`undo`]: BinaryQueue::undo
/// [`discard`]: BinaryQueue::discard
pub struct BinaryQueue {
    segments: VecDeque<Binary>,
    // 游标值, 相对当前首段的偏移
    cursor: usize,
    // 已丢弃的字节数
    discarded: usize,
}

impl BinaryQueue {
    pub fn new() -> BinaryQueue {
        BinaryQueue {
            segments: VecDeque::new(),
            cursor: 0,
            discarded: 0,
        }
    }

    /// Bytes left after the cursor.
    pub fn size(&self) -> usize {
        let total: usize = self.segments.iter().map(|s| s.len()).sum();
        total - self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Total bytes consumed over the queue's lifetime.
    pub fn consumed(&self) -> usize {
        self.discarded + self.cursor
    }

    pub fn push(&mut self, buffer: Binary) {
        if !buffer.is_empty() {
            self.segments.push_back(buffer);
        }
    }

    pub fn consume(&mut self, n: usize) {
        assert!(n <= self.size(), "consume out of bounds");
        self.cursor += n;
    }

    /// Rewinds the cursor by `n` bytes. Only bytes not yet discarded can be
    /// rewound over.
    pub fn undo(&mut self, n: usize) {
        assert!(n <= self.cursor, "undo past discarded prefix");
        self.cursor -= n;
    }

    /// Drops prefix segments that lie entirely behind the cursor.
    pub fn discard(&mut self) {
        while let Some(first) = self.segments.front() {
            if first.len() > self.cursor {
                break;
            }
            self.cursor -= first.len();
            self.discarded += first.len();
            self.segments.pop_front();
        }
    }

    /// Locates the segment holding the byte `off` past the cursor.
    fn position(&self, off: usize) -> Option<(usize, usize)> {
        let mut rel = self.cursor + off;
        for (idx, segment) in self.segments.iter().enumerate() {
            if rel < segment.len() {
                return Some((idx, rel));
            }
            rel -= segment.len();
        }
        None
    }

    /// Materializes the next `n` bytes as one contiguous buffer and consumes
    /// them. Stays O(1) while the run lies within a single segment; only a
    /// run spanning segments allocates.
    pub fn slice(&mut self, n: usize) -> Binary {
        assert!(n <= self.size(), "slice out of bounds");
        if n == 0 {
            return Binary::new();
        }
        let (idx, off) = match self.position(0) {
            Some(found) => found,
            None => unreachable!("non-empty queue always has a position"),
        };
        let sliced = if off + n <= self.segments[idx].len() {
            self.segments[idx].share_window(off, n)
        } else {
            let mut flat = Vec::with_capacity(n);
            let mut left = n;
            let mut idx = idx;
            let mut off = off;
            while left > 0 {
                let chunk = &self.segments[idx].as_slice()[off..];
                let take = chunk.len().min(left);
                flat.extend_from_slice(&chunk[..take]);
                left -= take;
                idx += 1;
                off = 0;
            }
            Binary::from(flat)
        };
        self.consume(n);
        sliced
    }

    /// Copies the next `n` bytes without consuming them.
    pub fn copy(&self, n: usize) -> Binary {
        assert!(n <= self.size(), "copy out of bounds");
        let mut flat = Vec::with_capacity(n);
        for i in 0..n {
            match self.try_get(i) {
                Some(byte) => flat.push(byte),
                None => unreachable!(),
            }
        }
        Binary::from(flat)
    }
}

impl Buf for BinaryQueue {
    fn remaining(&self) -> usize {
        self.size()
    }

    fn chunk(&self) -> &[u8] {
        self.chunk_at(0)
    }

    fn chunk_at(&self, off: usize) -> &[u8] {
        match self.position(off) {
            Some((idx, rel)) => &self.segments[idx].as_slice()[rel..],
            None => &[],
        }
    }

    fn try_get(&self, index: usize) -> Option<u8> {
        let (idx, rel) = self.position(index)?;
        Some(self.segments[idx].as_slice()[rel])
    }

    fn advance(&mut self, n: usize) {
        self.consume(n);
    }
}

impl Default for BinaryQueue {
    fn default() -> BinaryQueue {
        BinaryQueue::new()
    }
}

impl Debug for BinaryQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinaryQueue")
            .field("segments", &self.segments.len())
            .field("cursor", &self.cursor)
            .field("discarded", &self.discarded)
            .field("size", &self.size())
            .finish()
    }
}

/// Scoped cursor checkpoint: everything consumed through the anchor is
/// rewound on drop unless [`release`] was called. Holding the anchor borrows
/// the queue, so the checkpointed prefix cannot be discarded underneath it.
///
/// [`release`]: Anchor::release
pub struct Anchor<'a> {
    queue: &'a mut BinaryQueue,
    start: usize,
    released: bool,
}

impl<'a> Anchor<'a> {
    pub fn new(queue: &'a mut BinaryQueue) -> Anchor<'a> {
        let start = queue.consumed();
        Anchor {
            queue,
            start,
            released: false,
        }
    }

    /// Commits everything consumed since the anchor was taken.
    pub fn release(&mut self) {
        self.released = true;
    }
}

impl Deref for Anchor<'_> {
    type Target = BinaryQueue;

    fn deref(&self) -> &BinaryQueue {
        self.queue
    }
}

impl DerefMut for Anchor<'_> {
    fn deref_mut(&mut self) -> &mut BinaryQueue {
        self.queue
    }
}

impl Drop for Anchor<'_> {
    fn drop(&mut self) {
        if !self.released {
            let n = self.queue.consumed() - self.start;
            self.queue.undo(n);
        }
    }
}

/// Scoped memory bound: drops fully-consumed prefix segments when it goes
/// out of scope.
pub struct Discarder<'a> {
    queue: &'a mut BinaryQueue,
}

impl<'a> Discarder<'a> {
    pub fn new(queue: &'a mut BinaryQueue) -> Discarder<'a> {
        Discarder { queue }
    }
}

impl Deref for Discarder<'_> {
    type Target = BinaryQueue;

    fn deref(&self) -> &BinaryQueue {
        self.queue
    }
}

impl DerefMut for Discarder<'_> {
    fn deref_mut(&mut self) -> &mut BinaryQueue {
        self.queue
    }
}

impl Drop for Discarder<'_> {
    fn drop(&mut self) {
        self.queue.discard();
    }
}

/// A read-only cursor over any [`Buf`] source. Shares the source's bytes but
/// tracks its own consumption, leaving the source untouched; callers commit
/// by advancing the source with [`consumed`].
///
/// [`consumed`]: Lookahead::consumed
pub struct Lookahead<'a, B: Buf> {
    src: &'a B,
    pos: usize,
}

impl<'a, B: Buf> Lookahead<'a, B> {
    pub fn new(src: &'a B) -> Lookahead<'a, B> {
        Lookahead { src, pos: 0 }
    }

    pub fn consumed(&self) -> usize {
        self.pos
    }
}

impl<B: Buf> Buf for Lookahead<'_, B> {
    fn remaining(&self) -> usize {
        self.src.remaining() - self.pos
    }

    fn chunk(&self) -> &[u8] {
        self.src.chunk_at(self.pos)
    }

    fn chunk_at(&self, off: usize) -> &[u8] {
        self.src.chunk_at(self.pos + off)
    }

    fn try_get(&self, index: usize) -> Option<u8> {
        self.src.try_get(self.pos + index)
    }

    fn advance(&mut self, n: usize) {
        assert!(n <= self.remaining(), "advance out of bounds");
        self.pos += n;
    }
}

#[cfg(test)]
mod tests {
    use super::{Anchor, BinaryQueue, Discarder, Lookahead};
    use crate::{Binary, Buf};

    fn queue(parts: &[&[u8]]) -> BinaryQueue {
        let mut queue = BinaryQueue::new();
        for part in parts {
            queue.push(Binary::from(*part));
        }
        queue
    }

    #[test]
    fn index_across_segments() {
        let queue = queue(&[b"ab", b"cd", b"ef"]);
        assert_eq!(queue.size(), 6);
        assert_eq!(queue.try_get(0), Some(b'a'));
        assert_eq!(queue.try_get(3), Some(b'd'));
        assert_eq!(queue.try_get(5), Some(b'f'));
        assert_eq!(queue.try_get(6), None);
    }

    #[test]
    fn consume_undo() {
        let mut queue = queue(&[b"abc", b"def"]);
        queue.consume(4);
        assert_eq!(queue.peek(), Some(b'e'));
        queue.undo(2);
        assert_eq!(queue.peek(), Some(b'c'));
        assert_eq!(queue.consumed(), 2);
    }

    #[test]
    fn slice_within_and_across() {
        let mut queue = queue(&[b"abcdef", b"ghi"]);
        let copied = queue.copy(4);
        assert_eq!(copied.as_slice(), b"abcd");
        assert_eq!(queue.consumed(), 0);
        let head = queue.slice(3);
        assert_eq!(head.as_slice(), b"abc");
        let spanning = queue.slice(5);
        assert_eq!(spanning.as_slice(), b"defgh");
        assert_eq!(queue.size(), 1);
    }

    #[test]
    fn discard_keeps_cursor_stable() {
        let mut queue = queue(&[b"abc", b"def"]);
        queue.consume(4);
        queue.discard();
        assert_eq!(queue.peek(), Some(b'e'));
        assert_eq!(queue.consumed(), 4);
        assert_eq!(queue.size(), 2);
    }

    #[test]
    fn anchor_rewinds_unless_released() {
        let mut queue = queue(&[b"abcdef"]);
        {
            let mut anchor = Anchor::new(&mut queue);
            anchor.consume(4);
        }
        assert_eq!(queue.consumed(), 0);
        {
            let mut anchor = Anchor::new(&mut queue);
            anchor.consume(4);
            anchor.release();
        }
        assert_eq!(queue.consumed(), 4);
    }

    #[test]
    fn discarder_drops_prefix() {
        let mut queue = queue(&[b"abc", b"def"]);
        {
            let mut guard = Discarder::new(&mut queue);
            guard.consume(3);
        }
        assert_eq!(queue.size(), 3);
        assert_eq!(queue.consumed(), 3);
    }

    #[test]
    fn lookahead_leaves_source() {
        let queue = queue(&[b"ab", b"cd"]);
        let mut lookahead = Lookahead::new(&queue);
        assert_eq!(lookahead.get_u8(), b'a');
        assert_eq!(lookahead.get_u8(), b'b');
        assert_eq!(lookahead.get_u8(), b'c');
        assert_eq!(lookahead.consumed(), 3);
        assert_eq!(queue.consumed(), 0);
    }
}
