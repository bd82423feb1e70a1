// SPDX-License-Identifier: MPL-2.0
//! Photo carousel position.

/// Current slot of the photo carousel.
///
/// The index always wraps modulo the gallery size in both directions, so it
/// can never leave `[0, len)`.
///
/// # Example
///
/// ```
/// use iced_greeting::flow::Carousel;
///
/// let mut carousel = Carousel::new(4);
/// carousel.previous();
/// assert_eq!(carousel.index(), 3);
/// carousel.next();
/// assert_eq!(carousel.index(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// Creates a carousel over `len` slots. A zero length is treated as one
    /// slot so the index arithmetic stays total.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: len.max(1),
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of slots (always at least one).
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.len
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    pub fn previous(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Timer-driven advance; equivalent to [`Carousel::next`].
    pub fn set_index(&mut self) {
        self.next();
    }
}
