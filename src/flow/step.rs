// SPDX-License-Identifier: MPL-2.0
//! The four linear stages of the greeting.

/// A stage of the greeting flow.
///
/// Transitions only ever move by one stage; both ends clamp silently.
///
/// # Example
///
/// ```
/// use iced_greeting::flow::Step;
///
/// assert_eq!(Step::Entry.next(), Step::Greeting);
/// assert_eq!(Step::Entry.previous(), Step::Entry);
/// assert_eq!(Step::Celebration.next(), Step::Celebration);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Step {
    /// Tap-the-heart screen.
    #[default]
    Entry,
    /// First message card.
    Greeting,
    /// Sweet treats card.
    Treats,
    /// Final card with carousel, song and confetti.
    Celebration,
}

impl Step {
    /// All steps in flow order.
    pub const ALL: [Step; 4] = [
        Step::Entry,
        Step::Greeting,
        Step::Treats,
        Step::Celebration,
    ];

    /// Position of the step in the flow (0..=3).
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Step::Entry => 0,
            Step::Greeting => 1,
            Step::Treats => 2,
            Step::Celebration => 3,
        }
    }

    /// Step at the given position, if any.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The following step, or `self` on the final step.
    #[must_use]
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1).unwrap_or(self)
    }

    /// The preceding step, or `self` on the first step.
    #[must_use]
    pub fn previous(self) -> Self {
        self.index()
            .checked_sub(1)
            .and_then(Self::from_index)
            .unwrap_or(self)
    }

    #[must_use]
    pub fn is_final(self) -> bool {
        self == Step::Celebration
    }
}
