use serde::Serialize;

/// Result of [`Walker::walk_many`](super::Walker::walk_many).
///
/// Steps that matched before a failure keep their results; the cursor stays
/// after the last successful step.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct WalkMany<'s> {
    /// Matched text of each successful step, in order.
    pub matches: Vec<&'s str>,
    /// Index of the first step that did not match.
    pub failed_at: Option<usize>,
}

impl<'s> WalkMany<'s> {
    /// Every step matched.
    pub fn is_complete(&self) -> bool {
        self.failed_at.is_none()
    }

    /// Matched text of step `index`, if that step ran and matched.
    pub fn get(&self, index: usize) -> Option<&'s str> {
        self.matches.get(index).copied()
    }

    /// All matches, or `None` if some step failed.
    pub fn into_complete(self) -> Option<Vec<&'s str>> {
        self.is_complete().then_some(self.matches)
    }
}

/// Result of [`Walker::walk_until`](super::Walker::walk_until).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct WalkUntil<'s> {
    /// Text between the starting cursor and the anchor.
    pub skipped: &'s str,
    /// Text matched by the anchor pattern.
    pub anchor: &'s str,
    /// Byte offset where the anchor match starts.
    pub anchor_start: usize,
}

impl WalkUntil<'_> {
    /// Byte offset just past the anchor, where the cursor now sits.
    pub fn end(&self) -> usize {
        self.anchor_start + self.anchor.len()
    }
}
