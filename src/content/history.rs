use std::collections::{HashMap, HashSet};

use super::ContentKind;

/// Per-session dedup memory. One seen-set per content kind, plus the most
/// recently returned item so a reset never hands back the same item twice
/// in a row.
#[derive(Debug, Default)]
pub struct History {
    seen: HashMap<ContentKind, HashSet<String>>,
    last: HashMap<ContentKind, String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, kind: ContentKind, item: &str) -> bool {
        self.seen
            .get(&kind)
            .is_some_and(|set| set.contains(item))
    }

    /// Record an item as seen and remember it as the latest return.
    pub fn record(&mut self, kind: ContentKind, item: &str) {
        self.seen
            .entry(kind)
            .or_default()
            .insert(item.to_string());
        self.last.insert(kind, item.to_string());
    }

    /// Forget the seen-set for one kind. The latest-return marker survives
    /// so the next draw can avoid an immediate repeat.
    pub fn clear(&mut self, kind: ContentKind) {
        if let Some(set) = self.seen.get_mut(&kind) {
            set.clear();
        }
    }

    pub fn last(&self, kind: ContentKind) -> Option<&str> {
        self.last.get(&kind).map(String::as_str)
    }

    pub fn seen_count(&self, kind: ContentKind) -> usize {
        self.seen.get(&kind).map_or(0, HashSet::len)
    }
}
