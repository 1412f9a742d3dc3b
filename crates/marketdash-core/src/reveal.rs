//! One-shot reveal animation for cards entering the viewport.

use std::collections::BTreeSet;

use crate::dom::Document;

/// Fraction of a card that must be visible to count as intersecting
pub const REVEAL_THRESHOLD: f64 = 0.12;

/// Class added to a card once revealed
pub const REVEAL_CLASS: &str = "animate-fade-up";

/// Class marking every card
pub const CARD_CLASS: &str = "card-hover";

/// Section cards observed in addition to `CARD_CLASS` elements
pub const SECTION_CARDS: [&str; 3] = ["categoriesCard", "testimonialsCard", "freelancersCard"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry<'a> {
    pub target: &'a str,
    pub ratio: f64,
}

impl IntersectionEntry<'_> {
    pub fn is_intersecting(&self) -> bool {
        self.ratio >= REVEAL_THRESHOLD
    }
}

#[derive(Debug, Clone, Default)]
pub struct RevealObserver {
    observed: BTreeSet<String>,
}

impl RevealObserver {
    /// Observe every card present in `doc`.
    pub fn observe_cards(doc: &Document) -> Self {
        let mut observer = Self::default();
        for id in doc.ids_with_class(CARD_CLASS) {
            observer.observe(&id);
        }
        for id in SECTION_CARDS {
            if doc.contains(id) {
                observer.observe(id);
            }
        }
        observer
    }

    pub fn observe(&mut self, id: &str) {
        self.observed.insert(id.to_string());
    }

    pub fn is_observing(&self, id: &str) -> bool {
        self.observed.contains(id)
    }

    pub fn observed(&self) -> impl Iterator<Item = &str> {
        self.observed.iter().map(String::as_str)
    }

    /// Reveal intersecting cards and stop observing them. Returns the ids
    /// revealed by this call.
    pub fn handle(&mut self, doc: &mut Document, entries: &[IntersectionEntry<'_>]) -> Vec<String> {
        let mut revealed = Vec::new();
        for entry in entries.iter().filter(|e| e.is_intersecting()) {
            if !self.observed.remove(entry.target) {
                continue;
            }
            if doc.add_class(entry.target, REVEAL_CLASS).is_ok() {
                revealed.push(entry.target.to_string());
            }
        }
        revealed
    }

    /// Reveal every observed card, as when the whole page is in view.
    pub fn reveal_all(&mut self, doc: &mut Document) -> Vec<String> {
        let ids: Vec<String> = self.observed.iter().cloned().collect();
        let entries: Vec<IntersectionEntry<'_>> = ids
            .iter()
            .map(|id| IntersectionEntry { target: id, ratio: 1.0 })
            .collect();
        self.handle(doc, &entries)
    }
}
