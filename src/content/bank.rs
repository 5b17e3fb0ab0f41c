use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::core::{Category, TextCollection};
use crate::error::ContentError;

/// Shuffled copy of one collection plus the index of the next text to serve.
///
/// `cursor` stays within `0..=order.len()`; reaching the end means the pass is
/// exhausted and the next draw reshuffles first.
#[derive(Debug, Clone)]
pub struct DrawBank {
    source: TextCollection,
    order: Vec<String>,
    cursor: usize,
}

impl DrawBank {
    fn new<R: Rng + ?Sized>(source: TextCollection, rng: &mut R) -> Self {
        let mut bank = Self {
            order: Vec::with_capacity(source.len()),
            source,
            cursor: 0,
        };
        bank.reshuffle(rng);
        bank
    }

    fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.order.clear();
        self.order.extend(self.source.texts.iter().cloned());
        self.order.shuffle(rng);
        self.cursor = 0;
    }

    fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> String {
        if self.is_exhausted() {
            tracing::debug!(bank = %self.source.name, "bank exhausted, reshuffling");
            self.reshuffle(rng);
        }
        let text = self.order[self.cursor].clone();
        self.cursor += 1;
        text
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.order.len()
    }

    /// Texts left in the current pass
    pub fn remaining(&self) -> usize {
        self.order.len() - self.cursor
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// One draw bank per category, all fed from the same random source
#[derive(Debug)]
pub struct ContentBank<R = StdRng> {
    banks: [DrawBank; 3],
    rng: R,
}

impl ContentBank<StdRng> {
    /// Embedded texts with an entropy-seeded shuffle
    pub fn new() -> Result<Self, ContentError> {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Embedded texts with a reproducible shuffle
    pub fn seeded(seed: u64) -> Result<Self, ContentError> {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ContentBank<R> {
    pub fn with_rng(rng: R) -> Result<Self, ContentError> {
        let collections = [
            TextCollection::embedded(Category::Quotes)?,
            TextCollection::embedded(Category::Paragraphs)?,
            TextCollection::embedded(Category::Code)?,
        ];
        Self::from_collections(collections, rng)
    }

    /// Build from explicit collections, indexed in `Category::ALL` order.
    /// A collection that is empty or sits in the wrong slot is rejected here so
    /// that `draw` cannot fail.
    pub fn from_collections(collections: [TextCollection; 3], mut rng: R) -> Result<Self, ContentError> {
        for (category, collection) in Category::ALL.iter().zip(collections.iter()) {
            collection.validate(*category)?;
        }

        let banks = collections.map(|collection| DrawBank::new(collection, &mut rng));
        Ok(Self { banks, rng })
    }

    /// Next text of `category`'s current pass, reshuffling once the pass is used up
    pub fn draw(&mut self, category: Category) -> String {
        let bank = &mut self.banks[category.index()];
        bank.draw(&mut self.rng)
    }

    pub fn remaining(&self, category: Category) -> usize {
        self.banks[category.index()].remaining()
    }

    pub fn bank(&self, category: Category) -> &DrawBank {
        &self.banks[category.index()]
    }
}
