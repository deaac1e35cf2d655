use super::transactions::Item;

/// Discovered itemsets in mining order, stored as flat arrays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequentItemsets {
    items: Vec<Item>,
    offsets: Vec<(usize, usize)>,
    supports: Vec<usize>,
}

/// Itemsets of a single size, as handed out to array-shaped consumers.
#[derive(Debug, Clone)]
pub struct FrequentLevel {
    pub(crate) storage: FrequentItemsets,
    pub itemset_size: usize,
}

impl FrequentItemsets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `items` in ascending order and returns its position.
    pub fn add_itemset(&mut self, items: &[Item], support: usize) -> usize {
        let start = self.items.len();
        self.items.extend_from_slice(items);
        self.items[start..].sort_unstable();

        // Collapse repeats within the new itemset only.
        let mut end = start;
        for idx in start..self.items.len() {
            if end == start || self.items[end - 1] != self.items[idx] {
                self.items[end] = self.items[idx];
                end += 1;
            }
        }
        self.items.truncate(end);

        self.offsets.push((start, end - start));
        self.supports.push(support);

        self.offsets.len() - 1
    }

    pub fn get_itemset(&self, idx: usize) -> &[Item] {
        let (start, length) = self.offsets[idx];
        &self.items[start..start + length]
    }

    pub fn support(&self, idx: usize) -> usize {
        self.supports[idx]
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[Item], usize)> + '_ {
        (0..self.len()).map(move |idx| (self.get_itemset(idx), self.supports[idx]))
    }

    /// Support of an itemset given in any order, if it was discovered.
    pub fn support_of(&self, itemset: &[Item]) -> Option<usize> {
        let mut key = itemset.to_vec();
        key.sort_unstable();
        key.dedup();
        self.iter()
            .find(|(items, _)| *items == key.as_slice())
            .map(|(_, support)| support)
    }

    /// Appends `other` after the itemsets already stored.
    pub fn append(&mut self, other: FrequentItemsets) {
        let shift = self.items.len();
        self.items.extend(other.items);
        self.offsets
            .extend(other.offsets.into_iter().map(|(start, len)| (start + shift, len)));
        self.supports.extend(other.supports);
    }

    /// Groups the itemsets by size; index `k` holds the itemsets of size `k + 1`.
    pub fn levels(&self) -> Vec<FrequentLevel> {
        let mut levels: Vec<FrequentLevel> = Vec::new();
        for (items, support) in self.iter() {
            while levels.len() < items.len() {
                levels.push(FrequentLevel::new(levels.len() + 1));
            }
            levels[items.len() - 1].add_itemset(items, support);
        }
        levels
    }
}

impl FrequentLevel {
    pub fn new(itemset_size: usize) -> Self {
        Self {
            storage: FrequentItemsets::new(),
            itemset_size,
        }
    }

    pub fn add_itemset(&mut self, items: &[Item], support: usize) -> usize {
        debug_assert_eq!(items.len(), self.itemset_size);
        self.storage.add_itemset(items, support)
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn get_itemset(&self, idx: usize) -> &[Item] {
        self.storage.get_itemset(idx)
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = &[Item]> {
        (0..self.storage.len()).map(move |idx| self.get_itemset(idx))
    }
}
