use std::collections::HashMap;

pub type ItemId = usize;
pub type Pattern = Vec<ItemId>;
pub type Transaction = Vec<ItemId>;

pub type SupportCount = usize;
pub type PatternCounts = HashMap<Pattern, SupportCount>;

/// One `PatternCounts` per pattern length, index 0 holding length-1 patterns.
pub type FrequentPatterns = Vec<PatternCounts>;

pub type Inventory<T> = Vec<T>;
pub type ReverseLookup<T> = HashMap<T, ItemId>;

/// Frequent patterns of one length, expressed in the caller's item type.
pub type FrequencyMap<T> = HashMap<Vec<T>, SupportCount>;
