use std::collections::HashMap;
use std::hash::Hash;

use crate::{
    config::SearchOptions,
    error::{GspError, GspResult},
    sequences::search::generate_frequent_sequences,
    types::{FrequencyMap, FrequentPatterns, Inventory, ItemId, ReverseLookup, Transaction},
};

const APPROX_NUM_UNIQUE_ITEMS: usize = 1024; // arbitrary

/// Frequent sequential pattern miner over a fixed collection of transactions.
///
/// Transactions, vocabulary and the longest transaction length are derived
/// once at construction and never change. Each call to [`Gsp::search`]
/// starts from scratch, so repeated calls with the same options return equal
/// results. A single instance is meant to be driven by one caller at a time;
/// parallelism happens inside a search.
#[derive(Debug, Clone)]
pub struct Gsp<T> {
    inventory: Inventory<T>,
    transactions: Vec<Transaction>,
    max_size: usize,
}

impl<T> Gsp<T>
where
    T: Eq + Hash + Clone,
{
    /// Encode `raw_transactions`, assigning item ids in order of first appearance.
    pub fn new<R, I>(raw_transactions: R) -> GspResult<Self>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        let mut reverse_lookup: ReverseLookup<T> = HashMap::with_capacity(APPROX_NUM_UNIQUE_ITEMS);
        let mut inventory: Inventory<T> = Vec::with_capacity(APPROX_NUM_UNIQUE_ITEMS);

        let transactions: Vec<Transaction> = raw_transactions
            .into_iter()
            .map(|raw_transaction| {
                raw_transaction
                    .into_iter()
                    .map(|item| match reverse_lookup.get(&item) {
                        Some(&item_id) => item_id,
                        None => {
                            let item_id: ItemId = inventory.len();
                            reverse_lookup.insert(item.clone(), item_id);
                            inventory.push(item);
                            item_id
                        }
                    })
                    .collect()
            })
            .collect();

        if transactions.is_empty() {
            return Err(GspError::EmptyTransactions);
        }

        let max_size = transactions.iter().map(Vec::len).max().unwrap_or(0);
        inventory.shrink_to_fit();

        Ok(Self {
            inventory,
            transactions,
            max_size,
        })
    }

    /// Frequent patterns supported by at least `min_support` transactions,
    /// one map per pattern length starting at length 1.
    ///
    /// Only a trailing empty level is dropped. When the search stops because
    /// patterns reached the length of the longest transaction, that last
    /// non-empty level is still returned: `[[1]]` with `min_support` 1 yields
    /// `[{[1]: 1}]`, not an empty list.
    pub fn search(&self, min_support: usize) -> GspResult<Vec<FrequencyMap<T>>> {
        self.search_with(&SearchOptions::count(min_support))
    }

    pub fn search_with(&self, options: &SearchOptions) -> GspResult<Vec<FrequencyMap<T>>> {
        let levels = generate_frequent_sequences(
            &self.transactions,
            self.inventory.len(),
            self.max_size,
            options,
        )?;
        Ok(self.decode(levels))
    }

    /// Distinct items, in order of first appearance.
    pub fn vocabulary(&self) -> &[T] {
        &self.inventory
    }

    /// Length of the longest transaction.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn num_transactions(&self) -> usize {
        self.transactions.len()
    }

    fn decode(&self, levels: FrequentPatterns) -> Vec<FrequencyMap<T>> {
        levels
            .into_iter()
            .map(|level| {
                level
                    .into_iter()
                    .map(|(pattern, count)| {
                        let items = pattern
                            .iter()
                            .map(|&item_id| self.inventory[item_id].clone())
                            .collect();
                        (items, count)
                    })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;

    const A: &str = "Item A";
    const B: &str = "Item B";
    const C: &str = "Item C";

    #[test]
    fn vocabulary_in_order_of_first_appearance() {
        let gsp = Gsp::new(vec![vec![C, A], vec![A, B, C, B]]).unwrap();

        assert_eq!(gsp.vocabulary(), &[C, A, B]);
        assert_eq!(gsp.max_size(), 4);
        assert_eq!(gsp.num_transactions(), 2);
        assert_eq!(gsp.transactions, vec![vec![0, 1], vec![1, 2, 0, 2]]);
    }

    #[test]
    fn empty_collection_is_rejected() {
        let result = Gsp::<u32>::new(Vec::<Vec<u32>>::new());
        assert!(matches!(result, Err(GspError::EmptyTransactions)));
    }

    #[test]
    fn empty_transactions_find_nothing() {
        let gsp = Gsp::<u32>::new(vec![vec![], vec![]]).unwrap();

        assert_eq!(gsp.max_size(), 0);
        assert!(gsp.search(1).unwrap().is_empty());
    }

    #[test]
    fn order_distinguishes_patterns() {
        let gsp = Gsp::new(vec![vec![A, B], vec![B, A]]).unwrap();

        let levels = gsp.search(1).unwrap();

        let expected = vec![
            hashmap! {
                vec![A] => 2,
                vec![B] => 2,
            },
            hashmap! {
                vec![A, B] => 1,
                vec![B, A] => 1,
            },
        ];
        assert_eq!(levels, expected);
    }

    #[test]
    fn repeated_items_form_patterns() {
        let gsp = Gsp::new(vec![vec![A, B, A], vec![A, A], vec![B]]).unwrap();

        let levels = gsp.search(2).unwrap();

        let expected = vec![
            hashmap! {
                vec![A] => 2,
                vec![B] => 2,
            },
            hashmap! {
                vec![A, A] => 2,
            },
        ];
        assert_eq!(levels, expected);
    }

    #[test]
    fn fraction_support() {
        let gsp = Gsp::new(vec![vec![A, B], vec![A, C], vec![A, B, C], vec![B, C]]).unwrap();

        let levels = gsp.search_with(&SearchOptions::fraction(0.5)).unwrap();

        let expected = vec![
            hashmap! {
                vec![A] => 3,
                vec![B] => 3,
                vec![C] => 3,
            },
            hashmap! {
                vec![A, B] => 2,
                vec![A, C] => 2,
                vec![B, C] => 2,
            },
        ];
        assert_eq!(levels, expected);
    }
}
