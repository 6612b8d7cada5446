//! Per-market stake book.
//!
//! Holds the two structures that must agree with each other:
//!
//! - `max_stakes`: customer -> highest stake, the authority for "is this an
//!   improvement";
//! - `ladder`: stake -> customers at that stake, in descending stake order,
//!   the authority for ranking.
//!
//! Every customer in `max_stakes` appears in exactly one ladder bucket, the
//! one for its current maximum, and no bucket is ever empty. The book is only
//! ever mutated through [`MarketBook::raise`], which updates both sides in a
//! single `&mut self` call, so holding the book's lock is enough to keep them
//! consistent.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::domain::{CustomerId, RankedStake, Stake, StakeOutcome};

#[derive(Debug, Default)]
pub(crate) struct MarketBook {
    max_stakes: HashMap<CustomerId, Stake>,
    /// Customers within a bucket iterate in ascending id order.
    ladder: BTreeMap<Reverse<Stake>, BTreeSet<CustomerId>>,
}

impl MarketBook {
    pub(crate) fn max_stake(&self, customer_id: CustomerId) -> Option<Stake> {
        self.max_stakes.get(&customer_id).copied()
    }

    /// Number of customers who have staked on this market.
    pub(crate) fn customer_count(&self) -> usize {
        self.max_stakes.len()
    }

    /// Record `stake` if it is strictly greater than the customer's maximum.
    pub(crate) fn raise(&mut self, customer_id: CustomerId, stake: Stake) -> StakeOutcome {
        let previous = self.max_stake(customer_id);
        if let Some(current) = previous.filter(|current| stake <= *current) {
            return StakeOutcome::Unchanged { current };
        }

        self.max_stakes.insert(customer_id, stake);
        if let Some(old) = previous {
            self.leave_bucket(old, customer_id);
        }
        self.ladder
            .entry(Reverse(stake))
            .or_default()
            .insert(customer_id);

        StakeOutcome::Raised { previous }
    }

    fn leave_bucket(&mut self, stake: Stake, customer_id: CustomerId) {
        if let Some(customers) = self.ladder.get_mut(&Reverse(stake)) {
            customers.remove(&customer_id);
            if customers.is_empty() {
                self.ladder.remove(&Reverse(stake));
            }
        }
    }

    /// Return up to `limit` entries, highest stake first.
    pub(crate) fn top(&self, limit: usize) -> Vec<RankedStake> {
        self.ladder
            .iter()
            .flat_map(|(Reverse(stake), customers)| {
                customers.iter().map(move |&customer_id| RankedStake {
                    customer_id,
                    stake: *stake,
                })
            })
            .take(limit)
            .collect()
    }

    /// Check that the ladder reproduces `max_stakes` exactly.
    #[cfg(any(test, feature = "testkit"))]
    pub(crate) fn is_consistent(&self) -> bool {
        let mut seen = 0;
        for (Reverse(stake), customers) in &self.ladder {
            if customers.is_empty() {
                return false;
            }
            for customer_id in customers {
                if self.max_stakes.get(customer_id) != Some(stake) {
                    return false;
                }
                seen += 1;
            }
        }
        seen == self.max_stakes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DEFAULT_MAX_STAKE;

    fn stake(value: i64) -> Stake {
        Stake::try_new(value, DEFAULT_MAX_STAKE).unwrap()
    }

    fn customer(id: u32) -> CustomerId {
        CustomerId::new(id)
    }

    fn rendered(book: &MarketBook, limit: usize) -> Vec<String> {
        book.top(limit).iter().map(ToString::to_string).collect()
    }

    #[test]
    fn raise_moves_customer_between_buckets() {
        let mut book = MarketBook::default();
        assert_eq!(
            book.raise(customer(1), stake(100)),
            StakeOutcome::Raised { previous: None }
        );
        assert_eq!(
            book.raise(customer(1), stake(300)),
            StakeOutcome::Raised {
                previous: Some(stake(100))
            }
        );

        assert_eq!(rendered(&book, 20), vec!["1=300"]);
        assert_eq!(book.ladder.len(), 1);
        assert!(book.is_consistent());
    }

    #[test]
    fn lower_or_equal_stake_is_a_no_op() {
        let mut book = MarketBook::default();
        book.raise(customer(1), stake(100));

        assert_eq!(
            book.raise(customer(1), stake(50)),
            StakeOutcome::Unchanged {
                current: stake(100)
            }
        );
        assert_eq!(
            book.raise(customer(1), stake(100)),
            StakeOutcome::Unchanged {
                current: stake(100)
            }
        );
        assert_eq!(rendered(&book, 20), vec!["1=100"]);
        assert!(book.is_consistent());
    }

    #[test]
    fn ties_break_by_ascending_customer_id() {
        let mut book = MarketBook::default();
        book.raise(customer(9), stake(200));
        book.raise(customer(3), stake(200));
        book.raise(customer(5), stake(500));
        book.raise(customer(1), stake(200));

        assert_eq!(rendered(&book, 20), vec!["5=500", "1=200", "3=200", "9=200"]);
    }

    #[test]
    fn top_respects_limit_across_buckets() {
        let mut book = MarketBook::default();
        for id in 1..=5 {
            book.raise(customer(id), stake(100));
        }
        book.raise(customer(6), stake(900));

        assert_eq!(rendered(&book, 3), vec!["6=900", "1=100", "2=100"]);
    }

    #[test]
    fn empty_bucket_is_removed() {
        let mut book = MarketBook::default();
        book.raise(customer(1), stake(10));
        book.raise(customer(2), stake(20));
        book.raise(customer(1), stake(30));

        assert!(!book.ladder.contains_key(&Reverse(stake(10))));
        assert_eq!(book.customer_count(), 2);
        assert!(book.is_consistent());
    }
}
