//! Stake ledger: per-market maximum stakes and ranked leaderboards.
//!
//! Each market owns one `MarketBook` behind its own `RwLock`; the market
//! map itself is a sharded `DashMap`. Submissions to different markets
//! never contend. Within a market the max-map and the ladder change together
//! under the write lock, so a reader always sees a book in which every
//! customer appears exactly once, at their current maximum.
//!
//! Submissions that would not raise the recorded maximum are answered under
//! the read lock and never take the write lock. Raises on one market
//! serialize on that market's write lock, and while a raise holds it the
//! market's readers wait for it to finish. The critical section is a
//! map update plus a ladder move, so the wait is short.

mod book;
mod stake_ledger;

pub use stake_ledger::StakeLedger;
