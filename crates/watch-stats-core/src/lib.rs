pub mod aggregator;
pub mod dates;
pub mod engagement;
pub mod filter;
pub mod fun_facts;
pub mod genres;
pub mod history;
pub mod movies;
pub mod numbers;
pub mod personality;
pub mod ratings;
pub mod store;
pub mod tally;
pub mod timeline;
pub mod tv;
pub mod volume;

#[cfg(test)]
mod test_support;

pub use aggregator::{compute, compute_with, StatsOptions};
pub use filter::filter_by_year;
pub use fun_facts::hours_equivalent;
pub use personality::{classify, PersonalityInputs, PersonalityRule, PERSONALITY_RULES};
pub use store::{HistorySnapshot, JsonHistoryStore, StoreError, WatchHistoryStore};
