pub mod hash_table;
pub mod search;

pub use hash_table::HashTable;
pub use search::upper_bound;
