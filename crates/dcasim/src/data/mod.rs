pub mod scenario_file;
pub mod storage;

pub use scenario_file::{load_scenarios, save_scenarios};
pub use storage::{DataDirectory, StorageError, load_price_file};
