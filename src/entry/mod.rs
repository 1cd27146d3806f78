pub mod storage;
pub mod types;

pub use storage::{get_entries_path, load_entries, save_entries};
pub use types::{CatchRecord, EntryLog, LengthField};
