pub mod entry_list;
pub mod probe;

pub use entry_list::{EntryId, EntryList};
