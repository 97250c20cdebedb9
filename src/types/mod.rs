pub mod record;

pub use record::{CreateRecord, MAX_NAME_LEN, Record, UpdateRecord, Validate};
