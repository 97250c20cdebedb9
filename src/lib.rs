pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod types;

pub use db::RecordStore;
pub use error::RecordsError;
pub use types::Record;
