pub mod db;
pub use db::{SharedStore, Store};
pub mod user_repo;
pub use user_repo::UserRepository;
pub mod report_repo;
pub use report_repo::ReportRepository;
