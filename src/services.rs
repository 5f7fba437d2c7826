pub mod report_service;
pub use report_service::ReportService;
pub mod user_service;
pub use user_service::UserService;
