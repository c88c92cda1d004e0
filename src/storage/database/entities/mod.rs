/// Certification application entity module
pub mod application;
/// Audit log entity module
pub mod audit_log;
/// Member entity module
pub mod member;
/// Print queue entity module
pub mod print_queue;

pub use application::Entity as Application;
pub use audit_log::Entity as AuditLog;
pub use member::Entity as Member;
pub use print_queue::Entity as PrintQueue;
