pub mod dispatch;
pub mod hours;
pub mod init;
pub mod overview;
pub mod report;
pub mod reset;
pub mod schema;
pub mod shared;
pub mod site;
pub mod student;
