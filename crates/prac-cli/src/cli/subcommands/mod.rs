mod hours;
mod report;
mod site;
mod student;

pub use hours::{HoursCommands, LedgerFilterArgs, LogArgs};
pub use report::ReportCommands;
pub use site::SiteCommands;
pub use student::StudentCommands;
