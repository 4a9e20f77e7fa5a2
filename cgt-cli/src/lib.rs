pub mod format;
pub mod policy_file;
pub mod report;
