pub mod issue;
pub mod month;
pub mod report;
