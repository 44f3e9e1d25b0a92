pub mod money;
pub mod student;
