pub mod constants;
pub mod list;
pub mod run;
