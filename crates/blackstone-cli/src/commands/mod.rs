//! Command implementations.

pub mod analyze;
pub mod extract;
pub mod run;

pub use self::analyze::execute_analyze;
pub use self::extract::execute_extract;
pub use self::run::execute_run;
