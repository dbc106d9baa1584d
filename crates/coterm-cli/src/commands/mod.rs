//! Command implementations.

pub mod summary;
pub mod top;

pub use self::summary::execute_summary;
pub use self::top::execute_top;
