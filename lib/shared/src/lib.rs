pub mod discovery;
pub mod page;
pub mod release;
