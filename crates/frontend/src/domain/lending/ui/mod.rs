pub mod borrow;
pub mod history;
