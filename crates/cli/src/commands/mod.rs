pub mod check;
pub mod shell;
