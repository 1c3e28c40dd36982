//! Output formatting for rendered party documents

pub mod console;
