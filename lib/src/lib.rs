pub mod api;
pub mod check;
