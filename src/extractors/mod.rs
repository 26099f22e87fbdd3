pub mod enhance;
pub mod json_ld;
