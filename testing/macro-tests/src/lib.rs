//! Compile tests for `#[derive(Columns)]` and `#[derive(Qualified)]`.
//! Cases live in `tests/ui`; see `tests/derive.rs`.
