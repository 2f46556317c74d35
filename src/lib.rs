//! Cross-crate scenario tests for the DynFib workspace live in `tests/`.
