//! Fixture driven tests for listing and replacing placeholders. See `tests/`.
