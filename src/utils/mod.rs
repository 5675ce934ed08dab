/// Retry helpers for flaky network calls
pub mod retry;
