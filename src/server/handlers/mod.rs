//! HTTP request handlers.

pub mod invoice;
