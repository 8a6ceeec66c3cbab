//! Socket ownership and the accept loop.

pub mod listener;
