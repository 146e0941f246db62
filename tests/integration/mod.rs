//! Integration tests for the codetree keeper

mod restart_session;
mod support;
mod tree_drift;
