//! Integration tests for the codetree keeper

mod integration;
