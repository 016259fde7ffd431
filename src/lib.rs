//! upstream-bump - upstream release checker library
//!
//! This library provides the core functionality for keeping a DAppNode
//! package in step with its upstream project:
//! - Reading the current package state (dappnode_package-mainnet.json)
//! - Fetching the latest upstream release tag (GitHub releases API)
//! - Deciding on a patch-level package bump
//! - Patching the manifest and the docker-compose file
//! - Publishing results to CI automation outputs

pub mod cli;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod release;
