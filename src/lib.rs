//! Council Engine - consensus deliberation for small groups.
//!
//! A convener opens a council on an issue and invites members. Accepted
//! members propose conclusions and amendments, record one opinion per
//! conclusion, and vote on motions to resolve (unanimous) or close
//! (strict majority). The passing vote terminates the council and produces
//! a deterministic final statement.
//!
//! Layers follow a ports-and-adapters layout:
//!
//! - `domain` - aggregates, value objects, events and pure synthesis
//! - `ports` - async repository and event traits
//! - `adapters` - in-memory implementations of every port
//! - `application` - command/query handlers and [`application::CouncilEngine`]
//! - `config` - environment-driven configuration and tracing setup

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
