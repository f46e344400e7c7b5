//! Core library modules for checkmate.
//!
//! - **Domain**: [`list`], [`task`], [`session`], [`outcome`]
//! - **Behaviour**: [`controller`] turns user actions into store calls
//! - **Presentation**: [`view`] panels and [`messages`] text
//! - **Infrastructure**: [`config`], [`data_storage`], [`logging`]

pub mod config;
pub mod controller;
pub mod data_storage;
pub mod list;
pub mod logging;
pub mod messages;
pub mod outcome;
pub mod session;
pub mod task;
pub mod view;
