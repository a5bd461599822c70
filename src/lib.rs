//! Aid log administration (aidlog)
//!
//! Terminal tool for tracking scheduled ("Future") and delivered
//! ("Completed") aid records kept by a remote aid service.
//!
//! Pure Core / Impure Shell: `model` and `state` hold data and the reducer,
//! `service`, `controller` and `view` talk to the network and the terminal.

pub mod config;
pub mod controller;
pub mod logging;
pub mod model;
pub mod service;
pub mod state;
pub mod view;
