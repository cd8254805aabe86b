//! Host application: command line, configuration, command shell and snapshots

pub mod cli;
pub mod error;
pub mod shell;
pub mod snapshot;
pub mod startup;
