//! eVTOL cost CLI library.
//!
//! Rendering helpers shared by the `evtol-cost` subcommands: terminal
//! capability detection and text/JSON formatting of cost breakdowns.

pub mod output;
pub mod terminal;
