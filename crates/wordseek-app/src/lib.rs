//! Shared library module for the Wordseek app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod autosave;
pub mod command;
pub mod error;
pub mod game_factory;
pub mod identity;
pub mod render;
pub mod session;
pub mod settings;

pub use self::{
    error::AppError,
    session::{GameService, PuzzleSummary, Session},
    settings::Settings,
};
