//! Reusable UI components

pub mod header;
pub mod loading;
pub mod portfolio;
pub mod prompt_panel;
pub mod requests;

pub use header::Header;
pub use loading::{LoadingDots, LoadingSpinner};
pub use portfolio::Portfolio;
pub use prompt_panel::PromptPanel;
pub use requests::Requests;
