pub mod canvas;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod diagrams;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, load_config};
pub use theme::Theme;
