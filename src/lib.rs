// Library surface for headless/integration tests and reuse.
// The binary only adds CLI parsing, logging setup and terminal handling.
pub mod app;
pub mod comparator;
pub mod config;
pub mod content;
pub mod controller;
pub mod error;
pub mod runtime;
pub mod session;
pub mod timer;
pub mod ui;

pub use content::{Category, ContentBank};
pub use controller::{Presenter, SessionController};
pub use timer::SESSION_WINDOW;
