mod app;
mod effects;
mod render;
mod settings;

pub use app::run_app;
pub use settings::Settings;

use palaver_core::Msg;

/// Everything the shell loop can receive.
pub(crate) enum Input {
    Core(Msg),
    Quit,
}
