pub mod config;
pub mod dispatch;
pub mod theme;
pub mod types;

pub use config::{PanelAction, PanelConfig, ResourceSection, load_panel};
pub use dispatch::{ActionOutcome, RequestFailed, force_reload, outcome_for, perform};
pub use theme::DialogTheme;
pub use types::{ActionRequest, DialogSpec, DialogTone, Verb};
