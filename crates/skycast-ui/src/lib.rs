//! Search view for SkyCast: state machine, controller and renderers.

pub mod controller;
mod error_mapping;
pub mod state;
pub mod terminal;
pub mod view;

pub use controller::{BusyGuard, ControllerOptions, InputEvent, SearchController, SearchError};
pub use state::ViewState;
pub use terminal::TerminalView;
pub use view::{SearchControl, WeatherView};
