//! Projection layer for the carousel tray engine: the pure tray transform
//! renderer, the master spinner gate, focus management, and the `Slider`
//! assembly that wires configuration, store, and gestures together.

pub mod focus;
pub mod slider;
pub mod spinner;
pub mod tray_transform;

pub use focus::{FocusId, FocusManager};
pub use slider::Slider;
pub use spinner::{should_show_spinner, MasterSpinnerGate};
pub use tray_transform::{
    project_tray, Transition, Translation, TrayProjection, TrayStyle, TrayWrapStyle,
};
