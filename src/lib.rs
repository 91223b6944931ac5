pub mod logging;
pub mod error;
pub mod tooltip;
pub mod dom;
pub mod tips;
pub mod components;

pub use components::app::App;
pub use dom::{attach, tipsta, WebHost};
pub use error::{GeometryError, Result, TipError};
pub use tooltip::{Position, TipConfig, TipOptions, TipResolver};
