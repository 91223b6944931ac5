//! Caption and position resolution for hover tooltips.
//!
//! Everything here is plain data and arithmetic over a `TipHost`; the browser
//! side lives in `crate::dom`.

pub mod caption;
pub mod config;
pub mod easing;
pub mod hover;
pub mod position;
pub mod region;
pub mod resolver;
pub mod style;
pub mod target;

pub use caption::{caption_for, NO_CAPTION};
pub use config::{TipConfig, TipOptions};
pub use hover::{Frame, HoverMachine, TipPhase, Transition};
pub use position::Position;
pub use resolver::{TipHost, TipResolver};
pub use style::{parse_px, BoxStyle, TipMetrics};
pub use target::{Region, Target, TargetKind};
