pub mod config;
pub mod form;
pub mod tick;

pub use config::{RulerConfig, RulerWidth, Unit};
pub use form::RulerForm;
pub use tick::{HeightClass, NameLabel, TextAnchor, TickLabel, TickMark};
