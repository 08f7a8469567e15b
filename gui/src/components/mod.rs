pub mod indicator;
pub mod word;

pub use indicator::IndicatorLayer;
pub use word::WordLayer;
