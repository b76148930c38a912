pub mod bar;
pub mod bar_series;
pub mod level;
pub mod window;

pub use bar::{Bar, BarDirection};
pub use bar_series::BarSeries;
pub use level::{Extremes, Level, LevelName, LevelSet};
pub use window::{RangeLength, RangeUnit, TimeWindow};
