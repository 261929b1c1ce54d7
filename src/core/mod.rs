pub mod chart_scales;
pub mod line_series;
pub mod primitives;
pub mod scale;
pub mod series;
pub mod ticks;
pub mod time_scale;
pub mod types;
pub mod value_scale;
pub mod view_transform;

pub use chart_scales::ChartScales;
pub use line_series::{
    CubicSegment, ProjectedRun, defined_runs, monotone_segments, project_series_runs,
};
pub use primitives::{format_day_label, parse_time};
pub use scale::LinearScale;
pub use series::{
    ChartInput, Point, RawPoint, Series, ValueMode, normalize_columns, normalize_points,
    palette_color,
};
pub use ticks::{
    DEFAULT_TICK_COUNT, TimeInterval, ValueTicks, format_time_tick, format_value_tick,
    select_time_interval, time_ticks, value_ticks,
};
pub use time_scale::TimeScale;
pub use types::{Margins, PlotArea, Viewport};
pub use value_scale::{ValueScale, ValueScaleTuning};
pub use view_transform::{ViewTransform, ZoomLimits};
