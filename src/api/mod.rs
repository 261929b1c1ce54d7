mod axis_render_frame_builder;
mod crosshair_render_frame_builder;
mod data_controller;
mod engine;
mod engine_config;
mod engine_snapshot;
mod interaction_controller;
mod json_contract;
mod line_series_render_frame_builder;
mod reference_band_render_frame_builder;
mod render_frame_builder;
mod render_style;
mod resize_controller;

pub use axis_render_frame_builder::AxisTick;
pub use engine::{ChartEngine, ChartEvent, EngineStats};
pub use engine_config::{
    ChartEngineConfig, CrosshairOptions, DEFAULT_CHART_HEIGHT_PX, DEFAULT_CHART_WIDTH_PX,
    ReferenceBand,
};
pub use engine_snapshot::{EngineSnapshot, SeriesSnapshot};
pub use json_contract::{
    ChartGroupPayload, ColumnarPayload, PayloadValueMode, SeriesPayload, parse_chart_groups,
    parse_chart_input,
};
pub use render_style::RenderStyle;
