#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{ChartScales, ProjectedRun, Series, project_series_runs};
use crate::render::{CirclePrimitive, PathCommand, PathPrimitive, RenderFrame, Renderer};

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Appends one path per defined run and one dot per isolated sample,
    /// in input series order so later series draw on top.
    pub(super) fn append_line_series(&self, frame: &mut RenderFrame, scales: ChartScales) {
        let style = self.config.render_style;
        let (left, top) = (self.plot.left, self.plot.top);

        for (series_index, (series, runs)) in self
            .series()
            .iter()
            .zip(project_all_series(self.series(), scales))
            .enumerate()
        {
            for run in runs {
                match run {
                    ProjectedRun::Dot { x, y } => frame.circles.push(CirclePrimitive::new(
                        left + x,
                        top + y,
                        style.isolated_point_radius_px,
                        series.color(),
                    )),
                    ProjectedRun::Curve { segments } => {
                        let Some(first) = segments.first() else {
                            continue;
                        };
                        let mut commands = Vec::with_capacity(segments.len() + 1);
                        commands.push(PathCommand::MoveTo {
                            x: left + first.x0,
                            y: top + first.y0,
                        });
                        commands.extend(segments.iter().map(|segment| PathCommand::CubicTo {
                            c1x: left + segment.c1x,
                            c1y: top + segment.c1y,
                            c2x: left + segment.c2x,
                            c2y: top + segment.c2y,
                            x: left + segment.x1,
                            y: top + segment.y1,
                        }));
                        frame.paths.push(
                            PathPrimitive::new(commands, style.series_line_width, series.color())
                                .for_series(series_index),
                        );
                    }
                }
            }
        }
    }
}

#[cfg(feature = "parallel-projection")]
fn project_all_series(series: &[Series], scales: ChartScales) -> Vec<Vec<ProjectedRun>> {
    series
        .par_iter()
        .map(|series| project_series_runs(series.points(), scales.time, scales.value))
        .collect()
}

#[cfg(not(feature = "parallel-projection"))]
fn project_all_series(series: &[Series], scales: ChartScales) -> Vec<Vec<ProjectedRun>> {
    series
        .iter()
        .map(|series| project_series_runs(series.points(), scales.time, scales.value))
        .collect()
}
