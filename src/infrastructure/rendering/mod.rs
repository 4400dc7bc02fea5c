mod json_chart_renderer;

pub use json_chart_renderer::JsonChartRenderer;
