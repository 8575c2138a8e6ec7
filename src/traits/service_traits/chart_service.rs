use crate::common::*;

use crate::dto::rendered_chart::*;

pub trait ChartService: Send + Sync {
    #[doc = "
        Decode a JSON payload of named series and render one line+marker chart per series
        # Arguments
        * `payload` - JSON object string: series name -> { date: [..], value: [..] }

        # Returns
        * One rendered chart per decoded series, in decoder order
    "]
    fn render_series_charts(&self, payload: &str) -> anyhow::Result<Vec<RenderedChart>>;

    #[doc = "
        Mount rendered charts into a host page by target element id
        # Arguments
        * `page_html` - host page containing one empty target element per chart
        * `rendered_charts` - charts produced by `render_series_charts`

        # Returns
        * The page with each found target element replaced by its chart
    "]
    fn mount_charts_into_page(&self, page_html: &str, rendered_charts: &[RenderedChart]) -> String;
}
