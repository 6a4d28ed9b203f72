//! Impls - ports の実装
//!
//! - **FileSource** / **HttpSource** / **StaticSource**: RoadmapSource
//! - **HtmlSurface**: Surface（HTML 文字列として保持）

pub mod file_source;
pub mod html_surface;
pub mod http_source;
pub mod static_source;

pub use self::file_source::FileSource;
pub use self::html_surface::{HtmlSurface, escape_html, render_page};
pub use self::http_source::HttpSource;
pub use self::static_source::StaticSource;

use crate::ports::RoadmapSource;

/// `http://` / `https://` go over HTTP; everything else is a file path.
pub fn source_for(location: &str) -> Box<dyn RoadmapSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(FileSource::new(location))
    }
}
