use askama::Template;

use super::Gallery;
use crate::common::RenderError;

/// The gallery section on its own, as embedded by the landing page.
#[derive(Template)]
#[template(path = "gallery.html")]
pub struct GalleryFragment<'a> {
    pub gallery: &'a Gallery,
}

impl GalleryFragment<'_> {
    pub fn render_html(&self) -> Result<String, RenderError> {
        Ok(self.render()?)
    }
}
