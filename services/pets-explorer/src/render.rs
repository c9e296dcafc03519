//! HTML rendering with minijinja templates

use minijinja::{context, Environment};
use pets_catalog::{BreedPage, HomeView};
use thiserror::Error;

/// Template failure; surfaces as HTTP 500
#[derive(Debug, Error)]
#[error("Template rendering failed: {0}")]
pub struct RenderError(#[from] minijinja::Error);

/// Compiled page templates
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.add_template("base.html", include_str!("../templates/base.html"))?;
        env.add_template("home.html", include_str!("../templates/home.html"))?;
        env.add_template("breed.html", include_str!("../templates/breed.html"))?;
        env.add_template("not_found.html", include_str!("../templates/not_found.html"))?;
        Ok(Self { env })
    }

    pub fn home(&self, view: &HomeView) -> Result<String, RenderError> {
        Ok(self.env.get_template("home.html")?.render(view)?)
    }

    pub fn breed(&self, page: &BreedPage) -> Result<String, RenderError> {
        let detail = &page.detail;
        let html = self.env.get_template("breed.html")?.render(context! {
            species => detail.species(),
            name => detail.name(),
            main_image_url => page.main_image_url(),
            attributes => detail.attributes(),
            description => detail.description(),
            wikipedia_url => detail.wikipedia_url(),
            gallery => &page.gallery,
        })?;
        Ok(html)
    }

    pub fn not_found(&self) -> Result<String, RenderError> {
        Ok(self.env.get_template("not_found.html")?.render(context! {})?)
    }
}
