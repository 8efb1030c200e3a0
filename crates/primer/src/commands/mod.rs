//! CLI command implementations.

mod build;
mod check;
mod toc;

pub(crate) use build::BuildArgs;
pub(crate) use check::CheckArgs;
pub(crate) use toc::TocArgs;

use primer_config::Config;
use primer_renderer::{Byline, CmarkProse, PageSettings};

/// Map loaded configuration onto the page header.
fn page_settings(config: &Config) -> PageSettings {
    PageSettings {
        title: config.page.title.clone(),
        byline: config.page.byline.as_ref().map(|b| Byline {
            text: b.text.clone(),
            url: b.url.clone(),
        }),
        lang: config.page.lang.clone(),
        stylesheet: config.page.stylesheet.clone(),
    }
}

fn prose_renderer(config: &Config) -> CmarkProse {
    CmarkProse::new().with_gfm(config.render.gfm)
}
