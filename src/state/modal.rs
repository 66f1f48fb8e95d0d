//! Project detail modal: visibility plus rendered content.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::projects::{ProjectCatalog, ProjectRecord};
use crate::util::text::escape_html;

#[derive(Clone, Debug)]
pub struct ProjectModal {
    catalog: ProjectCatalog,
    repository_url: String,
    visible: bool,
    content: Option<String>,
}

impl ProjectModal {
    pub fn new(catalog: ProjectCatalog, repository_url: impl Into<String>) -> Self {
        Self { catalog, repository_url: repository_url.into(), visible: false, content: None }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Value for the container's `aria-hidden` attribute.
    #[must_use]
    pub fn aria_hidden(&self) -> &'static str {
        if self.visible { "false" } else { "true" }
    }

    /// HTML for the content region, if any project has been opened.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Show project `id`. Unknown ids leave the modal untouched and return
    /// `false`.
    pub fn open(&mut self, id: &str) -> bool {
        let Some(record) = self.catalog.get(id) else {
            log::debug!("no project with id {id:?}");
            return false;
        };
        self.content = Some(render_project(record, &self.repository_url));
        self.visible = true;
        true
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Click on the modal container; only the backdrop itself closes it.
    /// Returns whether the click closed a visible modal.
    pub fn click(&mut self, on_backdrop: bool) -> bool {
        if !on_backdrop || !self.visible {
            return false;
        }
        self.close();
        true
    }
}

/// Content region markup for one project.
#[must_use]
pub fn render_project(record: &ProjectRecord, repository_url: &str) -> String {
    format!(
        "<h3>{title}</h3>{body}<p style=\"margin-top:1rem\"><a href=\"{href}\" target=\"_blank\" \
         rel=\"noreferrer\">View repository</a></p>",
        title = escape_html(record.title),
        body = record.body_html,
        href = escape_html(repository_url),
    )
}
