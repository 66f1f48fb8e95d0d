//! Static project catalog shown in the detail modal.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub body_html: &'static str,
}

const PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        id: "1",
        title: "Learning Compass",
        body_html: "<p>Comprehensive platform to help migrant families navigate the Victorian education system. \
                    Data architecture (MySQL), ETL pipelines, and interactive visualisations.</p>\
                    <p><strong>Tech:</strong> MySQL, AWS Amplify, ReactJS, Python (ETL)</p>",
    },
    ProjectRecord {
        id: "2",
        title: "Retail Operations Dashboard",
        body_html: "<p>Power BI dashboards to monitor KPIs, sales trends and inventory \u{2014} helped improve \
                    operations by ~15%.</p>\
                    <p><strong>Tech:</strong> Power BI, SQL Server</p>",
    },
    ProjectRecord {
        id: "3",
        title: "Healthcare Data Integration",
        body_html: "<p>ETL and SQL solutions to integrate EMR datasets across providers. Improved data integrity \
                    and reporting reliability.</p>\
                    <p><strong>Tech:</strong> SQL, ETL Pipelines</p>",
    },
];

/// Read-only id → record mapping, built once at startup.
#[derive(Clone, Debug)]
pub struct ProjectCatalog {
    records: BTreeMap<&'static str, ProjectRecord>,
}

impl ProjectCatalog {
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_records(PROJECTS)
    }

    #[must_use]
    pub fn from_records(records: &[ProjectRecord]) -> Self {
        Self { records: records.iter().map(|r| (r.id, *r)).collect() }
    }

    /// Look up by the `data-project` attribute value; surrounding whitespace
    /// is ignored.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ProjectRecord> {
        self.records.get(id.trim())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
