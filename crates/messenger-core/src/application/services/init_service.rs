//! Project initialisation.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, ManifestStore, TemplateFetcher},
        services::journal::ChangeReport,
    },
    domain::{Manifest, layout},
    error::MessengerResult,
};

/// Creates a new project in the filesystem root.
pub struct InitService {
    fetcher: Box<dyn TemplateFetcher>,
    filesystem: Box<dyn Filesystem>,
    manifests: Box<dyn ManifestStore>,
    template_dir: PathBuf,
}

impl InitService {
    pub fn new(
        fetcher: Box<dyn TemplateFetcher>,
        filesystem: Box<dyn Filesystem>,
        manifests: Box<dyn ManifestStore>,
    ) -> Self {
        Self {
            fetcher,
            filesystem,
            manifests,
            template_dir: PathBuf::from(layout::TEMPLATE_DIR),
        }
    }

    /// Clone the templates somewhere other than `.messenger`.
    pub fn with_template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.template_dir = dir.into();
        self
    }

    /// Fetch the templates, copy the framework sources and write an empty
    /// manifest. An existing template directory is reused.
    #[instrument(skip(self))]
    pub fn init(&self, repository: &str) -> MessengerResult<ChangeReport> {
        if self.manifests.exists() {
            return Err(ApplicationError::ProjectExists {
                path: PathBuf::from(layout::MANIFEST_FILE),
            }
            .into());
        }

        let mut report = ChangeReport::default();
        let templates = self.template_dir.as_path();

        if self.filesystem.exists(templates) {
            debug!("Reusing existing template directory");
        } else {
            self.fetcher.fetch(repository, templates)?;
            report.created.push(templates.to_path_buf());
        }

        for (from, to) in layout::INIT_TREES {
            self.filesystem
                .copy_dir_all(&templates.join(from), Path::new(to))?;
            report.created.push(PathBuf::from(to));
        }

        for file in layout::INIT_FILES {
            self.filesystem
                .copy_file(&templates.join(file), Path::new(file))?;
            report.written.push(PathBuf::from(file));
        }

        for dir in layout::INIT_DIRECTORIES {
            self.filesystem.create_dir_all(Path::new(dir))?;
            report.created.push(PathBuf::from(dir));
        }

        self.manifests.save(&Manifest::new())?;
        report.written.push(PathBuf::from(layout::MANIFEST_FILE));

        info!("Project initialised");
        Ok(report)
    }
}
