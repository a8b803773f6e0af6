//! Project Service - graph operations on an initialised project.
//!
//! Every operation follows the same transaction shape:
//! 1. Load the manifest and apply the mutation to that copy
//! 2. Plan every file (node templates, aggregators, patched files)
//! 3. Apply the plan through the journal
//! 4. Persist the manifest last, rolling back the tree on any failure

use std::path::Path;

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, ManifestStore, TemplateStore},
        services::{
            journal::{ChangeReport, Journal},
            template_engine::TemplateEngine,
        },
    },
    domain::{
        AggregatorPlan, ChangeSet, LayerOwner, Manifest, NodeName, NodeTemplates, RelativePath,
        aggregators, anchor, layout,
    },
    error::MessengerResult,
};

/// Orchestrates graph operations.
pub struct ProjectService {
    manifests: Box<dyn ManifestStore>,
    templates: Box<dyn TemplateStore>,
    filesystem: Box<dyn Filesystem>,
}

impl ProjectService {
    /// Create a project service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use messenger_core::application::ProjectService;
    ///
    /// let service = ProjectService::new(
    ///     manifests,  // impl ManifestStore
    ///     templates,  // impl TemplateStore
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(
        manifests: Box<dyn ManifestStore>,
        templates: Box<dyn TemplateStore>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            manifests,
            templates,
            filesystem,
        }
    }

    /// Current project graph.
    pub fn graph(&self) -> MessengerResult<Manifest> {
        self.manifests.load()
    }

    /// Add a plain scene and regenerate the scene aggregators.
    #[instrument(skip_all, fields(scene = %name))]
    pub fn add_scene(&self, name: NodeName) -> MessengerResult<ChangeReport> {
        let mut manifest = self.manifests.load()?;
        manifest.add_scene(name.clone())?;

        let node = layout::scene(&name);
        let mut changes = self.node_changes(&node)?;
        self.engine()
            .node(&node)?
            .substitute(name.as_str())
            .render_into(&mut changes)?;
        self.plan_aggregators(&aggregators::scenes(&manifest), &mut changes)?;

        let report = self.commit(&changes, Some(&manifest))?;
        info!("Scene created");
        Ok(report)
    }

    /// Add a scene prototype, register its initializer in the shared
    /// scene base module and regenerate the scene aggregators.
    #[instrument(skip_all, fields(sceneproto = %name))]
    pub fn add_sceneproto(&self, name: NodeName) -> MessengerResult<ChangeReport> {
        let mut manifest = self.manifests.load()?;
        manifest.add_sceneproto(name.clone())?;

        let node = layout::sceneproto(&name);
        let mut changes = self.node_changes(&node)?;
        self.engine()
            .node(&node)?
            .substitute(name.as_str())
            .render_into(&mut changes)?;

        let base = RelativePath::new(layout::SCENE_BASE_FILE);
        let text = self.read_existing(base.as_path())?;
        let patched = anchor::apply_all(
            layout::SCENE_BASE_FILE,
            &text,
            &anchor::register_sceneproto(&name),
        )?;
        changes.add_file(base, patched, true);

        self.plan_aggregators(&aggregators::scenes(&manifest), &mut changes)?;

        let report = self.commit(&changes, Some(&manifest))?;
        info!("Scene prototype created");
        Ok(report)
    }

    /// Add a layer under a plain scene.
    #[instrument(skip_all, fields(scene = %scene, layer = %layer))]
    pub fn add_layer(&self, scene: NodeName, layer: NodeName) -> MessengerResult<ChangeReport> {
        let mut manifest = self.manifests.load()?;
        manifest.add_scene_layer(&scene, layer.clone())?;

        let node = layout::scene_layer(&scene, &layer);
        let mut changes = self.node_changes(&node)?;
        self.engine()
            .node(&node)?
            .substitute(scene.as_str())
            .substitute(layer.as_str())
            .render_into(&mut changes)?;

        let layers = manifest.scene_layers(&scene).unwrap_or_default();
        self.plan_aggregators(
            &aggregators::layers(LayerOwner::Scene(&scene), layers),
            &mut changes,
        )?;

        let report = self.commit(&changes, Some(&manifest))?;
        info!("Layer created");
        Ok(report)
    }

    /// Add a layer under a scene prototype.
    #[instrument(skip_all, fields(sceneproto = %proto, layer = %layer))]
    pub fn add_sceneproto_layer(
        &self,
        proto: NodeName,
        layer: NodeName,
    ) -> MessengerResult<ChangeReport> {
        let mut manifest = self.manifests.load()?;
        manifest.add_sceneproto_layer(&proto, layer.clone())?;

        let node = layout::sceneproto_layer(&proto, &layer);
        let mut changes = self.node_changes(&node)?;
        self.engine()
            .node(&node)?
            .substitute(proto.as_str())
            .substitute(layer.as_str())
            .render_into(&mut changes)?;

        let layers = manifest
            .sceneproto(&proto)
            .map(|p| p.layers.as_slice())
            .unwrap_or_default();
        self.plan_aggregators(
            &aggregators::layers(LayerOwner::SceneProto(&proto), layers),
            &mut changes,
        )?;

        let report = self.commit(&changes, Some(&manifest))?;
        info!("Prototype layer created");
        Ok(report)
    }

    /// Add a level of a scene prototype. Levels are exposed as scenes, so
    /// the scene aggregators are regenerated.
    #[instrument(skip_all, fields(sceneproto = %proto, level = %level))]
    pub fn add_level(&self, proto: NodeName, level: NodeName) -> MessengerResult<ChangeReport> {
        let mut manifest = self.manifests.load()?;
        manifest.add_level(&proto, level.clone())?;

        let node = layout::level(&level);
        let mut changes = self.node_changes(&node)?;
        self.engine()
            .node(&node)?
            .substitute(level.as_str())
            .substitute(proto.as_str())
            .render_into(&mut changes)?;
        self.plan_aggregators(&aggregators::scenes(&manifest), &mut changes)?;

        let report = self.commit(&changes, Some(&manifest))?;
        info!("Level created");
        Ok(report)
    }

    /// Add a component. Components are not tracked in the manifest.
    #[instrument(skip_all, fields(component = %name))]
    pub fn add_component(&self, name: NodeName) -> MessengerResult<ChangeReport> {
        // Only checks that we are inside a project.
        self.manifests.load()?;

        let node = layout::component(&name);
        let mut changes = self.node_changes(&node)?;
        self.engine()
            .node(&node)?
            .substitute(name.as_str())
            .render_into(&mut changes)?;

        let report = self.commit(&changes, None)?;
        info!("Component created");
        Ok(report)
    }

    /// Rewrite every aggregator file from the manifest.
    #[instrument(skip_all)]
    pub fn regenerate(&self) -> MessengerResult<ChangeReport> {
        let manifest = self.manifests.load()?;

        let mut changes = ChangeSet::new();
        self.plan_aggregators(&aggregators::all(&manifest), &mut changes)?;

        let report = self.commit(&changes, None)?;
        info!(files = report.written.len(), "Aggregators regenerated");
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn engine(&self) -> TemplateEngine<'_> {
        TemplateEngine::new(self.templates.as_ref())
    }

    /// Start a change set for a new node, refusing to reuse a directory.
    fn node_changes(&self, node: &NodeTemplates) -> MessengerResult<ChangeSet> {
        if self.filesystem.exists(node.directory.as_path()) {
            return Err(ApplicationError::FilesystemConflict {
                path: node.directory.as_path().to_path_buf(),
            }
            .into());
        }
        Ok(ChangeSet::new().with_directory(node.directory.clone()))
    }

    fn plan_aggregators(
        &self,
        plans: &[AggregatorPlan],
        changes: &mut ChangeSet,
    ) -> MessengerResult<()> {
        let engine = self.engine();
        for plan in plans {
            let file = engine.aggregator(plan)?;
            changes.add_file(file.path, file.content, true);
        }
        Ok(())
    }

    fn read_existing(&self, path: &Path) -> MessengerResult<String> {
        if !self.filesystem.exists(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "file not found".into(),
            }
            .into());
        }
        self.filesystem.read_to_string(path)
    }

    /// Apply a planned change set, then persist the manifest.
    fn commit(
        &self,
        changes: &ChangeSet,
        manifest: Option<&Manifest>,
    ) -> MessengerResult<ChangeReport> {
        changes.validate()?;

        let mut journal = Journal::default();
        let result = journal
            .apply(self.filesystem.as_ref(), changes)
            .and_then(|report| {
                if let Some(manifest) = manifest {
                    self.manifests.save(manifest)?;
                }
                Ok(report)
            });

        match result {
            Ok(report) => Ok(report),
            Err(e) => {
                warn!(error = %e, "Operation failed, rolling back");
                match journal.rollback(self.filesystem.as_ref()) {
                    Ok(()) => info!("Rollback successful"),
                    Err(rollback) => warn!(error = %rollback, "Rollback incomplete"),
                }
                Err(e)
            }
        }
    }
}
