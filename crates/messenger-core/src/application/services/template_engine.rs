//! Template Instantiation Engine.
//!
//! Pairs an ordered list of templates with an ordered list of destinations
//! and applies one ordered list of placeholder values identically to every
//! file in the batch.

use tracing::{debug, instrument};

use crate::{
    application::ports::TemplateStore,
    domain::{
        AggregatorPlan, ChangeSet, DomainError, NodeTemplates, RelativePath, TemplateId,
        fill_placeholders,
    },
    error::MessengerResult,
};

/// A rendered file, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: RelativePath,
    pub content: String,
}

/// Renders templates fetched from a [`TemplateStore`].
pub struct TemplateEngine<'a> {
    store: &'a dyn TemplateStore,
}

impl<'a> TemplateEngine<'a> {
    pub fn new(store: &'a dyn TemplateStore) -> Self {
        Self { store }
    }

    /// Start a batch. Template `i` is instantiated at destination `i`.
    pub fn instantiate(
        &self,
        templates: Vec<TemplateId>,
        destinations: Vec<RelativePath>,
    ) -> MessengerResult<Batch<'a>> {
        if templates.len() != destinations.len() {
            return Err(DomainError::TemplateMismatch {
                templates: templates.len(),
                destinations: destinations.len(),
            }
            .into());
        }

        Ok(Batch {
            store: self.store,
            pairs: templates.into_iter().zip(destinations).collect(),
            values: Vec::new(),
        })
    }

    /// Start a batch for every file of a node.
    pub fn node(&self, node: &NodeTemplates) -> MessengerResult<Batch<'a>> {
        self.instantiate(node.templates.clone(), node.destinations.clone())
    }

    /// Render a single aggregator file.
    pub fn aggregator(&self, plan: &AggregatorPlan) -> MessengerResult<RenderedFile> {
        let batch = self
            .instantiate(vec![plan.template.clone()], vec![plan.destination.clone()])?
            .substitute_all(plan.values.iter().cloned());

        let mut files = batch.render()?;
        files.pop().ok_or_else(|| {
            crate::error::MessengerError::Internal {
                message: "single-template batch rendered no file".into(),
            }
        })
    }
}

/// A pending instantiation.
///
/// `substitute` calls are recorded in order; the k-th call fills the k-th
/// placeholder of every file when the batch is rendered.
#[derive(Clone)]
pub struct Batch<'a> {
    store: &'a dyn TemplateStore,
    pairs: Vec<(TemplateId, RelativePath)>,
    values: Vec<String>,
}

impl Batch<'_> {
    /// Queue the value for the next placeholder of every file.
    #[must_use]
    pub fn substitute(mut self, value: impl Into<String>) -> Self {
        self.values.push(value.into());
        self
    }

    #[must_use]
    pub fn substitute_all<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values.extend(values.into_iter().map(Into::into));
        self
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Fetch and fill every template. Nothing is written.
    #[instrument(skip_all, fields(files = self.pairs.len(), values = self.values.len()))]
    pub fn render(&self) -> MessengerResult<Vec<RenderedFile>> {
        self.pairs
            .iter()
            .map(|(id, path)| -> MessengerResult<RenderedFile> {
                let text = self.store.fetch(id)?;
                let content = fill_placeholders(id.as_str(), &text, &self.values)?;
                debug!(template = %id, destination = %path, "Rendered template");
                Ok(RenderedFile {
                    path: path.clone(),
                    content,
                })
            })
            .collect()
    }

    /// Render into new files of a change set.
    pub fn render_into(&self, changes: &mut ChangeSet) -> MessengerResult<()> {
        for file in self.render()? {
            changes.add_file(file.path, file.content, false);
        }
        Ok(())
    }
}
