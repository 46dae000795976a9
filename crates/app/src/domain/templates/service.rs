//! Templates service.

use std::sync::Arc;

use jiff::Timestamp;
use mockall::automock;
use portal::prelude::*;

use crate::{
    domain::{carts::CartsService, templates::errors::TemplatesServiceError},
    store::{KeyValueStore, read_templates, write_templates},
};

#[derive(Clone)]
pub struct StoreTemplatesService {
    store: Arc<dyn KeyValueStore>,
    carts: Arc<dyn CartsService>,
}

impl std::fmt::Debug for StoreTemplatesService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreTemplatesService").finish_non_exhaustive()
    }
}

impl StoreTemplatesService {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, carts: Arc<dyn CartsService>) -> Self {
        Self { store, carts }
    }
}

impl TemplatesService for StoreTemplatesService {
    fn list(&self) -> Result<Vec<CartTemplate>, TemplatesServiceError> {
        Ok(read_templates(self.store.as_ref())?.into_vec())
    }

    #[tracing::instrument(
        name = "templates.service.save_current",
        skip(self),
        fields(template_id = tracing::field::Empty),
        err
    )]
    fn save_current(&self, name: &str) -> Result<CartTemplate, TemplatesServiceError> {
        let cart = self.carts.cart()?;
        let mut templates = read_templates(self.store.as_ref())?;

        let saved = templates
            .save(TemplateId::now_v7(), name, &cart, Timestamp::now())?
            .clone();

        write_templates(self.store.as_ref(), &templates)?;

        tracing::Span::current().record("template_id", tracing::field::display(saved.id()));
        tracing::info!(
            template_id = %saved.id(),
            item_count = saved.total_item_count(),
            "saved cart template"
        );

        Ok(saved)
    }

    #[tracing::instrument(name = "templates.service.rename", skip(self), fields(template_id = %id), err)]
    fn rename(&self, id: TemplateId, name: &str) -> Result<CartTemplate, TemplatesServiceError> {
        let mut templates = read_templates(self.store.as_ref())?;

        let renamed = templates.rename(id, name)?.clone();

        write_templates(self.store.as_ref(), &templates)?;

        tracing::info!(template_id = %id, "renamed cart template");

        Ok(renamed)
    }

    #[tracing::instrument(name = "templates.service.delete", skip(self), fields(template_id = %id), err)]
    fn delete(&self, id: TemplateId) -> Result<bool, TemplatesServiceError> {
        let mut templates = read_templates(self.store.as_ref())?;

        let deleted = templates.delete(id).is_some();

        write_templates(self.store.as_ref(), &templates)?;

        if deleted {
            tracing::info!(template_id = %id, "deleted cart template");
        }

        Ok(deleted)
    }

    #[tracing::instrument(name = "templates.service.apply", skip(self), fields(template_id = %id), err)]
    fn apply(&self, id: TemplateId) -> Result<Cart, TemplatesServiceError> {
        let templates = read_templates(self.store.as_ref())?;

        let template = templates
            .get(id)
            .ok_or(TemplatesServiceError::NotFound)?;

        let cart = self.carts.merge_items(template.items())?;

        tracing::info!(template_id = %id, "applied cart template");

        Ok(cart)
    }
}

#[automock]
pub trait TemplatesService: Send + Sync {
    /// Saved templates in the order they were saved.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be read.
    fn list(&self) -> Result<Vec<CartTemplate>, TemplatesServiceError>;

    /// Snapshot the current cart as a named template.
    ///
    /// # Errors
    ///
    /// Returns [`TemplatesServiceError::EmptyCart`] or
    /// [`TemplatesServiceError::NameRequired`] without saving anything.
    fn save_current(&self, name: &str) -> Result<CartTemplate, TemplatesServiceError>;

    /// Rename a template.
    ///
    /// # Errors
    ///
    /// Returns [`TemplatesServiceError::RenameNameRequired`] or
    /// [`TemplatesServiceError::NotFound`].
    fn rename(&self, id: TemplateId, name: &str) -> Result<CartTemplate, TemplatesServiceError>;

    /// Delete a template. Deleting an unknown id succeeds and returns `false`.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be read or written.
    fn delete(&self, id: TemplateId) -> Result<bool, TemplatesServiceError>;

    /// Merge a template's items into the current cart, returning the cart.
    ///
    /// # Errors
    ///
    /// Returns [`TemplatesServiceError::NotFound`] or the cart error raised by
    /// the merge.
    fn apply(&self, id: TemplateId) -> Result<Cart, TemplatesServiceError>;
}
