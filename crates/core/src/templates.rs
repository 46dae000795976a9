//! Cart Templates

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    cart::{Cart, CartError},
    ids::TypedUuid,
    items::{ItemError, LineItem},
    pricing,
};

/// Template id
pub type TemplateId = TypedUuid<CartTemplate>;

/// Errors raised by template rules.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    /// Templates cannot be saved from an empty cart.
    #[error("Empty Cart")]
    EmptyCart,

    /// The template name is empty after trimming.
    #[error("Template Name Required")]
    NameRequired,

    /// A rename was given a name that is empty after trimming.
    #[error("Name Required")]
    RenameNameRequired,

    /// No template has the given id.
    #[error("template {0} not found")]
    NotFound(TemplateId),

    /// Another template already has this id.
    #[error("template {0} already exists")]
    DuplicateId(TemplateId),

    /// A stored template item is malformed.
    #[error(transparent)]
    InvalidItem(#[from] ItemError),

    /// Merging the template into a cart failed.
    #[error(transparent)]
    Cart(#[from] CartError),
}

impl TemplateError {
    /// Whether this error is a user-facing validation failure rather than a
    /// missing template.
    pub fn is_validation(&self) -> bool {
        match self {
            Self::NotFound(_) => false,
            Self::Cart(error) => error.is_validation(),
            _ => true,
        }
    }
}

/// A named snapshot of a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTemplate {
    id: TemplateId,
    name: String,
    items: Vec<LineItem>,
    created_at: Timestamp,
    total_item_count: u64,
    total_value: Decimal,
}

impl CartTemplate {
    /// Snapshot `cart` under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::EmptyCart`] or [`TemplateError::NameRequired`].
    pub fn snapshot(
        id: TemplateId,
        name: &str,
        cart: &Cart,
        created_at: Timestamp,
    ) -> Result<Self, TemplateError> {
        if cart.is_empty() {
            return Err(TemplateError::EmptyCart);
        }

        let name = normalise_name(name, TemplateError::NameRequired)?;
        let items = cart.items().to_vec();

        Ok(Self {
            id,
            name,
            total_item_count: pricing::item_count(&items),
            total_value: pricing::subtotal(&items),
            items,
            created_at,
        })
    }

    /// Template id
    pub fn id(&self) -> TemplateId {
        self.id
    }

    /// Template name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Items as they were when the template was saved
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// When the template was saved
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Sum of quantities at save time
    pub fn total_item_count(&self) -> u64 {
        self.total_item_count
    }

    /// Sum of selling price times quantity at save time
    pub fn total_value(&self) -> Decimal {
        self.total_value
    }

    /// Change the template name. Totals are not recomputed.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::RenameNameRequired`] if `name` is blank.
    pub fn rename(&mut self, name: &str) -> Result<(), TemplateError> {
        self.name = normalise_name(name, TemplateError::RenameNameRequired)?;

        Ok(())
    }

    /// Check invariants of a template read back from storage.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] naming the first violated invariant.
    pub fn validate(&self) -> Result<(), TemplateError> {
        if self.name.trim().is_empty() {
            return Err(TemplateError::NameRequired);
        }

        if self.items.is_empty() {
            return Err(TemplateError::EmptyCart);
        }

        self.items.iter().try_for_each(LineItem::validate)?;

        Ok(())
    }
}

fn normalise_name(name: &str, blank: TemplateError) -> Result<String, TemplateError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(blank);
    }

    Ok(trimmed.to_string())
}

/// Saved templates, in the order they were saved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Templates {
    templates: Vec<CartTemplate>,
}

impl Templates {
    /// Create an empty template list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a template list from stored templates.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] if a template is malformed or ids collide.
    pub fn with_templates(templates: impl Into<Vec<CartTemplate>>) -> Result<Self, TemplateError> {
        let templates = templates.into();

        for (i, template) in templates.iter().enumerate() {
            template.validate()?;

            if templates.iter().take(i).any(|other| other.id == template.id) {
                return Err(TemplateError::DuplicateId(template.id));
            }
        }

        Ok(Self { templates })
    }

    /// Templates in insertion order.
    pub fn as_slice(&self) -> &[CartTemplate] {
        &self.templates
    }

    /// Consume the list, returning its templates.
    pub fn into_vec(self) -> Vec<CartTemplate> {
        self.templates
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if there are no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Look up a template by id.
    pub fn get(&self, id: TemplateId) -> Option<&CartTemplate> {
        self.templates.iter().find(|template| template.id == id)
    }

    /// Snapshot `cart` as a new template and append it.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] for an empty cart, a blank name, or an id
    /// that is already taken.
    pub fn save(
        &mut self,
        id: TemplateId,
        name: &str,
        cart: &Cart,
        created_at: Timestamp,
    ) -> Result<&CartTemplate, TemplateError> {
        if self.get(id).is_some() {
            return Err(TemplateError::DuplicateId(id));
        }

        let template = CartTemplate::snapshot(id, name, cart, created_at)?;

        self.templates.push(template);

        self.get(id).ok_or(TemplateError::NotFound(id))
    }

    /// Rename a template.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::RenameNameRequired`] or
    /// [`TemplateError::NotFound`].
    pub fn rename(&mut self, id: TemplateId, name: &str) -> Result<&CartTemplate, TemplateError> {
        let template = self
            .templates
            .iter_mut()
            .find(|template| template.id == id)
            .ok_or(TemplateError::NotFound(id))?;

        template.rename(name)?;

        Ok(template)
    }

    /// Remove a template, returning it if it existed.
    pub fn delete(&mut self, id: TemplateId) -> Option<CartTemplate> {
        let position = self.templates.iter().position(|template| template.id == id)?;

        Some(self.templates.remove(position))
    }

    /// Merge a template's items into `cart`. The template is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::NotFound`] or the [`CartError`] raised by the
    /// merge, in which case `cart` is unchanged.
    pub fn apply_to(&self, id: TemplateId, cart: &mut Cart) -> Result<(), TemplateError> {
        let template = self.get(id).ok_or(TemplateError::NotFound(id))?;

        cart.merge(template.items())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use testresult::TestResult;

    use crate::products::{ProductId, tests::product};

    use super::*;

    fn cart() -> Result<Cart, CartError> {
        let mut cart = Cart::new();
        cart.add_or_increment(&product("A", dec!(420), dec!(450), 50), None)?;
        cart.add_or_increment(&product("B", dec!(100), dec!(110), 5), Some(10))?;

        Ok(cart)
    }

    #[test]
    fn snapshot_computes_totals_and_trims_name() -> TestResult {
        let template =
            CartTemplate::snapshot(TemplateId::now_v7(), "  Weekly  ", &cart()?, Timestamp::now())?;

        assert_eq!(template.name(), "Weekly");
        assert_eq!(template.total_item_count(), 60);
        assert_eq!(template.total_value(), dec!(22000));
        assert_eq!(template.items().len(), 2);

        Ok(())
    }

    #[test]
    fn snapshot_of_empty_cart_errors() {
        let result =
            CartTemplate::snapshot(TemplateId::now_v7(), "Weekly", &Cart::new(), Timestamp::now());

        assert_eq!(result, Err(TemplateError::EmptyCart));
    }

    #[test]
    fn snapshot_with_blank_name_errors() -> TestResult {
        let result = CartTemplate::snapshot(TemplateId::now_v7(), "  ", &cart()?, Timestamp::now());

        assert_eq!(result, Err(TemplateError::NameRequired));

        Ok(())
    }

    #[test]
    fn later_cart_changes_do_not_affect_saved_template() -> TestResult {
        let mut cart = cart()?;
        let mut templates = Templates::new();
        let id = TemplateId::now_v7();

        templates.save(id, "Weekly", &cart, Timestamp::now())?;

        cart.set_quantity(&ProductId::new("A"), 500)?;
        cart.remove(&ProductId::new("B"))?;

        let saved = templates.get(id).ok_or("template missing")?;

        assert_eq!(saved.items().len(), 2);
        assert_eq!(saved.total_item_count(), 60);

        Ok(())
    }

    #[test]
    fn save_appends_in_insertion_order() -> TestResult {
        let cart = cart()?;
        let mut templates = Templates::new();

        templates.save(TemplateId::now_v7(), "Zeta", &cart, Timestamp::now())?;
        templates.save(TemplateId::now_v7(), "Alpha", &cart, Timestamp::now())?;

        let names: Vec<_> = templates.as_slice().iter().map(CartTemplate::name).collect();

        assert_eq!(names, ["Zeta", "Alpha"]);

        Ok(())
    }

    #[test]
    fn save_with_taken_id_errors() -> TestResult {
        let cart = cart()?;
        let mut templates = Templates::new();
        let id = TemplateId::now_v7();

        templates.save(id, "First", &cart, Timestamp::now())?;
        let result = templates.save(id, "Second", &cart, Timestamp::now());

        assert_eq!(result.err(), Some(TemplateError::DuplicateId(id)));
        assert_eq!(templates.len(), 1);

        Ok(())
    }

    #[test]
    fn rename_keeps_totals() -> TestResult {
        let mut templates = Templates::new();
        let id = TemplateId::now_v7();
        templates.save(id, "Weekly", &cart()?, Timestamp::now())?;

        let renamed = templates.rename(id, " Monthly ")?;

        assert_eq!(renamed.name(), "Monthly");
        assert_eq!(renamed.total_value(), dec!(22000));

        Ok(())
    }

    #[test]
    fn rename_to_blank_errors_without_change() -> TestResult {
        let mut templates = Templates::new();
        let id = TemplateId::now_v7();
        templates.save(id, "Weekly", &cart()?, Timestamp::now())?;

        let result = templates.rename(id, "   ").map(|_| ());

        assert_eq!(result, Err(TemplateError::RenameNameRequired));
        assert_eq!(
            result.map_err(|error| error.to_string()),
            Err("Name Required".to_string())
        );
        assert_eq!(templates.get(id).map(CartTemplate::name), Some("Weekly"));

        Ok(())
    }

    #[test]
    fn rename_unknown_template_errors() {
        let mut templates = Templates::new();
        let id = TemplateId::now_v7();

        let result = templates.rename(id, "Name").map(|_| ());

        assert_eq!(result, Err(TemplateError::NotFound(id)));
    }

    #[test]
    fn delete_is_idempotent() -> TestResult {
        let mut templates = Templates::new();
        let id = TemplateId::now_v7();
        templates.save(id, "Weekly", &cart()?, Timestamp::now())?;

        assert!(templates.delete(id).is_some());
        let after_first = templates.clone();

        assert!(templates.delete(id).is_none());
        assert_eq!(templates, after_first);

        Ok(())
    }

    #[test]
    fn apply_to_merges_without_touching_template() -> TestResult {
        let mut templates = Templates::new();
        let id = TemplateId::now_v7();
        templates.save(id, "Weekly", &cart()?, Timestamp::now())?;
        let saved = templates.clone();

        let mut target = cart()?;
        templates.apply_to(id, &mut target)?;

        assert_eq!(target.get(&ProductId::new("A")).map(|i| i.quantity), Some(100));
        assert_eq!(target.get(&ProductId::new("B")).map(|i| i.quantity), Some(20));
        assert_eq!(templates, saved);

        Ok(())
    }

    #[test]
    fn apply_unknown_template_errors() {
        let templates = Templates::new();
        let id = TemplateId::now_v7();

        let result = templates.apply_to(id, &mut Cart::new());

        assert_eq!(result, Err(TemplateError::NotFound(id)));
        assert!(!TemplateError::NotFound(id).is_validation());
    }

    #[test]
    fn with_templates_rejects_duplicate_ids() -> TestResult {
        let template =
            CartTemplate::snapshot(TemplateId::now_v7(), "Weekly", &cart()?, Timestamp::now())?;

        let result = Templates::with_templates(vec![template.clone(), template.clone()]);

        assert_eq!(result, Err(TemplateError::DuplicateId(template.id())));

        Ok(())
    }

    #[test]
    fn serializes_camel_case_fields() -> TestResult {
        let template =
            CartTemplate::snapshot(TemplateId::now_v7(), "Weekly", &cart()?, Timestamp::now())?;

        let json = serde_json::to_value(&template)?;

        assert!(json.get("createdAt").is_some());
        assert!(json.get("totalItemCount").is_some());
        assert!(json.get("totalValue").is_some());

        let back: CartTemplate = serde_json::from_value(json)?;

        assert_eq!(back, template);

        Ok(())
    }
}
