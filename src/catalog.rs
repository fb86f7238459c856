//! Product Catalog
//!
//! Product records plus the operator chosen display order. Records live in a
//! `SlotMap`; the display order is an [`OrderableCollection`] of their keys, so
//! a reorder only ever permutes keys and never touches product data.

use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use thiserror::Error;
use tracing::trace;

use crate::{
    products::{Product, ProductKey},
    reorder::{OrderableCollection, ReorderError},
    snapshot::Snapshot,
};

/// Errors raised while seeding a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two products share the same id.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// The display order could not be built.
    #[error(transparent)]
    Reorder(#[from] ReorderError),
}

/// Product records in display order.
#[derive(Debug, Clone)]
pub struct ProductCatalog<'a> {
    products: SlotMap<ProductKey, Product<'a>>,
    keys: FxHashMap<String, ProductKey>,
    arrangement: OrderableCollection<ProductKey>,
}

impl<'a> ProductCatalog<'a> {
    /// Create a catalog displaying `products` in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateProduct`] if two products share an id.
    pub fn with_products(
        products: impl IntoIterator<Item = Product<'a>>,
    ) -> Result<Self, CatalogError> {
        let mut slots = SlotMap::with_key();
        let mut keys = FxHashMap::default();
        let mut order = Vec::new();

        for product in products {
            if keys.contains_key(&product.id) {
                return Err(CatalogError::DuplicateProduct(product.id));
            }

            let id = product.id.clone();
            let key = slots.insert(product);

            keys.insert(id, key);
            order.push(key);
        }

        Ok(Self {
            products: slots,
            keys,
            arrangement: OrderableCollection::new(order)?,
        })
    }

    /// Start a reorder gesture on `product_id`.
    ///
    /// Picking an unknown id ends any gesture in progress, so that a following
    /// drop does nothing.
    pub fn pick(&mut self, product_id: &str) {
        match self.key(product_id) {
            Some(key) => self.arrangement.pick(key),
            None => {
                trace!(product_id, "picked unknown product");
                self.arrangement.cancel();
            }
        }
    }

    /// Signal that the pointer is over `target_id`. Never changes anything.
    ///
    /// Returns true if dropping there would be considered.
    pub fn hover(&self, target_id: &str) -> bool {
        self.arrangement.hover() && self.keys.contains_key(target_id)
    }

    /// Drop the picked product on `target_id`. Returns true if it moved.
    pub fn drop_on(&mut self, target_id: &str) -> bool {
        match self.key(target_id) {
            Some(target) => self.arrangement.drop_on(&target),
            None => {
                trace!(target_id, "drop ignored, unknown product");
                false
            }
        }
    }

    /// End the reorder gesture without moving anything.
    pub fn cancel(&mut self) {
        self.arrangement.cancel();
    }

    /// Move `dragged_id` to the position held by `target_id`.
    ///
    /// Returns false if nothing moved; see [`OrderableCollection::move_to_target`].
    pub fn move_to_target(&mut self, dragged_id: Option<&str>, target_id: &str) -> bool {
        let Some(target) = self.key(target_id) else {
            trace!(target_id, "drop ignored, unknown product");
            return false;
        };

        let dragged = dragged_id.and_then(|id| self.key(id));

        if dragged_id.is_some() && dragged.is_none() {
            trace!(?dragged_id, "drop ignored, unknown product");
            return false;
        }

        self.arrangement.move_to_target(dragged.as_ref(), &target)
    }

    /// Find a product by id.
    pub fn product(&self, product_id: &str) -> Option<&Product<'a>> {
        self.key(product_id)
            .and_then(|key| self.products.get(key))
    }

    /// The product being dragged, if a gesture is in progress.
    pub fn dragged(&self) -> Option<&Product<'a>> {
        self.arrangement
            .candidate()
            .and_then(|key| self.products.get(*key))
    }

    /// Iterate over the products in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Product<'a>> {
        self.arrangement
            .iter()
            .filter_map(|key| self.products.get(*key))
    }

    /// Product ids in display order.
    pub fn ids(&self) -> Vec<&str> {
        self.iter().map(|product| product.id.as_str()).collect()
    }

    /// A read-only view of the display order.
    pub fn order(&self) -> Snapshot<ProductKey> {
        self.arrangement.snapshot()
    }

    /// The underlying orderable collection.
    pub fn arrangement(&self) -> &OrderableCollection<ProductKey> {
        &self.arrangement
    }

    /// Get the product record `SlotMap`
    pub fn product_map(&self) -> &SlotMap<ProductKey, Product<'a>> {
        &self.products
    }

    /// Get the number of products.
    pub fn len(&self) -> usize {
        self.arrangement.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.arrangement.is_empty()
    }

    fn key(&self, product_id: &str) -> Option<ProductKey> {
        self.keys.get(product_id).copied()
    }
}
