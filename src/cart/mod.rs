//! Cart
//!
//! The cart snapshot supplied by the host. Every field is optional on the wire; absent values
//! resolve to their zero contribution rather than an error.

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use thiserror::Error;

pub mod merchandise;

pub use merchandise::{Merchandise, Product, ProductType, ProductVariant};

/// Errors raised while reading an input document.
#[derive(Debug, Error)]
pub enum InputError {
    /// The document was not valid JSON or did not match the input shape.
    #[error("Failed to parse input document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Input document handed to the discount function.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FunctionInput {
    /// Cart snapshot, if the host supplied one.
    #[serde(default)]
    pub cart: Option<Cart>,
}

impl FunctionInput {
    /// Create an input wrapping the given cart.
    #[must_use]
    pub fn with_cart(cart: Cart) -> Self {
        Self { cart: Some(cart) }
    }

    /// Parse an input document from its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError::Json`] if the document is not valid JSON or its top-level
    /// shape cannot be read.
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Cart lines, or `None` when the cart or its line list is absent or empty.
    pub fn lines(&self) -> Option<&[CartLine]> {
        self.cart
            .as_ref()
            .and_then(|cart| cart.lines.as_deref())
            .filter(|lines| !lines.is_empty())
    }
}

/// Cart
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Cart {
    /// Ordered cart lines.
    #[serde(default)]
    pub lines: Option<Vec<CartLine>>,
}

impl Cart {
    /// Create a cart with the given lines.
    pub fn with_lines(lines: impl Into<Vec<CartLine>>) -> Self {
        Self {
            lines: Some(lines.into()),
        }
    }
}

/// A single cart line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CartLine {
    /// Opaque line identifier.
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,

    /// Quantity of the merchandise on this line.
    #[serde(default, deserialize_with = "lenient")]
    pub quantity: Option<i64>,

    /// Merchandise the line refers to.
    #[serde(default, deserialize_with = "merchandise::lenient_merchandise")]
    pub merchandise: Option<Merchandise>,
}

impl CartLine {
    /// Create a line for a product variant with the given product type label.
    pub fn product(id: impl Into<String>, quantity: i64, product_type: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            quantity: Some(quantity),
            merchandise: Some(Merchandise::ProductVariant(ProductVariant::with_type(
                product_type,
            ))),
        }
    }

    /// Create a line whose merchandise is not a product variant.
    pub fn other(id: impl Into<String>, quantity: i64) -> Self {
        Self {
            id: Some(id.into()),
            quantity: Some(quantity),
            merchandise: Some(Merchandise::Other),
        }
    }

    /// Line identifier, if one was supplied.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Quantity on the line, `0` when absent.
    pub fn quantity(&self) -> i64 {
        self.quantity.unwrap_or_default()
    }

    /// Product type of the line, or `None` when it does not reference a product variant.
    pub fn product_type(&self) -> Option<ProductType> {
        match self.merchandise.as_ref()? {
            Merchandise::ProductVariant(variant) => Some(variant.product_type()),
            Merchandise::Other => None,
        }
    }
}

/// Deserialize an optional field, treating a value of the wrong shape as absent.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;

    Ok(value.and_then(|value| serde_json::from_value(value).ok()))
}
