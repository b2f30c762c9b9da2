//! Discounts
//!
//! The decision handed back to the host's discount engine. Values are built once per evaluation
//! and never mutated afterwards.

use serde::Serialize;
use smallvec::SmallVec;

pub mod percentage;

pub use percentage::{Percentage, PercentageError};

/// Shipping handle that matches any shipping method.
pub const ANY_SHIPPING_HANDLE: &str = "any";

/// How the host combines the listed discounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountApplicationStrategy {
    /// Apply every listed discount independently.
    #[default]
    All,
}

/// What a discount applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Target {
    /// A specific cart line.
    CartLine {
        /// Cart line identifier
        id: String,
    },

    /// A shipping line, selected by handle.
    ShippingLine {
        /// Shipping method handle
        handle: String,
    },
}

impl Target {
    /// Target a single cart line.
    pub fn cart_line(id: impl Into<String>) -> Self {
        Self::CartLine { id: id.into() }
    }

    /// Target any shipping line.
    pub fn any_shipping_line() -> Self {
        Self::ShippingLine {
            handle: ANY_SHIPPING_HANDLE.to_string(),
        }
    }
}

/// Discount value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DiscountValue {
    /// Percentage off the targets.
    Percentage {
        /// Percentage between 0 and 100
        value: Percentage,
    },
}

impl From<Percentage> for DiscountValue {
    fn from(value: Percentage) -> Self {
        Self::Percentage { value }
    }
}

/// A single discount rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Discount {
    targets: Vec<Target>,
    value: DiscountValue,
    message: String,
}

impl Discount {
    /// Create a new discount.
    pub fn new(
        targets: impl Into<Vec<Target>>,
        value: impl Into<DiscountValue>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            targets: targets.into(),
            value: value.into(),
            message: message.into(),
        }
    }

    /// Return the targets.
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Return the value.
    pub fn value(&self) -> DiscountValue {
        self.value
    }

    /// Return the message shown to the customer.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Discount decision returned to the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountDecision {
    discount_application_strategy: DiscountApplicationStrategy,
    discounts: SmallVec<[Discount; 2]>,
}

impl DiscountDecision {
    /// A decision with no discounts.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A decision that applies every given discount.
    pub fn all(discounts: impl IntoIterator<Item = Discount>) -> Self {
        Self {
            discount_application_strategy: DiscountApplicationStrategy::All,
            discounts: discounts.into_iter().collect(),
        }
    }

    /// Return the application strategy.
    pub fn strategy(&self) -> DiscountApplicationStrategy {
        self.discount_application_strategy
    }

    /// Return the discounts, in rule order.
    pub fn discounts(&self) -> &[Discount] {
        &self.discounts
    }

    /// Check whether no discount applies.
    pub fn is_empty(&self) -> bool {
        self.discounts.is_empty()
    }

    /// Serialize the decision to its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize the decision to indented JSON.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
