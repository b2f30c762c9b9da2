//! Classification
//!
//! A single left-to-right pass over the cart lines that accumulates jar and product totals and
//! records which lines are honey jars or jar bundles. Every counted line takes exactly one of the
//! jar-bundle, honey or other paths; lines that do not reference a product variant are skipped.

use thiserror::Error;

use crate::cart::{CartLine, ProductType};

/// Number of jars (and products) a single jar bundle counts as.
pub const JARS_PER_BUNDLE: u64 = 3;

/// Errors raised while classifying cart lines.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassificationError {
    /// A counted line had a negative quantity.
    #[error("Line {line_id} has negative quantity {quantity}")]
    NegativeQuantity {
        /// Identifier of the offending line
        line_id: String,
        /// Quantity supplied for the line
        quantity: i64,
    },

    /// A running total no longer fits in a `u64`.
    #[error("Totals overflowed while counting line {0}")]
    Overflow(String),
}

/// Totals derived from a cart snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedTotals {
    total_jars: u64,
    total_products: u64,
    honey_line_ids: Vec<String>,
    jar_bundle_line_ids: Vec<String>,
}

impl ClassifiedTotals {
    /// Classify the given lines in order.
    ///
    /// # Errors
    ///
    /// Returns a [`ClassificationError::NegativeQuantity`] if a product-variant line carries a
    /// negative quantity, or [`ClassificationError::Overflow`] if the totals cannot be
    /// represented.
    pub fn classify(lines: &[CartLine]) -> Result<Self, ClassificationError> {
        lines.iter().try_fold(Self::default(), |mut totals, line| {
            totals.add_line(line)?;

            Ok(totals)
        })
    }

    fn add_line(&mut self, line: &CartLine) -> Result<(), ClassificationError> {
        let Some(product_type) = line.product_type() else {
            return Ok(());
        };

        let Ok(quantity) = u64::try_from(line.quantity()) else {
            return Err(ClassificationError::NegativeQuantity {
                line_id: line_label(line),
                quantity: line.quantity(),
            });
        };

        let overflow = || ClassificationError::Overflow(line_label(line));

        // Lines without an identifier still count but cannot be targeted.
        match product_type {
            ProductType::JarBundle => {
                let jars = quantity.checked_mul(JARS_PER_BUNDLE).ok_or_else(overflow)?;

                self.total_jars = self.total_jars.checked_add(jars).ok_or_else(overflow)?;
                self.total_products = self.total_products.checked_add(jars).ok_or_else(overflow)?;
                self.jar_bundle_line_ids.extend(line.id.clone());
            }
            ProductType::Honey => {
                self.total_jars = self.total_jars.checked_add(quantity).ok_or_else(overflow)?;
                self.total_products = self
                    .total_products
                    .checked_add(quantity)
                    .ok_or_else(overflow)?;
                self.honey_line_ids.extend(line.id.clone());
            }
            ProductType::Other => {
                self.total_products = self
                    .total_products
                    .checked_add(quantity)
                    .ok_or_else(overflow)?;
            }
        }

        Ok(())
    }

    /// Jars counted from honey lines and jar bundles.
    pub fn total_jars(&self) -> u64 {
        self.total_jars
    }

    /// Products counted across every product-variant line.
    pub fn total_products(&self) -> u64 {
        self.total_products
    }

    /// Honey line identifiers, in cart order.
    pub fn honey_line_ids(&self) -> &[String] {
        &self.honey_line_ids
    }

    /// Jar bundle line identifiers, in cart order.
    pub fn jar_bundle_line_ids(&self) -> &[String] {
        &self.jar_bundle_line_ids
    }
}

fn line_label(line: &CartLine) -> String {
    line.id().unwrap_or_default().to_string()
}
