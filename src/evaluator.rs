//! Discount Evaluator
//!
//! Turns a cart snapshot into a [`DiscountDecision`]:
//!
//! 1. Carts with no lines get no discount.
//! 2. The lines are classified into jar and product totals.
//! 3. Nothing applies unless there are at least [`MIN_PRODUCTS`] products and a honey line.
//! 4. Honey lines get [`Percentage::TEN`] off.
//! 5. With at least [`FREE_SHIPPING_MIN_JARS`] jars, any shipping line is also free.
//!
//! Both discounts apply together. Evaluation never fails: unreadable or unexpected input
//! yields the empty decision.

use tracing::{debug, warn};

use crate::{
    cart::FunctionInput,
    classification::ClassifiedTotals,
    discounts::{Discount, DiscountDecision, Percentage, Target},
};

/// Minimum number of products before any discount applies.
pub const MIN_PRODUCTS: u64 = 4;

/// Minimum number of jars for free shipping.
pub const FREE_SHIPPING_MIN_JARS: u64 = 8;

/// Message for the honey line discount.
pub const HONEY_DISCOUNT_MESSAGE: &str = "10% off (4+ JARS)";

/// Message for the free shipping discount.
pub const FREE_SHIPPING_MESSAGE: &str = "Free shipping for 8+ jars";

/// Evaluate the discounts for a cart snapshot.
pub fn evaluate(input: &FunctionInput) -> DiscountDecision {
    let Some(lines) = input.lines() else {
        debug!("no cart lines; no discount");

        return DiscountDecision::empty();
    };

    let totals = match ClassifiedTotals::classify(lines) {
        Ok(totals) => totals,
        Err(err) => {
            warn!(error = %err, "cart lines could not be classified; no discount");

            return DiscountDecision::empty();
        }
    };

    debug!(
        lines = lines.len(),
        total_jars = totals.total_jars(),
        total_products = totals.total_products(),
        honey_lines = totals.honey_line_ids().len(),
        jar_bundle_lines = totals.jar_bundle_line_ids().len(),
        "classified cart"
    );

    decide(&totals)
}

/// Parse a JSON input document and evaluate it.
///
/// A document that cannot be parsed yields the empty decision.
pub fn evaluate_json(json: &str) -> DiscountDecision {
    match FunctionInput::from_json(json) {
        Ok(input) => evaluate(&input),
        Err(err) => {
            warn!(error = %err, "unreadable input document; no discount");

            DiscountDecision::empty()
        }
    }
}

/// Apply the discount rules to classified totals.
pub fn decide(totals: &ClassifiedTotals) -> DiscountDecision {
    if totals.total_products() < MIN_PRODUCTS || totals.honey_line_ids().is_empty() {
        return DiscountDecision::empty();
    }

    let honey = honey_discount(totals.honey_line_ids());

    let decision = if totals.total_jars() >= FREE_SHIPPING_MIN_JARS {
        DiscountDecision::all([honey, free_shipping()])
    } else {
        DiscountDecision::all([honey])
    };

    debug!(discounts = decision.discounts().len(), "discounts applied");

    decision
}

fn honey_discount(line_ids: &[String]) -> Discount {
    let targets: Vec<Target> = line_ids.iter().map(Target::cart_line).collect();

    Discount::new(targets, Percentage::TEN, HONEY_DISCOUNT_MESSAGE)
}

fn free_shipping() -> Discount {
    Discount::new(
        [Target::any_shipping_line()],
        Percentage::FULL,
        FREE_SHIPPING_MESSAGE,
    )
}
