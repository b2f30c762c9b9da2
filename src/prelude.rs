//! Bess Discount prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartLine, FunctionInput, InputError, Merchandise, ProductType, ProductVariant},
    classification::{ClassificationError, ClassifiedTotals},
    discounts::{
        Discount, DiscountApplicationStrategy, DiscountDecision, DiscountValue, Percentage,
        PercentageError, Target,
    },
    evaluator::{evaluate, evaluate_json},
};
