//! Bess Discount
//!
//! Checkout discount function for honey jars. Given a cart snapshot it decides whether honey
//! lines get 10% off and whether shipping is free, and returns the decision for the host's
//! discount engine to apply.

pub mod cart;
pub mod classification;
pub mod discounts;
pub mod evaluator;
pub mod fixtures;
pub mod host;
pub mod prelude;
