//! Option payoffs and cash-flow discounting.
//!
//! - `payoff`: call/put settlement value at maturity
//! - `discount`: present value of a cash flow under a flat continuously
//!   compounded rate

pub mod discount;
pub mod payoff;

pub use discount::{discount, discount_factor};
pub use payoff::{intrinsic, payoff};
