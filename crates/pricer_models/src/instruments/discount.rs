//! Continuous-compounding discounting.

/// Discount factor `e^(-rT)`.
///
/// Exactly 1 when `maturity == 0`.
///
/// # Examples
/// ```
/// use pricer_models::instruments::discount_factor;
///
/// assert_eq!(discount_factor(0.05, 0.0), 1.0);
/// assert!((discount_factor(0.05, 1.0) - 0.951229424500714).abs() < 1e-15);
/// ```
#[inline]
pub fn discount_factor(rate: f64, maturity: f64) -> f64 {
    (-rate * maturity).exp()
}

/// Present value of `value` paid at `maturity`: `value · e^(-rT)`.
///
/// # Examples
/// ```
/// use pricer_models::instruments::discount;
///
/// assert!((discount(100.0, 0.05, 1.0) - 95.1229424500714).abs() < 1e-12);
/// ```
#[inline]
pub fn discount(value: f64, rate: f64, maturity: f64) -> f64 {
    value * discount_factor(rate, maturity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_maturity_is_identity() {
        assert_eq!(discount(12.34, 0.07, 0.0), 12.34);
        assert_eq!(discount(12.34, -0.07, 0.0), 12.34);
    }

    #[test]
    fn test_negative_rate_grows_value() {
        assert!(discount(100.0, -0.01, 1.0) > 100.0);
    }

    #[test]
    fn test_discount_is_linear() {
        let a = discount(3.0, 0.04, 2.0);
        let b = discount(5.0, 0.04, 2.0);
        assert_relative_eq!(a + b, discount(8.0, 0.04, 2.0), epsilon = 1e-12);
    }
}
