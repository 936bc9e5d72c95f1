//! Linear fee pass-through
//!
//! Fee = unit rate × quantity, in unsigned arithmetic with saturation at
//! the top of `u128`. No side effects; safe to call without authorization.

use warden_core::{GateResult, RateSource, TemplateId, VariantId};

/// Compute the fee for minting `quantity` units under (`template`,
/// `variant`). A zero quantity yields a zero fee regardless of rate.
pub fn compute_fee(
    rates: &dyn RateSource,
    template: TemplateId,
    variant: VariantId,
    quantity: u64,
) -> GateResult<u128> {
    let unit_rate = rates.unit_rate(template, variant)?;
    Ok(u128::from(quantity).saturating_mul(unit_rate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_core::{Address, GateError};

    struct OneRate(u128);

    impl RateSource for OneRate {
        fn unit_rate(&self, _template: TemplateId, _variant: VariantId) -> GateResult<u128> {
            Ok(self.0)
        }
    }

    struct NoRate;

    impl RateSource for NoRate {
        fn unit_rate(&self, template: TemplateId, _variant: VariantId) -> GateResult<u128> {
            Err(GateError::invalid_input(format!("no rate for {template}")))
        }
    }

    fn fields() -> (TemplateId, VariantId) {
        (TemplateId(Address::from_bytes([2; 20])), VariantId(7))
    }

    #[test]
    fn linear_in_quantity() {
        let rates = OneRate(25);
        let (t, v) = fields();
        let unit = compute_fee(&rates, t, v, 1).unwrap();
        for quantity in [0u64, 1, 2, 5, 1000] {
            assert_eq!(
                compute_fee(&rates, t, v, quantity).unwrap(),
                u128::from(quantity) * unit
            );
        }
    }

    #[test]
    fn zero_quantity_is_free() {
        let rates = OneRate(u128::MAX);
        let (t, v) = fields();
        assert_eq!(compute_fee(&rates, t, v, 0).unwrap(), 0);
    }

    #[test]
    fn saturates_instead_of_wrapping() {
        let rates = OneRate(u128::MAX);
        let (t, v) = fields();
        assert_eq!(compute_fee(&rates, t, v, 2).unwrap(), u128::MAX);
    }

    #[test]
    fn unknown_rate_propagates() {
        let (t, v) = fields();
        assert!(matches!(
            compute_fee(&NoRate, t, v, 1),
            Err(GateError::InvalidInput { .. })
        ));
    }
}
