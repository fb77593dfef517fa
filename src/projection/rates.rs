//! Conversion of annual percentage inputs to the net monthly compounding rate

/// Monthly rate used for a total (or worse) annual loss
pub const TOTAL_LOSS_MONTHLY_RATE: f64 = -1.0;

/// Net annual rate (decimal) after applying the fee as a haircut on the gross growth factor.
///
/// `(1 + gross/100) * (1 - fee/100) - 1`. Both inputs are percentages.
pub fn net_annual_return(gross_annual_rate: f64, annual_fee_rate: f64) -> f64 {
    (1.0 + gross_annual_rate / 100.0) * (1.0 - annual_fee_rate / 100.0) - 1.0
}

/// Geometric monthly equivalent of a net annual rate.
///
/// A growth factor of zero or below (annual loss of 100% or more) has no real
/// twelfth root, so it maps to exactly -1.
pub fn monthly_rate(net_annual_rate: f64) -> f64 {
    let base = 1.0 + net_annual_rate;
    if base <= 0.0 {
        return TOTAL_LOSS_MONTHLY_RATE;
    }
    base.powf(1.0 / 12.0) - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_net_annual_return_no_fee() {
        assert_relative_eq!(net_annual_return(5.0, 0.0), 0.05, epsilon = 1e-15);
        assert_eq!(net_annual_return(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_fee_is_multiplicative_haircut() {
        // 1.07 * 0.99 - 1, not 0.07 - 0.01
        let net = net_annual_return(7.0, 1.0);
        assert_relative_eq!(net, 0.0593, epsilon = 1e-12);
        assert!((net - 0.06).abs() > 1e-4);
    }

    #[test]
    fn test_monthly_rate_compounds_back_to_annual() {
        let r = monthly_rate(0.06);
        assert_relative_eq!((1.0 + r).powi(12), 1.06, epsilon = 1e-12);
        assert!(r < 0.06 / 12.0);
    }

    #[test]
    fn test_monthly_rate_zero() {
        assert_eq!(monthly_rate(0.0), 0.0);
    }

    #[test]
    fn test_monthly_rate_negative() {
        let r = monthly_rate(-0.2);
        assert!(r < 0.0 && r > -1.0);
        assert_relative_eq!((1.0 + r).powi(12), 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_total_loss_maps_to_minus_one() {
        assert_eq!(monthly_rate(-1.0), TOTAL_LOSS_MONTHLY_RATE);
        assert_eq!(monthly_rate(-1.5), TOTAL_LOSS_MONTHLY_RATE);
        assert_eq!(monthly_rate(net_annual_return(-100.0, 0.0)), -1.0);
        // A 100% fee wipes out any gross return
        assert_eq!(monthly_rate(net_annual_return(12.0, 100.0)), -1.0);
    }
}
