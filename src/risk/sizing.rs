//! Position sizing
//!
//! Turns an alert's sizing mode into an order quantity. Fixed quantities
//! pass through verbatim; percentage sizing is computed against a fresh
//! equity snapshot. All arithmetic stays in `Decimal`.

use crate::alert::Sizing;
use crate::config::SizingConfig;
use crate::exchange::BalanceSnapshot;
use crate::relay::RelayError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Converts a sizing mode into an order quantity
#[derive(Debug, Clone, Default)]
pub struct PositionSizer {
    /// Instrument quantity step; percentage-derived quantities are
    /// truncated down to a multiple of this
    qty_step: Option<Decimal>,
}

impl PositionSizer {
    pub fn new(qty_step: Option<Decimal>) -> Self {
        Self { qty_step }
    }

    /// Create from SizingConfig
    pub fn from_config(config: &SizingConfig) -> Self {
        Self {
            qty_step: config.qty_step,
        }
    }

    /// Compute the order quantity.
    ///
    /// Fixed quantities are forwarded unchanged (validated > 0).
    /// Percentage sizing requires a balance snapshot and a percentage in
    /// (0, 100]; the result is `equity × pct / 100`, truncated to the
    /// configured step. A quantity that ends up ≤ 0 is invalid.
    pub fn size(
        &self,
        sizing: &Sizing,
        balance: Option<&BalanceSnapshot>,
    ) -> Result<Decimal, RelayError> {
        let quantity = match sizing {
            Sizing::FixedQuantity(qty) => {
                if *qty <= Decimal::ZERO {
                    return Err(RelayError::InvalidSizing(format!(
                        "quantity must be positive, got {}",
                        qty
                    )));
                }
                return Ok(*qty);
            }
            Sizing::PercentOfEquity(pct) => {
                if *pct <= Decimal::ZERO || *pct > dec!(100) {
                    return Err(RelayError::InvalidSizing(format!(
                        "percentage must be in (0, 100], got {}",
                        pct
                    )));
                }
                let snapshot = balance.ok_or_else(|| {
                    RelayError::InvalidSizing(
                        "percentage sizing requires a balance snapshot".to_string(),
                    )
                })?;
                snapshot.equity * pct / dec!(100)
            }
        };

        let quantity = match self.qty_step {
            Some(step) if step > Decimal::ZERO => (quantity / step).floor() * step,
            _ => quantity,
        };

        if quantity <= Decimal::ZERO {
            return Err(RelayError::InvalidSizing(format!(
                "computed quantity is not positive: {}",
                quantity
            )));
        }

        Ok(quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(equity: Decimal) -> BalanceSnapshot {
        BalanceSnapshot {
            currency: "USDT".to_string(),
            equity,
        }
    }

    #[test]
    fn test_fixed_quantity_unchanged() {
        let sizer = PositionSizer::new(Some(dec!(0.5)));

        // Fixed quantities bypass quantization entirely
        let qty = sizer
            .size(&Sizing::FixedQuantity(dec!(1.23)), None)
            .unwrap();
        assert_eq!(qty, dec!(1.23));
    }

    #[test]
    fn test_fixed_quantity_must_be_positive() {
        let sizer = PositionSizer::default();
        assert!(sizer.size(&Sizing::FixedQuantity(dec!(0)), None).is_err());
        assert!(sizer.size(&Sizing::FixedQuantity(dec!(-1)), None).is_err());
    }

    #[test]
    fn test_percentage_of_equity() {
        let sizer = PositionSizer::default();

        // 10% of 1000 = 100
        let qty = sizer
            .size(
                &Sizing::PercentOfEquity(dec!(10)),
                Some(&snapshot(dec!(1000))),
            )
            .unwrap();
        assert_eq!(qty, dec!(100));
    }

    #[test]
    fn test_percentage_full_equity() {
        let sizer = PositionSizer::default();
        let qty = sizer
            .size(
                &Sizing::PercentOfEquity(dec!(100)),
                Some(&snapshot(dec!(250.5))),
            )
            .unwrap();
        assert_eq!(qty, dec!(250.5));
    }

    #[test]
    fn test_percentage_out_of_range() {
        let sizer = PositionSizer::default();
        let balance = snapshot(dec!(1000));

        for pct in [dec!(0), dec!(-5), dec!(100.01), dec!(150)] {
            let result = sizer.size(&Sizing::PercentOfEquity(pct), Some(&balance));
            assert!(
                matches!(result, Err(RelayError::InvalidSizing(_))),
                "{}",
                pct
            );
        }
    }

    #[test]
    fn test_percentage_requires_snapshot() {
        let sizer = PositionSizer::default();
        let result = sizer.size(&Sizing::PercentOfEquity(dec!(10)), None);
        assert!(matches!(result, Err(RelayError::InvalidSizing(_))));
    }

    #[test]
    fn test_percentage_zero_equity_rejected() {
        let sizer = PositionSizer::default();
        let result = sizer.size(&Sizing::PercentOfEquity(dec!(10)), Some(&snapshot(dec!(0))));
        assert!(matches!(result, Err(RelayError::InvalidSizing(_))));
    }

    #[test]
    fn test_quantization_truncates_down() {
        let sizer = PositionSizer::new(Some(dec!(0.001)));

        // 1.5% of 1234.56 = 18.5184, truncated to 18.518
        let qty = sizer
            .size(
                &Sizing::PercentOfEquity(dec!(1.5)),
                Some(&snapshot(dec!(1234.56))),
            )
            .unwrap();
        assert_eq!(qty, dec!(18.518));
    }

    #[test]
    fn test_quantization_to_zero_rejected() {
        let sizer = PositionSizer::new(Some(dec!(1)));

        // 1% of 50 = 0.5, truncated to 0 by a step of 1
        let result = sizer.size(&Sizing::PercentOfEquity(dec!(1)), Some(&snapshot(dec!(50))));
        assert!(matches!(result, Err(RelayError::InvalidSizing(_))));
    }

    #[test]
    fn test_from_config() {
        let sizer = PositionSizer::from_config(&SizingConfig {
            qty_step: Some(dec!(0.01)),
        });
        let qty = sizer
            .size(
                &Sizing::PercentOfEquity(dec!(10)),
                Some(&snapshot(dec!(123.456))),
            )
            .unwrap();
        assert_eq!(qty, dec!(12.34));
    }
}
