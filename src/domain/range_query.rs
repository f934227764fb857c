//! Range query parameters, capacity-bound resolution, and the computed
//! statistics summary.
//!
//! A [`RangeQuery`] carries the raw parameters of a statistics request.
//! The type itself imposes no ordering; [`RangeQuery::validate`] enforces
//! `from <= to` (and `min <= max` when both capacity bounds are present)
//! before any storage access happens.

use crate::error::GatewayError;

/// Parameters of a range-filtered statistics query.
///
/// `from`/`to` are inclusive postcode bounds and always required. The two
/// capacity bounds are independently optional; which combination is present
/// decides which storage filter the service invokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeQuery {
    /// Lower postcode bound (inclusive).
    pub from: i32,
    /// Upper postcode bound (inclusive).
    pub to: i32,
    /// Minimum watt capacity (inclusive), if any.
    pub min_capacity: Option<i64>,
    /// Maximum watt capacity (inclusive), if any.
    pub max_capacity: Option<i64>,
}

impl RangeQuery {
    /// Builds a query from its raw parameters.
    #[must_use]
    pub const fn new(
        from: i32,
        to: i32,
        min_capacity: Option<i64>,
        max_capacity: Option<i64>,
    ) -> Self {
        Self {
            from,
            to,
            min_capacity,
            max_capacity,
        }
    }

    /// Checks the query for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidPostcodeRange`] if `from > to`, or
    /// [`GatewayError::InvalidCapacityRange`] if both capacity bounds are
    /// present and `min > max`.
    pub fn validate(&self) -> Result<(), GatewayError> {
        if self.from > self.to {
            return Err(GatewayError::InvalidPostcodeRange {
                from: self.from,
                to: self.to,
            });
        }
        if let (Some(min), Some(max)) = (self.min_capacity, self.max_capacity)
            && min > max
        {
            return Err(GatewayError::InvalidCapacityRange { min, max });
        }
        Ok(())
    }

    /// Resolves the optional capacity bounds into a [`CapacityBounds`]
    /// variant, so the dispatch happens once instead of scattered
    /// `Option` checks.
    #[must_use]
    pub const fn capacity_bounds(&self) -> CapacityBounds {
        match (self.min_capacity, self.max_capacity) {
            (Some(min), Some(max)) => CapacityBounds::Both { min, max },
            (Some(min), None) => CapacityBounds::MinOnly { min },
            (None, Some(max)) => CapacityBounds::MaxOnly { max },
            (None, None) => CapacityBounds::Unbounded,
        }
    }
}

/// Which capacity bounds a [`RangeQuery`] carries.
///
/// Each variant corresponds to exactly one storage filter method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityBounds {
    /// Both bounds present: capacity in `[min, max]`.
    Both {
        /// Inclusive lower capacity bound.
        min: i64,
        /// Inclusive upper capacity bound.
        max: i64,
    },
    /// Only the lower bound present: capacity `>= min`.
    MinOnly {
        /// Inclusive lower capacity bound.
        min: i64,
    },
    /// Only the upper bound present: capacity `<= max`.
    MaxOnly {
        /// Inclusive upper capacity bound.
        max: i64,
    },
    /// No capacity filter.
    Unbounded,
}

/// Aggregate summary of the batteries matched by a range query.
#[derive(Debug, Clone, PartialEq)]
pub struct BatteryStatistics {
    /// Names of the matched batteries, sorted ascending.
    pub battery_names: Vec<String>,
    /// Sum of matched watt capacities.
    pub total_watt_capacity: i64,
    /// Arithmetic mean of matched capacities, rounded to two decimal
    /// places (half away from zero). `0.0` when nothing matched.
    pub average_watt_capacity: f64,
}

impl BatteryStatistics {
    /// Summary of an empty match set.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            battery_names: Vec::new(),
            total_watt_capacity: 0,
            average_watt_capacity: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_inverted_postcode_range() {
        let query = RangeQuery::new(3000, 2000, None, None);
        let result = query.validate();
        assert!(matches!(
            result,
            Err(GatewayError::InvalidPostcodeRange { from: 3000, to: 2000 })
        ));
    }

    #[test]
    fn validate_rejects_inverted_capacity_range() {
        let query = RangeQuery::new(2000, 3000, Some(500), Some(100));
        let result = query.validate();
        assert!(matches!(
            result,
            Err(GatewayError::InvalidCapacityRange { min: 500, max: 100 })
        ));
    }

    #[test]
    fn validate_accepts_equal_bounds() {
        assert!(RangeQuery::new(2000, 2000, Some(100), Some(100)).validate().is_ok());
    }

    #[test]
    fn validate_ignores_capacity_order_with_single_bound() {
        // Only one bound present: there is no ordering to enforce.
        assert!(RangeQuery::new(2000, 3000, Some(500), None).validate().is_ok());
        assert!(RangeQuery::new(2000, 3000, None, Some(100)).validate().is_ok());
    }

    #[test]
    fn capacity_bounds_resolves_all_four_variants() {
        assert_eq!(
            RangeQuery::new(0, 1, Some(10), Some(20)).capacity_bounds(),
            CapacityBounds::Both { min: 10, max: 20 }
        );
        assert_eq!(
            RangeQuery::new(0, 1, Some(10), None).capacity_bounds(),
            CapacityBounds::MinOnly { min: 10 }
        );
        assert_eq!(
            RangeQuery::new(0, 1, None, Some(20)).capacity_bounds(),
            CapacityBounds::MaxOnly { max: 20 }
        );
        assert_eq!(
            RangeQuery::new(0, 1, None, None).capacity_bounds(),
            CapacityBounds::Unbounded
        );
    }
}
