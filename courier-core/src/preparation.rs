//! Per-restaurant food preparation delays.

use crate::{DeliveryError, StopRole};

/// Minutes a courier waits at each restaurant before food is ready.
///
/// Values are not validated on construction. [`PreparationTimes::validate`]
/// reports a negative delay when a route is scored, which disqualifies the
/// route rather than aborting the whole search.
///
/// # Examples
/// ```
/// use courier_core::{PreparationTimes, StopRole};
///
/// let prep = PreparationTimes::new(15.0, 10.0);
/// assert_eq!(prep.for_role(StopRole::Restaurant2), Ok(10.0));
/// assert_eq!(prep.for_role(StopRole::Customer1), Ok(0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreparationTimes {
    /// Delay at the first restaurant, in minutes.
    pub restaurant_1: f64,
    /// Delay at the second restaurant, in minutes.
    pub restaurant_2: f64,
}

impl PreparationTimes {
    /// Construct preparation times in minutes.
    #[must_use]
    pub const fn new(restaurant_1: f64, restaurant_2: f64) -> Self {
        Self {
            restaurant_1,
            restaurant_2,
        }
    }

    /// Check both delays, restaurant 1 first.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::InvalidPreparationTime`] naming the first
    /// restaurant whose delay is negative or not finite.
    ///
    /// # Examples
    /// ```
    /// use courier_core::{DeliveryError, PreparationTimes, StopRole};
    ///
    /// assert!(PreparationTimes::new(15.0, 10.0).validate().is_ok());
    /// assert_eq!(
    ///     PreparationTimes::new(15.0, -1.0).validate(),
    ///     Err(DeliveryError::InvalidPreparationTime {
    ///         role: StopRole::Restaurant2,
    ///         minutes: -1.0,
    ///     })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), DeliveryError> {
        self.for_role(StopRole::Restaurant1)?;
        self.for_role(StopRole::Restaurant2)?;
        Ok(())
    }

    /// Wait incurred on arrival at a stop with `role`.
    ///
    /// Customers never incur a wait.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::InvalidPreparationTime`] when `role` is a
    /// restaurant whose delay is negative or not finite.
    pub fn for_role(&self, role: StopRole) -> Result<f64, DeliveryError> {
        let minutes = match role {
            StopRole::Restaurant1 => self.restaurant_1,
            StopRole::Restaurant2 => self.restaurant_2,
            StopRole::Customer1 | StopRole::Customer2 => return Ok(0.0),
        };
        if minutes.is_finite() && minutes >= 0.0 {
            Ok(minutes)
        } else {
            Err(DeliveryError::InvalidPreparationTime { role, minutes })
        }
    }
}
