//! Ordering generation for candidate routes.

use courier_core::route::STOP_COUNT;
use courier_core::{DeliveryError, Route, Stop};

/// Iterator over every ordering of `0..N` in lexicographic order.
///
/// # Examples
/// ```rust
/// use courier_solver::IndexPermutations;
///
/// let orders: Vec<[usize; 3]> = IndexPermutations::new().collect();
/// assert_eq!(orders.len(), 6);
/// assert_eq!(orders.first(), Some(&[0, 1, 2]));
/// assert_eq!(orders.get(1), Some(&[0, 2, 1]));
/// assert_eq!(orders.last(), Some(&[2, 1, 0]));
/// ```
#[derive(Debug, Clone)]
pub struct IndexPermutations<const N: usize> {
    next: Option<[usize; N]>,
}

impl<const N: usize> IndexPermutations<N> {
    /// Start from the identity ordering.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next: Some(std::array::from_fn(|index| index)),
        }
    }
}

impl<const N: usize> Default for IndexPermutations<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Iterator for IndexPermutations<N> {
    type Item = [usize; N];

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let mut successor = current;
        self.next = advance(&mut successor).then_some(successor);
        Some(current)
    }
}

/// Rearrange `order` into its lexicographic successor.
///
/// Returns `false`, leaving `order` untouched, when it is already the last
/// ordering.
fn advance(order: &mut [usize]) -> bool {
    let Some(pivot) = order
        .windows(2)
        .rposition(|pair| matches!(pair, [left, right] if left < right))
    else {
        return false;
    };
    let Some(&pivot_value) = order.get(pivot) else {
        return false;
    };
    let Some(swap_with) = order.iter().rposition(|&value| value > pivot_value) else {
        return false;
    };
    order.swap(pivot, swap_with);
    if let Some(tail) = order.get_mut(pivot + 1..) {
        tail.reverse();
    }
    true
}

/// Produce every ordering of `stops`: 4! = 24 routes.
///
/// Routes are emitted in lexicographic order of input positions, so the
/// first route visits the stops exactly as supplied. Stops sharing an
/// address are not deduplicated.
///
/// # Errors
///
/// Returns [`DeliveryError::InvalidRoute`] when two stops carry the same
/// role.
///
/// # Examples
/// ```rust
/// use courier_core::test_support::sample_request;
/// use courier_solver::generate_routes;
///
/// # fn main() -> Result<(), courier_core::DeliveryError> {
/// let routes = generate_routes(&sample_request().stops())?;
/// assert_eq!(routes.len(), 24);
/// # Ok(())
/// # }
/// ```
pub fn generate_routes(stops: &[Stop; STOP_COUNT]) -> Result<Vec<Route>, DeliveryError> {
    IndexPermutations::<STOP_COUNT>::new()
        .map(|order| Route::permuted(stops, order))
        .collect()
}
