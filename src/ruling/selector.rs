//! Weighted random selection

use rand::Rng;

/// Pick an item with probability proportional to its weight
///
/// Returns `None` for an empty list or when no weight is positive.
/// Non-positive weights never win.
#[inline]
pub fn weighted_choice<'a, T, R: Rng + ?Sized>(items: &'a [(T, f64)], rng: &mut R) -> Option<&'a T> {
    let total_weight: f64 = items.iter().map(|(_, w)| w.max(0.0)).sum();
    if total_weight <= 0.0 {
        return None;
    }

    let mut random_value = rng.gen::<f64>() * total_weight;

    for (item, weight) in items {
        if *weight <= 0.0 {
            continue;
        }
        random_value -= weight;
        if random_value <= 0.0 {
            return Some(item);
        }
    }

    // Float rounding fallback: last positively weighted item
    items.iter().rev().find(|(_, w)| *w > 0.0).map(|(item, _)| item)
}
