use std::ops::RangeInclusive;

use tally_utilities::debug_trace;

use crate::Count;

/// Returns `l * (l + 1) * ... * u`, or one when `l > u`.
pub(crate) fn product(l: Count, u: Count) -> Count {
    (l..=u).fold(1, |p: Count, factor| p.wrapping_mul(factor))
}

/// Returns `l / 1 * (l + 1) / 2 * ... * u / (u - l + 1)`, or one when `l > u`.
///
/// The division is applied after every multiplication, the result of step `k`
/// is the binomial coefficient `C(l + k, k + 1)` so it is always exact.
pub(crate) fn divided_product(l: Count, u: Count) -> Count {
    debug_trace!("divided_product [{l}, {u}]");
    DividedProductSteps::new(l, u).last().unwrap_or(1)
}

/// Iterator over the partial results of [`divided_product`].
pub(crate) struct DividedProductSteps {
    factors: RangeInclusive<Count>,
    divisor: Count,
    accumulator: Count,
}

impl DividedProductSteps {
    pub(crate) fn new(l: Count, u: Count) -> Self {
        Self {
            factors: l..=u,
            divisor: 0,
            accumulator: 1,
        }
    }
}

impl Iterator for DividedProductSteps {
    type Item = Count;

    fn next(&mut self) -> Option<Count> {
        let factor = self.factors.next()?;
        self.divisor = self.divisor.wrapping_add(1);
        self.accumulator = self.accumulator.wrapping_mul(factor) / self.divisor;
        Some(self.accumulator)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.factors.size_hint()
    }
}
