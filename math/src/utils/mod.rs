// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crate::field::BaseElement;

#[cfg(test)]
mod tests;

// MATH FUNCTIONS
// ================================================================================================

/// Returns a vector containing successive powers of a given base.
///
/// More precisely, for base `b`, generates a vector with values [1, b, b^2, ..., b^(n-1)].
pub fn get_power_series(b: BaseElement, n: usize) -> Vec<BaseElement> {
    let mut result = Vec::with_capacity(n);
    fill_power_series(&mut result, b, BaseElement::ONE, n);
    result
}

/// Returns a vector containing successive powers of a given base offset by the specified
/// value.
///
/// More precisely, for base `b` and offset `s`, generates a vector with values
/// [s, s * b, s * b^2, ..., s * b^(n-1)].
pub fn get_power_series_with_offset(b: BaseElement, s: BaseElement, n: usize) -> Vec<BaseElement> {
    let mut result = Vec::with_capacity(n);
    fill_power_series(&mut result, b, s, n);
    result
}

/// Computes multiplicative inverses of all slice elements using batch inversion method.
///
/// Any ZERO elements are skipped; their position in the result is set to ZERO.
pub fn batch_inversion(values: &[BaseElement]) -> Vec<BaseElement> {
    let mut result = vec![BaseElement::ZERO; values.len()];

    let mut last = BaseElement::ONE;
    for (result, &value) in result.iter_mut().zip(values.iter()) {
        *result = last;
        if value != BaseElement::ZERO {
            last *= value;
        }
    }

    last = last.inv();

    for i in (0..values.len()).rev() {
        if values[i] == BaseElement::ZERO {
            result[i] = BaseElement::ZERO;
        } else {
            result[i] *= last;
            last *= values[i];
        }
    }

    result
}

/// Returns base 2 logarithm of `n`, where `n` is a power of two.
///
/// # Panics
/// Panics if `n` is not a power of two.
pub fn log2(n: usize) -> u32 {
    assert!(n.is_power_of_two(), "n must be a power of two");
    n.trailing_zeros()
}

/// Returns a copy of the provided slice with all high-order ZERO coefficients removed.
pub fn remove_leading_zeros(values: &[BaseElement]) -> Vec<BaseElement> {
    for i in (0..values.len()).rev() {
        if values[i] != BaseElement::ZERO {
            return values[..=i].to_vec();
        }
    }
    vec![]
}

// HELPER FUNCTIONS
// ------------------------------------------------------------------------------------------------

fn fill_power_series(result: &mut Vec<BaseElement>, base: BaseElement, start: BaseElement, n: usize) {
    let mut power = start;
    for _ in 0..n {
        result.push(power);
        power *= base;
    }
}
