// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Basic polynomial operations.
//!
//! A polynomial is represented as a slice of field elements in ascending coefficient
//! order; the zero polynomial is an empty slice or a slice of zeros. Functions which
//! produce polynomials do not strip high-order zero coefficients; use
//! [remove_leading_zeros](crate::remove_leading_zeros) to bring a result into canonical
//! form when the exact length matters.

use core::mem;

use crate::{field::BaseElement, utils as crate_utils};


// POLYNOMIAL EVALUATION
// ================================================================================================

/// Evaluates polynomial `p` at coordinate `x` using Horner's method.
pub fn eval(p: &[BaseElement], x: BaseElement) -> BaseElement {
    p.iter().rev().fold(BaseElement::ZERO, |acc, &coeff| acc * x + coeff)
}

/// Evaluates polynomial `p` at all coordinates in the `xs` slice.
pub fn eval_many(p: &[BaseElement], xs: &[BaseElement]) -> Vec<BaseElement> {
    xs.iter().map(|&x| eval(p, x)).collect()
}

// POLYNOMIAL INTERPOLATION
// ================================================================================================

/// Uses Lagrange interpolation to build a polynomial from X and Y coordinates.
///
/// The returned polynomial has degree smaller than the number of provided points and
/// passes through all of them. X coordinates must be distinct.
///
/// # Panics
/// Panics if:
/// * No points were provided.
/// * The number of X and Y coordinates is not the same.
pub fn interpolate(
    xs: &[BaseElement],
    ys: &[BaseElement],
    remove_leading_zeros: bool,
) -> Vec<BaseElement> {
    assert!(!xs.is_empty(), "cannot interpolate a polynomial from an empty set of points");
    assert_eq!(xs.len(), ys.len(), "number of X and Y coordinates must be the same");

    let roots = get_zero_roots(xs);
    let mut numerators: Vec<Vec<BaseElement>> = Vec::with_capacity(xs.len());
    for &xcoord in xs {
        numerators.push(syn_div(&roots, 1, xcoord));
    }

    let mut denominators: Vec<BaseElement> = Vec::with_capacity(xs.len());
    for i in 0..xs.len() {
        denominators.push(eval(&numerators[i], xs[i]));
    }
    let denominators = crate_utils::batch_inversion(&denominators);

    let mut result = vec![BaseElement::ZERO; xs.len()];
    for i in 0..xs.len() {
        if ys[i] != BaseElement::ZERO {
            let y_slice = ys[i] * denominators[i];
            for (j, res) in result.iter_mut().enumerate() {
                if numerators[i][j] != BaseElement::ZERO {
                    *res += numerators[i][j] * y_slice;
                }
            }
        }
    }

    if remove_leading_zeros {
        crate_utils::remove_leading_zeros(&result)
    } else {
        result
    }
}

// POLYNOMIAL MATH OPERATIONS
// ================================================================================================

/// Adds polynomial `a` to polynomial `b`.
pub fn add(a: &[BaseElement], b: &[BaseElement]) -> Vec<BaseElement> {
    let result_len = core::cmp::max(a.len(), b.len());
    let mut result = Vec::with_capacity(result_len);
    for i in 0..result_len {
        let c1 = if i < a.len() { a[i] } else { BaseElement::ZERO };
        let c2 = if i < b.len() { b[i] } else { BaseElement::ZERO };
        result.push(c1 + c2);
    }
    result
}

/// Subtracts polynomial `b` from polynomial `a`.
pub fn sub(a: &[BaseElement], b: &[BaseElement]) -> Vec<BaseElement> {
    let result_len = core::cmp::max(a.len(), b.len());
    let mut result = Vec::with_capacity(result_len);
    for i in 0..result_len {
        let c1 = if i < a.len() { a[i] } else { BaseElement::ZERO };
        let c2 = if i < b.len() { b[i] } else { BaseElement::ZERO };
        result.push(c1 - c2);
    }
    result
}

/// Multiplies polynomial `a` by polynomial `b`.
pub fn mul(a: &[BaseElement], b: &[BaseElement]) -> Vec<BaseElement> {
    let result_len = a.len() + b.len() - 1;
    let mut result = vec![BaseElement::ZERO; result_len];
    for i in 0..a.len() {
        for j in 0..b.len() {
            result[i + j] += a[i] * b[j];
        }
    }
    result
}

/// Multiplies every coefficient of polynomial `p` by constant `k`.
pub fn mul_by_const(p: &[BaseElement], k: BaseElement) -> Vec<BaseElement> {
    let mut result = Vec::with_capacity(p.len());
    for &coeff in p {
        result.push(coeff * k);
    }
    result
}

/// Returns a polynomial equal to p(k * x).
///
/// This is computed by multiplying the i-th coefficient of `p` by k^i, and is used to
/// evaluate trace polynomials at shifted positions.
pub fn scale(p: &[BaseElement], k: BaseElement) -> Vec<BaseElement> {
    let mut power = BaseElement::ONE;
    p.iter()
        .map(|&coeff| {
            let result = coeff * power;
            power *= k;
            result
        })
        .collect()
}

/// Divides polynomial `a` by polynomial `b`; if the polynomials don't divide evenly,
/// the remainder is ignored.
///
/// # Panics
/// Panics if:
/// * `b` has a higher degree than `a`;
/// * `b` is the zero polynomial.
pub fn div(a: &[BaseElement], b: &[BaseElement]) -> Vec<BaseElement> {
    let mut apos = degree_of(a);
    let mut a = a.to_vec();

    let bpos = degree_of(b);
    assert!(apos >= bpos, "cannot divide by polynomial of higher degree");
    if bpos == 0 {
        assert!(b[0] != BaseElement::ZERO, "cannot divide polynomial by zero");
    }

    let mut result = vec![BaseElement::ZERO; apos - bpos + 1];
    for i in (0..result.len()).rev() {
        let quot = a[apos] / b[bpos];
        result[i] = quot;
        for j in (0..bpos).rev() {
            a[i + j] -= b[j] * quot;
        }
        apos = apos.wrapping_sub(1);
    }

    result
}

/// Divides polynomial `p` by polynomial (x^`a` - `b`) using synthetic division method;
/// if the polynomials don't divide evenly, the remainder is ignored.
///
/// # Panics
/// Panics if:
/// * `a` is zero;
/// * `b` is zero;
pub fn syn_div(p: &[BaseElement], a: usize, b: BaseElement) -> Vec<BaseElement> {
    let mut result = p.to_vec();
    syn_div_in_place(&mut result, a, b);
    result
}

/// Divides polynomial `p` by polynomial (x^`a` - `b`) using synthetic division method
/// and stores the result in `p`; if the polynomials don't divide evenly, the remainder
/// is ignored.
///
/// # Panics
/// Panics if:
/// * `a` is zero;
/// * `b` is zero;
pub fn syn_div_in_place(p: &mut [BaseElement], a: usize, b: BaseElement) {
    assert!(a != 0, "divisor degree cannot be zero");
    assert!(b != BaseElement::ZERO, "constant cannot be zero");

    if a == 1 {
        // if we are dividing by (x - `b`), we can use a single variable to keep track
        // of the remainder; this way, we can avoid shifting the values in the slice later
        let mut c = BaseElement::ZERO;
        for coeff in p.iter_mut().rev() {
            *coeff += b * c;
            mem::swap(coeff, &mut c);
        }
    } else {
        // if we are dividing by a polynomial of higher power, we need to keep track of the
        // full remainder. we do that in place, but then need to shift the values at the end
        // to discard the remainder
        let degree_offset = p.len() - a;
        if b == BaseElement::ONE {
            // if `b` is 1, no need to multiply by `b` in every iteration of the loop
            for i in (0..degree_offset).rev() {
                let t = p[i + a];
                p[i] += t;
            }
        } else {
            for i in (0..degree_offset).rev() {
                let t = p[i + a] * b;
                p[i] += t;
            }
        }
        // discard the remainder
        p.copy_within(a.., 0);
        p[degree_offset..].fill(BaseElement::ZERO);
    }
}

// DEGREE INFERENCE
// ================================================================================================

/// Returns degree of the polynomial `poly`.
pub fn degree_of(poly: &[BaseElement]) -> usize {
    for i in (0..poly.len()).rev() {
        if poly[i] != BaseElement::ZERO {
            return i;
        }
    }
    0
}

// HELPER FUNCTIONS
// ================================================================================================

/// Builds the coefficients of the vanishing polynomial of the provided points, i.e.
/// the product of (x - xs[i]) over all i.
fn get_zero_roots(xs: &[BaseElement]) -> Vec<BaseElement> {
    let mut n = xs.len() + 1;
    let mut result = vec![BaseElement::ZERO; n];

    n -= 1;
    result[n] = BaseElement::ONE;

    for i in 0..xs.len() {
        n -= 1;
        result[n] = BaseElement::ZERO;
        for j in n..xs.len() {
            result[j] = result[j] - result[j + 1] * xs[i];
        }
    }

    result
}
