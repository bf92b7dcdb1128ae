// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use rand::thread_rng;

use super::{BaseElement, M};

// BASIC ALGEBRA
// ================================================================================================

#[test]
fn add() {
    // identity
    let r = BaseElement::random(&mut thread_rng());
    assert_eq!(r, r + BaseElement::ZERO);

    // test addition within bounds
    assert_eq!(BaseElement::from(5u8), BaseElement::from(2u8) + BaseElement::from(3u8));

    // test overflow
    let t = BaseElement::new(M - 1);
    assert_eq!(BaseElement::ZERO, t + BaseElement::ONE);
    assert_eq!(BaseElement::ONE, t + BaseElement::from(2u8));
}

#[test]
fn sub() {
    // identity
    let r = BaseElement::random(&mut thread_rng());
    assert_eq!(r, r - BaseElement::ZERO);

    // test subtraction within bounds
    assert_eq!(BaseElement::from(2u8), BaseElement::from(5u8) - BaseElement::from(3u8));

    // test underflow
    let expected = BaseElement::new(M - 2);
    assert_eq!(expected, BaseElement::from(3u8) - BaseElement::from(5u8));
}

#[test]
fn neg() {
    assert_eq!(BaseElement::ZERO, -BaseElement::ZERO);
    assert_eq!(BaseElement::new(M - 1), -BaseElement::ONE);

    let r = BaseElement::random(&mut thread_rng());
    assert_eq!(BaseElement::ZERO, r + (-r));
}

#[test]
fn mul() {
    // identity
    let r = BaseElement::random(&mut thread_rng());
    assert_eq!(BaseElement::ZERO, r * BaseElement::ZERO);
    assert_eq!(r, r * BaseElement::ONE);

    // test multiplication within bounds
    assert_eq!(BaseElement::from(15u8), BaseElement::from(5u8) * BaseElement::from(3u8));

    // test overflow
    let t = BaseElement::new(M - 1);
    assert_eq!(BaseElement::ONE, t * t);
    assert_eq!(BaseElement::new(M - 2), t * BaseElement::from(2u8));
    assert_eq!(BaseElement::new(M - 4), t * BaseElement::from(4u8));

    let t = BaseElement::new((M + 1) / 2);
    assert_eq!(BaseElement::ONE, t * BaseElement::from(2u8));
}

#[test]
fn exp() {
    let a = BaseElement::ZERO;
    assert_eq!(a.exp(0), BaseElement::ONE);
    assert_eq!(a.exp(1), BaseElement::ZERO);

    let a = BaseElement::ONE;
    assert_eq!(a.exp(0), BaseElement::ONE);
    assert_eq!(a.exp(1), BaseElement::ONE);
    assert_eq!(a.exp(3), BaseElement::ONE);

    let a = BaseElement::random(&mut thread_rng());
    assert_eq!(a.exp(3), a * a * a);
}

#[test]
fn inv() {
    // identity
    assert_eq!(BaseElement::ONE, BaseElement::ONE.inv());

    let mut rng = thread_rng();
    for _ in 0..100 {
        let r = BaseElement::random(&mut rng);
        if r == BaseElement::ZERO {
            continue;
        }
        assert_eq!(BaseElement::ONE, r * r.inv());
    }
}

#[test]
#[should_panic]
fn inv_of_zero() {
    let _ = BaseElement::ZERO.inv();
}

#[test]
fn div() {
    let a = BaseElement::new(42);
    let b = BaseElement::new(13);
    assert_eq!(a, a / b * b);
}

// FIELD CONSTANTS
// ================================================================================================

#[test]
fn generator_has_full_order() {
    let g = BaseElement::GENERATOR;
    // the order of g divides M - 1; it is exactly M - 1 iff g^((M-1)/q) != 1 for every
    // prime q dividing M - 1; here M - 1 = 3 * 2^30
    assert_eq!(BaseElement::ONE, g.exp(M - 1));
    assert_ne!(BaseElement::ONE, g.exp((M - 1) / 2));
    assert_ne!(BaseElement::ONE, g.exp((M - 1) / 3));
}

#[test]
fn two_adic_root_of_unity() {
    let root = BaseElement::TWO_ADIC_ROOT_OF_UNITY;
    assert_eq!(BaseElement::ONE, root.exp(1 << BaseElement::TWO_ADICITY));
    assert_ne!(BaseElement::ONE, root.exp(1 << (BaseElement::TWO_ADICITY - 1)));
}

// SAMPLING AND SERIALIZATION
// ================================================================================================

#[test]
fn random_is_canonical() {
    let mut rng = thread_rng();
    for _ in 0..1000 {
        let r = BaseElement::random(&mut rng);
        assert!(r.as_int() < M);
    }
}

#[test]
fn display_is_decimal() {
    assert_eq!("0", BaseElement::ZERO.to_string());
    assert_eq!("3141592", BaseElement::new(3141592).to_string());
    assert_eq!("2", BaseElement::new(M + 2).to_string());
}

#[test]
fn new_reduces_value() {
    assert_eq!(BaseElement::ZERO, BaseElement::new(M));
    assert_eq!(BaseElement::ONE, BaseElement::new(M + 1));
}
