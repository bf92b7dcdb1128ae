// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use rand::thread_rng;

use super::BaseElement;

#[test]
fn get_power_series() {
    let n = 64;
    let b = BaseElement::new(3);

    let expected = (0..n).map(|p| b.exp(p as u64)).collect::<Vec<_>>();

    let actual = super::get_power_series(b, n);
    assert_eq!(expected, actual);
}

#[test]
fn get_power_series_with_offset() {
    let n = 64;
    let b = BaseElement::new(3);
    let s = BaseElement::new(7);

    let expected = (0..n).map(|p| s * b.exp(p as u64)).collect::<Vec<_>>();

    let actual = super::get_power_series_with_offset(b, s, n);
    assert_eq!(expected, actual);
}

#[test]
fn batch_inversion() {
    let mut rng = thread_rng();
    let values = (0..100).map(|_| BaseElement::random(&mut rng)).collect::<Vec<_>>();

    let inverses = super::batch_inversion(&values);
    for (&value, &inverse) in values.iter().zip(inverses.iter()) {
        if value == BaseElement::ZERO {
            assert_eq!(BaseElement::ZERO, inverse);
        } else {
            assert_eq!(value.inv(), inverse);
        }
    }
}

#[test]
fn batch_inversion_with_zeros() {
    let values = vec![
        BaseElement::new(2),
        BaseElement::ZERO,
        BaseElement::new(3),
        BaseElement::ZERO,
    ];
    let inverses = super::batch_inversion(&values);
    assert_eq!(BaseElement::new(2).inv(), inverses[0]);
    assert_eq!(BaseElement::ZERO, inverses[1]);
    assert_eq!(BaseElement::new(3).inv(), inverses[2]);
    assert_eq!(BaseElement::ZERO, inverses[3]);
}

#[test]
fn log2() {
    assert_eq!(0, super::log2(1));
    assert_eq!(1, super::log2(2));
    assert_eq!(10, super::log2(1024));
    assert_eq!(13, super::log2(8192));
}

#[test]
#[should_panic]
fn log2_not_power_of_two() {
    let _ = super::log2(6);
}

#[test]
fn remove_leading_zeros() {
    let poly = vec![
        BaseElement::ONE,
        BaseElement::new(2),
        BaseElement::ZERO,
        BaseElement::ZERO,
    ];
    assert_eq!(vec![BaseElement::ONE, BaseElement::new(2)], super::remove_leading_zeros(&poly));

    let zeros = vec![BaseElement::ZERO; 4];
    assert!(super::remove_leading_zeros(&zeros).is_empty());
}
