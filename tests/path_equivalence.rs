//! Wide and limb strategies must agree bit-for-bit
//!
//! Every width where both strategies exist is checked: 8/16/32 bits (limb
//! path forced where the dispatch would pick the wide one) and 64 bits (wide
//! path through 128-bit carriers where the dispatch picks limbs).

use proptest::prelude::*;
use safeint_ops::{CheckedResult, Integer, Limb, Strategy, Wide};

fn both_mul<T>(a: T, b: T) -> (CheckedResult<T>, CheckedResult<T>)
where
    T: Integer,
    Wide: Strategy<T>,
{
    (
        <Wide as Strategy<T>>::checked_mul(a, b),
        <Limb as Strategy<T>>::checked_mul(a, b),
    )
}

fn both_add<T>(a: T, b: T) -> (CheckedResult<T>, CheckedResult<T>)
where
    T: Integer,
    Wide: Strategy<T>,
{
    (
        <Wide as Strategy<T>>::checked_add(a, b),
        <Limb as Strategy<T>>::checked_add(a, b),
    )
}

#[test]
fn test_exhaustive_u8() {
    for a in 0..=u8::MAX {
        for b in 0..=u8::MAX {
            let (wide, limb) = both_mul(a, b);
            assert_eq!(wide, limb, "{a} * {b}");
            let (wide, limb) = both_add(a, b);
            assert_eq!(wide, limb, "{a} + {b}");
        }
    }
}

#[test]
fn test_exhaustive_i8() {
    for a in i8::MIN..=i8::MAX {
        for b in i8::MIN..=i8::MAX {
            let (wide, limb) = both_mul(a, b);
            assert_eq!(wide, limb, "{a} * {b}");
            assert_eq!(wide.into_option(), a.checked_mul(b), "{a} * {b}");
        }
    }
}

#[test]
fn test_boundary_grid_i64() {
    let edges = [
        i64::MIN,
        i64::MIN + 1,
        -0x1_0000_0000,
        -0x8000_0000,
        -1,
        0,
        1,
        0x8000_0000,
        0x1_0000_0000,
        i64::MAX - 1,
        i64::MAX,
    ];
    for &a in &edges {
        for &b in &edges {
            let (wide, limb) = both_mul(a, b);
            assert_eq!(wide, limb, "{a} * {b}");
        }
    }
}

proptest! {
    #[test]
    fn prop_mul_i16(a: i16, b: i16) {
        let (wide, limb) = both_mul(a, b);
        prop_assert_eq!(wide, limb);
    }

    #[test]
    fn prop_mul_u32(a: u32, b: u32) {
        let (wide, limb) = both_mul(a, b);
        prop_assert_eq!(wide, limb);
    }

    #[test]
    fn prop_mul_i32(a: i32, b: i32) {
        let (wide, limb) = both_mul(a, b);
        prop_assert_eq!(wide, limb);
    }

    #[test]
    fn prop_mul_i32_near_boundary(a in -0x2_0000i32..0x2_0000, b in -0x2_0000i32..0x2_0000) {
        let (wide, limb) = both_mul(a, b);
        prop_assert_eq!(wide, limb);
    }

    #[test]
    fn prop_mul_u64(a: u64, b: u64) {
        let (wide, limb) = both_mul(a, b);
        prop_assert_eq!(wide, limb);
    }

    #[test]
    fn prop_mul_i64(a: i64, b: i64) {
        let (wide, limb) = both_mul(a, b);
        prop_assert_eq!(wide, limb);
    }

    #[test]
    fn prop_mul_i64_small_magnitudes(a in -0x2_0000_0000i64..0x2_0000_0000, b in -0x2_0000_0000i64..0x2_0000_0000) {
        let (wide, limb) = both_mul(a, b);
        prop_assert_eq!(wide, limb);
    }

    #[test]
    fn prop_add_u32(a: u32, b: u32) {
        let (wide, limb) = both_add(a, b);
        prop_assert_eq!(wide, limb);
    }

    #[test]
    fn prop_add_u64(a: u64, b: u64) {
        let (wide, limb) = both_add(a, b);
        prop_assert_eq!(wide, limb);
    }
}
