use numcast::numeric::Numeric;

mod common;
use common::{eval_bool, eval_numeric};

#[test]
fn test_negate_float_max() {
    // negating the largest magnitude must not overflow to infinity
    let Numeric::F32(v) = -Numeric::F32(f32::MAX) else {
        panic!("Negation changed the variant");
    };
    assert_eq!(v, -f32::MAX);
    assert!(v.is_finite());
    assert!(Numeric::F32(v).to_bool());

    let Numeric::F64(v) = -Numeric::F64(f64::MAX) else {
        panic!("Negation changed the variant");
    };
    assert_eq!(v, -f64::MAX);
    assert!(v.is_finite());
    assert!(Numeric::F64(v).to_bool());
}

#[test]
fn test_negate_float_min_positive() {
    // negating the smallest magnitude must not underflow to zero
    let Numeric::F32(v) = -Numeric::F32(f32::MIN_POSITIVE) else {
        panic!("Negation changed the variant");
    };
    assert_eq!(v.abs(), f32::MIN_POSITIVE);
    assert!(v.is_sign_negative());
    assert!(Numeric::F32(v).to_bool());

    let Numeric::F64(v) = -Numeric::F64(f64::MIN_POSITIVE) else {
        panic!("Negation changed the variant");
    };
    assert_eq!(v.abs(), f64::MIN_POSITIVE);
    assert!(v.is_sign_negative());
    assert!(Numeric::F64(v).to_bool());
}

#[test]
fn test_negate_infinity() {
    assert_eq!(-Numeric::F32(f32::INFINITY), Numeric::F32(f32::NEG_INFINITY));
    assert_eq!(-Numeric::F64(f64::NEG_INFINITY), Numeric::F64(f64::INFINITY));
    assert!((-Numeric::F32(f32::INFINITY)).to_bool());
    assert!((-Numeric::F64(f64::INFINITY)).to_bool());
}

#[test]
fn test_negate_nan_flips_sign_only() {
    let Numeric::F32(v) = -Numeric::F32(f32::NAN) else {
        panic!("Negation changed the variant");
    };
    assert!(v.is_nan());
    assert_eq!(v.to_bits(), f32::NAN.to_bits() ^ 0x80000000);
    assert!(!Numeric::F32(v).to_bool());

    let Numeric::F64(v) = -Numeric::F64(f64::NAN) else {
        panic!("Negation changed the variant");
    };
    assert!(v.is_nan());
    assert_eq!(v.to_bits(), f64::NAN.to_bits() ^ 0x8000000000000000);
    assert!(!Numeric::F64(v).to_bool());
}

#[test]
fn test_negate_signed_zero() {
    let Numeric::F64(v) = -Numeric::F64(0.0) else {
        panic!("Negation changed the variant");
    };
    assert!(v.is_sign_negative());
    assert!(!Numeric::F64(v).to_bool());
}

#[test]
fn test_negate_integers() {
    assert_eq!(-Numeric::I32(5), Numeric::I32(-5));
    assert_eq!(-Numeric::I64(-7), Numeric::I64(7));

    // wrapping keeps negation total at MIN and for unsigned widths
    assert_eq!(-Numeric::I32(i32::MIN), Numeric::I32(i32::MIN));
    assert!((-Numeric::I32(i32::MIN)).to_bool());
    assert_eq!(-Numeric::I64(i64::MIN), Numeric::I64(i64::MIN));
    assert_eq!(-Numeric::U8(1), Numeric::U8(255));
    assert_eq!(-Numeric::U32(0), Numeric::U32(0));
}

#[test]
fn test_negation_end_to_end() {
    assert_eq!(eval_numeric("-5"), Numeric::I32(-5));
    assert_eq!(eval_numeric("-1u8"), Numeric::U8(255));
    assert_eq!(eval_numeric("- - 5"), Numeric::I32(5));

    assert!(!eval_bool("bool(-nan)"));
    assert!(eval_bool("bool(-infinity)"));
    assert!(!eval_bool("bool(-0.0f32)"));
    assert!(eval_bool("bool(-(bits64(0x7FEFFFFFFFFFFFFF)))"));
}
