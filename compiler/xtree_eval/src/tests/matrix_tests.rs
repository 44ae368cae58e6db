//! All-pairs comparison of boundary values for every primitive type.
//!
//! Each pair is built as typed constants, compared with `==` and `!=` in
//! both modes, and checked against Rust's own `==` on the same values
//! (`Option` equality for the nullable forms).

use std::fmt::Debug;

use pretty_assertions::assert_eq;

use xtree_ir::{ClassTy, ComparisonOp, Decimal, EnumTy, Expr, Ty, Value};
use xtree_types::{make_comparison, ComparisonOptions};

use crate::{evaluate_comparison, Environment, EvalMode};

fn check_matrix<T: Copy + PartialEq + Debug>(ty: &Ty, values: &[T], to_value: impl Fn(T) -> Value) {
    let env = Environment::empty();
    for &a in values {
        for &b in values {
            let expected_equal = a == b;
            for op in [ComparisonOp::Equal, ComparisonOp::NotEqual] {
                let left = Expr::typed_constant(to_value(a), ty.clone()).unwrap();
                let right = Expr::typed_constant(to_value(b), ty.clone()).unwrap();
                let node = make_comparison(op, left, right, ComparisonOptions::default()).unwrap();
                for mode in EvalMode::ALL {
                    assert_eq!(
                        evaluate_comparison(&node, mode, &env),
                        Ok(op.apply(expected_equal)),
                        "{a:?} {op} {b:?} as {ty} ({mode:?})"
                    );
                }
            }
        }
    }
}

fn nullable<T: Copy>(values: &[T]) -> Vec<Option<T>> {
    std::iter::once(None)
        .chain(values.iter().copied().map(Some))
        .collect()
}

fn check_both<T: Copy + PartialEq + Debug>(ty: Ty, values: &[T], to_value: fn(T) -> Value) {
    check_matrix(&ty, values, to_value);
    check_matrix(&ty.nullable(), &nullable(values), |v| {
        v.map_or(Value::Null, to_value)
    });
}

#[test]
fn bool_matrix() {
    check_both(Ty::Bool, &[true, false], Value::Bool);
}

#[test]
fn char_matrix() {
    check_both(Ty::Char, &['\0', '\u{8}', 'A', '\u{ffff}'], Value::Char);
}

#[test]
fn decimal_matrix() {
    check_both(
        Ty::Decimal,
        &[
            Decimal::ZERO,
            Decimal::ONE,
            Decimal::NEGATIVE_ONE,
            Decimal::MIN,
            Decimal::MAX,
        ],
        Value::Decimal,
    );
}

#[test]
fn f64_matrix() {
    check_both(
        Ty::F64,
        &[
            0.0,
            1.0,
            -1.0,
            f64::MIN,
            f64::MAX,
            f64::from_bits(1),
            f64::NEG_INFINITY,
            f64::INFINITY,
            f64::NAN,
        ],
        Value::F64,
    );
}

#[test]
fn f32_matrix() {
    check_both(
        Ty::F32,
        &[
            0.0,
            1.0,
            -1.0,
            f32::MIN,
            f32::MAX,
            f32::from_bits(1),
            f32::NEG_INFINITY,
            f32::INFINITY,
            f32::NAN,
        ],
        Value::F32,
    );
}

#[test]
fn signed_integer_matrices() {
    check_both(Ty::I8, &[0, 1, -1, i8::MIN, i8::MAX], Value::I8);
    check_both(Ty::I16, &[0, 1, -1, i16::MIN, i16::MAX], Value::I16);
    check_both(Ty::I32, &[0, 1, -1, i32::MIN, i32::MAX], Value::I32);
    check_both(Ty::I64, &[0, 1, -1, i64::MIN, i64::MAX], Value::I64);
}

#[test]
fn unsigned_integer_matrices() {
    check_both(Ty::U8, &[0, 1, u8::MAX], Value::U8);
    check_both(Ty::U16, &[0, 1, u16::MAX], Value::U16);
    check_both(Ty::U32, &[0, 1, u32::MAX], Value::U32);
    check_both(Ty::U64, &[0, 1, u64::MAX], Value::U64);
}

#[test]
fn class_instances_compare_by_identity() {
    let class = ClassTy::new("TestClass");
    let instances = [Value::object(&class), Value::object(&class)];
    let env = Environment::empty();
    for (i, a) in instances.iter().enumerate() {
        for (j, b) in instances.iter().enumerate() {
            for op in [ComparisonOp::Equal, ComparisonOp::NotEqual] {
                let node = make_comparison(
                    op,
                    Expr::constant(a.clone()),
                    Expr::constant(b.clone()),
                    ComparisonOptions::default(),
                )
                .unwrap();
                for mode in EvalMode::ALL {
                    assert_eq!(evaluate_comparison(&node, mode, &env), Ok(op.apply(i == j)));
                }
            }
        }
    }
}

#[test]
fn default_enum_values_are_equal() {
    let test_enum = EnumTy::new("TestEnum");
    let values = [Value::enum_value(&test_enum, 0), Value::enum_value(&test_enum, 0)];
    let env = Environment::empty();
    for a in &values {
        for b in &values {
            for op in [ComparisonOp::Equal, ComparisonOp::NotEqual] {
                let node = make_comparison(
                    op,
                    Expr::constant(a.clone()),
                    Expr::constant(b.clone()),
                    ComparisonOptions::default(),
                )
                .unwrap();
                for mode in EvalMode::ALL {
                    assert_eq!(evaluate_comparison(&node, mode, &env), Ok(op.apply(true)));
                }
            }
        }
    }
}
