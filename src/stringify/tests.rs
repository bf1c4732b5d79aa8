use super::*;
use crate::bigint::BigInt;

#[test]
fn test_zero_decimal() {
    let z: BigInt<u8> = BigInt::from(0i32);
    assert_eq!(to_string_radix(&z, Base::Decimal, None), "0");
}

#[test]
fn test_zero_binary_is_w_zeros() {
    let z: BigInt<u8> = BigInt::from(0i32);
    assert_eq!(to_string_radix(&z, Base::Binary, None), "00000000");
}

#[test]
fn test_positive_decimal() {
    let v: BigInt<u8> = BigInt::from(12345i64);
    assert_eq!(to_string_radix(&v, Base::Decimal, None), "12345");
}

#[test]
fn test_negative_decimal() {
    let v: BigInt<u8> = BigInt::from(-12345i64);
    assert_eq!(to_string_radix(&v, Base::Decimal, None), "-12345");
}

#[test]
fn test_decimal_with_separator() {
    let v: BigInt<u8> = BigInt::from(1234567i64);
    assert_eq!(to_string_radix(&v, Base::Decimal, Some(',')), "1,234,567");
}

#[test]
fn test_negative_decimal_with_separator() {
    let v: BigInt<u8> = BigInt::from(-1234567i64);
    assert_eq!(to_string_radix(&v, Base::Decimal, Some(',')), "-1,234,567");
}

#[test]
fn test_hexadecimal() {
    let v: BigInt<u8> = BigInt::from(255i64);
    assert_eq!(to_string_radix(&v, Base::Hexadecimal, None), "FF");
}

#[test]
fn test_octal() {
    let v: BigInt<u8> = BigInt::from(8i64);
    assert_eq!(to_string_radix(&v, Base::Octal, None), "10");
}

#[test]
fn test_binary_single_word() {
    let v: BigInt<u8> = BigInt::from(5i64);
    assert_eq!(to_string_radix(&v, Base::Binary, None), "00000101");
}

#[test]
fn test_binary_with_separator_spans_two_words() {
    let mut v: BigInt<u8> = BigInt::from(1i64);
    v <<= 8;
    assert_eq!(
        to_string_radix(&v, Base::Binary, Some('_')),
        "00000001_00000000"
    );
}
