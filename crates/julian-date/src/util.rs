macro_rules! clamp {
    ($t:expr; $min:tt..= $max:tt) => {
        if $t < $min {
            $min
        } else if $max < $t {
            $max
        } else {
            $t
        }
    };
}

const I64_MIN: i128 = i64::MIN as i128;
const I64_MAX: i128 = i64::MAX as i128;

/// Narrows an [`i128`] into an [`i64`], saturating at the bounds.
#[inline]
pub(crate) const fn saturate_i64(wide: i128) -> i64 {
    clamp!(wide; I64_MIN..=I64_MAX) as i64
}

#[test]
fn test_saturate() {
    assert_eq!(saturate_i64(5), 5);
    assert_eq!(saturate_i64(i128::MAX), i64::MAX);
    assert_eq!(saturate_i64(i128::MIN), i64::MIN);

    const MAX: usize = 3;
    const MIN: usize = 1;

    let clamped = clamp!(4; MIN..=MAX);
    assert_eq!(clamped, 3);
}
