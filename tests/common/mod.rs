#![allow(unused)]

/// Checks whether two floats are equal up to a few ulps relative to their
/// magnitude.
#[track_caller]
pub fn assert_eq_float<F: Float>(a: F, b: F) {
    let margin = F::EPSILON * F::ULPS * a.abs().max(b.abs()).max(F::ONE);

    assert!((a - b).abs() <= margin, "{a} != {b}")
}

/// Trait to provide flexibility in the `assert_eq_float` function.
pub trait Float:
    Copy
    + std::fmt::Display
    + std::ops::Sub<Output = Self>
    + std::ops::Mul<Output = Self>
    + PartialOrd
    + Sized
{
    const EPSILON: Self;
    const ULPS: Self;
    const ONE: Self;

    fn abs(self) -> Self;

    fn max(self, other: Self) -> Self;
}

macro_rules! impl_float {
    ( $( $ty:ty )* ) => {
        $(
            impl Float for $ty {
                const EPSILON: Self = Self::EPSILON;
                const ULPS: Self = 4.0;
                const ONE: Self = 1.0;

                fn abs(self) -> Self {
                    self.abs()
                }

                fn max(self, other: Self) -> Self {
                    self.max(other)
                }
            }
        )*
    }
}

impl_float!(f32 f64);

/// Weight of the peak at the given rank, spelled out.
pub fn weight(index: usize) -> f64 {
    let x = 7.5 / (1.0 + index as f64);

    1.4425 * ((1.0 + x) / (index as f64 + 1.0 + x))
}

/// Dampening factor of the peak at rank `i`, spelled out.
pub fn factor(i: usize, count: usize, baseline: f64) -> f64 {
    let t = f64::from((i as f32 / count as f32).clamp(0.0, 1.0));
    let scale = (1.0 + 9.0 * t).log10();

    baseline + (1.0 - baseline) * scale
}
