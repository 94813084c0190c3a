//! Utility macros.

/// Implements indexing, slice access, display and the [`approx`] traits for
/// a numeric container type with an `elements: [f64; N]` field.
macro_rules! impl_numeric_array_traits {
    ($t:ty, $n:expr) => {
        impl ::std::ops::Index<usize> for $t {
            type Output = f64;

            #[inline]
            fn index(&self, index: usize) -> &Self::Output {
                &self.elements[index]
            }
        }

        impl ::std::ops::IndexMut<usize> for $t {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                &mut self.elements[index]
            }
        }

        impl AsRef<[f64]> for $t {
            #[inline]
            fn as_ref(&self) -> &[f64] {
                &self.elements
            }
        }

        impl From<$t> for [f64; $n] {
            #[inline]
            fn from(value: $t) -> Self {
                value.elements
            }
        }

        impl ::std::fmt::Display for $t {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let config = $crate::config::current();
                f.write_str(&$crate::array::NumericArray::format_string(self, &config))
            }
        }

        impl ::approx::AbsDiffEq for $t {
            type Epsilon = f64;

            fn default_epsilon() -> Self::Epsilon {
                <f64 as ::approx::AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                self.elements
                    .iter()
                    .zip(&other.elements)
                    .all(|(a, b)| ::approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
            }
        }

        impl ::approx::RelativeEq for $t {
            fn default_max_relative() -> Self::Epsilon {
                <f64 as ::approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                self.elements
                    .iter()
                    .zip(&other.elements)
                    .all(|(a, b)| ::approx::RelativeEq::relative_eq(a, b, epsilon, max_relative))
            }
        }

        impl ::approx::UlpsEq for $t {
            fn default_max_ulps() -> u32 {
                <f64 as ::approx::UlpsEq>::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
                self.elements
                    .iter()
                    .zip(&other.elements)
                    .all(|(a, b)| ::approx::UlpsEq::ulps_eq(a, b, epsilon, max_ulps))
            }
        }
    };
}
