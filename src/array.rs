//! The contract shared by all fixed-length numeric containers.

use crate::{
    common::{self, equals_with_epsilon, format_value},
    config::{self, Config},
    error::{MathError, Result},
};
use bytemuck::Pod;
use std::fmt;

/// A fixed-length sequence of `f64` values supporting in-place arithmetic,
/// validation, formatting and equality.
///
/// Implementors supply the element count and access to their storage, and
/// get every other operation from the provided methods. All mutators work in
/// place and end by running [`check`](Self::check), which fails with a
/// [`MathError::Validation`] if debug checks are enabled and the container
/// now holds a non-finite value. With debug checks disabled, invalid values
/// propagate silently.
///
/// Operands are taken as anything that can be viewed as a `[f64]`. Operands
/// with fewer than [`ELEMENTS`](Self::ELEMENTS) values read the missing
/// values as NaN.
pub trait NumericArray: Copy + Default + fmt::Debug {
    /// Number of values in the container.
    const ELEMENTS: usize;

    /// Name used in validation errors and displayed types.
    const TYPE_NAME: &'static str;

    fn elements(&self) -> &[f64];

    fn elements_mut(&mut self) -> &mut [f64];

    /// Overwrites all values with the first [`ELEMENTS`](Self::ELEMENTS)
    /// values of `source`.
    fn copy(&mut self, source: &[f64]) -> Result<&mut Self>;

    /// Creates a new container of the same type holding the same values.
    fn cloned(&self) -> Result<Self> {
        let mut clone = Self::default();
        clone.copy(self.elements())?;
        Ok(clone)
    }

    /// Copies [`ELEMENTS`](Self::ELEMENTS) values starting at `offset` in
    /// `source` into this container.
    #[allow(clippy::wrong_self_convention)]
    fn from_array(&mut self, source: &[f64], offset: usize) -> Result<&mut Self> {
        for (idx, element) in self.elements_mut().iter_mut().enumerate() {
            *element = offset
                .checked_add(idx)
                .map_or(f64::NAN, |index| component(source, index));
        }
        self.check("from_array")
    }

    /// Writes the values into `target` starting at `offset`.
    ///
    /// # Panics
    /// If `target` is too short to hold the values at the given offset.
    fn to_array<'a>(&self, target: &'a mut [f64], offset: usize) -> &'a mut [f64] {
        target[offset..offset.saturating_add(Self::ELEMENTS)].copy_from_slice(self.elements());
        target
    }

    fn to_vec(&self) -> Vec<f64> {
        self.elements().to_vec()
    }

    /// Formats the values as `[v0, v1, ...]`, prefixed with the type name if
    /// [`Config::print_types`] is set.
    fn format_string(&self, config: &Config) -> String {
        let values: Vec<_> = self
            .elements()
            .iter()
            .map(|&value| format_value(value, config))
            .collect();
        let type_name = if config.print_types {
            Self::TYPE_NAME
        } else {
            ""
        };
        format!("{type_name}[{}]", values.join(", "))
    }

    /// Whether `other` has the same length and all values are equal within
    /// the current tolerance (see [`common::equals_with_epsilon`]).
    fn equals<V: AsRef<[f64]> + ?Sized>(&self, other: &V) -> bool {
        let other = other.as_ref();
        let epsilon = config::epsilon();
        other.len() == Self::ELEMENTS
            && self
                .elements()
                .iter()
                .zip(other)
                .all(|(&a, &b)| equals_with_epsilon(a, b, epsilon))
    }

    /// Whether `other` has the same length and exactly the same values.
    fn exact_equals<V: AsRef<[f64]> + ?Sized>(&self, other: &V) -> bool {
        let other = other.as_ref();
        other.len() == Self::ELEMENTS && self.elements() == other
    }

    fn negate(&mut self) -> Result<&mut Self> {
        for element in self.elements_mut() {
            *element = -*element;
        }
        self.check("negate")
    }

    /// Interpolates linearly from the current values towards `target`.
    fn lerp<V: AsRef<[f64]> + ?Sized>(&mut self, target: &V, t: f64) -> Result<&mut Self> {
        let target = target.as_ref();
        for (idx, element) in self.elements_mut().iter_mut().enumerate() {
            *element = common::lerp(*element, component(target, idx), t);
        }
        self.check("lerp")
    }

    /// Sets the values to the linear interpolation between `a` and `b`.
    fn lerp_between<A, B>(&mut self, a: &A, b: &B, t: f64) -> Result<&mut Self>
    where
        A: AsRef<[f64]> + ?Sized,
        B: AsRef<[f64]> + ?Sized,
    {
        let (a, b) = (a.as_ref(), b.as_ref());
        for (idx, element) in self.elements_mut().iter_mut().enumerate() {
            *element = common::lerp(component(a, idx), component(b, idx), t);
        }
        self.check("lerp")
    }

    /// Takes the component-wise minimum with `vector`.
    fn min<V: AsRef<[f64]> + ?Sized>(&mut self, vector: &V) -> Result<&mut Self> {
        let vector = vector.as_ref();
        for (idx, element) in self.elements_mut().iter_mut().enumerate() {
            *element = component(vector, idx).min(*element);
        }
        self.check("min")
    }

    /// Takes the component-wise maximum with `vector`.
    fn max<V: AsRef<[f64]> + ?Sized>(&mut self, vector: &V) -> Result<&mut Self> {
        let vector = vector.as_ref();
        for (idx, element) in self.elements_mut().iter_mut().enumerate() {
            *element = component(vector, idx).max(*element);
        }
        self.check("max")
    }

    fn clamp<A, B>(&mut self, min_vector: &A, max_vector: &B) -> Result<&mut Self>
    where
        A: AsRef<[f64]> + ?Sized,
        B: AsRef<[f64]> + ?Sized,
    {
        let (min_vector, max_vector) = (min_vector.as_ref(), max_vector.as_ref());
        for (idx, element) in self.elements_mut().iter_mut().enumerate() {
            *element = element
                .max(component(min_vector, idx))
                .min(component(max_vector, idx));
        }
        self.check("clamp")
    }

    /// Adds each of the given vectors in turn.
    fn add<I>(&mut self, vectors: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: AsRef<[f64]>,
    {
        for vector in vectors {
            let vector = vector.as_ref();
            for (idx, element) in self.elements_mut().iter_mut().enumerate() {
                *element += component(vector, idx);
            }
        }
        self.check("add")
    }

    /// Subtracts each of the given vectors in turn.
    fn subtract<I>(&mut self, vectors: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: AsRef<[f64]>,
    {
        for vector in vectors {
            let vector = vector.as_ref();
            for (idx, element) in self.elements_mut().iter_mut().enumerate() {
                *element -= component(vector, idx);
            }
        }
        self.check("subtract")
    }

    fn sub<V: AsRef<[f64]> + ?Sized>(&mut self, vector: &V) -> Result<&mut Self> {
        self.subtract([vector])
    }

    /// Multiplies every value by `scalar`.
    fn multiply_by_scalar(&mut self, scalar: f64) -> Result<&mut Self> {
        for element in self.elements_mut() {
            *element *= scalar;
        }
        self.check("multiply_by_scalar")
    }

    fn multiply_scalar(&mut self, scalar: f64) -> Result<&mut Self> {
        self.multiply_by_scalar(scalar)
    }

    fn divide_scalar(&mut self, scalar: f64) -> Result<&mut Self> {
        self.multiply_by_scalar(1.0 / scalar)
    }

    fn set_scalar(&mut self, scalar: f64) -> Result<&mut Self> {
        self.elements_mut().fill(scalar);
        self.check("set_scalar")
    }

    fn add_scalar(&mut self, scalar: f64) -> Result<&mut Self> {
        for element in self.elements_mut() {
            *element += scalar;
        }
        self.check("add_scalar")
    }

    fn sub_scalar(&mut self, scalar: f64) -> Result<&mut Self> {
        self.add_scalar(-scalar)
    }

    fn clamp_scalar(&mut self, min: f64, max: f64) -> Result<&mut Self> {
        for element in self.elements_mut() {
            *element = common::clamp(*element, min, max);
        }
        self.check("clamp_scalar")
    }

    /// Whether every value is finite.
    fn validate(&self) -> bool {
        self.elements().len() == Self::ELEMENTS
            && self.elements().iter().all(|value| value.is_finite())
    }

    /// Validates the container if debug checks are enabled.
    ///
    /// # Errors
    /// Returns [`MathError::Validation`] naming the type and `operation` if
    /// debug checks are enabled and [`validate`](Self::validate) fails.
    fn check(&mut self, operation: &'static str) -> Result<&mut Self> {
        if config::debug_checks_enabled() && !self.validate() {
            return Err(MathError::Validation {
                type_name: Self::TYPE_NAME,
                operation,
            });
        }
        Ok(self)
    }

    /// Views a slice of containers as one flat slice of values.
    fn flatten(items: &[Self]) -> &[f64]
    where
        Self: Pod,
    {
        bytemuck::cast_slice(items)
    }

    /// Views a flat slice of values as a slice of containers, or returns
    /// [`None`] if its length is not a multiple of
    /// [`ELEMENTS`](Self::ELEMENTS).
    fn from_flat(flat: &[f64]) -> Option<&[Self]>
    where
        Self: Pod,
    {
        bytemuck::try_cast_slice(flat).ok()
    }
}

/// Reads the value at `index`, or NaN if `source` is too short.
pub(crate) fn component(source: &[f64], index: usize) -> f64 {
    source.get(index).copied().unwrap_or(f64::NAN)
}

/// Validates the given values ahead of storing them, if debug checks are
/// enabled.
pub(crate) fn check_components(
    values: &[f64],
    type_name: &'static str,
    operation: &'static str,
) -> Result<()> {
    if config::debug_checks_enabled() && !values.iter().all(|value| value.is_finite()) {
        return Err(MathError::Validation {
            type_name,
            operation,
        });
    }
    Ok(())
}
