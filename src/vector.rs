//! Operations shared by the vector types.

use crate::{
    array::{NumericArray, component},
    error::{Result, check_number},
};

/// A [`NumericArray`] representing a vector with at least an x- and a
/// y-component.
pub trait Vector: NumericArray {
    fn x(&self) -> f64 {
        self.elements()[0]
    }

    fn y(&self) -> f64 {
        self.elements()[1]
    }

    /// Sets the x-component.
    ///
    /// # Errors
    /// Returns [`MathError::InvalidNumber`](crate::MathError::InvalidNumber)
    /// if `value` is not finite, regardless of whether debug checks are
    /// enabled.
    fn set_x(&mut self, value: f64) -> Result<&mut Self> {
        self.elements_mut()[0] = check_number(value)?;
        Ok(self)
    }

    /// Sets the y-component. See [`set_x`](Self::set_x).
    fn set_y(&mut self, value: f64) -> Result<&mut Self> {
        self.elements_mut()[1] = check_number(value)?;
        Ok(self)
    }

    fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    fn magnitude(&self) -> f64 {
        self.length()
    }

    fn length_squared(&self) -> f64 {
        self.elements().iter().map(|value| value * value).sum()
    }

    fn distance<V: AsRef<[f64]> + ?Sized>(&self, other: &V) -> f64 {
        self.distance_squared(other).sqrt()
    }

    fn distance_squared<V: AsRef<[f64]> + ?Sized>(&self, other: &V) -> f64 {
        let other = other.as_ref();
        self.elements()
            .iter()
            .enumerate()
            .map(|(idx, value)| {
                let diff = value - component(other, idx);
                diff * diff
            })
            .sum()
    }

    fn dot<V: AsRef<[f64]> + ?Sized>(&self, other: &V) -> f64 {
        let other = other.as_ref();
        self.elements()
            .iter()
            .enumerate()
            .map(|(idx, value)| value * component(other, idx))
            .sum()
    }

    /// The angle of the xy-projection of the vector, measured from the
    /// x-axis towards the y-axis.
    fn horizontal_angle(&self) -> f64 {
        self.y().atan2(self.x())
    }

    /// Scales the vector to unit length. A zero vector is left unchanged.
    fn normalize(&mut self) -> Result<&mut Self> {
        let length = self.length();
        if length != 0.0 {
            for element in self.elements_mut() {
                *element /= length;
            }
        }
        self.check("normalize")
    }

    /// Multiplies component-wise by each of the given vectors in turn.
    fn multiply<I>(&mut self, vectors: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: AsRef<[f64]>,
    {
        for vector in vectors {
            let vector = vector.as_ref();
            for (idx, element) in self.elements_mut().iter_mut().enumerate() {
                *element *= component(vector, idx);
            }
        }
        self.check("multiply")
    }

    /// Divides component-wise by each of the given vectors in turn.
    fn divide<I>(&mut self, vectors: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: AsRef<[f64]>,
    {
        for vector in vectors {
            let vector = vector.as_ref();
            for (idx, element) in self.elements_mut().iter_mut().enumerate() {
                *element /= component(vector, idx);
            }
        }
        self.check("divide")
    }

    /// Scales each component by the corresponding component of `scale`.
    fn scale<V: AsRef<[f64]> + ?Sized>(&mut self, scale: &V) -> Result<&mut Self> {
        self.multiply([scale])
    }
}
