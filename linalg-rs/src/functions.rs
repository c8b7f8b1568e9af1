//! Element-wise functions applied uniformly to matrices and vectors.
//!
//! [`transform`] is the single primitive; [`exp`], [`powi`] and [`powf`] are built on it.
//! Every function returns a new container of the same kind and shape as its input.

use crate::{Matrix, Result, Vector};
use num_traits::Float;

/// A container whose elements can be rewritten one by one without changing its shape.
pub trait Elementwise<T: Copy>: Sized {
    fn map_elements<F>(&self, f: F) -> Self
    where
        F: FnMut(T) -> T;

    fn zip_elements<F>(&self, other: &Self, f: F) -> Result<Self>
    where
        F: FnMut(T, T) -> T;
}

impl<T: Copy> Elementwise<T> for Matrix<T> {
    fn map_elements<F>(&self, f: F) -> Self
    where
        F: FnMut(T) -> T,
    {
        self.map(f)
    }

    fn zip_elements<F>(&self, other: &Self, f: F) -> Result<Self>
    where
        F: FnMut(T, T) -> T,
    {
        self.zip_map(other, f)
    }
}

impl<T: Copy> Elementwise<T> for Vector<T> {
    fn map_elements<F>(&self, f: F) -> Self
    where
        F: FnMut(T) -> T,
    {
        self.map(f)
    }

    fn zip_elements<F>(&self, other: &Self, f: F) -> Result<Self>
    where
        F: FnMut(T, T) -> T,
    {
        self.zip_map(other, f)
    }
}

/// Returns a container of the same shape where every element is `f(x)`.
pub fn transform<C, T, F>(container: &C, f: F) -> C
where
    C: Elementwise<T>,
    T: Copy,
    F: FnMut(T) -> T,
{
    container.map_elements(f)
}

/// Returns a container where every element is `f(a, b)` for the matching elements of `a` and `b`.
/// Both containers must have the same shape.
pub fn transform_pair<C, T, F>(a: &C, b: &C, f: F) -> Result<C>
where
    C: Elementwise<T>,
    T: Copy,
    F: FnMut(T, T) -> T,
{
    a.zip_elements(b, f)
}

/// Natural exponential of every element.
pub fn exp<C, T>(container: &C) -> C
where
    C: Elementwise<T>,
    T: Float,
{
    transform(container, T::exp)
}

/// Raises every element to an integral power.
pub fn powi<C, T>(container: &C, n: i32) -> C
where
    C: Elementwise<T>,
    T: Float,
{
    transform(container, |x| x.powi(n))
}

/// Raises every element to a real power.
pub fn powf<C, T>(container: &C, n: T) -> C
where
    C: Elementwise<T>,
    T: Float,
{
    transform(container, |x| x.powf(n))
}
