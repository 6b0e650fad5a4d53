use crate::errors::{Result, VectorError};
use crate::tolerance::is_equal;
use derive_more::IntoIterator;
use num_traits::{Float, Num, NumCast, ToPrimitive};
use std::fmt::{Display, Formatter};
use std::ops::{Add, Index, Neg, Sub};

pub const DIM2: usize = 2;
pub const DIM3: usize = 3;

// Component indices
pub const X: usize = 0;
pub const Y: usize = 1;
pub const Z: usize = 2;

/// Arithmetic types usable as vector coordinates
pub trait Coordinate: Num + NumCast + Copy + PartialOrd
{
    /// Coordinate widened to `f64` for tolerance checks and norms
    fn to_float(self) -> f64 { ToPrimitive::to_f64(&self).unwrap_or(f64::NAN) }
}

impl<T: Num + NumCast + Copy + PartialOrd> Coordinate for T {}

/// Point or direction in `SIZE`-dimensional space
///
/// The dimension defaults to 3, so `Vector<f32>` is a 3D vector.
#[derive(Copy, Clone, Debug, IntoIterator)]
#[into_iterator(owned, ref)]
pub struct Vector<T, const SIZE: usize = 3>([T; SIZE]);

pub type Vector2f = Vector<f32, DIM2>;
pub type Vector3f = Vector<f32, DIM3>;

impl<T, const SIZE: usize> Vector<T, SIZE>
{
    const AT_LEAST_2D: () = assert!(SIZE >= DIM2, "Vector dimensions must be at least 2D");

    /// Vector from its coordinates in index order
    ///
    /// Fewer than two dimensions is rejected at compile time:
    ///
    /// ```compile_fail
    /// use scale_geom::Vector;
    ///
    /// let v: Vector<f32, 1> = Vector::new([1.0]);
    /// ```
    pub fn new(coords: [T; SIZE]) -> Self
    {
        let () = Self::AT_LEAST_2D;
        Vector(coords)
    }

    pub fn coords(&self) -> &[T; SIZE] { &self.0 }

    pub const fn dimension(&self) -> usize { SIZE }
}

impl<T: Copy, const SIZE: usize> Vector<T, SIZE>
{
    /// Coordinate at `index`, or [`VectorError::IndexOutOfRange`] when `index >= SIZE`
    pub fn get(&self, index: usize) -> Result<T>
    {
        self.0
            .get(index)
            .copied()
            .ok_or(VectorError::IndexOutOfRange { index, dimension: SIZE })
    }

    /// Overwrite the coordinate at `index`
    ///
    /// Out of range indices leave the vector untouched
    pub fn assign(&mut self, index: usize, value: T) -> Result<()>
    {
        let coord = self
            .0
            .get_mut(index)
            .ok_or(VectorError::IndexOutOfRange { index, dimension: SIZE })?;
        *coord = value;
        Ok(())
    }
}

impl<T: Copy> Vector<T, 2>
{
    pub fn xy(x: T, y: T) -> Self { Vector::new([x, y]) }

    pub fn x(&self) -> T { self.0[X] }
    pub fn y(&self) -> T { self.0[Y] }
}

impl<T: Copy> Vector<T, 3>
{
    pub fn xyz(x: T, y: T, z: T) -> Self { Vector::new([x, y, z]) }

    pub fn x(&self) -> T { self.0[X] }
    pub fn y(&self) -> T { self.0[Y] }
    pub fn z(&self) -> T { self.0[Z] }
}

impl<T: Coordinate, const SIZE: usize> Vector<T, SIZE>
{
    /// Strict dominance: every coordinate is less than the matching one in `other`
    ///
    /// Vectors whose coordinates disagree in direction are neither less nor greater than each other.
    pub fn less_than(&self, other: &Self) -> bool { self.0.iter().zip(other.0.iter()).all(|(a, b)| a < b) }

    /// Strict dominance: every coordinate is greater than the matching one in `other`
    pub fn greater_than(&self, other: &Self) -> bool { self.0.iter().zip(other.0.iter()).all(|(a, b)| a > b) }

    /// Euclidean norm, computed in `f64` whatever the coordinate type
    pub fn magnitude(&self) -> f64
    {
        self.0
            .iter()
            .map(|coord| {
                let coord = coord.to_float();
                coord * coord
            })
            .sum::<f64>()
            .sqrt()
    }
}

impl<T: Coordinate + Float, const SIZE: usize> Vector<T, SIZE>
{
    /// Scale the vector in place to unit magnitude
    ///
    /// The division happens in `f64`, so coordinates near the limits of `T` still normalize.
    /// A zero vector has no direction; it is left as is and [`VectorError::DegenerateVector`] is returned.
    pub fn normalize(&mut self) -> Result<()>
    {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(VectorError::DegenerateVector);
        }

        let mut unit = self.0;
        for coord in unit.iter_mut() {
            *coord = NumCast::from(coord.to_float() / magnitude).ok_or(VectorError::DegenerateVector)?;
        }
        self.0 = unit;
        Ok(())
    }

    pub fn normalized(&self) -> Result<Self>
    {
        let mut unit = *self;
        unit.normalize()?;
        Ok(unit)
    }
}

impl<T: Coordinate, const SIZE: usize> Default for Vector<T, SIZE>
{
    fn default() -> Self { Vector::new([T::zero(); SIZE]) }
}

impl<T, const SIZE: usize> From<[T; SIZE]> for Vector<T, SIZE>
{
    fn from(coords: [T; SIZE]) -> Self { Vector::new(coords) }
}

impl<T, const SIZE: usize> From<Vector<T, SIZE>> for [T; SIZE]
{
    fn from(vector: Vector<T, SIZE>) -> Self { vector.0 }
}

/// Coordinates compare equal within [`crate::tolerance::TOLERANCE`]
impl<T: Coordinate, const SIZE: usize> PartialEq for Vector<T, SIZE>
{
    fn eq(&self, other: &Self) -> bool
    {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| is_equal(a.to_float(), b.to_float()))
    }
}

impl<T: Coordinate, const SIZE: usize> Add for Vector<T, SIZE>
{
    type Output = Self;

    fn add(self, other: Self) -> Self::Output { Vector::new(std::array::from_fn(|i| self.0[i] + other.0[i])) }
}

impl<T: Coordinate, const SIZE: usize> Sub for Vector<T, SIZE>
{
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output { Vector::new(std::array::from_fn(|i| self.0[i] - other.0[i])) }
}

impl<T: Coordinate + Neg<Output = T>, const SIZE: usize> Neg for Vector<T, SIZE>
{
    type Output = Self;

    fn neg(self) -> Self::Output { Vector::new(self.0.map(|coord| -coord)) }
}

/// Panics when `index >= SIZE`, use [`Vector::get`] for a checked read
impl<T, const SIZE: usize> Index<usize> for Vector<T, SIZE>
{
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output { &self.0[index] }
}

impl<T: Display, const SIZE: usize> Display for Vector<T, SIZE>
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "(")?;
        for (i, coord) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", coord)?;
        }
        write!(f, ")")
    }
}
