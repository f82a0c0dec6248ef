use alloc::string::String;

use crate::info::ScalarKind;

/// A scalar value read out of a reflected value.
///
/// Copyable scalars are returned by value, strings by reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarRef<'a> {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    String(&'a str),
}

/// A mutable reference to the scalar inside a reflected value.
#[derive(Debug)]
pub enum ScalarMut<'a> {
    Bool(&'a mut bool),
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    Isize(&'a mut isize),
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    Usize(&'a mut usize),
    F32(&'a mut f32),
    F64(&'a mut f64),
    String(&'a mut String),
}

macro_rules! impl_scalar_kind {
    ($ty:ident) => {
        impl $ty<'_> {
            /// Returns the [`ScalarKind`] of the referenced value.
            pub const fn kind(&self) -> ScalarKind {
                match self {
                    Self::Bool(_) => ScalarKind::Bool,
                    Self::I8(_) => ScalarKind::I8,
                    Self::I16(_) => ScalarKind::I16,
                    Self::I32(_) => ScalarKind::I32,
                    Self::I64(_) => ScalarKind::I64,
                    Self::Isize(_) => ScalarKind::Isize,
                    Self::U8(_) => ScalarKind::U8,
                    Self::U16(_) => ScalarKind::U16,
                    Self::U32(_) => ScalarKind::U32,
                    Self::U64(_) => ScalarKind::U64,
                    Self::Usize(_) => ScalarKind::Usize,
                    Self::F32(_) => ScalarKind::F32,
                    Self::F64(_) => ScalarKind::F64,
                    Self::String(_) => ScalarKind::String,
                }
            }
        }
    };
}

impl_scalar_kind!(ScalarRef);
impl_scalar_kind!(ScalarMut);
