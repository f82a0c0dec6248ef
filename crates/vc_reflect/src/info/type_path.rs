use core::any::{Any, TypeId};
use core::fmt;
use core::hash::{Hash, Hasher};

// -----------------------------------------------------------------------------
// Type

/// The identity of a reflected type: its [`TypeId`] and printable paths.
///
/// Paths come from [`core::any::type_name`], so they are meant for
/// diagnostics and registry lookups, not for stable persistence.
///
/// # Examples
///
/// ```
/// use core::any::TypeId;
/// use vc_reflect::info::Type;
///
/// let ty = Type::of::<Vec<u8>>();
/// assert_eq!(ty.id(), TypeId::of::<Vec<u8>>());
/// assert_eq!(ty.path(), "alloc::vec::Vec<u8>");
/// assert_eq!(ty.name(), "Vec<u8>");
/// assert!(ty.is::<Vec<u8>>());
/// ```
#[derive(Clone, Copy)]
pub struct Type {
    id: TypeId,
    path: &'static str,
    name: &'static str,
}

impl Type {
    /// Creates the [`Type`] of `T`.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        let path = core::any::type_name::<T>();
        Self {
            id: TypeId::of::<T>(),
            path,
            name: short_name(path),
        }
    }

    /// Returns the [`TypeId`] of the type.
    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the full path, e.g. `alloc::string::String`.
    #[inline(always)]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// Returns the path without the leading module path, e.g. `String`.
    ///
    /// Generic arguments keep their full paths.
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

fn short_name(path: &'static str) -> &'static str {
    if path.starts_with(['[', '(', '&', '*']) {
        return path;
    }
    let end = path.find('<').unwrap_or(path.len());
    match path[..end].rfind("::") {
        Some(index) => &path[index + 2..],
        None => path,
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl Hash for Type {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.path)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.path)
    }
}

/// Implements `ty`, `type_id`, `type_path`, `type_name` and `is` for an
/// info struct holding a [`Type`] field.
macro_rules! impl_type_fn {
    ($field:ident) => {
        /// Returns the [`Type`](crate::info::Type) of the described type.
        #[inline(always)]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }

        $crate::info::impl_type_fn!();
    };
    () => {
        /// Returns the [`TypeId`](core::any::TypeId) of the described type.
        #[inline]
        pub const fn type_id(&self) -> ::core::any::TypeId {
            self.ty().id()
        }

        /// Returns the full type path of the described type.
        #[inline]
        pub const fn type_path(&self) -> &'static str {
            self.ty().path()
        }

        /// Returns the short type name of the described type.
        #[inline]
        pub const fn type_name(&self) -> &'static str {
            self.ty().name()
        }

        /// Check if the described type is `T`.
        #[inline]
        pub fn is<T: ::core::any::Any>(&self) -> bool {
            self.ty().is::<T>()
        }
    };
}

pub(crate) use impl_type_fn;

#[cfg(test)]
mod tests {
    use super::Type;
    use alloc::string::String;
    use alloc::vec::Vec;

    #[test]
    fn short_names() {
        assert_eq!(Type::of::<String>().name(), "String");
        assert_eq!(Type::of::<Vec<String>>().name(), "Vec<alloc::string::String>");
        assert_eq!(Type::of::<[u8; 4]>().name(), "[u8; 4]");
        assert_eq!(Type::of::<i32>().name(), "i32");
    }

    #[test]
    fn equality_uses_type_id() {
        assert_eq!(Type::of::<u8>(), Type::of::<u8>());
        assert_ne!(Type::of::<u8>(), Type::of::<i8>());
    }
}
