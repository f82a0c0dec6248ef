use crate::Reflect;

/// Field access for reflected structs.
///
/// Fields are addressed by declaration index or by name. Fields declared
/// with `#[reflect(skip)]` keep their index but are not accessible, so
/// `field_at` returns `None` for them.
///
/// # Examples
///
/// ```
/// use vc_reflect::derive::Reflect;
/// use vc_reflect::ops::Struct;
///
/// #[derive(Reflect)]
/// struct User {
///     id: u32,
///     #[reflect(skip)]
///     session: Option<std::sync::Mutex<u8>>,
///     name: String,
/// }
///
/// let mut user = User { id: 7, session: None, name: "ann".into() };
///
/// assert_eq!(user.field_len(), 3);
/// assert!(user.field_at(1).is_none());
/// assert_eq!(user.field("id").unwrap().downcast_ref::<u32>(), Some(&7));
///
/// *user.field_mut("name").unwrap().downcast_mut::<String>().unwrap() = "bob".into();
/// assert_eq!(user.name, "bob");
/// ```
pub trait Struct: Reflect {
    /// Number of declared fields, skipped ones included.
    fn field_len(&self) -> usize;

    /// Returns the name of the field at `index`.
    fn name_at(&self, index: usize) -> Option<&'static str>;

    /// Returns the field at declaration `index`.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the field at declaration `index` mutably.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the field with the given name.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns the field with the given name mutably.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;

    /// Iterates over the accessible fields as `(name, value)` pairs.
    fn iter_fields(&self) -> StructFieldIter<'_>;
}

/// Iterator over the accessible fields of a [`Struct`].
pub struct StructFieldIter<'a> {
    target: &'a dyn Struct,
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    #[inline(always)]
    pub const fn new(target: &'a dyn Struct) -> Self {
        Self { target, index: 0 }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = (&'static str, &'a dyn Reflect);

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.target.field_len() {
            let index = self.index;
            self.index += 1;
            if let Some(value) = self.target.field_at(index)
                && let Some(name) = self.target.name_at(index)
            {
                return Some((name, value));
            }
        }
        None
    }
}
