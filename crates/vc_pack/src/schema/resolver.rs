use alloc::vec::Vec;

use vc_reflect::info::StructInfo;

use super::{FieldDescriptor, TypeSchema};

/// Builds the [`TypeSchema`] of a struct.
///
/// Skipped fields are dropped. Every other field is keyed by its explicit
/// order, or by its declaration index when it has none, and the fields are
/// stably sorted by that key, so ties keep declaration order.
///
/// # Examples
///
/// ```
/// use vc_pack::schema::resolve_schema;
/// use vc_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Tagged {
///     #[reflect(order = 2)]
///     a: u8,
///     #[reflect(order = 1)]
///     b: u8,
///     #[reflect(skip)]
///     cache: u64,
///     #[reflect(order = 0)]
///     c: u8,
/// }
///
/// let schema = resolve_schema(Tagged::type_info().as_struct().unwrap());
/// let names: Vec<_> = schema.iter().map(|field| field.name()).collect();
///
/// assert_eq!(names, ["c", "b", "a"]);
/// ```
pub fn resolve_schema(info: &StructInfo) -> TypeSchema {
    let mut fields = info
        .iter()
        .filter_map(|field| {
            let type_info = field.type_info()?;
            let order = field
                .order()
                .unwrap_or_else(|| i32::try_from(field.index()).unwrap_or(i32::MAX));
            Some(FieldDescriptor::new(
                field.index(),
                field.name(),
                order,
                !field.is_read_only(),
                type_info,
            ))
        })
        .collect::<Vec<_>>();

    // `sort_by_key` is stable.
    fields.sort_by_key(FieldDescriptor::order);

    TypeSchema::new(info.type_path(), fields.into_boxed_slice())
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::resolve_schema;
    use vc_reflect::derive::Reflect;
    use vc_reflect::info::{ReflectKind, Typed};

    #[derive(Reflect)]
    struct Mixed {
        first: u8,
        #[reflect(order = -5)]
        negative: u8,
        #[reflect(order = 1)]
        tie_a: u8,
        #[reflect(skip)]
        _skipped: u8,
        #[reflect(order = 1, read_only)]
        tie_b: u8,
        last: Vec<u8>,
    }

    #[test]
    fn ordering_rules() {
        let schema = resolve_schema(Mixed::type_info().as_struct().unwrap());

        let layout: Vec<_> = schema
            .iter()
            .map(|field| (field.name(), field.index(), field.order()))
            .collect();

        // `first` keeps order 0 and `last` keeps 5.
        assert_eq!(
            layout,
            [
                ("negative", 1, -5),
                ("first", 0, 0),
                ("tie_a", 2, 1),
                ("tie_b", 4, 1),
                ("last", 5, 5),
            ]
        );
        assert_eq!(schema.len(), 5);
        assert!(!schema.fields()[3].is_settable());
        assert_eq!(schema.fields()[4].type_info().kind(), ReflectKind::List);
        assert!(schema.type_path().ends_with("Mixed"));
    }

    #[derive(Reflect)]
    struct Empty;

    #[test]
    fn unit_struct_is_empty() {
        let schema = resolve_schema(Empty::type_info().as_struct().unwrap());
        assert!(schema.is_empty());
    }
}
