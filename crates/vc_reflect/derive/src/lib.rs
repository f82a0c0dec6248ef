//! See following macros:
//!
//! - [`Reflect`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` automatically implements the following traits:
///
/// - `Typed`
/// - `Reflect`
/// - `GetTypeMeta`
/// - `Struct` (for named, tuple and unit structs)
///
/// Tuple struct fields are named by their position (`"0"`, `"1"`, ...).
/// Enums and unions are rejected.
///
/// ## Field Attributes
///
/// ### order
///
/// Fields are packed in declaration order by default. `order = N` gives a
/// field an explicit sort key; fields are stably sorted by key and untagged
/// fields sort by their declaration position. Negative keys are allowed.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Point {
///     #[reflect(order = 1)]
///     x: f32,
///     #[reflect(order = 0)]
///     y: f32,
/// }
/// ```
///
/// ### skip
///
/// The field is excluded from packing and from reflection access. Its type
/// does not need to implement `Reflect`, and deserialization leaves the
/// field untouched.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Session {
///     id: u64,
///     #[reflect(skip)]
///     socket: Option<std::net::TcpStream>,
/// }
/// ```
///
/// ### read_only
///
/// The field is written but not assigned on read; its bytes are consumed
/// and discarded.
///
/// ## Type Attributes
///
/// ### opaque
///
/// The type is reflected without exposing its fields. A packer can only
/// handle it through a registered formatter.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(opaque)]
/// struct Handle(u32);
/// ```
///
/// ### type_trait
///
/// Adds type traits to the generated `get_type_meta`, each built through
/// `FromType<Self>`. Accepts a single path or a parenthesized list and may be
/// repeated.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(type_trait = TypeTraitFormatter)]
/// struct Color(u8, u8, u8);
///
/// #[derive(Reflect)]
/// #[reflect(type_trait = (TypeTraitFormatter, TypeTraitName))]
/// struct Size(u32, u32);
/// ```
///
/// ## Generics
///
/// Generic structs are supported. Field types mentioning a type parameter
/// are bounded by `Reflect + Typed` (and `GetTypeMeta` for registration),
/// so a `Vec<T>` field requires whatever `Vec<T>: Reflect` requires.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_full_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_reflect_impls(ast)
}
