use alloc::boxed::Box;

use crate::info::{Generics, Type, TypePath};
use crate::info::{impl_generic_fn, impl_type_fn};

/// A container for a fieldless enum.
///
/// # Examples
///
/// ```
/// use ak_describe::{derive::Describe, info::Typed};
///
/// #[derive(Describe)]
/// enum Side {
///     Left,
///     Right,
/// }
///
/// let info = Side::type_info().as_enum().unwrap();
/// assert_eq!(info.variant_names(), &["Left", "Right"]);
/// assert_eq!(info.index_of("Right"), Some(1));
/// ```
#[derive(Clone, Debug)]
pub struct EnumInfo {
    ty: Type,
    generics: Generics,
    variant_names: Box<[&'static str]>,
}

impl EnumInfo {
    impl_type_fn!(ty);
    impl_generic_fn!(generics);

    /// Create a new [`EnumInfo`], variants in declaration order.
    pub fn new<T: TypePath + ?Sized>(variant_names: &[&'static str]) -> Self {
        Self {
            ty: Type::of::<T>(),
            generics: Generics::new(),
            variant_names: variant_names.into(),
        }
    }

    /// Returns the variant names in declaration order.
    #[inline]
    pub fn variant_names(&self) -> &[&'static str] {
        &self.variant_names
    }

    /// Returns the index of the variant `name`, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.variant_names.iter().position(|v| *v == name)
    }

    /// Returns the number of variants.
    #[inline]
    pub fn variant_len(&self) -> usize {
        self.variant_names.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::derive::Describe;
    use crate::info::{DescribeKind, TypePath, Typed};

    #[derive(Describe)]
    #[describe(type_path = "zoo::Diet")]
    pub enum Diet {
        Herbivore,
        Carnivore,
        Omnivore,
    }

    #[test]
    fn derived_variants() {
        let info = Diet::type_info();
        assert_eq!(info.kind(), DescribeKind::Enum);
        assert!(info.properties().is_empty());

        let info = info.as_enum().unwrap();
        assert_eq!(info.variant_len(), 3);
        assert_eq!(info.index_of("Omnivore"), Some(2));
        assert_eq!(Diet::type_path(), "zoo::Diet");
    }
}
