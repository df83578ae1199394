use alloc::boxed::Box;

use crate::info::{Generics, PropertyInfo, Type, TypePath};
use crate::info::{impl_generic_fn, impl_type_fn};

/// A container for a record with named properties.
///
/// Unit structs are records without properties.
///
/// # Examples
///
/// ```rust
/// use ak_describe::{derive::Describe, info::Typed};
///
/// #[derive(Describe)]
/// pub struct A {
///     pub val: f32,
/// }
///
/// let info = <A as Typed>::type_info().as_struct().unwrap();
///
/// assert_eq!(info.property_len(), 1);
/// assert_eq!(info.index_of("val"), Some(0));
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    generics: Generics,
    properties: Box<[PropertyInfo]>,
}

impl StructInfo {
    impl_type_fn!(ty);
    impl_generic_fn!(generics);

    /// Create a new [`StructInfo`].
    ///
    /// Properties keep the given order.
    pub fn new<T: TypePath + ?Sized>(properties: &[PropertyInfo]) -> Self {
        Self {
            ty: Type::of::<T>(),
            generics: Generics::new(),
            properties: properties.into(),
        }
    }

    /// Returns the property with the given `name`, if present.
    ///
    /// This is O(N) complexity.
    pub fn property(&self, name: &str) -> Option<&PropertyInfo> {
        self.properties.iter().find(|p| p.name() == name)
    }

    /// Returns the property at the given index, if present.
    #[inline]
    pub fn property_at(&self, index: usize) -> Option<&PropertyInfo> {
        self.properties.get(index)
    }

    /// Returns the properties in **declaration order**.
    #[inline]
    pub fn properties(&self) -> &[PropertyInfo] {
        &self.properties
    }

    /// Returns the index for the given property `name`, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.properties.iter().position(|p| p.name() == name)
    }

    /// Returns the number of properties.
    #[inline]
    pub fn property_len(&self) -> usize {
        self.properties.len()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::any::TypeId;

    use crate::derive::Describe;
    use crate::info::{Access, DescribeKind, TypePath, Typed};
    use crate::registry::{GetTypeMeta, TypeRegistry};

    #[derive(Describe)]
    pub struct Account {
        pub id: u64,
        #[describe(rename = "displayName")]
        pub display_name: String,
        #[describe(read_only)]
        pub tags: Vec<String>,
        #[describe(skip)]
        pub cache: Vec<u8>,
        secret: String,
    }

    #[derive(Describe)]
    #[describe(type_path = "shop::orders::Order")]
    pub struct Order;

    #[derive(Describe)]
    pub struct Wrapper<T> {
        pub value: Option<T>,
        pub history: Vec<T>,
    }

    #[derive(Describe)]
    pub struct Tagged<T, const N: usize> {
        pub items: [T; N],
    }

    #[test]
    fn derived_properties() {
        let info = Account::type_info().as_struct().unwrap();
        let names: Vec<_> = info.properties().iter().map(|p| p.name()).collect();
        assert_eq!(names, ["id", "displayName", "tags", "secret"]);

        assert!(info.property("id").unwrap().is_public_read_write());

        let tags = info.property("tags").unwrap();
        assert_eq!(tags.getter(), Access::Public);
        assert_eq!(tags.setter(), Access::Absent);

        let secret = info.property("secret").unwrap();
        assert_eq!(secret.getter(), Access::Restricted);
        assert_eq!(secret.setter(), Access::Restricted);

        assert!(info.property("cache").is_none());
        assert_eq!(Account::type_path(), "ak_describe::info::struct_info::tests::Account");
        assert_eq!(Account::module_path(), Some("ak_describe::info::struct_info::tests"));
    }

    #[test]
    fn custom_type_path() {
        assert_eq!(Order::type_path(), "shop::orders::Order");
        assert_eq!(Order::type_ident(), "Order");
        assert_eq!(Order::module_path(), Some("shop::orders"));

        let info = Order::type_info();
        assert_eq!(info.kind(), DescribeKind::Struct);
        assert!(info.properties().is_empty());
    }

    #[test]
    fn generic_instantiations() {
        assert_eq!(
            <Wrapper<u8>>::type_path(),
            "ak_describe::info::struct_info::tests::Wrapper<u8>"
        );
        assert_eq!(<Wrapper<Wrapper<u8>>>::type_name(), "Wrapper<Wrapper<u8>>");

        let info = <Wrapper<String>>::type_info();
        assert!(info.is_generic());
        assert_eq!(info.generics()[0].name(), "T");
        assert!(info.generics()[0].type_info().type_is::<String>());
        assert!(!core::ptr::eq(info, <Wrapper<u8>>::type_info()));

        assert_eq!(
            <Tagged<bool, 3>>::type_path(),
            "ak_describe::info::struct_info::tests::Tagged<bool, 3>"
        );
        assert_eq!(<Tagged<bool, 3>>::type_info().generics().len(), 1);
    }

    #[test]
    fn registers_field_types() {
        let mut registry = TypeRegistry::empty();
        registry.register::<Wrapper<Account>>();

        assert!(registry.contains(TypeId::of::<Option<Account>>()));
        assert!(registry.contains(TypeId::of::<Vec<Account>>()));
        assert!(registry.contains(TypeId::of::<Account>()));
        assert!(registry.contains(TypeId::of::<Vec<String>>()));
        // Skipped fields are not dependencies.
        assert!(!registry.contains(TypeId::of::<Vec<u8>>()));
        assert!(Account::get_type_meta().bases().is_empty());
    }
}
