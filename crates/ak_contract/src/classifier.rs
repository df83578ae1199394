use alloc::string::{String, ToString};
use alloc::vec::Vec;

use ak_describe::info::TypeInfo;

// -----------------------------------------------------------------------------
// ModuleScope

/// The logical module a walk stays within.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModuleScope {
    /// The crate the walk root is declared in.
    #[default]
    RootCrate,
    /// Module path prefixes, e.g. `"zoo"` or `"zoo::animals"`.
    Modules(Vec<String>),
}

impl ModuleScope {
    /// A scope over the given module path prefixes.
    pub fn modules<I, S>(modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Modules(modules.into_iter().map(Into::into).collect())
    }

    /// Resolves the prefixes for a walk starting at `root`.
    ///
    /// A root without a module path (a primitive) yields no prefix.
    pub fn prefixes_for(&self, root: &TypeInfo) -> Vec<String> {
        match self {
            Self::RootCrate => root.crate_name().map(ToString::to_string).into_iter().collect(),
            Self::Modules(modules) => modules.clone(),
        }
    }
}

/// Whether `module_path` is `prefix` or lies below it.
fn is_within(module_path: &str, prefix: &str) -> bool {
    match module_path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with("::"),
        None => false,
    }
}

// -----------------------------------------------------------------------------
// Classification

/// What a single type means to a contract.
#[derive(Debug, Clone)]
pub enum Classification {
    /// Encoded natively: built-in leaves and fieldless enums.
    Primitive,
    /// A list, array, map or set over these element types.
    CollectionOf(Vec<&'static TypeInfo>),
    /// An `Option` over this type.
    NullableOf(&'static TypeInfo),
    /// A `Box`, `Rc` or `Arc` over this type.
    PointerTo(&'static TypeInfo),
    /// An instantiation of a generic user type. The instantiation needs its
    /// own contract; its arguments are classified separately.
    Generic {
        /// Ident of the generic definition, e.g. `Wrapper`.
        definition: &'static str,
        arguments: Vec<&'static TypeInfo>,
    },
    /// A non-generic type of the logical module.
    UserType,
    /// Declared outside the logical module. Only user types among the
    /// arguments are ever collected.
    External { arguments: Vec<&'static TypeInfo> },
}

impl Classification {
    /// Whether the classified type itself needs a contract.
    #[inline]
    pub fn is_user_type(&self) -> bool {
        matches!(self, Self::UserType | Self::Generic { .. })
    }

    /// The types to classify next.
    pub fn arguments(&self) -> &[&'static TypeInfo] {
        match self {
            Self::Primitive | Self::UserType => &[],
            Self::CollectionOf(arguments)
            | Self::Generic { arguments, .. }
            | Self::External { arguments } => arguments,
            Self::NullableOf(inner) | Self::PointerTo(inner) => core::slice::from_ref(inner),
        }
    }
}

// -----------------------------------------------------------------------------
// Classifier

/// Decides, for one type at a time, whether it needs a contract.
///
/// # Examples
///
/// ```
/// use ak_contract::{Classification, Classifier};
/// use ak_describe::info::Typed;
///
/// let classifier = Classifier::new(vec!["zoo".to_string()]);
///
/// let list = classifier.classify(<Vec<Option<u8>>>::type_info());
/// assert!(matches!(list, Classification::CollectionOf(_)));
/// assert!(matches!(classifier.classify(u8::type_info()), Classification::Primitive));
/// ```
#[derive(Debug, Clone)]
pub struct Classifier {
    prefixes: Vec<String>,
}

impl Classifier {
    /// A classifier for the given module path prefixes.
    #[inline]
    pub fn new(prefixes: Vec<String>) -> Self {
        Self { prefixes }
    }

    /// A classifier for a walk from `root` within `scope`.
    pub fn for_root(scope: &ModuleScope, root: &TypeInfo) -> Self {
        Self::new(scope.prefixes_for(root))
    }

    /// The module path prefixes considered part of the logical module.
    #[inline]
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Whether the type is declared inside the logical module.
    pub fn in_scope(&self, info: &TypeInfo) -> bool {
        match info.module_path() {
            Some(module_path) => self.prefixes.iter().any(|p| is_within(module_path, p)),
            None => false,
        }
    }

    /// Classify one type. Containers are unwrapped one level; nested
    /// arguments are left to the caller.
    pub fn classify(&self, info: &'static TypeInfo) -> Classification {
        match info {
            TypeInfo::List(list) => Classification::CollectionOf(Vec::from([list.item_info()])),
            TypeInfo::Array(array) => {
                Classification::CollectionOf(Vec::from([array.item_info()]))
            }
            TypeInfo::Map(map) => {
                Classification::CollectionOf(Vec::from([map.key_info(), map.value_info()]))
            }
            TypeInfo::Set(set) => Classification::CollectionOf(Vec::from([set.value_info()])),
            TypeInfo::Option(option) => Classification::NullableOf(option.some_info()),
            TypeInfo::Pointer(pointer) => Classification::PointerTo(pointer.pointee_info()),
            TypeInfo::Opaque(opaque) if opaque.is_builtin() => Classification::Primitive,
            TypeInfo::Enum(_) => Classification::Primitive,
            TypeInfo::Struct(_) | TypeInfo::Interface(_) if self.in_scope(info) => {
                if info.is_generic() {
                    Classification::Generic {
                        definition: info.ty().ident(),
                        arguments: type_arguments(info),
                    }
                } else {
                    Classification::UserType
                }
            }
            TypeInfo::Struct(_) | TypeInfo::Interface(_) | TypeInfo::Opaque(_) => {
                Classification::External {
                    arguments: type_arguments(info),
                }
            }
        }
    }
}

fn type_arguments(info: &TypeInfo) -> Vec<&'static TypeInfo> {
    info.generics().iter().map(|param| param.type_info()).collect()
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::{String, ToString};
    use alloc::sync::Arc;
    use alloc::vec;
    use alloc::vec::Vec;

    use ak_describe::info::{TypeInfo, TypePath, Typed};

    use super::{Classification, Classifier, ModuleScope, is_within};
    use crate::samples::{Address, Arm, Element, Generic, Side, other_crate::Thing};

    fn classifier() -> Classifier {
        Classifier::for_root(&ModuleScope::RootCrate, Address::type_info())
    }

    fn paths(infos: &[&'static TypeInfo]) -> Vec<&'static str> {
        infos.iter().map(|info| info.type_path()).collect()
    }

    #[test]
    fn module_prefixes() {
        assert!(is_within("zoo", "zoo"));
        assert!(is_within("zoo::birds", "zoo"));
        assert!(!is_within("zookeeper", "zoo"));
        assert!(!is_within("farm::zoo", "zoo"));

        assert_eq!(classifier().prefixes(), ["ak_contract".to_string()]);
        let scope = ModuleScope::modules(["ak_contract::samples"]);
        assert_eq!(scope.prefixes_for(u8::type_info()), ["ak_contract::samples"]);
    }

    #[test]
    fn containers_unwrap() {
        let classifier = classifier();

        match classifier.classify(<BTreeMap<String, Vec<Arm>>>::type_info()) {
            Classification::CollectionOf(args) => {
                assert_eq!(paths(&args), [String::type_path(), <Vec<Arm>>::type_path()]);
            }
            other => panic!("unexpected {other:?}"),
        }

        match classifier.classify(<[Arm; 2]>::type_info()) {
            Classification::CollectionOf(args) => assert!(args[0].type_is::<Arm>()),
            other => panic!("unexpected {other:?}"),
        }

        match classifier.classify(<Option<Address>>::type_info()) {
            Classification::NullableOf(inner) => assert!(inner.type_is::<Address>()),
            other => panic!("unexpected {other:?}"),
        }

        match classifier.classify(<Arc<Address>>::type_info()) {
            Classification::PointerTo(inner) => assert!(inner.type_is::<Address>()),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn primitives_and_enums() {
        let classifier = classifier();
        for info in [
            i64::type_info(),
            String::type_info(),
            core::time::Duration::type_info(),
            Side::type_info(),
        ] {
            assert!(matches!(classifier.classify(info), Classification::Primitive));
        }
    }

    #[test]
    fn user_generic_and_external() {
        let classifier = classifier();

        assert!(classifier.classify(Address::type_info()).is_user_type());

        let generic = classifier.classify(<Generic<Element>>::type_info());
        match &generic {
            Classification::Generic {
                definition,
                arguments,
            } => {
                assert_eq!(*definition, "Generic");
                assert!(arguments[0].type_is::<Element>());
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(generic.is_user_type());

        let external = classifier.classify(<Thing<Element>>::type_info());
        assert!(!external.is_user_type());
        assert!(external.arguments()[0].type_is::<Element>());

        let narrow = Classifier::new(vec!["other_crate".to_string()]);
        assert!(narrow.classify(<Thing<Element>>::type_info()).is_user_type());
        assert!(!narrow.classify(Address::type_info()).is_user_type());
    }
}
