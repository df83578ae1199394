use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::any::TypeId;

use ak_describe::info::{TypeInfo, Typed};
use ak_describe::registry::TypeRegistry;
use ak_utils::TypeIdMap;

use crate::classifier::{Classifier, ModuleScope};
use crate::{ContractError, PropertySelector};

// -----------------------------------------------------------------------------
// UserTypeSet

/// Descriptors unique by [`TypeId`], in discovery order.
#[derive(Clone, Default)]
pub struct UserTypeSet {
    types: Vec<&'static TypeInfo>,
    index: TypeIdMap<usize>,
}

impl UserTypeSet {
    /// Create an empty set.
    #[inline]
    pub const fn new() -> Self {
        Self {
            types: Vec::new(),
            index: TypeIdMap::new(),
        }
    }

    /// Adds the descriptor. Returns `false` if it was already present.
    pub fn insert(&mut self, info: &'static TypeInfo) -> bool {
        let next = self.types.len();
        let inserted = self.index.try_insert(info.ty_id(), || next);
        if inserted {
            self.types.push(info);
        }
        inserted
    }

    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.index.contains(&type_id)
    }

    #[inline]
    pub fn contains_type<T: ?Sized + 'static>(&self) -> bool {
        self.index.contains_type::<T>()
    }

    /// The discovery position of the type, if present.
    #[inline]
    pub fn position(&self, type_id: TypeId) -> Option<usize> {
        self.index.get(&type_id).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate in discovery order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'static TypeInfo> + '_ {
        self.types.iter().copied()
    }

    /// The descriptors sorted by full type path.
    pub fn sorted(&self) -> Vec<&'static TypeInfo> {
        let mut sorted = self.types.clone();
        sorted.sort_unstable_by(|a, b| a.type_path().cmp(b.type_path()));
        sorted
    }

    /// The full type paths, sorted.
    pub fn sorted_paths(&self) -> Vec<&'static str> {
        self.sorted().into_iter().map(TypeInfo::type_path).collect()
    }
}

impl PartialEq for UserTypeSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.types.iter().all(|t| other.contains(t.ty_id()))
    }
}

impl Eq for UserTypeSet {}

impl core::fmt::Debug for UserTypeSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set()
            .entries(self.types.iter().map(|t| t.type_path()))
            .finish()
    }
}

// -----------------------------------------------------------------------------
// TypeGraphWalker

/// Collects every user type reachable from a root.
///
/// Reachability follows selectable properties, unwrapping collections,
/// `Option`, smart pointers and generic arguments. Abstract types also
/// reach the concrete implementors registered for them in the
/// [`TypeRegistry`]; nothing else is inferred.
///
/// Each type is expanded at most once, so cyclic graphs terminate and the
/// work is linear in the reachable types and their direct members.
///
/// # Examples
///
/// ```
/// use ak_contract::{ModuleScope, TypeGraphWalker};
/// use ak_describe::derive::Describe;
/// use ak_describe::registry::TypeRegistry;
///
/// #[derive(Describe)]
/// pub struct Node {
///     pub children: Vec<Node>,
///     pub weight: Option<f32>,
/// }
///
/// let registry = TypeRegistry::new();
/// let walker = TypeGraphWalker::new(&registry, ModuleScope::RootCrate);
///
/// let found = walker.walk_type::<Node>().unwrap();
/// assert_eq!(found.len(), 1);
/// assert!(found.contains_type::<Node>());
/// ```
pub struct TypeGraphWalker<'r> {
    registry: &'r TypeRegistry,
    scope: ModuleScope,
}

impl<'r> TypeGraphWalker<'r> {
    #[inline]
    pub fn new(registry: &'r TypeRegistry, scope: ModuleScope) -> Self {
        Self { registry, scope }
    }

    /// See [`walk`](Self::walk).
    #[inline]
    pub fn walk_type<T: Typed + ?Sized>(&self) -> Result<UserTypeSet, ContractError> {
        self.walk(T::type_info())
    }

    /// Returns the user types reachable from `root`, `root` included.
    ///
    /// Fails only when a reached type describes degenerate properties.
    pub fn walk(&self, root: &'static TypeInfo) -> Result<UserTypeSet, ContractError> {
        let classifier = Classifier::for_root(&self.scope, root);

        let mut found = UserTypeSet::new();
        found.insert(root);
        let mut queue = VecDeque::from([root]);
        let mut members = Vec::new();

        while let Some(info) = queue.pop_front() {
            members.clear();
            self.direct_members(&classifier, info, &mut members)?;

            for &member in &members {
                if found.insert(member) {
                    log::trace!("`{}` reaches `{}`", info.type_path(), member.type_path());
                    queue.push_back(member);
                }
            }
        }

        log::debug!(
            "walk from `{}` found {} user types",
            root.type_path(),
            found.len()
        );
        Ok(found)
    }

    fn direct_members(
        &self,
        classifier: &Classifier,
        info: &'static TypeInfo,
        out: &mut Vec<&'static TypeInfo>,
    ) -> Result<(), ContractError> {
        for property in PropertySelector::selectable(info)? {
            collect_user_types(classifier, property.type_info(), out);
        }

        if info.is_abstract() {
            out.extend(concrete_implementors(self.registry, classifier, info));
        }
        Ok(())
    }
}

/// Registered, non-abstract implementors of `base` inside the scope.
pub(crate) fn concrete_implementors<'a>(
    registry: &'a TypeRegistry,
    classifier: &'a Classifier,
    base: &TypeInfo,
) -> impl Iterator<Item = &'static TypeInfo> + 'a {
    registry
        .implementors_of(base.ty_id())
        .iter()
        .filter_map(|ty| registry.get_type_info(ty.id()))
        .filter(|sub| !sub.is_abstract() && classifier.in_scope(sub))
}

/// Pushes `info` if it is a user type, then its arguments, depth first.
///
/// Recursion follows the written type only, so it is bounded by its
/// nesting depth.
fn collect_user_types(
    classifier: &Classifier,
    info: &'static TypeInfo,
    out: &mut Vec<&'static TypeInfo>,
) {
    let classification = classifier.classify(info);
    if classification.is_user_type() {
        out.push(info);
    }
    for &argument in classification.arguments() {
        collect_user_types(classifier, argument, out);
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use std::time::{Duration, Instant};

    use ak_describe::info::{TypePath, Typed};
    use ak_describe::registry::TypeRegistry;

    use super::{TypeGraphWalker, UserTypeSet};
    use crate::ModuleScope;
    use crate::samples::*;

    fn walk<T: Typed + ?Sized>(registry: &TypeRegistry) -> UserTypeSet {
        TypeGraphWalker::new(registry, ModuleScope::RootCrate)
            .walk_type::<T>()
            .unwrap()
    }

    fn sorted_paths(paths: &[&'static str]) -> Vec<&'static str> {
        let mut paths = paths.to_vec();
        paths.sort_unstable();
        paths
    }

    #[test]
    fn self_reference_terminates() {
        let registry = TypeRegistry::new();
        let start = Instant::now();
        let found = walk::<Node>(&registry);
        assert!(start.elapsed() < Duration::from_millis(500));
        assert_eq!(found.sorted_paths(), [Node::type_path()]);
    }

    #[test]
    fn mutual_reference_terminates() {
        let registry = TypeRegistry::new();
        let start = Instant::now();
        let found = walk::<Ping>(&registry);
        assert!(start.elapsed() < Duration::from_millis(500));
        assert_eq!(
            found.sorted_paths(),
            sorted_paths(&[Label::type_path(), Ping::type_path(), Pong::type_path()])
        );

        let from_pong = walk::<Pong>(&registry);
        assert_eq!(from_pong.sorted_paths(), found.sorted_paths());
        assert_eq!(from_pong.position(Pong::type_info().ty_id()), Some(0));
    }

    #[test]
    fn only_builtin_members() {
        let registry = TypeRegistry::new();
        assert_eq!(walk::<Address>(&registry).sorted_paths(), [Address::type_path()]);
        assert_eq!(
            walk::<Person>(&registry).sorted_paths(),
            [Address::type_path(), Person::type_path()]
        );
    }

    #[test]
    fn nested_interfaces() {
        let registry = animal_registry();
        let found = walk::<dyn Animal>(&registry);
        assert_eq!(
            found.sorted_paths(),
            sorted_paths(&[
                <dyn Animal>::type_path(),
                <dyn Extremity>::type_path(),
                Arm::type_path(),
                Leg::type_path(),
                Wing::type_path(),
                Bird::type_path(),
                Mammal::type_path(),
            ])
        );

        let extremities = walk::<dyn Extremity>(&registry);
        assert_eq!(extremities.len(), 4);
        assert!(extremities.contains_type::<Wing>());
    }

    #[test]
    fn implementors_must_be_registered() {
        let registry = TypeRegistry::new();
        let found = walk::<dyn Animal>(&registry);
        assert_eq!(
            found.sorted_paths(),
            [<dyn Animal>::type_path(), <dyn Extremity>::type_path()]
        );
    }

    #[test]
    fn complex_graph() {
        let registry = animal_registry();
        let names: Vec<_> = walk::<PersonWithPet>(&registry)
            .sorted()
            .iter()
            .map(|info| info.ty().ident())
            .collect();
        assert_eq!(
            names,
            [
                "Address",
                "Animal",
                "Arm",
                "Bird",
                "Extremity",
                "Leg",
                "Mammal",
                "Person",
                "PersonWithPet",
                "Wing"
            ]
        );
    }

    #[test]
    fn nullable_wrappers_unwrap() {
        let registry = TypeRegistry::new();
        let found = walk::<ContainsNullable>(&registry);
        assert_eq!(
            found.sorted_paths(),
            [Address::type_path(), ContainsNullable::type_path()]
        );
        assert!(!found.contains_type::<Option<Address>>());
    }

    #[test]
    fn indexers_are_not_followed() {
        let registry = TypeRegistry::new();
        assert_eq!(
            walk::<HasIndexer>(&registry).sorted_paths(),
            [HasIndexer::type_path(), Node::type_path()]
        );
    }

    #[test]
    fn generic_instantiations() {
        let registry = TypeRegistry::new();
        assert_eq!(
            walk::<UserOfGenericInModule>(&registry).sorted_paths(),
            sorted_paths(&[
                UserOfGenericInModule::type_path(),
                <Generic<Element>>::type_path(),
                Element::type_path(),
            ])
        );
        assert_eq!(
            walk::<UserOfGenericOutsideModule>(&registry).sorted_paths(),
            sorted_paths(&[
                UserOfGenericOutsideModule::type_path(),
                <Generic<alloc::string::String>>::type_path(),
            ])
        );
    }

    #[test]
    fn external_types_excluded() {
        let registry = TypeRegistry::new();
        assert_eq!(
            walk::<UsesExternalGeneric>(&registry).sorted_paths(),
            [Element::type_path(), UsesExternalGeneric::type_path()]
        );
        assert_eq!(
            walk::<UsesExternalType>(&registry).sorted_paths(),
            [UsesExternalType::type_path()]
        );

        let narrow = TypeGraphWalker::new(&registry, ModuleScope::modules(["other_crate"]));
        let found = narrow.walk_type::<Person>().unwrap();
        assert_eq!(found.sorted_paths(), [Person::type_path()]);
    }

    #[test]
    fn walk_is_idempotent() {
        let registry = animal_registry();
        let walker = TypeGraphWalker::new(&registry, ModuleScope::RootCrate);
        let first = walker.walk_type::<PersonWithPet>().unwrap();
        let second = walker.walk_type::<PersonWithPet>().unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.iter().map(|t| t.type_path()).collect::<Vec<_>>(),
            second.iter().map(|t| t.type_path()).collect::<Vec<_>>()
        );
        assert_eq!(first.iter().next().map(|t| t.type_path()), Some(PersonWithPet::type_path()));
    }
}
