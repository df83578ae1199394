use alloc::vec::Vec;
use core::any::TypeId;

use ak_describe::info::{PropertyInfo, TypeInfo};
use ak_describe::registry::TypeRegistry;

use crate::classifier::{Classifier, ModuleScope};
use crate::{ContractError, PropertySelector};

/// A wire-format key of a property or subtype.
pub type Key = u32;

// -----------------------------------------------------------------------------
// PropertyKeyMapping

/// Keys of the properties of one type, in key order.
///
/// Names and keys are each unique within a mapping.
#[derive(Debug, Clone)]
pub struct PropertyKeyMapping {
    ty: &'static TypeInfo,
    entries: Vec<(&'static str, Key)>,
}

impl PropertyKeyMapping {
    /// An empty mapping for `ty`.
    #[inline]
    pub fn new(ty: &'static TypeInfo) -> Self {
        Self {
            ty,
            entries: Vec::new(),
        }
    }

    /// The keyed type.
    #[inline]
    pub fn ty(&self) -> &'static TypeInfo {
        self.ty
    }

    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.ty.type_path()
    }

    /// The key of property `name`.
    pub fn get(&self, name: &str) -> Option<Key> {
        self.entries.iter().find(|(n, _)| *n == name).map(|(_, k)| *k)
    }

    /// The property holding `key`.
    pub fn name_of(&self, key: Key) -> Option<&'static str> {
        self.entries.iter().find(|(_, k)| *k == key).map(|(n, _)| *n)
    }

    /// `(name, key)` pairs in key assignment order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&'static str, Key)> + '_ {
        self.entries.iter().copied()
    }

    /// `(name, key)` pairs sorted by property name.
    pub fn sorted_by_name(&self) -> Vec<(&'static str, Key)> {
        let mut sorted = self.entries.clone();
        sorted.sort_unstable_by(|a, b| a.0.cmp(b.0));
        sorted
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds one property.
    ///
    /// Re-inserting the same pair is a no-op. An empty name, moving a
    /// property to another key, or giving a key to a second property fails.
    pub fn insert(&mut self, name: &'static str, key: Key) -> Result<bool, ContractError> {
        if name.is_empty() {
            return Err(ContractError::UnnamedProperty {
                ty: self.type_path(),
            });
        }
        self.check(name, key)?;
        if self.get(name).is_some() {
            return Ok(false);
        }
        self.entries.push((name, key));
        Ok(true)
    }

    /// Adds every entry of `other`, or none when one of them conflicts.
    ///
    /// Returns the number of entries that were new.
    pub fn merge(&mut self, other: &PropertyKeyMapping) -> Result<usize, ContractError> {
        debug_assert_eq!(self.ty.ty_id(), other.ty.ty_id());
        for (name, key) in other.iter() {
            self.check(name, key)?;
        }
        // Keys within `other` are unique by construction of `insert`.
        let mut added = 0;
        for (name, key) in other.iter() {
            if self.insert(name, key)? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Fails unless names are non-empty and names and keys are unique.
    pub(crate) fn validate(&self) -> Result<(), ContractError> {
        let mut seen = PropertyKeyMapping::new(self.ty);
        for (name, key) in self.iter() {
            if seen.get(name).is_some() {
                return Err(ContractError::DuplicateProperty {
                    ty: self.type_path(),
                    property: name,
                });
            }
            seen.insert(name, key)?;
        }
        Ok(())
    }

    fn check(&self, name: &'static str, key: Key) -> Result<(), ContractError> {
        let ty = self.type_path();
        if let Some(existing) = self.get(name) {
            if existing != key {
                return Err(ContractError::ConflictingPropertyKey {
                    ty,
                    property: name,
                    existing,
                    requested: key,
                });
            }
            return Ok(());
        }
        match self.name_of(key) {
            Some(first) => Err(ContractError::DuplicatePropertyKey {
                ty,
                key,
                first,
                second: name,
            }),
            None => Ok(()),
        }
    }
}

impl PartialEq for PropertyKeyMapping {
    fn eq(&self, other: &Self) -> bool {
        self.ty.ty_id() == other.ty.ty_id() && self.entries == other.entries
    }
}

impl Eq for PropertyKeyMapping {}

// -----------------------------------------------------------------------------
// SubtypeKeyMapping

/// Keys of the concrete subtypes of one abstract base.
///
/// Subtypes are kept sorted by full type path and keyed by position, so
/// keys only depend on the set of subtypes.
#[derive(Debug, Clone)]
pub struct SubtypeKeyMapping {
    base: &'static TypeInfo,
    subtypes: Vec<&'static TypeInfo>,
}

impl SubtypeKeyMapping {
    /// A mapping for `base` without subtypes.
    #[inline]
    pub fn new(base: &'static TypeInfo) -> Self {
        Self {
            base,
            subtypes: Vec::new(),
        }
    }

    #[inline]
    pub fn base(&self) -> &'static TypeInfo {
        self.base
    }

    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.base.type_path()
    }

    /// Adds a subtype, re-deriving the keys. Returns `false` if present.
    pub fn insert(&mut self, sub: &'static TypeInfo) -> bool {
        if self.contains(sub.ty_id()) {
            return false;
        }
        let at = self
            .subtypes
            .partition_point(|s| s.type_path() < sub.type_path());
        self.subtypes.insert(at, sub);
        true
    }

    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.subtypes.iter().any(|s| s.ty_id() == type_id)
    }

    /// The key of a subtype.
    pub fn get(&self, type_id: TypeId) -> Option<Key> {
        self.subtypes
            .iter()
            .position(|s| s.ty_id() == type_id)
            .and_then(|index| Key::try_from(index).ok())
    }

    /// `(subtype, key)` pairs sorted by subtype path.
    pub fn iter(&self) -> impl Iterator<Item = (&'static TypeInfo, Key)> + '_ {
        (0..).zip(self.subtypes.iter()).map(|(key, sub)| (*sub, key))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.subtypes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.subtypes.is_empty()
    }
}

impl PartialEq for SubtypeKeyMapping {
    fn eq(&self, other: &Self) -> bool {
        self.base.ty_id() == other.base.ty_id()
            && self.subtypes.len() == other.subtypes.len()
            && self
                .subtypes
                .iter()
                .zip(&other.subtypes)
                .all(|(a, b)| a.ty_id() == b.ty_id())
    }
}

impl Eq for SubtypeKeyMapping {}

// -----------------------------------------------------------------------------
// KeyAssigner

/// Assigns keys to properties and subtypes.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyAssigner;

impl KeyAssigner {
    /// Keys `0..N` in the given order.
    ///
    /// `props` are expected in [`PropertySelector`] order. An empty or
    /// repeated name fails.
    pub fn assign_property_keys(
        ty: &'static TypeInfo,
        props: &[&PropertyInfo],
    ) -> Result<PropertyKeyMapping, ContractError> {
        let mut mapping = PropertyKeyMapping::new(ty);
        for (key, prop) in (0..).zip(props) {
            let name = prop.name();
            if mapping.get(name).is_some() {
                return Err(ContractError::DuplicateProperty {
                    ty: ty.type_path(),
                    property: name,
                });
            }
            mapping.insert(name, key)?;
        }
        Ok(mapping)
    }

    /// Selects the properties of `ty` and keys them.
    ///
    /// A type without selectable properties yields an empty mapping.
    pub fn auto_keys(ty: &'static TypeInfo) -> Result<PropertyKeyMapping, ContractError> {
        let props = PropertySelector::selectable(ty)?;
        Self::assign_property_keys(ty, &props)
    }

    /// Keys `0..M` by full type path. Repeated subtypes are kept once.
    pub fn assign_subtype_keys<I>(base: &'static TypeInfo, subtypes: I) -> SubtypeKeyMapping
    where
        I: IntoIterator<Item = &'static TypeInfo>,
    {
        let mut mapping = SubtypeKeyMapping::new(base);
        for sub in subtypes {
            mapping.insert(sub);
        }
        mapping
    }

    /// The concrete implementors of `base` registered in `registry`,
    /// restricted to `scope` (resolved relative to `base`).
    ///
    /// Abstract implementors and `base` itself are left out.
    pub fn discover_subtypes(
        registry: &TypeRegistry,
        base: &'static TypeInfo,
        scope: &ModuleScope,
    ) -> Vec<&'static TypeInfo> {
        let classifier = Classifier::for_root(scope, base);
        crate::walker::concrete_implementors(registry, &classifier, base)
            .filter(|sub| sub.ty_id() != base.ty_id())
            .collect()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use ak_describe::info::{PropertyInfo, TypePath, Typed};

    use super::{KeyAssigner, PropertyKeyMapping};
    use crate::samples::*;
    use crate::{ContractError, ModuleScope};

    #[test]
    fn property_keys_follow_names() {
        let mapping = KeyAssigner::auto_keys(Person::type_info()).unwrap();
        assert_eq!(
            mapping.iter().collect::<Vec<_>>(),
            [
                ("addresses", 0),
                ("birthday", 1),
                ("email", 2),
                ("first_name", 3),
                ("last_name", 4)
            ]
        );
        assert_eq!(mapping.get("email"), Some(2));
        assert_eq!(mapping.name_of(4), Some("last_name"));

        let again = KeyAssigner::auto_keys(Person::type_info()).unwrap();
        assert_eq!(mapping, again);
    }

    #[test]
    fn repeated_names_are_rejected() {
        let x = PropertyInfo::new::<u8>("x");
        let y = PropertyInfo::new::<u8>("y");
        assert!(matches!(
            KeyAssigner::assign_property_keys(Address::type_info(), &[&x, &y, &x]),
            Err(ContractError::DuplicateProperty { property: "x", .. })
        ));

        let unnamed = PropertyInfo::new::<u8>("");
        assert!(matches!(
            KeyAssigner::assign_property_keys(Address::type_info(), &[&x, &unnamed]),
            Err(ContractError::UnnamedProperty { .. })
        ));

        let mapping = KeyAssigner::assign_property_keys(Address::type_info(), &[&y, &x]).unwrap();
        assert_eq!(mapping.iter().collect::<Vec<_>>(), [("y", 0), ("x", 1)]);
        assert_eq!(mapping.validate(), Ok(()));

        let mut empty = PropertyKeyMapping::new(Address::type_info());
        assert!(matches!(
            empty.insert("", 0),
            Err(ContractError::UnnamedProperty { .. })
        ));
        assert!(empty.is_empty());
    }

    #[test]
    fn mappings_compare_by_type_and_entries() {
        let mut a = PropertyKeyMapping::new(Address::type_info());
        a.insert("city", 0).unwrap();
        let mut b = PropertyKeyMapping::new(Address::type_info());
        b.insert("city", 0).unwrap();
        assert_eq!(a, b);

        b.insert("country", 1).unwrap();
        assert_ne!(a, b);

        let mut other_type = PropertyKeyMapping::new(Person::type_info());
        other_type.insert("city", 0).unwrap();
        assert_ne!(a, other_type);

        let base = <dyn Extremity>::type_info();
        let left = KeyAssigner::assign_subtype_keys(base, [Wing::type_info(), Arm::type_info()]);
        let right = KeyAssigner::assign_subtype_keys(base, [Arm::type_info(), Wing::type_info()]);
        assert_eq!(left, right);

        let fewer = KeyAssigner::assign_subtype_keys(base, [Arm::type_info()]);
        assert_ne!(left, fewer);

        let animals = KeyAssigner::assign_subtype_keys(<dyn Animal>::type_info(), [Arm::type_info()]);
        assert_ne!(fewer, animals);
    }

    #[test]
    fn interfaces_and_containers() {
        let mapping = KeyAssigner::auto_keys(<dyn Animal>::type_info()).unwrap();
        assert_eq!(mapping.len(), 2);

        let mapping = KeyAssigner::auto_keys(<Vec<u8>>::type_info()).unwrap();
        assert!(mapping.is_empty());
    }

    #[test]
    fn merge_rules() {
        let mut mapping = PropertyKeyMapping::new(Address::type_info());
        assert!(mapping.insert("city", 0).unwrap());
        assert!(!mapping.insert("city", 0).unwrap());

        let mut other = PropertyKeyMapping::new(Address::type_info());
        other.insert("city", 0).unwrap();
        other.insert("country", 1).unwrap();
        assert_eq!(mapping.merge(&other), Ok(1));
        assert_eq!(mapping.merge(&other), Ok(0));

        assert!(matches!(
            mapping.insert("city", 3),
            Err(ContractError::ConflictingPropertyKey {
                existing: 0,
                requested: 3,
                ..
            })
        ));
        assert!(matches!(
            mapping.insert("zip_code", 1),
            Err(ContractError::DuplicatePropertyKey {
                first: "country",
                second: "zip_code",
                ..
            })
        ));

        let mut clash = PropertyKeyMapping::new(Address::type_info());
        clash.insert("street_address", 2).unwrap();
        clash.insert("city", 5).unwrap();
        assert!(mapping.merge(&clash).is_err());
        // Nothing was applied.
        assert_eq!(mapping.get("street_address"), None);
    }

    #[test]
    fn subtype_keys_by_full_name() {
        let mapping = KeyAssigner::assign_subtype_keys(
            <dyn Extremity>::type_info(),
            [
                Wing::type_info(),
                Arm::type_info(),
                Leg::type_info(),
                Arm::type_info(),
            ],
        );
        let keyed: Vec<_> = mapping.iter().map(|(s, k)| (s.type_path(), k)).collect();
        assert_eq!(
            keyed,
            [
                (Arm::type_path(), 0),
                (Leg::type_path(), 1),
                (Wing::type_path(), 2)
            ]
        );

        let mut mapping = KeyAssigner::assign_subtype_keys(
            <dyn Extremity>::type_info(),
            [Leg::type_info(), Wing::type_info()],
        );
        assert_eq!(mapping.get(Wing::type_info().ty_id()), Some(1));
        assert!(mapping.insert(Arm::type_info()));
        assert_eq!(mapping.get(Wing::type_info().ty_id()), Some(2));
    }

    #[test]
    fn discovered_subtypes() {
        let registry = animal_registry();
        let mut found: Vec<_> = KeyAssigner::discover_subtypes(
            &registry,
            <dyn Animal>::type_info(),
            &ModuleScope::RootCrate,
        )
        .into_iter()
        .map(|s| s.type_path())
        .collect();
        found.sort_unstable();
        assert_eq!(found, [Bird::type_path(), Mammal::type_path()]);

        let elsewhere = KeyAssigner::discover_subtypes(
            &registry,
            <dyn Animal>::type_info(),
            &ModuleScope::modules(["other_crate"]),
        );
        assert!(elsewhere.is_empty());
    }
}
