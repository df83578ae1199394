use alloc::vec::Vec;
use core::any::TypeId;

use ak_describe::info::TypeInfo;
use ak_utils::TypeIdMap;
use bitflags::bitflags;

use crate::ContractError;
use crate::keys::{PropertyKeyMapping, SubtypeKeyMapping};

// -----------------------------------------------------------------------------
// NativeFormatters

bitflags! {
    /// Built-in formats the serialization engine should prefer over
    /// keyed contracts.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct NativeFormatters: u8 {
        const DATE_TIME = 1 << 0;
        const DATE_TIME_ARRAY = 1 << 1;
        const DECIMAL = 1 << 2;
        const GUID = 1 << 3;
    }
}

impl Default for NativeFormatters {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

// -----------------------------------------------------------------------------
// ContractSink

/// Receives a finished [`Configuration`].
///
/// Implemented by the serialization engine to install its formatters.
pub trait ContractSink {
    /// Called once per keyed type, in registration order.
    fn property_keyed(&mut self, mapping: &PropertyKeyMapping);

    /// Called once per base, sorted by base path.
    fn subtype_keyed(&mut self, mapping: &SubtypeKeyMapping);

    /// Called last, only when some native formatter is enabled.
    fn native_formatters(&mut self, formatters: NativeFormatters) {
        let _ = formatters;
    }
}

// -----------------------------------------------------------------------------
// Configuration

/// The keys of every registered type and subtype.
///
/// Usually produced by [`ContractBuilder`](crate::ContractBuilder), then
/// checked with [`Validation`](crate::Validation) and handed to the engine
/// with [`apply_to`](Configuration::apply_to).
#[derive(Debug, Clone, Default)]
pub struct Configuration {
    properties: Vec<PropertyKeyMapping>,
    property_index: TypeIdMap<usize>,
    subtypes: Vec<SubtypeKeyMapping>,
    subtype_index: TypeIdMap<usize>,
    native_formatters: NativeFormatters,
}

impl Configuration {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a property mapping, merging it into an earlier one of the same
    /// type.
    ///
    /// Names and keys must be unique within `mapping`. On error the
    /// configuration is left unchanged.
    pub fn add_property_mapping(&mut self, mapping: PropertyKeyMapping) -> Result<(), ContractError> {
        mapping.validate()?;
        let type_id = mapping.ty().ty_id();
        if let Some(&index) = self.property_index.get(&type_id) {
            let added = self.properties[index].merge(&mapping)?;
            if added == 0 {
                log::debug!("`{}` is already keyed", mapping.type_path());
            }
            return Ok(());
        }

        log::debug!(
            "keyed {} properties of `{}`",
            mapping.len(),
            mapping.type_path()
        );
        self.property_index.insert(type_id, self.properties.len());
        self.properties.push(mapping);
        Ok(())
    }

    /// Records `sub` as a subtype of `base`. Returns `false` if known.
    ///
    /// Assignability is the caller's concern; only abstractness is checked
    /// here.
    pub fn add_subtype(
        &mut self,
        base: &'static TypeInfo,
        sub: &'static TypeInfo,
    ) -> Result<bool, ContractError> {
        if !base.is_abstract() {
            return Err(ContractError::NotAbstract(base.type_path()));
        }
        if sub.is_abstract() {
            return Err(ContractError::AbstractSubtype(sub.type_path()));
        }

        let index = match self.subtype_index.get(&base.ty_id()) {
            Some(&index) => index,
            None => {
                let index = self.subtypes.len();
                self.subtypes.push(SubtypeKeyMapping::new(base));
                self.subtype_index.insert(base.ty_id(), index);
                index
            }
        };

        let added = self.subtypes[index].insert(sub);
        if added {
            log::debug!("`{}` is a subtype of `{}`", sub.type_path(), base.type_path());
        }
        Ok(added)
    }

    #[inline]
    pub fn add_native_formatters(&mut self, formatters: NativeFormatters) {
        self.native_formatters |= formatters;
    }

    /// Property mappings in registration order.
    #[inline]
    pub fn property_mappings(&self) -> impl ExactSizeIterator<Item = &PropertyKeyMapping> {
        self.properties.iter()
    }

    #[inline]
    pub fn property_mapping(&self, type_id: TypeId) -> Option<&PropertyKeyMapping> {
        self.property_index
            .get(&type_id)
            .map(|&index| &self.properties[index])
    }

    /// Subtype mappings sorted by base path.
    pub fn subtype_mappings(&self) -> Vec<&SubtypeKeyMapping> {
        let mut sorted: Vec<_> = self.subtypes.iter().collect();
        sorted.sort_unstable_by_key(|mapping| mapping.type_path());
        sorted
    }

    #[inline]
    pub fn subtype_mapping(&self, base: TypeId) -> Option<&SubtypeKeyMapping> {
        self.subtype_index
            .get(&base)
            .map(|&index| &self.subtypes[index])
    }

    #[inline]
    pub fn native_formatters(&self) -> NativeFormatters {
        self.native_formatters
    }

    /// Whether nothing was registered.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.subtypes.is_empty() && self.native_formatters.is_empty()
    }

    /// Hands the configuration to `sink`.
    pub fn apply_to(self, sink: &mut impl ContractSink) {
        for mapping in &self.properties {
            sink.property_keyed(mapping);
        }
        for mapping in self.subtype_mappings() {
            sink.subtype_keyed(mapping);
        }
        if !self.native_formatters.is_empty() {
            sink.native_formatters(self.native_formatters);
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use ak_describe::info::{PropertyInfo, TypePath, Typed};

    use super::{Configuration, ContractSink, NativeFormatters};
    use crate::keys::{KeyAssigner, PropertyKeyMapping, SubtypeKeyMapping};
    use crate::samples::*;
    use crate::ContractError;

    #[test]
    fn is_send_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<Configuration>();
    }

    #[test]
    fn registration_order_and_merging() {
        let mut config = Configuration::new();
        config
            .add_property_mapping(KeyAssigner::auto_keys(Person::type_info()).unwrap())
            .unwrap();
        config
            .add_property_mapping(KeyAssigner::auto_keys(Address::type_info()).unwrap())
            .unwrap();
        config
            .add_property_mapping(KeyAssigner::auto_keys(Person::type_info()).unwrap())
            .unwrap();

        let order: Vec<_> = config.property_mappings().map(|m| m.type_path()).collect();
        assert_eq!(order, [Person::type_path(), Address::type_path()]);

        let mut moved = PropertyKeyMapping::new(Address::type_info());
        moved.insert("city", 7).unwrap();
        assert!(matches!(
            config.add_property_mapping(moved),
            Err(ContractError::ConflictingPropertyKey { property: "city", .. })
        ));

        let mut shared = PropertyKeyMapping::new(Address::type_info());
        shared.insert("planet", 0).unwrap();
        assert!(matches!(
            config.add_property_mapping(shared),
            Err(ContractError::DuplicatePropertyKey { key: 0, .. })
        ));

        let address = config
            .property_mapping(Address::type_info().ty_id())
            .unwrap();
        assert_eq!(address.len(), 4);
    }

    #[test]
    fn repeated_names_never_reach_the_table() {
        let x = PropertyInfo::new::<u8>("x");
        let mut config = Configuration::new();
        assert!(matches!(
            KeyAssigner::assign_property_keys(Address::type_info(), &[&x, &x])
                .and_then(|mapping| config.add_property_mapping(mapping)),
            Err(ContractError::DuplicateProperty { property: "x", .. })
        ));
        assert!(config.is_empty());

        let key_table = crate::Validation::new(&config).key_table();
        assert!(!key_table.lines().iter().any(|line| line.starts_with("  - x")));
    }

    #[test]
    fn subtypes_are_idempotent() {
        let mut config = Configuration::new();
        let base = <dyn Extremity>::type_info();
        assert_eq!(config.add_subtype(base, Wing::type_info()), Ok(true));
        assert_eq!(config.add_subtype(base, Arm::type_info()), Ok(true));
        assert_eq!(config.add_subtype(base, Wing::type_info()), Ok(false));

        let mapping = config.subtype_mapping(base.ty_id()).unwrap();
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get(Arm::type_info().ty_id()), Some(0));
        assert_eq!(mapping.get(Wing::type_info().ty_id()), Some(1));

        assert_eq!(
            config.add_subtype(Arm::type_info(), Leg::type_info()),
            Err(ContractError::NotAbstract(Arm::type_path()))
        );
        assert_eq!(
            config.add_subtype(<dyn Animal>::type_info(), base),
            Err(ContractError::AbstractSubtype(<dyn Extremity>::type_path()))
        );
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<&'static str>,
        formatters: Option<NativeFormatters>,
    }

    impl ContractSink for Recorder {
        fn property_keyed(&mut self, mapping: &PropertyKeyMapping) {
            self.events.push(mapping.ty().type_ident());
        }

        fn subtype_keyed(&mut self, mapping: &SubtypeKeyMapping) {
            self.events.push(mapping.base().type_ident());
        }

        fn native_formatters(&mut self, formatters: NativeFormatters) {
            self.formatters = Some(formatters);
        }
    }

    #[test]
    fn applies_to_sink() {
        let mut config = Configuration::new();
        config
            .add_property_mapping(KeyAssigner::auto_keys(Wing::type_info()).unwrap())
            .unwrap();
        config
            .add_subtype(<dyn Extremity>::type_info(), Wing::type_info())
            .unwrap();
        config
            .add_subtype(<dyn Animal>::type_info(), Bird::type_info())
            .unwrap();
        config.add_native_formatters(NativeFormatters::GUID);
        config.add_native_formatters(NativeFormatters::DATE_TIME);

        let mut sink = Recorder::default();
        config.apply_to(&mut sink);
        assert_eq!(sink.events, ["Wing", "Animal", "Extremity"]);
        assert_eq!(
            sink.formatters,
            Some(NativeFormatters::GUID | NativeFormatters::DATE_TIME)
        );

        let mut sink = Recorder::default();
        Configuration::new().apply_to(&mut sink);
        assert!(sink.events.is_empty());
        assert_eq!(sink.formatters, None);
    }
}
