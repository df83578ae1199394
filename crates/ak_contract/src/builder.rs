use ak_describe::info::{TypeInfo, Typed};
use ak_describe::registry::TypeRegistry;

use crate::keys::KeyAssigner;
use crate::{Configuration, ContractError, ModuleScope, NativeFormatters, TypeGraphWalker, Validation};

// -----------------------------------------------------------------------------
// ContractOptions

/// Options of a [`ContractBuilder`].
#[derive(Debug, Clone, Default)]
pub struct ContractOptions {
    /// The logical module of [`graph_of`](ContractBuilder::graph_of).
    pub module_scope: ModuleScope,
    /// Also key the properties of every registered subtype.
    pub implicitly_auto_key_subtypes: bool,
    /// Enabled from the start.
    pub native_formatters: NativeFormatters,
}

// -----------------------------------------------------------------------------
// ContractBuilder

/// Registers types and subtypes into a [`Configuration`].
///
/// Errors do not interrupt the chain: the first one is kept, later calls
/// are ignored, and [`build`](ContractBuilder::build) returns it.
///
/// # Examples
///
/// ```
/// use ak_contract::{ContractBuilder, ContractOptions, Validation};
/// use ak_describe::derive::Describe;
/// use ak_describe::impl_interface;
/// use ak_describe::registry::TypeRegistry;
///
/// pub trait Shape {}
/// impl_interface!(dyn Shape);
///
/// #[derive(Describe)]
/// #[describe(implements(dyn Shape))]
/// pub struct Circle {
///     pub radius: f64,
/// }
/// impl Shape for Circle {}
///
/// #[derive(Describe)]
/// pub struct Drawing {
///     pub title: String,
///     pub shapes: Vec<Box<dyn Shape>>,
/// }
///
/// let mut registry = TypeRegistry::new();
/// registry.register::<Circle>();
///
/// let config = ContractBuilder::new(&registry, ContractOptions::default())
///     .graph_of::<Drawing>()
///     .build()
///     .unwrap();
///
/// let table = Validation::new(&config).key_table();
/// assert!(table.lines().iter().any(|line| line == "  - shapes : 0"));
/// ```
pub struct ContractBuilder<'r> {
    registry: &'r TypeRegistry,
    options: ContractOptions,
    configuration: Configuration,
    error: Option<ContractError>,
}

impl<'r> ContractBuilder<'r> {
    pub fn new(registry: &'r TypeRegistry, options: ContractOptions) -> Self {
        let mut configuration = Configuration::new();
        configuration.add_native_formatters(options.native_formatters);
        Self {
            registry,
            options,
            configuration,
            error: None,
        }
    }

    #[inline]
    pub fn options(&self) -> &ContractOptions {
        &self.options
    }

    /// Keys the selectable properties of `T`.
    #[inline]
    pub fn auto_keyed<T: Typed + ?Sized>(self) -> Self {
        self.auto_keyed_info(T::type_info())
    }

    /// See [`auto_keyed`](Self::auto_keyed).
    pub fn auto_keyed_info(mut self, info: &'static TypeInfo) -> Self {
        if self.error.is_none() {
            let result = self.try_auto_keyed(info);
            self.record(result);
        }
        self
    }

    /// Registers `S` as a keyed subtype of the abstract `B`.
    ///
    /// `S` must be registered as an implementor of `B` in the registry.
    #[inline]
    pub fn sub_type<B: Typed + ?Sized, S: Typed + ?Sized>(self) -> Self {
        self.sub_type_info(B::type_info(), S::type_info())
    }

    /// See [`sub_type`](Self::sub_type).
    pub fn sub_type_info(mut self, base: &'static TypeInfo, sub: &'static TypeInfo) -> Self {
        if self.error.is_none() {
            let result = self.try_sub_type(base, sub);
            self.record(result);
        }
        self
    }

    /// Registers every concrete implementor of `B` found in `scope`.
    ///
    /// [`ModuleScope::RootCrate`] means the crate declaring `B`.
    #[inline]
    pub fn all_sub_types_of<B: Typed + ?Sized>(self, scope: ModuleScope) -> Self {
        self.all_sub_types_of_info(B::type_info(), scope)
    }

    /// See [`all_sub_types_of`](Self::all_sub_types_of).
    pub fn all_sub_types_of_info(mut self, base: &'static TypeInfo, scope: ModuleScope) -> Self {
        if self.error.is_none() {
            let result = self.try_all_sub_types_of(base, &scope);
            self.record(result);
        }
        self
    }

    /// Walks the graph of `T` and registers all of it.
    ///
    /// Abstract types get all their subtypes, every other user type is
    /// auto-keyed. Types are visited sorted by path.
    #[inline]
    pub fn graph_of<T: Typed + ?Sized>(self) -> Self {
        self.graph_of_info(T::type_info())
    }

    /// See [`graph_of`](Self::graph_of).
    pub fn graph_of_info(mut self, root: &'static TypeInfo) -> Self {
        if self.error.is_none() {
            let result = self.try_graph_of(root);
            self.record(result);
        }
        self
    }

    pub fn add_native_formatters(mut self, formatters: NativeFormatters) -> Self {
        self.configuration.add_native_formatters(formatters);
        self
    }

    /// A view of what is registered so far.
    #[inline]
    pub fn validation(&self) -> Validation<'_> {
        Validation::new(&self.configuration)
    }

    /// The first recorded error, if any.
    #[inline]
    pub fn error(&self) -> Option<&ContractError> {
        self.error.as_ref()
    }

    pub fn build(self) -> Result<Configuration, ContractError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        log::debug!(
            "built contract of {} keyed types and {} bases",
            self.configuration.property_mappings().len(),
            self.configuration.subtype_mappings().len()
        );
        Ok(self.configuration)
    }

    fn record(&mut self, result: Result<(), ContractError>) {
        if let Err(error) = result {
            log::debug!("contract registration failed: {error}");
            self.error = Some(error);
        }
    }

    fn try_auto_keyed(&mut self, info: &'static TypeInfo) -> Result<(), ContractError> {
        let mapping = KeyAssigner::auto_keys(info)?;
        self.configuration.add_property_mapping(mapping)
    }

    fn try_sub_type(
        &mut self,
        base: &'static TypeInfo,
        sub: &'static TypeInfo,
    ) -> Result<(), ContractError> {
        if !base.is_abstract() {
            return Err(ContractError::NotAbstract(base.type_path()));
        }
        if sub.is_abstract() {
            return Err(ContractError::AbstractSubtype(sub.type_path()));
        }
        if !self.registry.is_assignable(base.ty_id(), sub.ty_id()) {
            return Err(ContractError::NotAssignable {
                base: base.type_path(),
                sub: sub.type_path(),
            });
        }

        let added = self.configuration.add_subtype(base, sub)?;
        if added && self.options.implicitly_auto_key_subtypes {
            self.try_auto_keyed(sub)?;
        }
        Ok(())
    }

    fn try_all_sub_types_of(
        &mut self,
        base: &'static TypeInfo,
        scope: &ModuleScope,
    ) -> Result<(), ContractError> {
        if !base.is_abstract() {
            return Err(ContractError::NotAbstract(base.type_path()));
        }

        let mut subtypes = KeyAssigner::discover_subtypes(self.registry, base, scope);
        if subtypes.is_empty() {
            log::warn!("`{}` has no registered subtypes", base.type_path());
        }
        subtypes.sort_unstable_by_key(|sub| sub.type_path());
        for sub in subtypes {
            self.try_sub_type(base, sub)?;
        }
        Ok(())
    }

    fn try_graph_of(&mut self, root: &'static TypeInfo) -> Result<(), ContractError> {
        let scope = self.options.module_scope.clone();
        let found = TypeGraphWalker::new(self.registry, scope.clone()).walk(root)?;

        // Bases reached by the walk share the crate of `root`, so the scope
        // resolves the same for them.
        for info in found.sorted() {
            if info.is_abstract() {
                self.try_all_sub_types_of(info, &scope)?;
            } else {
                self.try_auto_keyed(info)?;
            }
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use ak_describe::info::{TypePath, Typed};
    use ak_describe::registry::TypeRegistry;

    use super::{ContractBuilder, ContractOptions};
    use crate::samples::*;
    use crate::{Configuration, ContractError, ModuleScope, NativeFormatters, Validation};

    fn configure(registry: &TypeRegistry, with_arm: bool) -> Configuration {
        let mut builder = ContractBuilder::new(registry, ContractOptions::default())
            .auto_keyed::<Address>()
            .auto_keyed::<Person>()
            .add_native_formatters(NativeFormatters::all());
        if with_arm {
            builder = builder.sub_type::<dyn Extremity, Arm>();
        }
        builder
            .sub_type::<dyn Extremity, Leg>()
            .sub_type::<dyn Extremity, Wing>()
            .sub_type::<dyn Animal, Mammal>()
            .sub_type::<dyn Animal, Bird>()
            .auto_keyed::<PersonWithPet>()
            .build()
            .unwrap()
    }

    #[test]
    fn changed_subtypes_change_fingerprint() {
        let registry = animal_registry();
        let full = configure(&registry, true);
        let partial = configure(&registry, false);

        let fingerprint = Validation::new(&full).fingerprint();
        assert_ne!(fingerprint, Validation::new(&partial).fingerprint());
        assert_eq!(
            Validation::new(&configure(&registry, true)).fingerprint(),
            fingerprint
        );

        let order: Vec<_> = full.property_mappings().map(|m| m.ty().type_ident()).collect();
        assert_eq!(order, ["Address", "Person", "PersonWithPet"]);
        assert_eq!(full.native_formatters(), NativeFormatters::all());
    }

    #[test]
    fn discovered_subtypes_match_explicit_ones() {
        let registry = animal_registry();
        let explicit = ContractBuilder::new(&registry, ContractOptions::default())
            .sub_type::<dyn Extremity, Arm>()
            .sub_type::<dyn Extremity, Leg>()
            .sub_type::<dyn Extremity, Wing>()
            .sub_type::<dyn Animal, Mammal>()
            .sub_type::<dyn Animal, Bird>()
            .auto_keyed::<PersonWithPet>()
            .build()
            .unwrap();

        let discovered = ContractBuilder::new(&registry, ContractOptions::default())
            .all_sub_types_of::<dyn Extremity>(ModuleScope::RootCrate)
            .all_sub_types_of::<dyn Animal>(ModuleScope::RootCrate)
            .auto_keyed::<PersonWithPet>()
            .build()
            .unwrap();

        assert_eq!(
            Validation::new(&explicit).key_table(),
            Validation::new(&discovered).key_table()
        );
    }

    #[test]
    fn graph_of_registers_everything() {
        let registry = animal_registry();
        let config = ContractBuilder::new(&registry, ContractOptions::default())
            .graph_of::<PersonWithPet>()
            .build()
            .unwrap();

        let keyed: Vec<_> = config.property_mappings().map(|m| m.ty().type_ident()).collect();
        assert_eq!(
            keyed,
            ["Address", "Arm", "Bird", "Leg", "Mammal", "Person", "PersonWithPet", "Wing"]
        );

        let animals = config
            .subtype_mapping(<dyn Animal>::type_info().ty_id())
            .unwrap();
        assert_eq!(animals.get(Bird::type_info().ty_id()), Some(0));
        assert_eq!(animals.get(Mammal::type_info().ty_id()), Some(1));
        assert_eq!(config.subtype_mappings().len(), 2);
    }

    #[test]
    fn implicit_subtype_keys() {
        let registry = animal_registry();
        let options = ContractOptions {
            implicitly_auto_key_subtypes: true,
            ..ContractOptions::default()
        };
        let config = ContractBuilder::new(&registry, options)
            .sub_type::<dyn Animal, Mammal>()
            .sub_type::<dyn Animal, Mammal>()
            .build()
            .unwrap();

        let mammal = config
            .property_mapping(Mammal::type_info().ty_id())
            .unwrap();
        assert_eq!(
            mammal.iter().collect::<Vec<_>>(),
            [("extremities", 0), ("gestation", 1), ("name", 2)]
        );
        assert_eq!(config.property_mappings().len(), 1);
    }

    #[test]
    fn first_error_wins() {
        let registry = animal_registry();

        let result = ContractBuilder::new(&registry, ContractOptions::default())
            .sub_type::<Arm, Leg>()
            .sub_type::<dyn Animal, Arm>()
            .build();
        assert_eq!(result.err(), Some(ContractError::NotAbstract(Arm::type_path())));

        let result = ContractBuilder::new(&registry, ContractOptions::default())
            .sub_type::<dyn Animal, Arm>()
            .build();
        assert_eq!(
            result.err(),
            Some(ContractError::NotAssignable {
                base: <dyn Animal>::type_path(),
                sub: Arm::type_path(),
            })
        );

        let result = ContractBuilder::new(&registry, ContractOptions::default())
            .sub_type::<dyn Animal, dyn Extremity>()
            .build();
        assert!(matches!(result, Err(ContractError::AbstractSubtype(_))));

        let builder = ContractBuilder::new(&registry, ContractOptions::default())
            .all_sub_types_of::<Person>(ModuleScope::RootCrate);
        assert!(builder.error().is_some());
        assert!(builder.validation().configuration().is_empty());
    }

    #[test]
    fn unregistered_subtypes_are_not_found() {
        let registry = TypeRegistry::new();
        let config = ContractBuilder::new(&registry, ContractOptions::default())
            .all_sub_types_of::<dyn Animal>(ModuleScope::RootCrate)
            .build()
            .unwrap();
        assert!(config.subtype_mappings().is_empty());
        assert!(config.is_empty());
    }
}
