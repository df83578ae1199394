//! Type graphs shared by the tests.

#![deny(unused_parens)]

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::time::Duration;
use std::time::SystemTime;

use ak_describe::derive::{Describe, impl_type_path};
use ak_describe::impl_interface;
use ak_describe::impls::NonGenericTypeInfoCell;
use ak_describe::info::{Access, PropertyInfo, StructInfo, TypeInfo, Typed};
use ak_describe::registry::{GetTypeMeta, TypeRegistry};

// -----------------------------------------------------------------------------
// People

#[derive(Describe)]
pub struct Address {
    pub city: String,
    pub country: String,
    pub street_address: String,
    pub zip_code: String,
}

#[derive(Describe)]
pub struct Person {
    pub addresses: Vec<Address>,
    pub birthday: SystemTime,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Describe)]
pub struct PersonWithPet {
    pub human: Person,
    pub pet: Box<dyn Animal>,
}

// -----------------------------------------------------------------------------
// Animals

#[derive(Describe)]
pub enum Side {
    Left,
    Right,
}

pub trait Extremity {}

impl_interface!(dyn Extremity { side: Side });

pub trait Animal {}

impl_interface!(dyn Animal {
    extremities: Vec<Box<dyn Extremity>>,
    name: String,
});

#[derive(Describe)]
#[describe(implements(dyn Extremity))]
pub struct Arm {
    pub side: Side,
    pub number_of_fingers: u8,
}

#[derive(Describe)]
#[describe(implements(dyn Extremity))]
pub struct Leg {
    pub side: Side,
    pub number_of_toes: u8,
}

#[derive(Describe)]
#[describe(implements(dyn Extremity))]
pub struct Wing {
    pub side: Side,
    pub span: i32,
}

impl Extremity for Arm {}
impl Extremity for Leg {}
impl Extremity for Wing {}

#[derive(Describe)]
#[describe(implements(dyn Animal))]
pub struct Mammal {
    pub extremities: Vec<Box<dyn Extremity>>,
    pub name: String,
    pub gestation: Duration,
}

#[derive(Describe)]
#[describe(implements(dyn Animal))]
pub struct Bird {
    pub extremities: Vec<Box<dyn Extremity>>,
    pub name: String,
    pub incubation_period: Duration,
}

impl Animal for Mammal {}
impl Animal for Bird {}

/// Registers both animal hierarchies.
pub fn animal_registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry.register::<PersonWithPet>();
    registry.register::<Arm>();
    registry.register::<Leg>();
    registry.register::<Wing>();
    registry.register::<Mammal>();
    registry.register::<Bird>();
    registry
}

// -----------------------------------------------------------------------------
// Graph shapes

#[derive(Describe)]
pub struct Node {
    pub children: Vec<Node>,
}

#[derive(Describe)]
pub struct Ping {
    pub pong: Option<Box<Pong>>,
}

#[derive(Describe)]
pub struct Pong {
    pub pings: Vec<Ping>,
    pub by_label: BTreeMap<Label, Ping>,
}

#[derive(Describe)]
pub struct Label {
    pub text: String,
}

#[derive(Describe)]
pub struct Element {
    pub label: String,
}

#[derive(Describe)]
pub struct Generic<T> {
    pub items: Vec<T>,
}

#[derive(Describe)]
pub struct UserOfGenericInModule {
    pub elements: Generic<Element>,
}

#[derive(Describe)]
pub struct UserOfGenericOutsideModule {
    pub elements: Generic<String>,
}

#[derive(Describe)]
pub struct UsesExternalGeneric {
    pub elements: other_crate::Thing<Element>,
}

#[derive(Describe)]
pub struct UsesExternalType {
    pub externally_typed: other_crate::Gadget,
}

#[derive(Describe)]
pub struct ContainsNullable {
    pub count: Option<i32>,
    pub side: Option<Side>,
    pub address: Option<Address>,
}

/// Types reported under another crate.
pub mod other_crate {
    use alloc::vec::Vec;

    use ak_describe::derive::Describe;

    #[derive(Describe)]
    #[describe(type_path = "other_crate::Thing")]
    pub struct Thing<T> {
        pub inner: Vec<T>,
    }

    #[derive(Describe)]
    #[describe(type_path = "other_crate::Gadget")]
    pub struct Gadget {
        pub serial: u64,
    }
}

// -----------------------------------------------------------------------------
// Hand-described types
//
// Rust has no indexers or setter-only visibility, so these two are
// described by hand.

pub struct SerializableProperties;

impl_type_path!((in ak_contract::samples) SerializableProperties);

impl Typed for SerializableProperties {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| {
            TypeInfo::Struct(StructInfo::new::<Self>(&[
                PropertyInfo::new::<i32>("Item").with_index_arity(1),
                PropertyInfo::new::<i32>("Number"),
                PropertyInfo::new::<i32>("PrivateWriteNumber").with_setter(Access::Restricted),
                PropertyInfo::new::<i32>("ProtectedWriteNumber").with_setter(Access::Restricted),
                PropertyInfo::new::<i32>("ReadonlyNumber").read_only(),
                PropertyInfo::new::<String>("Text"),
            ]))
        })
    }
}

impl GetTypeMeta for SerializableProperties {
    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<i32>();
        registry.register::<String>();
    }
}

pub struct HasIndexer;

impl_type_path!((in ak_contract::samples) HasIndexer);

impl Typed for HasIndexer {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| {
            TypeInfo::Struct(StructInfo::new::<Self>(&[
                PropertyInfo::new::<Element>("Item").with_index_arity(1),
                PropertyInfo::new::<Vec<Node>>("nodes"),
            ]))
        })
    }
}

impl GetTypeMeta for HasIndexer {
    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<Element>();
        registry.register::<Vec<Node>>();
    }
}
