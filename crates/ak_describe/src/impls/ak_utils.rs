use ::ak_utils::hash::hashbrown::{HashMap, HashSet};

use crate::derive::impl_type_path;
use crate::impls::GenericTypeInfoCell;
use crate::impls::std::{impl_describe_for_hash_map, impl_describe_for_hash_set};
use crate::info::{Generics, MapInfo, SetInfo, TypeInfo, TypeParamInfo, TypePath, Typed};
use crate::registry::{GetTypeMeta, TypeRegistry};

impl_type_path!(::ak_utils::hash::FixedHashState);
impl_type_path!(::ak_utils::hash::NoOpHashState);

impl_type_path!((in hashbrown) HashMap<K, V, S>);
impl_type_path!((in hashbrown) HashSet<T, S>);

impl_describe_for_hash_map!(HashMap);
impl_describe_for_hash_set!(HashSet);
