mod assert_implements;
mod auto_register;
mod trait_get_type_meta;
mod trait_type_path;
mod trait_typed;

pub(crate) use assert_implements::impl_assert_implements;
pub(crate) use auto_register::get_auto_register_impl;
pub(crate) use trait_get_type_meta::impl_trait_get_type_meta;
pub(crate) use trait_type_path::impl_trait_type_path;
pub(crate) use trait_typed::impl_trait_typed;
