mod attributes;
mod define_parser;
mod describe_derive;
mod describe_enum;
mod describe_meta;
mod describe_struct;
mod type_parser;

pub(crate) use attributes::{FieldAttributes, TypeAttributes};
pub(crate) use define_parser::TypePathParser;
pub(crate) use describe_derive::DescribeDerive;
pub(crate) use describe_enum::DescribeEnum;
pub(crate) use describe_meta::{Bound, DescribeMeta};
pub(crate) use describe_struct::{DescribeStruct, StructField};
pub(crate) use type_parser::TypeParser;
