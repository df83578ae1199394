#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use ak_contract as contract;
pub use ak_describe as describe;
pub use ak_utils as utils;
