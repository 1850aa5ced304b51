#![no_std]
#![feature(type_alias_impl_trait)]

pub mod infrastructure;
