#![allow(dead_code)]

pub mod registry;
