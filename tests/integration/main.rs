//! Integration tests for the fstree filesystem model

mod file_operations;
mod ordering_properties;
mod tree_population;
