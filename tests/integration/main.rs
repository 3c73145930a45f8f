//! Integration tests for Library of Stuff

mod catalog_tests;
mod shell_tests;
