// cssmerge - concatenate every stylesheet under a directory into one file
// Library exports

pub mod cli;
pub mod config;
pub mod logging;
pub mod merge;
