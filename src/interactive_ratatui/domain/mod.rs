pub mod filter;
pub mod models;

#[cfg(test)]
mod filter_test;
#[cfg(test)]
mod models_test;
