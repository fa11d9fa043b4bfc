pub mod clipboard_service;
pub mod search_service;

#[cfg(test)]
mod search_service_test;
