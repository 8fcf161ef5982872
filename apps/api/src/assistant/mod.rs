pub mod handlers;
pub mod prompts;
pub mod service;

#[cfg(test)]
pub mod testing;
