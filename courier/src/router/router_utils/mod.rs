pub mod loader;

#[cfg(any(test, feature = "mock"))]
#[allow(dead_code)]
pub mod mock;
