pub mod overridable;
pub mod performance;
pub mod snapshot;

#[cfg(test)]
pub(crate) mod test_utils;
