pub(crate) mod record;
pub(crate) mod sample;
pub(crate) mod store;

#[cfg(test)]
#[path = "../tests/unit/records/testing.rs"]
pub(crate) mod testing;
