#![allow(dead_code, unused_imports)]

pub(crate) mod fake_docker;
pub(crate) mod test_context;

pub(crate) use fake_docker::FakeDocker;
pub(crate) use test_context::TestContext;
