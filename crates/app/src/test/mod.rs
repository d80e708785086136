//! Database-backed test support.

mod db;

pub(crate) use context::TestContext;
