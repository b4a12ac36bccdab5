mod mocks;

pub use mocks::{MockAbuseContactClient, NullCodec};
