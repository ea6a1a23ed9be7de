mod postgrest;

pub use postgrest::{AuditStore, StoreError};
