//! Common types and traits for all aggregates

pub mod aggregate_id;

// Re-exports
pub use aggregate_id::AggregateId;

/// Declares an integer-backed identifier newtype for an aggregate.
///
/// The backend issues plain integer primary keys; the newtype keeps a
/// `ContactId` from being passed where a `SaleOrderId` is expected while
/// staying transparent on the wire.
macro_rules! define_aggregate_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl $crate::domain::common::AggregateId for $name {
            fn as_string(&self) -> String {
                self.0.to_string()
            }

            fn from_string(s: &str) -> Result<Self, String> {
                s.trim()
                    .parse::<i64>()
                    .map($name)
                    .map_err(|e| format!("Invalid {}: {}", stringify!($name), e))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub(crate) use define_aggregate_id;
