//! SQL clause building blocks shared by the statement builders.

pub mod condition;
pub mod grouping;
pub mod limit;
pub mod ordering;
pub mod relation;

pub use condition::{ConditionChain, ConditionFragment, Connector};
pub use grouping::Grouping;
pub use limit::Limit;
pub use ordering::{Direction, Ordering};
pub use relation::{JoinType, RelationChain, RelationFragment};
