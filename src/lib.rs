mod errors;
mod handle;
mod node;
mod pair;
mod sequence;
mod traits;

pub mod search;
pub mod sieve;
pub mod sorts;

pub use errors::{AlgsError, Result};
pub use handle::NodeId;
pub use node::Node;
pub use pair::Pair;
pub use sequence::{IntoIter, Iter, Sequence};
pub use sieve::{Sieve, SieveOfEratosthenes};
pub use sorts::Sort;
pub use traits::{List, Queue, Stack};
