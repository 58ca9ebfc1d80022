//! A growable array that keeps its growth policy and buffer ownership in
//! plain sight.
//!
//! [`SimpleVec`] owns a single [`ArrayPtr`], a fixed-size heap block whose
//! slots are always initialized. Changing capacity means building a new
//! block, moving the live elements across and swapping the blocks.
//!
//! ```
//! use simple_vector::{reserve, SimpleVec};
//!
//! let mut vec = SimpleVec::from(reserve(2));
//! vec.push(1);
//! vec.push(2);
//! assert_eq!(vec.capacity(), 2);
//!
//! vec.push(3);
//! assert_eq!(vec.capacity(), 4);
//!
//! assert_eq!(vec.at(2), Ok(&3));
//! assert!(vec.at(3).is_err());
//! ```

mod array_ptr;
mod errors;
mod reserve;
mod simple_vec;

pub use array_ptr::ArrayPtr;
pub use errors::{AllocErr, OutOfRangeError};
pub use reserve::{reserve, ReserveProxy};
pub use simple_vec::{IntoIter, SimpleVec};
