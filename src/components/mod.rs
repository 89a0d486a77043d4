mod navbar;
mod search;

pub use self::{navbar::*, search::*};
