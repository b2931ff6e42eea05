//! Routing of chemical records to the search indices they are stored in
pub mod index;
pub mod record;

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use crate::index::{get_index_name, IndexError, IndexKey, IndexName, Indexed};
    pub use crate::record::*;
    pub use crate::index_name;
}
