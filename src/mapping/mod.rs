//! Mapping between the nested external document and the relational rows.
//!
//! Write side: [`relations`] and [`sprites`] turn one document into flat rows.
//! Read side: [`reduce`] turns reassembled rows into the response shapes.

pub mod reduce;
pub mod relations;
pub mod sprites;

#[cfg(test)]
pub(crate) mod fixtures;

pub use reduce::{to_details, to_summary};
pub use relations::{
    extract_details, extract_relations, group_held_items, group_moves, root_from_document,
};
