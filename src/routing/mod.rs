//! Client-side routing: the ordered route table and the resolver built on
//! top of it.

pub mod router;
pub mod table;
