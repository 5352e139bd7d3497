//! Content-policy rule checkers.
//!
//! Each checker is a stateless function over the relevant draft section(s)
//! and the intake facts, and emits at most one violation carrying all of
//! its evidence. Checkers are order-independent; none reads another's
//! output.

pub mod categories;
pub mod invented_data;
pub mod literal_fields;
pub mod narrative;

pub use categories::check_unauthorized_categories;
pub use invented_data::check_invented_data;
pub use literal_fields::check_literal_areas;
pub use narrative::check_functional_narrative;
