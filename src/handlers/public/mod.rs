// Public handlers: no authentication required.
//
// Token acquisition plus the unowned collections (routines, plans and the
// read-only question bank).

pub mod plans;
pub mod questions;
pub mod routines;
pub mod token;
