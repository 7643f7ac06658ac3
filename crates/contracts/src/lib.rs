//! Wire contracts of the university directory API and the static category
//! configuration shared by the frontend.

pub mod domain;
pub mod shared;
pub mod system;
