pub mod expect;
pub mod run;
pub mod schema;
