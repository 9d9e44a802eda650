pub mod adhoc;
pub mod backup;
pub mod companies;
pub mod contacts;
pub mod interviews;
pub mod links;
pub mod log;
pub mod pool;
pub mod roles;
pub mod schema;
pub mod stats;
