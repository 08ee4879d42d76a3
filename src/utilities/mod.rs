pub mod bn;
pub mod ct;
pub mod drng;
pub mod pool;
