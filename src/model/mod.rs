pub mod outline;
pub mod session;
