pub mod icon;
pub mod page;
pub mod session;
pub mod snippet;
