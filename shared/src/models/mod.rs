pub mod billing;
pub mod child;
pub mod daycare;
pub mod incident;
pub mod user;

pub use billing::*;
pub use child::*;
pub use daycare::*;
pub use incident::*;
pub use user::*;
