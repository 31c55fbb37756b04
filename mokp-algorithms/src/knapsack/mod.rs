pub mod exhaustive;
pub mod modp;
