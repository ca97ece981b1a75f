pub mod delay;
pub mod device;
