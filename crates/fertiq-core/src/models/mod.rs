pub mod alert;
pub mod biometrics;
pub mod observations;
pub mod pcos;
pub mod rcog;
pub mod semen;
pub mod summary;
