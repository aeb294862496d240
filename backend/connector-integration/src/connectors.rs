pub mod rocketgate;

pub use self::rocketgate::Rocketgate;
