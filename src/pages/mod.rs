mod home;

pub use self::home::*;
