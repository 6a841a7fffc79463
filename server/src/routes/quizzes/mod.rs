mod play;

pub use self::play::*;
