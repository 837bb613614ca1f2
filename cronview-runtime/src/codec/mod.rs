mod decode;
mod encode;
mod strict;

pub use decode::decode;
pub use encode::encode;
pub use strict::decode_strict;
