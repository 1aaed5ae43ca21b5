mod err;

pub use err::Error;
