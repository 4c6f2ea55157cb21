mod trailed_integer;

pub use trailed_integer::TrailedInteger;
