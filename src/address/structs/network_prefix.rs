/// The first two octets of an address, rendered as `"o1.o2"`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct NetworkPrefix(pub [u8; 2]);
