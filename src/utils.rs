/// Distance and id registers come out high byte first.
pub fn from_be_pair(src: &[u8]) -> u16 {
    (src[0] as u16) << 8 | src[1] as u16
}

pub fn to_be_pair(value: u16) -> [u8; 2] {
    value.to_be_bytes()
}
