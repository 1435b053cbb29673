#![macro_use]

macro_rules! ch {
    ($x:expr, $y:expr, $z:expr) => {($x & $y) | (!$x & $z)}
}

macro_rules! parity {
    ($x:expr, $y:expr, $z:expr) => {$x ^ $y ^ $z}
}

macro_rules! maj {
    ($x:expr, $y:expr, $z:expr) => {($x & $y) | ($x & $z) | ($y & $z)}
}
