//! Pure, side-effect-free indicator computations over a closing-price
//! series. Every function returns a series of exactly the input length;
//! callers never receive a shortened output.

pub mod bollinger;
pub mod moving_average;
pub mod returns;
pub mod rolling;
