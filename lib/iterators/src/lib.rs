extern crate num;

pub mod fib;
