mod common;
mod contract;
mod courier;
mod rent;
mod vehicle;

pub use self::{common::*, contract::*, courier::*, rent::*, vehicle::*};
