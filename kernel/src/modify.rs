mod courier;
mod rent;
mod vehicle;

pub use self::{courier::*, rent::*, vehicle::*};
