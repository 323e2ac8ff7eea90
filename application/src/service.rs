mod courier;
mod rent;
mod vehicle;

pub use self::{courier::*, rent::*, vehicle::*};

#[cfg(test)]
pub(crate) mod fixture;
