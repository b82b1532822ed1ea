mod error;
mod fakes;
