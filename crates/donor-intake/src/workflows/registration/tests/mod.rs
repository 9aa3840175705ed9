mod common;

mod identity;
mod validators;
