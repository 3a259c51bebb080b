mod common;

mod selectors;
mod state;
