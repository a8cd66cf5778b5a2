mod common;
mod scoring;
mod validators;
