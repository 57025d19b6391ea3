mod common;
mod navigation;
mod render;
mod scoring;
