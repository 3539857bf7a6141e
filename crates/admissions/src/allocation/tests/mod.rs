mod common;
mod report;
mod wave;
