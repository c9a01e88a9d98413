#[path = "arrays/long_array.rs"]
mod long_array;
#[path = "arrays/byte_array.rs"]
mod byte_array;
#[path = "arrays/tracker.rs"]
mod tracker;
