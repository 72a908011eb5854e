pub mod icon_data;
pub mod writer;
