pub mod vcgen;
