pub mod d401_overview;
pub mod d402_roi;
pub mod d403_genres;
pub mod d404_trends;
pub mod d405_people;
pub mod d406_correlations;
pub mod d407_scatter;
