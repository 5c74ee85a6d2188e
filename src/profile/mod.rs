pub mod color_profile;
pub mod gradient;
pub mod regulation;
