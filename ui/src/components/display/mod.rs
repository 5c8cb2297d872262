pub mod banner;
pub mod branding;
pub mod loading_indicator;
pub mod redirect_notice;

pub use banner::*;
pub use branding::*;
pub use loading_indicator::*;
pub use redirect_notice::*;
