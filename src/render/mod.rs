pub mod canvas;
pub mod frame;
pub mod surface;

pub use canvas::CanvasSurface;
pub use frame::draw_frame;
pub use surface::Surface;
